use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::{load_config, ConfigTemplate};
use crate::error::ScaffoldError;
use crate::models::{Config, ConfigOverrides};
use crate::templates::default_content;

/// Template directory to seed. When a workspace is given its
/// create-project.toml is honored, the same as for a create run.
pub fn resolve_install_dir(
    workspace: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<PathBuf, ScaffoldError> {
    let config = match workspace {
        Some(root) => load_config(root, overrides)?,
        None => Config::default().with_overrides(overrides),
    };
    Ok(config.install_config_dir()?)
}

/// Write the bundled config templates into `install_dir`, keeping any
/// file that already exists.
pub fn seed_templates(install_dir: &Path) -> Result<(), ScaffoldError> {
    if !install_dir.exists() {
        fs::create_dir_all(install_dir)?;
        info!("Created template directory: {}", install_dir.display());
    }

    for template in ConfigTemplate::ALL {
        create_file_if_not_exists(&install_dir.join(template.file_name()), default_content(template))?;
    }

    println!("Config templates ready in {}", install_dir.display());
    Ok(())
}

fn create_file_if_not_exists(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    if !path.exists() {
        fs::write(path, content)?;
        info!("Created file: {}", path.display());
    } else {
        info!("File already exists: {}", path.display());
    }
    Ok(())
}
