use std::path::Path;
use tracing::info;

use crate::error::ScaffoldError;
use crate::models::{Config, ConfigOverrides};

/// Load configuration from the workspace root with CLI overrides
pub fn load_config(workspace_root: &Path, overrides: ConfigOverrides) -> Result<Config, ScaffoldError> {
    let config = Config::load_from_dir(workspace_root)?;
    let config = config.with_overrides(overrides);

    info!(
        "Configuration loaded: package_manager={}, module_prefix={}, membership={:?}",
        config.javascript.package_manager, config.go.module_prefix, config.workspace.membership
    );

    Ok(config)
}
