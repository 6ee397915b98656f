//! Copies the shared lint/format config files from the install directory
//! into a workspace, and from the workspace into individual projects.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// One of the shared config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigTemplate {
    EsLint,
    Prettier,
    GolangCi,
}

impl ConfigTemplate {
    /// The complete template set
    pub const ALL: [ConfigTemplate; 3] = [
        ConfigTemplate::EsLint,
        ConfigTemplate::Prettier,
        ConfigTemplate::GolangCi,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            ConfigTemplate::EsLint => ".eslintrc.json",
            ConfigTemplate::Prettier => ".prettierrc",
            ConfigTemplate::GolangCi => ".golangci.yml",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ConfigTemplate::EsLint => "ESLint config",
            ConfigTemplate::Prettier => "Prettier config",
            ConfigTemplate::GolangCi => "GolangCI config",
        }
    }
}

/// A single file that could not be copied
#[derive(Debug)]
pub struct CopyFailure {
    pub template: ConfigTemplate,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub error: std::io::Error,
}

/// Outcome of a batch of copies. Each file succeeds or fails on its own.
#[derive(Debug, Default)]
pub struct DistributionReport {
    copied: Vec<PathBuf>,
    failures: Vec<CopyFailure>,
}

impl DistributionReport {
    pub fn copied(&self) -> &[PathBuf] {
        &self.copied
    }

    pub fn failures(&self) -> &[CopyFailure] {
        &self.failures
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Ensure `global_config_dir` exists and copy every template from
/// `install_config_dir` into it, overwriting existing copies.
pub fn distribute(global_config_dir: &Path, install_config_dir: &Path) -> DistributionReport {
    let mut report = DistributionReport::default();

    if let Err(e) = fs::create_dir_all(global_config_dir) {
        warn!(
            "Error creating global config directory {}: {}",
            global_config_dir.display(),
            e
        );
        for template in ConfigTemplate::ALL {
            report.failures.push(CopyFailure {
                template,
                source: install_config_dir.join(template.file_name()),
                destination: global_config_dir.join(template.file_name()),
                error: std::io::Error::new(e.kind(), e.to_string()),
            });
        }
        return report;
    }

    if same_dir(global_config_dir, install_config_dir) {
        info!(
            "Global config directory {} is the template directory, nothing to copy",
            global_config_dir.display()
        );
        return report;
    }

    copy_templates(&ConfigTemplate::ALL, install_config_dir, global_config_dir, &mut report);
    report
}

/// Copy `subset` of the already distributed templates into `project_dir`
pub fn apply_to_project(
    global_config_dir: &Path,
    project_dir: &Path,
    subset: &[ConfigTemplate],
) -> DistributionReport {
    let mut report = DistributionReport::default();
    copy_templates(subset, global_config_dir, project_dir, &mut report);
    report
}

// fs::copy truncates the destination first, so copying a directory onto
// itself would empty every template.
fn same_dir(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn copy_templates(
    templates: &[ConfigTemplate],
    from_dir: &Path,
    to_dir: &Path,
    report: &mut DistributionReport,
) {
    for &template in templates {
        let source = from_dir.join(template.file_name());
        let destination = to_dir.join(template.file_name());

        match fs::copy(&source, &destination) {
            Ok(_) => {
                info!("Copied {} to {}", template.file_name(), destination.display());
                report.copied.push(destination);
            }
            Err(error) => {
                warn!(
                    "Error copying {} from {} to {}: {}",
                    template.description(),
                    source.display(),
                    destination.display(),
                    error
                );
                report.failures.push(CopyFailure {
                    template,
                    source,
                    destination,
                    error,
                });
            }
        }
    }
}
