use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;
use crate::models::Language;

/// Name of the shared config directory inside a workspace
pub const GLOBAL_CONFIG_DIR: &str = "global-config";

/// Name of the multi-root workspace descriptor file
pub const WORKSPACE_FILE: &str = "projects.code-workspace";

/// A validated request to create one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    name: String,
    language: Language,
    workspace_root: PathBuf,
}

impl ProjectRequest {
    /// Validate the raw inputs and build a request.
    ///
    /// The language token is checked here, so an unsupported language is
    /// rejected before anything is written to disk.
    pub fn new(
        name: &str,
        language: &str,
        workspace_root: impl AsRef<Path>,
    ) -> Result<Self, ScaffoldError> {
        validate_project_name(name)?;
        let language = language.parse::<Language>()?;

        let root = workspace_root.as_ref();
        let workspace_root = if root.is_absolute() {
            root.to_path_buf()
        } else {
            std::env::current_dir()?.join(root)
        };

        Ok(Self {
            name: name.to_string(),
            language,
            workspace_root,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }
}

/// Paths derived from a request. Built once and handed to every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspacePaths {
    pub workspace_root: PathBuf,
    pub global_config_dir: PathBuf,
    pub workspace_file: PathBuf,
    pub project_dir: PathBuf,
}

impl WorkspacePaths {
    pub fn for_request(request: &ProjectRequest) -> Self {
        let root = request.workspace_root().to_path_buf();
        Self {
            global_config_dir: root.join(GLOBAL_CONFIG_DIR),
            workspace_file: root.join(WORKSPACE_FILE),
            project_dir: root.join(request.name()),
            workspace_root: root,
        }
    }
}

fn validate_project_name(name: &str) -> Result<(), ScaffoldError> {
    if name.is_empty() {
        return Err(ScaffoldError::InvalidProjectName(
            "Project name cannot be empty".to_string(),
        ));
    }

    for c in name.chars() {
        if !c.is_alphanumeric() && c != '_' && c != '-' && c != '.' {
            return Err(ScaffoldError::InvalidProjectName(format!(
                "Invalid character '{}' in project name. Use only letters, digits, '.', '_' or '-'.",
                c
            )));
        }
    }

    if name.starts_with('.') || name.starts_with('-') {
        return Err(ScaffoldError::InvalidProjectName(
            "Project name cannot start with '.' or '-'".to_string(),
        ));
    }

    Ok(())
}
