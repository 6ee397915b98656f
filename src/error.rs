use std::path::PathBuf;
use thiserror::Error;

use crate::models::ConfigError;

/// Main error type for create-project
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unsupported language '{given}'. Please choose one of: {allowed}")]
    UnsupportedLanguage { given: String, allowed: String },

    #[error("Invalid project name: {0}")]
    InvalidProjectName(String),

    #[error("Failed to create project folder {path}: {source}")]
    ProjectDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reported by an external command invocation
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {}", exit_label(.code))]
    NonZeroExit { program: String, code: Option<i32> },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {}", c),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Errors related to the workspace descriptor file
#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("Failed to read workspace file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),

    #[error("Failed to write workspace file {0}: {1}")]
    WriteError(PathBuf, std::io::Error),

    #[error("Failed to parse workspace file {0}: {1}")]
    Parse(PathBuf, String),

    #[error("Workspace file {0} has no \"folders\" list")]
    MissingFolders(PathBuf),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
