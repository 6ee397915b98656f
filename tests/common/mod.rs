//! Common test utilities

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use create_project::core::{command_line, CommandRunner, ConfigTemplate};
use create_project::error::CommandError;

/// Create an empty workspace root and a seeded template directory
pub fn create_test_workspace() -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let workspace_root = temp_dir.path().join("ws");
    fs::create_dir_all(&workspace_root).expect("Failed to create workspace dir");

    let install_dir = temp_dir.path().join("install").join("global-config");
    seed_install_dir(&install_dir, &ConfigTemplate::ALL);

    (temp_dir, workspace_root, install_dir)
}

/// Write a distinct body for each template into `dir`
pub fn seed_install_dir(dir: &Path, templates: &[ConfigTemplate]) {
    fs::create_dir_all(dir).expect("Failed to create template dir");
    for t in templates {
        fs::write(dir.join(t.file_name()), format!("// {} template\n", t.file_name()))
            .expect("Failed to write template");
    }
}

/// Records every command instead of running it.
///
/// `git init` creates a `.git` directory so tests can look for the marker.
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: RefCell<Vec<(String, PathBuf)>>,
    pub failing: Vec<&'static str>,
}

impl RecordingRunner {
    pub fn failing(programs: &[&'static str]) -> Self {
        Self {
            failing: programs.to_vec(),
            ..Default::default()
        }
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(c, _)| c.clone()).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str], working_dir: &Path) -> Result<(), CommandError> {
        self.calls
            .borrow_mut()
            .push((command_line(program, args), working_dir.to_path_buf()));

        if self.failing.iter().any(|p| *p == program) {
            return Err(CommandError::NonZeroExit {
                program: program.to_string(),
                code: Some(1),
            });
        }

        if program == "git" && args.first() == Some(&"init") {
            fs::create_dir_all(working_dir.join(".git")).expect("Failed to create .git");
        }
        Ok(())
    }
}
