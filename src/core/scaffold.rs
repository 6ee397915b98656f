use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::core::bootstrap::{bootstrapper_for, BootstrapContext};
use crate::core::command::{command_line, CommandRunner};
use crate::core::descriptor::{Registration, WorkspaceDescriptor};
use crate::core::distributor::distribute;
use crate::error::ScaffoldError;
use crate::models::{Config, ProjectRequest, ScaffoldReport, Step, WorkspacePaths};

/// Drives the creation of one project from start to finish
pub struct ProjectScaffolder<'a> {
    runner: &'a dyn CommandRunner,
    config: &'a Config,
    install_config_dir: PathBuf,
}

impl<'a> ProjectScaffolder<'a> {
    pub fn new(runner: &'a dyn CommandRunner, config: &'a Config, install_config_dir: PathBuf) -> Self {
        Self {
            runner,
            config,
            install_config_dir,
        }
    }

    /// Create, initialize and register the project described by `request`.
    ///
    /// Only a project directory that cannot be created is fatal. Every other
    /// problem is recorded in the returned report.
    pub fn scaffold(&self, request: &ProjectRequest) -> Result<ScaffoldReport, ScaffoldError> {
        let paths = WorkspacePaths::for_request(request);
        let mut report = ScaffoldReport::new(paths.project_dir.clone());

        info!(
            "Creating {} project '{}' in {}",
            request.language().display_name(),
            request.name(),
            paths.workspace_root.display()
        );

        let copies = distribute(&paths.global_config_dir, &self.install_config_dir);
        for dest in copies.copied() {
            report.succeeded(Step::CopyConfig(dest.clone()));
        }
        for failure in copies.failures() {
            report.failed(
                Step::CopyConfig(failure.destination.clone()),
                format!("{}: {}", failure.source.display(), failure.error),
            );
        }

        fs::create_dir_all(&paths.project_dir).map_err(|source| ScaffoldError::ProjectDirectory {
            path: paths.project_dir.clone(),
            source,
        })?;
        println!("Created project folder: {}", paths.project_dir.display());

        if self.config.vcs.enabled {
            self.init_git(&paths, &mut report);
        } else {
            info!("Version control disabled, skipping git init");
        }

        let ctx = BootstrapContext {
            paths: &paths,
            runner: self.runner,
            config: self.config,
        };
        bootstrapper_for(request.language()).bootstrap(&ctx, &mut report);

        let descriptor = WorkspaceDescriptor::new(&paths.workspace_file)
            .with_membership(self.config.workspace.membership);
        match descriptor.register(&paths.project_dir) {
            Ok(Registration::Added) => {
                println!("Added {} to the workspace.", request.name());
                report.succeeded(Step::RegisterWorkspace);
            }
            Ok(Registration::AlreadyPresent) => {
                info!("{} is already part of the workspace", request.name());
                report.succeeded(Step::RegisterWorkspace);
            }
            Err(e) => {
                warn!("Error updating workspace file: {}", e);
                report.failed(Step::RegisterWorkspace, e);
            }
        }

        Ok(report)
    }

    fn init_git(&self, paths: &WorkspacePaths, report: &mut ScaffoldReport) {
        let args = ["init"];
        let result = self.runner.run("git", &args, &paths.project_dir);
        match &result {
            Ok(()) => info!("Initialized Git repository."),
            Err(e) => warn!("Error initializing Git repository: {}", e),
        }
        report.record(Step::Command(command_line("git", &args)), result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigTemplate;
    use crate::error::CommandError;
    use std::cell::RefCell;
    use std::path::Path;
    use tempfile::TempDir;

    #[derive(Default)]
    struct CountingRunner {
        calls: RefCell<Vec<String>>,
    }

    impl CommandRunner for CountingRunner {
        fn run(&self, program: &str, args: &[&str], _dir: &Path) -> Result<(), CommandError> {
            self.calls.borrow_mut().push(command_line(program, args));
            Ok(())
        }
    }

    fn install_dir(temp_dir: &TempDir) -> PathBuf {
        let dir = temp_dir.path().join("install");
        fs::create_dir_all(&dir).unwrap();
        for t in ConfigTemplate::ALL {
            fs::write(dir.join(t.file_name()), t.file_name()).unwrap();
        }
        dir
    }

    #[test]
    fn test_scaffold_sequence() {
        let temp_dir = TempDir::new().unwrap();
        let install = install_dir(&temp_dir);
        let ws = temp_dir.path().join("ws");
        let runner = CountingRunner::default();
        let config = Config::default();
        let scaffolder = ProjectScaffolder::new(&runner, &config, install);

        let request = ProjectRequest::new("svc", "go", &ws).unwrap();
        let report = scaffolder.scaffold(&request).unwrap();

        assert!(report.is_clean());
        assert_eq!(runner.calls.borrow()[0], "git init");
        assert_eq!(runner.calls.borrow().len(), 3);
        assert_eq!(report.steps.last().unwrap().step, Step::RegisterWorkspace);
        assert!(ws.join("projects.code-workspace").exists());
    }

    #[test]
    fn test_scaffold_skips_git_when_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let install = install_dir(&temp_dir);
        let runner = CountingRunner::default();
        let mut config = Config::default();
        config.vcs.enabled = false;
        let scaffolder = ProjectScaffolder::new(&runner, &config, install);

        let request = ProjectRequest::new("web", "js", temp_dir.path().join("ws")).unwrap();
        scaffolder.scaffold(&request).unwrap();

        assert!(runner.calls.borrow().iter().all(|c| !c.starts_with("git")));
    }

    #[cfg(unix)]
    #[test]
    fn test_unwritable_project_dir_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let install = install_dir(&temp_dir);
        let ws = temp_dir.path().join("ws");
        fs::create_dir_all(&ws).unwrap();
        // A regular file where the project folder should go
        fs::write(ws.join("taken"), "").unwrap();

        let runner = CountingRunner::default();
        let config = Config::default();
        let scaffolder = ProjectScaffolder::new(&runner, &config, install);
        let request = ProjectRequest::new("taken", "js", &ws).unwrap();

        let err = scaffolder.scaffold(&request).unwrap_err();
        assert!(matches!(err, ScaffoldError::ProjectDirectory { .. }));
        assert!(runner.calls.borrow().is_empty());
        assert!(!ws.join("projects.code-workspace").exists());
    }
}
