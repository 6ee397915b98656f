//! Language-specific project bootstrapping.
//!
//! Every step is best-effort: a failing command or copy is recorded in the
//! report and the next step still runs.

use std::path::Path;
use tracing::{info, warn};

use crate::core::command::{command_line, CommandRunner};
use crate::core::distributor::apply_to_project;
use crate::models::{Config, Language, ScaffoldReport, Step, WorkspacePaths};

/// Everything a bootstrapper needs for one project
pub struct BootstrapContext<'a> {
    pub paths: &'a WorkspacePaths,
    pub runner: &'a dyn CommandRunner,
    pub config: &'a Config,
}

impl BootstrapContext<'_> {
    /// Run a command in the project directory and record its outcome
    pub fn run_step(&self, program: &str, args: &[&str], report: &mut ScaffoldReport) {
        let line = command_line(program, args);
        let result = self.runner.run(program, args, &self.paths.project_dir);
        if let Err(e) = &result {
            warn!("Error running `{}`: {}", line, e);
        }
        report.record(Step::Command(line), result);
    }

    /// Copy the language's config subset from the workspace into the project
    pub fn apply_config(&self, language: Language, report: &mut ScaffoldReport) {
        let copies = apply_to_project(
            &self.paths.global_config_dir,
            &self.paths.project_dir,
            language.config_subset(),
        );
        for dest in copies.copied() {
            report.succeeded(Step::CopyConfig(dest.clone()));
        }
        for failure in copies.failures() {
            report.failed(
                Step::CopyConfig(failure.destination.clone()),
                format!("{}: {}", failure.source.display(), failure.error),
            );
        }
    }
}

/// Initializes a project's toolchain for one language
pub trait LanguageBootstrapper {
    fn language(&self) -> Language;

    fn bootstrap(&self, ctx: &BootstrapContext<'_>, report: &mut ScaffoldReport);
}

/// Pick the bootstrapper registered for `language`
pub fn bootstrapper_for(language: Language) -> Box<dyn LanguageBootstrapper> {
    match language {
        Language::JavaScript => Box::new(JavaScriptBootstrapper),
        Language::Go => Box::new(GoBootstrapper),
    }
}

/// `npm init`, dev tooling install, then ESLint and Prettier configs
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScriptBootstrapper;

impl LanguageBootstrapper for JavaScriptBootstrapper {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn bootstrap(&self, ctx: &BootstrapContext<'_>, report: &mut ScaffoldReport) {
        let js = &ctx.config.javascript;
        let pm = js.package_manager.as_str();

        ctx.run_step(pm, &["init", "-y"], report);

        if js.dev_dependencies.is_empty() {
            info!("No dev dependencies configured, skipping install");
        } else {
            let mut args = vec!["install", "--save-dev"];
            args.extend(js.dev_dependencies.iter().map(String::as_str));
            ctx.run_step(pm, &args, report);
        }

        ctx.apply_config(self.language(), report);
        info!("JavaScript project setup complete.");
    }
}

/// `go mod init`, linter fetch, then the GolangCI config
#[derive(Debug, Clone, Copy, Default)]
pub struct GoBootstrapper;

impl GoBootstrapper {
    /// Module path for a project directory: `<prefix>/<folder name>`
    pub fn module_path(prefix: &str, project_dir: &Path) -> String {
        let base = project_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let prefix = prefix.trim_end_matches('/');
        if prefix.is_empty() {
            base
        } else {
            format!("{}/{}", prefix, base)
        }
    }
}

impl LanguageBootstrapper for GoBootstrapper {
    fn language(&self) -> Language {
        Language::Go
    }

    fn bootstrap(&self, ctx: &BootstrapContext<'_>, report: &mut ScaffoldReport) {
        let go = &ctx.config.go;
        let module = Self::module_path(&go.module_prefix, &ctx.paths.project_dir);

        ctx.run_step("go", &["mod", "init", module.as_str()], report);
        ctx.run_step("go", &["get", "-u", go.lint_tool.as_str()], report);

        ctx.apply_config(self.language(), report);
        info!("Go project setup complete.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;
    use crate::models::ProjectRequest;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Default)]
    struct ScriptedRunner {
        calls: RefCell<Vec<String>>,
        fail_program: Option<&'static str>,
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&self, program: &str, args: &[&str], _dir: &Path) -> Result<(), CommandError> {
            self.calls.borrow_mut().push(command_line(program, args));
            if self.fail_program.is_some_and(|p| p == program) {
                return Err(CommandError::NonZeroExit {
                    program: program.to_string(),
                    code: Some(1),
                });
            }
            Ok(())
        }
    }

    fn workspace(temp_dir: &TempDir, name: &str, lang: &str) -> WorkspacePaths {
        let req = ProjectRequest::new(name, lang, temp_dir.path()).unwrap();
        let paths = WorkspacePaths::for_request(&req);
        fs::create_dir_all(&paths.project_dir).unwrap();
        fs::create_dir_all(&paths.global_config_dir).unwrap();
        for t in crate::core::ConfigTemplate::ALL {
            fs::write(paths.global_config_dir.join(t.file_name()), t.file_name()).unwrap();
        }
        paths
    }

    #[test]
    fn test_module_path() {
        assert_eq!(
            GoBootstrapper::module_path("github.com/yourusername", Path::new("/ws/svc")),
            "github.com/yourusername/svc"
        );
        assert_eq!(
            GoBootstrapper::module_path("example.com/me/", Path::new("/ws/svc")),
            "example.com/me/svc"
        );
        assert_eq!(GoBootstrapper::module_path("", Path::new("/ws/svc")), "svc");
    }

    #[test]
    fn test_bootstrapper_registry() {
        for &lang in Language::all() {
            assert_eq!(bootstrapper_for(lang).language(), lang);
        }
    }

    #[test]
    fn test_javascript_steps() {
        let temp_dir = TempDir::new().unwrap();
        let paths = workspace(&temp_dir, "web", "js");
        let runner = ScriptedRunner::default();
        let config = Config::default();
        let ctx = BootstrapContext { paths: &paths, runner: &runner, config: &config };
        let mut report = ScaffoldReport::new(paths.project_dir.clone());

        JavaScriptBootstrapper.bootstrap(&ctx, &mut report);

        assert_eq!(
            *runner.calls.borrow(),
            vec!["npm init -y", "npm install --save-dev eslint prettier"]
        );
        assert!(report.is_clean());
        assert!(paths.project_dir.join(".eslintrc.json").exists());
        assert!(paths.project_dir.join(".prettierrc").exists());
        assert!(!paths.project_dir.join(".golangci.yml").exists());
    }

    #[test]
    fn test_go_steps_continue_after_failure() {
        let temp_dir = TempDir::new().unwrap();
        let paths = workspace(&temp_dir, "svc", "go");
        let runner = ScriptedRunner {
            fail_program: Some("go"),
            ..Default::default()
        };
        let config = Config::default();
        let ctx = BootstrapContext { paths: &paths, runner: &runner, config: &config };
        let mut report = ScaffoldReport::new(paths.project_dir.clone());

        GoBootstrapper.bootstrap(&ctx, &mut report);

        assert_eq!(
            *runner.calls.borrow(),
            vec![
                "go mod init github.com/yourusername/svc",
                "go get -u github.com/golangci/golangci-lint/cmd/golangci-lint",
            ]
        );
        assert_eq!(report.failures().count(), 2);
        assert!(paths.project_dir.join(".golangci.yml").exists());
    }

    #[test]
    fn test_missing_global_config_is_soft_failure() {
        let temp_dir = TempDir::new().unwrap();
        let paths = workspace(&temp_dir, "web", "js");
        fs::remove_file(paths.global_config_dir.join(".prettierrc")).unwrap();
        let runner = ScriptedRunner::default();
        let config = Config::default();
        let ctx = BootstrapContext { paths: &paths, runner: &runner, config: &config };
        let mut report = ScaffoldReport::new(paths.project_dir.clone());

        JavaScriptBootstrapper.bootstrap(&ctx, &mut report);

        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(
            failures[0].step,
            Step::CopyConfig(paths.project_dir.join(".prettierrc"))
        );
        assert!(paths.project_dir.join(".eslintrc.json").exists());
    }
}
