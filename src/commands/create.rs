use std::path::PathBuf;
use tracing::info;

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::core::{load_config, ProjectScaffolder, SystemCommandRunner};
use crate::error::ScaffoldError;
use crate::models::{ConfigOverrides, Language, ProjectRequest, ScaffoldReport, StepStatus};

/// Values collected from the command line. Missing ones are prompted for.
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    pub name: Option<String>,
    pub language: Option<String>,
    pub workspace: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

/// Create a new project in a workspace
pub fn create_project(options: CreateOptions) -> Result<ScaffoldReport, ScaffoldError> {
    let workspace = match options.workspace {
        Some(w) => w,
        None => PathBuf::from(prompt_text(
            "Enter the root workspace directory (where all project folders will be created)",
        )?),
    };

    let name = match options.name {
        Some(n) => n,
        None => prompt_text("Enter project name")?,
    };

    let language = match options.language {
        Some(l) => l,
        None => prompt_for_language()?.token().to_string(),
    };

    let request = ProjectRequest::new(&name, &language, &workspace)?;
    let config = load_config(request.workspace_root(), options.overrides)?;
    let install_dir = config.install_config_dir()?;
    info!("Using config templates from {}", install_dir.display());

    let runner = SystemCommandRunner;
    let scaffolder = ProjectScaffolder::new(&runner, &config, install_dir);
    let report = scaffolder.scaffold(&request)?;

    print_summary(&request, &report);
    Ok(report)
}

fn prompt_text(prompt: &str) -> Result<String, ScaffoldError> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()
        .map(|s| s.trim().to_string())
        .map_err(|e| ScaffoldError::Prompt(format!("Failed to get user input: {}", e)))
}

/// Prompt user to select a language interactively
fn prompt_for_language() -> Result<Language, ScaffoldError> {
    let languages = Language::all();
    let items: Vec<String> = languages
        .iter()
        .map(|l| format!("{} ({})", l.display_name(), l.token()))
        .collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select project language")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| ScaffoldError::Prompt(format!("Failed to get user input: {}", e)))?;

    Ok(languages[selection])
}

fn print_summary(request: &ProjectRequest, report: &ScaffoldReport) {
    println!();
    if report.is_clean() {
        println!(
            "{} project '{}' created at {}",
            request.language().display_name(),
            request.name(),
            report.project_dir.display()
        );
        return;
    }

    println!(
        "{} project '{}' created at {} with problems:",
        request.language().display_name(),
        request.name(),
        report.project_dir.display()
    );
    for outcome in report.failures() {
        if let StepStatus::Failed(reason) = &outcome.status {
            println!("  - {}: {}", outcome.step, reason);
        }
    }
}
