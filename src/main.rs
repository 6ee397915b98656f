use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use create_project::commands::{create_project, resolve_install_dir, seed_templates, CreateOptions};
use create_project::models::ConfigOverrides;

/// create-project - scaffold a new Go or JavaScript project in a workspace
#[derive(Parser)]
#[command(name = "create-project")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project name
    #[arg(short, long)]
    name: Option<String>,

    /// Project language (js/go)
    #[arg(short, long)]
    language: Option<String>,

    /// Root workspace directory for projects
    #[arg(short, long)]
    workspace: Option<PathBuf>,

    /// Directory holding the config templates to distribute
    #[arg(long, value_name = "DIR")]
    templates: Option<PathBuf>,

    /// Go module path prefix (defaults to github.com/yourusername)
    #[arg(long, value_name = "PREFIX")]
    module_prefix: Option<String>,

    /// Check workspace membership against parsed folder paths instead of raw text
    #[arg(long)]
    structural: bool,

    /// Skip `git init`
    #[arg(long)]
    no_git: bool,

    /// Write the bundled config templates into the template directory and exit
    #[arg(long)]
    seed_templates: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let overrides = ConfigOverrides {
        install_dir: cli.templates,
        module_prefix: cli.module_prefix,
        structural: cli.structural,
        no_git: cli.no_git,
    };

    if cli.seed_templates {
        let dir = resolve_install_dir(cli.workspace.as_deref(), overrides)
            .context("resolving the template directory")?;
        seed_templates(&dir).with_context(|| format!("seeding templates in {}", dir.display()))?;
        return Ok(());
    }

    create_project(CreateOptions {
        name: cli.name,
        language: cli.language,
        workspace: cli.workspace,
        overrides,
    })?;
    Ok(())
}
