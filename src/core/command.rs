use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

use crate::error::CommandError;

/// Runs an external program to completion in a working directory
pub trait CommandRunner {
    /// Run `program` with `args` in `working_dir`, blocking until it exits.
    ///
    /// A non-zero exit is returned as an error; callers decide whether it
    /// is fatal.
    fn run(&self, program: &str, args: &[&str], working_dir: &Path) -> Result<(), CommandError>;
}

/// Spawns real processes, streaming their output to this process' console
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str], working_dir: &Path) -> Result<(), CommandError> {
        debug!("$ {} (in {})", command_line(program, args), working_dir.display());

        let status = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| CommandError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CommandError::NonZeroExit {
                program: program.to_string(),
                code: status.code(),
            })
        }
    }
}

/// Render a command the way a user would type it
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
