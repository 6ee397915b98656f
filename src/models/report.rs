//! Diagnostics accumulated while scaffolding a project

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// One step of the scaffold sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum Step {
    /// Copy of one file, named by its destination
    CopyConfig(PathBuf),
    /// External command, named by its command line
    Command(String),
    /// Workspace descriptor update
    RegisterWorkspace,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::CopyConfig(dest) => write!(f, "copy {}", dest.display()),
            Step::Command(line) => write!(f, "run `{}`", line),
            Step::RegisterWorkspace => write!(f, "update workspace file"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub step: Step,
    pub status: StepStatus,
}

/// Result of a scaffold run that got past the fatal checks.
///
/// Soft failures are recorded here instead of aborting the run.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub project_dir: PathBuf,
    pub steps: Vec<StepOutcome>,
}

impl ScaffoldReport {
    pub fn new(project_dir: PathBuf) -> Self {
        Self {
            project_dir,
            steps: Vec::new(),
        }
    }

    pub fn succeeded(&mut self, step: Step) {
        self.steps.push(StepOutcome {
            step,
            status: StepStatus::Succeeded,
        });
    }

    pub fn failed(&mut self, step: Step, reason: impl fmt::Display) {
        self.steps.push(StepOutcome {
            step,
            status: StepStatus::Failed(reason.to_string()),
        });
    }

    /// Record the outcome of a fallible step
    pub fn record<E: fmt::Display>(&mut self, step: Step, result: Result<(), E>) {
        match result {
            Ok(()) => self.succeeded(step),
            Err(e) => self.failed(step, e),
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps
            .iter()
            .filter(|s| matches!(s.status, StepStatus::Failed(_)))
    }

    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_tracks_failures() {
        let mut report = ScaffoldReport::new(PathBuf::from("/ws/app"));
        report.succeeded(Step::Command("git init".to_string()));
        assert!(report.is_clean());

        report.record::<String>(
            Step::Command("npm init -y".to_string()),
            Err("npm not found".to_string()),
        );
        report.record::<String>(Step::RegisterWorkspace, Ok(()));

        assert!(!report.is_clean());
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].step, Step::Command("npm init -y".to_string()));
        assert_eq!(failures[0].status, StepStatus::Failed("npm not found".to_string()));
    }

    #[test]
    fn test_step_display() {
        assert_eq!(Step::Command("go mod init x".to_string()).to_string(), "run `go mod init x`");
        assert_eq!(Step::RegisterWorkspace.to_string(), "update workspace file");
    }
}
