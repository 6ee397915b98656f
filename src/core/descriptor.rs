//! Multi-root workspace descriptor (`projects.code-workspace`).
//!
//! The document is edited as text so that user formatting and any extra
//! settings survive untouched. Only the new folder entry is spliced in.
//!
//! There is no file locking: two processes registering projects in the same
//! workspace at once race on the read-modify-write and one update may be lost.

use regex::Regex;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info};

use crate::error::DescriptorError;
use crate::models::MembershipCheck;

/// Content written when the descriptor does not exist yet
pub const EMPTY_DESCRIPTOR: &str = "{\"folders\": [], \"settings\": {}}\n";

static FOLDERS_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"folders"\s*:\s*\["#).expect("folders pattern is valid"));

/// What `register` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Added,
    AlreadyPresent,
}

/// Owner of read-modify-write access to one descriptor file
#[derive(Debug, Clone)]
pub struct WorkspaceDescriptor {
    path: PathBuf,
    membership: MembershipCheck,
}

impl WorkspaceDescriptor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            membership: MembershipCheck::default(),
        }
    }

    pub fn with_membership(mut self, membership: MembershipCheck) -> Self {
        self.membership = membership;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add `project_path` to the folder list unless it is already there
    pub fn register(&self, project_path: &Path) -> Result<Registration, DescriptorError> {
        self.ensure_exists()?;

        let content = fs::read_to_string(&self.path)
            .map_err(|e| DescriptorError::ReadError(self.path.clone(), e))?;

        if self.contains(&content, project_path)? {
            debug!(
                "{} is already listed in {}",
                project_path.display(),
                self.path.display()
            );
            return Ok(Registration::AlreadyPresent);
        }

        let updated = self.insert_entry(&content, project_path)?;
        fs::write(&self.path, updated)
            .map_err(|e| DescriptorError::WriteError(self.path.clone(), e))?;

        info!("Added {} to the workspace", project_path.display());
        Ok(Registration::Added)
    }

    /// Paths currently listed under `folders`, in document order
    pub fn folders(&self) -> Result<Vec<String>, DescriptorError> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| DescriptorError::ReadError(self.path.clone(), e))?;
        self.parse_folders(&content)
    }

    fn ensure_exists(&self) -> Result<(), DescriptorError> {
        if self.path.exists() {
            return Ok(());
        }
        fs::write(&self.path, EMPTY_DESCRIPTOR)
            .map_err(|e| DescriptorError::WriteError(self.path.clone(), e))?;
        info!("Created workspace file: {}", self.path.display());
        Ok(())
    }

    fn contains(&self, content: &str, project_path: &Path) -> Result<bool, DescriptorError> {
        match self.membership {
            MembershipCheck::Textual => {
                let quoted = self.json_string(project_path)?;
                let bare = &quoted[1..quoted.len() - 1];
                Ok(content.contains(bare))
            }
            MembershipCheck::Structural => {
                let wanted = project_path.to_string_lossy();
                Ok(self.parse_folders(content)?.iter().any(|p| *p == wanted))
            }
        }
    }

    fn insert_entry(&self, content: &str, project_path: &Path) -> Result<String, DescriptorError> {
        let at = folders_list_start(content)
            .ok_or_else(|| DescriptorError::MissingFolders(self.path.clone()))?;

        let entry = format!("{{ \"path\": {} }}", self.json_string(project_path)?);
        let list_is_empty = content[at..].trim_start().starts_with(']');

        let mut updated = String::with_capacity(content.len() + entry.len() + 2);
        updated.push_str(&content[..at]);
        updated.push_str(&entry);
        if !list_is_empty {
            updated.push_str(", ");
        }
        updated.push_str(&content[at..]);
        Ok(updated)
    }

    fn parse_folders(&self, content: &str) -> Result<Vec<String>, DescriptorError> {
        let doc: Value = serde_json::from_str(content)
            .map_err(|e| DescriptorError::Parse(self.path.clone(), e.to_string()))?;
        let folders = doc
            .get("folders")
            .and_then(Value::as_array)
            .ok_or_else(|| DescriptorError::MissingFolders(self.path.clone()))?;

        Ok(folders
            .iter()
            .filter_map(|f| f.get("path").and_then(Value::as_str))
            .map(str::to_string)
            .collect())
    }

    fn json_string(&self, project_path: &Path) -> Result<String, DescriptorError> {
        serde_json::to_string(&project_path.to_string_lossy())
            .map_err(|e| DescriptorError::Parse(self.path.clone(), e.to_string()))
    }
}

/// Byte offset just past the `[` of the top-level `"folders"` list.
///
/// Keys with the same name inside nested objects (e.g. under `settings`)
/// are skipped.
fn folders_list_start(content: &str) -> Option<usize> {
    let bytes = content.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                let start = i;
                i += 1;
                while i < bytes.len() && bytes[i] != b'"' {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
                if depth == 1 && content.get(start..=i) == Some("\"folders\"") {
                    if let Some(open) = FOLDERS_OPEN.find(&content[start..]) {
                        return Some(start + open.end());
                    }
                }
            }
            b'{' | b'[' => depth += 1,
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
        i += 1;
    }

    None
}
