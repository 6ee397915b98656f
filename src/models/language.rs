//! Language enumeration for project bootstrapping

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::ConfigTemplate;
use crate::error::ScaffoldError;

/// Supported project languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// JavaScript project managed by a Node package manager
    #[serde(rename = "js", alias = "javascript")]
    JavaScript,
    /// Go module
    #[serde(rename = "go", alias = "golang")]
    Go,
}

impl Language {
    /// Returns the display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::Go => "Go",
        }
    }

    /// Returns the token accepted on the command line
    pub fn token(&self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::Go => "go",
        }
    }

    /// Config templates copied into a project of this language
    pub fn config_subset(&self) -> &'static [ConfigTemplate] {
        match self {
            Language::JavaScript => &[ConfigTemplate::EsLint, ConfigTemplate::Prettier],
            Language::Go => &[ConfigTemplate::GolangCi],
        }
    }

    /// Returns all available languages
    pub fn all() -> &'static [Language] {
        &[Language::JavaScript, Language::Go]
    }

    fn allowed_tokens() -> String {
        Self::all()
            .iter()
            .map(|l| l.token())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Language {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "js" | "javascript" => Ok(Language::JavaScript),
            "go" | "golang" => Ok(Language::Go),
            _ => Err(ScaffoldError::UnsupportedLanguage {
                given: s.to_string(),
                allowed: Self::allowed_tokens(),
            }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
