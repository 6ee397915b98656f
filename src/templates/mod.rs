//! Bundled default contents for the shared config templates
//!
//! These are written into the install-level `global-config` directory by
//! `--seed-templates` so a fresh install has something to distribute.

pub mod go;
pub mod javascript;

use crate::core::ConfigTemplate;

/// Get the bundled default content for a template
pub fn default_content(template: ConfigTemplate) -> &'static str {
    match template {
        ConfigTemplate::EsLint => javascript::ESLINT,
        ConfigTemplate::Prettier => javascript::PRETTIER,
        ConfigTemplate::GolangCi => go::GOLANGCI,
    }
}
