//! create-project - scaffolds JavaScript and Go projects inside a workspace
//!
//! A project is created by making its folder, running `git init`, running
//! the language's init commands, copying the shared lint/format configs, and
//! listing the folder in the workspace's `projects.code-workspace` file.
//!
//! # Architecture
//!
//! - **commands**: CLI command implementations (create, seed templates)
//! - **core**: Command runner, config distribution, bootstrappers, workspace descriptor, scaffolder
//! - **models**: Data structures (language, request, paths, config, report)
//! - **templates**: Bundled default config templates
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;
pub mod templates;

pub use error::{Result, ScaffoldError};
