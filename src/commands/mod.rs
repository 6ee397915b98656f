pub mod create;
pub mod seed_templates;

pub use create::*;
pub use seed_templates::*;
