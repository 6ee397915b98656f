pub mod config;
pub mod language;
pub mod report;
pub mod request;

pub use config::*;
pub use language::*;
pub use report::*;
pub use request::*;
