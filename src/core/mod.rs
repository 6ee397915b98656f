pub mod bootstrap;
pub mod command;
pub mod config;
pub mod descriptor;
pub mod distributor;
pub mod scaffold;

pub use bootstrap::*;
pub use command::*;
pub use config::*;
pub use descriptor::*;
pub use distributor::*;
pub use scaffold::*;
