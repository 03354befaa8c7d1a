//! Configuration management
//!
//! [`AppConfig`] is assembled by [`ConfigLoader`] from defaults, an
//! optional TOML file and `VPP_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
