//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and
//! domain layers.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered TOML + environment configuration |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extension for foreign errors |
//! | [`bootstrap`] | Wiring of providers and services from configuration |
//! | [`constants`] | Infrastructure defaults |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::AppContext;
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
