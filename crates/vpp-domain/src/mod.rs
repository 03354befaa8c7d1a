//! # Domain Layer
//!
//! Core types and port traits for the VPP battery service.
//!
//! The domain layer owns the vocabulary shared by every other crate:
//! batteries, range queries and their aggregates, the events that flow
//! from registration to persistence, and the ports through which the
//! application layer talks to caches, event buses and repositories.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Persisted battery entity |
//! | [`value_objects`] | Range query specs, aggregates, ingestion payloads |
//! | [`events`] | Domain events carried by the event bus |
//! | [`ports`] | Cache and event bus provider traits |
//! | [`repositories`] | Battery repository trait |
//! | [`error`] | Shared error and result types |

pub mod constants;
pub mod entities;
pub mod error;
pub mod events;
pub mod ports;
pub mod repositories;
pub mod value_objects;

pub use error::{Error, Result};
