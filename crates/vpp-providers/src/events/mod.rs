//! Event Bus Provider Implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`TokioEventBusProvider`] | Bounded tokio mpsc channel per subscriber |
//! | [`NullEventBusProvider`] | Drops every event |

pub mod null;
pub mod tokio;

pub use self::tokio::TokioEventBusProvider;
pub use null::NullEventBusProvider;
