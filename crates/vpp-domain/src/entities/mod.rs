//! Domain entities

pub mod battery;

pub use battery::Battery;
