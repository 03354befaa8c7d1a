//! Application ports
//!
//! Port traits live in `vpp-domain`; this module adds the link-time
//! registries through which provider crates make their adapters available.

pub mod registry;

pub use vpp_domain::ports::*;
pub use vpp_domain::repositories::BatteryRepository;
