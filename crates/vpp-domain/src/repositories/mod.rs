//! Repository interfaces

pub mod battery_repository;

pub use battery_repository::BatteryRepository;
