//! Application use cases. Orchestrate domain logic via ports.

pub mod estimation_service;

pub use estimation_service::{EstimationService, GESTATION_OFFSET_DAYS, JITTER_DAYS};
