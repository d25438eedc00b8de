//! Application services: the two engines.

pub mod build_service;
pub mod inference_service;

pub use build_service::{BuildOutcome, EnvironmentBuilder};
pub use inference_service::TaskInference;
