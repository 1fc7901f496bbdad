//! Application layer
//!
//! Services that coordinate domain entities with external collaborators.

pub mod description_service;

pub use description_service::{DescriptionService, DESCRIBE_FALLBACK, SUMMARY_FALLBACK};
