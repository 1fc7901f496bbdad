//! Domain ports
//!
//! Interfaces to collaborators outside the entity model. The only one is the
//! explainer that turns snapshots into prose.

pub mod explainer;

pub use explainer::{ExplainRequest, ExplainTopic, Explainer};
