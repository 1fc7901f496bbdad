//! Domain layer
//!
//! Contains the entity model with no knowledge of how it is stored or described.
//! - `entities`: the lab objects
//! - `capabilities`: traits giving transport variants their shared behaviour
//! - `ports`: Trait definitions for external dependencies

pub mod capabilities;
pub mod entities;
pub mod ports;
