//! OOP Lab
//!
//! A registry of live, shared simulation objects (transports, pets, teams,
//! vending machines) plus an optional natural-language description service.
//! Uses hexagonal (ports & adapters) architecture: entities and the explainer
//! port live in `domain`, the HTTP client in `adapters`.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod registry;

#[cfg(test)]
mod test_utils;


pub use app::DescriptionService;
pub use config::Config;
pub use error::{DomainError, ExplainerError};
pub use registry::{share, EntityHandle, Handle, LockExt, ObjectRegistry};
