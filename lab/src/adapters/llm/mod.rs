//! LLM adapter
//!
//! Implementations of the explainer port: an OpenAI-compatible chat client
//! and a no-op stand-in for when no service is configured.

pub mod client;

pub use client::{HttpExplainer, NoopExplainer};
