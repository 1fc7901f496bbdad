//! Adapters layer
//!
//! Concrete explainer implementations: a chat-completions HTTP client and a
//! no-op stand-in.

pub mod llm;

pub use llm::{HttpExplainer, NoopExplainer};
