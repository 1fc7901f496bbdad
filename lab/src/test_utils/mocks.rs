//! Mock implementations of port traits
//!
//! In-memory stand-ins that can be configured for testing and let tests
//! verify what was sent.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::ports::{ExplainRequest, Explainer};
use crate::error::ExplainerError;

// ============================================================================
// Mock Explainer
// ============================================================================

/// What the mock answers with
#[derive(Debug, Clone)]
enum Reply {
    Text(String),
    Fail,
}

#[derive(Debug, Clone)]
pub struct MockExplainer {
    reply: Reply,
    pub requests: Arc<RwLock<Vec<ExplainRequest>>>,
}

impl MockExplainer {
    /// Mock that answers every request with `text`
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Reply::Text(text.to_string()),
            requests: Arc::default(),
        }
    }

    /// Mock whose every call fails with an API error
    pub fn failing() -> Self {
        Self {
            reply: Reply::Fail,
            requests: Arc::default(),
        }
    }

    pub fn get_requests(&self) -> Vec<ExplainRequest> {
        self.requests.read().unwrap().clone()
    }
}

#[async_trait]
impl Explainer for MockExplainer {
    async fn explain(&self, request: &ExplainRequest) -> Result<String, ExplainerError> {
        self.requests.write().unwrap().push(request.clone());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail => Err(ExplainerError::Api {
                status: 500,
                message: "mock failure".to_string(),
            }),
        }
    }
}
