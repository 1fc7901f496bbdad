//! OpenAI-compatible explanation client
//!
//! Works against any server exposing `POST {base}/chat/completions`
//! (OpenAI, Ollama, llama.cpp server, vLLM).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::domain::ports::{ExplainRequest, Explainer};
use crate::error::ExplainerError;

/// Implementation of the explainer port over HTTP
pub struct HttpExplainer {
    http: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl HttpExplainer {
    pub fn new(
        base_url: &str,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, ExplainerError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
        })
    }

    /// Build a client from config; `None` when no explainer URL is configured
    pub fn from_config(config: &Config) -> Result<Option<Self>, ExplainerError> {
        let Some(url) = config.explainer_url.as_deref() else {
            return Ok(None);
        };

        Self::new(
            url,
            config.explainer_model.clone(),
            config.explainer_api_key.clone(),
            config.explainer_timeout,
        )
        .map(Some)
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<String, ExplainerError> {
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ExplainerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ExplainerError::Deserialization(e.to_string()))?;

        extract_answer(body)
    }
}

/// First choice's content, trimmed; blank or missing counts as no answer
fn extract_answer(body: ChatResponse) -> Result<String, ExplainerError> {
    body.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or(ExplainerError::EmptyResponse)
}

#[async_trait]
impl Explainer for HttpExplainer {
    async fn explain(&self, request: &ExplainRequest) -> Result<String, ExplainerError> {
        let prompt = request.prompt();
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.topic.instruction(),
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: 0.2,
        };

        let mut builder = self
            .http
            .post(self.api_url("/chat/completions"))
            .json(&body);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;
        self.handle_response(response).await
    }
}

/// Explainer used when no service is configured; always unavailable
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopExplainer;

#[async_trait]
impl Explainer for NoopExplainer {
    async fn explain(&self, _request: &ExplainRequest) -> Result<String, ExplainerError> {
        Err(ExplainerError::Unavailable(
            "no explainer configured".to_string(),
        ))
    }
}
