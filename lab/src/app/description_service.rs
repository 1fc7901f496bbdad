//! Description service
//!
//! Turns entity snapshots into natural-language text through the explainer
//! port. Failures never reach the caller: they are logged and replaced by a
//! fixed fallback string.

use std::sync::Arc;

use crate::domain::entities::{Entity, EntitySnapshot, Team};
use crate::domain::ports::{ExplainRequest, Explainer};

/// Returned by `describe` when no explanation could be produced
pub const DESCRIBE_FALLBACK: &str = "LLM explanation unavailable.";

/// Returned by `summarize_team` when no summary could be produced
pub const SUMMARY_FALLBACK: &str = "Summary unavailable.";

/// Service for generating entity descriptions
pub struct DescriptionService<X>
where
    X: Explainer + ?Sized,
{
    explainer: Arc<X>,
}

impl<X> DescriptionService<X>
where
    X: Explainer + ?Sized,
{
    pub fn new(explainer: Arc<X>) -> Self {
        Self { explainer }
    }

    /// Describe any entity from its current snapshot
    pub async fn describe(&self, entity: &dyn Entity) -> String {
        self.describe_snapshot(entity.to_dict()).await
    }

    /// Describe a snapshot taken earlier, e.g. under a lock that has since
    /// been released
    pub async fn describe_snapshot(&self, snapshot: EntitySnapshot) -> String {
        self.explain_or(ExplainRequest::describe(snapshot), DESCRIBE_FALLBACK)
            .await
    }

    /// Performance summary of a team's record
    pub async fn summarize_team(&self, team: &Team) -> String {
        self.explain_or(ExplainRequest::team_summary(team.to_dict()), SUMMARY_FALLBACK)
            .await
    }

    async fn explain_or(&self, request: ExplainRequest, fallback: &str) -> String {
        let name = request
            .snapshot
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        match self.explainer.explain(&request).await {
            Ok(text) if !text.trim().is_empty() => {
                tracing::debug!(entity = %name, topic = ?request.topic, "Explanation generated");
                text
            }
            Ok(_) => {
                tracing::error!(entity = %name, topic = ?request.topic, "Explainer returned no text");
                fallback.to_string()
            }
            Err(e) => {
                tracing::error!(entity = %name, topic = ?request.topic, error = %e, "Explainer failed");
                fallback.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::NoopExplainer;
    use crate::domain::ports::ExplainTopic;
    use crate::test_utils::{test_jet, test_team, MockExplainer};

    #[tokio::test]
    async fn describe_returns_explainer_text() {
        let mock = Arc::new(MockExplainer::replying("A fast jet."));
        let service = DescriptionService::new(mock.clone());
        let jet = test_jet();

        assert_eq!(service.describe(&jet).await, "A fast jet.");

        let requests = mock.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].topic, ExplainTopic::Describe);
        assert_eq!(requests[0].snapshot, jet.to_dict());
    }

    #[tokio::test]
    async fn describe_falls_back_on_failure() {
        let service = DescriptionService::new(Arc::new(MockExplainer::failing()));
        assert_eq!(service.describe(&test_jet()).await, DESCRIBE_FALLBACK);
    }

    #[tokio::test]
    async fn describe_falls_back_on_blank_text() {
        let service = DescriptionService::new(Arc::new(MockExplainer::replying("  \n")));
        assert_eq!(service.describe(&test_team()).await, DESCRIBE_FALLBACK);
    }

    #[tokio::test]
    async fn describe_falls_back_without_explainer() {
        let service = DescriptionService::new(Arc::new(NoopExplainer));
        assert_eq!(service.describe(&test_team()).await, DESCRIBE_FALLBACK);
    }

    #[tokio::test]
    async fn summarize_team_sends_record() {
        let mock = Arc::new(MockExplainer::replying("Strong season."));
        let service = DescriptionService::new(mock.clone());

        assert_eq!(service.summarize_team(&test_team()).await, "Strong season.");

        let requests = mock.get_requests();
        assert_eq!(requests[0].topic, ExplainTopic::TeamSummary);
        assert_eq!(requests[0].snapshot["wins"], 3);
        assert_eq!(requests[0].snapshot["win_percentage"], 0.75);
    }

    #[tokio::test]
    async fn summarize_team_falls_back_on_failure() {
        let service = DescriptionService::new(Arc::new(MockExplainer::failing()));
        assert_eq!(service.summarize_team(&test_team()).await, SUMMARY_FALLBACK);
    }
}
