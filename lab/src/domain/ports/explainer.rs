//! Explainer port trait
//!
//! Defines the interface to a text-generation service that turns an entity
//! snapshot into natural language.

use async_trait::async_trait;

use crate::domain::entities::{pretty_json, EntitySnapshot};
use crate::error::ExplainerError;

/// What kind of text is wanted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplainTopic {
    /// A plain description of any entity
    Describe,
    /// A performance summary of a team record
    TeamSummary,
}

impl ExplainTopic {
    /// Instruction sent ahead of the snapshot
    pub fn instruction(&self) -> &'static str {
        match self {
            ExplainTopic::Describe => {
                "Explain the following simulation object in plain language for a student. \
                 Mention what kind of object it is and what its current state means."
            }
            ExplainTopic::TeamSummary => {
                "Summarize the following team's performance in two or three sentences, \
                 using its win/loss record and win percentage."
            }
        }
    }
}

/// A request for generated text about one entity
#[derive(Debug, Clone, PartialEq)]
pub struct ExplainRequest {
    pub topic: ExplainTopic,
    pub snapshot: EntitySnapshot,
}

impl ExplainRequest {
    pub fn describe(snapshot: EntitySnapshot) -> Self {
        Self {
            topic: ExplainTopic::Describe,
            snapshot,
        }
    }

    pub fn team_summary(snapshot: EntitySnapshot) -> Self {
        Self {
            topic: ExplainTopic::TeamSummary,
            snapshot,
        }
    }

    /// The user prompt: snapshot rendered as pretty JSON
    pub fn prompt(&self) -> String {
        format!("```json\n{}\n```", pretty_json(&self.snapshot))
    }
}

/// Port trait for the explanation service
#[async_trait]
pub trait Explainer: Send + Sync {
    /// Generate text for the request. Any failure is reported as an error;
    /// deciding what to show instead is up to the caller.
    async fn explain(&self, request: &ExplainRequest) -> Result<String, ExplainerError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Entity, Pet};

    #[test]
    fn prompt_contains_snapshot_json() {
        let pet = Pet::with_species("Rex", 3, "Dog");
        let request = ExplainRequest::describe(pet.to_dict());
        let prompt = request.prompt();

        assert!(prompt.starts_with("```json"));
        assert!(prompt.contains("\"species\": \"Dog\""));
        assert!(prompt.contains(&pet.id().to_string()));
    }

    #[test]
    fn topics_have_distinct_instructions() {
        assert_ne!(
            ExplainTopic::Describe.instruction(),
            ExplainTopic::TeamSummary.instruction()
        );
    }
}
