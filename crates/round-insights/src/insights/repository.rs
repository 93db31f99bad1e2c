use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    InsightLevel, InsightMessage, OutcomeCode, RoundId, RoundPerformanceFacts,
    StrokesGainedBreakdown, UserId,
};
use super::onboarding::RoundSummary;
use super::InsightOutcome;

/// Stored insight set for one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedInsightRecord {
    pub user_id: UserId,
    pub round_id: RoundId,
    pub messages: [String; 3],
    pub levels: [InsightLevel; 3],
    pub outcomes: [OutcomeCode; 3],
    pub variant_offset: u32,
    pub generated_at: DateTime<Utc>,
    pub model_used: String,
}

impl PersistedInsightRecord {
    pub fn from_outcome(
        user_id: UserId,
        round_id: RoundId,
        outcome: &InsightOutcome,
        variant_offset: u32,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            round_id,
            messages: outcome.messages.clone(),
            levels: outcome.levels,
            outcomes: outcome.outcomes,
            variant_offset,
            generated_at,
            model_used: super::MODEL_USED.to_string(),
        }
    }

    pub fn is_onboarding(&self) -> bool {
        self.outcomes.iter().any(|code| code.is_onboarding())
    }

    pub fn insight_messages(&self) -> Vec<InsightMessage> {
        self.messages
            .iter()
            .zip(self.levels)
            .zip(self.outcomes)
            .map(|((text, level), outcome)| InsightMessage {
                text: text.clone(),
                level,
                outcome,
            })
            .collect()
    }
}

/// A round owned by a user, with the facts the engine consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub user_id: UserId,
    pub summary: RoundSummary,
    pub facts: RoundPerformanceFacts,
    #[serde(default)]
    pub strokes_gained: StrokesGainedBreakdown,
}

/// Storage for generated insight sets.
pub trait InsightRepository: Send + Sync {
    fn fetch(
        &self,
        user_id: &UserId,
        round_id: &RoundId,
    ) -> Result<Option<PersistedInsightRecord>, RepositoryError>;
    fn upsert(&self, record: PersistedInsightRecord) -> Result<(), RepositoryError>;
}

/// Read access to logged rounds.
pub trait RoundSource: Send + Sync {
    /// Returns `None` when the round does not exist or belongs to another user.
    fn round(
        &self,
        user_id: &UserId,
        round_id: &RoundId,
    ) -> Result<Option<RoundSnapshot>, RepositoryError>;
    fn history(&self, user_id: &UserId) -> Result<Vec<RoundSummary>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The store refused a write that raced another writer for the same round.
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
