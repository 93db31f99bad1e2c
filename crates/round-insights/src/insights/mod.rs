//! Deterministic post-round insights.
//!
//! The engine turns a round's resolved facts into exactly three short
//! messages, each with a severity level and an outcome code. It never fetches
//! data, never persists, and never draws randomness: phrasing variety comes
//! from hashing the round id, so identical requests always produce identical
//! copy. The repository, service, and router modules wrap the engine for the
//! API binary.

pub mod config;
pub mod copy_guard;
pub mod domain;
pub mod measured;
pub mod missing;
pub mod onboarding;
pub(crate) mod policy;
pub mod repository;
pub mod router;
pub mod service;
pub mod variants;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

pub use config::{InsightConfig, SelectionThresholds};
pub use copy_guard::CopyViolation;
pub use domain::{
    ComponentName, HolesPlayed, InsightInputError, InsightLevel, InsightMessage,
    MeasuredComponent, OutcomeCode, PerformanceBand, RoundContext, RoundEvidence, RoundId,
    RoundPerformanceFacts, StrokesGainedBreakdown, UserId, VariantSeed,
};
pub use measured::MeasuredSelection;
pub use missing::MissingStats;
pub use onboarding::{round_context, RoundSummary, ONBOARDING_ROUNDS};
pub use repository::{InsightRepository, PersistedInsightRecord, RepositoryError, RoundSource};
pub use router::insight_router;
pub use service::{InsightServiceError, InsightView, RoundInsightService, ViewerTier};
pub use variants::VariantSelection;

/// Generator tag stored alongside every persisted insight set.
pub const MODEL_USED: &str = "deterministic-v1";

/// Everything the engine needs for one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightRequest {
    pub facts: RoundPerformanceFacts,
    #[serde(default)]
    pub strokes_gained: StrokesGainedBreakdown,
    pub context: RoundContext,
    pub seed: VariantSeed,
    #[serde(default)]
    pub selection: VariantSelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightPath {
    Standard,
    Onboarding,
}

/// Intermediate signals behind a result, for debugging and previews.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightTrace {
    pub path: InsightPath,
    pub missing: MissingStats,
    pub missing_count: usize,
    pub selection: MeasuredSelection,
    pub thresholds: SelectionThresholds,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub untracked_callout: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightOutcome {
    pub messages: [String; 3],
    pub levels: [InsightLevel; 3],
    pub outcomes: [OutcomeCode; 3],
    pub trace: InsightTrace,
}

impl InsightOutcome {
    fn from_messages(messages: [InsightMessage; 3], trace: InsightTrace) -> Self {
        let levels = [messages[0].level, messages[1].level, messages[2].level];
        let outcomes = [messages[0].outcome, messages[1].outcome, messages[2].outcome];
        let [first, second, third] = messages;
        Self {
            messages: [first.text, second.text, third.text],
            levels,
            outcomes,
            trace,
        }
    }

    pub fn is_onboarding(&self) -> bool {
        self.trace.path == InsightPath::Onboarding
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

/// Pure insight generator parameterized by tunable thresholds.
#[derive(Debug, Clone, Default)]
pub struct InsightEngine {
    config: InsightConfig,
}

impl InsightEngine {
    pub fn new(config: InsightConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InsightConfig {
        &self.config
    }

    pub fn generate(&self, request: &InsightRequest) -> InsightOutcome {
        let facts = &request.facts;
        let missing = facts.missing();
        let thresholds = self.config.thresholds_for(facts.holes_played);
        let selection = measured::select(&request.strokes_gained, &missing, &thresholds);
        let selector = variants::VariantSelector::new(&request.seed, request.selection);

        if onboarding::is_onboarding(&request.context) {
            let outcome = onboarding::classify(facts, &request.context);
            let messages = onboarding::render(&outcome, facts, &request.context, &selector);
            let trace = InsightTrace {
                path: InsightPath::Onboarding,
                missing_count: missing.count(),
                missing,
                selection,
                thresholds,
                untracked_callout: None,
            };
            return InsightOutcome::from_messages(messages, trace);
        }

        let defining = policy::classify_defining(facts, &selection);
        let scoring = policy::classify_scoring(facts, &selection);
        let action = policy::classify_action(&missing, &selection, &thresholds);
        let untracked = policy::untracked_callout(&request.strokes_gained, &selection);

        let messages = [
            policy::render_defining(&defining, facts, &selector),
            policy::render_scoring(&scoring, facts, untracked, &selector),
            policy::render_action(&action, &selector),
        ];

        let trace = InsightTrace {
            path: InsightPath::Standard,
            missing_count: missing.count(),
            missing,
            selection,
            thresholds,
            untracked_callout: untracked,
        };
        InsightOutcome::from_messages(messages, trace)
    }
}
