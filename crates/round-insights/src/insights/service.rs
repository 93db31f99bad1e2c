use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::domain::{InsightMessage, RoundId, UserId, VariantSeed};
use super::onboarding::{is_onboarding, round_context};
use super::repository::{
    InsightRepository, PersistedInsightRecord, RepositoryError, RoundSnapshot, RoundSource,
};
use super::variants::VariantSelection;
use super::{InsightConfig, InsightEngine, InsightOutcome, InsightRequest};

/// Subscription tier of the user viewing a round's insights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerTier {
    #[default]
    Free,
    Premium,
}

/// Tier-filtered insight set returned to API callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightView {
    pub round_id: RoundId,
    pub messages: Vec<InsightMessage>,
    pub visible_count: usize,
    pub total_count: usize,
    pub onboarding: bool,
    pub variant_offset: u32,
    pub generated_at: DateTime<Utc>,
    pub model_used: String,
}

type InFlightKey = (UserId, RoundId);

/// Service composing round lookup, the insight engine, and insight storage.
pub struct RoundInsightService<R, S> {
    insights: Arc<R>,
    rounds: Arc<S>,
    engine: Arc<InsightEngine>,
    in_flight: Mutex<HashMap<InFlightKey, Arc<Mutex<()>>>>,
}

impl<R, S> RoundInsightService<R, S>
where
    R: InsightRepository + 'static,
    S: RoundSource + 'static,
{
    pub fn new(insights: Arc<R>, rounds: Arc<S>, config: InsightConfig) -> Self {
        Self {
            insights,
            rounds,
            engine: Arc::new(InsightEngine::new(config)),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    pub fn engine(&self) -> &InsightEngine {
        &self.engine
    }

    /// Returns the stored insights for a round, generating them on first request.
    pub fn insights(
        &self,
        user_id: &UserId,
        round_id: &RoundId,
        tier: ViewerTier,
    ) -> Result<InsightView, InsightServiceError> {
        if let Some(record) = self.insights.fetch(user_id, round_id)? {
            debug!(user_id = %user_id.0, round_id = %round_id.0, "insight cache hit");
            return Ok(self.view(&record, tier));
        }

        let record = self.coalesced(user_id, round_id, |existing| match existing {
            Some(record) => Ok(CoalescedWrite::Existing(record)),
            None => self.generate(user_id, round_id, 0).map(CoalescedWrite::Fresh),
        })?;

        Ok(self.view(&record, tier))
    }

    /// Recomputes a round's insights. Standard rounds rotate to the next phrasing.
    pub fn regenerate(
        &self,
        user_id: &UserId,
        round_id: &RoundId,
        tier: ViewerTier,
    ) -> Result<InsightView, InsightServiceError> {
        let record = self.coalesced(user_id, round_id, |existing| {
            let offset = existing.map(|record| record.variant_offset);
            self.generate_with(user_id, round_id, |onboarding| match offset {
                Some(offset) if !onboarding => offset.saturating_add(1),
                Some(offset) => offset,
                None => 0,
            })
            .map(CoalescedWrite::Fresh)
        })?;

        info!(
            user_id = %user_id.0,
            round_id = %round_id.0,
            variant_offset = record.variant_offset,
            "insights regenerated"
        );
        Ok(self.view(&record, tier))
    }

    /// Runs the engine without touching storage.
    pub fn preview(&self, request: &InsightRequest) -> InsightOutcome {
        self.engine.generate(request)
    }

    fn view(&self, record: &PersistedInsightRecord, tier: ViewerTier) -> InsightView {
        let messages = record.insight_messages();
        let total_count = messages.len();
        let visible_count = match tier {
            ViewerTier::Premium => total_count,
            ViewerTier::Free => self.engine.config().free_visible_messages.min(total_count),
        };

        InsightView {
            round_id: record.round_id.clone(),
            messages: messages.into_iter().take(visible_count).collect(),
            visible_count,
            total_count,
            onboarding: record.is_onboarding(),
            variant_offset: record.variant_offset,
            generated_at: record.generated_at,
            model_used: record.model_used.clone(),
        }
    }

    /// Serializes work per `(user, round)`. The closure sees the record stored
    /// when the lock was acquired, so waiting callers observe the first write.
    fn coalesced<F>(
        &self,
        user_id: &UserId,
        round_id: &RoundId,
        work: F,
    ) -> Result<PersistedInsightRecord, InsightServiceError>
    where
        F: FnOnce(Option<PersistedInsightRecord>) -> Result<CoalescedWrite, InsightServiceError>,
    {
        let key = (user_id.clone(), round_id.clone());
        let slot = {
            let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(in_flight.entry(key.clone()).or_default())
        };

        let result = {
            let _held = slot.lock().unwrap_or_else(PoisonError::into_inner);
            self.insights
                .fetch(user_id, round_id)
                .map_err(InsightServiceError::from)
                .and_then(work)
                .and_then(|write| match write {
                    CoalescedWrite::Existing(record) => {
                        debug!(
                            user_id = %user_id.0,
                            round_id = %round_id.0,
                            "coalesced onto stored insights"
                        );
                        Ok(record)
                    }
                    CoalescedWrite::Fresh(record) => {
                        self.insights.upsert(record.clone())?;
                        Ok(record)
                    }
                })
        };

        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        // Only the map and this caller still hold the slot: nobody is waiting on it.
        if in_flight
            .get(&key)
            .is_some_and(|current| Arc::ptr_eq(current, &slot) && Arc::strong_count(&slot) == 2)
        {
            in_flight.remove(&key);
        }

        result
    }

    fn generate(
        &self,
        user_id: &UserId,
        round_id: &RoundId,
        variant_offset: u32,
    ) -> Result<PersistedInsightRecord, InsightServiceError> {
        self.generate_with(user_id, round_id, |_| variant_offset)
    }

    fn generate_with(
        &self,
        user_id: &UserId,
        round_id: &RoundId,
        offset_for: impl FnOnce(bool) -> u32,
    ) -> Result<PersistedInsightRecord, InsightServiceError> {
        let snapshot = self
            .rounds
            .round(user_id, round_id)?
            .filter(|snapshot| &snapshot.user_id == user_id)
            .ok_or(RepositoryError::NotFound)?;

        let request = self.request_for(user_id, &snapshot, offset_for)?;
        let outcome = self.engine.generate(&request);
        let codes = outcome.outcomes.map(|code| code.as_str());

        info!(
            user_id = %user_id.0,
            round_id = %round_id.0,
            round_number = request.context.round_number,
            outcomes = ?codes,
            variant_offset = request.seed.variant_offset,
            "insights generated"
        );

        Ok(PersistedInsightRecord::from_outcome(
            user_id.clone(),
            round_id.clone(),
            &outcome,
            request.seed.variant_offset,
            Utc::now(),
        ))
    }

    fn request_for(
        &self,
        user_id: &UserId,
        snapshot: &RoundSnapshot,
        offset_for: impl FnOnce(bool) -> u32,
    ) -> Result<InsightRequest, InsightServiceError> {
        let mut history = self.rounds.history(user_id)?;
        if !history
            .iter()
            .any(|summary| summary.round_id == snapshot.summary.round_id)
        {
            history.push(snapshot.summary.clone());
        }

        let context = round_context(&history, &snapshot.summary.round_id)
            .ok_or(RepositoryError::NotFound)?;

        Ok(InsightRequest {
            facts: snapshot.facts.clone(),
            strokes_gained: snapshot.strokes_gained,
            context,
            seed: VariantSeed {
                round_id: snapshot.summary.round_id.clone(),
                variant_offset: offset_for(is_onboarding(&context)),
            },
            selection: VariantSelection::Rotating,
        })
    }
}

enum CoalescedWrite {
    Existing(PersistedInsightRecord),
    Fresh(PersistedInsightRecord),
}

/// Error raised by the insight service.
#[derive(Debug, thiserror::Error)]
pub enum InsightServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("insight worker stopped before finishing: {0}")]
    Worker(String),
}
