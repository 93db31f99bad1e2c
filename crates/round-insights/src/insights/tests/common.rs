use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::Value;

use crate::insights::copy_guard;
use crate::insights::repository::{
    InsightRepository, PersistedInsightRecord, RepositoryError, RoundSnapshot, RoundSource,
};
use crate::insights::{
    HolesPlayed, InsightConfig, InsightEngine, InsightOutcome, InsightRequest, MissingStats,
    PerformanceBand, RoundContext, RoundEvidence, RoundId, RoundPerformanceFacts, RoundSummary,
    RoundInsightService, StrokesGainedBreakdown, UserId, VariantSeed, VariantSelection,
};

pub(super) const GOLFER: &str = "golfer-1";

pub(super) fn full_evidence(holes: HolesPlayed) -> RoundEvidence {
    let (fairways, greens) = match holes {
        HolesPlayed::Nine => (7, 9),
        HolesPlayed::Eighteen => (14, 18),
    };
    RoundEvidence {
        fairways_hit: Some(fairways / 2),
        fairways_possible: Some(fairways),
        greens_hit: Some(greens / 2),
        greens_possible: Some(greens),
        putts_total: Some(greens * 2),
        penalties_total: Some(1),
    }
}

/// Evidence with the flagged statistics left unrecorded.
pub(super) fn evidence_missing(missing: MissingStats) -> RoundEvidence {
    let mut evidence = full_evidence(HolesPlayed::Eighteen);
    if missing.fir {
        evidence.fairways_hit = None;
        evidence.fairways_possible = None;
    }
    if missing.gir {
        evidence.greens_hit = None;
        evidence.greens_possible = None;
    }
    if missing.putts {
        evidence.putts_total = None;
    }
    if missing.penalties {
        evidence.penalties_total = None;
    }
    evidence
}

pub(super) fn missing_from_mask(mask: u8) -> MissingStats {
    MissingStats {
        fir: mask & 0b0001 != 0,
        gir: mask & 0b0010 != 0,
        putts: mask & 0b0100 != 0,
        penalties: mask & 0b1000 != 0,
    }
}

pub(super) fn facts(
    score: u16,
    to_par: i16,
    avg_score: Option<f64>,
    band: PerformanceBand,
) -> RoundPerformanceFacts {
    RoundPerformanceFacts {
        score,
        to_par,
        avg_score,
        band,
        holes_played: HolesPlayed::Eighteen,
        evidence: full_evidence(HolesPlayed::Eighteen),
    }
}

pub(super) fn breakdown(
    off_tee: f64,
    approach: f64,
    putting: f64,
    penalties: f64,
) -> StrokesGainedBreakdown {
    StrokesGainedBreakdown {
        off_tee: Some(off_tee),
        approach: Some(approach),
        putting: Some(putting),
        penalties: Some(penalties),
        residual: None,
        total: Some(off_tee + approach + putting + penalties),
    }
}

/// Context for a round well past onboarding.
pub(super) fn established() -> RoundContext {
    RoundContext {
        round_number: 12,
        previous_score: Some(80),
        total_rounds: 12,
    }
}

pub(super) fn request(
    facts: RoundPerformanceFacts,
    strokes_gained: StrokesGainedBreakdown,
) -> InsightRequest {
    InsightRequest {
        facts,
        strokes_gained,
        context: established(),
        seed: VariantSeed {
            round_id: RoundId("round-100".to_string()),
            variant_offset: 0,
        },
        selection: VariantSelection::Rotating,
    }
}

pub(super) fn engine() -> InsightEngine {
    InsightEngine::new(InsightConfig::default())
}

pub(super) fn assert_clean(outcome: &InsightOutcome) {
    for message in &outcome.messages {
        if let Err(violation) = copy_guard::check(message) {
            panic!("rendered copy failed the guard: {violation}");
        }
    }
}

pub(super) fn sentence_count(text: &str) -> usize {
    text.matches(['.', '!']).count()
}

pub(super) fn summary(id: &str, day: u32, score: u16) -> RoundSummary {
    RoundSummary {
        round_id: RoundId(id.to_string()),
        played_on: NaiveDate::from_ymd_opt(2025, 5, day).expect("valid date"),
        created_at: Utc
            .with_ymd_and_hms(2025, 5, day, 18, 0, 0)
            .single()
            .expect("valid timestamp"),
        score,
    }
}

pub(super) fn snapshot(user: &str, id: &str, day: u32, score: u16) -> RoundSnapshot {
    let to_par = i16::try_from(score).expect("score fits") - 72;
    RoundSnapshot {
        user_id: UserId(user.to_string()),
        summary: summary(id, day, score),
        facts: facts(score, to_par, Some(84.0), PerformanceBand::Expected),
        strokes_gained: breakdown(0.8, -0.6, -1.9, -0.2),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryInsights {
    records: Arc<Mutex<HashMap<(UserId, RoundId), PersistedInsightRecord>>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryInsights {
    pub(super) fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl InsightRepository for MemoryInsights {
    fn fetch(
        &self,
        user_id: &UserId,
        round_id: &RoundId,
    ) -> Result<Option<PersistedInsightRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(&(user_id.clone(), round_id.clone())).cloned())
    }

    fn upsert(&self, record: PersistedInsightRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        self.writes.fetch_add(1, Ordering::SeqCst);
        guard.insert((record.user_id.clone(), record.round_id.clone()), record);
        Ok(())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRounds {
    rounds: Arc<Mutex<Vec<RoundSnapshot>>>,
}

impl MemoryRounds {
    pub(super) fn with_rounds(rounds: Vec<RoundSnapshot>) -> Self {
        Self {
            rounds: Arc::new(Mutex::new(rounds)),
        }
    }
}

impl RoundSource for MemoryRounds {
    fn round(
        &self,
        user_id: &UserId,
        round_id: &RoundId,
    ) -> Result<Option<RoundSnapshot>, RepositoryError> {
        let guard = self.rounds.lock().expect("round mutex poisoned");
        Ok(guard
            .iter()
            .find(|snapshot| &snapshot.user_id == user_id && &snapshot.summary.round_id == round_id)
            .cloned())
    }

    fn history(&self, user_id: &UserId) -> Result<Vec<RoundSummary>, RepositoryError> {
        let guard = self.rounds.lock().expect("round mutex poisoned");
        Ok(guard
            .iter()
            .filter(|snapshot| &snapshot.user_id == user_id)
            .map(|snapshot| snapshot.summary.clone())
            .collect())
    }
}

pub(super) struct UnavailableInsights;

impl InsightRepository for UnavailableInsights {
    fn fetch(
        &self,
        _user_id: &UserId,
        _round_id: &RoundId,
    ) -> Result<Option<PersistedInsightRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn upsert(&self, _record: PersistedInsightRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Reads miss and every write is refused as a conflicting update.
pub(super) struct ConflictingInsights;

impl InsightRepository for ConflictingInsights {
    fn fetch(
        &self,
        _user_id: &UserId,
        _round_id: &RoundId,
    ) -> Result<Option<PersistedInsightRecord>, RepositoryError> {
        Ok(None)
    }

    fn upsert(&self, _record: PersistedInsightRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Conflict)
    }
}

/// Five rounds for `GOLFER` (days 1-5) and one for another golfer.
pub(super) fn seeded_rounds() -> MemoryRounds {
    MemoryRounds::with_rounds(vec![
        snapshot(GOLFER, "r-1", 1, 88),
        snapshot(GOLFER, "r-2", 2, 85),
        snapshot(GOLFER, "r-3", 3, 85),
        snapshot(GOLFER, "r-4", 4, 83),
        snapshot(GOLFER, "r-5", 5, 86),
        snapshot("golfer-2", "other-1", 1, 79),
    ])
}

pub(super) fn build_service() -> (
    RoundInsightService<MemoryInsights, MemoryRounds>,
    Arc<MemoryInsights>,
) {
    let insights = Arc::new(MemoryInsights::default());
    let rounds = Arc::new(seeded_rounds());
    let service = RoundInsightService::new(insights.clone(), rounds, InsightConfig::default());
    (service, insights)
}

pub(super) fn golfer() -> UserId {
    UserId(GOLFER.to_string())
}

pub(super) fn round(id: &str) -> RoundId {
    RoundId(id.to_string())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
