use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use round_insights::insights::repository::RoundSnapshot;
use round_insights::insights::{
    HolesPlayed, InsightRepository, PerformanceBand, PersistedInsightRecord, RepositoryError,
    RoundEvidence, RoundId, RoundPerformanceFacts, RoundSource, RoundSummary,
    StrokesGainedBreakdown, UserId,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

pub(crate) const DEMO_GOLFER: &str = "demo-golfer";

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

fn guard<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable("in-memory store poisoned".to_string()))
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryInsightRepository {
    records: Arc<Mutex<HashMap<(UserId, RoundId), PersistedInsightRecord>>>,
}

impl InsightRepository for InMemoryInsightRepository {
    fn fetch(
        &self,
        user_id: &UserId,
        round_id: &RoundId,
    ) -> Result<Option<PersistedInsightRecord>, RepositoryError> {
        let records = guard(&self.records)?;
        Ok(records.get(&(user_id.clone(), round_id.clone())).cloned())
    }

    fn upsert(&self, record: PersistedInsightRecord) -> Result<(), RepositoryError> {
        let mut records = guard(&self.records)?;
        records.insert((record.user_id.clone(), record.round_id.clone()), record);
        Ok(())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryRoundSource {
    rounds: Arc<Mutex<Vec<RoundSnapshot>>>,
}

impl InMemoryRoundSource {
    pub(crate) fn with_rounds(rounds: Vec<RoundSnapshot>) -> Self {
        Self {
            rounds: Arc::new(Mutex::new(rounds)),
        }
    }

    pub(crate) fn round_ids(&self, user_id: &UserId) -> Result<Vec<RoundId>, RepositoryError> {
        let mut history = self.history(user_id)?;
        history.sort_by(round_insights::insights::onboarding::chronological);
        Ok(history.into_iter().map(|summary| summary.round_id).collect())
    }
}

impl RoundSource for InMemoryRoundSource {
    fn round(
        &self,
        user_id: &UserId,
        round_id: &RoundId,
    ) -> Result<Option<RoundSnapshot>, RepositoryError> {
        let rounds = guard(&self.rounds)?;
        Ok(rounds
            .iter()
            .find(|snapshot| {
                &snapshot.user_id == user_id && &snapshot.summary.round_id == round_id
            })
            .cloned())
    }

    fn history(&self, user_id: &UserId) -> Result<Vec<RoundSummary>, RepositoryError> {
        let rounds = guard(&self.rounds)?;
        Ok(rounds
            .iter()
            .filter(|snapshot| &snapshot.user_id == user_id)
            .map(|snapshot| snapshot.summary.clone())
            .collect())
    }
}

struct SeedRound {
    day: u32,
    score: u16,
    avg_score: Option<f64>,
    band: PerformanceBand,
    evidence: RoundEvidence,
    strokes_gained: StrokesGainedBreakdown,
}

fn tracked(fairways: u8, greens: u8, putts: u8, penalties: u8) -> RoundEvidence {
    RoundEvidence {
        fairways_hit: Some(fairways),
        fairways_possible: Some(14),
        greens_hit: Some(greens),
        greens_possible: Some(18),
        putts_total: Some(putts),
        penalties_total: Some(penalties),
    }
}

fn components(off_tee: f64, approach: f64, putting: f64, penalties: f64) -> StrokesGainedBreakdown {
    StrokesGainedBreakdown {
        off_tee: Some(off_tee),
        approach: Some(approach),
        putting: Some(putting),
        penalties: Some(penalties),
        residual: None,
        total: Some(off_tee + approach + putting + penalties),
    }
}

fn seed_snapshot(index: usize, seed: SeedRound) -> Option<RoundSnapshot> {
    let played_on = NaiveDate::from_ymd_opt(2024, 5, seed.day)?;
    let created_at = played_on.and_hms_opt(18, 30, 0)?.and_utc();
    let to_par = i16::try_from(seed.score).ok()? - 72;

    Some(RoundSnapshot {
        user_id: UserId(DEMO_GOLFER.to_string()),
        summary: RoundSummary {
            round_id: RoundId(format!("demo-round-{}", index + 1)),
            played_on,
            created_at,
            score: seed.score,
        },
        facts: RoundPerformanceFacts {
            score: seed.score,
            to_par,
            avg_score: seed.avg_score,
            band: seed.band,
            holes_played: HolesPlayed::Eighteen,
            evidence: seed.evidence,
        },
        strokes_gained: seed.strokes_gained,
    })
}

/// Six rounds for one golfer: three onboarding rounds, then a mix of
/// fully tracked and score-only rounds.
pub(crate) fn demo_rounds() -> Vec<RoundSnapshot> {
    let seeds = vec![
        SeedRound {
            day: 4,
            score: 94,
            avg_score: None,
            band: PerformanceBand::Unknown,
            evidence: RoundEvidence::default(),
            strokes_gained: StrokesGainedBreakdown::default(),
        },
        SeedRound {
            day: 11,
            score: 91,
            avg_score: Some(94.0),
            band: PerformanceBand::Unknown,
            evidence: RoundEvidence::default(),
            strokes_gained: StrokesGainedBreakdown::default(),
        },
        SeedRound {
            day: 18,
            score: 91,
            avg_score: Some(92.5),
            band: PerformanceBand::Unknown,
            evidence: tracked(6, 4, 35, 2),
            strokes_gained: StrokesGainedBreakdown::default(),
        },
        SeedRound {
            day: 25,
            score: 88,
            avg_score: Some(92.0),
            band: PerformanceBand::Above,
            evidence: tracked(8, 6, 33, 1),
            strokes_gained: components(0.6, -1.9, 0.2, -0.1),
        },
        SeedRound {
            day: 28,
            score: 93,
            avg_score: Some(91.2),
            band: PerformanceBand::Below,
            evidence: RoundEvidence {
                putts_total: Some(36),
                ..RoundEvidence::default()
            },
            strokes_gained: StrokesGainedBreakdown {
                putting: Some(-1.2),
                ..StrokesGainedBreakdown::default()
            },
        },
        SeedRound {
            day: 31,
            score: 90,
            avg_score: Some(91.5),
            band: PerformanceBand::Expected,
            evidence: tracked(7, 5, 31, 3),
            strokes_gained: components(-0.4, -0.2, 0.9, -1.6),
        },
    ];

    seeds
        .into_iter()
        .enumerate()
        .filter_map(|(index, seed)| seed_snapshot(index, seed))
        .collect()
}
