//! Average-free policy for a user's first rounds.
//!
//! Until a baseline exists, rounds are only compared with the round logged
//! immediately before them. Copy never mentions strokes gained or averages.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::copy_guard::guarded;
use super::domain::{
    InsightLevel, InsightMessage, OutcomeCode, RoundContext, RoundId, RoundPerformanceFacts,
};
use super::policy::format_to_par;
use super::variants::{PoolKey, VariantSelector};

pub const ONBOARDING_ROUNDS: u32 = 3;
/// Score difference treated as "the same" as the previous round.
pub const SAME_SCORE_TOLERANCE: f64 = 0.1;

pub fn is_onboarding(context: &RoundContext) -> bool {
    (1..=ONBOARDING_ROUNDS).contains(&context.round_number)
}

/// Minimal round metadata needed to place a round in a user's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round_id: RoundId,
    pub played_on: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub score: u16,
}

/// Strict total order over a user's rounds: play date, creation time, id.
pub fn chronological(left: &RoundSummary, right: &RoundSummary) -> Ordering {
    left.played_on
        .cmp(&right.played_on)
        .then_with(|| left.created_at.cmp(&right.created_at))
        .then_with(|| left.round_id.cmp(&right.round_id))
}

/// Derives the ordinal context for `round_id`, or `None` if it is not in `history`.
pub fn round_context(history: &[RoundSummary], round_id: &RoundId) -> Option<RoundContext> {
    let mut ordered: Vec<&RoundSummary> = history.iter().collect();
    ordered.sort_by(|left, right| chronological(left, right));

    let position = ordered
        .iter()
        .position(|summary| &summary.round_id == round_id)?;

    Some(RoundContext {
        round_number: u32::try_from(position + 1).unwrap_or(u32::MAX),
        previous_score: position
            .checked_sub(1)
            .and_then(|index| ordered.get(index))
            .map(|summary| summary.score),
        total_rounds: u32::try_from(ordered.len()).unwrap_or(u32::MAX),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScoreTrend {
    Better,
    Same,
    Worse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OnboardingOutcome {
    First,
    Compared {
        round: u32,
        previous: u16,
        trend: ScoreTrend,
    },
}

impl OnboardingOutcome {
    pub(crate) fn code(&self) -> OutcomeCode {
        match self {
            OnboardingOutcome::First => OutcomeCode::Ob1,
            OnboardingOutcome::Compared { round, trend, .. } => match (*round, trend) {
                (2, ScoreTrend::Better) => OutcomeCode::Ob2Better,
                (2, ScoreTrend::Same) => OutcomeCode::Ob2Same,
                (2, ScoreTrend::Worse) => OutcomeCode::Ob2Worse,
                (_, ScoreTrend::Better) => OutcomeCode::Ob3Better,
                (_, ScoreTrend::Same) => OutcomeCode::Ob3Same,
                (_, ScoreTrend::Worse) => OutcomeCode::Ob3Worse,
            },
        }
    }
}

/// A round 2 or 3 without a previous score has no comparison point, like round 1.
pub(crate) fn classify(facts: &RoundPerformanceFacts, context: &RoundContext) -> OnboardingOutcome {
    let previous = match context.previous_score {
        Some(previous) if context.round_number > 1 => previous,
        _ => return OnboardingOutcome::First,
    };

    let diff = f64::from(facts.score) - f64::from(previous);
    let trend = if diff < -SAME_SCORE_TOLERANCE {
        ScoreTrend::Better
    } else if diff > SAME_SCORE_TOLERANCE {
        ScoreTrend::Worse
    } else {
        ScoreTrend::Same
    };

    OnboardingOutcome::Compared {
        round: context.round_number,
        previous,
        trend,
    }
}

pub(crate) fn render(
    outcome: &OnboardingOutcome,
    facts: &RoundPerformanceFacts,
    context: &RoundContext,
    selector: &VariantSelector<'_>,
) -> [InsightMessage; 3] {
    let code = outcome.code();

    let (summary, level) = match outcome {
        OnboardingOutcome::First => (
            selector.render(
                code,
                PoolKey::OnboardingFirst,
                &[
                    ("score", facts.score.to_string()),
                    ("to_par", format_to_par(facts.to_par)),
                    ("holes", facts.holes_played.count().to_string()),
                ],
            ),
            InsightLevel::Success,
        ),
        OnboardingOutcome::Compared {
            round,
            previous,
            trend,
        } => {
            let (key, level) = match trend {
                ScoreTrend::Better => (PoolKey::OnboardingBetter, InsightLevel::Great),
                ScoreTrend::Same => (PoolKey::OnboardingSame, InsightLevel::Success),
                ScoreTrend::Worse => (PoolKey::OnboardingWorse, InsightLevel::Info),
            };
            let gap = facts.score.abs_diff(*previous);
            let text = selector.render(
                code,
                key,
                &[
                    ("round", round.to_string()),
                    ("score", facts.score.to_string()),
                    ("previous", previous.to_string()),
                    ("gap", pluralize(u32::from(gap), "stroke")),
                ],
            );
            (text, level)
        }
    };

    let habit = selector.render(code, PoolKey::OnboardingHabit, &[]);

    let remaining = (ONBOARDING_ROUNDS + 1).saturating_sub(context.round_number.max(1));
    let unlock = selector.render(
        code,
        PoolKey::OnboardingRemaining,
        &[("rounds", pluralize(remaining, "more round"))],
    );

    [
        InsightMessage {
            text: guarded(summary),
            level,
            outcome: code,
        },
        InsightMessage {
            text: guarded(habit),
            level: InsightLevel::Info,
            outcome: code,
        },
        InsightMessage {
            text: guarded(unlock),
            level: InsightLevel::Info,
            outcome: code,
        },
    ]
}

fn pluralize(count: u32, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
