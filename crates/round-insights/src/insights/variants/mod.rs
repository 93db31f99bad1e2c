//! Deterministic phrasing rotation.
//!
//! A slot's base index is the SipHash-1-3 digest (fixed zero keys) of the
//! round id, the outcome code, and the pool key. The variant offset then
//! rotates from that base, so one full cycle of offsets visits every entry
//! of the pool exactly once.

pub(crate) mod pools;

use std::hash::Hasher;

use serde::{Deserialize, Serialize};
use siphasher::sip::SipHasher13;

use super::domain::{ComponentName, OutcomeCode, VariantSeed};
use pools::Pool;

/// Every template pool the composer can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolKey {
    ScoreOnlyNoBaseline,
    ScoreOnlyBetter,
    ScoreOnlyMatched,
    ScoreOnlyWorse,
    StandoutLost,
    Standout,
    NearEven,
    ScoringNoBaseline,
    ScoringNear,
    ScoringHigher,
    ScoringStrong,
    ScoringNeutral,
    ScoringLeak,
    ScoringNetPositive,
    UntrackedSwing,
    TrackingClause,
    GenericAction,
    AreaAction(ComponentName),
    OnboardingFirst,
    OnboardingBetter,
    OnboardingSame,
    OnboardingWorse,
    OnboardingHabit,
    OnboardingRemaining,
}

impl PoolKey {
    pub fn all() -> Vec<PoolKey> {
        let mut keys = vec![
            PoolKey::ScoreOnlyNoBaseline,
            PoolKey::ScoreOnlyBetter,
            PoolKey::ScoreOnlyMatched,
            PoolKey::ScoreOnlyWorse,
            PoolKey::StandoutLost,
            PoolKey::Standout,
            PoolKey::NearEven,
            PoolKey::ScoringNoBaseline,
            PoolKey::ScoringNear,
            PoolKey::ScoringHigher,
            PoolKey::ScoringStrong,
            PoolKey::ScoringNeutral,
            PoolKey::ScoringLeak,
            PoolKey::ScoringNetPositive,
            PoolKey::UntrackedSwing,
            PoolKey::TrackingClause,
            PoolKey::GenericAction,
        ];
        keys.extend(ComponentName::ordered().into_iter().map(PoolKey::AreaAction));
        keys.extend([
            PoolKey::OnboardingFirst,
            PoolKey::OnboardingBetter,
            PoolKey::OnboardingSame,
            PoolKey::OnboardingWorse,
            PoolKey::OnboardingHabit,
            PoolKey::OnboardingRemaining,
        ]);
        keys
    }

    pub(crate) fn pool(self) -> &'static Pool {
        match self {
            PoolKey::ScoreOnlyNoBaseline => &pools::SCORE_ONLY_NO_BASELINE,
            PoolKey::ScoreOnlyBetter => &pools::SCORE_ONLY_BETTER,
            PoolKey::ScoreOnlyMatched => &pools::SCORE_ONLY_MATCHED,
            PoolKey::ScoreOnlyWorse => &pools::SCORE_ONLY_WORSE,
            PoolKey::StandoutLost => &pools::STANDOUT_LOST,
            PoolKey::Standout => &pools::STANDOUT,
            PoolKey::NearEven => &pools::NEAR_EVEN,
            PoolKey::ScoringNoBaseline => &pools::SCORING_NO_BASELINE,
            PoolKey::ScoringNear => &pools::SCORING_NEAR,
            PoolKey::ScoringHigher => &pools::SCORING_HIGHER,
            PoolKey::ScoringStrong => &pools::SCORING_STRONG,
            PoolKey::ScoringNeutral => &pools::SCORING_NEUTRAL,
            PoolKey::ScoringLeak => &pools::SCORING_LEAK,
            PoolKey::ScoringNetPositive => &pools::SCORING_NET_POSITIVE,
            PoolKey::UntrackedSwing => &pools::UNTRACKED_SWING,
            PoolKey::TrackingClause => &pools::TRACKING_CLAUSE,
            PoolKey::GenericAction => &pools::GENERIC_ACTION,
            PoolKey::AreaAction(ComponentName::OffTee) => &pools::ACTION_OFF_TEE,
            PoolKey::AreaAction(ComponentName::Approach) => &pools::ACTION_APPROACH,
            PoolKey::AreaAction(ComponentName::Putting) => &pools::ACTION_PUTTING,
            PoolKey::AreaAction(ComponentName::Penalties) => &pools::ACTION_PENALTIES,
            PoolKey::OnboardingFirst => &pools::ONBOARDING_FIRST,
            PoolKey::OnboardingBetter => &pools::ONBOARDING_BETTER,
            PoolKey::OnboardingSame => &pools::ONBOARDING_SAME,
            PoolKey::OnboardingWorse => &pools::ONBOARDING_WORSE,
            PoolKey::OnboardingHabit => &pools::ONBOARDING_HABIT,
            PoolKey::OnboardingRemaining => &pools::ONBOARDING_REMAINING,
        }
    }

    pub fn len(self) -> usize {
        self.pool().len()
    }

    /// Stable slot name mixed into the seed so sibling sentences never share one.
    pub fn slot(self) -> String {
        match self {
            PoolKey::AreaAction(name) => format!("action:{}", name.key()),
            other => format!("{other:?}"),
        }
    }
}

/// How a variant index is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum VariantSelection {
    #[default]
    Rotating,
    /// Pin every slot to one index (taken modulo the pool size).
    Fixed { index: usize },
}

/// Picks phrasings for one round render.
#[derive(Debug, Clone, Copy)]
pub struct VariantSelector<'a> {
    seed: &'a VariantSeed,
    selection: VariantSelection,
}

impl<'a> VariantSelector<'a> {
    pub fn new(seed: &'a VariantSeed, selection: VariantSelection) -> Self {
        Self { seed, selection }
    }

    pub fn index(&self, outcome: OutcomeCode, key: PoolKey) -> usize {
        let len = key.len();
        match self.selection {
            VariantSelection::Fixed { index } => index % len,
            VariantSelection::Rotating => {
                let base = slot_hash(self.seed, outcome, key) % len as u64;
                let offset = u64::from(self.seed.variant_offset) % len as u64;
                ((base + offset) % len as u64) as usize
            }
        }
    }

    pub fn template(&self, outcome: OutcomeCode, key: PoolKey) -> &'static str {
        key.pool()[self.index(outcome, key)]
    }

    pub fn render(&self, outcome: OutcomeCode, key: PoolKey, values: &[(&str, String)]) -> String {
        fill(self.template(outcome, key), values)
    }
}

fn slot_hash(seed: &VariantSeed, outcome: OutcomeCode, key: PoolKey) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write(seed.round_id.0.as_bytes());
    hasher.write_u8(0xff);
    hasher.write(outcome.as_str().as_bytes());
    hasher.write_u8(0xff);
    hasher.write(key.slot().as_bytes());
    hasher.finish()
}

/// Replaces `{name}` placeholders. Unknown placeholders are left for the copy guard.
pub fn fill(template: &str, values: &[(&str, String)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}
