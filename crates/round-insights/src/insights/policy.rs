//! Three-slot decision trees for the standard (post-onboarding) path.
//!
//! Slot 1 says what defined the round, slot 2 what it meant for the score,
//! slot 3 what to do next round. Each slot classifies into a data-carrying
//! outcome first and renders second, so a code can never be rendered with
//! data from a different branch.

use super::config::SelectionThresholds;
use super::copy_guard::guarded;
use super::domain::{
    ComponentName, InsightLevel, InsightMessage, MeasuredComponent, OutcomeCode,
    PerformanceBand, RoundPerformanceFacts, StrokesGainedBreakdown,
};
use super::measured::MeasuredSelection;
use super::missing::MissingStats;
use super::variants::{PoolKey, VariantSelector};

/// Strokes-gained magnitude separating "near even" from a clear gain or loss.
pub const NEUTRAL_BAND: f64 = 0.3;
/// Score-only "matches average" tolerance for an 18-hole round.
pub const MATCHED_AVERAGE_TOLERANCE: f64 = 0.1;
/// Message 2 "close to average" band for an 18-hole round.
pub const NEAR_AVERAGE_BAND: f64 = 1.5;
/// Untracked swing at or beyond this always earns its own sentence.
pub const UNTRACKED_CALLOUT: f64 = 1.5;
pub const NEXT_ROUND_LEAD_IN: &str = "Next round:";

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum AverageComparison {
    NoBaseline,
    Better { avg: f64, diff: f64 },
    Matched { avg: f64, diff: f64 },
    Worse { avg: f64, diff: f64 },
}

impl AverageComparison {
    fn placeholders(&self) -> Vec<(&'static str, String)> {
        match self {
            AverageComparison::NoBaseline => Vec::new(),
            AverageComparison::Better { avg, diff }
            | AverageComparison::Matched { avg, diff }
            | AverageComparison::Worse { avg, diff } => vec![
                ("avg", format_average(*avg)),
                ("diff", format_magnitude(*diff)),
            ],
        }
    }
}

fn compare_to_average(facts: &RoundPerformanceFacts, tolerance: f64) -> AverageComparison {
    let Some(avg) = facts.avg_score.filter(|value| value.is_finite()) else {
        return AverageComparison::NoBaseline;
    };

    let diff = f64::from(facts.score) - avg;
    if diff.abs() <= tolerance {
        AverageComparison::Matched {
            avg,
            diff: diff.abs(),
        }
    } else if diff < 0.0 {
        AverageComparison::Better {
            avg,
            diff: diff.abs(),
        }
    } else {
        AverageComparison::Worse { avg, diff }
    }
}

/// Message 1: what defined the round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DefiningOutcome {
    ScoreOnly(AverageComparison),
    StandoutLost { best: MeasuredComponent, sole: bool },
    Standout { best: MeasuredComponent },
    NearEven { best: MeasuredComponent },
}

impl DefiningOutcome {
    pub(crate) fn code(&self) -> OutcomeCode {
        match self {
            DefiningOutcome::ScoreOnly(_) => OutcomeCode::M1A,
            DefiningOutcome::StandoutLost { .. } => OutcomeCode::M1B,
            DefiningOutcome::Standout { .. } => OutcomeCode::M1C,
            DefiningOutcome::NearEven { .. } => OutcomeCode::M1D,
        }
    }
}

pub(crate) fn classify_defining(
    facts: &RoundPerformanceFacts,
    selection: &MeasuredSelection,
) -> DefiningOutcome {
    let Some(best) = selection.best else {
        let tolerance = MATCHED_AVERAGE_TOLERANCE * facts.holes_played.scale();
        return DefiningOutcome::ScoreOnly(compare_to_average(facts, tolerance));
    };

    if selection.residual_dominant {
        return DefiningOutcome::NearEven { best };
    }

    if best.value < -NEUTRAL_BAND {
        DefiningOutcome::StandoutLost {
            best,
            sole: selection.components.len() == 1,
        }
    } else if best.value > NEUTRAL_BAND {
        DefiningOutcome::Standout { best }
    } else {
        DefiningOutcome::NearEven { best }
    }
}

pub(crate) fn defining_level(band: PerformanceBand) -> InsightLevel {
    match band {
        PerformanceBand::Above | PerformanceBand::Great => InsightLevel::Great,
        PerformanceBand::Tough
        | PerformanceBand::Below
        | PerformanceBand::Expected
        | PerformanceBand::Unknown => InsightLevel::Success,
    }
}

pub(crate) fn render_defining(
    outcome: &DefiningOutcome,
    facts: &RoundPerformanceFacts,
    selector: &VariantSelector<'_>,
) -> InsightMessage {
    let code = outcome.code();
    let score = facts.score.to_string();
    let text = match outcome {
        DefiningOutcome::ScoreOnly(comparison) => {
            let key = match comparison {
                AverageComparison::NoBaseline => PoolKey::ScoreOnlyNoBaseline,
                AverageComparison::Better { .. } => PoolKey::ScoreOnlyBetter,
                AverageComparison::Matched { .. } => PoolKey::ScoreOnlyMatched,
                AverageComparison::Worse { .. } => PoolKey::ScoreOnlyWorse,
            };
            let mut values = vec![("score", score), ("to_par", format_to_par(facts.to_par))];
            values.extend(comparison.placeholders());
            selector.render(code, key, &values)
        }
        DefiningOutcome::StandoutLost { best, sole } => {
            let lead = if *sole {
                format!("Only {} was tracked, and it", best.label)
            } else {
                format!("Even your best tracked area, {},", best.label)
            };
            selector.render(
                code,
                PoolKey::StandoutLost,
                &[("lead", lead), ("strokes", format_magnitude(best.value))],
            )
        }
        DefiningOutcome::Standout { best } => selector.render(
            code,
            PoolKey::Standout,
            &[
                ("area", best.label.to_string()),
                ("strokes", format_magnitude(best.value)),
            ],
        ),
        DefiningOutcome::NearEven { best } => selector.render(
            code,
            PoolKey::NearEven,
            &[
                ("area", best.label.to_string()),
                ("value", format_signed(best.value)),
            ],
        ),
    };

    InsightMessage {
        text: guarded(text),
        level: defining_level(facts.band),
        outcome: code,
    }
}

/// Message 2: the scoring implication.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ScoringOutcome {
    ScoreVsAverage(AverageComparison),
    Neutral { weakest: MeasuredComponent },
    Leak { weakest: MeasuredComponent },
    NetPositive { weakest: MeasuredComponent },
}

impl ScoringOutcome {
    pub(crate) fn code(&self) -> OutcomeCode {
        match self {
            ScoringOutcome::ScoreVsAverage(_) => OutcomeCode::M2A,
            ScoringOutcome::Neutral { .. } => OutcomeCode::M2C,
            ScoringOutcome::Leak { .. } => OutcomeCode::M2D,
            ScoringOutcome::NetPositive { .. } => OutcomeCode::M2E,
        }
    }

    pub(crate) fn level(&self) -> InsightLevel {
        match self {
            ScoringOutcome::ScoreVsAverage(AverageComparison::NoBaseline) => InsightLevel::Info,
            ScoringOutcome::ScoreVsAverage(AverageComparison::Worse { .. }) => {
                InsightLevel::Warning
            }
            ScoringOutcome::ScoreVsAverage(_) => InsightLevel::Success,
            ScoringOutcome::Neutral { .. } => InsightLevel::Success,
            ScoringOutcome::Leak { .. } => InsightLevel::Warning,
            ScoringOutcome::NetPositive { .. } => InsightLevel::Success,
        }
    }
}

pub(crate) fn classify_scoring(
    facts: &RoundPerformanceFacts,
    selection: &MeasuredSelection,
) -> ScoringOutcome {
    let weakest = match selection.opportunity {
        Some(weakest) if selection.components.len() >= 2 => weakest,
        _ => {
            let band = NEAR_AVERAGE_BAND * facts.holes_played.scale();
            return ScoringOutcome::ScoreVsAverage(compare_to_average(facts, band));
        }
    };

    if weakest.value < -NEUTRAL_BAND {
        ScoringOutcome::Leak { weakest }
    } else if weakest.value > NEUTRAL_BAND {
        ScoringOutcome::NetPositive { weakest }
    } else {
        ScoringOutcome::Neutral { weakest }
    }
}

/// Untracked strokes worth quantifying in message 2, if any.
pub(crate) fn untracked_callout(
    breakdown: &StrokesGainedBreakdown,
    selection: &MeasuredSelection,
) -> Option<f64> {
    breakdown
        .residual
        .filter(|value| value.is_finite())
        .filter(|value| value.abs() >= UNTRACKED_CALLOUT || selection.residual_dominant)
}

pub(crate) fn render_scoring(
    outcome: &ScoringOutcome,
    facts: &RoundPerformanceFacts,
    untracked: Option<f64>,
    selector: &VariantSelector<'_>,
) -> InsightMessage {
    let code = outcome.code();
    let score = facts.score.to_string();
    let mut text = match outcome {
        ScoringOutcome::ScoreVsAverage(comparison) => {
            let key = match comparison {
                AverageComparison::NoBaseline => PoolKey::ScoringNoBaseline,
                AverageComparison::Better { .. } => PoolKey::ScoringStrong,
                AverageComparison::Matched { .. } => PoolKey::ScoringNear,
                AverageComparison::Worse { .. } => PoolKey::ScoringHigher,
            };
            let mut values = vec![("score", score)];
            values.extend(comparison.placeholders());
            selector.render(code, key, &values)
        }
        ScoringOutcome::Neutral { weakest } => selector.render(
            code,
            PoolKey::ScoringNeutral,
            &[
                ("area", weakest.label.to_string()),
                ("value", format_signed(weakest.value)),
            ],
        ),
        ScoringOutcome::Leak { weakest } => selector.render(
            code,
            PoolKey::ScoringLeak,
            &[
                ("area", weakest.label.to_string()),
                ("strokes", format_magnitude(weakest.value)),
            ],
        ),
        ScoringOutcome::NetPositive { weakest } => selector.render(
            code,
            PoolKey::ScoringNetPositive,
            &[
                ("area", weakest.label.to_string()),
                ("value", format_signed(weakest.value)),
            ],
        ),
    };

    if let Some(untracked) = untracked {
        let direction = if untracked > 0.0 { "gained" } else { "lost" };
        let sentence = selector.render(
            code,
            PoolKey::UntrackedSwing,
            &[
                ("strokes", format_magnitude(untracked)),
                ("direction", direction.to_string()),
            ],
        );
        text.push(' ');
        text.push_str(&sentence);
    }

    InsightMessage {
        text: guarded(text),
        level: outcome.level(),
        outcome: code,
    }
}

/// Message 3: the next-round action.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ActionOutcome {
    TrackThenGeneric { missing: MissingStats },
    TrackThenFocus {
        missing: MissingStats,
        focus: Option<ComponentName>,
    },
    Focus { area: ComponentName },
    Generic,
}

impl ActionOutcome {
    pub(crate) fn code(&self) -> OutcomeCode {
        match self {
            ActionOutcome::TrackThenGeneric { .. } => OutcomeCode::M3A,
            ActionOutcome::TrackThenFocus { .. } => OutcomeCode::M3B,
            ActionOutcome::Focus { .. } => OutcomeCode::M3C,
            ActionOutcome::Generic => OutcomeCode::M3E,
        }
    }
}

pub(crate) fn classify_action(
    missing: &MissingStats,
    selection: &MeasuredSelection,
    thresholds: &SelectionThresholds,
) -> ActionOutcome {
    match missing.count() {
        0 => {}
        1 => {
            return ActionOutcome::TrackThenFocus {
                missing: *missing,
                focus: selection.opportunity.map(|component| component.name),
            }
        }
        _ => return ActionOutcome::TrackThenGeneric { missing: *missing },
    }

    match selection.opportunity {
        Some(weakest) if selection.opportunity_is_weak => {
            let ambiguous =
                selection.weak_separation && weakest.value > thresholds.strong_leak;
            if ambiguous {
                ActionOutcome::Generic
            } else {
                ActionOutcome::Focus { area: weakest.name }
            }
        }
        _ => ActionOutcome::Generic,
    }
}

pub(crate) fn render_action(
    outcome: &ActionOutcome,
    selector: &VariantSelector<'_>,
) -> InsightMessage {
    let code = outcome.code();
    let (missing, focus) = match outcome {
        ActionOutcome::TrackThenGeneric { missing } => (Some(missing), None),
        ActionOutcome::TrackThenFocus { missing, focus } => (Some(missing), *focus),
        ActionOutcome::Focus { area } => (None, Some(*area)),
        ActionOutcome::Generic => (None, None),
    };

    let mut sentences = Vec::with_capacity(2);
    if let Some(missing) = missing {
        sentences.push(selector.render(
            code,
            PoolKey::TrackingClause,
            &[("stats", missing.human_list())],
        ));
    }
    let action_key = focus.map(PoolKey::AreaAction).unwrap_or(PoolKey::GenericAction);
    sentences.push(selector.render(code, action_key, &[]));

    InsightMessage {
        text: guarded(format!("{NEXT_ROUND_LEAD_IN} {}", sentences.join(" "))),
        level: InsightLevel::Info,
        outcome: code,
    }
}

pub(crate) fn format_signed(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 {
        "0.0".to_string()
    } else {
        format!("{rounded:+.1}")
    }
}

pub(crate) fn format_magnitude(value: f64) -> String {
    format!("{:.1}", value.abs())
}

pub(crate) fn format_average(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

pub(crate) fn format_to_par(to_par: i16) -> String {
    match to_par {
        0 => "E".to_string(),
        over if over > 0 => format!("+{over}"),
        under => under.to_string(),
    }
}
