use serde::Serialize;

use super::config::SelectionThresholds;
use super::domain::{ComponentName, MeasuredComponent, StrokesGainedBreakdown};
use super::missing::MissingStats;

/// Standout and weak area among the tracked strokes-gained components.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasuredSelection {
    pub components: Vec<MeasuredComponent>,
    pub best: Option<MeasuredComponent>,
    pub opportunity: Option<MeasuredComponent>,
    pub opportunity_is_weak: bool,
    pub residual_dominant: bool,
    pub weak_separation: bool,
}

impl MeasuredSelection {
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Components whose statistic was tracked and whose value is known, in canonical order.
pub fn measured_components(
    breakdown: &StrokesGainedBreakdown,
    missing: &MissingStats,
) -> Vec<MeasuredComponent> {
    ComponentName::ordered()
        .into_iter()
        .filter(|name| missing.tracks(*name))
        .filter_map(|name| {
            breakdown
                .value_for(name)
                .filter(|value| value.is_finite())
                .map(|value| MeasuredComponent {
                    name,
                    label: name.label(),
                    value,
                })
        })
        .collect()
}

pub fn select(
    breakdown: &StrokesGainedBreakdown,
    missing: &MissingStats,
    thresholds: &SelectionThresholds,
) -> MeasuredSelection {
    let components = measured_components(breakdown, missing);

    // First maximum in canonical order wins ties.
    let best = components
        .iter()
        .copied()
        .fold(None, |current: Option<MeasuredComponent>, candidate| match current {
            Some(best) if best.value >= candidate.value => Some(best),
            _ => Some(candidate),
        });

    let mut ascending = components.clone();
    ascending.sort_by(|left, right| left.value.total_cmp(&right.value));

    let opportunity = match best {
        Some(best) if components.len() >= 2 => ascending
            .iter()
            .copied()
            .find(|component| component.name != best.name),
        _ => None,
    };

    let opportunity_is_weak = opportunity
        .map(|component| component.value <= thresholds.weakness)
        .unwrap_or(false);

    let weak_separation = match ascending.as_slice() {
        [lowest, next, ..] => (next.value - lowest.value).abs() < thresholds.separation_delta,
        _ => false,
    };

    let residual_dominant = residual_dominates(breakdown, &components, thresholds);

    MeasuredSelection {
        components,
        best,
        opportunity,
        opportunity_is_weak,
        residual_dominant,
        weak_separation,
    }
}

fn residual_dominates(
    breakdown: &StrokesGainedBreakdown,
    components: &[MeasuredComponent],
    thresholds: &SelectionThresholds,
) -> bool {
    let Some(residual) = breakdown.residual.filter(|value| value.is_finite()) else {
        return false;
    };

    let residual = residual.abs();
    if residual < thresholds.dominance_floor {
        return false;
    }

    let largest_measured = components
        .iter()
        .map(|component| component.value.abs())
        .fold(0.0_f64, f64::max);
    if residual > largest_measured {
        return true;
    }

    match breakdown.total.filter(|value| value.is_finite()) {
        Some(total) if total.abs() >= thresholds.dominance_floor => {
            residual / total.abs() >= thresholds.dominance_ratio
        }
        _ => false,
    }
}
