use serde::{Deserialize, Serialize};

use super::domain::HolesPlayed;

/// Tunable thresholds for the insight engine, expressed for an 18-hole round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Opportunity values at or below this are a confident weakness.
    pub weakness_threshold: f64,
    /// Opportunity values at or below this are named even when separation is weak.
    pub strong_leak_threshold: f64,
    pub dominance_absolute_floor: f64,
    pub dominance_ratio: f64,
    pub weak_separation_delta: f64,
    /// Messages a free-tier viewer receives.
    pub free_visible_messages: usize,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            weakness_threshold: -0.5,
            strong_leak_threshold: -1.5,
            dominance_absolute_floor: 2.0,
            dominance_ratio: 0.6,
            weak_separation_delta: 0.3,
            free_visible_messages: 1,
        }
    }
}

impl InsightConfig {
    /// Stroke-valued thresholds scale with holes played; ratios do not.
    pub fn thresholds_for(&self, holes: HolesPlayed) -> SelectionThresholds {
        let scale = holes.scale();
        SelectionThresholds {
            weakness: self.weakness_threshold * scale,
            strong_leak: self.strong_leak_threshold * scale,
            dominance_floor: self.dominance_absolute_floor * scale,
            dominance_ratio: self.dominance_ratio,
            separation_delta: self.weak_separation_delta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelectionThresholds {
    pub weakness: f64,
    pub strong_leak: f64,
    pub dominance_floor: f64,
    pub dominance_ratio: f64,
    pub separation_delta: f64,
}
