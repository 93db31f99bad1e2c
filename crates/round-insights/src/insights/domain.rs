use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::missing::{self, MissingStats};

/// Identifier wrapper for a logged round.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoundId(pub String);

/// Identifier wrapper for the golfer who owns a round.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Coarse round-quality classification computed upstream of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBand {
    Tough,
    Below,
    Expected,
    Above,
    Great,
    Unknown,
}

impl PerformanceBand {
    pub const fn ordered() -> [PerformanceBand; 6] {
        [
            PerformanceBand::Tough,
            PerformanceBand::Below,
            PerformanceBand::Expected,
            PerformanceBand::Above,
            PerformanceBand::Great,
            PerformanceBand::Unknown,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            PerformanceBand::Tough => "tough",
            PerformanceBand::Below => "below",
            PerformanceBand::Expected => "expected",
            PerformanceBand::Above => "above",
            PerformanceBand::Great => "great",
            PerformanceBand::Unknown => "unknown",
        }
    }
}

impl FromStr for PerformanceBand {
    type Err = InsightInputError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        PerformanceBand::ordered()
            .into_iter()
            .find(|band| band.label() == value)
            .ok_or_else(|| InsightInputError::UnknownBand(value.to_string()))
    }
}

/// Contract violations between the engine and its upstream classifiers.
#[derive(Debug, thiserror::Error)]
pub enum InsightInputError {
    #[error("unrecognized performance band '{0}'")]
    UnknownBand(String),
    #[error("unsupported hole count {0}; rounds are 9 or 18 holes")]
    UnsupportedHoles(u8),
}

/// Number of holes in the round. Stroke magnitudes scale with this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HolesPlayed {
    Nine,
    Eighteen,
}

impl HolesPlayed {
    pub const fn count(self) -> u8 {
        match self {
            HolesPlayed::Nine => 9,
            HolesPlayed::Eighteen => 18,
        }
    }

    /// Linear scale relative to a full 18-hole round.
    pub fn scale(self) -> f64 {
        f64::from(self.count()) / 18.0
    }
}

impl TryFrom<u8> for HolesPlayed {
    type Error = InsightInputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            9 => Ok(HolesPlayed::Nine),
            18 => Ok(HolesPlayed::Eighteen),
            other => Err(InsightInputError::UnsupportedHoles(other)),
        }
    }
}

impl From<HolesPlayed> for u8 {
    fn from(value: HolesPlayed) -> Self {
        value.count()
    }
}

/// Raw statistics recorded for the round. Absent values were not tracked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEvidence {
    #[serde(default)]
    pub fairways_hit: Option<u8>,
    #[serde(default)]
    pub fairways_possible: Option<u8>,
    #[serde(default)]
    pub greens_hit: Option<u8>,
    #[serde(default)]
    pub greens_possible: Option<u8>,
    #[serde(default)]
    pub putts_total: Option<u8>,
    #[serde(default)]
    pub penalties_total: Option<u8>,
}

/// Fully-resolved performance facts for a single round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundPerformanceFacts {
    pub score: u16,
    pub to_par: i16,
    #[serde(default)]
    pub avg_score: Option<f64>,
    pub band: PerformanceBand,
    pub holes_played: HolesPlayed,
    #[serde(default)]
    pub evidence: RoundEvidence,
}

impl RoundPerformanceFacts {
    pub fn missing(&self) -> MissingStats {
        missing::classify(&self.evidence)
    }
}

/// Strokes-gained figures computed upstream. Positive values gained strokes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StrokesGainedBreakdown {
    #[serde(default)]
    pub off_tee: Option<f64>,
    #[serde(default)]
    pub approach: Option<f64>,
    #[serde(default)]
    pub putting: Option<f64>,
    #[serde(default)]
    pub penalties: Option<f64>,
    #[serde(default)]
    pub residual: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
}

impl StrokesGainedBreakdown {
    pub fn value_for(&self, name: ComponentName) -> Option<f64> {
        match name {
            ComponentName::OffTee => self.off_tee,
            ComponentName::Approach => self.approach,
            ComponentName::Putting => self.putting,
            ComponentName::Penalties => self.penalties,
        }
    }
}

/// Strokes-gained categories that can be measured from tracked statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentName {
    OffTee,
    Approach,
    Putting,
    Penalties,
}

impl ComponentName {
    pub const fn ordered() -> [ComponentName; 4] {
        [
            ComponentName::OffTee,
            ComponentName::Approach,
            ComponentName::Putting,
            ComponentName::Penalties,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            ComponentName::OffTee => "Off The Tee",
            ComponentName::Approach => "Approach",
            ComponentName::Putting => "Putting",
            ComponentName::Penalties => "Penalties",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            ComponentName::OffTee => "off_tee",
            ComponentName::Approach => "approach",
            ComponentName::Putting => "putting",
            ComponentName::Penalties => "penalties",
        }
    }
}

/// A strokes-gained figure for a category whose statistic was tracked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasuredComponent {
    pub name: ComponentName,
    pub label: &'static str,
    pub value: f64,
}

/// Where the round sits in the user's history, supplied by persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundContext {
    pub round_number: u32,
    #[serde(default)]
    pub previous_score: Option<u16>,
    pub total_rounds: u32,
}

/// Seed input for phrasing rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSeed {
    pub round_id: RoundId,
    #[serde(default)]
    pub variant_offset: u32,
}

/// Severity attached to each rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightLevel {
    Great,
    Success,
    Warning,
    Info,
}

impl InsightLevel {
    pub const fn label(self) -> &'static str {
        match self {
            InsightLevel::Great => "great",
            InsightLevel::Success => "success",
            InsightLevel::Warning => "warning",
            InsightLevel::Info => "info",
        }
    }
}

/// Closed outcome taxonomy across the three message slots and onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeCode {
    #[serde(rename = "M1-A")]
    M1A,
    #[serde(rename = "M1-B")]
    M1B,
    #[serde(rename = "M1-C")]
    M1C,
    #[serde(rename = "M1-D")]
    M1D,
    #[serde(rename = "M2-A")]
    M2A,
    #[serde(rename = "M2-C")]
    M2C,
    #[serde(rename = "M2-D")]
    M2D,
    #[serde(rename = "M2-E")]
    M2E,
    #[serde(rename = "M3-A")]
    M3A,
    #[serde(rename = "M3-B")]
    M3B,
    #[serde(rename = "M3-C")]
    M3C,
    #[serde(rename = "M3-E")]
    M3E,
    #[serde(rename = "OB-1")]
    Ob1,
    #[serde(rename = "OB-2-BETTER")]
    Ob2Better,
    #[serde(rename = "OB-2-SAME")]
    Ob2Same,
    #[serde(rename = "OB-2-WORSE")]
    Ob2Worse,
    #[serde(rename = "OB-3-BETTER")]
    Ob3Better,
    #[serde(rename = "OB-3-SAME")]
    Ob3Same,
    #[serde(rename = "OB-3-WORSE")]
    Ob3Worse,
}

impl OutcomeCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            OutcomeCode::M1A => "M1-A",
            OutcomeCode::M1B => "M1-B",
            OutcomeCode::M1C => "M1-C",
            OutcomeCode::M1D => "M1-D",
            OutcomeCode::M2A => "M2-A",
            OutcomeCode::M2C => "M2-C",
            OutcomeCode::M2D => "M2-D",
            OutcomeCode::M2E => "M2-E",
            OutcomeCode::M3A => "M3-A",
            OutcomeCode::M3B => "M3-B",
            OutcomeCode::M3C => "M3-C",
            OutcomeCode::M3E => "M3-E",
            OutcomeCode::Ob1 => "OB-1",
            OutcomeCode::Ob2Better => "OB-2-BETTER",
            OutcomeCode::Ob2Same => "OB-2-SAME",
            OutcomeCode::Ob2Worse => "OB-2-WORSE",
            OutcomeCode::Ob3Better => "OB-3-BETTER",
            OutcomeCode::Ob3Same => "OB-3-SAME",
            OutcomeCode::Ob3Worse => "OB-3-WORSE",
        }
    }

    pub const fn is_onboarding(self) -> bool {
        matches!(
            self,
            OutcomeCode::Ob1
                | OutcomeCode::Ob2Better
                | OutcomeCode::Ob2Same
                | OutcomeCode::Ob2Worse
                | OutcomeCode::Ob3Better
                | OutcomeCode::Ob3Same
                | OutcomeCode::Ob3Worse
        )
    }
}

impl fmt::Display for OutcomeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rendered insight in its slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightMessage {
    pub text: String,
    pub level: InsightLevel,
    pub outcome: OutcomeCode,
}
