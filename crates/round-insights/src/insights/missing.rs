use serde::Serialize;

use super::domain::{ComponentName, RoundEvidence};

/// Which of the four optional statistics were left unrecorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MissingStats {
    pub fir: bool,
    pub gir: bool,
    pub putts: bool,
    pub penalties: bool,
}

impl MissingStats {
    pub fn count(&self) -> usize {
        self.flags().iter().filter(|(_, missing)| *missing).count()
    }

    pub fn is_complete(&self) -> bool {
        self.count() == 0
    }

    /// Labels of the missing statistics in canonical order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.flags()
            .into_iter()
            .filter(|(_, missing)| *missing)
            .map(|(label, _)| label)
            .collect()
    }

    /// Canonical list for message copy, e.g. "FIR, GIR, and putts".
    pub fn human_list(&self) -> String {
        join_natural(&self.labels())
    }

    /// Whether the statistic backing a strokes-gained category was tracked.
    pub fn tracks(&self, name: ComponentName) -> bool {
        match name {
            ComponentName::OffTee => !self.fir,
            ComponentName::Approach => !self.gir,
            ComponentName::Putting => !self.putts,
            ComponentName::Penalties => !self.penalties,
        }
    }

    fn flags(&self) -> [(&'static str, bool); 4] {
        [
            ("FIR", self.fir),
            ("GIR", self.gir),
            ("putts", self.putts),
            ("penalties", self.penalties),
        ]
    }
}

pub(crate) fn classify(evidence: &RoundEvidence) -> MissingStats {
    MissingStats {
        fir: evidence.fairways_hit.is_none(),
        gir: evidence.greens_hit.is_none(),
        putts: evidence.putts_total.is_none(),
        penalties: evidence.penalties_total.is_none(),
    }
}

pub(crate) fn join_natural(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} and {second}"),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}
