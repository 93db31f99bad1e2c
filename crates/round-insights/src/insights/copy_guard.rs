//! Post-render validation for insight copy.
//!
//! Every composed sentence is checked here. A violation is an authoring
//! defect in a template pool, so callers assert on it instead of rewriting
//! the text.

use super::domain::ComponentName;

/// Fragments that never belong in user-facing copy.
const BANNED_FRAGMENTS: &[&str] = &[
    "{",
    "}",
    "off_tee",
    "residual",
    "opportunity",
    "undefined",
    "NaN",
    "null",
    "tracked data",
    "based on the data",
    "your data shows",
    "according to the data",
    "your weakest area was your best",
    "M1-",
    "M2-",
    "M3-",
    "OB-",
];

/// Rejected copy, with the offending fragment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CopyViolation {
    #[error("copy is empty")]
    Empty,
    #[error("copy contains banned fragment '{fragment}': {text}")]
    BannedFragment { fragment: String, text: String },
    #[error("copy repeats area '{area}': {text}")]
    DuplicatedArea { area: &'static str, text: String },
}

pub fn check(text: &str) -> Result<(), CopyViolation> {
    if text.trim().is_empty() {
        return Err(CopyViolation::Empty);
    }

    if let Some(fragment) = BANNED_FRAGMENTS
        .iter()
        .find(|fragment| text.contains(**fragment))
    {
        return Err(CopyViolation::BannedFragment {
            fragment: (*fragment).to_string(),
            text: text.to_string(),
        });
    }

    for name in ComponentName::ordered() {
        let label = name.label();
        let repeated = [
            format!("{label} and {label}"),
            format!("{label}, {label}"),
            format!("{label} over {label}"),
        ];
        if repeated.iter().any(|pattern| text.contains(pattern.as_str())) {
            return Err(CopyViolation::DuplicatedArea {
                area: label,
                text: text.to_string(),
            });
        }
    }

    Ok(())
}

/// Asserts in debug builds that composed copy is clean, passing it through.
pub(crate) fn guarded(text: String) -> String {
    if let Err(violation) = check(&text) {
        debug_assert!(false, "insight copy rejected: {violation}");
        tracing::error!(%violation, "insight copy rejected");
    }
    text
}
