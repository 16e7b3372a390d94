//! Error types for chart construction and table lookups.

use thiserror::Error;

/// Validation failures when building pillars and charts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// The stem-branch pair is not one of the 60 sexagenary combinations.
    #[error("invalid stem-branch pair {stem}{branch}: not in the sexagenary cycle")]
    InvalidPair {
        /// Glyph of the offending stem.
        stem: &'static str,
        /// Glyph of the offending branch.
        branch: &'static str,
    },
    /// A pillar slot is missing or occupied twice.
    #[error("pillar slot {0} is missing or duplicated")]
    SlotMismatch(&'static str),
    /// A glyph could not be parsed as a stem or branch.
    #[error("unknown glyph {0:?}: expected a stem or branch")]
    UnknownGlyph(String),
}

/// A lookup expected to be total had no entry.
///
/// Signals a table-authoring defect; never produced for a valid chart, since
/// every table in this workspace is a total array over its key space.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("lookup table gap: {0}")]
pub struct LookupGap(pub &'static str);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pair_message_names_glyphs() {
        let e = ChartError::InvalidPair {
            stem: "甲",
            branch: "丑",
        };
        let msg = e.to_string();
        assert!(msg.contains("甲丑"));
    }

    #[test]
    fn unknown_glyph_message() {
        let e = ChartError::UnknownGlyph("x".into());
        assert!(e.to_string().contains("x"));
    }
}
