//! Severity classification for raw AQI codes.
//!
//! The single source of truth for the code → category mapping used by
//! markers, the legend, and the category filter. `from_code` is total:
//! every input, including an absent code, maps to a defined category.
//! Codes outside 1..=5 map to [`Severity::Unknown`], which is its own
//! category; "no data" is never conflated with the best reading.

use serde::Serialize;

/// Display category for one air-quality severity code, in ascending
/// order of severity. `Unknown` sorts first and has rank 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Unknown,
    Good,
    Fair,
    Moderate,
    Poor,
    Critical,
}

/// The five real categories in legend order, best to worst.
/// `Unknown` is deliberately absent: the legend shows the AQI scale,
/// not the failure state.
pub const SEVERITY_SCALE: [Severity; 5] = [
    Severity::Good,
    Severity::Fair,
    Severity::Moderate,
    Severity::Poor,
    Severity::Critical,
];

impl Severity {
    /// Classifies a raw severity code. Total over all inputs.
    pub fn from_code(code: Option<i64>) -> Self {
        match code {
            Some(1) => Severity::Good,
            Some(2) => Severity::Fair,
            Some(3) => Severity::Moderate,
            Some(4) => Severity::Poor,
            Some(5) => Severity::Critical,
            _ => Severity::Unknown,
        }
    }

    /// Human-readable label shown in popups and the legend.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Good => "Good",
            Severity::Fair => "Fair",
            Severity::Moderate => "Moderate",
            Severity::Poor => "Poor",
            Severity::Critical => "Critical",
            Severity::Unknown => "Unknown",
        }
    }

    /// Marker color token, shared between markers and the legend.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Good => "#16a34a",
            Severity::Fair => "#84cc16",
            Severity::Moderate => "#f97316",
            Severity::Poor => "#ef4444",
            Severity::Critical => "#991b1b",
            Severity::Unknown => "#6b7280",
        }
    }

    /// Ordinal rank: 1 (best) to 5 (worst). `Unknown` is 0, distinct
    /// from every numeric code.
    pub fn rank(self) -> u8 {
        match self {
            Severity::Unknown => 0,
            Severity::Good => 1,
            Severity::Fair => 2,
            Severity::Moderate => 3,
            Severity::Poor => 4,
            Severity::Critical => 5,
        }
    }

    /// Machine-readable tag, used by the category filter.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Good => "good",
            Severity::Fair => "fair",
            Severity::Moderate => "moderate",
            Severity::Poor => "poor",
            Severity::Critical => "critical",
            Severity::Unknown => "unknown",
        }
    }

    /// Parses a category tag. `"all"` is not a severity; see
    /// `filter::CategoryFilter` for the sentinel.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "good" => Some(Severity::Good),
            "fair" => Some(Severity::Fair),
            "moderate" => Some(Severity::Moderate),
            "poor" => Some(Severity::Poor),
            "critical" => Some(Severity::Critical),
            "unknown" => Some(Severity::Unknown),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_is_total() {
        // Every probe input must return a defined category; only 1..=5
        // may map to a non-unknown one.
        let probes = [
            Some(1),
            Some(2),
            Some(3),
            Some(4),
            Some(5),
            Some(0),
            Some(-1),
            Some(6),
            Some(i64::MAX),
            None,
        ];
        for code in probes {
            let category = Severity::from_code(code);
            let in_domain = matches!(code, Some(1..=5));
            assert_eq!(
                category != Severity::Unknown,
                in_domain,
                "code {:?} classified as {:?}",
                code,
                category
            );
        }
    }

    #[test]
    fn test_code_mapping_matches_scale() {
        assert_eq!(Severity::from_code(Some(1)), Severity::Good);
        assert_eq!(Severity::from_code(Some(2)), Severity::Fair);
        assert_eq!(Severity::from_code(Some(3)), Severity::Moderate);
        assert_eq!(Severity::from_code(Some(4)), Severity::Poor);
        assert_eq!(Severity::from_code(Some(5)), Severity::Critical);
    }

    #[test]
    fn test_missing_code_is_unknown_not_best() {
        // "No data" must be a distinct category, never the best reading.
        assert_eq!(Severity::from_code(None), Severity::Unknown);
        assert_ne!(Severity::from_code(None), Severity::from_code(Some(1)));
    }

    #[test]
    fn test_ranks_ascend_with_severity() {
        for pair in SEVERITY_SCALE.windows(2) {
            assert!(
                pair[0].rank() < pair[1].rank(),
                "{:?} should rank below {:?}",
                pair[0],
                pair[1]
            );
        }
        assert_eq!(Severity::Unknown.rank(), 0);
    }

    #[test]
    fn test_tag_round_trips() {
        for severity in SEVERITY_SCALE.into_iter().chain([Severity::Unknown]) {
            assert_eq!(Severity::from_tag(severity.tag()), Some(severity));
        }
        assert_eq!(Severity::from_tag("all"), None);
        assert_eq!(Severity::from_tag(""), None);
    }

    #[test]
    fn test_colors_are_distinct_hex_tokens() {
        let mut seen = std::collections::HashSet::new();
        for severity in SEVERITY_SCALE.into_iter().chain([Severity::Unknown]) {
            let color = severity.color();
            assert!(color.starts_with('#') && color.len() == 7);
            assert!(seen.insert(color), "duplicate color token {}", color);
        }
    }
}
