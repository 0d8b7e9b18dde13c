//! Live filtering of the hotspot collection.
//!
//! Pure and idempotent: filtering never touches the stored batch, only
//! selects the subset handed to the renderer, and re-applying the same
//! filter to its own output is a no-op. Order is preserved.

use serde::Serialize;

use crate::model::Hotspot;
use crate::severity::Severity;

/// Category selection for the filter bar. `All` is the sentinel that
/// matches every hotspot; `Only` matches on the derived category tag,
/// so "unknown" entries are selectable like any real category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CategoryFilter {
    All,
    Only(Severity),
}

impl CategoryFilter {
    /// Parses a filter-bar tag ("all", "good", … "unknown").
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag == "all" {
            Some(CategoryFilter::All)
        } else {
            Severity::from_tag(tag).map(CategoryFilter::Only)
        }
    }

    fn matches(&self, hotspot: &Hotspot) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(severity) => hotspot.severity == *severity,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

/// The UI-owned filter controls: free-text search plus one category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub category: CategoryFilter,
}

/// Selects the hotspots matching `search` (case-insensitive substring
/// of the display name; empty matches everything) and `category`.
pub fn filter_hotspots(
    hotspots: &[Hotspot],
    search: &str,
    category: &CategoryFilter,
) -> Vec<Hotspot> {
    let needle = search.to_lowercase();
    hotspots
        .iter()
        .filter(|h| h.name.to_lowercase().contains(&needle))
        .filter(|h| category.matches(h))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
