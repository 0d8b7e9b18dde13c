//! View controller for the map overview.
//!
//! Owns the current hotspot batch and the refresh lifecycle:
//!
//! ```text
//! Idle -> Loading -> Ready | Failed
//!            ^------------/
//! ```
//!
//! The stored batch is replaced wholesale when a refresh completes;
//! the renderer never observes a half-updated collection, and a stale
//! batch stays visible while the next one is in flight. Summary
//! counters are always derived from the full batch, independent of the
//! active filter, so the legend and stats bar agree with the markers.
//!
//! Refreshes are sequence-numbered: `begin_refresh` issues a monotonic
//! sequence and `complete_refresh` applies a batch only if its sequence
//! is the latest issued. Two overlapping refreshes therefore cannot
//! interleave; the most recently requested one wins and the other is
//! discarded whole.

use std::cell::RefCell;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::cities::City;
use crate::fetch::fetch_all;
use crate::filter::{CategoryFilter, FilterState, filter_hotspots};
use crate::ingest::aqi::MetricSource;
use crate::locate::{GeoLocator, locate_notice};
use crate::model::{Hotspot, LocateError, RegistryError, UserPosition};
use crate::normalize::normalize_batch;
use crate::severity::Severity;

// ---------------------------------------------------------------------------
// Summary counters
// ---------------------------------------------------------------------------

/// Per-category counts over the full batch. Recomputed atomically with
/// every applied batch and never affected by the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryCounters {
    pub total: usize,
    pub good: usize,
    pub fair: usize,
    pub moderate: usize,
    pub poor: usize,
    pub critical: usize,
    pub unknown: usize,
}

impl SummaryCounters {
    pub fn from_batch(batch: &[Hotspot]) -> Self {
        let mut counters = SummaryCounters {
            total: batch.len(),
            ..SummaryCounters::default()
        };
        for hotspot in batch {
            match hotspot.severity {
                Severity::Good => counters.good += 1,
                Severity::Fair => counters.fair += 1,
                Severity::Moderate => counters.moderate += 1,
                Severity::Poor => counters.poor += 1,
                Severity::Critical => counters.critical += 1,
                Severity::Unknown => counters.unknown += 1,
            }
        }
        counters
    }
}

// ---------------------------------------------------------------------------
// View state machine
// ---------------------------------------------------------------------------

/// Refresh lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewPhase {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// What the rendering layer consumes: the filtered marker set, the
/// full-batch counters, and the transient bits of UI state. Built fresh
/// on demand; holds no references into the view.
#[derive(Debug, Clone, Serialize)]
pub struct RenderModel {
    pub phase: ViewPhase,
    pub markers: Vec<Hotspot>,
    pub counters: SummaryCounters,
    pub user_position: Option<UserPosition>,
    /// Transient locate notice, if the last locate request failed.
    pub notice: Option<String>,
    /// Batch-level error message while in `Failed`; refresh retries.
    pub error: Option<String>,
}

/// The synchronous core of the view controller. All methods are plain
/// state transitions; the async orchestration around them lives in
/// [`Dashboard`]. Keeping the core synchronous makes the concurrent-
/// refresh policy directly testable.
#[derive(Debug)]
pub struct ViewState {
    phase: ViewPhase,
    hotspots: Vec<Hotspot>,
    counters: SummaryCounters,
    batch_stamp: Option<DateTime<Utc>>,
    filter: FilterState,
    user_position: Option<UserPosition>,
    notice: Option<String>,
    error: Option<String>,
    issued_seq: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        ViewState {
            phase: ViewPhase::Idle,
            hotspots: Vec::new(),
            counters: SummaryCounters::default(),
            batch_stamp: None,
            filter: FilterState::default(),
            user_position: None,
            notice: None,
            error: None,
            issued_seq: 0,
        }
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    /// Full current batch, possibly stale while a refresh is in flight.
    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    pub fn counters(&self) -> &SummaryCounters {
        &self.counters
    }

    pub fn user_position(&self) -> Option<UserPosition> {
        self.user_position
    }

    /// When the currently displayed batch was applied.
    pub fn batch_stamp(&self) -> Option<DateTime<Utc>> {
        self.batch_stamp
    }

    /// Starts a refresh and returns its sequence number. The previous
    /// batch stays in place so the map keeps rendering stale-but-whole
    /// data until the new batch lands.
    pub fn begin_refresh(&mut self) -> u64 {
        self.phase = ViewPhase::Loading;
        self.issued_seq += 1;
        debug!(seq = self.issued_seq, "refresh started");
        self.issued_seq
    }

    /// Applies a completed refresh. Returns `true` if the batch was
    /// accepted. A completion whose sequence is not the latest issued
    /// is discarded whole; the displayed set always corresponds to
    /// exactly one complete batch.
    pub fn complete_refresh(
        &mut self,
        seq: u64,
        result: Result<Vec<Hotspot>, RegistryError>,
    ) -> bool {
        if seq != self.issued_seq {
            debug!(
                seq,
                latest = self.issued_seq,
                "discarding stale refresh completion"
            );
            return false;
        }
        match result {
            Ok(batch) => {
                self.counters = SummaryCounters::from_batch(&batch);
                info!(
                    total = self.counters.total,
                    unknown = self.counters.unknown,
                    "batch applied"
                );
                self.hotspots = batch;
                self.batch_stamp = Some(Utc::now());
                self.error = None;
                self.phase = ViewPhase::Ready;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.phase = ViewPhase::Failed;
            }
        }
        true
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    /// Applies a locate result. Success replaces the fix and clears any
    /// notice; failure raises a notice and leaves a previous fix alone.
    pub fn apply_locate(&mut self, result: Result<UserPosition, LocateError>) {
        match result {
            Ok(position) => {
                self.user_position = Some(position);
                self.notice = None;
            }
            Err(err) => {
                self.notice = Some(locate_notice(&err));
            }
        }
    }

    /// Snapshot for the renderer: filtered markers plus full-batch
    /// counters, guaranteed to come from the same batch.
    pub fn render_model(&self) -> RenderModel {
        RenderModel {
            phase: self.phase,
            markers: filter_hotspots(&self.hotspots, &self.filter.search, &self.filter.category),
            counters: self.counters.clone(),
            user_position: self.user_position,
            notice: self.notice.clone(),
            error: self.error.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Async façade tying the view state to its collaborators. `&self`
/// methods plus interior mutability let several operations be in flight
/// on the one UI thread at once (a refresh while the user types a
/// search, or two overlapping refreshes); the `RefCell` is never held
/// across an await.
pub struct Dashboard<S> {
    cities: Vec<City>,
    source: S,
    state: RefCell<ViewState>,
}

impl<S: MetricSource> Dashboard<S> {
    pub fn new(source: S, cities: Vec<City>) -> Self {
        Dashboard {
            cities,
            source,
            state: RefCell::new(ViewState::new()),
        }
    }

    /// Runs one full refresh cycle: fan out, join, normalize, apply.
    pub async fn refresh(&self) {
        let seq = self.state.borrow_mut().begin_refresh();
        let result = fetch_all(&self.source, &self.cities)
            .await
            .map(|outcomes| normalize_batch(&self.cities, outcomes));
        self.state.borrow_mut().complete_refresh(seq, result);
    }

    /// Requests a single device-position fix.
    pub async fn locate<L: GeoLocator>(&self, locator: &L) {
        let result = locator.locate().await;
        self.state.borrow_mut().apply_locate(result);
    }

    pub fn set_search(&self, search: impl Into<String>) {
        self.state.borrow_mut().set_search(search);
    }

    pub fn set_category(&self, category: CategoryFilter) {
        self.state.borrow_mut().set_category(category);
    }

    pub fn phase(&self) -> ViewPhase {
        self.state.borrow().phase()
    }

    pub fn render_model(&self) -> RenderModel {
        self.state.borrow().render_model()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
