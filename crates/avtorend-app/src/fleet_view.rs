//! Fleet renderer state: categories, vehicle grid and detail panel
//!
//! Vehicle requests are numbered. Only the most recently issued request may
//! update the grid; anything older is dropped on arrival.

use avtorend_api::{FetchOutcome, FetchSource, VehicleQuery};
use avtorend_core::prelude::*;
use avtorend_core::{CategoryFilter, CategoryRecord, VehicleRecord};

/// What the grid area shows. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderState {
    /// A request is in flight
    Skeleton,
    /// Populated cards
    Grid,
    /// Live fetch returned nothing
    Empty,
    /// Fetch failed and fell back
    Error { reason: String },
}

/// A vehicle listing request to hand to the fleet client.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRequest {
    pub seq: u64,
    pub query: VehicleQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading(u64),
    Loaded(Box<VehicleRecord>),
    NotFound(u64),
}

#[derive(Debug, Clone)]
pub struct FleetView {
    categories: Vec<CategoryRecord>,
    categories_fallback: bool,
    filter: CategoryFilter,
    vehicles: Vec<VehicleRecord>,
    total_count: Option<u64>,
    render: RenderState,
    next_seq: u64,
    in_flight: Option<u64>,
    selected: Option<usize>,
    detail: Option<DetailState>,
    page_size: u32,
}

impl Default for FleetView {
    fn default() -> Self {
        Self::new(0)
    }
}

impl FleetView {
    /// `page_size` of 0 leaves the limit to the backend.
    pub fn new(page_size: u32) -> Self {
        Self {
            categories: Vec::new(),
            categories_fallback: false,
            filter: CategoryFilter::All,
            vehicles: Vec::new(),
            total_count: None,
            render: RenderState::Skeleton,
            next_seq: 1,
            in_flight: None,
            selected: None,
            detail: None,
            page_size,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Categories
    // ─────────────────────────────────────────────────────────

    pub fn set_categories(&mut self, outcome: FetchOutcome<CategoryRecord>) {
        self.categories_fallback = outcome.is_fallback();
        self.categories = outcome.items;
        debug!(
            "{} categories ({})",
            self.categories.len(),
            if self.categories_fallback { "fallback" } else { "live" }
        );
    }

    pub fn categories(&self) -> &[CategoryRecord] {
        &self.categories
    }

    pub fn categories_are_fallback(&self) -> bool {
        self.categories_fallback
    }

    /// Number of tabs: "all" plus one per category.
    pub fn tab_count(&self) -> usize {
        self.categories.len() + 1
    }

    /// Filter for tab `index` (0 is "all").
    pub fn filter_for_tab(&self, index: usize) -> Option<CategoryFilter> {
        match index {
            0 => Some(CategoryFilter::All),
            i => self
                .categories
                .get(i - 1)
                .map(|c| CategoryFilter::Category(c.id)),
        }
    }

    /// Tab index of the active filter.
    pub fn active_tab(&self) -> usize {
        match self.filter {
            CategoryFilter::All => 0,
            CategoryFilter::Category(id) => self
                .categories
                .iter()
                .position(|c| c.id == id)
                .map(|i| i + 1)
                .unwrap_or(0),
        }
    }

    /// Filter of the tab `delta` steps from the active one, wrapping.
    pub fn adjacent_filter(&self, forward: bool) -> CategoryFilter {
        let count = self.tab_count();
        let active = self.active_tab();
        let next = if forward {
            (active + 1) % count
        } else {
            (active + count - 1) % count
        };
        self.filter_for_tab(next).unwrap_or_default()
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    // ─────────────────────────────────────────────────────────
    // Vehicles
    // ─────────────────────────────────────────────────────────

    /// Issue a new listing request for `filter`. Shows the skeleton.
    pub fn begin_request(&mut self, filter: CategoryFilter) -> VehicleRequest {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight = Some(seq);
        self.filter = filter;
        self.render = RenderState::Skeleton;

        let mut query = VehicleQuery::for_filter(filter);
        if self.page_size > 0 {
            query = query.with_page(self.page_size, 0);
        }
        trace!("Vehicle request #{} for {}", seq, filter);
        VehicleRequest { seq, query }
    }

    /// Apply the result of request `seq`. Returns `false` if it was stale.
    pub fn complete(&mut self, seq: u64, outcome: FetchOutcome<VehicleRecord>) -> bool {
        if self.in_flight != Some(seq) {
            debug!("Dropping stale vehicle response #{}", seq);
            return false;
        }
        self.in_flight = None;

        let filter = self.filter;
        self.vehicles = outcome
            .items
            .into_iter()
            .filter(|v| filter.matches(v))
            .collect();
        self.total_count = outcome.total_count;
        self.render = match outcome.source {
            FetchSource::Fallback { reason } => RenderState::Error { reason },
            FetchSource::Live if self.vehicles.is_empty() => RenderState::Empty,
            FetchSource::Live => RenderState::Grid,
        };
        self.selected = if self.vehicles.is_empty() {
            None
        } else {
            Some(self.selected.unwrap_or(0).min(self.vehicles.len() - 1))
        };
        true
    }

    /// A request is in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn render_state(&self) -> &RenderState {
        &self.render
    }

    pub fn vehicles(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_vehicle(&self) -> Option<&VehicleRecord> {
        self.selected.and_then(|i| self.vehicles.get(i))
    }

    pub fn select(&mut self, index: usize) {
        if index < self.vehicles.len() {
            self.selected = Some(index);
        }
    }

    pub fn select_next(&mut self) {
        if self.vehicles.is_empty() {
            return;
        }
        let next = self.selected.map(|i| (i + 1) % self.vehicles.len()).unwrap_or(0);
        self.selected = Some(next);
    }

    pub fn select_prev(&mut self) {
        if self.vehicles.is_empty() {
            return;
        }
        let len = self.vehicles.len();
        let prev = self.selected.map(|i| (i + len - 1) % len).unwrap_or(len - 1);
        self.selected = Some(prev);
    }

    // ─────────────────────────────────────────────────────────
    // Detail
    // ─────────────────────────────────────────────────────────

    pub fn detail(&self) -> Option<&DetailState> {
        self.detail.as_ref()
    }

    pub fn open_detail(&mut self, id: u64) {
        self.detail = Some(DetailState::Loading(id));
    }

    /// Apply a detail response; ignored unless it is for the vehicle being loaded.
    pub fn detail_loaded(&mut self, id: u64, vehicle: Option<VehicleRecord>) -> bool {
        if self.detail != Some(DetailState::Loading(id)) {
            return false;
        }
        self.detail = Some(match vehicle {
            Some(v) => DetailState::Loaded(Box::new(v)),
            None => DetailState::NotFound(id),
        });
        true
    }

    pub fn close_detail(&mut self) -> bool {
        self.detail.take().is_some()
    }
}
