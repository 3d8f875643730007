//! Browsing session: filter state, page cursor and derived page
//!
//! The session is the host-side owner of everything the engine needs. Every
//! input change goes through a setter which re-derives the filtered
//! collection on the spot, so the derived values are always consistent with
//! the inputs.
//!
//! Page-reset policy: a change to any filter criterion, or a newly loaded
//! collection, puts the cursor back on page 1 even if the old page would
//! still exist.
//!
//! ```rust,ignore
//! let mut session = BrowseSession::new(PAGE_SIZE);
//! session.replace_collection(store.snapshot());
//!
//! session.set_name_query("smith");
//! session.next_page();
//! render(session.visible(), session.navigation());
//! ```

use std::sync::Arc;

use crate::core::filter::{FilterCriteria, apply_filters};
use crate::core::query::{
    Navigation, PAGE_SIZE, PaginationMeta, PaginationState, paginate, total_pages,
};
use crate::core::record::{IsoDate, VehicleRecord};

#[derive(Debug, Clone)]
pub struct BrowseSession {
    collection: Arc<[VehicleRecord]>,
    criteria: FilterCriteria,
    pagination: PaginationState,
    filtered: Vec<VehicleRecord>,
    total_pages: usize,
}

impl BrowseSession {
    /// Empty session with the given page size
    pub fn new(page_size: usize) -> Self {
        Self {
            collection: Arc::from(Vec::new()),
            criteria: FilterCriteria::default(),
            pagination: PaginationState::new(page_size),
            filtered: Vec::new(),
            total_pages: 0,
        }
    }

    pub fn with_collection(collection: impl Into<Arc<[VehicleRecord]>>, page_size: usize) -> Self {
        let mut session = Self::new(page_size);
        session.replace_collection(collection);
        session
    }

    /// Install a freshly loaded collection
    pub fn replace_collection(&mut self, collection: impl Into<Arc<[VehicleRecord]>>) {
        self.collection = collection.into();
        self.pagination.reset();
        self.recompute();
    }

    /// Re-derive the filtered collection and page count
    ///
    /// The page cursor is left alone. Callers changing a criterion go
    /// through the setters, which also reset it.
    pub fn recompute(&mut self) {
        self.filtered = apply_filters(&self.collection, &self.criteria)
            .into_iter()
            .cloned()
            .collect();
        self.total_pages = total_pages(self.filtered.len(), self.pagination.page_size());
    }

    pub fn set_name_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.criteria.name_query {
            self.criteria.name_query = query;
            self.criteria_changed();
        }
    }

    pub fn set_start_date_floor(&mut self, floor: Option<IsoDate>) {
        if floor != self.criteria.start_date_floor {
            self.criteria.start_date_floor = floor;
            self.criteria_changed();
        }
    }

    pub fn set_end_date_ceiling(&mut self, ceiling: Option<IsoDate>) {
        if ceiling != self.criteria.end_date_ceiling {
            self.criteria.end_date_ceiling = ceiling;
            self.criteria_changed();
        }
    }

    /// Replace all criteria at once
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria != self.criteria {
            self.criteria = criteria;
            self.criteria_changed();
        }
    }

    fn criteria_changed(&mut self) {
        self.pagination.reset();
        self.recompute();
    }

    /// Jump to a page; pages outside `[1, total_pages]` are refused
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.pagination.go_to(page, self.total_pages)
    }

    pub fn next_page(&mut self) -> bool {
        let next = self.pagination.current_page() + 1;
        self.go_to_page(next)
    }

    pub fn previous_page(&mut self) -> bool {
        let previous = self.pagination.current_page().saturating_sub(1);
        self.go_to_page(previous)
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn collection(&self) -> &[VehicleRecord] {
        &self.collection
    }

    pub fn filtered(&self) -> &[VehicleRecord] {
        &self.filtered
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Records on the current page
    pub fn visible(&self) -> &[VehicleRecord] {
        paginate(&self.filtered, self.current_page(), self.page_size()).items
    }

    pub fn navigation(&self) -> Navigation {
        Navigation::new(self.current_page(), self.total_pages)
    }

    pub fn meta(&self) -> PaginationMeta {
        PaginationMeta::new(self.current_page(), self.page_size(), self.filtered.len())
    }
}

impl Default for BrowseSession {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}
