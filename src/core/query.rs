//! Query parameters and pagination utilities

use serde::{Deserialize, Serialize};

use crate::core::error::ValidationError;
use crate::core::filter::FilterCriteria;

/// Records shown per page
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed for `total` items, 0 when there are none
pub fn total_pages(total: usize, page_size: usize) -> usize {
    // Ensure page_size is at least 1 to avoid division by zero
    total.div_ceil(page_size.max(1))
}

/// One page of a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    /// Items on the requested page, at most `page_size` of them
    pub items: &'a [T],

    /// Total number of pages for the whole collection
    pub total_pages: usize,
}

/// Cut page `page` (1-based) out of `items`
///
/// The page number is not clamped: page 0 or a page past the end yields an
/// empty slice, never a panic.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> PageSlice<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);

    let visible = page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(page_size))
        .filter(|start| *start < items.len())
        .map(|start| &items[start..(start + page_size).min(items.len())])
        .unwrap_or(&[]);

    PageSlice {
        items: visible,
        total_pages,
    }
}

/// Page cursor and fixed page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    page_size: usize,
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Move to `page` if it lies within `[1, total_pages]`
    ///
    /// Returns whether the cursor moved.
    pub fn go_to(&mut self, page: usize, total_pages: usize) -> bool {
        if page == 0 || page > total_pages || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

/// Query parameters for the rental listing
///
/// All parameters are optional. Empty date parameters count as absent, the
/// way an untouched date picker submits them.
///
/// # Example
/// ```text
/// GET /rentals?page=2
/// GET /rentals?name=smith&startDate=2024-06-01&endDate=2024-06-30
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RentalQuery {
    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: usize,

    /// Customer name fragment
    pub name: Option<String>,

    /// Start date floor, `YYYY-MM-DD`
    pub start_date: Option<String>,

    /// End date ceiling, `YYYY-MM-DD`
    pub end_date: Option<String>,
}

fn default_page() -> usize {
    1
}

impl Default for RentalQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            name: None,
            start_date: None,
            end_date: None,
        }
    }
}

impl RentalQuery {
    /// Requested page, refusing page 0
    pub fn page(&self) -> Result<usize, ValidationError> {
        if self.page == 0 {
            return Err(ValidationError::InvalidPage { page: self.page });
        }
        Ok(self.page)
    }

    pub fn criteria(&self) -> Result<FilterCriteria, ValidationError> {
        FilterCriteria::from_inputs(
            self.name.as_deref().unwrap_or_default(),
            self.start_date.as_deref().unwrap_or_default(),
            self.end_date.as_deref().unwrap_or_default(),
        )
    }
}

/// Paginated response structure
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    /// The visible page
    pub data: Vec<T>,

    pub pagination: PaginationMeta,

    pub navigation: Navigation,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub page_size: usize,

    /// Total number of items (after filters)
    pub total: usize,

    pub total_pages: usize,

    pub has_next: bool,

    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_pages(total, page_size);

        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// A direct page selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub number: usize,
    pub active: bool,
}

/// State of the pagination controls
///
/// Previous is disabled on page 1. Next is disabled on the last page, and
/// also when there are no pages at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub pages: Vec<PageLink>,
}

impl Navigation {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            previous_enabled: current_page > 1,
            next_enabled: current_page < total_pages,
            pages: (1..=total_pages)
                .map(|number| PageLink {
                    number,
                    active: number == current_page,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(145, 20), 8);
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn test_paginate_clips_last_page() {
        let items: Vec<u32> = (1..=12).collect();

        let first = paginate(&items, 1, 10);
        assert_eq!(first.items, &items[..10]);
        assert_eq!(first.total_pages, 2);

        let second = paginate(&items, 2, 10);
        assert_eq!(second.items, &[11, 12]);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let items: Vec<u32> = (1..=12).collect();

        assert!(paginate(&items, 3, 10).items.is_empty());
        assert!(paginate(&items, 0, 10).items.is_empty());
        assert!(paginate(&items, usize::MAX, 10).items.is_empty());
        assert_eq!(paginate(&items, 3, 10).total_pages, 2);
    }

    #[test]
    fn test_paginate_empty_collection() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 1, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_pagination_state_refuses_invalid_pages() {
        let mut state = PaginationState::default();
        assert_eq!(state.page_size(), PAGE_SIZE);

        assert!(!state.go_to(0, 3));
        assert!(!state.go_to(4, 3));
        assert!(state.go_to(3, 3));
        assert_eq!(state.current_page(), 3);

        state.reset();
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_rental_query_defaults() {
        let query = RentalQuery::default();
        assert_eq!(query.page().unwrap(), 1);
        assert!(query.criteria().unwrap().is_unfiltered());
    }

    #[test]
    fn test_rental_query_rejects_page_zero() {
        let query = RentalQuery {
            page: 0,
            ..RentalQuery::default()
        };
        assert_eq!(query.page(), Err(ValidationError::InvalidPage { page: 0 }));
    }

    #[test]
    fn test_pagination_meta() {
        let meta = PaginationMeta::new(1, 20, 145);
        assert_eq!(meta.total, 145);
        assert_eq!(meta.total_pages, 8);
        assert!(!meta.has_prev);
        assert!(meta.has_next);

        let empty = PaginationMeta::new(1, 10, 0);
        assert_eq!(empty.total_pages, 0);
        assert!(!empty.has_next);
        assert!(!empty.has_prev);
    }

    #[test]
    fn test_navigation_on_last_page() {
        let nav = Navigation::new(2, 2);
        assert!(nav.previous_enabled);
        assert!(!nav.next_enabled);
        assert_eq!(
            nav.pages,
            vec![
                PageLink { number: 1, active: false },
                PageLink { number: 2, active: true },
            ]
        );
    }

    #[test]
    fn test_navigation_without_pages() {
        let nav = Navigation::new(1, 0);
        assert!(!nav.previous_enabled);
        assert!(!nav.next_enabled);
        assert!(nav.pages.is_empty());
    }
}
