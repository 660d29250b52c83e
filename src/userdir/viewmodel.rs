//! # List View-Model
//!
//! [`ListViewModel`] decides which records a list view shows at any moment. It owns
//! three pieces of state:
//!
//! - the full record set, replaced wholesale by [`ListViewModel::load`]
//! - the search query, set by [`ListViewModel::set_query`]
//! - the current page, set by [`ListViewModel::set_page`] and the step helpers
//!
//! Everything else (the filtered set, the visible slice, the page count) is derived.
//! The filtered set is recomputed eagerly on every mutation, so reads never observe
//! stale data.
//!
//! ## Contract
//!
//! - The filtered set is the order-preserving subset of records for which any
//!   searchable field contains the query, compared case-insensitively. An empty query
//!   matches everything.
//! - Loading records or changing the query always returns to page 1.
//! - The current page is always within `1..=total_pages()`, and `total_pages()` is at
//!   least 1 even when nothing matches.
//! - No operation fails. Out-of-range pages are clamped.
//!
//! The view-model performs no I/O and knows nothing about how records were fetched.
//! Loader status lives beside it, in [`crate::api::LoadState`].

use std::num::NonZeroUsize;
use std::ops::RangeInclusive;

/// Records that expose text fields to the search query.
pub trait Searchable {
    /// The fields matched against the query. A record matches when any field does.
    fn search_fields(&self) -> Vec<&str>;
}

/// Extracts the searchable fields of a record.
pub type FieldExtractor<T> = fn(&T) -> Vec<&str>;

/// Number of records per page. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub const DEFAULT: PageSize = match NonZeroUsize::new(5) {
        Some(size) => PageSize(size),
        None => unreachable!(),
    };

    /// Returns `None` for zero.
    pub fn new(size: usize) -> Option<Self> {
        NonZeroUsize::new(size).map(PageSize)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Position of the visible page within the filtered set.
///
/// `start` and `end` are 1-based and inclusive ("Showing 6-10 of 12"), both zero when
/// the filtered set is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub total_pages: usize,
    pub start: usize,
    pub end: usize,
    pub filtered_len: usize,
    pub total_len: usize,
}

#[derive(Debug, Clone)]
pub struct ListViewModel<T> {
    all: Vec<T>,
    // Indexes into `all`, ascending.
    filtered: Vec<usize>,
    query: String,
    current_page: usize,
    page_size: PageSize,
    extract: FieldExtractor<T>,
}

impl<T: Searchable> ListViewModel<T> {
    /// An empty view-model searching the record's [`Searchable`] fields.
    pub fn new(page_size: PageSize) -> Self {
        Self::with_extractor(page_size, T::search_fields)
    }
}

impl<T: Searchable> Default for ListViewModel<T> {
    fn default() -> Self {
        Self::new(PageSize::DEFAULT)
    }
}

impl<T> ListViewModel<T> {
    /// An empty view-model searching the fields returned by `extract`.
    pub fn with_extractor(page_size: PageSize, extract: FieldExtractor<T>) -> Self {
        Self {
            all: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            current_page: 1,
            page_size,
            extract,
        }
    }

    /// Replaces the record set, re-applies the current query and returns to page 1.
    pub fn load(&mut self, records: Vec<T>) {
        self.all = records;
        self.refilter();
        tracing::debug!(
            records = self.all.len(),
            matching = self.filtered.len(),
            "records loaded"
        );
    }

    /// Stores `text` verbatim as the query, refilters and returns to page 1.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.refilter();
        tracing::debug!(
            query = %self.query,
            matching = self.filtered.len(),
            "query changed"
        );
    }

    /// Moves to `page`, clamped into `1..=total_pages()`.
    pub fn set_page(&mut self, page: i64) {
        let last = i64::try_from(self.total_pages()).unwrap_or(i64::MAX);
        // `page.clamp(1, last)` lies in 1..=last, which came from a usize.
        self.current_page = page.clamp(1, last) as usize;
    }

    /// Advances one page, staying on the last page.
    pub fn next_page(&mut self) {
        self.current_page = (self.current_page + 1).min(self.total_pages());
    }

    /// Goes back one page, staying on the first page.
    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Page controls are only worth showing when there is somewhere to go.
    pub fn shows_pagination(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size.get()).max(1)
    }

    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages()
    }

    /// Records on the current page, in filtered order.
    pub fn visible_page(&self) -> Vec<&T> {
        let (start, end) = self.page_bounds();
        self.filtered[start..end]
            .iter()
            .map(|&i| &self.all[i])
            .collect()
    }

    pub fn window(&self) -> PageWindow {
        let (start, end) = self.page_bounds();
        let (start, end) = if start == end {
            (0, 0)
        } else {
            (start + 1, end)
        };
        PageWindow {
            page: self.current_page,
            total_pages: self.total_pages(),
            start,
            end,
            filtered_len: self.filtered.len(),
            total_len: self.all.len(),
        }
    }

    pub fn filtered_records(&self) -> Vec<&T> {
        self.filtered.iter().map(|&i| &self.all[i]).collect()
    }

    pub fn all_records(&self) -> &[T] {
        &self.all
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// True when no records have been loaded.
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    fn refilter(&mut self) {
        let needle = self.query.to_lowercase();
        let extract = self.extract;
        self.filtered = self
            .all
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                needle.is_empty()
                    || extract(record)
                        .iter()
                        .any(|field| field.to_lowercase().contains(&needle))
            })
            .map(|(i, _)| i)
            .collect();
        self.current_page = 1;
    }

    /// Half-open bounds of the current page within `filtered`.
    fn page_bounds(&self) -> (usize, usize) {
        let len = self.filtered.len();
        let size = self.page_size.get();
        let start = (self.current_page - 1).saturating_mul(size).min(len);
        let end = start.saturating_add(size).min(len);
        (start, end)
    }
}
