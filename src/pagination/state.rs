//! Pagination state
//!
//! Immutable page arithmetic computed once per request from the item count,
//! the page size and the requested page.

use crate::config::PagyConfig;
use crate::error::{Error, Result};
use serde::Serialize;

/// Options that change how a state is built
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateOptions {
    /// Items skipped before the first page
    pub outset: u64,
    /// Fail with `OutOfRange` when the page is past the last one
    pub strict: bool,
}

/// Page arithmetic for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    count: u64,
    items: u64,
    page: u64,
    outset: u64,
    last: u64,
}

impl PaginationState {
    /// Create a permissive state
    pub fn new(count: i64, items: i64, page: i64) -> Result<Self> {
        Self::create(count, items, page, &StateOptions::default())
    }

    /// Create a state from a configuration (items, outset, strictness)
    pub fn from_config(count: i64, page: i64, config: &PagyConfig) -> Result<Self> {
        let items = i64::try_from(config.items)
            .map_err(|_| Error::invalid_argument("items", "too large"))?;
        let options = StateOptions {
            outset: config.outset,
            strict: config.strict,
        };
        Self::create(count, items, page, &options)
    }

    /// Create a state with explicit options
    pub fn create(count: i64, items: i64, page: i64, options: &StateOptions) -> Result<Self> {
        if count < 0 {
            return Err(Error::invalid_argument(
                "count",
                format!("must be >= 0, got {count}"),
            ));
        }
        if items <= 0 {
            return Err(Error::invalid_argument(
                "items",
                format!("must be > 0, got {items}"),
            ));
        }
        if page < 1 {
            return Err(Error::invalid_argument(
                "page",
                format!("must be >= 1, got {page}"),
            ));
        }

        let (count, items, page) = (count as u64, items as u64, page as u64);
        let last = count.div_ceil(items).max(1);

        if options.strict && page > last {
            return Err(Error::OutOfRange { page, last });
        }

        Ok(Self {
            count,
            items,
            page,
            outset: options.outset,
            last,
        })
    }

    /// Total number of items
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Items per page
    pub fn items(&self) -> u64 {
        self.items
    }

    /// The requested page
    pub fn page(&self) -> u64 {
        self.page
    }

    /// The last page (at least 1)
    pub fn last(&self) -> u64 {
        self.last
    }

    /// Items skipped before the first page
    pub fn outset(&self) -> u64 {
        self.outset
    }

    /// Whether the requested page lies in `1..=last`
    pub fn in_range(&self) -> bool {
        self.page <= self.last
    }

    /// Offset of the first item of the page
    ///
    /// Saturates for far out-of-range pages instead of overflowing.
    pub fn offset(&self) -> u64 {
        self.items
            .saturating_mul(self.page - 1)
            .saturating_add(self.outset)
    }

    /// 1-based index of the first item shown (0 for an empty page)
    pub fn from(&self) -> u64 {
        self.items
            .saturating_mul(self.page - 1)
            .saturating_add(1)
            .min(self.count)
    }

    /// 1-based index of the last item shown
    pub fn to(&self) -> u64 {
        self.items.saturating_mul(self.page).min(self.count)
    }

    /// The previous page, if any
    pub fn prev(&self) -> Option<u64> {
        (self.page > 1).then(|| self.page - 1)
    }

    /// The next page, if any
    pub fn next(&self) -> Option<u64> {
        (self.page < self.last).then(|| self.page + 1)
    }
}
