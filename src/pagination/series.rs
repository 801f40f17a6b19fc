//! Series generation
//!
//! Collapses the page range into the labels and gaps a nav shows: a head
//! block, a window around the current page and a tail block, joined by gaps
//! only where more than one page is hidden.

use super::state::PaginationState;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use tracing::warn;

/// One entry of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesItem {
    /// A linked page
    Page(u64),
    /// The current page
    Current(u64),
    /// One or more hidden pages
    Gap,
}

impl SeriesItem {
    /// The page number, if this item is a page
    pub fn number(self) -> Option<u64> {
        match self {
            Self::Page(n) | Self::Current(n) => Some(n),
            Self::Gap => None,
        }
    }
}

/// Compact wire form: numbers for pages, a string for the current page, `"gap"` for gaps
impl Serialize for SeriesItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(n) => serializer.serialize_u64(*n),
            Self::Current(n) => serializer.collect_str(n),
            Self::Gap => serializer.serialize_str("gap"),
        }
    }
}

impl fmt::Display for SeriesItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Current(n) => write!(f, "[{n}]"),
            Self::Gap => f.write_str("…"),
        }
    }
}

// ============================================================================
// Series Size
// ============================================================================

/// Shape of a series: `[head, before, after, tail]`
///
/// `head`/`tail` are the pages always shown at each end, `before`/`after`
/// the pages shown on each side of the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u64; 4]", into = "[u64; 4]")]
pub struct SeriesSize {
    pub head: u64,
    pub before: u64,
    pub after: u64,
    pub tail: u64,
}

impl SeriesSize {
    /// Create a series shape
    pub const fn new(head: u64, before: u64, after: u64, tail: u64) -> Self {
        Self {
            head,
            before,
            after,
            tail,
        }
    }

    /// One page at each end and `window` pages on each side of the current one
    pub const fn window(window: u64) -> Self {
        Self::new(1, window, window, 1)
    }

    /// Highest page count that is always shown without gaps
    ///
    /// Both ends, the window, the current page and the two gaps together
    /// occupy this many slots.
    pub fn full_threshold(&self) -> u64 {
        self.head
            .saturating_add(self.before)
            .saturating_add(self.after)
            .saturating_add(self.tail)
            .saturating_add(3)
    }
}

impl From<[u64; 4]> for SeriesSize {
    fn from([head, before, after, tail]: [u64; 4]) -> Self {
        Self::new(head, before, after, tail)
    }
}

impl From<SeriesSize> for [u64; 4] {
    fn from(size: SeriesSize) -> Self {
        [size.head, size.before, size.after, size.tail]
    }
}

// ============================================================================
// Generation
// ============================================================================

/// Generate the series for a symmetric window
pub fn generate(state: &PaginationState, window: u64) -> Vec<SeriesItem> {
    generate_with(state, SeriesSize::window(window))
}

/// Generate the series for an arbitrary shape
pub fn generate_with(state: &PaginationState, size: SeriesSize) -> Vec<SeriesItem> {
    let page = state.page();
    let last = state.last();

    let mut series = if last <= size.full_threshold() {
        (1..=last).map(SeriesItem::Page).collect()
    } else {
        collapse(page, last, size)
    };

    let mut has_current = false;
    for item in &mut series {
        if *item == SeriesItem::Page(page) {
            *item = SeriesItem::Current(page);
            has_current = true;
        }
    }

    if !has_current {
        warn!(page, last, "rendering out-of-range page as current");
        series.push(SeriesItem::Current(page));
    }

    series
}

/// Walk the sorted boundary points and fill or collapse the holes between them
fn collapse(page: u64, last: u64, size: SeriesSize) -> Vec<SeriesItem> {
    // Signed so the window may start before page 1; 0 and last+1 are sentinels.
    // Points outside -1..=last+1 are never emitted, so the window is clamped
    // to that range; huge out-of-range pages then cannot overflow.
    let last = signed(last);
    let page = signed(page);
    let start = page.saturating_sub(signed(size.before)).max(-1);
    let end = page.saturating_add(signed(size.after)).min(last + 1);
    let mut points: Vec<i64> = (0..=signed(size.head))
        .chain(start..=end)
        .chain(last - signed(size.tail) + 1..=last + 1)
        .collect();
    points.sort_unstable();

    let mut series = Vec::new();
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a < 0 || a == b || a > last {
            continue;
        }
        if a > 0 {
            series.push(SeriesItem::Page(a as u64));
        }
        // a single hidden page is shown instead of a gap
        if a + 2 == b {
            series.push(SeriesItem::Page(a as u64 + 1));
        } else if a + 2 < b {
            series.push(SeriesItem::Gap);
        }
    }
    series
}

fn signed(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

// ============================================================================
// Sequels
// ============================================================================

/// Series per responsive breakpoint, ascending by width
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequels {
    entries: Vec<(u32, Vec<SeriesItem>)>,
}

impl Sequels {
    /// Build one series per breakpoint
    pub fn generate(state: &PaginationState, sizes: &[(u32, SeriesSize)]) -> Self {
        Self::from_entries(
            sizes
                .iter()
                .map(|(width, size)| (*width, generate_with(state, *size)))
                .collect(),
        )
    }

    /// Wrap a single series as the `0` breakpoint
    pub fn single(series: Vec<SeriesItem>) -> Self {
        Self {
            entries: vec![(0, series)],
        }
    }

    /// Build from raw entries; sorts by width
    pub fn from_entries(mut entries: Vec<(u32, Vec<SeriesItem>)>) -> Self {
        entries.sort_by_key(|(width, _)| *width);
        Self { entries }
    }

    /// All entries, ascending by width
    pub fn entries(&self) -> &[(u32, Vec<SeriesItem>)] {
        &self.entries
    }

    /// The series for a viewport width: the widest breakpoint not above it
    pub fn for_width(&self, width: u32) -> Option<&[SeriesItem]> {
        self.entries
            .iter()
            .rev()
            .find(|(w, _)| *w <= width)
            .map(|(_, series)| series.as_slice())
    }
}

/// Wire form: `{"<width>": [items...], ...}` in ascending width order
impl Serialize for Sequels {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (width, series) in &self.entries {
            map.serialize_entry(&width.to_string(), &SeriesList(series))?;
        }
        map.end()
    }
}

struct SeriesList<'a>(&'a [SeriesItem]);

impl Serialize for SeriesList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for item in self.0 {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}
