//! Pagination module
//!
//! Page arithmetic and series generation.
//!
//! # Overview
//!
//! `PaginationState` turns `(count, items, page)` into the last page, item
//! offsets and neighbours. The series functions collapse `1..=last` into the
//! labels and gaps a nav control shows around the current page, optionally
//! once per responsive breakpoint (`Sequels`).

mod series;
mod state;

pub use series::{generate, generate_with, SeriesItem, SeriesSize, Sequels};
pub use state::{PaginationState, StateOptions};
