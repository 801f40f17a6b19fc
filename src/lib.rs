// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::struct_excessive_bools)]

//! # pagy-nav
//!
//! A pagination presentation engine: given a result-set size, a page size
//! and a current page it computes which page labels to show, builds the
//! page links from the request URL and renders the nav.
//!
//! ## Features
//!
//! - **Page series**: head, window and tail blocks joined by gaps, with
//!   one series per responsive breakpoint
//! - **Page links**: query parameter upsert keeping pair order, optional
//!   trimming of the page-1 parameter
//! - **Static navs** for six built-in styles plus custom YAML styles
//! - **JS navs**: an empty container plus a compact JSON payload a client
//!   script expands without another request
//!
//! ## Quick Start
//!
//! ```rust
//! use pagy_nav::{Pager, PagyConfig};
//!
//! let config = PagyConfig::default().with_trim(true);
//! let pager = Pager::with_config(103, 3, "/foo?page=3", &config)?;
//!
//! let html = pager.nav("bootstrap")?;
//! assert!(html.contains("<a href=\"/foo\"  class=\"page-link\" >1</a>"));
//!
//! let js = pager.nav_js("default", "pager")?;
//! assert!(js.payload_json()?.ends_with(",\"page\"]"));
//! # Ok::<(), pagy_nav::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! PaginationState ──► series::generate ──► render_nav
//!                                     ├──► render_nav_js ──► Payload (JSON)
//!                                     └──► render_combo_nav_js
//!                 LinkBuilder (URL per page) ─┘   Style (markup templates)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types
pub mod types;

/// Template interpolation
pub mod template;

/// Configuration and process-wide defaults
pub mod config;

/// Pagination state and page series
pub mod pagination;

/// Page URLs and anchors
pub mod link;

/// Nav styles
pub mod styles;

/// Nav renderers and the JS protocol
pub mod render;

/// Per-request facade
pub mod pager;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{Labels, PagyConfig};
pub use link::{build_url, LinkBuilder};
pub use pager::Pager;
pub use pagination::{PaginationState, SeriesItem, SeriesSize, Sequels};
pub use render::{JsNav, Payload};
pub use styles::{Style, StyleRegistry};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
