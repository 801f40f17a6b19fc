//! Link module
//!
//! Builds per-page URLs and anchors from the request URL.
//!
//! # Overview
//!
//! `build_url` upserts the page parameter into a base URL, keeping the order
//! of the other query pairs, or drops it for page 1 in trim mode.
//! `LinkBuilder` does the same work once per render and then stamps out
//! anchors (with `rel="prev"`/`rel="next"` on the neighbours of the current
//! page) for every page a nav shows.

mod builder;
mod query;

pub use builder::{LinkBuilder, LinkSpec, StyledLinks};
pub use query::{build_url, trim_page_param, UrlParts};
