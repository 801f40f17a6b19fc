//! CLI module
//!
//! Command-line interface for rendering navs.
//!
//! # Commands
//!
//! - `series` - Print the page series as JSON
//! - `nav` - Render the static nav
//! - `nav-js` - Render the JS nav container and payload
//! - `combo-nav-js` - Render the combo nav container and payload
//! - `info` - Render the info line
//! - `url` - Build the URL of a page
//! - `expand` - Expand a JS nav payload
//! - `styles` - List available styles

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, PageArgs};
pub use runner::Runner;
