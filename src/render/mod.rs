//! Render module
//!
//! Turns a series into markup: the static nav, the JS nav and combo nav
//! (container plus JSON payload for the client script), and the info line.

mod info;
mod nav;
mod protocol;

pub use info::render_info;
pub use nav::{render_nav, render_nav_with};
pub use protocol::{
    render_combo_nav_js, render_combo_nav_js_with, render_nav_js, render_nav_js_with, JsNav,
    NavFragments, Payload,
};
