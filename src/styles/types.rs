//! Style definitions
//!
//! A style is pure data: markup templates with `{{ variable }}` slots that
//! the renderers fill in. Nothing here knows about pages or URLs.

use crate::error::{Error, Result};
use crate::template::extract_variables;
use serde::{Deserialize, Serialize};

/// Label variables every markup template may reference
const LABEL_VARS: &[&str] = &["prev_label", "next_label", "gap_label"];

/// A prev or next control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    /// Markup around the anchor when the control is active; `{{ anchor }}`
    pub enabled: String,
    /// Anchor text
    pub text: String,
    /// Extra anchor attributes
    #[serde(default)]
    pub extra: String,
    /// Markup when there is no page to go to
    pub disabled: String,
}

/// A per-page item (link or active page)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFragment {
    /// Markup; `{{ anchor }}` and `{{ page }}`
    pub template: String,
    /// Extra anchor attributes; `{{ page }}`
    #[serde(default)]
    pub extra: String,
}

/// Markup for the numbered nav (static and JS-driven)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavStyle {
    /// Opening tag of the static nav
    pub container: String,
    /// Closing tag of the static nav
    pub container_end: String,
    /// Empty element the client fills in; `{{ id }}`
    pub js_container: String,
    /// Attributes added to every anchor of this style
    #[serde(default)]
    pub link_extra: String,
    /// Markup before the pages; `{{ prev }}`, `{{ next }}`
    pub before: String,
    /// Markup after the pages; `{{ prev }}`, `{{ next }}`
    pub after: String,
    pub prev: Control,
    pub next: Control,
    pub link: ItemFragment,
    pub active: ItemFragment,
    pub gap: String,
}

/// Markup for the combo nav (prev/next plus a page input)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboStyle {
    /// Opening markup; `{{ id }}`
    pub open: String,
    /// Closing markup
    pub close: String,
    /// Attributes added to every anchor of the combo nav
    #[serde(default)]
    pub link_extra: String,
    pub prev: Control,
    pub next: Control,
    /// The numeric input; `{{ page }}`, `{{ pages }}`, `{{ input_width }}`
    pub input: String,
    /// Markup around the combo label; `{{ combo_label }}`
    pub wrapper: String,
}

/// A named nav style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub name: String,
    pub nav: NavStyle,
    pub combo: ComboStyle,
}

impl Style {
    /// Check that every template only references variables its renderer provides
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::config("Style name cannot be empty"));
        }

        let nav = &self.nav;
        self.check("nav.container", &nav.container, &[])?;
        self.check("nav.container_end", &nav.container_end, &[])?;
        self.check("nav.js_container", &nav.js_container, &["id"])?;
        self.check("nav.link_extra", &nav.link_extra, &[])?;
        self.check("nav.before", &nav.before, &["prev", "next"])?;
        self.check("nav.after", &nav.after, &["prev", "next"])?;
        self.check_control("nav.prev", &nav.prev)?;
        self.check_control("nav.next", &nav.next)?;
        self.check_item("nav.link", &nav.link)?;
        self.check_item("nav.active", &nav.active)?;
        self.check("nav.gap", &nav.gap, &[])?;

        let combo = &self.combo;
        self.check("combo.open", &combo.open, &["id"])?;
        self.check("combo.close", &combo.close, &[])?;
        self.check("combo.link_extra", &combo.link_extra, &[])?;
        self.check_control("combo.prev", &combo.prev)?;
        self.check_control("combo.next", &combo.next)?;
        self.check("combo.input", &combo.input, &["page", "pages", "input_width"])?;
        self.check("combo.wrapper", &combo.wrapper, &["combo_label", "page", "pages"])?;

        Ok(())
    }

    fn check_control(&self, field: &str, control: &Control) -> Result<()> {
        self.check(&format!("{field}.enabled"), &control.enabled, &["anchor"])?;
        self.check(&format!("{field}.text"), &control.text, &[])?;
        self.check(&format!("{field}.extra"), &control.extra, &["page"])?;
        self.check(&format!("{field}.disabled"), &control.disabled, &[])
    }

    fn check_item(&self, field: &str, item: &ItemFragment) -> Result<()> {
        self.check(&format!("{field}.template"), &item.template, &["anchor", "page"])?;
        self.check(&format!("{field}.extra"), &item.extra, &["page"])
    }

    fn check(&self, field: &str, template: &str, allowed: &[&str]) -> Result<()> {
        for var in extract_variables(template) {
            if !allowed.contains(&var.as_str()) && !LABEL_VARS.contains(&var.as_str()) {
                return Err(Error::template(format!(
                    "style '{}': {} references unknown variable '{}'",
                    self.name, field, var
                )));
            }
        }
        Ok(())
    }
}
