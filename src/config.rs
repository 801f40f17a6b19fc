//! Configuration for pagination rendering
//!
//! `PagyConfig` gathers every knob the state, series, link builder and
//! renderers read. It can be loaded from YAML or JSON and installed once as
//! the process-wide default.

use crate::error::{Error, Result};
use crate::pagination::SeriesSize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Default number of items per page
pub const DEFAULT_ITEMS: u64 = 20;

/// Default number of pages shown on each side of the current page
pub const DEFAULT_WINDOW: u64 = 4;

/// Default query parameter carrying the page number
pub const DEFAULT_PAGE_PARAM: &str = "page";

static DEFAULTS: OnceLock<PagyConfig> = OnceLock::new();

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete pagination configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagyConfig {
    /// Items per page
    pub items: u64,

    /// Items skipped before the first page
    pub outset: u64,

    /// Series shape: `[head, before, after, tail]`
    pub size: SeriesSize,

    /// Responsive series shapes keyed by minimum viewport width
    pub breakpoints: BTreeMap<u32, SeriesSize>,

    /// Query parameter carrying the page number
    pub page_param: String,

    /// Extra query parameters merged into every page URL
    pub params: BTreeMap<String, String>,

    /// Omit the page parameter from links to page 1
    pub trim: bool,

    /// Reject pages beyond the last one instead of rendering them
    pub strict: bool,

    /// Extra attributes added to every page anchor
    pub link_extra: String,

    /// Fragment appended to every page URL (e.g. `#results`)
    pub fragment: String,

    /// Emit `scheme://host` in page URLs
    pub absolute: bool,

    /// Add `rel="prev"`/`rel="next"` to the numbered neighbour links
    pub page_rel: bool,

    /// Style used when none is named
    pub style: String,

    /// User-visible strings
    pub labels: Labels,
}

impl Default for PagyConfig {
    fn default() -> Self {
        Self {
            items: DEFAULT_ITEMS,
            outset: 0,
            size: SeriesSize::window(DEFAULT_WINDOW),
            breakpoints: BTreeMap::new(),
            page_param: DEFAULT_PAGE_PARAM.to_string(),
            params: BTreeMap::new(),
            trim: false,
            strict: false,
            link_extra: String::new(),
            fragment: String::new(),
            absolute: false,
            page_rel: true,
            style: "default".to_string(),
            labels: Labels::default(),
        }
    }
}

impl PagyConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a symmetric window of `window` pages around the current page
    pub fn with_window(mut self, window: u64) -> Self {
        self.size = SeriesSize::window(window);
        self
    }

    /// Enable or disable trimming of the page-1 parameter
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Enable or disable strict page range checking
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The series shapes to emit, ascending by breakpoint width
    ///
    /// Without configured breakpoints this is the single `0` breakpoint
    /// using `size`.
    pub fn sequel_sizes(&self) -> Vec<(u32, SeriesSize)> {
        if self.breakpoints.is_empty() {
            vec![(0, self.size)]
        } else {
            self.breakpoints.iter().map(|(w, s)| (*w, *s)).collect()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.items == 0 {
            return Err(Error::config("items must be greater than 0"));
        }

        if self.page_param.is_empty() {
            return Err(Error::config("page_param cannot be empty"));
        }

        if self.page_param.contains(['=', '&', '?', '#']) {
            return Err(Error::config(format!(
                "page_param '{}' contains a reserved URL character",
                self.page_param
            )));
        }

        if !self.breakpoints.is_empty() && !self.breakpoints.contains_key(&0) {
            return Err(Error::config("breakpoints must include the 0 width"));
        }

        if !self.fragment.is_empty() && !self.fragment.starts_with('#') {
            return Err(Error::config(format!(
                "fragment '{}' must start with '#'",
                self.fragment
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Labels
// ============================================================================

/// User-visible strings, substituted verbatim into markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Previous-page control text
    pub prev: String,
    /// Next-page control text
    pub next: String,
    /// Gap marker text
    pub gap: String,
    /// Combo nav text around the page input; `{{ page_input }}`, `{{ page }}`, `{{ pages }}`
    pub combo: String,
    /// Item name used by the info line when there is one item
    pub item: String,
    /// Item name used by the info line otherwise
    pub items: String,
    /// Info line for an empty collection; `{{ item_name }}`
    pub info_empty: String,
    /// Info line for a single page; `{{ item_name }}`, `{{ count }}`
    pub info_single: String,
    /// Info line for many pages; `{{ item_name }}`, `{{ from }}`, `{{ to }}`, `{{ count }}`
    pub info_multiple: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            prev: "&lsaquo;&nbsp;Prev".to_string(),
            next: "Next&nbsp;&rsaquo;".to_string(),
            gap: "&hellip;".to_string(),
            combo: "Page {{ page_input }} of {{ pages }}".to_string(),
            item: "item".to_string(),
            items: "items".to_string(),
            info_empty: "No {{ item_name }} found".to_string(),
            info_single: "Displaying <b>{{ count }}</b> {{ item_name }}".to_string(),
            info_multiple:
                "Displaying {{ item_name }} <b>{{ from }}-{{ to }}</b> of <b>{{ count }}</b> in total"
                    .to_string(),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a configuration file (`.json`, otherwise YAML)
pub fn load_config(path: impl AsRef<Path>) -> Result<PagyConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config: PagyConfig = if is_json {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };

    config.validate()?;
    Ok(config)
}

/// Load a configuration from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<PagyConfig> {
    let config: PagyConfig = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;

    config.validate()?;
    Ok(config)
}

// ============================================================================
// Process-wide Defaults
// ============================================================================

/// Install the process-wide default configuration
///
/// Can succeed only once, and only before `defaults()` was first read.
pub fn init(config: PagyConfig) -> Result<()> {
    config.validate()?;
    DEFAULTS
        .set(config)
        .map_err(|_| Error::config("default configuration is already initialized"))
}

/// The process-wide default configuration
pub fn defaults() -> &'static PagyConfig {
    DEFAULTS.get_or_init(PagyConfig::default)
}
