//! Style lookup
//!
//! The built-in styles live in a process-wide static; callers that define
//! their own styles keep them in a `StyleRegistry`.

use super::builtin;
use super::types::Style;
use crate::error::{Error, Result, ResultExt};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// Built-in styles by name
pub static BUILTIN_STYLES: LazyLock<HashMap<String, Style>> = LazyLock::new(|| {
    builtin::all()
        .into_iter()
        .map(|style| (style.name.clone(), style))
        .collect()
});

/// Get a built-in style by name
pub fn get_builtin(name: &str) -> Option<&'static Style> {
    BUILTIN_STYLES.get(name)
}

/// Check if a style name is a built-in style
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_STYLES.contains_key(name)
}

/// List all built-in style names
pub fn list_builtin() -> Vec<&'static str> {
    vec![
        "default",
        "bootstrap",
        "bulma",
        "foundation",
        "materialize",
        "semantic",
    ]
}

/// Style metadata for display
#[derive(Debug, Clone)]
pub struct StyleInfo {
    pub name: &'static str,
    pub framework: &'static str,
    pub description: &'static str,
}

/// Get display info about all built-in styles
pub fn list_builtin_info() -> Vec<StyleInfo> {
    vec![
        StyleInfo {
            name: "default",
            framework: "none",
            description: "Plain spans inside a nav element",
        },
        StyleInfo {
            name: "bootstrap",
            framework: "Bootstrap",
            description: "ul.pagination with page-item/page-link, btn-group combo",
        },
        StyleInfo {
            name: "bulma",
            framework: "Bulma",
            description: "pagination-list with pagination-link, field combo",
        },
        StyleInfo {
            name: "foundation",
            framework: "Foundation",
            description: "ul.pagination, input-group combo",
        },
        StyleInfo {
            name: "materialize",
            framework: "Materialize",
            description: "waves-effect items with material icons, chip combo",
        },
        StyleInfo {
            name: "semantic",
            framework: "Semantic UI",
            description: "ui pagination menu with chevron icons, compact menu combo",
        },
    ]
}

/// Resolve a built-in style by name
pub fn resolve(name: &str) -> Result<&'static Style> {
    get_builtin(name).ok_or_else(|| Error::unknown_style(name))
}

/// Built-in styles plus caller-defined ones
///
/// Custom styles shadow built-ins of the same name.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    custom: HashMap<String, Style>,
}

impl StyleRegistry {
    /// Create a registry holding only the built-in styles
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a validated style
    pub fn register(&mut self, style: Style) -> Result<()> {
        style.validate()?;
        debug!(style = %style.name, "registered custom style");
        self.custom.insert(style.name.clone(), style);
        Ok(())
    }

    /// Register every style of a YAML document (a list of styles)
    pub fn load_from_str(&mut self, yaml: &str) -> Result<usize> {
        let styles: Vec<Style> = serde_yaml::from_str(yaml)?;
        let count = styles.len();
        for style in styles {
            self.register(style)?;
        }
        Ok(count)
    }

    /// Register every style of a YAML file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read styles file: {}", path.display()))?;
        self.load_from_str(&content)
    }

    /// Look up a style, custom first
    pub fn get(&self, name: &str) -> Result<&Style> {
        self.custom
            .get(name)
            .or_else(|| get_builtin(name))
            .ok_or_else(|| Error::unknown_style(name))
    }

    /// All known style names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = BUILTIN_STYLES
            .keys()
            .chain(self.custom.keys())
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}
