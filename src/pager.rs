//! Pager facade
//!
//! Bundles one request's pagination state, link builder and configuration so
//! callers can render any nav by style name.

use crate::config::{defaults, PagyConfig};
use crate::error::Result;
use crate::link::LinkBuilder;
use crate::pagination::{generate_with, PaginationState, SeriesItem, Sequels};
use crate::render::{
    render_combo_nav_js_with, render_info, render_nav_js_with, render_nav_with, JsNav,
};
use crate::styles::{resolve, Style, StyleRegistry};
use crate::types::PageRef;

/// Everything needed to render the navs of one request
#[derive(Debug, Clone)]
pub struct Pager<'a> {
    state: PaginationState,
    links: LinkBuilder,
    config: &'a PagyConfig,
    registry: Option<&'a StyleRegistry>,
}

impl Pager<'static> {
    /// Create a pager from the process-wide default configuration
    pub fn new(count: i64, page: i64, base_url: &str) -> Result<Self> {
        Self::with_config(count, page, base_url, defaults())
    }
}

impl<'a> Pager<'a> {
    /// Create a pager from an explicit configuration
    ///
    /// The configuration is validated first.
    pub fn with_config(
        count: i64,
        page: i64,
        base_url: &str,
        config: &'a PagyConfig,
    ) -> Result<Self> {
        config.validate()?;
        let state = PaginationState::from_config(count, page, config)?;
        let links = LinkBuilder::new(&state, base_url, config)?;
        Ok(Self {
            state,
            links,
            config,
            registry: None,
        })
    }

    /// Resolve style names through `registry` (custom styles first)
    #[must_use]
    pub fn with_registry(mut self, registry: &'a StyleRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn links(&self) -> &LinkBuilder {
        &self.links
    }

    pub fn config(&self) -> &PagyConfig {
        self.config
    }

    /// Style used when the caller does not name one
    pub fn default_style(&self) -> &str {
        &self.config.style
    }

    /// URL of a page
    pub fn url_for(&self, page: impl Into<PageRef>) -> String {
        self.links.url_for(page)
    }

    /// Series for the configured size
    pub fn series(&self) -> Vec<SeriesItem> {
        generate_with(&self.state, self.config.size)
    }

    /// Series per configured breakpoint
    pub fn sequels(&self) -> Sequels {
        Sequels::generate(&self.state, &self.config.sequel_sizes())
    }

    /// Static nav markup
    pub fn nav(&self, style: &str) -> Result<String> {
        let style = self.style(style)?;
        render_nav_with(
            &self.state,
            &self.series(),
            style,
            &self.links,
            &self.config.labels,
        )
    }

    /// JS nav with one series per breakpoint
    pub fn nav_js(&self, style: &str, id: &str) -> Result<JsNav> {
        let style = self.style(style)?;
        render_nav_js_with(
            &self.state,
            &self.sequels(),
            style,
            &self.links,
            id,
            &self.config.labels,
        )
    }

    /// Combo nav
    pub fn combo_nav_js(&self, style: &str, id: &str) -> Result<JsNav> {
        let style = self.style(style)?;
        render_combo_nav_js_with(&self.state, style, &self.links, id, &self.config.labels)
    }

    /// Info line
    pub fn info(&self, item_name: Option<&str>) -> Result<String> {
        render_info(&self.state, item_name, &self.config.labels)
    }

    fn style(&self, name: &str) -> Result<&'a Style> {
        match self.registry {
            Some(registry) => registry.get(name),
            None => resolve(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::pagination::{SeriesItem, SeriesSize};
    use crate::styles::get_builtin;

    #[test]
    fn test_pager_defaults() {
        let pager = Pager::new(103, 3, "/foo").unwrap();
        assert_eq!(pager.state().last(), 6);
        assert_eq!(pager.default_style(), "default");
        assert_eq!(pager.url_for(4), "/foo?page=4");
        assert_eq!(pager.series().len(), 6);
        assert!(pager
            .nav("default")
            .unwrap()
            .starts_with("<nav class=\"pagy-nav pagination\""));
    }

    #[test]
    fn test_pager_uses_config() {
        let mut config = PagyConfig {
            items: 10,
            page_param: "p".to_string(),
            ..Default::default()
        }
        .with_window(1);
        config.labels.items = "rows".to_string();

        let pager = Pager::with_config(500, 20, "/list?p=20", &config).unwrap();
        assert_eq!(pager.state().last(), 50);
        assert_eq!(pager.url_for(21), "/list?p=21");
        assert_eq!(
            pager.series(),
            vec![
                SeriesItem::Page(1),
                SeriesItem::Gap,
                SeriesItem::Page(19),
                SeriesItem::Current(20),
                SeriesItem::Page(21),
                SeriesItem::Gap,
                SeriesItem::Page(50),
            ]
        );
        assert_eq!(
            pager.info(None).unwrap(),
            "Displaying rows <b>191-200</b> of <b>500</b> in total"
        );
    }

    #[test]
    fn test_pager_breakpoints() {
        let mut config = PagyConfig::default();
        config.breakpoints.insert(0, SeriesSize::new(1, 0, 0, 1));
        config.breakpoints.insert(900, SeriesSize::window(2));

        let pager = Pager::with_config(1000, 25, "/foo", &config).unwrap();
        let widths: Vec<u32> = pager.sequels().entries().iter().map(|(w, _)| *w).collect();
        assert_eq!(widths, vec![0, 900]);

        let json = pager.nav_js("bulma", "nav").unwrap().payload_json().unwrap();
        assert!(json.contains("\"900\":"));
    }

    #[test]
    fn test_pager_strict_out_of_range() {
        let config = PagyConfig::default().with_strict(true);
        let err = Pager::with_config(103, 7, "/foo", &config).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { page: 7, last: 6 }));
    }

    #[test]
    fn test_pager_rejects_invalid_config() {
        let config = PagyConfig {
            page_param: String::new(),
            ..Default::default()
        };
        let err = Pager::with_config(103, 1, "/foo", &config).unwrap_err();
        assert!(matches!(err, Error::Config { .. }), "{err:?}");
    }

    #[test]
    fn test_pager_unknown_style() {
        let pager = Pager::new(103, 1, "/foo").unwrap();
        assert!(matches!(
            pager.combo_nav_js("tailwind", "x"),
            Err(Error::UnknownStyle { .. })
        ));
    }

    #[test]
    fn test_pager_custom_registry() {
        let mut compact = get_builtin("default").unwrap().clone();
        compact.name = "compact".to_string();
        compact.nav.container = "<nav class=\"compact\">".to_string();

        let mut registry = StyleRegistry::new();
        registry.register(compact).unwrap();

        let pager = Pager::new(40, 1, "/foo").unwrap().with_registry(&registry);
        assert!(pager
            .nav("compact")
            .unwrap()
            .starts_with("<nav class=\"compact\">"));
        assert!(pager.nav("semantic").is_ok());
    }
}
