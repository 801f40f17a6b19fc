//! Page link builder
//!
//! Resolves the base URL once per render, then produces URLs, link specs and
//! anchors for any page (or for the client-side placeholder).

use super::query::UrlParts;
use crate::config::PagyConfig;
use crate::error::{Error, Result};
use crate::pagination::PaginationState;
use crate::template::{fill_placeholder, PAGE_PLACEHOLDER};
use crate::types::{PageRef, Relation};
use serde::Serialize;
use tracing::debug;

/// A link to one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSpec {
    /// Page URL
    pub url: String,
    /// Target page
    pub page: u64,
    /// Relation to the current page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<Relation>,
}

/// Builds the page links of one pagination state
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    /// URL with the page value replaced by the placeholder
    href_template: String,
    /// URL without the page parameter, when trimming
    trimmed_href: Option<String>,
    page_param: String,
    link_extra: String,
    page_rel: bool,
    prev: Option<u64>,
    next: Option<u64>,
}

impl LinkBuilder {
    /// Create a builder for `state` from the request URL
    pub fn new(state: &PaginationState, base_url: &str, config: &PagyConfig) -> Result<Self> {
        let mut parts = UrlParts::parse(base_url)?;
        if config.absolute && parts.origin().is_none() {
            return Err(Error::malformed_url(
                base_url,
                "absolute links need an absolute base URL",
            ));
        }

        for (name, value) in &config.params {
            parts.set_param(name, value);
        }

        let trimmed_href = config.trim.then(|| {
            let mut trimmed = parts.clone();
            trimmed.remove_param(&config.page_param);
            trimmed.to_url(config.absolute, &config.fragment)
        });

        parts.set_param(&config.page_param, PAGE_PLACEHOLDER);
        let href_template = parts.to_url(config.absolute, &config.fragment);

        debug!(href = %href_template, trim = config.trim, "resolved page link template");

        Ok(Self {
            href_template,
            trimmed_href,
            page_param: config.page_param.clone(),
            link_extra: config.link_extra.clone(),
            page_rel: config.page_rel,
            prev: state.prev(),
            next: state.next(),
        })
    }

    /// The page parameter name
    pub fn page_param(&self) -> &str {
        &self.page_param
    }

    /// The parameter name the client must trim, when trimming is on
    pub fn trim_param(&self) -> Option<&str> {
        self.trimmed_href.as_ref().map(|_| self.page_param.as_str())
    }

    /// URL of a page
    pub fn url_for(&self, page: impl Into<PageRef>) -> String {
        match (page.into(), &self.trimmed_href) {
            (PageRef::Page(1), Some(trimmed)) => trimmed.clone(),
            (PageRef::Page(n), _) => fill_placeholder(&self.href_template, n),
            (PageRef::Placeholder, _) => self.href_template.clone(),
        }
    }

    /// Relation of `page` to the current page
    pub fn relation(&self, page: u64) -> Option<Relation> {
        if Some(page) == self.prev {
            Some(Relation::Prev)
        } else if Some(page) == self.next {
            Some(Relation::Next)
        } else {
            None
        }
    }

    /// Link spec of a page
    pub fn link_spec(&self, page: u64) -> LinkSpec {
        LinkSpec {
            url: self.url_for(page),
            page,
            relation: self.relation(page),
        }
    }

    /// View of this builder that adds a style's anchor attributes
    pub fn styled<'a>(&'a self, style_extra: &'a str) -> StyledLinks<'a> {
        StyledLinks {
            links: self,
            style_extra,
        }
    }

    /// Anchor to a numbered page, without style attributes
    pub fn anchor(&self, page: impl Into<PageRef>, text: &str, extra: &str) -> String {
        self.styled("").page_anchor(page.into(), text, extra)
    }
}

/// Anchor factory for one style
#[derive(Debug, Clone, Copy)]
pub struct StyledLinks<'a> {
    links: &'a LinkBuilder,
    style_extra: &'a str,
}

impl StyledLinks<'_> {
    /// The underlying builder
    pub fn links(&self) -> &LinkBuilder {
        self.links
    }

    /// Anchor for a numbered page link; carries `rel` only when configured
    pub fn page_anchor(&self, page: PageRef, text: &str, extra: &str) -> String {
        self.build(page, text, extra, self.links.page_rel)
    }

    /// Anchor for a prev/next control; always carries `rel`
    pub fn control_anchor(&self, page: u64, text: &str, extra: &str) -> String {
        self.build(PageRef::Page(page), text, extra, true)
    }

    /// Hidden anchor the combo nav client clones to build URLs
    pub fn marked_anchor(&self) -> String {
        self.build(PageRef::Placeholder, "", "style=\"display: none;\"", false)
    }

    fn build(&self, page: PageRef, text: &str, extra: &str, with_rel: bool) -> String {
        let rel = match page {
            PageRef::Page(n) if with_rel => self
                .links
                .relation(n)
                .map(|r| format!(" rel=\"{r}\""))
                .unwrap_or_default(),
            _ => String::new(),
        };
        format!(
            "<a href=\"{}\" {} {}{} {}>{}</a>",
            self.links.url_for(page),
            self.links.link_extra,
            self.style_extra,
            rel,
            extra,
            text
        )
    }
}
