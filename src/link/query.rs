//! Query-string rewriting
//!
//! Parses a base URL into origin, path and ordered query pairs, and sets or
//! removes the page parameter by exact name while keeping every other pair
//! where it was.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;
use url::{form_urlencoded, Url};

/// Base used to resolve path-absolute and query-only references
static RELATIVE_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://localhost/").unwrap());

/// A base URL split into the pieces page links are rebuilt from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    origin: Option<String>,
    path: String,
    pairs: Vec<(String, String)>,
}

impl UrlParts {
    /// Parse an absolute URL (`http://host/path?q`), a path (`/path?q`) or a query (`?q`)
    ///
    /// An empty string is the query-only reference with no pairs, which is
    /// what trimming the sole page pair of `?page=1` produces. The fragment
    /// of the base URL is dropped.
    pub fn parse(base_url: &str) -> Result<Self> {
        let input = base_url.trim();
        if input.is_empty() {
            return Ok(Self {
                origin: None,
                path: String::new(),
                pairs: Vec::new(),
            });
        }

        match Url::parse(input) {
            Ok(url) => {
                if url.cannot_be_a_base() {
                    return Err(Error::malformed_url(base_url, "URL has no path component"));
                }
                let host = url
                    .host_str()
                    .ok_or_else(|| Error::malformed_url(base_url, "URL has no host"))?;
                let origin = match url.port() {
                    Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
                    None => format!("{}://{}", url.scheme(), host),
                };
                Ok(Self {
                    origin: Some(origin),
                    path: url.path().to_string(),
                    pairs: url.query_pairs().into_owned().collect(),
                })
            }
            Err(url::ParseError::RelativeUrlWithoutBase)
                if input.starts_with('/') || input.starts_with('?') =>
            {
                let url = Url::options()
                    .base_url(Some(&RELATIVE_BASE))
                    .parse(input)
                    .map_err(|e| Error::malformed_url(base_url, e.to_string()))?;
                let path = if input.starts_with('?') {
                    String::new()
                } else {
                    url.path().to_string()
                };
                Ok(Self {
                    origin: None,
                    path,
                    pairs: url.query_pairs().into_owned().collect(),
                })
            }
            Err(e) => {
                debug!(url = base_url, error = %e, "rejecting base URL");
                Err(Error::malformed_url(base_url, e.to_string()))
            }
        }
    }

    /// `scheme://host[:port]` for absolute base URLs
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// The path (empty for a query-only base)
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Decoded query pairs in their original order
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Set `name` to `value`
    ///
    /// An existing pair keeps its position and later duplicates are dropped;
    /// otherwise the pair is appended.
    pub fn set_param(&mut self, name: &str, value: &str) {
        let mut found = false;
        self.pairs.retain_mut(|(key, val)| {
            if key != name {
                return true;
            }
            if found {
                return false;
            }
            found = true;
            *val = value.to_string();
            true
        });
        if !found {
            self.pairs.push((name.to_string(), value.to_string()));
        }
    }

    /// Remove every pair named exactly `name`
    pub fn remove_param(&mut self, name: &str) {
        self.pairs.retain(|(key, _)| key != name);
    }

    /// Serialize back to a URL
    ///
    /// `absolute` prefixes the origin when there is one; `fragment` is
    /// appended verbatim.
    pub fn to_url(&self, absolute: bool, fragment: &str) -> String {
        let mut out = String::new();
        if absolute {
            if let Some(origin) = &self.origin {
                out.push_str(origin);
            }
        }
        out.push_str(&self.path);
        if !self.pairs.is_empty() {
            out.push('?');
            out.push_str(
                &form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(&self.pairs)
                    .finish(),
            );
        }
        out.push_str(fragment);
        out
    }
}

/// Build the URL of `page` from `base_url`
///
/// With `trim`, page 1 drops the parameter instead of setting it. The
/// result keeps the form of the input: absolute stays absolute.
pub fn build_url(base_url: &str, page_param: &str, page: u64, trim: bool) -> Result<String> {
    let mut parts = UrlParts::parse(base_url)?;
    if trim && page == 1 {
        parts.remove_param(page_param);
    } else {
        parts.set_param(page_param, &page.to_string());
    }
    Ok(parts.to_url(true, ""))
}

/// Remove a `param=1` pair from the first URL found in rendered markup
///
/// This is the string-level trim a client applies to expanded markup: only
/// the exact parameter name matches, and the surrounding separator is kept
/// consistent (`?page=1&b=2` -> `?b=2`, `?a=1&page=1` -> `?a=1`).
pub fn trim_page_param(markup: &str, page_param: &str) -> String {
    let pattern = format!(r"[?&]{}=1\b", regex::escape(page_param));
    let Ok(re) = Regex::new(&pattern) else {
        return markup.to_string();
    };

    match re.find(markup) {
        Some(m) => {
            let rest = &markup[m.end()..];
            match rest.strip_prefix('&') {
                // first or middle pair: keep the leading separator, drop ours
                Some(after) => format!("{}{}", &markup[..=m.start()], after),
                None => format!("{}{}", &markup[..m.start()], rest),
            }
        }
        None => markup.to_string(),
    }
}
