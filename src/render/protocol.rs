//! Client-side nav protocol
//!
//! A JS nav is an empty container plus a JSON payload a client script
//! expands in the browser:
//!
//! ```text
//! ["nav", id, {before, link, active, gap, after}, {"<width>": [series...]}, trim]
//! ["combo_nav", id, page, marked_link, trim]
//! ```
//!
//! `link`, `active` and `marked_link` carry the `__pagy_page__` placeholder in
//! place of a page number. `trim` is the page parameter name when page 1
//! links must drop it, otherwise `false`.

use super::nav::{control_markup, controls, item_markup, label_context};
use crate::config::{defaults, Labels};
use crate::error::{Error, Result};
use crate::link::{trim_page_param, LinkBuilder};
use crate::pagination::{PaginationState, SeriesItem, Sequels};
use crate::styles::Style;
use crate::template::{fill_placeholder, render, PAGE_PLACEHOLDER};
use crate::types::PageRef;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

const NAV_TAG: &str = "nav";
const COMBO_NAV_TAG: &str = "combo_nav";

/// Template fragments of a JS nav, in wire order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavFragments {
    pub before: String,
    pub link: String,
    pub active: String,
    pub gap: String,
    pub after: String,
}

/// Decoded payload of a JS nav
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Nav {
        id: String,
        fragments: NavFragments,
        sequels: Sequels,
        trim: Option<String>,
    },
    ComboNav {
        id: String,
        page: u64,
        marked_link: String,
        trim: Option<String>,
    },
}

impl Payload {
    /// DOM id the payload belongs to
    pub fn id(&self) -> &str {
        match self {
            Self::Nav { id, .. } | Self::ComboNav { id, .. } => id,
        }
    }

    /// Page parameter to trim from page 1 links, if any
    pub fn trim(&self) -> Option<&str> {
        match self {
            Self::Nav { trim, .. } | Self::ComboNav { trim, .. } => trim.as_deref(),
        }
    }

    /// Decode a payload from its JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Array(elements) = value else {
            return Err(Error::protocol("payload is not an array"));
        };
        if elements.len() != 5 {
            return Err(Error::protocol(format!(
                "expected 5 elements, found {}",
                elements.len()
            )));
        }

        let mut elements = elements.into_iter();
        let mut next = || elements.next().unwrap_or(Value::Null);

        let tag = next();
        let id = as_string(next(), "id")?;
        match tag.as_str() {
            Some(NAV_TAG) => {
                let fragments: NavFragments = serde_json::from_value(next())?;
                let sequels = decode_sequels(next())?;
                let trim = decode_trim(next())?;
                Ok(Self::Nav {
                    id,
                    fragments,
                    sequels,
                    trim,
                })
            }
            Some(COMBO_NAV_TAG) => {
                let page = next()
                    .as_u64()
                    .filter(|page| *page >= 1)
                    .ok_or_else(|| Error::protocol("page is not a positive integer"))?;
                let marked_link = as_string(next(), "marked link")?;
                let trim = decode_trim(next())?;
                Ok(Self::ComboNav {
                    id,
                    page,
                    marked_link,
                    trim,
                })
            }
            _ => Err(Error::protocol(format!("unknown payload tag {tag}"))),
        }
    }

    /// Expand a nav payload the way the client does for a viewport `width`
    ///
    /// Returns the markup between the container tags. The payload carries no
    /// `rel` attributes, so the result equals the static nav byte for byte
    /// only when that nav was rendered with `page_rel` off.
    pub fn expand(&self, width: u32) -> Result<String> {
        let Self::Nav {
            fragments,
            sequels,
            trim,
            ..
        } = self
        else {
            return Err(Error::protocol("combo_nav payload has no page series"));
        };

        let series = sequels
            .for_width(width)
            .ok_or_else(|| Error::protocol(format!("no series for width {width}")))?;

        let mut html = fragments.before.clone();
        for item in series {
            let markup = match *item {
                SeriesItem::Page(n) => expand_page(&fragments.link, n, trim.as_deref()),
                SeriesItem::Current(n) => expand_page(&fragments.active, n, trim.as_deref()),
                SeriesItem::Gap => fragments.gap.clone(),
            };
            html.push_str(&markup);
        }
        html.push_str(&fragments.after);
        Ok(html)
    }

    /// The link a combo nav navigates to for `page`
    pub fn combo_link(&self, page: u64) -> Result<String> {
        match self {
            Self::ComboNav {
                marked_link, trim, ..
            } => Ok(expand_page(marked_link, page, trim.as_deref())),
            Self::Nav { .. } => Err(Error::protocol("nav payload has no marked link")),
        }
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(5))?;
        match self {
            Self::Nav {
                id,
                fragments,
                sequels,
                trim,
            } => {
                seq.serialize_element(NAV_TAG)?;
                seq.serialize_element(id)?;
                seq.serialize_element(fragments)?;
                seq.serialize_element(sequels)?;
                seq.serialize_element(&TrimParam(trim.as_deref()))?;
            }
            Self::ComboNav {
                id,
                page,
                marked_link,
                trim,
            } => {
                seq.serialize_element(COMBO_NAV_TAG)?;
                seq.serialize_element(id)?;
                seq.serialize_element(page)?;
                seq.serialize_element(marked_link)?;
                seq.serialize_element(&TrimParam(trim.as_deref()))?;
            }
        }
        seq.end()
    }
}

/// `"param"` when trimming, `false` otherwise
struct TrimParam<'a>(Option<&'a str>);

impl Serialize for TrimParam<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.0 {
            Some(param) => serializer.serialize_str(param),
            None => serializer.serialize_bool(false),
        }
    }
}

fn expand_page(template: &str, page: u64, trim: Option<&str>) -> String {
    let markup = fill_placeholder(template, page);
    match trim {
        Some(param) if page == 1 => trim_page_param(&markup, param),
        _ => markup,
    }
}

fn as_string(value: Value, what: &str) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(Error::protocol(format!("{what} is not a string: {other}"))),
    }
}

fn decode_trim(value: Value) -> Result<Option<String>> {
    match value {
        Value::String(param) if !param.is_empty() => Ok(Some(param)),
        Value::Bool(false) | Value::Null => Ok(None),
        other => Err(Error::protocol(format!("invalid trim flag: {other}"))),
    }
}

fn decode_sequels(value: Value) -> Result<Sequels> {
    let Value::Object(map) = value else {
        return Err(Error::protocol("series map is not an object"));
    };

    let mut entries = Vec::with_capacity(map.len());
    for (width, items) in map {
        let width: u32 = width
            .parse()
            .map_err(|_| Error::protocol(format!("invalid breakpoint width '{width}'")))?;
        let Value::Array(items) = items else {
            return Err(Error::protocol(format!("series for width {width} is not an array")));
        };
        let series = items
            .into_iter()
            .map(decode_item)
            .collect::<Result<Vec<_>>>()?;
        entries.push((width, series));
    }
    if entries.is_empty() {
        return Err(Error::protocol("series map is empty"));
    }
    Ok(Sequels::from_entries(entries))
}

fn decode_item(value: Value) -> Result<SeriesItem> {
    match &value {
        Value::Number(n) => n
            .as_u64()
            .map(SeriesItem::Page)
            .ok_or_else(|| Error::protocol(format!("invalid page {value}"))),
        Value::String(s) if s == "gap" => Ok(SeriesItem::Gap),
        Value::String(s) => s
            .parse()
            .map(SeriesItem::Current)
            .map_err(|_| Error::protocol(format!("invalid series item {value}"))),
        _ => Err(Error::protocol(format!("invalid series item {value}"))),
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// A rendered JS nav: the container markup and its payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsNav {
    pub container: String,
    pub payload: Payload,
}

impl JsNav {
    /// The payload as JSON text
    pub fn payload_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.payload)?)
    }

    /// Container followed by the payload script tag
    pub fn to_html(&self) -> Result<String> {
        Ok(format!(
            "{}<script type=\"application/json\" class=\"pagy-json\">{}</script>",
            self.container,
            self.payload_json()?
        ))
    }
}

/// Render a JS nav with the default labels
pub fn render_nav_js(
    state: &PaginationState,
    sequels: &Sequels,
    style: &Style,
    links: &LinkBuilder,
    id: &str,
) -> Result<JsNav> {
    render_nav_js_with(state, sequels, style, links, id, &defaults().labels)
}

/// Render a JS nav with explicit labels
pub fn render_nav_js_with(
    state: &PaginationState,
    sequels: &Sequels,
    style: &Style,
    links: &LinkBuilder,
    id: &str,
    labels: &Labels,
) -> Result<JsNav> {
    let nav = &style.nav;
    let styled = links.styled(&nav.link_extra);
    let ctx = label_context(labels);

    let (before, after) = controls(state, style, styled, &ctx)?;
    let current = state.page().to_string();
    let fragments = NavFragments {
        before,
        link: item_markup(
            &nav.link,
            styled,
            &ctx,
            PageRef::Placeholder,
            PAGE_PLACEHOLDER,
        )?,
        active: item_markup(&nav.active, styled, &ctx, PageRef::Placeholder, &current)?,
        gap: render(&nav.gap, &ctx)?,
        after,
    };

    let container = render(&nav.js_container, &ctx.clone().with("id", id))?;

    debug!(
        style = %style.name,
        id,
        page = state.page(),
        breakpoints = sequels.entries().len(),
        "rendered nav_js"
    );

    Ok(JsNav {
        container,
        payload: Payload::Nav {
            id: id.to_string(),
            fragments,
            sequels: sequels.clone(),
            trim: links.trim_param().map(str::to_string),
        },
    })
}

/// Render a combo nav with the default labels
pub fn render_combo_nav_js(
    state: &PaginationState,
    style: &Style,
    links: &LinkBuilder,
    id: &str,
) -> Result<JsNav> {
    render_combo_nav_js_with(state, style, links, id, &defaults().labels)
}

/// Render a combo nav with explicit labels
pub fn render_combo_nav_js_with(
    state: &PaginationState,
    style: &Style,
    links: &LinkBuilder,
    id: &str,
    labels: &Labels,
) -> Result<JsNav> {
    let combo = &style.combo;
    let styled = links.styled(&combo.link_extra);
    let ctx = label_context(labels)
        .with("id", id)
        .with("page", state.page())
        .with("pages", state.last());

    let prev = control_markup(&combo.prev, state.prev(), styled, &ctx)?;
    let next = control_markup(&combo.next, state.next(), styled, &ctx)?;

    let input_width = state.last().to_string().len() + 1;
    let input = render(&combo.input, &ctx.clone().with("input_width", input_width))?;
    let combo_label = render(&labels.combo, &ctx.clone().with("page_input", input))?;
    let wrapper = render(&combo.wrapper, &ctx.clone().with("combo_label", combo_label))?;

    let mut container = render(&combo.open, &ctx)?;
    container.push_str(&prev);
    container.push_str(&wrapper);
    container.push_str(&next);
    container.push_str(&combo.close);

    debug!(style = %style.name, id, page = state.page(), "rendered combo_nav_js");

    Ok(JsNav {
        container,
        payload: Payload::ComboNav {
            id: id.to_string(),
            page: state.page(),
            marked_link: styled.marked_anchor(),
            trim: links.trim_param().map(str::to_string),
        },
    })
}
