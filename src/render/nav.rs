//! Static nav rendering
//!
//! Also holds the fragment helpers the JS protocol renderer shares, so both
//! outputs are built from the same code path.

use crate::config::{defaults, Labels};
use crate::error::Result;
use crate::link::{LinkBuilder, StyledLinks};
use crate::pagination::{PaginationState, SeriesItem};
use crate::styles::{Control, ItemFragment, Style};
use crate::template::{render, TemplateContext};
use crate::types::PageRef;
use tracing::debug;

/// Render the complete static nav
///
/// Uses the labels of the process-wide default configuration.
pub fn render_nav(
    state: &PaginationState,
    series: &[SeriesItem],
    style: &Style,
    links: &LinkBuilder,
) -> Result<String> {
    render_nav_with(state, series, style, links, &defaults().labels)
}

/// Render the complete static nav with explicit labels
pub fn render_nav_with(
    state: &PaginationState,
    series: &[SeriesItem],
    style: &Style,
    links: &LinkBuilder,
    labels: &Labels,
) -> Result<String> {
    let nav = &style.nav;
    let styled = links.styled(&nav.link_extra);
    let ctx = label_context(labels);

    let (before, after) = controls(state, style, styled, &ctx)?;

    let mut html = String::with_capacity(256 + series.len() * 64);
    html.push_str(&nav.container);
    html.push_str(&before);
    for item in series {
        let markup = match *item {
            SeriesItem::Page(n) => {
                item_markup(&nav.link, styled, &ctx, PageRef::Page(n), &n.to_string())?
            }
            SeriesItem::Current(n) => {
                item_markup(&nav.active, styled, &ctx, PageRef::Page(n), &n.to_string())?
            }
            SeriesItem::Gap => render(&nav.gap, &ctx)?,
        };
        html.push_str(&markup);
    }
    html.push_str(&after);
    html.push_str(&nav.container_end);

    debug!(
        style = %style.name,
        page = state.page(),
        last = state.last(),
        items = series.len(),
        "rendered nav"
    );

    Ok(html)
}

// ============================================================================
// Shared fragments
// ============================================================================

/// Context holding the label variables
pub(super) fn label_context(labels: &Labels) -> TemplateContext {
    TemplateContext::new()
        .with("prev_label", labels.prev.as_str())
        .with("next_label", labels.next.as_str())
        .with("gap_label", labels.gap.as_str())
}

/// The nav's `before` and `after` markup, with the prev/next controls filled in
pub(super) fn controls(
    state: &PaginationState,
    style: &Style,
    styled: StyledLinks<'_>,
    ctx: &TemplateContext,
) -> Result<(String, String)> {
    let nav = &style.nav;
    let prev = control_markup(&nav.prev, state.prev(), styled, ctx)?;
    let next = control_markup(&nav.next, state.next(), styled, ctx)?;

    let ctx = ctx.clone().with("prev", prev).with("next", next);
    Ok((render(&nav.before, &ctx)?, render(&nav.after, &ctx)?))
}

/// A prev/next control: an anchor to `target`, or the disabled markup
pub(super) fn control_markup(
    control: &Control,
    target: Option<u64>,
    styled: StyledLinks<'_>,
    ctx: &TemplateContext,
) -> Result<String> {
    let Some(page) = target else {
        return render(&control.disabled, ctx);
    };

    let text = render(&control.text, ctx)?;
    let extra = render(&control.extra, &ctx.clone().with("page", page))?;
    let anchor = styled.control_anchor(page, &text, &extra);
    render(&control.enabled, &ctx.clone().with("anchor", anchor))
}

/// A link or active item
///
/// The anchor (text and extra included) points at `target`; `{{ page }}` in
/// the item markup itself renders as `page_label`.
pub(super) fn item_markup(
    fragment: &ItemFragment,
    styled: StyledLinks<'_>,
    ctx: &TemplateContext,
    target: PageRef,
    page_label: &str,
) -> Result<String> {
    let target_label = target.to_string();
    let extra = render(
        &fragment.extra,
        &ctx.clone().with("page", target_label.as_str()),
    )?;
    let anchor = styled.page_anchor(target, &target_label, &extra);
    render(
        &fragment.template,
        &ctx.clone().with("anchor", anchor).with("page", page_label),
    )
}
