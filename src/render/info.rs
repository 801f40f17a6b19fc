//! Info line ("Displaying items 41-60 of 103 in total")

use crate::config::Labels;
use crate::error::Result;
use crate::pagination::PaginationState;
use crate::template::{render, TemplateContext};

/// Render the info line for `state`
///
/// `item_name` replaces the singular/plural label pair when given.
pub fn render_info(
    state: &PaginationState,
    item_name: Option<&str>,
    labels: &Labels,
) -> Result<String> {
    let count = state.count();
    let item_name = item_name.unwrap_or(if count == 1 {
        labels.item.as_str()
    } else {
        labels.items.as_str()
    });

    let ctx = TemplateContext::new()
        .with("item_name", item_name)
        .with("count", count)
        .with("from", state.from())
        .with("to", state.to());

    let template = if count == 0 {
        &labels.info_empty
    } else if state.last() == 1 {
        &labels.info_single
    } else {
        &labels.info_multiple
    };

    render(template, &ctx)
}
