//! Built-in styles
//!
//! Markup for the plain nav and the five CSS frameworks.

use super::types::{ComboStyle, Control, ItemFragment, NavStyle, Style};

fn control(enabled: &str, text: &str, extra: &str, disabled: &str) -> Control {
    Control {
        enabled: enabled.to_string(),
        text: text.to_string(),
        extra: extra.to_string(),
        disabled: disabled.to_string(),
    }
}

fn item(template: &str, extra: &str) -> ItemFragment {
    ItemFragment {
        template: template.to_string(),
        extra: extra.to_string(),
    }
}

/// All built-in styles
pub(super) fn all() -> Vec<Style> {
    vec![
        default(),
        bootstrap(),
        bulma(),
        foundation(),
        materialize(),
        semantic(),
    ]
}

pub(super) fn default() -> Style {
    let prev = control(
        "<span class=\"page prev\">{{ anchor }}</span> ",
        "{{ prev_label }}",
        "aria-label=\"previous\"",
        "<span class=\"page prev disabled\">{{ prev_label }}</span> ",
    );
    let next = control(
        "<span class=\"page next\">{{ anchor }}</span>",
        "{{ next_label }}",
        "aria-label=\"next\"",
        "<span class=\"page next disabled\">{{ next_label }}</span>",
    );

    Style {
        name: "default".to_string(),
        nav: NavStyle {
            container: "<nav class=\"pagy-nav pagination\" role=\"navigation\" aria-label=\"pager\">"
                .to_string(),
            container_end: "</nav>".to_string(),
            js_container: "<nav id=\"{{ id }}\" class=\"pagy-nav-js pagination\" role=\"navigation\" aria-label=\"pager\"></nav>".to_string(),
            link_extra: String::new(),
            before: "{{ prev }}".to_string(),
            after: "{{ next }}".to_string(),
            prev: prev.clone(),
            next: next.clone(),
            link: item("<span class=\"page\">{{ anchor }}</span> ", ""),
            active: item("<span class=\"page active\">{{ page }}</span> ", ""),
            gap: "<span class=\"page gap\">{{ gap_label }}</span> ".to_string(),
        },
        combo: ComboStyle {
            open: "<nav id=\"{{ id }}\" class=\"pagy-combo-nav-js pagination\" role=\"navigation\" aria-label=\"pager\">".to_string(),
            close: "</nav>".to_string(),
            link_extra: String::new(),
            prev,
            next,
            input: "<input type=\"number\" min=\"1\" max=\"{{ pages }}\" value=\"{{ page }}\" style=\"padding: 0; text-align: center; width: {{ input_width }}rem;\">".to_string(),
            wrapper: "<span class=\"pagy-combo-input\" style=\"margin: 0 0.6rem;\">{{ combo_label }}</span> ".to_string(),
        },
    }
}

pub(super) fn bootstrap() -> Style {
    Style {
        name: "bootstrap".to_string(),
        nav: NavStyle {
            container: "<nav class=\"pagy-bootstrap-nav\" role=\"navigation\" aria-label=\"pager\">"
                .to_string(),
            container_end: "</nav>".to_string(),
            js_container: "<nav id=\"{{ id }}\" class=\"pagy-bootstrap-nav-js\" role=\"navigation\" aria-label=\"pager\"></nav>".to_string(),
            link_extra: "class=\"page-link\"".to_string(),
            before: "<ul class=\"pagination\">{{ prev }}".to_string(),
            after: "{{ next }}</ul>".to_string(),
            prev: control(
                "<li class=\"page-item prev\">{{ anchor }}</li>",
                "{{ prev_label }}",
                "aria-label=\"previous\"",
                "<li class=\"page-item prev disabled\"><a href=\"#\" class=\"page-link\">{{ prev_label }}</a></li>",
            ),
            next: control(
                "<li class=\"page-item next\">{{ anchor }}</li>",
                "{{ next_label }}",
                "aria-label=\"next\"",
                "<li class=\"page-item next disabled\"><a href=\"#\" class=\"page-link\">{{ next_label }}</a></li>",
            ),
            link: item("<li class=\"page-item\">{{ anchor }}</li>", ""),
            active: item("<li class=\"page-item active\">{{ anchor }}</li>", ""),
            gap: "<li class=\"page-item gap disabled\"><a href=\"#\" class=\"page-link\">{{ gap_label }}</a></li>".to_string(),
        },
        combo: ComboStyle {
            open: "<nav id=\"{{ id }}\" class=\"pagy-bootstrap-combo-nav-js pagination\" role=\"navigation\" aria-label=\"pager\"><div class=\"btn-group\" role=\"group\">".to_string(),
            close: "</div></nav>".to_string(),
            link_extra: String::new(),
            prev: control(
                "{{ anchor }}",
                "{{ prev_label }}",
                "aria-label=\"previous\" class=\"prev btn btn-primary\"",
                "<a class=\"prev btn btn-primary disabled\" href=\"#\">{{ prev_label }}</a>",
            ),
            next: control(
                "{{ anchor }}",
                "{{ next_label }}",
                "aria-label=\"next\" class=\"next btn btn-primary\"",
                "<a class=\"next btn btn-primary disabled\" href=\"#\">{{ next_label }}</a>",
            ),
            input: "<input type=\"number\" min=\"1\" max=\"{{ pages }}\" value=\"{{ page }}\" class=\"text-primary\" style=\"padding: 0; border: none; text-align: center; width: {{ input_width }}rem;\">".to_string(),
            wrapper: "<div class=\"pagy-combo-input btn btn-primary disabled\" style=\"white-space: nowrap;\">{{ combo_label }}</div>".to_string(),
        },
    }
}

pub(super) fn bulma() -> Style {
    Style {
        name: "bulma".to_string(),
        nav: NavStyle {
            container: "<nav class=\"pagy-bulma-nav pagination is-centered\" role=\"navigation\" aria-label=\"pagination\">".to_string(),
            container_end: "</nav>".to_string(),
            js_container: "<nav id=\"{{ id }}\" class=\"pagy-bulma-nav-js pagination is-centered\" role=\"navigation\" aria-label=\"pagination\"></nav>".to_string(),
            link_extra: String::new(),
            before: "{{ prev }}{{ next }}<ul class=\"pagination-list\">".to_string(),
            after: "</ul>".to_string(),
            prev: control(
                "{{ anchor }}",
                "{{ prev_label }}",
                "class=\"pagination-previous\" aria-label=\"previous page\"",
                "<a class=\"pagination-previous\" disabled>{{ prev_label }}</a>",
            ),
            next: control(
                "{{ anchor }}",
                "{{ next_label }}",
                "class=\"pagination-next\" aria-label=\"next page\"",
                "<a class=\"pagination-next\" disabled>{{ next_label }}</a>",
            ),
            link: item(
                "<li>{{ anchor }}</li>",
                "class=\"pagination-link\" aria-label=\"goto page {{ page }}\"",
            ),
            active: item(
                "<li>{{ anchor }}</li>",
                "class=\"pagination-link is-current\" aria-current=\"page\" aria-label=\"page {{ page }}\"",
            ),
            gap: "<li><span class=\"pagination-ellipsis\">{{ gap_label }}</span></li>".to_string(),
        },
        combo: ComboStyle {
            open: "<nav id=\"{{ id }}\" class=\"pagy-bulma-combo-nav-js\" role=\"navigation\" aria-label=\"pagination\"><div class=\"field is-grouped is-grouped-centered\" role=\"group\">".to_string(),
            close: "</div></nav>".to_string(),
            link_extra: String::new(),
            prev: control(
                "<p class=\"control\">{{ anchor }}</p>",
                "{{ prev_label }}",
                "class=\"button\" aria-label=\"previous page\"",
                "<p class=\"control\"><a class=\"button\" disabled>{{ prev_label }}</a></p>",
            ),
            next: control(
                "<p class=\"control\">{{ anchor }}</p>",
                "{{ next_label }}",
                "class=\"button\" aria-label=\"next page\"",
                "<p class=\"control\"><a class=\"button\" disabled>{{ next_label }}</a></p>",
            ),
            input: "<input class=\"input\" type=\"number\" min=\"1\" max=\"{{ pages }}\" value=\"{{ page }}\" style=\"padding: 0; text-align: center; width: {{ input_width }}rem; margin:0 0.3rem;\">".to_string(),
            wrapper: "<div class=\"pagy-combo-input control level is-mobile\">{{ combo_label }}</div>".to_string(),
        },
    }
}

pub(super) fn foundation() -> Style {
    Style {
        name: "foundation".to_string(),
        nav: NavStyle {
            container: "<nav class=\"pagy-foundation-nav\" role=\"navigation\" aria-label=\"Pagination\">"
                .to_string(),
            container_end: "</nav>".to_string(),
            js_container: "<nav id=\"{{ id }}\" class=\"pagy-foundation-nav-js\" role=\"navigation\" aria-label=\"Pagination\"></nav>".to_string(),
            link_extra: String::new(),
            before: "<ul class=\"pagination\">{{ prev }}".to_string(),
            after: "{{ next }}</ul>".to_string(),
            prev: control(
                "<li class=\"prev\">{{ anchor }}</li>",
                "{{ prev_label }}",
                "aria-label=\"previous\"",
                "<li class=\"prev disabled\">{{ prev_label }}</li>",
            ),
            next: control(
                "<li class=\"next\">{{ anchor }}</li>",
                "{{ next_label }}",
                "aria-label=\"next\"",
                "<li class=\"next disabled\">{{ next_label }}</li>",
            ),
            link: item("<li>{{ anchor }}</li>", ""),
            active: item("<li class=\"current\">{{ page }}</li>", ""),
            gap: "<li class=\"ellipsis gap\" aria-hidden=\"true\"></li>".to_string(),
        },
        combo: ComboStyle {
            open: "<nav id=\"{{ id }}\" class=\"pagy-foundation-combo-nav-js\" role=\"navigation\" aria-label=\"Pagination\"><div class=\"input-group\">".to_string(),
            close: "</div></nav>".to_string(),
            link_extra: String::new(),
            prev: control(
                "{{ anchor }}",
                "{{ prev_label }}",
                "style=\"margin-bottom: 0px;\" aria-label=\"previous\" class=\"prev button primary\"",
                "<a style=\"margin-bottom: 0px;\" class=\"prev button primary disabled\" href=\"#\">{{ prev_label }}</a>",
            ),
            next: control(
                "{{ anchor }}",
                "{{ next_label }}",
                "style=\"margin-bottom: 0px;\" aria-label=\"next\" class=\"next button primary\"",
                "<a style=\"margin-bottom: 0px;\" class=\"next button primary disabled\" href=\"#\">{{ next_label }}</a>",
            ),
            input: "<input class=\"input-group-field cell shrink\" type=\"number\" min=\"1\" max=\"{{ pages }}\" value=\"{{ page }}\" style=\"width: {{ input_width }}rem; padding: 0 0.3rem; margin: 0 0.3rem;\">".to_string(),
            wrapper: "<span class=\"input-group-label\">{{ combo_label }}</span>".to_string(),
        },
    }
}

pub(super) fn materialize() -> Style {
    const LEFT: &str = "<i class=\"material-icons\">chevron_left</i>";
    const RIGHT: &str = "<i class=\"material-icons\">chevron_right</i>";

    Style {
        name: "materialize".to_string(),
        nav: NavStyle {
            container: "<div class=\"pagy-materialize-nav pagination\" role=\"navigation\" aria-label=\"pager\">".to_string(),
            container_end: "</div>".to_string(),
            js_container: "<div id=\"{{ id }}\" class=\"pagy-materialize-nav-js\" role=\"navigation\" aria-label=\"pager\"></div>".to_string(),
            link_extra: String::new(),
            before: "<ul class=\"pagination\">{{ prev }}".to_string(),
            after: "{{ next }}</ul>".to_string(),
            prev: control(
                "<li class=\"waves-effect prev\">{{ anchor }}</li>",
                LEFT,
                "aria-label=\"previous\"",
                &format!("<li class=\"prev disabled\"><a href=\"#\">{LEFT}</a></li>"),
            ),
            next: control(
                "<li class=\"waves-effect next\">{{ anchor }}</li>",
                RIGHT,
                "aria-label=\"next\"",
                &format!("<li class=\"next disabled\"><a href=\"#\">{RIGHT}</a></li>"),
            ),
            link: item("<li class=\"waves-effect\">{{ anchor }}</li>", ""),
            active: item("<li class=\"active\">{{ anchor }}</li>", ""),
            gap: "<li class=\"gap disabled\"><a href=\"#\">{{ gap_label }}</a></li>".to_string(),
        },
        combo: ComboStyle {
            open: "<div id=\"{{ id }}\" class=\"pagy-materialize-combo-nav-js pagination\" role=\"navigation\" aria-label=\"pager\"><div class=\"pagy-compact-chip\" role=\"group\" style=\"height: 35px; border-radius: 18px; background: #e4e4e4; display: inline-block;\"><ul class=\"pagination\" style=\"margin: 0px;\">".to_string(),
            close: "</ul></div></div>".to_string(),
            link_extra: String::new(),
            prev: control(
                "<li class=\"waves-effect prev\" style=\"vertical-align: middle;\">{{ anchor }}</li>",
                LEFT,
                "aria-label=\"previous\"",
                &format!(
                    "<li class=\"prev disabled\" style=\"vertical-align: middle;\"><a href=\"#\">{LEFT}</a></li>"
                ),
            ),
            next: control(
                "<li class=\"waves-effect next\" style=\"vertical-align: middle;\">{{ anchor }}</li>",
                RIGHT,
                "aria-label=\"next\"",
                &format!(
                    "<li class=\"next disabled\" style=\"vertical-align: middle;\"><a href=\"#\">{RIGHT}</a></li>"
                ),
            ),
            input: "<input type=\"number\" class=\"browser-default\" min=\"1\" max=\"{{ pages }}\" value=\"{{ page }}\" style=\"padding: 2px; border: none; border-radius: 2px; text-align: center; width: {{ input_width }}rem;\">".to_string(),
            wrapper: "<div class=\"pagy-combo-input btn-flat\" style=\"cursor: default; padding: 0px\">{{ combo_label }}</div>".to_string(),
        },
    }
}

pub(super) fn semantic() -> Style {
    let prev = control(
        "{{ anchor }}",
        "<i class=\"left small chevron icon\"></i>",
        "aria-label=\"previous\"",
        "<div class=\"item disabled\"><i class=\"left small chevron icon\"></i></div>",
    );
    let next = control(
        "{{ anchor }}",
        "<i class=\"right small chevron icon\"></i>",
        "aria-label=\"next\"",
        "<div class=\"item disabled\"><i class=\"right small chevron icon\"></i></div>",
    );

    Style {
        name: "semantic".to_string(),
        nav: NavStyle {
            container: "<div class=\"pagy-semantic-nav ui pagination menu\" role=\"navigation\" aria-label=\"pager\">".to_string(),
            container_end: "</div>".to_string(),
            js_container: "<div id=\"{{ id }}\" class=\"pagy-semantic-nav-js ui pagination menu\" role=\"navigation\" aria-label=\"pager\"></div>".to_string(),
            link_extra: "class=\"item\"".to_string(),
            before: "{{ prev }}".to_string(),
            after: "{{ next }}".to_string(),
            prev: prev.clone(),
            next: next.clone(),
            link: item("{{ anchor }}", ""),
            active: item("<a class=\"item active\">{{ page }}</a>", ""),
            gap: "<div class=\"disabled item\">{{ gap_label }}</div>".to_string(),
        },
        combo: ComboStyle {
            open: "<div id=\"{{ id }}\" class=\"pagy-semantic-combo-nav-js ui compact menu\" role=\"navigation\" aria-label=\"pager\">".to_string(),
            close: "</div>".to_string(),
            link_extra: "class=\"item\"".to_string(),
            prev,
            next,
            input: "<input type=\"number\" min=\"1\" max=\"{{ pages }}\" value=\"{{ page }}\" style=\"padding: 0; text-align: center; width: {{ input_width }}rem; margin: 0 0.3rem\">".to_string(),
            wrapper: "<div class=\"pagy-combo-input item\">{{ combo_label }}</div> ".to_string(),
        },
    }
}
