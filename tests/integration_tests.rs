//! Integration tests for rendered navs
//!
//! Byte-exact markup for every built-in style, rendered through the public
//! API with trimming on, from `http://example.com:3000/foo` over 103 items.

use pagy_nav::link::build_url;
use pagy_nav::pagination::{generate, SeriesSize};
use pagy_nav::render::{render_nav, render_nav_js};
use pagy_nav::styles::{get_builtin, list_builtin};
use pagy_nav::{
    LinkBuilder, PageRef, PaginationState, Pager, Payload, PagyConfig, SeriesItem, Sequels,
};
use pretty_assertions::assert_eq;

const BASE_URL: &str = "http://example.com:3000/foo";
const TEST_ID: &str = "test-id";

fn trimmed_config() -> PagyConfig {
    PagyConfig::default().with_trim(true)
}

fn pager(page: i64, config: &PagyConfig) -> Pager<'_> {
    Pager::with_config(103, page, BASE_URL, config).unwrap()
}

// ============================================================================
// Expected Markup
// ============================================================================

const NAV_PAGES: [(i64, &str); 3] = [
    (1, r##"<nav class="pagy-nav pagination" role="navigation" aria-label="pager"><span class="page prev disabled">&lsaquo;&nbsp;Prev</span> <span class="page active">1</span> <span class="page"><a href="/foo?page=2"   rel="next" >2</a></span> <span class="page"><a href="/foo?page=3"   >3</a></span> <span class="page"><a href="/foo?page=4"   >4</a></span> <span class="page"><a href="/foo?page=5"   >5</a></span> <span class="page"><a href="/foo?page=6"   >6</a></span> <span class="page next"><a href="/foo?page=2"   rel="next" aria-label="next">Next&nbsp;&rsaquo;</a></span></nav>"##),
    (3, r##"<nav class="pagy-nav pagination" role="navigation" aria-label="pager"><span class="page prev"><a href="/foo?page=2"   rel="prev" aria-label="previous">&lsaquo;&nbsp;Prev</a></span> <span class="page"><a href="/foo"   >1</a></span> <span class="page"><a href="/foo?page=2"   rel="prev" >2</a></span> <span class="page active">3</span> <span class="page"><a href="/foo?page=4"   rel="next" >4</a></span> <span class="page"><a href="/foo?page=5"   >5</a></span> <span class="page"><a href="/foo?page=6"   >6</a></span> <span class="page next"><a href="/foo?page=4"   rel="next" aria-label="next">Next&nbsp;&rsaquo;</a></span></nav>"##),
    (6, r##"<nav class="pagy-nav pagination" role="navigation" aria-label="pager"><span class="page prev"><a href="/foo?page=5"   rel="prev" aria-label="previous">&lsaquo;&nbsp;Prev</a></span> <span class="page"><a href="/foo"   >1</a></span> <span class="page"><a href="/foo?page=2"   >2</a></span> <span class="page"><a href="/foo?page=3"   >3</a></span> <span class="page"><a href="/foo?page=4"   >4</a></span> <span class="page"><a href="/foo?page=5"   rel="prev" >5</a></span> <span class="page active">6</span> <span class="page next disabled">Next&nbsp;&rsaquo;</span></nav>"##),
];

const NAV_JS_FIRST_PAGE: [(&str, &str); 6] = [
    ("default", r##"<nav id="test-id" class="pagy-nav-js pagination" role="navigation" aria-label="pager"></nav><script type="application/json" class="pagy-json">["nav","test-id",{"before":"<span class=\"page prev disabled\">&lsaquo;&nbsp;Prev</span> ","link":"<span class=\"page\"><a href=\"/foo?page=__pagy_page__\"   >__pagy_page__</a></span> ","active":"<span class=\"page active\">1</span> ","gap":"<span class=\"page gap\">&hellip;</span> ","after":"<span class=\"page next\"><a href=\"/foo?page=2\"   rel=\"next\" aria-label=\"next\">Next&nbsp;&rsaquo;</a></span>"},{"0":["1",2,3,4,5,6]},"page"]</script>"##),
    ("bootstrap", r##"<nav id="test-id" class="pagy-bootstrap-nav-js" role="navigation" aria-label="pager"></nav><script type="application/json" class="pagy-json">["nav","test-id",{"before":"<ul class=\"pagination\"><li class=\"page-item prev disabled\"><a href=\"#\" class=\"page-link\">&lsaquo;&nbsp;Prev</a></li>","link":"<li class=\"page-item\"><a href=\"/foo?page=__pagy_page__\"  class=\"page-link\" >__pagy_page__</a></li>","active":"<li class=\"page-item active\"><a href=\"/foo?page=__pagy_page__\"  class=\"page-link\" >__pagy_page__</a></li>","gap":"<li class=\"page-item gap disabled\"><a href=\"#\" class=\"page-link\">&hellip;</a></li>","after":"<li class=\"page-item next\"><a href=\"/foo?page=2\"  class=\"page-link\" rel=\"next\" aria-label=\"next\">Next&nbsp;&rsaquo;</a></li></ul>"},{"0":["1",2,3,4,5,6]},"page"]</script>"##),
    ("bulma", r##"<nav id="test-id" class="pagy-bulma-nav-js pagination is-centered" role="navigation" aria-label="pagination"></nav><script type="application/json" class="pagy-json">["nav","test-id",{"before":"<a class=\"pagination-previous\" disabled>&lsaquo;&nbsp;Prev</a><a href=\"/foo?page=2\"   rel=\"next\" class=\"pagination-next\" aria-label=\"next page\">Next&nbsp;&rsaquo;</a><ul class=\"pagination-list\">","link":"<li><a href=\"/foo?page=__pagy_page__\"   class=\"pagination-link\" aria-label=\"goto page __pagy_page__\">__pagy_page__</a></li>","active":"<li><a href=\"/foo?page=__pagy_page__\"   class=\"pagination-link is-current\" aria-current=\"page\" aria-label=\"page __pagy_page__\">__pagy_page__</a></li>","gap":"<li><span class=\"pagination-ellipsis\">&hellip;</span></li>","after":"</ul>"},{"0":["1",2,3,4,5,6]},"page"]</script>"##),
    ("foundation", r##"<nav id="test-id" class="pagy-foundation-nav-js" role="navigation" aria-label="Pagination"></nav><script type="application/json" class="pagy-json">["nav","test-id",{"before":"<ul class=\"pagination\"><li class=\"prev disabled\">&lsaquo;&nbsp;Prev</li>","link":"<li><a href=\"/foo?page=__pagy_page__\"   >__pagy_page__</a></li>","active":"<li class=\"current\">1</li>","gap":"<li class=\"ellipsis gap\" aria-hidden=\"true\"></li>","after":"<li class=\"next\"><a href=\"/foo?page=2\"   rel=\"next\" aria-label=\"next\">Next&nbsp;&rsaquo;</a></li></ul>"},{"0":["1",2,3,4,5,6]},"page"]</script>"##),
    ("materialize", r##"<div id="test-id" class="pagy-materialize-nav-js" role="navigation" aria-label="pager"></div><script type="application/json" class="pagy-json">["nav","test-id",{"before":"<ul class=\"pagination\"><li class=\"prev disabled\"><a href=\"#\"><i class=\"material-icons\">chevron_left</i></a></li>","link":"<li class=\"waves-effect\"><a href=\"/foo?page=__pagy_page__\"   >__pagy_page__</a></li>","active":"<li class=\"active\"><a href=\"/foo?page=__pagy_page__\"   >__pagy_page__</a></li>","gap":"<li class=\"gap disabled\"><a href=\"#\">&hellip;</a></li>","after":"<li class=\"waves-effect next\"><a href=\"/foo?page=2\"   rel=\"next\" aria-label=\"next\"><i class=\"material-icons\">chevron_right</i></a></li></ul>"},{"0":["1",2,3,4,5,6]},"page"]</script>"##),
    ("semantic", r##"<div id="test-id" class="pagy-semantic-nav-js ui pagination menu" role="navigation" aria-label="pager"></div><script type="application/json" class="pagy-json">["nav","test-id",{"before":"<div class=\"item disabled\"><i class=\"left small chevron icon\"></i></div>","link":"<a href=\"/foo?page=__pagy_page__\"  class=\"item\" >__pagy_page__</a>","active":"<a class=\"item active\">1</a>","gap":"<div class=\"disabled item\">&hellip;</div>","after":"<a href=\"/foo?page=2\"  class=\"item\" rel=\"next\" aria-label=\"next\"><i class=\"right small chevron icon\"></i></a>"},{"0":["1",2,3,4,5,6]},"page"]</script>"##),
];

const NAV_JS_DEFAULT_PAGES: [(i64, &str); 2] = [
    (3, r##"<nav id="test-id" class="pagy-nav-js pagination" role="navigation" aria-label="pager"></nav><script type="application/json" class="pagy-json">["nav","test-id",{"before":"<span class=\"page prev\"><a href=\"/foo?page=2\"   rel=\"prev\" aria-label=\"previous\">&lsaquo;&nbsp;Prev</a></span> ","link":"<span class=\"page\"><a href=\"/foo?page=__pagy_page__\"   >__pagy_page__</a></span> ","active":"<span class=\"page active\">3</span> ","gap":"<span class=\"page gap\">&hellip;</span> ","after":"<span class=\"page next\"><a href=\"/foo?page=4\"   rel=\"next\" aria-label=\"next\">Next&nbsp;&rsaquo;</a></span>"},{"0":[1,2,"3",4,5,6]},"page"]</script>"##),
    (6, r##"<nav id="test-id" class="pagy-nav-js pagination" role="navigation" aria-label="pager"></nav><script type="application/json" class="pagy-json">["nav","test-id",{"before":"<span class=\"page prev\"><a href=\"/foo?page=5\"   rel=\"prev\" aria-label=\"previous\">&lsaquo;&nbsp;Prev</a></span> ","link":"<span class=\"page\"><a href=\"/foo?page=__pagy_page__\"   >__pagy_page__</a></span> ","active":"<span class=\"page active\">6</span> ","gap":"<span class=\"page gap\">&hellip;</span> ","after":"<span class=\"page next disabled\">Next&nbsp;&rsaquo;</span>"},{"0":[1,2,3,4,5,"6"]},"page"]</script>"##),
];

const COMBO_NAV_JS_FIRST_PAGE: [(&str, &str); 6] = [
    ("default", r##"<nav id="test-id" class="pagy-combo-nav-js pagination" role="navigation" aria-label="pager"><span class="page prev disabled">&lsaquo;&nbsp;Prev</span> <span class="pagy-combo-input" style="margin: 0 0.6rem;">Page <input type="number" min="1" max="6" value="1" style="padding: 0; text-align: center; width: 2rem;"> of 6</span> <span class="page next"><a href="/foo?page=2"   rel="next" aria-label="next">Next&nbsp;&rsaquo;</a></span></nav><script type="application/json" class="pagy-json">["combo_nav","test-id",1,"<a href=\"/foo?page=__pagy_page__\"   style=\"display: none;\"></a>","page"]</script>"##),
    ("bootstrap", r##"<nav id="test-id" class="pagy-bootstrap-combo-nav-js pagination" role="navigation" aria-label="pager"><div class="btn-group" role="group"><a class="prev btn btn-primary disabled" href="#">&lsaquo;&nbsp;Prev</a><div class="pagy-combo-input btn btn-primary disabled" style="white-space: nowrap;">Page <input type="number" min="1" max="6" value="1" class="text-primary" style="padding: 0; border: none; text-align: center; width: 2rem;"> of 6</div><a href="/foo?page=2"   rel="next" aria-label="next" class="next btn btn-primary">Next&nbsp;&rsaquo;</a></div></nav><script type="application/json" class="pagy-json">["combo_nav","test-id",1,"<a href=\"/foo?page=__pagy_page__\"   style=\"display: none;\"></a>","page"]</script>"##),
    ("bulma", r##"<nav id="test-id" class="pagy-bulma-combo-nav-js" role="navigation" aria-label="pagination"><div class="field is-grouped is-grouped-centered" role="group"><p class="control"><a class="button" disabled>&lsaquo;&nbsp;Prev</a></p><div class="pagy-combo-input control level is-mobile">Page <input class="input" type="number" min="1" max="6" value="1" style="padding: 0; text-align: center; width: 2rem; margin:0 0.3rem;"> of 6</div><p class="control"><a href="/foo?page=2"   rel="next" class="button" aria-label="next page">Next&nbsp;&rsaquo;</a></p></div></nav><script type="application/json" class="pagy-json">["combo_nav","test-id",1,"<a href=\"/foo?page=__pagy_page__\"   style=\"display: none;\"></a>","page"]</script>"##),
    ("foundation", r##"<nav id="test-id" class="pagy-foundation-combo-nav-js" role="navigation" aria-label="Pagination"><div class="input-group"><a style="margin-bottom: 0px;" class="prev button primary disabled" href="#">&lsaquo;&nbsp;Prev</a><span class="input-group-label">Page <input class="input-group-field cell shrink" type="number" min="1" max="6" value="1" style="width: 2rem; padding: 0 0.3rem; margin: 0 0.3rem;"> of 6</span><a href="/foo?page=2"   rel="next" style="margin-bottom: 0px;" aria-label="next" class="next button primary">Next&nbsp;&rsaquo;</a></div></nav><script type="application/json" class="pagy-json">["combo_nav","test-id",1,"<a href=\"/foo?page=__pagy_page__\"   style=\"display: none;\"></a>","page"]</script>"##),
    ("materialize", r##"<div id="test-id" class="pagy-materialize-combo-nav-js pagination" role="navigation" aria-label="pager"><div class="pagy-compact-chip" role="group" style="height: 35px; border-radius: 18px; background: #e4e4e4; display: inline-block;"><ul class="pagination" style="margin: 0px;"><li class="prev disabled" style="vertical-align: middle;"><a href="#"><i class="material-icons">chevron_left</i></a></li><div class="pagy-combo-input btn-flat" style="cursor: default; padding: 0px">Page <input type="number" class="browser-default" min="1" max="6" value="1" style="padding: 2px; border: none; border-radius: 2px; text-align: center; width: 2rem;"> of 6</div><li class="waves-effect next" style="vertical-align: middle;"><a href="/foo?page=2"   rel="next" aria-label="next"><i class="material-icons">chevron_right</i></a></li></ul></div></div><script type="application/json" class="pagy-json">["combo_nav","test-id",1,"<a href=\"/foo?page=__pagy_page__\"   style=\"display: none;\"></a>","page"]</script>"##),
    ("semantic", r##"<div id="test-id" class="pagy-semantic-combo-nav-js ui compact menu" role="navigation" aria-label="pager"><div class="item disabled"><i class="left small chevron icon"></i></div><div class="pagy-combo-input item">Page <input type="number" min="1" max="6" value="1" style="padding: 0; text-align: center; width: 2rem; margin: 0 0.3rem"> of 6</div> <a href="/foo?page=2"  class="item" rel="next" aria-label="next"><i class="right small chevron icon"></i></a></div><script type="application/json" class="pagy-json">["combo_nav","test-id",1,"<a href=\"/foo?page=__pagy_page__\"  class=\"item\" style=\"display: none;\"></a>","page"]</script>"##),
];

const COMBO_NAV_JS_DEFAULT_PAGES: [(i64, &str); 2] = [
    (3, r##"<nav id="test-id" class="pagy-combo-nav-js pagination" role="navigation" aria-label="pager"><span class="page prev"><a href="/foo?page=2"   rel="prev" aria-label="previous">&lsaquo;&nbsp;Prev</a></span> <span class="pagy-combo-input" style="margin: 0 0.6rem;">Page <input type="number" min="1" max="6" value="3" style="padding: 0; text-align: center; width: 2rem;"> of 6</span> <span class="page next"><a href="/foo?page=4"   rel="next" aria-label="next">Next&nbsp;&rsaquo;</a></span></nav><script type="application/json" class="pagy-json">["combo_nav","test-id",3,"<a href=\"/foo?page=__pagy_page__\"   style=\"display: none;\"></a>","page"]</script>"##),
    (6, r##"<nav id="test-id" class="pagy-combo-nav-js pagination" role="navigation" aria-label="pager"><span class="page prev"><a href="/foo?page=5"   rel="prev" aria-label="previous">&lsaquo;&nbsp;Prev</a></span> <span class="pagy-combo-input" style="margin: 0 0.6rem;">Page <input type="number" min="1" max="6" value="6" style="padding: 0; text-align: center; width: 2rem;"> of 6</span> <span class="page next disabled">Next&nbsp;&rsaquo;</span></nav><script type="application/json" class="pagy-json">["combo_nav","test-id",6,"<a href=\"/foo?page=__pagy_page__\"   style=\"display: none;\"></a>","page"]</script>"##),
];

// ============================================================================
// Link Tests
// ============================================================================

#[test]
fn test_trimmed_page_links() {
    let config = trimmed_config();
    for (page, generated, trimmed) in [
        (1, "?page=1", ""),
        (1, "?page=1&b=2", "?b=2"),
        (1, "?a=1&page=1&b=2", "?a=1&b=2"),
        (1, "?a=1&page=1", "?a=1"),
        (1, "?my_page=1&page=1", "?my_page=1"),
        (1, "?a=1&my_page=1&page=1", "?a=1&my_page=1"),
        (1, "?a=1&page=1&my_page=1", "?a=1&my_page=1"),
        (11, "?page=11", "?page=11"),
        (11, "?page=11&b=2", "?page=11&b=2"),
        (11, "?a=1&page=11&b=2", "?a=1&page=11&b=2"),
        (11, "?a=1&page=11", "?a=1&page=11"),
    ] {
        let state = PaginationState::new(1000, 20, page).unwrap();
        let links = LinkBuilder::new(&state, &format!("{BASE_URL}{generated}"), &config).unwrap();
        let page = page as u64;
        assert_eq!(
            links.anchor(page, &page.to_string(), ""),
            format!("<a href=\"/foo{trimmed}\"   >{page}</a>")
        );
        assert_eq!(
            build_url(&format!("/foo{generated}"), "page", page, true).unwrap(),
            format!("/foo{trimmed}")
        );
    }
}

// ============================================================================
// Nav Tests
// ============================================================================

#[test]
fn test_nav_pages() {
    let config = trimmed_config();
    for (page, expected) in NAV_PAGES {
        assert_eq!(pager(page, &config).nav("default").unwrap(), expected);
    }
}

#[test]
fn test_nav_js_first_page_all_styles() {
    let config = trimmed_config();
    let pager = pager(1, &config);
    for (style, expected) in NAV_JS_FIRST_PAGE {
        let html = pager.nav_js(style, TEST_ID).unwrap().to_html().unwrap();
        assert_eq!(html, expected, "style {style}");
    }
}

#[test]
fn test_nav_js_default_pages() {
    let config = trimmed_config();
    for (page, expected) in NAV_JS_DEFAULT_PAGES {
        let html = pager(page, &config)
            .nav_js("default", TEST_ID)
            .unwrap()
            .to_html()
            .unwrap();
        assert_eq!(html, expected, "page {page}");
    }
}

#[test]
fn test_combo_nav_js_first_page_all_styles() {
    let config = trimmed_config();
    let pager = pager(1, &config);
    for (style, expected) in COMBO_NAV_JS_FIRST_PAGE {
        let html = pager.combo_nav_js(style, TEST_ID).unwrap().to_html().unwrap();
        assert_eq!(html, expected, "style {style}");
    }
}

#[test]
fn test_combo_nav_js_default_pages() {
    let config = trimmed_config();
    for (page, expected) in COMBO_NAV_JS_DEFAULT_PAGES {
        let html = pager(page, &config)
            .combo_nav_js("default", TEST_ID)
            .unwrap()
            .to_html()
            .unwrap();
        assert_eq!(html, expected, "page {page}");
    }
}

#[test]
fn test_out_of_range_page_renders_permissively() {
    let config = PagyConfig::default();
    let pager = pager(9, &config);
    assert_eq!(pager.series().last(), Some(&SeriesItem::Current(9)));

    let html = pager.nav("default").unwrap();
    assert!(html.contains("<a href=\"/foo?page=8\"   rel=\"prev\" aria-label=\"previous\">"));
    assert!(html.contains("<span class=\"page active\">9</span> "));
    assert!(html.ends_with("<span class=\"page next disabled\">Next&nbsp;&rsaquo;</span></nav>"));
}

// ============================================================================
// Client Protocol Tests
// ============================================================================

#[test]
fn test_payload_expansion_matches_static_nav() {
    let mut config = PagyConfig {
        page_rel: false,
        ..Default::default()
    }
    .with_trim(true);
    config.breakpoints.insert(0, SeriesSize::new(1, 1, 1, 1));
    config.breakpoints.insert(768, SeriesSize::window(4));

    for name in list_builtin() {
        let style = get_builtin(name).unwrap();
        for page in [1, 2, 17, 49, 50] {
            let pager = Pager::with_config(1000, page, "/items?sort=asc&page=4", &config).unwrap();
            let state = pager.state();
            let payload_json = pager.nav_js(name, "nav").unwrap().payload_json().unwrap();
            let payload = Payload::from_json(&payload_json).unwrap();

            for (width, size) in config.sequel_sizes() {
                let series = pagy_nav::pagination::generate_with(state, size);
                let html = render_nav(state, &series, style, pager.links()).unwrap();
                let inner = &html[style.nav.container.len()..html.len() - style.nav.container_end.len()];
                assert_eq!(
                    payload.expand(width).unwrap(),
                    inner,
                    "style {name} page {page} width {width}"
                );
            }
        }
    }
}

#[test]
fn test_payload_combo_links() {
    let config = trimmed_config();
    let payload_json = pager(3, &config)
        .combo_nav_js("semantic", TEST_ID)
        .unwrap()
        .payload_json()
        .unwrap();
    let payload = Payload::from_json(&payload_json).unwrap();

    assert_eq!(payload.id(), TEST_ID);
    assert_eq!(payload.trim(), Some("page"));
    assert_eq!(
        payload.combo_link(1).unwrap(),
        "<a href=\"/foo\"  class=\"item\" style=\"display: none;\"></a>"
    );
    assert_eq!(
        payload.combo_link(4).unwrap(),
        "<a href=\"/foo?page=4\"  class=\"item\" style=\"display: none;\"></a>"
    );
}

#[test]
fn test_free_functions_match_pager() {
    let config = PagyConfig::default();
    let state = PaginationState::new(103, 20, 3).unwrap();
    let links = LinkBuilder::new(&state, BASE_URL, &config).unwrap();
    let series = generate(&state, 4);
    let pager = pager(3, &config);

    assert_eq!(
        render_nav(&state, &series, get_builtin("bulma").unwrap(), &links).unwrap(),
        pager.nav("bulma").unwrap()
    );
    assert_eq!(
        render_nav_js(
            &state,
            &Sequels::single(series),
            get_builtin("foundation").unwrap(),
            &links,
            TEST_ID
        )
        .unwrap(),
        pager.nav_js("foundation", TEST_ID).unwrap()
    );
    assert_eq!(links.url_for(PageRef::Placeholder), "/foo?page=__pagy_page__");
}
