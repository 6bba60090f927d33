#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use quiz_site_actions::client::ActionClient;
use quiz_site_actions::config::{PageConfig, RevisionConfig, Settings};
use quiz_site_actions::context::PageContext;
use quiz_site_actions::countdown;
use quiz_site_actions::dispatcher;
use quiz_site_actions::dom;
use quiz_site_actions::error::ActionError;
use quiz_site_actions::fragment::Patch;
use quiz_site_actions::models::FragmentResponse;
use quiz_site_actions::payload::FormPayload;
use quiz_site_actions::search::{self, SearchScope};
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn page(html: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html(html);
}

fn click(selector: &str) {
    dom::query(selector)
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

/// Replace `fetch` with one that records each request and answers with `body`
fn stub_fetch(status: u16, body: &str) {
    let script = format!(
        r#"
        window.__realFetch = window.__realFetch || window.fetch;
        window.__fetched = [];
        window.fetch = function (input, init) {{
            var req = new Request(input, init);
            return req.text().then(function (text) {{
                window.__fetched.push({{
                    url: req.url,
                    method: req.method,
                    body: text,
                    csrf: req.headers.get("X-CSRF-TOKEN"),
                    requestedWith: req.headers.get("X-Requested-With")
                }});
                return new Response({body}, {{
                    status: {status},
                    statusText: "stubbed",
                    headers: {{ "Content-Type": "application/json" }}
                }});
            }});
        }};
        "#,
        body = serde_json::to_string(body).unwrap(),
        status = status,
    );
    js_sys::eval(&script).unwrap();
}

fn fetched() -> Vec<Value> {
    let json = js_sys::eval("JSON.stringify(window.__fetched || [])").unwrap();
    serde_json::from_str(&json.as_string().unwrap()).unwrap()
}

fn restore_fetch() {
    js_sys::eval("if (window.__realFetch) { window.fetch = window.__realFetch; }").unwrap();
}

/// Record form submissions instead of navigating away from the test page
fn stub_form_submit() {
    js_sys::eval(
        r#"
        window.__realSubmit = window.__realSubmit || HTMLFormElement.prototype.submit;
        window.__submitted = [];
        HTMLFormElement.prototype.submit = function () { window.__submitted.push(this.id); };
        "#,
    )
    .unwrap();
}

fn submitted() -> Vec<String> {
    let json = js_sys::eval("JSON.stringify(window.__submitted || [])").unwrap();
    serde_json::from_str(&json.as_string().unwrap()).unwrap()
}

fn restore_form_submit() {
    js_sys::eval("if (window.__realSubmit) { HTMLFormElement.prototype.submit = window.__realSubmit; }").unwrap();
}

async fn settle() {
    TimeoutFuture::new(100).await;
}

#[wasm_bindgen_test]
fn test_visible_item_ids_in_document_order() {
    page(
        r#"<table>
            <tr class="item-on-page" value="42"></tr>
            <tr class="other" value="1"></tr>
            <tr class="item-on-page" value="7"></tr>
            <tr><td class="item-on-page" value="19"></td></tr>
        </table>"#,
    );
    assert_eq!(dom::visible_item_ids(), Ok(vec!["42".to_string(), "7".to_string(), "19".to_string()]));
}

#[wasm_bindgen_test]
fn test_row_without_value_fails_id_list() {
    page(
        r#"<table>
            <tr class="item-on-page" value="42"></tr>
            <tr class="item-on-page"></tr>
        </table>"#,
    );
    assert_eq!(
        dom::visible_item_ids(),
        Err(ActionError::MissingElement(".item-on-page[value]".into()))
    );
}

#[wasm_bindgen_test]
fn test_collect_fields_has_one_pair_per_named_control() {
    page(
        r#"<form id="profile_form">
            <input name="username" value="anna">
            <input name="email" value="anna@example.com">
            <textarea name="about">quiz fan</textarea>
            <select name="city"><option value="spb" selected>SPb</option></select>
            <input value="no name">
        </form>"#,
    );
    let payload = dom::collect_fields("#profile_form");
    assert_eq!(payload.len(), 4);
    assert_eq!(payload.get("username"), Some("anna"));
    assert_eq!(payload.get("about"), Some("quiz fan"));
    assert_eq!(payload.get("city"), Some("spb"));
}

#[wasm_bindgen_test]
fn test_failed_response_leaves_results_unchanged() {
    page(r#"<div class="table-responsive"><p>page 3</p></div>"#);
    let failed = Err(ActionError::Status { status: 500, text: "Internal Server Error".into() });
    assert!(dom::patch_region(".table-responsive", failed).is_err());
    let falsy = dom::patch_region(".table-responsive", Ok(FragmentResponse::default()));
    assert_eq!(falsy, Ok(Patch::Unchanged));
    assert_eq!(dom::query(".table-responsive").unwrap().inner_html(), "<p>page 3</p>");
}

#[wasm_bindgen_test]
fn test_search_relabel_for_users_page() {
    page(
        r#"<form id="catcher_admins_search_panel" action="/myadmin/search/post/">
            <input id="admins_search_panel" placeholder="Поиск">
        </form>"#,
    );
    assert_eq!(search::relabel("/myadmin/users/"), Ok(Some(SearchScope::Users)));
    let input = dom::query("#admins_search_panel").unwrap();
    let form = dom::query("#catcher_admins_search_panel").unwrap();
    assert_eq!(input.get_attribute("placeholder").as_deref(), Some("Поиск пользователей"));
    assert_eq!(form.get_attribute("action").as_deref(), Some("/myadmin/search/user/"));
}

#[wasm_bindgen_test]
fn test_thumbnail_click_opens_zoom_modal() {
    page(
        r#"<div class="thumbnail"><img src="/media/q1.png"></div>
        <div id="image-modal" class="modal"><div class="modal-body"><img src=""></div></div>"#,
    );
    let settings = Settings {
        revision: RevisionConfig { zoom_min_height: None, ..RevisionConfig::default() },
        ..Settings::default()
    };
    let config = PageConfig { settings, ..PageConfig::default() };
    dispatcher::dispatch(Rc::new(PageContext::new(config, "/questions/1/")));

    dom::query("div.thumbnail")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();

    let zoomed = dom::query("#image-modal .modal-body img").unwrap();
    assert_eq!(zoomed.get_attribute("src").as_deref(), Some("/media/q1.png"));
    assert!(dom::query("#image-modal").unwrap().class_list().contains("show"));
}

#[wasm_bindgen_test]
fn test_deletion_mode_warning_follows_checkbox() {
    page(
        r#"<input type="checkbox" id="option2" checked>
        <button id="deact_delete">mode</button>
        <p id="text" style="display: none">warning</p>"#,
    );
    dispatcher::dispatch(Rc::new(PageContext::new(PageConfig::default(), "/myadmin/categories/")));

    dom::by_id::<web_sys::HtmlElement>("deact_delete").unwrap().click();
    let warning = dom::by_id::<web_sys::HtmlElement>("text").unwrap();
    assert_eq!(warning.style().get_property_value("display").unwrap(), "block");
}

#[wasm_bindgen_test]
async fn test_bulk_toggle_posts_visible_ids_and_patches_results() {
    page(
        r#"<input type="checkbox" id="option2">
        <div id="update_cat_catcher"><button id="update_cat_btn" name="5">off</button></div>
        <div class="table-responsive"><table>
            <tr class="item-on-page" value="5"></tr>
            <tr class="item-on-page" value="9"></tr>
        </table></div>"#,
    );
    stub_fetch(200, r#"{"result": "<p>page 1 again</p>"}"#);
    let config = PageConfig { csrf_token: "tok".into(), ..PageConfig::default() };
    dispatcher::dispatch(Rc::new(PageContext::new(config, "/myadmin/categories/")));

    click("#update_cat_btn");
    settle().await;
    let sent = fetched();
    restore_fetch();

    assert_eq!(sent.len(), 1);
    assert!(sent[0]["url"].as_str().unwrap().ends_with("/myadmin/categories-delete/5/"));
    assert_eq!(sent[0]["method"], "POST");
    assert_eq!(sent[0]["body"], "flag=false&elements%5B%5D=5&elements%5B%5D=9");
    assert_eq!(sent[0]["csrf"], "tok");
    assert_eq!(sent[0]["requestedWith"], "XMLHttpRequest");
    assert_eq!(dom::query(".table-responsive").unwrap().inner_html(), "<p>page 1 again</p>");
}

#[wasm_bindgen_test]
async fn test_bulk_toggle_with_unnumbered_row_sends_nothing() {
    page(
        r#"<input type="checkbox" id="option2">
        <div id="update_post_catcher"><button id="update_post_btn" name="3">off</button></div>
        <div class="table-responsive"><table>
            <tr class="item-on-page" value="3"></tr>
            <tr class="item-on-page"></tr>
        </table></div>"#,
    );
    stub_fetch(200, r#"{"result": "<p>replaced</p>"}"#);
    dispatcher::dispatch(Rc::new(PageContext::new(PageConfig::default(), "/myadmin/posts/")));

    click("#update_post_btn");
    settle().await;
    let sent = fetched();
    restore_fetch();

    assert!(sent.is_empty());
    assert!(dom::query(".table-responsive").unwrap().inner_html().contains("item-on-page"));
}

#[wasm_bindgen_test]
async fn test_error_status_is_reported() {
    stub_fetch(500, r#"{"result": "<p>not used</p>"}"#);
    let outcome = ActionClient::new("tok")
        .post_form("/users/no_info/", &FormPayload::new())
        .await;
    restore_fetch();
    assert_eq!(outcome, Err(ActionError::Status { status: 500, text: "stubbed".into() }));
}

#[wasm_bindgen_test]
async fn test_info_opt_out_submits_without_modal_content() {
    page(
        r#"<div id="info-modal" class="modal show">
            <input type="checkbox" id="no-info" checked>
            <button id="info-close">ok</button>
        </div>
        <form id="form-start-test"></form>"#,
    );
    stub_fetch(200, r#"{"result": "<p>see you</p>"}"#);
    stub_form_submit();
    let revision = RevisionConfig {
        info_hide_delay_ms: 0,
        info_submit_delay_ms: 0,
        ..RevisionConfig::default()
    };
    let settings = Settings { revision, ..Settings::default() };
    let config = PageConfig { settings, ..PageConfig::default() };
    dispatcher::dispatch(Rc::new(PageContext::new(config, "/questions/start/")));

    click("#info-modal #info-close");
    settle().await;
    let sent = fetched();
    let forms = submitted();
    restore_fetch();
    restore_form_submit();

    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["body"], "flag=true");
    assert_eq!(forms, vec!["form-start-test".to_string()]);
    assert!(!dom::query("#info-modal").unwrap().class_list().contains("show"));
}

#[wasm_bindgen_test]
async fn test_countdown_keeps_ticking_without_counter() {
    page(r#"<span id="time_counter"></span>"#);
    assert!(countdown::start(600));

    // First tick at 1 s shows 600
    TimeoutFuture::new(1500).await;
    assert_eq!(dom::query("#time_counter").unwrap().inner_html(), "600");

    page("");
    TimeoutFuture::new(2000).await;
    page(r#"<span id="time_counter"></span>"#);
    TimeoutFuture::new(1000).await;

    let shown: i32 = dom::query("#time_counter").unwrap().inner_html().parse().unwrap();
    assert!(shown <= 598, "countdown stalled at {}", shown);
    page("");
}

#[wasm_bindgen_test]
fn test_log_history_is_exposed() {
    let _ = console_logger::init(log::LevelFilter::Debug, 50);
    log::info!("history marker");
    let lines = dispatcher::log_history();
    assert!(lines
        .iter()
        .any(|line| line.as_string().map_or(false, |l| l.contains("history marker"))));
}
