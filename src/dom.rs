//! DOM Adapters
//!
//! Reading form state and patching the server-rendered page.

use leptos::prelude::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{Element, FormData, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::error::{ActionError, ActionResult};
use crate::fragment::{self, Patch};
use crate::models::FragmentResponse;
use crate::payload::FormPayload;

/// Class carried by every row of the current admin list page
pub const PAGINATION_MARKER: &str = "item-on-page";

pub fn query(selector: &str) -> ActionResult<Element> {
    document()
        .query_selector(selector)?
        .ok_or_else(|| ActionError::missing(selector))
}

pub fn query_opt(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(list) = document().query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn by_id<T: JsCast>(id: &str) -> ActionResult<T> {
    document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| ActionError::missing(format!("#{}", id)))
}

pub fn checkbox_checked(id: &str) -> ActionResult<bool> {
    Ok(by_id::<HtmlInputElement>(id)?.checked())
}

/// `value` attributes of the rows currently shown, in document order.
/// A row without one fails the whole list so no partial page is posted.
pub fn visible_item_ids() -> ActionResult<Vec<String>> {
    let rows = document().get_elements_by_class_name(PAGINATION_MARKER);
    (0..rows.length())
        .filter_map(|i| rows.item(i))
        .map(|row| {
            row.get_attribute("value")
                .ok_or_else(|| ActionError::missing(format!(".{}[value]", PAGINATION_MARKER)))
        })
        .collect()
}

/// `name` and current value of an input, textarea or select.
/// Unnamed controls are skipped.
pub fn control_value(el: &Element) -> Option<(String, String)> {
    let (name, value) = if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        (input.name(), input.value())
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        (area.name(), area.value())
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        (select.name(), select.value())
    } else {
        return None;
    };
    (!name.is_empty()).then_some((name, value))
}

fn controls_under(container: &str) -> Vec<Element> {
    query_all(&format!(
        "{c} input, {c} textarea, {c} select",
        c = container
    ))
}

/// Controls under `container` as an object: repeated names keep the last value
pub fn collect_fields(container: &str) -> FormPayload {
    let mut payload = FormPayload::new();
    for (name, value) in controls_under(container).iter().filter_map(control_value) {
        payload.set(name, value);
    }
    payload
}

/// Controls under `container` appended one by one to a multipart body
pub fn collect_multipart(container: &str) -> ActionResult<FormData> {
    let data = FormData::new()?;
    for (name, value) in controls_under(container).iter().filter_map(control_value) {
        data.append_with_str(&name, &value)?;
    }
    Ok(data)
}

/// Append the first file chosen in `#input_id` under `field`.
/// With no file the field still goes out, as the string `undefined`.
pub fn append_file(data: &FormData, field: &str, input_id: &str) -> ActionResult {
    let file = by_id::<HtmlInputElement>(input_id)?
        .files()
        .and_then(|files| files.get(0));
    match file {
        Some(file) => data.append_with_blob(field, &file)?,
        None => data.append_with_str(field, "undefined")?,
    }
    Ok(())
}

/// Put a response into the first element matching `selector`
pub fn patch_region(selector: &str, response: ActionResult<FragmentResponse>) -> ActionResult<Patch> {
    let response = response?;
    let region = query(selector)?;
    fragment::apply(&region, Ok(response))
}

pub fn set_display(id: &str, display: &str) -> ActionResult {
    by_id::<HtmlElement>(id)?.style().set_property("display", display)?;
    Ok(())
}

pub fn submit_form(selector: &str) -> ActionResult {
    query(selector)?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| ActionError::missing(selector))?
        .submit()?;
    Ok(())
}

pub fn navigate(url: &str) -> ActionResult {
    log::info!("navigating to {}", url);
    window().location().set_href(url)?;
    Ok(())
}

pub fn current_path() -> String {
    window().location().pathname().unwrap_or_default()
}

/// Inner height, or the screen height where the window reports no width
pub fn viewport_height() -> f64 {
    let win = window();
    let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    if width > 0.0 {
        win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    } else {
        win.screen().and_then(|s| s.height()).map(f64::from).unwrap_or(0.0)
    }
}
