//! Bootstrap Modals
//!
//! The templates ship Bootstrap's modal plugin. Bootstrap 5 exposes
//! `bootstrap.Modal`, older pages only have the jQuery plugin; with neither
//! loaded the modal is toggled by hand.

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use crate::dom;
use crate::error::ActionResult;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Modal)]
    type BootstrapModal;

    #[wasm_bindgen(static_method_of = BootstrapModal, js_namespace = bootstrap, js_class = "Modal", js_name = getOrCreateInstance, catch)]
    fn get_or_create_instance(el: &Element) -> Result<BootstrapModal, JsValue>;

    #[wasm_bindgen(method)]
    fn show(this: &BootstrapModal);

    #[wasm_bindgen(method)]
    fn hide(this: &BootstrapModal);

    type JQuery;

    #[wasm_bindgen(js_name = jQuery, catch)]
    fn jquery(el: &Element) -> Result<JQuery, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn modal(this: &JQuery, action: &str) -> Result<JsValue, JsValue>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalAction {
    Show,
    Hide,
}

impl ModalAction {
    fn as_str(self) -> &'static str {
        match self {
            ModalAction::Show => "show",
            ModalAction::Hide => "hide",
        }
    }
}

pub fn show(selector: &str) -> ActionResult {
    toggle(selector, ModalAction::Show)
}

pub fn hide(selector: &str) -> ActionResult {
    toggle(selector, ModalAction::Hide)
}

fn toggle(selector: &str, action: ModalAction) -> ActionResult {
    let el = dom::query(selector)?;
    log::debug!("modal {} {}", selector, action.as_str());

    if let Ok(instance) = BootstrapModal::get_or_create_instance(&el) {
        match action {
            ModalAction::Show => instance.show(),
            ModalAction::Hide => instance.hide(),
        }
        return Ok(());
    }
    if let Ok(wrapped) = jquery(&el) {
        if wrapped.modal(action.as_str()).is_ok() {
            return Ok(());
        }
    }
    toggle_by_hand(&el, action)
}

fn toggle_by_hand(el: &Element, action: ModalAction) -> ActionResult {
    let classes = el.class_list();
    let display = match action {
        ModalAction::Show => {
            classes.add_1("show")?;
            "block"
        }
        ModalAction::Hide => {
            classes.remove_1("show")?;
            "none"
        }
    };
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.style().set_property("display", display)?;
    }
    Ok(())
}
