//! Image Zoom
//!
//! Question and post pictures open enlarged in `#image-modal`; a click on
//! the enlarged picture closes it.

use dom_delegate::Trigger;
use web_sys::{Element, Event};

use crate::config::RevisionConfig;
use crate::context::PageHandle;
use crate::dispatcher::ActionBinding;
use crate::dom;
use crate::error::ActionResult;
use crate::modal;

pub const THUMBNAIL: &str = "div.thumbnail";
pub const ZOOM_MODAL: &str = "#image-modal";
pub const ZOOM_IMAGE: &str = "#image-modal .modal-body img";

fn zoom(ctx: &PageHandle, ev: &Event, thumbnail: &Element) -> ActionResult {
    ev.prevent_default();
    let src = thumbnail
        .query_selector("img")?
        .and_then(|img| img.get_attribute("src"));
    if let Some(src) = src {
        dom::query(ZOOM_IMAGE)?.set_attribute("src", &src)?;
    }
    if RevisionConfig::tall_enough(ctx.revision().zoom_min_height, dom::viewport_height()) {
        modal::show(ZOOM_MODAL)?;
    }
    Ok(())
}

pub fn bindings() -> Vec<ActionBinding> {
    vec![
        ActionBinding::click("image-zoom", Trigger::direct(THUMBNAIL), zoom),
        ActionBinding::click("image-zoom-close", Trigger::direct(ZOOM_IMAGE), |_, _, _| {
            modal::hide(ZOOM_MODAL)
        }),
    ]
}
