//! Admin Panel Actions
//!
//! Availability and staff toggles on the admin list pages, the deletion-mode
//! warning and the search bar relabelling. Toggles post the ids of the rows
//! currently shown so the server re-renders the same page of the list.

use dom_delegate::Trigger;
use web_sys::{Element, Event};

use crate::context::PageHandle;
use crate::dispatcher::{spawn_action, ActionBinding};
use crate::dom;
use crate::endpoints::{self, AdminResource};
use crate::error::{ActionError, ActionResult};
use crate::payload::BulkToggle;
use crate::search;

/// Region holding the list table, replaced by every toggle
pub const RESULTS_REGION: &str = ".table-responsive";
/// "Delete completely" switch; unchecked means deactivate
pub const MODE_CHECKBOX_ID: &str = "option2";
pub const MODE_SWITCH_ID: &str = "deact_delete";
pub const MODE_WARNING_ID: &str = "text";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleKind {
    Availability(AdminResource),
    Staff,
}

impl ToggleKind {
    pub fn url(self, id: &str) -> String {
        match self {
            ToggleKind::Availability(resource) => resource.toggle_url(id),
            ToggleKind::Staff => endpoints::staff_toggle_url(id),
        }
    }

    pub fn sends_flag(self) -> bool {
        matches!(self, ToggleKind::Availability(_))
    }
}

struct ToggleDef {
    name: &'static str,
    container: &'static str,
    target: &'static str,
    kind: ToggleKind,
}

const TOGGLES: [ToggleDef; 5] = [
    ToggleDef {
        name: "toggle-category",
        container: "#update_cat_catcher",
        target: "#update_cat_btn",
        kind: ToggleKind::Availability(AdminResource::Categories),
    },
    ToggleDef {
        name: "toggle-question",
        container: "#update_que_catcher",
        target: "#update_que_btn",
        kind: ToggleKind::Availability(AdminResource::Questions),
    },
    ToggleDef {
        name: "toggle-user",
        container: "#update_users_catcher",
        target: "#update_user_btn",
        kind: ToggleKind::Availability(AdminResource::Users),
    },
    ToggleDef {
        name: "toggle-post",
        container: "#update_post_catcher",
        target: "#update_post_btn",
        kind: ToggleKind::Availability(AdminResource::Posts),
    },
    ToggleDef {
        name: "toggle-staff",
        container: "#give_me_a_crown",
        target: "#give_me_a_crown_btn",
        kind: ToggleKind::Staff,
    },
];

/// Url and body for one click
pub fn toggle_request(kind: ToggleKind, id: &str, flag: bool, elements: Vec<String>) -> (String, BulkToggle) {
    let body = BulkToggle {
        flag: kind.sends_flag().then_some(flag),
        elements,
    };
    (kind.url(id), body)
}

fn run_toggle(
    ctx: &PageHandle,
    ev: &Event,
    button: &Element,
    name: &'static str,
    target: &'static str,
    kind: ToggleKind,
) -> ActionResult {
    ev.prevent_default();
    let id = button
        .get_attribute("name")
        .ok_or_else(|| ActionError::missing(format!("{}[name]", target)))?;
    let flag = if kind.sends_flag() {
        dom::checkbox_checked(MODE_CHECKBOX_ID)?
    } else {
        false
    };
    let (url, body) = toggle_request(kind, &id, flag, dom::visible_item_ids()?);
    let payload = body.to_payload();

    let ctx = ctx.clone();
    spawn_action(name, async move {
        let response = ctx.client.post_form(&url, &payload).await;
        dom::patch_region(RESULTS_REGION, response)?;
        Ok(())
    });
    Ok(())
}

fn show_mode_warning(_: &PageHandle, _: &Event, _: &Element) -> ActionResult {
    let display = if dom::checkbox_checked(MODE_CHECKBOX_ID)? { "block" } else { "none" };
    dom::set_display(MODE_WARNING_ID, display)
}

pub fn relabel_search(ctx: &PageHandle) -> ActionResult {
    if let Some(scope) = search::relabel(&ctx.path)? {
        log::debug!("search bar set to {:?}", scope);
    }
    Ok(())
}

pub fn bindings() -> Vec<ActionBinding> {
    let mut bindings: Vec<ActionBinding> = TOGGLES
        .iter()
        .map(|def| {
            let (name, target, kind) = (def.name, def.target, def.kind);
            ActionBinding::click(name, Trigger::delegated(def.container, def.target), move |ctx, ev, el| {
                run_toggle(ctx, ev, el, name, target, kind)
            })
        })
        .collect();
    bindings.push(ActionBinding::click(
        "deletion-mode-warning",
        Trigger::direct(format!("#{}", MODE_SWITCH_ID)),
        show_mode_warning,
    ));
    bindings
}
