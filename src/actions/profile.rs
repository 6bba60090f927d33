//! Profile Actions
//!
//! Edit-in-place for profile data and avatar, plus the profile-only menu
//! buttons.

use dom_delegate::Trigger;
use web_sys::{Element, Event};

use crate::context::PageHandle;
use crate::dispatcher::{spawn_action, ActionBinding};
use crate::dom;
use crate::endpoints;
use crate::error::ActionResult;

pub const PROFILE_REGION: &str = "#profile_catcher";
pub const PROFILE_FORM: &str = "#profile_form";
pub const AVATAR_REGION: &str = "#img_catcher";
pub const AVATAR_INPUT_ID: &str = "avatar";
pub const MENU_REGION: &str = "#my_profile";

/// Load an edit form (or any GET fragment) into `region`
fn load_fragment(ctx: &PageHandle, name: &'static str, url: String, region: &'static str) {
    let ctx = ctx.clone();
    spawn_action(name, async move {
        let response = ctx.client.get_fragment(&url).await;
        dom::patch_region(region, response)?;
        Ok(())
    });
}

fn open_profile_form(ctx: &PageHandle, ev: &Event, _: &Element) -> ActionResult {
    ev.prevent_default();
    load_fragment(ctx, "profile-edit", endpoints::PROFILE_EDIT.to_string(), PROFILE_REGION);
    Ok(())
}

fn submit_profile_form(ctx: &PageHandle, ev: &Event, _: &Element) -> ActionResult {
    ev.prevent_default();
    let payload = dom::collect_fields(PROFILE_FORM);
    let ctx = ctx.clone();
    spawn_action("profile-submit", async move {
        let response = ctx.client.post_form(endpoints::PROFILE_EDIT, &payload).await;
        // Either the updated profile card or the form with errors
        dom::patch_region(PROFILE_REGION, response)?;
        Ok(())
    });
    Ok(())
}

fn open_avatar_form(ctx: &PageHandle, ev: &Event, _: &Element) -> ActionResult {
    ev.prevent_default();
    load_fragment(ctx, "avatar-edit", endpoints::PROFILE_IMG_EDIT.to_string(), AVATAR_REGION);
    Ok(())
}

fn submit_avatar(ctx: &PageHandle, ev: &Event, _: &Element) -> ActionResult {
    ev.prevent_default();
    let data = web_sys::FormData::new()?;
    dom::append_file(&data, "image", AVATAR_INPUT_ID)?;
    let ctx = ctx.clone();
    spawn_action("avatar-submit", async move {
        let response = ctx.client.post_multipart(endpoints::PROFILE_IMG_EDIT, data).await;
        dom::patch_region(AVATAR_REGION, response)?;
        Ok(())
    });
    Ok(())
}

pub fn load_menu_buttons(ctx: &PageHandle) -> ActionResult {
    if ctx.path != endpoints::PROFILE_PAGE {
        return Ok(());
    }
    let url = ctx.revision().profile_buttons_url.clone();
    load_fragment(ctx, "profile-buttons", url, MENU_REGION);
    Ok(())
}

pub fn bindings() -> Vec<ActionBinding> {
    vec![
        ActionBinding::click(
            "profile-edit",
            Trigger::delegated("#update_profile_catcher", "#profile_edit"),
            open_profile_form,
        ),
        ActionBinding::click(
            "profile-submit",
            Trigger::delegated(PROFILE_REGION, "#profile_submit"),
            submit_profile_form,
        ),
        ActionBinding::click(
            "avatar-edit",
            Trigger::delegated("#update_img_catcher", "#profile_img_edit"),
            open_avatar_form,
        ),
        ActionBinding::click(
            "avatar-submit",
            Trigger::delegated(AVATAR_REGION, "#profile_img_submit"),
            submit_avatar,
        ),
    ]
}
