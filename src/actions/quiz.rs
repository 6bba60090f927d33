//! Quiz Page Actions
//!
//! The "how testing works" modal shown before a test starts, and the
//! per-question countdown in timed mode.

use dom_delegate::Trigger;
use gloo_timers::future::TimeoutFuture;
use web_sys::{Element, Event};

use crate::config::RevisionConfig;
use crate::context::PageHandle;
use crate::countdown;
use crate::dispatcher::{spawn_action, ActionBinding};
use crate::dom;
use crate::endpoints;
use crate::error::ActionResult;
use crate::modal;
use crate::payload::FormPayload;

pub const INFO_MODAL: &str = "#info-modal";
pub const INFO_CLOSE: &str = "#info-modal #info-close";
pub const NO_INFO_CHECKBOX_ID: &str = "no-info";
pub const INFO_CONTENT: &str = ".modal-content";
pub const START_FORM: &str = "#form-start-test";
/// Value of the `user_info` global that asks for the modal
pub const SHOW_INFO: f64 = 1.0;

pub fn should_show_info(user_info: Option<f64>, rev: &RevisionConfig, height: f64) -> bool {
    user_info == Some(SHOW_INFO) && RevisionConfig::tall_enough(rev.info_min_height, height)
}

/// Waits before hiding the modal and before submitting the start form,
/// each relative to the previous step
pub fn dismissal_waits(rev: &RevisionConfig) -> (u32, u32) {
    let hide = rev.info_hide_delay_ms;
    let submit = rev.info_submit_delay_ms.saturating_sub(hide);
    (hide, submit)
}

fn start_test() -> ActionResult {
    modal::hide(INFO_MODAL)?;
    dom::submit_form(START_FORM)
}

async fn sleep(ms: u32) {
    if ms > 0 {
        TimeoutFuture::new(ms).await;
    }
}

fn close_info(ctx: &PageHandle, _: &Event, _: &Element) -> ActionResult {
    if !dom::checkbox_checked(NO_INFO_CHECKBOX_ID)? {
        return start_test();
    }

    let mut payload = FormPayload::new();
    payload.set_flag("flag", true);
    let (hide_wait, submit_wait) = dismissal_waits(ctx.revision());
    let ctx = ctx.clone();
    spawn_action("info-opt-out", async move {
        let response = ctx.client.post_form(endpoints::NO_INFO, &payload).await?;
        // Nothing happens on a falsy answer; the modal stays open
        let Some(html) = response.html() else {
            return Ok(());
        };
        // Each step runs even if the one before it failed
        match dom::query(INFO_CONTENT) {
            Ok(content) => content.set_inner_html(html),
            Err(e) => log::warn!("[info-opt-out] {}", e),
        }
        sleep(hide_wait).await;
        if let Err(e) = modal::hide(INFO_MODAL) {
            log::warn!("[info-opt-out] {}", e);
        }
        sleep(submit_wait).await;
        dom::submit_form(START_FORM)
    });
    Ok(())
}

pub fn maybe_show_info(ctx: &PageHandle) -> ActionResult {
    if should_show_info(ctx.config.user_info, ctx.revision(), dom::viewport_height()) {
        modal::show(INFO_MODAL)?;
    }
    Ok(())
}

pub fn start_countdown(ctx: &PageHandle) -> ActionResult {
    countdown::start(ctx.revision().countdown_seconds);
    Ok(())
}

pub fn bindings() -> Vec<ActionBinding> {
    vec![ActionBinding::click("info-close", Trigger::direct(INFO_CLOSE), close_info)]
}
