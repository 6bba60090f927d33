//! User Content Actions
//!
//! Creating posts and questions, writing to the admin, and the confirmation
//! modals shown when the server accepts them.

use dom_delegate::Trigger;
use web_sys::{Element, Event};

use crate::config::AfterConfirm;
use crate::context::PageHandle;
use crate::dispatcher::{spawn_action, ActionBinding};
use crate::dom;
use crate::endpoints;
use crate::error::ActionResult;
use crate::models::FragmentResponse;
use crate::modal;

pub const CREATE_FORM: &str = ".user-action";
pub const CREATE_REGION: &str = ".user-activity";
pub const CREATE_MODAL: &str = "#user-action-modal";
pub const CREATE_NOTICE_ID: &str = "user-activity-type";
pub const LETTER_FORM: &str = ".user-letter";
pub const LETTER_MODAL: &str = "#user-letter-modal";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Post,
    Question,
}

impl ContentKind {
    /// The same form template serves both; the page path tells them apart
    pub fn from_path(path: &str) -> Self {
        if path.contains("posts") {
            ContentKind::Post
        } else {
            ContentKind::Question
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            ContentKind::Post => endpoints::POSTS_CREATE,
            ContentKind::Question => endpoints::QUESTION_CREATE,
        }
    }

    /// (multipart field, file input id)
    pub fn file_slots(self) -> &'static [(&'static str, &'static str)] {
        match self {
            ContentKind::Post => &[("image", "post_image")],
            ContentKind::Question => &[
                ("image_01", "image_01"),
                ("image_02", "image_02"),
                ("image_03", "image_03"),
            ],
        }
    }

    pub fn moderation_notice(self) -> &'static str {
        match self {
            ContentKind::Post => "Ваша статья отправлена на премодерацию",
            ContentKind::Question => "Ваш вопрос отправлен на премодерацию",
        }
    }
}

/// How a create/letter response is shown
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Form came back with errors
    Rerender(String),
    /// Accepted; show the confirmation modal
    Confirm,
}

impl From<FragmentResponse> for Outcome {
    fn from(response: FragmentResponse) -> Self {
        match response.result {
            Some(html) => Outcome::Rerender(html),
            None => Outcome::Confirm,
        }
    }
}

fn create_content(ctx: &PageHandle, _: &Event, _: &Element) -> ActionResult {
    let kind = ContentKind::from_path(&ctx.path);
    let data = dom::collect_multipart(CREATE_FORM)?;
    for (field, input_id) in kind.file_slots() {
        dom::append_file(&data, field, input_id)?;
    }

    let ctx = ctx.clone();
    spawn_action("content-create", async move {
        let response = ctx.client.post_multipart(kind.endpoint(), data).await?;
        match Outcome::from(response) {
            Outcome::Rerender(html) => dom::query(CREATE_REGION)?.set_inner_html(&html),
            Outcome::Confirm => {
                modal::show(CREATE_MODAL)?;
                dom::by_id::<Element>(CREATE_NOTICE_ID)?.set_inner_html(kind.moderation_notice());
            }
        }
        Ok(())
    });
    Ok(())
}

fn write_to_admin(ctx: &PageHandle, _: &Event, _: &Element) -> ActionResult {
    let payload = dom::collect_fields(LETTER_FORM);
    let ctx = ctx.clone();
    spawn_action("letter-send", async move {
        let response = ctx.client.post_form(endpoints::WRITE_TO_ADMIN, &payload).await?;
        match Outcome::from(response) {
            Outcome::Rerender(html) => dom::query(LETTER_FORM)?.set_inner_html(&html),
            Outcome::Confirm => modal::show(LETTER_MODAL)?,
        }
        Ok(())
    });
    Ok(())
}

fn dismiss(ctx: &PageHandle, modal_selector: &str) -> ActionResult {
    modal::hide(modal_selector)?;
    match &ctx.revision().after_confirm {
        AfterConfirm::Navigate { url } => dom::navigate(url),
        AfterConfirm::SubmitForm { selector } => dom::submit_form(selector),
    }
}

pub fn bindings() -> Vec<ActionBinding> {
    vec![
        ActionBinding::click("content-create", Trigger::direct("input.confirm-action"), create_content),
        ActionBinding::click("content-confirmed", Trigger::direct(CREATE_MODAL), |ctx, _, _| {
            dismiss(ctx, CREATE_MODAL)
        }),
        ActionBinding::click("letter-send", Trigger::direct("input.confirm-action-letter"), write_to_admin),
        ActionBinding::click("letter-confirmed", Trigger::direct(LETTER_MODAL), |ctx, _, _| {
            dismiss(ctx, LETTER_MODAL)
        }),
    ]
}
