//! Page Actions
//!
//! Handlers organized by site area.

mod admin;
mod content;
mod home;
mod media;
mod profile;
mod quiz;

use crate::dispatcher::{ActionBinding, LoadAction};

/// Every click binding on every page; bindings whose anchors are missing
/// from the current page bind nothing
pub fn bindings() -> Vec<ActionBinding> {
    [
        admin::bindings(),
        profile::bindings(),
        content::bindings(),
        media::bindings(),
        quiz::bindings(),
    ]
    .concat()
}

pub fn load_actions() -> Vec<LoadAction> {
    vec![
        LoadAction { name: "search-relabel", run: admin::relabel_search },
        LoadAction { name: "profile-buttons", run: profile::load_menu_buttons },
        LoadAction { name: "info-modal", run: quiz::maybe_show_info },
        LoadAction { name: "countdown", run: quiz::start_countdown },
        LoadAction { name: "title-swap", run: home::swap_title },
    ]
}
