//! Home Page Title Swap
//!
//! "Проверь себя" fades out and comes back as "Верь в себя".

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

use crate::dom;

pub const TITLE_SELECTOR: &str = "#index-title";
pub const SWAPPED_TEXT: &str = "Верь в себя";
pub const SWAPPED_CLASS: &str = "mt-4 oranged";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitleChange {
    Style(&'static str),
    TextAndClass { text: &'static str, class: &'static str },
}

/// (milliseconds after load, change)
pub const SCHEDULE: [(u32, TitleChange); 3] = [
    (3000, TitleChange::Style("opacity: 0; transition: opacity 3s;")),
    (6000, TitleChange::TextAndClass { text: SWAPPED_TEXT, class: SWAPPED_CLASS }),
    (6500, TitleChange::Style("opacity: 1; transition: opacity 4s;")),
];

/// Delays between consecutive steps
pub fn step_delays() -> Vec<(u32, TitleChange)> {
    let mut at = 0;
    SCHEDULE
        .iter()
        .map(|&(when, change)| {
            let wait = when - at;
            at = when;
            (wait, change)
        })
        .collect()
}

fn apply(change: TitleChange) {
    let Some(title) = dom::query_opt(TITLE_SELECTOR) else {
        return;
    };
    let applied = match change {
        TitleChange::Style(style) => title.set_attribute("style", style),
        TitleChange::TextAndClass { text, class } => {
            title.set_text_content(Some(text));
            title.set_attribute("class", class)
        }
    };
    if let Err(e) = applied {
        log::warn!("title swap: {:?}", e);
    }
}

pub fn start() {
    spawn_local(async {
        for (wait, change) in step_delays() {
            TimeoutFuture::new(wait).await;
            apply(change);
        }
    });
}
