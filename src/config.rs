//! Page Configuration
//!
//! Everything the scripts read from the page before binding handlers:
//! the anti-forgery token, flags the server injects as globals, and the
//! behaviour switches that differ between site revisions.

use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use crate::endpoints;

/// Global JS variable the templates define with the CSRF token
pub const CSRF_GLOBAL: &str = "csrftoken";
/// Cookie set by Django's CSRF middleware
pub const CSRF_COOKIE_NAME: &str = "csrftoken";
pub const CSRF_META_NAME: &str = "csrf-token";
pub const CSRF_FORM_FIELD: &str = "csrfmiddlewaretoken";
/// Global the quiz page sets when the info modal should appear
pub const USER_INFO_GLOBAL: &str = "user_info";
/// Optional `<script type="application/json">` with [`Settings`] overrides
pub const SETTINGS_ELEMENT_ID: &str = "site-actions-config";

/// What happens after the "sent for moderation" / "letter sent" modal is clicked
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AfterConfirm {
    Navigate { url: String },
    SubmitForm { selector: String },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevisionConfig {
    /// Zoom modal opens only when the viewport is at least this tall
    pub zoom_min_height: Option<f64>,
    /// Info modal opens only when the viewport is at least this tall
    pub info_min_height: Option<f64>,
    pub after_confirm: AfterConfirm,
    pub profile_buttons_url: String,
    pub info_hide_delay_ms: u32,
    pub info_submit_delay_ms: u32,
    pub countdown_seconds: i32,
}

impl Default for RevisionConfig {
    fn default() -> Self {
        Self {
            zoom_min_height: Some(900.0),
            info_min_height: Some(900.0),
            after_confirm: AfterConfirm::Navigate {
                url: endpoints::PROFILE_PAGE.to_string(),
            },
            profile_buttons_url: endpoints::PROFILE_BUTTONS.to_string(),
            info_hide_delay_ms: 3000,
            info_submit_delay_ms: 3500,
            countdown_seconds: 15,
        }
    }
}

impl RevisionConfig {
    /// `None` means no threshold
    pub fn tall_enough(min: Option<f64>, height: f64) -> bool {
        min.map_or(true, |min| height >= min)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log_level: String,
    pub log_history: usize,
    pub revision: RevisionConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_history: console_logger::DEFAULT_CAPACITY,
            revision: RevisionConfig::default(),
        }
    }
}

impl Settings {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

/// Read once on load, shared by every handler
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageConfig {
    pub csrf_token: String,
    /// Kept as the raw number; only exactly 1 asks for the info modal
    pub user_info: Option<f64>,
    pub settings: Settings,
}

impl PageConfig {
    pub fn revision(&self) -> &RevisionConfig {
        &self.settings.revision
    }

    pub fn from_page() -> Self {
        let settings = read_settings();
        Self {
            csrf_token: read_csrf_token().unwrap_or_default(),
            user_info: ambient_global(USER_INFO_GLOBAL).and_then(|v| v.as_f64()),
            settings,
        }
    }
}

fn ambient_global(name: &str) -> Option<wasm_bindgen::JsValue> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

/// Global variable first, then cookie, meta tag and hidden form input
fn read_csrf_token() -> Option<String> {
    use wasm_bindgen::JsCast;

    if let Some(token) = ambient_global(CSRF_GLOBAL).and_then(|v| v.as_string()) {
        return Some(token);
    }
    let document = web_sys::window()?.document()?;
    if let Some(token) = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .and_then(|d| d.cookie().ok())
        .and_then(|c| parse_cookie_value(&c, CSRF_COOKIE_NAME))
    {
        return Some(token);
    }
    let meta = format!("meta[name=\"{}\"]", CSRF_META_NAME);
    if let Some(token) = document
        .query_selector(&meta)
        .ok()
        .flatten()
        .and_then(|m| m.get_attribute("content"))
    {
        return Some(token);
    }
    let input = format!("input[name=\"{}\"]", CSRF_FORM_FIELD);
    document
        .query_selector(&input)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|el| el.value())
}

fn read_settings() -> Settings {
    let Some(text) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(SETTINGS_ELEMENT_ID))
        .and_then(|el| el.text_content())
    else {
        return Settings::default();
    };
    match Settings::from_json(&text) {
        Ok(settings) => settings,
        Err(e) => {
            // Logger is not installed yet
            web_sys::console::warn_1(&format!("[config] ignoring #{}: {}", SETTINGS_ELEMENT_ID, e).into());
            Settings::default()
        }
    }
}

/// "name1=value1; name2=value2"
pub fn parse_cookie_value(cookie_str: &str, name: &str) -> Option<String> {
    cookie_str.split(';').find_map(|part| {
        let (key, value) = part.trim().split_once('=')?;
        (key.trim() == name).then(|| value.trim().to_string())
    })
}
