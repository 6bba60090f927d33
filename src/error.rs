//! Action Errors
//!
//! Failures a handler can hit. None of them reach the user: the dispatcher
//! logs them and the page keeps its previous state.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ActionError {
    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("server responded {status} {text}")]
    Status { status: u16, text: String },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("could not encode payload: {0}")]
    Encode(String),
}

impl ActionError {
    pub fn missing(selector: impl Into<String>) -> Self {
        ActionError::MissingElement(selector.into())
    }
}

impl From<JsValue> for ActionError {
    fn from(value: JsValue) -> Self {
        ActionError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<gloo_net::Error> for ActionError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ActionError::Decode(e.to_string()),
            other => ActionError::Network(other.to_string()),
        }
    }
}

impl From<serde_urlencoded::ser::Error> for ActionError {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        ActionError::Encode(err.to_string())
    }
}

pub type ActionResult<T = ()> = Result<T, ActionError>;
