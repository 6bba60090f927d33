//! Action Client
//!
//! AJAX calls against the site's views. Every request carries the CSRF token
//! and the `X-Requested-With` marker the views check before answering with
//! a JSON fragment.

use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::FormData;

use crate::error::{ActionError, ActionResult};
use crate::models::FragmentResponse;
use crate::payload::FormPayload;

pub const CSRF_HEADER: &str = "X-CSRF-TOKEN";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

#[derive(Clone, Debug)]
pub struct ActionClient {
    csrf_token: String,
}

impl ActionClient {
    pub fn new(csrf_token: impl Into<String>) -> Self {
        Self {
            csrf_token: csrf_token.into(),
        }
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(CSRF_HEADER, &self.csrf_token)
            .header("X-Requested-With", "XMLHttpRequest")
            .header("Accept", "application/json, text/javascript, */*; q=0.01")
    }

    /// GET a fragment (edit forms, profile buttons)
    pub async fn get_fragment(&self, url: &str) -> ActionResult<FragmentResponse> {
        log::debug!("GET {}", url);
        let response = self.prepare(Request::get(url)).send().await?;
        read_fragment(url, response).await
    }

    /// POST an url-encoded payload
    pub async fn post_form(&self, url: &str, payload: &FormPayload) -> ActionResult<FragmentResponse> {
        log::debug!("POST {} ({} fields)", url, payload.len());
        let request = self
            .prepare(Request::post(url))
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(payload.encode()?)?;
        let response = request.send().await?;
        read_fragment(url, response).await
    }

    /// POST multipart form data; the browser sets the boundary
    pub async fn post_multipart(&self, url: &str, data: FormData) -> ActionResult<FragmentResponse> {
        log::debug!("POST {} (multipart)", url);
        let request = self.prepare(Request::post(url)).body(data)?;
        let response = request.send().await?;
        read_fragment(url, response).await
    }
}

async fn read_fragment(url: &str, response: Response) -> ActionResult<FragmentResponse> {
    if !response.ok() {
        log::debug!("{} answered {}", url, response.status());
        return Err(ActionError::Status {
            status: response.status(),
            text: response.status_text(),
        });
    }
    Ok(response.json::<FragmentResponse>().await?)
}
