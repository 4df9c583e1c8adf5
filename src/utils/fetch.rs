//! Network fetching utilities.
//!
//! Thin async wrappers over `gloo-net` that turn every non-2xx answer into a
//! [`FetchError::Http`] carrying the server's explanation. There is no
//! timeout or retry: a request resolves whenever the server answers.
//!
//! Uploads go through `XMLHttpRequest` instead, since `fetch` cannot report
//! how much of a request body has been sent.

use gloo_net::http::{Request, RequestBuilder, Response};
use js_sys::Promise;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, ProgressEvent, RequestCache, XmlHttpRequest};

use crate::config::AUTH_MESSAGE_HEADER;
use crate::core::error::FetchError;

// =============================================================================
// Fetch Functions
// =============================================================================

/// Fetch and parse JSON from a URL, bypassing the HTTP cache.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let resp = send(Request::get(url).cache(RequestCache::NoStore)).await?;
    resp.json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetch text content from a URL.
pub async fn fetch_content(url: &str) -> Result<String, FetchError> {
    let resp = send(Request::get(url)).await?;
    read_text(resp).await
}

/// `POST` with an empty body, returning the response text.
pub async fn post_empty(url: &str) -> Result<String, FetchError> {
    let resp = send(Request::post(url)).await?;
    read_text(resp).await
}

/// `POST` a multipart form, returning the response text.
///
/// `on_progress` is called with the percentage of the body sent whenever the
/// browser reports upload progress.
pub async fn post_form(
    url: &str,
    form: FormData,
    on_progress: impl Fn(u8) + 'static,
) -> Result<String, FetchError> {
    let xhr = XmlHttpRequest::new().map_err(js_error)?;
    xhr.open("POST", url).map_err(js_error)?;

    let progress = Closure::<dyn Fn(ProgressEvent)>::new(move |ev: ProgressEvent| {
        if ev.length_computable() && ev.total() > 0.0 {
            on_progress((ev.loaded() / ev.total() * 100.0).round() as u8);
        }
    });
    let upload = xhr.upload().map_err(js_error)?;
    upload.set_onprogress(Some(progress.as_ref().unchecked_ref()));

    let done = Promise::new(&mut |resolve, reject| {
        xhr.set_onload(Some(&resolve));
        xhr.set_onerror(Some(&reject));
    });
    xhr.send_with_opt_form_data(Some(&form)).map_err(js_error)?;
    let finished = JsFuture::from(done).await;

    // The closure must outlive every progress event
    upload.set_onprogress(None);
    drop(progress);
    finished.map_err(|_| FetchError::Network(format!("upload to {} failed", url)))?;

    let status = xhr.status().map_err(js_error)?;
    let body = xhr.response_text().map_err(js_error)?.unwrap_or_default();
    if (200..300).contains(&status) {
        return Ok(body);
    }
    let message = xhr
        .get_response_header(AUTH_MESSAGE_HEADER)
        .ok()
        .flatten()
        .unwrap_or(body);
    Err(FetchError::Http {
        status,
        message: message.trim_end().to_string(),
    })
}

/// `DELETE` a URL, returning the response text.
pub async fn delete(url: &str) -> Result<String, FetchError> {
    let resp = send(Request::delete(url)).await?;
    read_text(resp).await
}

// =============================================================================
// Helpers
// =============================================================================

async fn send(builder: RequestBuilder) -> Result<Response, FetchError> {
    let resp = builder
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    check_status(resp).await
}

/// Map a non-2xx response to [`FetchError::Http`].
///
/// The auth message header wins over the body, which is what the server
/// sends when a request is rejected by its access rules.
async fn check_status(resp: Response) -> Result<Response, FetchError> {
    if resp.ok() {
        return Ok(resp);
    }

    let status = resp.status();
    let message = match resp.headers().get(AUTH_MESSAGE_HEADER) {
        Some(msg) => msg,
        None => resp.text().await.unwrap_or_default(),
    };
    Err(FetchError::Http {
        status,
        message: message.trim_end().to_string(),
    })
}

fn js_error(err: JsValue) -> FetchError {
    FetchError::Network(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

async fn read_text(resp: Response) -> Result<String, FetchError> {
    resp.text()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
