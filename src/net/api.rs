//! REST calls against the activities API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning `ApiError::Unavailable`, since these
//! endpoints are only reachable from the browser page.
//!
//! ERROR HANDLING
//! ==============
//! Every call reads the body as text and hands `(ok, status, body)` to a
//! pure `parse_*_reply` function, so response classification is the same
//! code in the browser and in unit tests. Nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::types::{Catalog, SignupAccepted};
use crate::config::BoardConfig;
use crate::util::uri::encode_component;

/// Failure taxonomy shared by every API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("request rejected ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },
    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Server-provided `detail` text, if this was an application rejection.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// `GET` target for the full catalog.
pub fn activities_endpoint(config: &BoardConfig) -> String {
    config.api_root.clone()
}

/// `POST`/`DELETE` target for one participant of one activity.
pub fn signup_endpoint(config: &BoardConfig, activity: &str, email: &str) -> String {
    format!(
        "{}/{}/signup?email={}",
        config.api_root,
        encode_component(activity),
        encode_component(email)
    )
}

fn detail_from(body: &Value) -> Option<String> {
    body.get("detail").and_then(Value::as_str).map(str::to_owned)
}

fn parse_json(body: &str) -> Result<Value, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Rejection for a non-2xx reply, with `detail` when the body carries one.
fn rejected(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<Value>(body).ok().as_ref().and_then(detail_from);
    ApiError::Rejected { status, detail }
}

/// Classify a `GET /activities` reply.
///
/// # Errors
///
/// `Rejected` for non-2xx statuses, `Malformed` when the body is not a
/// catalog object.
pub fn parse_catalog_reply(ok: bool, status: u16, body: &str) -> Result<Catalog, ApiError> {
    if !ok {
        return Err(rejected(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Classify a `POST .../signup` reply.
///
/// The body is decoded before the status is inspected; an unparseable body
/// is `Malformed` regardless of status.
///
/// # Errors
///
/// `Malformed` for non-JSON bodies, `Rejected` for non-2xx statuses.
pub fn parse_signup_reply(ok: bool, status: u16, body: &str) -> Result<SignupAccepted, ApiError> {
    let value = parse_json(body)?;
    if !ok {
        return Err(ApiError::Rejected { status, detail: detail_from(&value) });
    }
    serde_json::from_value(value).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Classify a `DELETE .../signup` reply. A 2xx body is ignored.
///
/// # Errors
///
/// `Malformed` when a non-2xx body is not JSON, otherwise `Rejected`.
pub fn parse_unregister_reply(ok: bool, status: u16, body: &str) -> Result<(), ApiError> {
    if ok {
        return Ok(());
    }
    let value = parse_json(body)?;
    Err(ApiError::Rejected { status, detail: detail_from(&value) })
}

#[cfg(feature = "csr")]
async fn read_reply(
    request: gloo_net::http::RequestBuilder,
) -> Result<(bool, u16, String), ApiError> {
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let ok = resp.ok();
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))?;
    Ok((ok, status, body))
}

/// Fetch the full catalog, bypassing the HTTP cache.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn fetch_activities(config: &BoardConfig) -> Result<Catalog, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = activities_endpoint(config);
        let request = gloo_net::http::Request::get(&url).cache(web_sys::RequestCache::NoStore);
        let (ok, status, body) = read_reply(request).await?;
        parse_catalog_reply(ok, status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Register `email` for `activity` via `POST /activities/{name}/signup`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn sign_up(config: &BoardConfig, activity: &str, email: &str) -> Result<SignupAccepted, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = signup_endpoint(config, activity, email);
        let (ok, status, body) = read_reply(gloo_net::http::Request::post(&url)).await?;
        parse_signup_reply(ok, status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, activity, email);
        Err(ApiError::Unavailable)
    }
}

/// Remove `email` from `activity` via `DELETE /activities/{name}/signup`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn unregister(config: &BoardConfig, activity: &str, email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = signup_endpoint(config, activity, email);
        let (ok, status, body) = read_reply(gloo_net::http::Request::delete(&url)).await?;
        parse_unregister_reply(ok, status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, activity, email);
        Err(ApiError::Unavailable)
    }
}
