//! HTTP calls to the authorization backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: [`BrowserApi`] returns
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to a `Result` so the flow can branch on success and
//! failure exactly once. Non-2xx responses keep their status and body for the
//! message helper.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::types::{AuthorizeResponse, LoginResponse};

pub const AUTHORIZATION_PATH: &str = "/authorization";
pub const LOGIN_PATH: &str = "/login";
pub const AUTHORIZE_PATH: &str = "/oauth/authorize";

/// Failure of a portal HTTP call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },
    /// The success body could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// The three endpoints the portal talks to.
#[allow(async_fn_in_trait)]
pub trait PortalApi {
    /// `GET /authorization<search>`, returning the consent HTML fragment.
    async fn fetch_authorization(&self, search: &str, token: Option<&str>) -> Result<String, ApiError>;
    /// `POST /login` with the serialized login form.
    async fn login(&self, form: &Value) -> Result<LoginResponse, ApiError>;
    /// `POST /oauth/authorize` with the serialized consent form.
    async fn authorize(&self, form: &Value, token: Option<&str>) -> Result<AuthorizeResponse, ApiError>;
}

/// Path for the authorization fragment, forwarding the page's query string.
pub fn authorization_endpoint(search: &str) -> String {
    if search.is_empty() || search.starts_with('?') {
        format!("{AUTHORIZATION_PATH}{search}")
    } else {
        format!("{AUTHORIZATION_PATH}?{search}")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Same-origin API backed by `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserApi;

#[cfg(feature = "hydrate")]
async fn read_failure(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::Status { status, body }
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(path: &str, form: &Value, token: Option<&str>) -> Result<T, ApiError> {
    let mut request = gloo_net::http::Request::post(path).header("Accept", "application/json");
    if let Some(token) = token {
        request = request.header("Authorization", &bearer(token));
    }
    let resp = request
        .json(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(read_failure(resp).await);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

impl PortalApi for BrowserApi {
    async fn fetch_authorization(&self, search: &str, token: Option<&str>) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = authorization_endpoint(search);
            let mut request = gloo_net::http::Request::get(&url).header("Accept", "text/html");
            if let Some(token) = token {
                request = request.header("Authorization", &bearer(token));
            }
            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(read_failure(resp).await);
            }
            resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (search, token);
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, form: &Value) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(LOGIN_PATH, form, None).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
            Err(ApiError::Unavailable)
        }
    }

    async fn authorize(&self, form: &Value, token: Option<&str>) -> Result<AuthorizeResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(AUTHORIZE_PATH, form, token).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (form, token);
            Err(ApiError::Unavailable)
        }
    }
}
