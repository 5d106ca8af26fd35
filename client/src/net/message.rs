//! User-facing messages for failed requests.
//!
//! Servers report errors in several shapes (`{"message": ..}`, OAuth-style
//! `{"error": .., "error_description": ..}`, validation `{"errors": [..]}` or
//! plain text). The first usable source wins; otherwise the status decides.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use serde_json::Value;

use super::api::ApiError;

const MAX_TEXT_LEN: usize = 200;

/// Display text for a failed login response with `status` and raw `body`.
pub fn error_message(status: u16, body: &str) -> String {
    body_message(body).unwrap_or_else(|| status_message(status))
}

/// Display text for a failed login request.
pub fn api_error_message(err: &ApiError) -> String {
    describe(err, status_message)
}

/// Display text for a failed consent request. Rejections are not about
/// credentials here, so 401/403 get their own fallback.
pub fn consent_error_message(err: &ApiError) -> String {
    describe(err, consent_status_message)
}

fn describe(err: &ApiError, status_fallback: fn(u16) -> String) -> String {
    match err {
        ApiError::Status { status, body } => body_message(body).unwrap_or_else(|| status_fallback(*status)),
        ApiError::Network(_) | ApiError::Unavailable => status_fallback(0),
        ApiError::Decode(_) => "The server sent an unexpected response.".to_owned(),
    }
}

fn body_message(body: &str) -> Option<String> {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => json_message(&json),
        Err(_) => plain_text(body),
    }
}

fn json_message(json: &Value) -> Option<String> {
    for key in ["message", "error_description", "error"] {
        if let Some(text) = non_empty_str(json.get(key)) {
            return Some(text);
        }
    }
    let first = json.get("errors")?.as_array()?.first()?;
    non_empty_str(Some(first)).or_else(|| non_empty_str(first.get("message")))
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    let text = value?.as_str()?.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

fn plain_text(body: &str) -> Option<String> {
    let text = body.trim();
    if text.is_empty() || text.starts_with('<') {
        return None;
    }
    Some(text.chars().take(MAX_TEXT_LEN).collect())
}

fn status_message(status: u16) -> String {
    match status {
        0 => "Unable to reach the server.".to_owned(),
        401 | 403 => "Invalid username or password.".to_owned(),
        _ => format!("Request failed with status {status}."),
    }
}

fn consent_status_message(status: u16) -> String {
    match status {
        401 | 403 => "This application could not be authorized. Sign in again and retry.".to_owned(),
        _ => status_message(status),
    }
}
