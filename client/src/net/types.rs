//! Wire DTOs for the login and authorization endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// `POST /login` success body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// `POST /oauth/authorize` success body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeResponse {
    pub access_token: String,
    /// Token lifetime in seconds.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub expires_in: i64,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                return Ok(v);
            }
            if let Some(v) = n.as_f64() {
                if v.fract() == 0.0 && v >= i64::MIN as f64 && v <= i64::MAX as f64 {
                    return Ok(v as i64);
                }
            }
            Err(D::Error::custom("expected integral number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
