//! OAuth request parameters and the final client redirect.
//!
//! The portal only hands the issued token back to the client application: it
//! reads `redirect_uri` and `state` from its own query string and appends the
//! token parameters to `redirect_uri`.

#[cfg(test)]
#[path = "oauth_test.rs"]
mod oauth_test;

use url::form_urlencoded;

use super::types::AuthorizeResponse;

/// Token type reported to the client.
pub const TOKEN_TYPE: &str = "Bearer";

/// Parameters the client application sent to the portal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OAuthParams {
    pub redirect_uri: Option<String>,
    pub state: Option<String>,
}

impl OAuthParams {
    /// Parse from `location.search`; the leading `?` is optional.
    /// The first occurrence of each parameter wins.
    pub fn from_search(search: &str) -> Self {
        let query = search.strip_prefix('?').unwrap_or(search);
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "redirect_uri" if params.redirect_uri.is_none() => params.redirect_uri = Some(value.into_owned()),
                "state" if params.state.is_none() => params.state = Some(value.into_owned()),
                _ => {}
            }
        }
        params
    }
}

/// Build the redirect target for an issued token.
///
/// Returns `None` when the request carried no `redirect_uri`.
pub fn build_redirect_url(params: &OAuthParams, resp: &AuthorizeResponse, base_url: Option<&str>) -> Option<String> {
    let redirect_uri = params.redirect_uri.as_deref()?;

    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Some(state) = &params.state {
        query.append_pair("state", state);
    }
    query
        .append_pair("token_type", TOKEN_TYPE)
        .append_pair("access_token", &resp.access_token)
        .append_pair("expires_in", &resp.expires_in.to_string());

    let separator = if redirect_uri.contains('?') { '&' } else { '?' };
    let target = format!("{redirect_uri}{separator}{}", query.finish());
    Some(match base_url {
        Some(base) => format!("{base}{target}"),
        None => target,
    })
}
