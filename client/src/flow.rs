//! Portal controller: bootstrap, login and consent flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call into [`Portal`] from `spawn_local` tasks and render the returned
//! [`PageState`]. The controller owns every token side effect so the
//! behaviour can be exercised with [`crate::util::storage::MemoryTokenStore`]
//! and a scripted [`PortalApi`].
//!
//! ERROR HANDLING
//! ==============
//! Only the login and authorization-fetch failures change the page. A failed
//! consent POST is reported back to the caller as [`ConsentError`] and leaves
//! the stored token untouched.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use serde_json::Value;

use crate::config::ClientConfig;
use crate::net::api::{ApiError, BrowserApi, PortalApi};
use crate::net::message::{api_error_message, consent_error_message};
use crate::net::oauth::{OAuthParams, build_redirect_url};
use crate::state::page::{FetchOutcome, PageState, select_page};
use crate::util::storage::{LocalStorageTokenStore, TokenStore};

/// Failure of a consent submission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConsentError {
    #[error("authorization request failed: {0}")]
    Api(#[from] ApiError),
    #[error("request has no redirect_uri")]
    MissingRedirectUri,
}

impl ConsentError {
    /// Text shown above the consent form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(err) => consent_error_message(err),
            Self::MissingRedirectUri => "The application did not provide a redirect address.".to_owned(),
        }
    }
}

/// Drives the portal against an API and a token store.
pub struct Portal<A, S> {
    api: A,
    store: S,
    config: ClientConfig,
}

impl Portal<BrowserApi, LocalStorageTokenStore> {
    /// Portal wired to `fetch` and `localStorage`.
    pub fn browser(config: ClientConfig) -> Self {
        Self::new(BrowserApi, LocalStorageTokenStore, config)
    }
}

impl<A: PortalApi, S: TokenStore> Portal<A, S> {
    pub fn new(api: A, store: S, config: ClientConfig) -> Self {
        Self { api, store, config }
    }

    /// Initial page: authorization when a token is stored, login otherwise.
    pub async fn bootstrap(&self, search: &str) -> PageState {
        if self.store.has_token() {
            return self.init_main_page(search).await;
        }
        log::debug!("no stored token, showing login");
        PageState::Login
    }

    /// Fetch the authorization fragment and decide the page from the outcome.
    pub async fn init_main_page(&self, search: &str) -> PageState {
        let token = self.store.token();
        let outcome = match self.api.fetch_authorization(search, token.as_deref()).await {
            Ok(fragment) => FetchOutcome::Loaded(fragment),
            Err(err) => {
                log::warn!("authorization fetch failed: {err}");
                FetchOutcome::Failed
            }
        };
        let page = select_page(token.is_some(), Some(&outcome));
        if page.clears_token() {
            log::info!("stored token rejected, clearing session");
            self.store.clear();
        }
        page
    }

    /// Submit the login form.
    ///
    /// On success the token is stored and the authorization page is loaded.
    ///
    /// # Errors
    ///
    /// Returns the user-facing message when the login request fails; the stored
    /// token is removed in that case.
    pub async fn submit_login(&self, form: &Value, search: &str) -> Result<PageState, String> {
        match self.api.login(form).await {
            Ok(resp) => {
                log::info!("login succeeded");
                self.store.store(&resp.token);
                Ok(self.init_main_page(search).await)
            }
            Err(err) => {
                log::warn!("login failed: {err}");
                self.store.clear();
                Err(api_error_message(&err))
            }
        }
    }

    /// Submit the consent form and build the client redirect URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConsentError`] when the POST fails or the request carried no
    /// `redirect_uri`.
    pub async fn submit_consent(&self, form: &Value, search: &str) -> Result<String, ConsentError> {
        let params = OAuthParams::from_search(search);
        if params.redirect_uri.is_none() {
            return Err(ConsentError::MissingRedirectUri);
        }
        let token = self.store.token();
        let resp = self.api.authorize(form, token.as_deref()).await?;
        log::info!("authorization granted, redirecting to client");
        build_redirect_url(&params, &resp, self.config.redirect_base_url.as_deref())
            .ok_or(ConsentError::MissingRedirectUri)
    }
}
