//! Page selection for the portal.
//!
//! DESIGN
//! ======
//! The portal has two logical states, logged out and logged in. Which view is
//! shown depends only on whether a token is stored and on the outcome of the
//! last `/authorization` fetch, so the decision lives in one pure function.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Shown when a token was rejected, either on page load or right after login.
pub const SESSION_REJECTED_NOTICE: &str = "The authorization page could not be loaded. Sign in to continue.";

/// Outcome of the most recent `/authorization` fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The endpoint returned the consent fragment.
    Loaded(String),
    /// The request failed for any reason.
    Failed,
}

/// The view currently rendered by the portal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PageState {
    /// Bootstrap has not run yet (SSR and first hydrated render).
    #[default]
    Loading,
    /// Login form.
    Login,
    /// Authorization fragment returned by the server.
    Authorization(String),
    /// A stored token was rejected and has been cleared.
    SessionRejected,
}

impl PageState {
    /// Whether the stored token must be removed on entering this state.
    pub fn clears_token(&self) -> bool {
        matches!(self, Self::SessionRejected)
    }

    /// Message rendered for this state, if it carries one.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::SessionRejected => Some(SESSION_REJECTED_NOTICE),
            _ => None,
        }
    }
}

/// Decide which page to show.
///
/// - `outcome == None` is the page shown before any fetch has finished: a token
///   renders `Loading` while the authorization fragment is requested, no token
///   renders `Login`.
/// - A loaded fragment always wins.
/// - A failed fetch with a token rejects the session; without one it falls back
///   to the login page.
pub fn select_page(has_token: bool, outcome: Option<&FetchOutcome>) -> PageState {
    match (has_token, outcome) {
        (_, Some(FetchOutcome::Loaded(fragment))) => PageState::Authorization(fragment.clone()),
        (true, Some(FetchOutcome::Failed)) => PageState::SessionRejected,
        (false, Some(FetchOutcome::Failed)) | (false, None) => PageState::Login,
        (true, None) => PageState::Loading,
    }
}
