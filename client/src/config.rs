//! Client configuration supplied when the application is constructed.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders the redirect base URL into the HTML shell as a `<meta>` tag.
//! During hydration the same value is read back from the document so the server
//! and browser build `App` from identical configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Name of the `<meta>` tag carrying the redirect base URL.
pub const REDIRECT_BASE_META: &str = "oauth-redirect-base";

/// Configuration passed into [`crate::app::App`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix applied to the final OAuth redirect URL, if any.
    pub redirect_base_url: Option<String>,
}

impl ClientConfig {
    /// Build a config, treating a blank base URL as unset.
    pub fn new(redirect_base_url: Option<String>) -> Self {
        let redirect_base_url = redirect_base_url.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty());
        Self { redirect_base_url }
    }

    /// Value rendered into the shell `<meta>` tag.
    pub fn meta_content(&self) -> String {
        self.redirect_base_url.clone().unwrap_or_default()
    }

    /// Read the config back from the hydrated document.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let selector = format!("meta[name=\"{REDIRECT_BASE_META}\"]");
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(&selector).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        Self::new(content)
    }
}
