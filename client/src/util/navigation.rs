//! Browser location helpers.
//!
//! Outside the browser these read an empty query string and navigation is a
//! no-op, keeping SSR deterministic.

/// The current `location.search`, including the leading `?` when present.
pub fn current_search() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.location().search().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Navigate to `url` without leaving a history entry.
pub fn replace_location(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().replace(url) {
                log::error!("location.replace failed: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
