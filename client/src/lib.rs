//! # portal-client
//!
//! Leptos + WASM frontend for the OAuth login portal.
//!
//! The portal shows a login form when no session token is stored, otherwise it
//! loads the consent fragment from `/authorization`. Submitting the consent
//! form sends the browser back to the client application's `redirect_uri`
//! with the issued token appended.
//!
//! Page selection, the login view-model, redirect construction and the HTTP
//! flow are plain Rust so they can be tested without a browser; `pages` and
//! `app` are the Leptos layer on top.

pub mod app;
pub mod config;
pub mod flow;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = config::ClientConfig::from_document();
    leptos::mount::hydrate_body(move || view! { <App config/> });
}
