//! Authorization page hosting the server-rendered consent fragment.
//!
//! The fragment is opaque markup from `/authorization`. Submit events from any
//! `form.oauth2Form` inside it are intercepted on the wrapper, posted to
//! `/oauth/authorize`, and answered with a replacing navigation to the client.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::config::ClientConfig;

/// Class marking consent forms inside the fragment.
pub const CONSENT_FORM_CLASS: &str = "oauth2Form";

#[component]
pub fn AuthorizationPage(fragment: String) -> impl IntoView {
    let consent_error = RwSignal::new(None::<String>);
    #[cfg(feature = "hydrate")]
    let submitting = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let config = expect_context::<ClientConfig>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some(form) = crate::util::form::event_form(&ev) else {
                return;
            };
            if !crate::util::form::has_class(&form.class_name(), CONSENT_FORM_CLASS) {
                return;
            }
            ev.prevent_default();
            if submitting.get_untracked() {
                return;
            }
            submitting.set(true);
            consent_error.set(None);

            let payload = crate::util::form::serialize_form(&form);
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let portal = crate::flow::Portal::browser(config);
                let search = crate::util::navigation::current_search();
                match portal.submit_consent(&payload, &search).await {
                    Ok(url) => crate::util::navigation::replace_location(&url),
                    Err(err) => {
                        log::error!("consent submission failed: {err}");
                        consent_error.set(Some(err.user_message()));
                        submitting.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div class="authorization-page">
            <Show when=move || consent_error.with(Option::is_some)>
                <div class="error-box consent-error" role="alert">
                    {move || consent_error.get().unwrap_or_default()}
                </div>
            </Show>
            <div class="authorization" on:submit=on_submit inner_html=fragment></div>
        </div>
    }
}
