//! Login page: username + password form posting to `/login`.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::config::ClientConfig;
use crate::state::login::LoginModel;
#[cfg(feature = "hydrate")]
use crate::state::page::PageState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let model = RwSignal::new(LoginModel::default());
    #[cfg(feature = "hydrate")]
    let page = expect_context::<RwSignal<PageState>>();
    #[cfg(feature = "hydrate")]
    let config = expect_context::<ClientConfig>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !model.try_update(LoginModel::begin_submit).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(form) = crate::util::form::event_form(&ev) else {
                model.update(|m| m.finish_submit(None));
                return;
            };
            let payload = crate::util::form::serialize_form(&form);
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let portal = crate::flow::Portal::browser(config);
                let search = crate::util::navigation::current_search();
                match portal.submit_login(&payload, &search).await {
                    Ok(next) => {
                        model.update(|m| m.finish_submit(None));
                        page.set(next);
                    }
                    Err(message) => model.update(|m| m.finish_submit(Some(message))),
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <form class="form-login login-card" on:submit=on_submit>
                <h1>"Sign in"</h1>
                <div id="error-block" class="error-box" class:hide=move || !model.with(LoginModel::error_visible)>
                    <p class="error-info" role="alert">{move || model.with(|m| m.error_info.clone())}</p>
                </div>
                <input
                    class="login-input"
                    type="text"
                    name="username"
                    autocomplete="username"
                    placeholder="Username"
                    required
                />
                <input
                    class="login-input"
                    type="password"
                    name="password"
                    autocomplete="current-password"
                    placeholder="Password"
                    required
                />
                <button class="login-button" type="submit" disabled=move || model.with(|m| m.busy)>
                    "Sign in"
                </button>
            </form>
        </div>
    }
}
