//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{ClientConfig, REDIRECT_BASE_META};
use crate::pages::{authorization::AuthorizationPage, login::LoginPage};
use crate::state::page::{PageState, SESSION_REJECTED_NOTICE};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The redirect base URL is written to a `<meta>` tag so hydration can rebuild
/// the same [`ClientConfig`].
pub fn shell(options: LeptosOptions, config: ClientConfig) -> impl IntoView {
    let redirect_base = config.meta_content();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=REDIRECT_BASE_META content=redirect_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the client config and the current [`PageState`] to the page tree.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    let page = RwSignal::new(PageState::default());
    provide_context(config);
    provide_context(page);

    view! {
        <Stylesheet id="leptos" href="/pkg/oauth-portal.css"/>
        <Title text="Sign in"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PortalPage/>
            </Routes>
        </Router>
    }
}

/// Renders whichever page the current [`PageState`] selects.
///
/// Bootstrap runs once after hydration; until then the page is `Loading` on
/// both server and client.
#[component]
pub fn PortalPage() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    #[cfg(feature = "hydrate")]
    {
        let config = expect_context::<ClientConfig>();
        Effect::new(move || {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let search = crate::util::navigation::current_search();
                let next = crate::flow::Portal::browser(config).bootstrap(&search).await;
                page.set(next);
            });
        });
    }

    move || match page.get() {
        PageState::Loading => view! { <div class="portal-loading">"Loading..."</div> }.into_any(),
        PageState::Login => view! { <LoginPage/> }.into_any(),
        PageState::Authorization(fragment) => view! { <AuthorizationPage fragment/> }.into_any(),
        PageState::SessionRejected => view! {
            <div class="login-page">
                <div class="login-card session-rejected">
                    <p class="login-message">{SESSION_REJECTED_NOTICE}</p>
                    <button class="login-button" type="button" on:click=move |_| page.set(PageState::Login)>
                        "Sign in"
                    </button>
                </div>
            </div>
        }
        .into_any(),
    }
}
