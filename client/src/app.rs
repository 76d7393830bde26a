//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::landing::LandingPage;
use crate::state::site_state::initial_state;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the site state once and provides it to every component. A broken
/// layout renders the error instead of a half-wired page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let routes = match initial_state() {
        Ok(state) => {
            provide_context(RwSignal::new(state));
            view! {
                <Router>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=LandingPage/>
                    </Routes>
                </Router>
            }
            .into_any()
        }
        Err(e) => view! { <p class="site-error">{format!("Site layout error: {e}")}</p> }.into_any(),
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/brochure.css"/>
        <Title text="Website"/>
        {routes}
    }
}
