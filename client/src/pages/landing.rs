//! The single-route landing page: nav bar plus the four content sections.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::form_output::FormOutput;
use crate::components::greeting_card::GreetingCard;
use crate::components::nav_bar::NavBar;
use crate::state::site_state::use_site;
use crate::util::classes::page_class;

#[component]
pub fn LandingPage() -> impl IntoView {
    let state = use_site();

    // Any click outside the navigation container closes the mobile menu.
    #[cfg(feature = "hydrate")]
    {
        use site::UiEvent;
        use site::layout::ids;

        use crate::state::site_state::apply;
        use crate::util::browser::click_hits;

        let selector = format!(".{}", ids::NAV_CONTAINER_CLASS);
        let handle = window_event_listener(leptos::ev::click, move |ev| {
            let inside_nav = click_hits(&ev, &selector);
            if state.with_untracked(|s| s.navigation().menu_open()) {
                apply(state, UiEvent::DocumentClick { inside_nav });
            }
        });
        on_cleanup(move || handle.remove());
    }

    let section = move |page_id: &'static str| move || page_class(state.with(|s| s.navigation().is_page_active(page_id)));

    view! {
        <NavBar/>
        <main class="main-content">
            <section id="home" class={section("home")}>
                <GreetingCard/>
                <p class="lead">"We build simple, fast websites for small businesses."</p>
            </section>
            <section id="about" class={section("about")}>
                <h2>"About Us"</h2>
                <p>"A small team focused on clear design and dependable hosting."</p>
            </section>
            <section id="services" class={section("services")}>
                <h2>"Services"</h2>
                <ul class="service-list">
                    <li>"Web design"</li>
                    <li>"Content writing"</li>
                    <li>"Maintenance and support"</li>
                </ul>
            </section>
            <section id="contact" class={section("contact")}>
                <h2>"Contact Us"</h2>
                <ContactForm/>
                <FormOutput/>
            </section>
        </main>
    }
}
