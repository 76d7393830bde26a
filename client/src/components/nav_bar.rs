//! Top navigation bar with the mobile menu toggle.

use leptos::prelude::*;
use site::layout::ids;
use site::{EventKind, Payload, UiEvent};

use crate::state::site_state::{apply, dispatch, use_site};
use crate::util::classes::{nav_link_class, nav_menu_class};

#[component]
pub fn NavBar() -> impl IntoView {
    let state = use_site();
    let links = state.with_untracked(|s| s.navigation().links().to_vec());
    let menu_open = move || state.with(|s| s.navigation().menu_open());

    view! {
        <nav class="navbar">
            <div class={ids::NAV_CONTAINER_CLASS}>
                <a href="#" class="nav-logo">"Website"</a>
                <ul id={ids::NAV_MENU} class=move || nav_menu_class(menu_open())>
                    {links
                        .into_iter()
                        .map(move |link| {
                            let link_id = link.id.clone();
                            let active_id = link.id.clone();
                            view! {
                                <li class="nav-item">
                                    <a
                                        href="#"
                                        id={link.id}
                                        class=move || {
                                            nav_link_class(state.with(|s| s.navigation().is_link_active(&active_id)))
                                        }
                                        data-page={link.page}
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            dispatch(state, EventKind::Click, &link_id, Payload::None);
                                        }
                                    >
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    id={ids::MOBILE_TOGGLE}
                    class="mobile-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| apply(state, UiEvent::ToggleMenu)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
