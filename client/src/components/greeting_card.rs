//! Greeting widget: name entry plus the personalized welcome line.

use leptos::prelude::*;
use site::layout::ids;
use site::UiEvent;

use crate::state::site_state::{apply, use_site};

#[component]
pub fn GreetingCard() -> impl IntoView {
    let state = use_site();
    let message = move || state.with(|s| s.greeting().message().to_owned());
    let input = move || state.with(|s| s.greeting().input().to_owned());

    view! {
        <div class="welcome-section">
            <h1 id={ids::WELCOME_MESSAGE} class="welcome-message">{message}</h1>
            <div class="name-input-group">
                <input
                    id={ids::NAME_INPUT}
                    type="text"
                    placeholder="Enter your name"
                    prop:value=input
                    on:input=move |ev| apply(state, UiEvent::NameInput(event_target_value(&ev)))
                    on:keypress=move |ev: leptos::ev::KeyboardEvent| apply(state, UiEvent::NameKeyPress(ev.key()))
                />
                <button id={ids::GREET_BUTTON} class="btn" on:click=move |_| apply(state, UiEvent::Greet)>
                    "Update Welcome"
                </button>
            </div>
        </div>
    }
}
