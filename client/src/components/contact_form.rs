//! Contact form with blur/input validation and submit handling.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use site::layout::ids;
use site::{FieldKind, UiEvent};

use crate::state::site_state::{apply, use_site};
use crate::util::browser;
use crate::util::classes::field_group_class;

#[component]
pub fn ContactForm() -> impl IntoView {
    let state = use_site();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        apply(state, UiEvent::Submit { at: browser::now() });
    };

    view! {
        <form id={ids::CONTACT_FORM} class="contact-form" novalidate=true on:submit=on_submit>
            {FieldKind::ALL.into_iter().map(|field| view! { <FieldGroup field=field/> }).collect_view()}
            <button type="submit" class="btn">"Send Message"</button>
        </form>
    }
}

/// One labelled input with its inline error slot.
#[component]
fn FieldGroup(field: FieldKind) -> impl IntoView {
    let state = use_site();
    let value = move || state.with(|s| s.form().value(field).to_owned());
    let error = move || state.with(|s| s.form().error(field).to_owned());
    let has_error = move || state.with(|s| s.form().field(field).has_error());

    let on_input = move |ev: leptos::ev::Event| apply(state, UiEvent::FieldInput { field, value: event_target_value(&ev) });
    let on_blur = move |_: leptos::ev::FocusEvent| apply(state, UiEvent::FieldBlur(field));

    let control = if field == FieldKind::Message {
        view! {
            <textarea id={field.input_id()} name={field.input_id()} rows="5" prop:value=value on:input=on_input on:blur=on_blur></textarea>
        }
        .into_any()
    } else {
        let input_type = match field {
            FieldKind::Email => "email",
            FieldKind::Phone => "tel",
            _ => "text",
        };
        view! {
            <input id={field.input_id()} name={field.input_id()} type=input_type prop:value=value on:input=on_input on:blur=on_blur/>
        }
        .into_any()
    };

    view! {
        <div class=move || field_group_class(has_error())>
            <label for={field.input_id()}>{field.label()}</label>
            {control}
            <span id={field.error_id()} class="error-message">{error}</span>
        </div>
    }
}
