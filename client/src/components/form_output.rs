//! Read-only summary of the last accepted submission.

use leptos::prelude::*;
use site::layout::ids;
use site::{FieldKind, FormSubmission};

use crate::state::site_state::{SiteSignal, use_site};
use crate::util::classes::output_display;

#[component]
pub fn FormOutput() -> impl IntoView {
    let state = use_site();
    let visible = move || state.with(|s| s.output().is_some());

    let rows = [
        (FieldKind::Name, FormSubmission::name as fn(&FormSubmission) -> &str),
        (FieldKind::Email, FormSubmission::email),
        (FieldKind::Phone, FormSubmission::phone),
        (FieldKind::Message, FormSubmission::message),
    ];

    view! {
        <div id={ids::FORM_OUTPUT} class="form-output" style:display=move || output_display(visible())>
            <h3>"Submitted Information"</h3>
            <p>
                <strong>"Time: "</strong>
                <span id={ids::CURRENT_TIME}>{slot(state, FormSubmission::timestamp)}</span>
            </p>
            {rows
                .into_iter()
                .map(|(field, read)| {
                    view! {
                        <p>
                            <strong>{field.label()} ": "</strong>
                            <span id={field.output_id()}>{slot(state, read)}</span>
                        </p>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Reactive text for one summary slot; empty until a submit succeeds.
fn slot(state: SiteSignal, read: fn(&FormSubmission) -> &str) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || state.with(|s| s.output().map(|o| read(o).to_owned()).unwrap_or_default())
}
