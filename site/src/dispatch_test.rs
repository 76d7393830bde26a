use time::macros::datetime;

use super::*;

fn resolve(kind: EventKind, target: &str, payload: Payload) -> Result<UiEvent, SiteError> {
    UiEvent::resolve(&SiteLayout::standard(), kind, target, payload)
}

// =============================================================
// clicks
// =============================================================

#[test]
fn nav_link_click_navigates_to_its_page() {
    assert_eq!(resolve(EventKind::Click, "nav-services", Payload::None), Ok(UiEvent::NavigateTo("services".into())));
}

#[test]
fn toggle_and_greet_buttons() {
    assert_eq!(resolve(EventKind::Click, ids::MOBILE_TOGGLE, Payload::None), Ok(UiEvent::ToggleMenu));
    assert_eq!(resolve(EventKind::Click, ids::GREET_BUTTON, Payload::None), Ok(UiEvent::Greet));
}

#[test]
fn document_click_carries_nav_flag() {
    assert_eq!(
        resolve(EventKind::Click, ids::DOCUMENT, Payload::Click { inside_nav: false }),
        Ok(UiEvent::DocumentClick { inside_nav: false })
    );
    assert_eq!(
        resolve(EventKind::Click, ids::DOCUMENT, Payload::None),
        Err(SiteError::InvalidPayload { kind: EventKind::Click, target: "document".into() })
    );
}

#[test]
fn click_on_unbound_element_is_rejected() {
    assert_eq!(
        resolve(EventKind::Click, "footer", Payload::None),
        Err(SiteError::UnknownTarget { kind: EventKind::Click, target: "footer".into() })
    );
}

// =============================================================
// name input
// =============================================================

#[test]
fn name_input_and_keypress() {
    assert_eq!(
        resolve(EventKind::Input, ids::NAME_INPUT, Payload::Text("Rina".into())),
        Ok(UiEvent::NameInput("Rina".into()))
    );
    assert_eq!(
        resolve(EventKind::KeyPress, ids::NAME_INPUT, Payload::Key("Enter".into())),
        Ok(UiEvent::NameKeyPress("Enter".into()))
    );
}

#[test]
fn keypress_elsewhere_is_rejected() {
    assert!(matches!(
        resolve(EventKind::KeyPress, "email", Payload::Key("Enter".into())),
        Err(SiteError::UnknownTarget { .. })
    ));
}

// =============================================================
// form fields
// =============================================================

#[test]
fn field_input_and_blur_use_input_ids() {
    assert_eq!(
        resolve(EventKind::Input, "messageText", Payload::Text("hi".into())),
        Ok(UiEvent::FieldInput { field: FieldKind::Message, value: "hi".into() })
    );
    assert_eq!(resolve(EventKind::Blur, "phone", Payload::None), Ok(UiEvent::FieldBlur(FieldKind::Phone)));
}

#[test]
fn field_input_without_text_is_invalid() {
    assert_eq!(
        resolve(EventKind::Input, "email", Payload::None),
        Err(SiteError::InvalidPayload { kind: EventKind::Input, target: "email".into() })
    );
}

#[test]
fn blur_on_error_slot_is_rejected() {
    assert!(matches!(resolve(EventKind::Blur, "messageError", Payload::None), Err(SiteError::UnknownTarget { .. })));
}

#[test]
fn submit_targets_contact_form() {
    let at = datetime!(2024-01-02 00:00 UTC);
    assert_eq!(resolve(EventKind::Submit, ids::CONTACT_FORM, Payload::Submit { at }), Ok(UiEvent::Submit { at }));
    assert!(matches!(
        resolve(EventKind::Submit, ids::CONTACT_FORM, Payload::None),
        Err(SiteError::InvalidPayload { .. })
    ));
}

#[test]
fn event_kind_display_is_dom_name() {
    assert_eq!(EventKind::KeyPress.to_string(), "keypress");
    assert_eq!(EventKind::Blur.to_string(), "blur");
}
