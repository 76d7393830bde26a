//! CSS class helpers for state-driven styling.

#[cfg(test)]
#[path = "classes_test.rs"]
mod classes_test;

pub fn page_class(active: bool) -> &'static str {
    if active { "page active" } else { "page" }
}

pub fn nav_link_class(active: bool) -> &'static str {
    if active { "nav-link active" } else { "nav-link" }
}

pub fn nav_menu_class(open: bool) -> &'static str {
    if open { "nav-menu active" } else { "nav-menu" }
}

/// Field wrapper; `error` switches on the red outline and message.
pub fn field_group_class(has_error: bool) -> &'static str {
    if has_error { "form-group error" } else { "form-group" }
}

/// `display` value for the submission summary.
pub fn output_display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}
