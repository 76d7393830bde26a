//! Static page structure the UI is rendered from.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser page is pre-rendered with a fixed set of sections, nav links
//! and form elements. This module names those elements once so the core and
//! the rendering layer agree on identifiers, and validates the structure up
//! front so a broken page fails at startup instead of on first click.

use std::collections::HashSet;

use crate::error::SiteError;
use crate::validation::FieldKind;

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Fixed element identifiers shared by the core and the rendering layer.
pub mod ids {
    /// Button that opens and closes the mobile menu.
    pub const MOBILE_TOGGLE: &str = "mobileToggle";
    /// Collapsible menu holding the nav links.
    pub const NAV_MENU: &str = "navMenu";
    /// Class of the container that counts as "inside the navigation".
    pub const NAV_CONTAINER_CLASS: &str = "nav-container";
    /// Name entry field of the greeting widget.
    pub const NAME_INPUT: &str = "nameInput";
    /// Button that submits the greeting name.
    pub const GREET_BUTTON: &str = "greetButton";
    /// Element showing the greeting text.
    pub const WELCOME_MESSAGE: &str = "welcomeMessage";
    /// The contact form.
    pub const CONTACT_FORM: &str = "contactForm";
    /// Read-only summary block shown after a successful submit.
    pub const FORM_OUTPUT: &str = "formOutput";
    /// Timestamp slot inside the summary block.
    pub const CURRENT_TIME: &str = "currentTime";
    /// Pseudo-target for clicks anywhere on the document.
    pub const DOCUMENT: &str = "document";

    /// Every fixed identifier, in declaration order.
    pub const ALL: [&str; 10] = [
        MOBILE_TOGGLE,
        NAV_MENU,
        NAV_CONTAINER_CLASS,
        NAME_INPUT,
        GREET_BUTTON,
        WELCOME_MESSAGE,
        CONTACT_FORM,
        FORM_OUTPUT,
        CURRENT_TIME,
        DOCUMENT,
    ];
}

/// One content section shown or hidden as a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSpec {
    pub id: String,
    pub title: String,
}

/// A clickable control bound to exactly one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLinkSpec {
    pub id: String,
    pub page: String,
    pub label: String,
}

/// Ordered pages, nav links and the page shown on load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteLayout {
    pub pages: Vec<PageSpec>,
    pub nav_links: Vec<NavLinkSpec>,
    pub initial_page: String,
}

impl SiteLayout {
    /// The four-section brochure site: home, about, services, contact.
    #[must_use]
    pub fn standard() -> Self {
        let sections = [("home", "Home"), ("about", "About"), ("services", "Services"), ("contact", "Contact")];
        Self {
            pages: sections
                .iter()
                .map(|(id, title)| PageSpec { id: (*id).to_owned(), title: (*title).to_owned() })
                .collect(),
            nav_links: sections
                .iter()
                .map(|(id, title)| NavLinkSpec {
                    id: nav_link_id(id),
                    page: (*id).to_owned(),
                    label: (*title).to_owned(),
                })
                .collect(),
            initial_page: "home".to_owned(),
        }
    }

    /// Check the structure before any state is built from it.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::EmptyLayout`] when no pages are declared,
    /// [`SiteError::DuplicateId`] when any two elements share an id,
    /// [`SiteError::DanglingNavLink`] when a link targets an undeclared page,
    /// and [`SiteError::InitialPageMissing`] when the initial page is unknown.
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.pages.is_empty() {
            return Err(SiteError::EmptyLayout);
        }

        let mut seen: HashSet<&str> = ids::ALL.iter().copied().collect();
        for kind in FieldKind::ALL {
            seen.extend([kind.input_id(), kind.error_id(), kind.output_id()]);
        }
        let element_ids = self
            .pages
            .iter()
            .map(|p| p.id.as_str())
            .chain(self.nav_links.iter().map(|l| l.id.as_str()));
        for id in element_ids {
            if !seen.insert(id) {
                return Err(SiteError::DuplicateId(id.to_owned()));
            }
        }

        for link in &self.nav_links {
            if !self.has_page(&link.page) {
                return Err(SiteError::DanglingNavLink { link: link.id.clone(), page: link.page.clone() });
            }
        }

        if !self.has_page(&self.initial_page) {
            return Err(SiteError::InitialPageMissing(self.initial_page.clone()));
        }
        Ok(())
    }

    #[must_use]
    pub fn has_page(&self, page_id: &str) -> bool {
        self.pages.iter().any(|p| p.id == page_id)
    }

    /// Look up a nav link by its element id.
    #[must_use]
    pub fn nav_link(&self, link_id: &str) -> Option<&NavLinkSpec> {
        self.nav_links.iter().find(|l| l.id == link_id)
    }
}

/// Element id used for the nav link that activates `page_id`.
#[must_use]
pub fn nav_link_id(page_id: &str) -> String {
    format!("nav-{page_id}")
}
