//! Page switching and mobile menu state.
//!
//! DESIGN
//! ======
//! Pages and nav links keep their own `active` flags so the rendering layer
//! can bind classes directly, but the flags are only ever written through
//! [`Navigation::select_page`], which keeps exactly one page (and the links
//! targeting it) active.

use crate::error::SiteError;
use crate::layout::SiteLayout;

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// A content section and whether it is currently shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub active: bool,
}

/// A nav link and whether it is currently highlighted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub id: String,
    pub page: String,
    pub label: String,
    pub active: bool,
}

/// Where a document click landed relative to the navigation container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    InsideNav,
    Outside,
}

impl ClickTarget {
    #[must_use]
    pub fn from_inside_nav(inside_nav: bool) -> Self {
        if inside_nav { Self::InsideNav } else { Self::Outside }
    }
}

/// Active page, highlighted link and mobile menu visibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pages: Vec<Page>,
    links: Vec<NavLink>,
    menu_open: bool,
}

impl Navigation {
    /// Build navigation state with the layout's initial page active.
    ///
    /// # Errors
    ///
    /// Propagates any structural error from [`SiteLayout::validate`].
    pub fn from_layout(layout: &SiteLayout) -> Result<Self, SiteError> {
        layout.validate()?;
        let mut nav = Self {
            pages: layout
                .pages
                .iter()
                .map(|p| Page { id: p.id.clone(), title: p.title.clone(), active: false })
                .collect(),
            links: layout
                .nav_links
                .iter()
                .map(|l| NavLink { id: l.id.clone(), page: l.page.clone(), label: l.label.clone(), active: false })
                .collect(),
            menu_open: false,
        };
        nav.select_page(&layout.initial_page)?;
        Ok(nav)
    }

    /// Show `page_id`, highlight its links, hide everything else and close
    /// the mobile menu.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::PageNotFound`] for an unknown page; state is left
    /// untouched in that case.
    pub fn select_page(&mut self, page_id: &str) -> Result<(), SiteError> {
        if !self.pages.iter().any(|p| p.id == page_id) {
            log::warn!("navigation rejected unknown page {page_id}");
            return Err(SiteError::PageNotFound(page_id.to_owned()));
        }
        for page in &mut self.pages {
            page.active = page.id == page_id;
        }
        for link in &mut self.links {
            link.active = link.page == page_id;
        }
        self.menu_open = false;
        log::debug!("page selected: {page_id}");
        Ok(())
    }

    /// Flip mobile menu visibility and return the new state.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Close the mobile menu when a click lands outside the navigation.
    pub fn close_mobile_menu_if_outside(&mut self, target: ClickTarget) {
        if target == ClickTarget::Outside {
            self.menu_open = false;
        }
    }

    /// Id of the page currently shown.
    #[must_use]
    pub fn active_page(&self) -> Option<&str> {
        self.pages.iter().find(|p| p.active).map(|p| p.id.as_str())
    }

    #[must_use]
    pub fn is_page_active(&self, page_id: &str) -> bool {
        self.pages.iter().any(|p| p.active && p.id == page_id)
    }

    #[must_use]
    pub fn is_link_active(&self, link_id: &str) -> bool {
        self.links.iter().any(|l| l.active && l.id == link_id)
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    #[must_use]
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }
}
