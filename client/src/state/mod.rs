//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The whole site is one `site::SiteState` held in a single `RwSignal`;
//! components read slices of it and write only through [`site_state::apply`] and
//! [`site_state::dispatch`].

pub mod site_state;
