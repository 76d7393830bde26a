//! Structural errors raised by the site core.
//!
//! Field validation failures are not errors: they surface as inline error
//! text on [`crate::form::FormField`]. The variants here cover a malformed
//! layout and events that reference identifiers the layout does not know.

use crate::dispatch::EventKind;

/// Error returned when the layout or an incoming event is structurally invalid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SiteError {
    /// A navigation request named a page that is not part of the layout.
    #[error("page not found: {0}")]
    PageNotFound(String),
    /// The layout declares no pages at all.
    #[error("layout declares no pages")]
    EmptyLayout,
    /// Two elements in the layout share the same identifier.
    #[error("duplicate element id in layout: {0}")]
    DuplicateId(String),
    /// A nav link points at a page the layout does not declare.
    #[error("nav link {link} targets unknown page {page}")]
    DanglingNavLink { link: String, page: String },
    /// The initially active page is not one of the declared pages.
    #[error("initial page {0} is not declared in the layout")]
    InitialPageMissing(String),
    /// No handler is bound to this `(kind, target)` pair.
    #[error("no {kind} handler bound to element {target}")]
    UnknownTarget { kind: EventKind, target: String },
    /// The payload shape does not match what the event kind expects.
    #[error("{kind} event on {target} carried an unexpected payload")]
    InvalidPayload { kind: EventKind, target: String },
    /// The submission timestamp could not be rendered.
    #[error("failed to format submission timestamp: {0}")]
    Timestamp(String),
}
