//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site has a single route; its sections are shown and hidden in place
//! rather than routed. The page owns section orchestration and delegates
//! rendering details to `components`.

pub mod landing;
