//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The board is a single page; it arranges the list and signup regions and
//! delegates rendering details to `components`.

pub mod activities;
