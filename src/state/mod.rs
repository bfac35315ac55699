//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is split by page region (`activities` list + select, `message`
//! area, `signup` form) so components depend on small focused models.
//! Transitions are plain methods so they test without a browser.

pub mod activities;
pub mod message;
pub mod signup;
