//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the activity list, the signup form and the message
//! area. Each receives the `BoardClient` handle as a prop instead of looking
//! up shared state on its own.

pub mod activity_card;
pub mod activity_list;
pub mod activity_select;
pub mod flash_message;
pub mod signup_section;
