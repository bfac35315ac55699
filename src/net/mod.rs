//! Networking modules for the activities REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `api` issues the HTTP calls and
//! classifies responses, and `board_client` binds those calls to the
//! reactive state the page renders.

pub mod api;
pub mod board_client;
pub mod types;
