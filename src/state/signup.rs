//! Signup form fields and the outcome rules for signup and removal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signup results surface on the page; removal results only reach the
//! console log. Every confirmed change is followed by a catalog refresh
//! rather than a local edit.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use super::message::MessageKind;
use crate::net::api::ApiError;
use crate::net::types::SignupAccepted;

pub const SIGNUP_FALLBACK_ERROR: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";

/// Current values of the signup form controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    /// Selected activity name; empty while the placeholder is selected.
    pub activity: String,
}

impl SignupForm {
    /// Clear both fields, returning the select to its placeholder.
    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.clear();
    }
}

/// What the page does after a signup request settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupOutcome {
    pub kind: MessageKind,
    pub text: String,
    pub reset_form: bool,
    pub refresh: bool,
    /// Diagnostic line for failures that never produced a server answer.
    pub log: Option<String>,
}

pub fn signup_outcome(result: &Result<SignupAccepted, ApiError>) -> SignupOutcome {
    match result {
        Ok(accepted) => SignupOutcome {
            kind: MessageKind::Success,
            text: accepted.message.clone(),
            reset_form: true,
            refresh: true,
            log: None,
        },
        Err(ApiError::Rejected { detail, .. }) => SignupOutcome {
            kind: MessageKind::Error,
            text: detail
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(SIGNUP_FALLBACK_ERROR)
                .to_owned(),
            reset_form: false,
            refresh: false,
            log: None,
        },
        Err(err) => SignupOutcome {
            kind: MessageKind::Error,
            text: SIGNUP_FAILED.to_owned(),
            reset_form: false,
            refresh: false,
            log: Some(format!("Error signing up: {err}")),
        },
    }
}

/// What the page does after a removal request settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemovalOutcome {
    Refresh,
    /// Console-only; nothing is shown on the page.
    Log(String),
}

pub fn removal_outcome(result: &Result<(), ApiError>) -> RemovalOutcome {
    match result {
        Ok(()) => RemovalOutcome::Refresh,
        Err(err @ ApiError::Rejected { .. }) => {
            let reason = err.detail().map_or_else(|| err.to_string(), str::to_owned);
            RemovalOutcome::Log(format!("Failed to unregister: {reason}"))
        }
        Err(err) => RemovalOutcome::Log(format!("Error unregistering: {err}")),
    }
}
