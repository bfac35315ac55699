//! Board client binding the activities API to page state.
//!
//! The `BoardClient` is created once by the root component and passed by
//! value into every component that reads or changes board state. It owns
//! the signals for the three page regions (activity list + select, message
//! area, signup form) and runs each network operation to completion on the
//! browser event loop.
//!
//! All request spawning and timers are gated behind `#[cfg(feature = "csr")]`.
//!
//! ERROR HANDLING
//! ==============
//! Each operation contains its own failure: refresh and removal failures are
//! logged to the console, signup failures become an on-page message. Nothing
//! is retried.

#[cfg(test)]
#[path = "board_client_test.rs"]
mod board_client_test;

use leptos::prelude::*;

#[cfg(feature = "csr")]
use super::api;
use super::api::ApiError;
use super::types::{Catalog, SignupAccepted};
use crate::config::BoardConfig;
use crate::state::activities::{ActivitiesState, RefreshTicket};
use crate::state::message::{MessageKind, MessageState};
use crate::state::signup::{RemovalOutcome, SignupForm, removal_outcome, signup_outcome};

/// Handle to the board's reactive state and its network operations.
#[derive(Clone, Copy)]
pub struct BoardClient {
    pub activities: RwSignal<ActivitiesState>,
    pub message: RwSignal<MessageState>,
    pub form: RwSignal<SignupForm>,
    config: StoredValue<BoardConfig>,
    /// Pending hide for the message area; replacing it cancels the old one.
    #[cfg(feature = "csr")]
    hide_task: StoredValue<Option<gloo_timers::callback::Timeout>, LocalStorage>,
}

impl BoardClient {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            activities: RwSignal::new(ActivitiesState::default()),
            message: RwSignal::new(MessageState::default()),
            form: RwSignal::new(SignupForm::default()),
            config: StoredValue::new(config),
            #[cfg(feature = "csr")]
            hide_task: StoredValue::new_local(None),
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config.get_value()
    }

    /// Re-fetch the catalog and re-render the list and select options.
    pub fn refresh(self) {
        let Some(ticket) = self.activities.try_update(ActivitiesState::begin_refresh) else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            let config = self.config();
            leptos::task::spawn_local(async move {
                let result = api::fetch_activities(&config).await;
                self.finish_refresh(ticket, result);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ticket;
        }
    }

    fn finish_refresh(self, ticket: RefreshTicket, result: Result<Catalog, ApiError>) {
        if let Err(err) = &result {
            log::error!("Error fetching activities: {err}");
        }
        self.activities.update(|state| {
            state.apply_refresh(ticket, result);
        });
    }

    /// Submit the current form values as a signup.
    pub fn submit_signup(self) {
        let form = self.form.get_untracked();
        #[cfg(feature = "csr")]
        {
            let config = self.config();
            leptos::task::spawn_local(async move {
                let result = api::sign_up(&config, &form.activity, &form.email).await;
                self.finish_signup(&result);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = form;
        }
    }

    fn finish_signup(self, result: &Result<SignupAccepted, ApiError>) {
        let outcome = signup_outcome(result);
        if let Some(line) = &outcome.log {
            log::error!("{line}");
        }
        self.flash(outcome.kind, outcome.text);
        if outcome.reset_form {
            self.form.update(SignupForm::reset);
        }
        if outcome.refresh {
            self.refresh();
        }
    }

    /// Remove `email` from `activity`. Failures only reach the console.
    pub fn remove_participant(self, activity: String, email: String) {
        if email.is_empty() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let config = self.config();
            leptos::task::spawn_local(async move {
                let result = api::unregister(&config, &activity, &email).await;
                self.finish_removal(&result);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = activity;
        }
    }

    fn finish_removal(self, result: &Result<(), ApiError>) {
        match removal_outcome(result) {
            RemovalOutcome::Refresh => self.refresh(),
            RemovalOutcome::Log(line) => log::error!("{line}"),
        }
    }

    /// Show a message and schedule its hide after the configured delay.
    fn flash(self, kind: MessageKind, text: String) {
        let Some(ticket) = self.message.try_update(|m| m.show(kind, text)) else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            let message = self.message;
            let ttl = self.config.with_value(|c| c.message_ttl);
            let millis = u32::try_from(ttl.as_millis()).unwrap_or(u32::MAX);
            let timeout = gloo_timers::callback::Timeout::new(millis, move || {
                message.update(|m| {
                    m.hide(ticket);
                });
            });
            self.hide_task.set_value(Some(timeout));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ticket;
        }
    }
}
