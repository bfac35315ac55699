//! Catalog view state for the activity list and the selection control.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list area and the select options are two separate regions: a failed
//! refresh replaces the list with a notice but leaves the options alone.
//! Every refresh takes a generation ticket so overlapping requests cannot
//! overwrite a newer catalog with an older response.

#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use crate::net::api::ApiError;
use crate::net::types::Catalog;

pub const LOADING_NOTICE: &str = "Loading activities...";
pub const LOAD_FAILED_NOTICE: &str = "Failed to load activities. Please try again later.";

/// What the list area currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListView {
    /// No refresh has completed yet.
    #[default]
    Loading,
    Loaded(Catalog),
    Failed,
}

/// One entry of the activity selection control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Ticket for one in-flight refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

/// Result of offering a refresh response to the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshApplied {
    Loaded,
    Failed,
    /// A newer refresh was started after this one; nothing changed.
    Stale,
}

#[derive(Clone, Debug, Default)]
pub struct ActivitiesState {
    pub list: ListView,
    /// Per-activity options, in catalog order. Only replaced on success.
    pub options: Vec<SelectOption>,
    generation: u64,
}

impl ActivitiesState {
    /// Start a refresh; only the returned ticket may update the view.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        RefreshTicket(self.generation)
    }

    pub fn is_current(&self, ticket: RefreshTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply a refresh response if it belongs to the latest request.
    pub fn apply_refresh(&mut self, ticket: RefreshTicket, result: Result<Catalog, ApiError>) -> RefreshApplied {
        if !self.is_current(ticket) {
            log::debug!(
                "discarding stale activities response: ticket={} latest={}",
                ticket.0,
                self.generation
            );
            return RefreshApplied::Stale;
        }
        match result {
            Ok(catalog) => {
                self.options = activity_options(&catalog);
                self.list = ListView::Loaded(catalog);
                RefreshApplied::Loaded
            }
            Err(_) => {
                self.list = ListView::Failed;
                RefreshApplied::Failed
            }
        }
    }
}

/// One option per activity, value and label both the activity name.
pub fn activity_options(catalog: &Catalog) -> Vec<SelectOption> {
    catalog
        .names()
        .map(|name| SelectOption { value: name.to_owned(), label: name.to_owned() })
        .collect()
}
