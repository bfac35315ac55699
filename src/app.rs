//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::BoardConfig;
use crate::net::board_client::BoardClient;
use crate::pages::activities::ActivitiesPage;

/// Root application component.
///
/// Builds the board client once, loads the catalog and renders the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let client = BoardClient::new(BoardConfig::default());
    client.refresh();

    view! {
        <Title text="Mergington High School Activities"/>
        <ActivitiesPage client=client/>
    }
}
