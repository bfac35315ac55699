//! Activity list region: loading notice, failure notice or one card per activity.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::activity_card::ActivityCard;
use crate::net::board_client::BoardClient;
use crate::state::activities::{LOAD_FAILED_NOTICE, LOADING_NOTICE, ListView};

#[component]
pub fn ActivityList(client: BoardClient) -> impl IntoView {
    let list = move || client.activities.with(|state| state.list.clone());

    view! {
        <div id="activities-list">
            {move || match list() {
                ListView::Loading => view! { <p>{LOADING_NOTICE}</p> }.into_any(),
                ListView::Failed => view! { <p>{LOAD_FAILED_NOTICE}</p> }.into_any(),
                ListView::Loaded(catalog) => catalog
                    .iter()
                    .map(|(name, activity)| {
                        view! {
                            <ActivityCard client=client name=name.to_owned() activity=activity.clone()/>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any(),
            }}
        </div>
    }
}
