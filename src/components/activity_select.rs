//! Activity selection control for the signup form.
//!
//! Options are rebuilt from the last successful refresh; a failed refresh
//! leaves them untouched. The placeholder option is always first.

use leptos::prelude::*;

use crate::net::board_client::BoardClient;

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

#[component]
pub fn ActivitySelect(client: BoardClient) -> impl IntoView {
    let options = move || {
        client
            .activities
            .with(|state| state.options.clone())
            .into_iter()
            .map(|option| view! { <option value=option.value>{option.label}</option> })
            .collect::<Vec<_>>()
    };

    view! {
        <select
            id="activity"
            required
            prop:value=move || client.form.with(|f| f.activity.clone())
            on:change=move |ev| {
                let value = event_target_value(&ev);
                client.form.update(|f| f.activity = value);
            }
        >
            <option value="">{SELECT_PLACEHOLDER}</option>
            {options}
        </select>
    }
}
