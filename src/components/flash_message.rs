//! Message area for signup results.

use leptos::prelude::*;

use crate::net::board_client::BoardClient;
use crate::state::message::MessageState;

#[component]
pub fn FlashMessage(client: BoardClient) -> impl IntoView {
    view! {
        <div id="message" class=move || client.message.with(MessageState::class) role="status">
            {move || client.message.with(|m| m.text.clone())}
        </div>
    }
}
