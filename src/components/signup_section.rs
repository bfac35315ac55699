//! Signup form with email input, activity select and result message.

use leptos::prelude::*;

use crate::components::activity_select::ActivitySelect;
use crate::components::flash_message::FlashMessage;
use crate::net::board_client::BoardClient;

#[component]
pub fn SignupSection(client: BoardClient) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        client.submit_signup();
    };

    view! {
        <section id="signup-container">
            <h3>"Sign Up for an Activity"</h3>
            <form id="signup-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="email">"Student Email:"</label>
                    <input
                        type="email"
                        id="email"
                        required
                        placeholder="your-email@mergington.edu"
                        prop:value=move || client.form.with(|f| f.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            client.form.update(|f| f.email = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="activity">"Select Activity:"</label>
                    <ActivitySelect client=client/>
                </div>
                <button type="submit">"Sign Up"</button>
            </form>
            <FlashMessage client=client/>
        </section>
    }
}
