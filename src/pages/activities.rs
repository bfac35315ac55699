//! Activities page: the activity list beside the signup form.

use leptos::prelude::*;

use crate::components::activity_list::ActivityList;
use crate::components::signup_section::SignupSection;
use crate::net::board_client::BoardClient;

#[component]
pub fn ActivitiesPage(client: BoardClient) -> impl IntoView {
    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>
        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList client=client/>
            </section>
            <SignupSection client=client/>
        </main>
    }
}
