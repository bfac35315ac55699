//! Card for one activity: details, availability and participant roster.

#[cfg(test)]
#[path = "activity_card_test.rs"]
mod activity_card_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::board_client::BoardClient;
use crate::net::types::Activity;

pub const NO_PARTICIPANTS: &str = "No participants yet";

/// How the participant section of a card renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParticipantsView {
    Placeholder,
    List(Vec<String>),
}

pub fn participants_view(participants: &[String]) -> ParticipantsView {
    if participants.is_empty() {
        ParticipantsView::Placeholder
    } else {
        ParticipantsView::List(participants.to_vec())
    }
}

pub fn availability_label(spots_left: i64) -> String {
    format!("{spots_left} spots left")
}

#[component]
pub fn ActivityCard(client: BoardClient, name: String, activity: Activity) -> impl IntoView {
    let availability = availability_label(activity.spots_left());

    let participants = match participants_view(&activity.participants) {
        ParticipantsView::Placeholder => view! { <p class="no-participants">{NO_PARTICIPANTS}</p> }.into_any(),
        ParticipantsView::List(emails) => {
            let rows = emails
                .into_iter()
                .map(|email| view! { <ParticipantRow client=client activity=name.clone() email=email/> })
                .collect::<Vec<_>>();
            view! { <ul class="participants-list">{rows}</ul> }.into_any()
        }
    };

    view! {
        <div class="activity-card">
            <h4>{name}</h4>
            <p>{activity.description}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {activity.schedule}
            </p>
            <p>
                <strong>"Availability:"</strong>
                " "
                {availability}
            </p>
            <div class="participants">
                <p>
                    <strong>"Participants:"</strong>
                </p>
                {participants}
            </div>
        </div>
    }
}

/// One roster entry with its removal control.
#[component]
fn ParticipantRow(client: BoardClient, activity: String, email: String) -> impl IntoView {
    let label = email.clone();
    let on_remove = move |_| client.remove_participant(activity.clone(), email.clone());

    view! {
        <li class="participant-item">
            {label}
            <button
                type="button"
                class="delete-btn"
                title="Remove participant"
                aria-label="Remove participant"
                on:click=on_remove
            >
                "×"
            </button>
        </li>
    }
}
