#![cfg(not(feature = "csr"))]

use super::*;
use crate::state::activities::ListView;

fn board() -> (Owner, BoardClient) {
    let owner = Owner::new();
    owner.set();
    (owner, BoardClient::new(BoardConfig::default()))
}

fn pending_refresh(client: BoardClient) -> RefreshTicket {
    client
        .activities
        .try_update(ActivitiesState::begin_refresh)
        .unwrap()
}

fn refresh_followed(client: BoardClient, before: RefreshTicket) -> bool {
    !client.activities.with_untracked(|s| s.is_current(before))
}

// =============================================================
// Signup
// =============================================================

#[test]
fn accepted_signup_shows_success_resets_form_and_refreshes() {
    let (_owner, client) = board();
    client.form.set(SignupForm { email: "a@b.com".to_owned(), activity: "Chess Club".to_owned() });
    let before = pending_refresh(client);

    client.finish_signup(&Ok(SignupAccepted { message: "Signed up!".to_owned() }));

    let message = client.message.get_untracked();
    assert!(message.visible);
    assert_eq!(message.text, "Signed up!");
    assert_eq!(message.kind, MessageKind::Success);
    assert_eq!(client.form.get_untracked(), SignupForm::default());
    assert!(refresh_followed(client, before));
}

#[test]
fn rejected_signup_shows_error_and_keeps_form() {
    let (_owner, client) = board();
    let fields = SignupForm { email: "a@b.com".to_owned(), activity: "Chess Club".to_owned() };
    client.form.set(fields.clone());
    let before = pending_refresh(client);

    client.finish_signup(&Err(ApiError::Rejected { status: 400, detail: Some("Activity full".to_owned()) }));

    let message = client.message.get_untracked();
    assert!(message.visible);
    assert_eq!(message.text, "Activity full");
    assert_eq!(message.kind, MessageKind::Error);
    assert_eq!(client.form.get_untracked(), fields);
    assert!(!refresh_followed(client, before));
}

#[test]
fn submit_signup_without_browser_changes_nothing() {
    let (_owner, client) = board();
    client.form.set(SignupForm { email: "a@b.com".to_owned(), activity: "Chess Club".to_owned() });
    client.submit_signup();
    assert!(!client.message.get_untracked().visible);
    assert_eq!(client.form.get_untracked().email, "a@b.com");
}

// =============================================================
// Removal
// =============================================================

#[test]
fn successful_removal_refreshes_without_message() {
    let (_owner, client) = board();
    let before = pending_refresh(client);

    client.finish_removal(&Ok(()));

    assert!(refresh_followed(client, before));
    assert!(!client.message.get_untracked().visible);
}

#[test]
fn rejected_removal_is_silent_on_page() {
    let (_owner, client) = board();
    let before = pending_refresh(client);

    client.finish_removal(&Err(ApiError::Rejected { status: 404, detail: Some("Not signed up".to_owned()) }));

    assert!(!refresh_followed(client, before));
    assert!(!client.message.get_untracked().visible);
}

// =============================================================
// Refresh
// =============================================================

#[test]
fn refresh_result_for_superseded_request_is_dropped() {
    let (_owner, client) = board();
    let older = pending_refresh(client);
    client.refresh();

    client.finish_refresh(older, Ok(Catalog::default()));

    assert_eq!(client.activities.get_untracked().list, ListView::Loading);
}

#[test]
fn failed_refresh_shows_failure_notice() {
    let (_owner, client) = board();
    let ticket = pending_refresh(client);

    client.finish_refresh(ticket, Err(ApiError::Transport("offline".to_owned())));

    assert_eq!(client.activities.get_untracked().list, ListView::Failed);
}

#[test]
fn config_is_owned_by_client() {
    let (_owner, client) = board();
    assert_eq!(client.config(), BoardConfig::default());
}
