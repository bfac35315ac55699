use super::*;

#[test]
fn empty_roster_renders_placeholder() {
    assert_eq!(participants_view(&[]), ParticipantsView::Placeholder);
}

#[test]
fn roster_keeps_signup_order() {
    let roster = vec!["emma@mergington.edu".to_owned(), "sophia@mergington.edu".to_owned()];
    assert_eq!(participants_view(&roster), ParticipantsView::List(roster.clone()));
}

#[test]
fn availability_label_formats_spot_count() {
    assert_eq!(availability_label(10), "10 spots left");
    assert_eq!(availability_label(0), "0 spots left");
    assert_eq!(availability_label(-1), "-1 spots left");
}

#[test]
fn availability_label_matches_capacity_minus_roster() {
    let activity = Activity {
        description: "Team practice".to_owned(),
        schedule: "Tuesdays".to_owned(),
        max_participants: 22,
        participants: vec!["a@x".to_owned(), "b@x".to_owned(), "c@x".to_owned()],
    };
    assert_eq!(availability_label(activity.spots_left()), "19 spots left");
}
