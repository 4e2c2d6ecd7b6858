use super::*;
use crate::net::types::FALLBACK_TEXT;
use crate::state::session::Sender;

#[test]
fn enter_without_shift_sends() {
    assert!(is_send_key("Enter", false));
}

#[test]
fn shift_enter_and_other_keys_do_not_send() {
    assert!(!is_send_key("Enter", true));
    assert!(!is_send_key("a", false));
    assert!(!is_send_key("Tab", false));
}

#[test]
fn dispatch_of_only_yields_dispatched_requests() {
    let dispatch = Dispatch { seq: 1, text: "q".into() };
    assert_eq!(dispatch_of(SubmitOutcome::Dispatched(dispatch.clone())), Some(dispatch));
    assert_eq!(dispatch_of(SubmitOutcome::Queued), None);
    assert_eq!(dispatch_of(SubmitOutcome::Ignored), None);
}

fn with_owner() -> Owner {
    let owner = Owner::new();
    owner.set();
    owner
}

fn dispatch_into(session: RwSignal<ChatSession>, text: &str) -> Dispatch {
    session.try_update(|s| dispatch_of(s.submit(text, "10:00"))).flatten().unwrap()
}

#[test]
fn exchange_task_holds_slot_before_first_poll() {
    let _owner = with_owner();
    let session = RwSignal::new(ChatSession::new());
    let dispatch = dispatch_into(session, "What is the minimum ceiling height?");

    let task = exchange_task(session, dispatch);
    assert!(session.get_untracked().is_pending());

    drop(task);
    let state = session.get_untracked();
    assert!(!state.is_pending());
    assert_eq!(state.transcript().len(), 2);
    assert_eq!(state.transcript()[1].text, FALLBACK_TEXT);
}

#[test]
fn seed_session_sends_initial_query_once() {
    let _owner = with_owner();
    let session = RwSignal::new(ChatSession::new());

    seed_session(session, "  Fire rating for walls?  ");
    seed_session(session, "Fire rating for walls?");

    let state = session.get_untracked();
    let senders: Vec<_> = state.transcript().iter().map(|m| m.sender).collect();
    assert_eq!(senders, vec![Sender::User, Sender::Bot]);
    assert_eq!(state.transcript()[0].text, "Fire rating for walls?");
    assert!(!state.is_pending());
}

#[test]
fn seed_session_with_blank_query_sends_nothing() {
    let _owner = with_owner();
    let session = RwSignal::new(ChatSession::new());

    seed_session(session, "   ");

    let state = session.get_untracked();
    assert!(state.transcript().is_empty());
    assert!(!state.is_pending());
}
