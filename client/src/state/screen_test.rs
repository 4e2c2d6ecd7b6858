use super::*;

#[test]
fn screen_state_default_is_welcome_with_empty_query() {
    let state = ScreenState::default();
    assert_eq!(state.active, Screen::Welcome);
    assert_eq!(state.initial_query, "");
    assert_eq!(state.visit, 0);
}

#[test]
fn start_chat_stores_query_and_switches() {
    let mut state = ScreenState::default();
    state.start_chat("fire rating requirements");
    assert_eq!(state.active, Screen::Chat);
    assert_eq!(state.initial_query, "fire rating requirements");
    assert_eq!(state.visit, 1);
}

#[test]
fn start_chat_keeps_raw_query() {
    let mut state = ScreenState::default();
    state.start_chat("  stairs  ");
    assert_eq!(state.initial_query, "  stairs  ");
}

#[test]
fn go_home_resets_to_welcome() {
    let mut state = ScreenState::default();
    state.start_chat("ramps");
    state.go_home();
    assert_eq!(state.active, Screen::Welcome);
    assert_eq!(state.initial_query, "");
}

#[test]
fn each_visit_is_distinct() {
    let mut state = ScreenState::default();
    state.start_chat("ramps");
    state.go_home();
    state.start_chat("ramps");
    assert_eq!(state.visit, 2);
}
