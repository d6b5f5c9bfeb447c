use super::*;

fn state_at(y: f64) -> ScrollState {
    ScrollState::from_offset(y, ScrollThresholds::default())
}

#[test]
fn top_of_page_has_no_flags() {
    assert_eq!(state_at(0.0), ScrollState::default());
}

#[test]
fn navbar_flag_flips_exactly_at_fifty() {
    assert!(!state_at(49.0).navbar_scrolled);
    assert!(!state_at(49.9).navbar_scrolled);
    assert!(state_at(50.0).navbar_scrolled);
    assert!(state_at(51.0).navbar_scrolled);
}

#[test]
fn back_to_top_flips_exactly_at_three_hundred() {
    assert!(!state_at(299.0).back_to_top_visible);
    assert!(state_at(300.0).back_to_top_visible);
    assert!(state_at(5000.0).back_to_top_visible);
}

#[test]
fn flags_are_independent_between_thresholds() {
    let mid = state_at(120.0);
    assert!(mid.navbar_scrolled);
    assert!(!mid.back_to_top_visible);
}

#[test]
fn recomputation_follows_scroll_back_up() {
    assert!(state_at(400.0).back_to_top_visible);
    assert_eq!(state_at(10.0), ScrollState::default());
}

#[test]
fn custom_thresholds_are_honored() {
    let thresholds = ScrollThresholds { navbar_px: 10.0, back_to_top_px: 20.0 };
    let state = ScrollState::from_offset(15.0, thresholds);
    assert!(state.navbar_scrolled);
    assert!(!state.back_to_top_visible);
}
