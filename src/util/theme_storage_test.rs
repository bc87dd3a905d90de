#![cfg(not(feature = "browser"))]

use super::*;

#[test]
fn read_saved_is_none_in_native_tests() {
    assert_eq!(read_saved("theme"), None);
}

#[test]
fn restore_without_storage_starts_at_first_theme() {
    let state = restore("theme");
    assert_eq!(state.current(), Theme::Dark);
    assert_eq!(state.index(), 0);
}

#[test]
fn cycle_advances_state_and_returns_new_theme() {
    let mut state = ThemeState::default();
    assert_eq!(cycle(&mut state, "theme"), Theme::Daylight);
    assert_eq!(cycle(&mut state, "theme"), Theme::Ocean);
    assert_eq!(state.current(), Theme::Ocean);
}

#[test]
fn apply_and_persist_are_noop_but_callable() {
    apply(Theme::Forest);
    persist("theme", Theme::Forest);
}
