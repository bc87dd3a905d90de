use super::*;

#[test]
fn modal_starts_hidden() {
    let modal = ModalState::default();
    assert!(!modal.is_open());
    assert_eq!(modal.aria_hidden(), "true");
}

#[test]
fn open_makes_modal_visible() {
    let mut modal = ModalState::default();
    modal.open();
    assert!(modal.is_open());
    assert_eq!(modal.aria_hidden(), "false");
}

#[test]
fn open_is_idempotent() {
    let mut modal = ModalState::default();
    modal.open();
    modal.open();
    assert_eq!(modal, ModalState::Visible);
}

#[test]
fn close_hides_modal() {
    let mut modal = ModalState::Visible;
    modal.close();
    assert_eq!(modal, ModalState::Hidden);
    assert_eq!(modal.aria_hidden(), "true");
}

#[test]
fn backdrop_click_closes_open_modal() {
    let mut modal = ModalState::Visible;
    assert!(modal.click(true));
    assert_eq!(modal, ModalState::Hidden);
}

#[test]
fn content_click_keeps_modal_open() {
    let mut modal = ModalState::Visible;
    assert!(!modal.click(false));
    assert_eq!(modal, ModalState::Visible);
}

#[test]
fn backdrop_click_on_hidden_modal_is_noop() {
    let mut modal = ModalState::Hidden;
    assert!(!modal.click(true));
    assert_eq!(modal, ModalState::Hidden);
}

#[test]
fn markup_attribute_seeds_initial_state() {
    assert_eq!(ModalState::from_aria_hidden(Some("false")), ModalState::Visible);
    assert_eq!(ModalState::from_aria_hidden(Some("true")), ModalState::Hidden);
    assert_eq!(ModalState::from_aria_hidden(Some("")), ModalState::Hidden);
    assert_eq!(ModalState::from_aria_hidden(None), ModalState::Hidden);
}

#[test]
fn dialog_without_attribute_is_synced_to_hidden() {
    let modal = ModalState::from_aria_hidden(None);
    assert!(modal.needs_sync(None));
    assert_eq!(modal.aria_hidden(), "true");
}

#[test]
fn matching_markup_attribute_needs_no_sync() {
    assert!(!ModalState::from_aria_hidden(Some("true")).needs_sync(Some("true")));
    assert!(!ModalState::from_aria_hidden(Some("false")).needs_sync(Some("false")));
    assert!(ModalState::from_aria_hidden(Some("")).needs_sync(Some("")));
}

#[test]
fn close_on_attribute_less_dialog_renders_hidden() {
    let mut modal = ModalState::from_aria_hidden(None);
    modal.close();
    assert_eq!(modal.aria_hidden(), "true");
    assert!(!modal.click(true));
    assert_eq!(modal.aria_hidden(), "true");
}
