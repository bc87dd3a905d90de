use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_names_round_trip_through_from_str() {
    for theme in Theme::ALL {
        assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
    }
}

#[test]
fn theme_index_matches_position_in_cycle() {
    for (i, theme) in Theme::ALL.iter().enumerate() {
        assert_eq!(theme.index(), i);
    }
}

#[test]
fn theme_from_str_is_case_sensitive() {
    assert_eq!("Dark".parse::<Theme>(), Err(ThemeError("Dark".to_owned())));
}

#[test]
fn theme_error_message_names_value() {
    assert_eq!(ThemeError("neon".to_owned()).to_string(), "unknown theme: \"neon\"");
}

#[test]
fn theme_display_uses_attribute_value() {
    assert_eq!(Theme::Sunset.to_string(), "sunset");
}

// =============================================================
// ThemeState restore
// =============================================================

#[test]
fn missing_saved_theme_falls_back_to_first() {
    let state = ThemeState::from_saved(None);
    assert_eq!(state.current(), Theme::Dark);
    assert_eq!(state.index(), 0);
}

#[test]
fn unknown_saved_theme_falls_back_to_first() {
    for raw in ["", "neon", "DARK", " ocean", "null"] {
        let state = ThemeState::from_saved(Some(raw));
        assert_eq!(state.current(), Theme::Dark, "value {raw:?}");
        assert_eq!(state.index(), 0);
    }
}

#[test]
fn valid_saved_theme_sets_pointer_to_its_index() {
    for theme in Theme::ALL {
        let state = ThemeState::from_saved(Some(theme.as_str()));
        assert_eq!(state.current(), theme);
        assert_eq!(state.index(), theme.index());
    }
}

// =============================================================
// ThemeState advance
// =============================================================

#[test]
fn advance_cycles_in_order_and_wraps() {
    let mut state = ThemeState::default();
    let n = Theme::ALL.len();
    for k in 1..=(3 * n) {
        let theme = state.advance();
        assert_eq!(theme, Theme::ALL[k % n]);
        assert_eq!(state.current(), theme);
    }
}

#[test]
fn advance_from_last_theme_returns_to_first() {
    let mut state = ThemeState::from_saved(Some("forest"));
    assert_eq!(state.advance(), Theme::Dark);
}

#[test]
fn advance_from_restored_theme_continues_from_it() {
    let mut state = ThemeState::from_saved(Some("ocean"));
    assert_eq!(state.advance(), Theme::Sunset);
}
