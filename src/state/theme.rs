//! Theme cycle state.
//!
//! The page offers a fixed, ordered set of color themes. [`ThemeState`] keeps
//! a pointer into that set; the pointer is always in range, so the active
//! theme is always one of [`Theme::ALL`].

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown theme: {0:?}")]
pub struct ThemeError(pub String);

/// Color themes in cycle order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Daylight,
    Ocean,
    Sunset,
    Forest,
}

impl Theme {
    pub const ALL: [Theme; 5] = [Theme::Dark, Theme::Daylight, Theme::Ocean, Theme::Sunset, Theme::Forest];

    /// Value written to `data-theme` and to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Daylight => "daylight",
            Theme::Ocean => "ocean",
            Theme::Sunset => "sunset",
            Theme::Forest => "forest",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Theme::Dark => 0,
            Theme::Daylight => 1,
            Theme::Ocean => 2,
            Theme::Sunset => 3,
            Theme::Forest => 4,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| ThemeError(s.to_owned()))
    }
}

/// Selection pointer into [`Theme::ALL`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    index: usize,
}

impl ThemeState {
    /// Restore from a persisted value. Anything absent or not in the set
    /// falls back to the first theme.
    #[must_use]
    pub fn from_saved(saved: Option<&str>) -> Self {
        match saved.map(str::parse::<Theme>) {
            Some(Ok(theme)) => Self { index: theme.index() },
            Some(Err(err)) => {
                log::debug!("ignoring saved theme: {err}");
                Self::default()
            }
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn current(self) -> Theme {
        Theme::ALL[self.index]
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    /// Move to the next theme, wrapping after the last one.
    pub fn advance(&mut self) -> Theme {
        self.index = (self.index + 1) % Theme::ALL.len();
        self.current()
    }
}
