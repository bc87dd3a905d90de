//! Navigation fragment handling and scroll-position tracking.
//!
//! Pure geometry and string logic; the browser layer feeds in section
//! offsets and link `href`s read from the DOM.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// A page region tracked for active-link highlighting.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    /// Element id; empty when the element has none.
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

impl Section {
    #[must_use]
    pub fn new(id: impl Into<String>, offset_top: f64, height: f64) -> Self {
        Self { id: id.into(), offset_top, height }
    }
}

/// An anchor pointing at an in-page fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
}

impl NavLink {
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    /// The section id this link targets, if it is an in-page link.
    #[must_use]
    pub fn target_id(&self) -> Option<&str> {
        fragment_target(&self.href)
    }

    /// Whether this link is the indicator for `section_id`.
    #[must_use]
    pub fn points_at(&self, section_id: &str) -> bool {
        !section_id.is_empty() && self.target_id() == Some(section_id)
    }
}

/// Extract the element id from a fragment `href`.
///
/// Returns `None` for non-fragment links and for the bare `#`, which keeps
/// its default browser behavior.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(id) => Some(id),
    }
}

/// The last section (document order) whose top is at or above
/// `scroll_y + lookahead`. Sections without an id never become current.
#[must_use]
pub fn current_section(scroll_y: f64, lookahead: f64, sections: &[Section]) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if scroll_y >= section.offset_top - lookahead {
            current = Some(section.id.as_str());
        }
    }
    current.filter(|id| !id.is_empty())
}

/// Active flag for each link, in order: exactly the links pointing at
/// `current` are active.
#[must_use]
pub fn active_flags(links: &[NavLink], current: Option<&str>) -> Vec<bool> {
    links
        .iter()
        .map(|link| current.is_some_and(|id| link.points_at(id)))
        .collect()
}
