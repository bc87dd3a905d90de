//! Modal dialog visibility.
//!
//! The dialog stays in the document; visibility is expressed through its
//! `aria-hidden` attribute.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible,
}

impl ModalState {
    /// Initial state from the attribute present in the markup. Only an
    /// explicit `"false"` means the page was served with the dialog open.
    #[must_use]
    pub fn from_aria_hidden(value: Option<&str>) -> Self {
        match value {
            Some("false") => ModalState::Visible,
            _ => ModalState::Hidden,
        }
    }

    /// Whether the attribute found in the markup differs from what this
    /// state renders, e.g. a dialog served without `aria-hidden`.
    #[must_use]
    pub fn needs_sync(self, markup: Option<&str>) -> bool {
        markup != Some(self.aria_hidden())
    }

    /// Value for the dialog's `aria-hidden` attribute.
    #[must_use]
    pub fn aria_hidden(self) -> &'static str {
        match self {
            ModalState::Hidden => "true",
            ModalState::Visible => "false",
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == ModalState::Visible
    }

    pub fn open(&mut self) {
        *self = ModalState::Visible;
    }

    pub fn close(&mut self) {
        *self = ModalState::Hidden;
    }

    /// Handle a click that landed on the dialog element or inside it.
    /// Only a click on the backdrop itself closes the dialog.
    ///
    /// Returns `true` if the state changed.
    pub fn click(&mut self, on_backdrop: bool) -> bool {
        if on_backdrop && self.is_open() {
            self.close();
            return true;
        }
        false
    }
}
