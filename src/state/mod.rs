//! Page state modules.
//!
//! DESIGN
//! ======
//! Each behavior keeps its model in its own module so the logic is testable
//! natively. [`PageState`] aggregates them; the browser layer owns exactly
//! one instance, shared by every event handler.

pub mod contact;
pub mod modal;
pub mod nav;
pub mod theme;

use contact::ContactFlow;
use modal::ModalState;
use theme::ThemeState;

/// Mutable state for the whole page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub theme: ThemeState,
    pub modal: ModalState,
    pub contact: ContactFlow,
}
