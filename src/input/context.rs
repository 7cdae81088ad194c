//! Input context for determining which commands are available.

use crate::app::Screen;

/// The overlay currently capturing input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    #[default]
    None,
    /// User selector popup on the results screen
    UserSelector,
    /// Learning result detail modal
    Detail,
}

/// Snapshot of the application state relevant to key dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputContext {
    pub screen: Screen,
    pub modal: ModalType,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_screen(mut self, screen: Screen) -> Self {
        self.screen = screen;
        self
    }

    pub fn with_modal(mut self, modal: ModalType) -> Self {
        self.modal = modal;
        self
    }

    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }
}
