//! Input handling module for keyboard and command processing.
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> App::execute_command()
//! ```
//!
//! - [`command`] - The [`Command`] enum with all user actions
//! - [`context`] - [`InputContext`] for the current screen and modal
//! - [`registry`] - [`CommandRegistry`] for mapping keys to commands
//! - [`keybindings`] - Default key binding configuration

pub mod command;
pub mod context;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, ModalType};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use tracing::trace;

use crate::app::App;

impl App {
    /// Builds an InputContext from the current application state.
    pub fn build_input_context(&self) -> InputContext {
        let modal = if self.detail.is_some() {
            ModalType::Detail
        } else if self.selector.visible {
            ModalType::UserSelector
        } else {
            ModalType::None
        };

        InputContext::new().with_screen(self.screen).with_modal(modal)
    }

    /// Apply a command. Returns `true` if it had an effect.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        trace!(?cmd, "execute_command");

        if cmd.marks_dirty() {
            self.mark_dirty();
        }

        match cmd {
            Command::Quit => self.quit(),
            Command::NextScreen => self.show_screen(self.screen.next()),
            Command::ShowScreen(screen) => self.show_screen(screen),
            Command::Refresh => self.refresh(),
            Command::MoveUp => self.move_row(-1),
            Command::MoveDown => self.move_row(1),
            Command::OpenDetail => self.open_detail(),
            Command::NextPage => self.next_page(),
            Command::PrevPage => self.prev_page(),
            Command::CyclePageSize => self.cycle_page_size(),
            Command::OpenSelector => self.open_selector(),
            Command::SelectorUp => self.move_selector(-1),
            Command::SelectorDown => self.move_selector(1),
            Command::ConfirmSelector => self.confirm_selector(),
            Command::CloseSelector => self.close_selector(),
            Command::NextDetailTab => self.toggle_detail_tab(),
            Command::CloseDetail => self.close_detail(),
            Command::Noop => return false,
        }
        true
    }
}
