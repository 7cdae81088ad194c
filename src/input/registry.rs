//! Command registry for dispatching keyboard input to commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Maps key events to commands.
///
/// Priority:
/// 1. Quit keys (`q`, Ctrl+C), always
/// 2. Modal bindings; an open modal swallows every other key
/// 3. Global bindings
/// 4. Screen bindings
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    /// Returns `None` when the key is not bound in this context.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        // Uppercase letters arrive with SHIFT set; bindings are stored plain.
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        let combo = KeyCombo::new(key.code, modifiers);

        if self.config.get_global(&combo).is_some_and(|cmd| cmd.is_quit()) {
            return Some(Command::Quit);
        }

        if context.is_modal_active() {
            return Some(
                self.config
                    .get_modal(context.modal, &combo)
                    .copied()
                    .unwrap_or(Command::Noop),
            );
        }

        self.config
            .get_global(&combo)
            .or_else(|| self.config.get_screen(context.screen, &combo))
            .copied()
    }
}
