//! Default keybindings for the application.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::ModalType;
use crate::app::Screen;

/// A key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

/// Keybinding configuration, layered global → screen, with modals replacing
/// both while open.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    pub global: HashMap<KeyCombo, Command>,
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
    pub screen: HashMap<Screen, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            modal: HashMap::new(),
            screen: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_modal_bindings();
        config.setup_screen_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        self.global
            .insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        self.global
            .insert(KeyCombo::plain(KeyCode::Tab), Command::NextScreen);
        self.global.insert(
            KeyCombo::plain(KeyCode::Char('1')),
            Command::ShowScreen(Screen::Dashboard),
        );
        self.global.insert(
            KeyCombo::plain(KeyCode::Char('2')),
            Command::ShowScreen(Screen::LearningResults),
        );
        self.global
            .insert(KeyCombo::plain(KeyCode::Char('r')), Command::Refresh);
    }

    fn setup_modal_bindings(&mut self) {
        let mut selector = HashMap::new();
        selector.insert(KeyCombo::plain(KeyCode::Esc), Command::CloseSelector);
        selector.insert(KeyCombo::plain(KeyCode::Enter), Command::ConfirmSelector);
        selector.insert(KeyCombo::plain(KeyCode::Up), Command::SelectorUp);
        selector.insert(KeyCombo::plain(KeyCode::Char('k')), Command::SelectorUp);
        selector.insert(KeyCombo::plain(KeyCode::Down), Command::SelectorDown);
        selector.insert(KeyCombo::plain(KeyCode::Char('j')), Command::SelectorDown);
        self.modal.insert(ModalType::UserSelector, selector);

        let mut detail = HashMap::new();
        detail.insert(KeyCombo::plain(KeyCode::Esc), Command::CloseDetail);
        detail.insert(KeyCombo::plain(KeyCode::Tab), Command::NextDetailTab);
        detail.insert(KeyCombo::plain(KeyCode::Left), Command::NextDetailTab);
        detail.insert(KeyCombo::plain(KeyCode::Right), Command::NextDetailTab);
        self.modal.insert(ModalType::Detail, detail);
    }

    fn setup_screen_bindings(&mut self) {
        let mut results = HashMap::new();
        results.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        results.insert(KeyCombo::plain(KeyCode::Char('k')), Command::MoveUp);
        results.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        results.insert(KeyCombo::plain(KeyCode::Char('j')), Command::MoveDown);
        results.insert(KeyCombo::plain(KeyCode::Enter), Command::OpenDetail);
        results.insert(KeyCombo::plain(KeyCode::Char('n')), Command::NextPage);
        results.insert(KeyCombo::plain(KeyCode::PageDown), Command::NextPage);
        results.insert(KeyCombo::plain(KeyCode::Char('p')), Command::PrevPage);
        results.insert(KeyCombo::plain(KeyCode::PageUp), Command::PrevPage);
        results.insert(KeyCombo::plain(KeyCode::Char('s')), Command::CyclePageSize);
        results.insert(KeyCombo::plain(KeyCode::Char('u')), Command::OpenSelector);
        results.insert(KeyCombo::plain(KeyCode::Char('f')), Command::OpenSelector);
        self.screen.insert(Screen::LearningResults, results);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_modal(&self, modal: ModalType, combo: &KeyCombo) -> Option<&Command> {
        self.modal.get(&modal).and_then(|m| m.get(combo))
    }

    pub fn get_screen(&self, screen: Screen, combo: &KeyCombo) -> Option<&Command> {
        self.screen.get(&screen).and_then(|m| m.get(combo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_combo_ctrl() {
        let combo = KeyCombo::ctrl(KeyCode::Char('c'));
        assert_eq!(combo.code, KeyCode::Char('c'));
        assert_eq!(combo.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_dashboard_has_no_screen_bindings() {
        let config = KeybindingConfig::new();
        assert!(config
            .get_screen(Screen::Dashboard, &KeyCombo::plain(KeyCode::Enter))
            .is_none());
    }

    #[test]
    fn test_tab_differs_between_global_and_detail() {
        let config = KeybindingConfig::new();
        let tab = KeyCombo::plain(KeyCode::Tab);
        assert_eq!(config.get_global(&tab), Some(&Command::NextScreen));
        assert_eq!(
            config.get_modal(ModalType::Detail, &tab),
            Some(&Command::NextDetailTab)
        );
    }
}
