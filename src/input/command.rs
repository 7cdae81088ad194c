//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum is the unified representation of a user action,
//! decoupling key bindings from their effects.

use crate::app::Screen;

/// Every action a key press can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (q, Ctrl+C)
    Quit,
    /// Cycle to the next screen (Tab)
    NextScreen,
    /// Jump to a screen (1, 2)
    ShowScreen(Screen),
    /// Re-fetch the current screen's data (r)
    Refresh,

    // =========================================================================
    // Results Screen
    // =========================================================================
    /// Move the row selection up
    MoveUp,
    /// Move the row selection down
    MoveDown,
    /// Open the detail modal for the selected row (Enter)
    OpenDetail,
    NextPage,
    PrevPage,
    /// Cycle the page size (s)
    CyclePageSize,
    /// Open the user selector (u, f)
    OpenSelector,

    // =========================================================================
    // User Selector
    // =========================================================================
    SelectorUp,
    SelectorDown,
    /// Apply the highlighted entry (Enter)
    ConfirmSelector,
    /// Close without applying (Esc)
    CloseSelector,

    // =========================================================================
    // Detail Modal
    // =========================================================================
    /// Switch between Overview and Scores
    NextDetailTab,
    /// Close the modal (Esc)
    CloseDetail,

    /// Key consumed without effect
    Noop,
}

impl Command {
    /// Returns true if this command should trigger a redraw.
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, Command::Noop)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Command::Quit)
    }

    /// Short label used in the help line.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::NextScreen => "switch screen",
            Command::ShowScreen(_) => "go to screen",
            Command::Refresh => "refresh",
            Command::MoveUp | Command::MoveDown => "move",
            Command::OpenDetail => "details",
            Command::NextPage => "next page",
            Command::PrevPage => "prev page",
            Command::CyclePageSize => "page size",
            Command::OpenSelector => "filter by user",
            Command::SelectorUp | Command::SelectorDown => "move",
            Command::ConfirmSelector => "apply",
            Command::CloseSelector => "cancel",
            Command::NextDetailTab => "switch tab",
            Command::CloseDetail => "close",
            Command::Noop => "",
        }
    }
}
