//! Type definitions for the application state.

use crate::models::CombinedLearningResult;

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    LearningResults,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Dashboard, Screen::LearningResults];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::LearningResults => "Learning results",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Screen::Dashboard => Screen::LearningResults,
            Screen::LearningResults => Screen::Dashboard,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Screen::Dashboard => 0,
            Screen::LearningResults => 1,
        }
    }
}

/// `idle → loading → (loaded | failed)`, re-entered on every fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Readiness of the user list. Selector-driven fetches wait for `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsersState {
    #[default]
    NotLoaded,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    Scores,
}

impl DetailTab {
    pub fn toggle(&self) -> Self {
        match self {
            DetailTab::Overview => DetailTab::Scores,
            DetailTab::Scores => DetailTab::Overview,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            DetailTab::Overview => 0,
            DetailTab::Scores => 1,
        }
    }
}

/// Open detail modal. Holds its own copy of the row, so a later re-fetch
/// does not change what the modal shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub row: CombinedLearningResult,
    pub tab: DetailTab,
}

/// User selector popup. Cursor 0 is "All users"; cursor `i + 1` is `users[i]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserSelector {
    pub visible: bool,
    pub cursor: usize,
}
