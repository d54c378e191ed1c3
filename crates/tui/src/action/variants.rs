//! Action enum definitions.

use std::path::PathBuf;
use std::sync::Arc;

use crossterm::event::{KeyEvent, MouseEvent};
use pokedex_client::{ClientError, ExportError, HealthStatus, SearchReport, ValidationError};

use crate::ui::ToastLevel;

/// Unified action type for async TUI event handling.
///
/// Actions flow through a channel from the input task and spawned API
/// tasks to the app state, where they trigger state mutations.
#[derive(Debug, Clone)]
pub enum Action {
    // System
    /// Quit the application
    Quit,
    /// Periodic UI tick (debounce deadlines, toast expiry)
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Cycle to the next color theme
    CycleTheme,

    // Input
    /// Raw keyboard input
    Input(KeyEvent),
    /// Raw mouse input
    Mouse(MouseEvent),

    // Search
    /// Validate the current input and, if it holds identifiers, search
    SubmitSearch,
    /// Dispatch lookups for a validated query
    Search { query: String },
    /// Set or clear the loading state
    Loading(bool),
    /// All lookups of a search have settled
    SearchFinished(Result<SearchReport, ValidationError>),

    // Suggestions
    /// Fetch suggestions for `keyword`, tagged with its sequence number
    Suggest { keyword: String, request_id: u64 },
    /// Suggestions arrived for the request tagged `request_id`
    SuggestionsLoaded {
        request_id: u64,
        result: Result<Vec<String>, Arc<ClientError>>,
    },
    /// Pick the suggestion at this index in the dropdown
    SelectSuggestion(usize),
    /// Close the dropdown without picking anything
    HideSuggestions,

    // Export
    /// Save the sprite of the selected card
    ExportSelected,
    /// Download `sprite_url` into `dir/{name}.png`
    ExportSprite {
        name: String,
        sprite_url: Option<String>,
        dir: PathBuf,
    },
    /// A sprite export finished
    ExportFinished {
        name: String,
        result: Result<PathBuf, Arc<ExportError>>,
    },
    /// Close the blocking notice
    DismissNotice,

    // Health
    /// Query service health
    LoadHealth,
    /// Health status arrived
    HealthLoaded(Result<HealthStatus, Arc<ClientError>>),

    // Feedback
    /// Show a toast notification
    Notify(ToastLevel, String),
}

impl Action {
    /// Short, payload-free name for spans and metrics labels.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Quit => "Quit",
            Action::Tick => "Tick",
            Action::Resize(..) => "Resize",
            Action::CycleTheme => "CycleTheme",
            Action::Input(_) => "Input",
            Action::Mouse(_) => "Mouse",
            Action::SubmitSearch => "SubmitSearch",
            Action::Search { .. } => "Search",
            Action::Loading(_) => "Loading",
            Action::SearchFinished(_) => "SearchFinished",
            Action::Suggest { .. } => "Suggest",
            Action::SuggestionsLoaded { .. } => "SuggestionsLoaded",
            Action::SelectSuggestion(_) => "SelectSuggestion",
            Action::HideSuggestions => "HideSuggestions",
            Action::ExportSelected => "ExportSelected",
            Action::ExportSprite { .. } => "ExportSprite",
            Action::ExportFinished { .. } => "ExportFinished",
            Action::DismissNotice => "DismissNotice",
            Action::LoadHealth => "LoadHealth",
            Action::HealthLoaded(_) => "HealthLoaded",
            Action::Notify(..) => "Notify",
        }
    }
}
