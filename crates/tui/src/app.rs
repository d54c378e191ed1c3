//! Application state and the action state machine.
//!
//! `App` is the single controller constructed once at startup. It owns the
//! input field, the rendered cards, the suggestion dropdown and the
//! loading flag. Every change goes through [`App::update`], which may
//! return a follow-up action for the runtime to dispatch (and to hand to
//! the side-effect handlers).
//!
//! The module is organized into submodules:
//! - `state`: Core state types and screen layout
//! - `input`: Keyboard handling
//! - `mouse`: Mouse handling and hit-testing
//! - `search`: Submitting searches and applying their reports
//! - `suggest`: Debounced, sequenced suggestions
//! - `render`: Frame rendering

pub mod state;

mod input;
mod mouse;
mod render;
mod search;
mod suggest;


pub use state::{
    AppLayout, FOOTER_HEIGHT, HEADER_HEIGHT, HealthState, Notice, SEARCH_LABEL, SEARCHING_LABEL,
    SuggestState,
};

use crate::action::Action;
use crate::ui::Toast;
use pokedex_client::CreatureCard;
use pokedex_config::constants::{
    DEFAULT_EXPORT_DIR, DEFAULT_MAX_SUGGESTIONS, DEFAULT_SUGGEST_DEBOUNCE_MS,
};
use pokedex_config::{ColorTheme, Config, Theme};
use ratatui::layout::Rect;
use std::path::PathBuf;
use std::time::Duration;
use tui_input::Input;

/// Settings the app is constructed with.
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Quiet period after the last keystroke before suggestions are fetched
    pub suggest_debounce: Duration,
    /// Most suggestions the dropdown will show
    pub max_suggestions: usize,
    /// Directory sprites are exported to
    pub export_dir: PathBuf,
    pub color_theme: ColorTheme,
    /// Shown in the header
    pub base_url: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            suggest_debounce: Duration::from_millis(DEFAULT_SUGGEST_DEBOUNCE_MS),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            color_theme: ColorTheme::default(),
            base_url: String::new(),
        }
    }
}

impl AppSettings {
    /// Settings from loaded configuration plus the export directory flag.
    pub fn from_config(config: &Config, export_dir: PathBuf) -> Self {
        Self {
            suggest_debounce: config.suggest.debounce,
            max_suggestions: config.suggest.max_suggestions,
            export_dir,
            color_theme: config.theme,
            base_url: config.connection.base_url.clone(),
        }
    }
}

/// Main application state.
pub struct App {
    pub input: Input,
    /// True while a search is in flight; Enter is ignored meanwhile
    pub loading: bool,
    pub cards: Vec<CreatureCard>,
    /// Index of the selected card
    pub selected: usize,
    /// First card drawn in the card area
    pub card_offset: usize,
    /// Inline error line above the cards
    pub banner: Option<String>,
    /// Placeholder drawn in the card area when there is nothing to show
    pub empty_message: Option<String>,
    pub suggestions: SuggestState,
    pub notice: Option<Notice>,
    pub toasts: Vec<Toast>,
    pub health: HealthState,
    pub color_theme: ColorTheme,
    pub theme: Theme,
    pub settings: AppSettings,
    /// Terminal area of the most recent frame
    pub last_area: Rect,
}

impl App {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            input: Input::default(),
            loading: false,
            cards: Vec::new(),
            selected: 0,
            card_offset: 0,
            banner: None,
            empty_message: None,
            suggestions: SuggestState::default(),
            notice: None,
            toasts: Vec::new(),
            health: HealthState::Unknown,
            color_theme: settings.color_theme,
            theme: Theme::from_color_theme(settings.color_theme),
            settings,
            last_area: Rect::default(),
        }
    }

    /// Current text of the search field.
    pub fn query(&self) -> &str {
        self.input.value()
    }

    /// Replace the text of the search field, cursor at the end.
    pub fn set_query(&mut self, value: impl Into<String>) {
        self.input = Input::new(value.into());
    }

    /// Label of the search trigger for the current loading state.
    pub fn search_label(&self) -> &'static str {
        if self.loading {
            SEARCHING_LABEL
        } else {
            SEARCH_LABEL
        }
    }

    /// The card currently selected, if any.
    pub fn selected_card(&self) -> Option<&CreatureCard> {
        self.cards.get(self.selected)
    }

    /// Regions of the last drawn frame.
    pub fn layout(&self) -> AppLayout {
        AppLayout::compute(self.last_area, self.banner.is_some())
    }

    /// Apply an action to the state.
    ///
    /// Returns a follow-up action that the runtime must feed back through
    /// `update` and the side-effect handlers.
    pub fn update(&mut self, action: Action) -> Option<Action> {
        match action {
            Action::Input(key) => self.handle_input(key),
            Action::Mouse(mouse) => self.handle_mouse(mouse),
            Action::Resize(width, height) => {
                self.last_area = Rect::new(0, 0, width, height);
                None
            }
            Action::Tick => {
                self.toasts.retain(|t| !t.is_expired());
                self.poll_suggest_deadline(std::time::Instant::now())
            }
            Action::CycleTheme => {
                self.color_theme = self.color_theme.cycle_next();
                self.theme = Theme::from_color_theme(self.color_theme);
                self.toasts
                    .push(Toast::info(format!("Theme: {}", self.color_theme)));
                None
            }
            Action::SubmitSearch => self.submit_search(),
            Action::Loading(loading) => {
                self.loading = loading;
                None
            }
            Action::SearchFinished(result) => {
                self.apply_search_result(result);
                None
            }
            Action::SuggestionsLoaded { request_id, result } => {
                self.apply_suggestions(request_id, result);
                None
            }
            Action::SelectSuggestion(index) => self.select_suggestion(index),
            Action::HideSuggestions => {
                self.suggestions.reset();
                None
            }
            Action::ExportSelected => self.export_selected(),
            Action::ExportFinished { name, result } => {
                match result {
                    Ok(path) => self
                        .toasts
                        .push(Toast::success(format!("Saved {}", path.display()))),
                    Err(e) => {
                        tracing::warn!(error = %e, "Sprite export failed");
                        self.notice = Some(Notice {
                            title: format!("Could not save {name}"),
                            message: e.to_string(),
                        });
                    }
                }
                None
            }
            Action::DismissNotice => {
                self.notice = None;
                None
            }
            Action::HealthLoaded(result) => {
                self.health = match result {
                    Ok(status) if status.is_up() => HealthState::Up,
                    Ok(status) => HealthState::Down(status.status),
                    Err(e) => {
                        tracing::warn!(error = %e, "Health check failed");
                        HealthState::Unreachable
                    }
                };
                None
            }
            Action::Notify(level, message) => {
                self.toasts.push(Toast::new(message, level));
                None
            }
            // Handled by the runtime and side effects only.
            Action::Quit
            | Action::Search { .. }
            | Action::Suggest { .. }
            | Action::ExportSprite { .. }
            | Action::LoadHealth => None,
        }
    }

    /// Build the export request for the selected card.
    fn export_selected(&mut self) -> Option<Action> {
        let Some(card) = self.selected_card() else {
            self.toasts.push(Toast::warning("No card selected"));
            return None;
        };
        Some(Action::ExportSprite {
            name: card.name.clone(),
            sprite_url: card.sprite_url.clone(),
            dir: self.settings.export_dir.clone(),
        })
    }
}
