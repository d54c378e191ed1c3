//! Full-frame rendering against a test backend.

mod common;
mod helpers;

use std::time::{Duration, Instant};

use common::*;
use helpers::*;
use pokedex_client::{ExportError, NOT_FOUND_MESSAGE};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

const WIDTH: u16 = 100;
const HEIGHT: u16 = 40;

fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::with_capacity(usize::from(area.width + 1) * usize::from(area.height));
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn draw(app: &mut App) -> String {
    let backend = TestBackend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
    buffer_to_string(terminal.backend().buffer())
}

fn app_sized() -> App {
    let mut app = App::new(AppSettings {
        base_url: "http://pokedex.test/api".to_string(),
        ..AppSettings::default()
    });
    app.update(Action::Resize(WIDTH, HEIGHT));
    app
}

#[test]
fn test_idle_frame_shows_trigger_and_welcome() {
    let mut app = app_sized();
    let screen = draw(&mut app);

    assert!(screen.contains("Search"));
    assert!(!screen.contains("Searching..."));
    assert!(screen.contains("Names or IDs"));
    assert!(screen.contains("pokedex.test"));
}

#[test]
fn test_loading_frame_shows_searching_label() {
    let mut app = app_sized();
    type_text(&mut app, "pikachu");
    dispatch(&mut app, Action::SubmitSearch);

    let screen = draw(&mut app);
    assert!(screen.contains("Searching..."));
    assert!(screen.contains("pikachu"));
}

#[test]
fn test_cards_and_banner_are_drawn() {
    let mut app = app_sized();
    app.update(Action::SearchFinished(Ok(report(&["pikachu"], &["bogus123"]))));

    let screen = draw(&mut app);
    assert!(screen.contains("Could not find: bogus123"));
    assert!(screen.contains("#025"));
    assert!(screen.contains("pikachu"));
    assert!(screen.contains("320 total base stats"));
    assert!(screen.contains("Has hidden ability"));
    assert!(screen.contains("Types:"));
}

#[test]
fn test_all_failed_frame_shows_not_found_message() {
    let mut app = app_sized();
    app.update(Action::SearchFinished(Ok(report(&[], &["foo"]))));

    let screen = draw(&mut app);
    assert!(screen.contains("Could not find: foo"));
    assert!(screen.contains(NOT_FOUND_MESSAGE));
}

#[test]
fn test_card_without_sprite_says_none() {
    let mut app = app_sized();
    app.update(Action::SearchFinished(Ok(report(&["ditto"], &[]))));

    let screen = draw(&mut app);
    assert!(screen.contains("Sprite: none"));
}

#[test]
fn test_dropdown_lists_suggestions() {
    let mut app = app_sized();
    type_text(&mut app, "pi");
    let later = Instant::now() + app.settings.suggest_debounce + Duration::from_millis(5);
    let Some(Action::Suggest { request_id, .. }) = app.poll_suggest_deadline(later) else {
        panic!("expected a suggestion request");
    };
    app.update(Action::SuggestionsLoaded {
        request_id,
        result: Ok(vec!["pichu".to_string(), "pidgey".to_string()]),
    });

    let screen = draw(&mut app);
    assert!(screen.contains("pichu"));
    assert!(screen.contains("pidgey"));

    app.update(Action::HideSuggestions);
    let screen = draw(&mut app);
    assert!(!screen.contains("pidgey"));
}

#[test]
fn test_notice_is_drawn_on_top() {
    let mut app = app_sized();
    app.update(Action::ExportFinished {
        name: "ditto".to_string(),
        result: Err(std::sync::Arc::new(ExportError::MissingSprite(
            "ditto".to_string(),
        ))),
    });

    let screen = draw(&mut app);
    assert!(screen.contains("Could not save ditto"));
    assert!(screen.contains("Press any key to dismiss"));
}

#[test]
fn test_render_records_area_for_hit_testing() {
    let mut app = App::new(AppSettings::default());
    draw(&mut app);
    assert_eq!(app.last_area.width, WIDTH);
    assert_eq!(app.last_area.height, HEIGHT);
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = App::new(AppSettings::default());
    app.update(Action::SearchFinished(Ok(report(&["pikachu", "dragonite"], &["x"]))));
    let backend = TestBackend::new(20, 6);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
}
