//! Search submission, loading state and report handling.

mod common;
mod helpers;

use common::*;
use helpers::*;
use pokedex_client::{NOT_FOUND_MESSAGE, ValidationError};
use pokedex_tui::app::{SEARCH_LABEL, SEARCHING_LABEL};

#[test]
fn test_empty_input_shows_validation_and_dispatches_nothing() {
    let mut app = app();

    let applied = dispatch(&mut app, Action::Input(enter_key()));

    assert!(
        !applied.iter().any(|a| matches!(a, Action::Search { .. })),
        "no lookup may be dispatched for an empty query"
    );
    assert_eq!(
        app.banner.as_deref(),
        Some("please provide at least one identifier")
    );
    assert!(!app.loading);
}

#[test]
fn test_separator_only_input_is_rejected() {
    let mut app = app();
    type_text(&mut app, " , ,, ");

    let follow_up = app.update(Action::SubmitSearch);

    assert!(follow_up.is_none());
    assert_eq!(
        app.banner.as_deref(),
        Some("please provide at least one identifier")
    );
}

#[test]
fn test_submit_dispatches_raw_query_and_enters_loading() {
    let mut app = app();
    type_text(&mut app, "pikachu, 1");

    let applied = dispatch(&mut app, Action::Input(enter_key()));

    assert!(matches!(
        applied.last(),
        Some(Action::Search { query }) if query == "pikachu, 1"
    ));
    assert!(app.loading);
    assert_eq!(app.search_label(), SEARCHING_LABEL);
}

#[test]
fn test_identifiers_are_not_normalized() {
    let mut app = app();
    type_text(&mut app, "Pikachu");

    let follow_up = app.update(Action::SubmitSearch);

    assert!(matches!(follow_up, Some(Action::Search { query }) if query == "Pikachu"));
}

#[test]
fn test_enter_is_ignored_while_loading() {
    let mut app = app();
    type_text(&mut app, "pikachu");
    dispatch(&mut app, Action::Input(enter_key()));
    assert!(app.loading);

    assert!(app.update(Action::Input(enter_key())).is_none());
    assert!(app.update(Action::SubmitSearch).is_none());
}

#[test]
fn test_submit_clears_previous_results() {
    let mut app = app();
    app.update(Action::SearchFinished(Ok(report(&["pikachu"], &["bogus"]))));
    assert_eq!(app.cards.len(), 1);
    assert!(app.banner.is_some());

    type_text(&mut app, "ditto");
    app.update(Action::SubmitSearch);

    assert!(app.cards.is_empty());
    assert!(app.banner.is_none());
    assert!(app.empty_message.is_none());
}

#[test]
fn test_partial_failure_renders_cards_and_banner() {
    let mut app = app();
    app.update(Action::SearchFinished(Ok(report(
        &["pikachu", "dragonite"],
        &["bogus123"],
    ))));

    let names: Vec<&str> = app.cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["pikachu", "dragonite"]);
    assert_eq!(app.banner.as_deref(), Some("Could not find: bogus123"));
    assert!(app.empty_message.is_none());
    assert_eq!(app.selected, 0);
}

#[test]
fn test_all_failed_shows_generic_message_and_banner() {
    let mut app = app();
    app.update(Action::SearchFinished(Ok(report(&[], &["foo", "bar"]))));

    assert!(app.cards.is_empty());
    assert_eq!(app.banner.as_deref(), Some("Could not find: foo, bar"));
    assert_eq!(app.empty_message.as_deref(), Some(NOT_FOUND_MESSAGE));
}

#[test]
fn test_validation_error_result_is_shown_inline() {
    let mut app = app();
    app.update(Action::SearchFinished(Err(ValidationError)));
    assert_eq!(
        app.banner.as_deref(),
        Some("please provide at least one identifier")
    );
}

#[test]
fn test_loading_resets_only_on_loading_false() {
    let mut app = app();
    type_text(&mut app, "pikachu");
    dispatch(&mut app, Action::SubmitSearch);

    app.update(Action::SearchFinished(Ok(report(&["pikachu"], &[]))));
    app.update(Action::Loading(false));

    assert!(!app.loading);
    assert_eq!(app.search_label(), SEARCH_LABEL);
    // A new search can start again.
    assert!(matches!(
        app.update(Action::SubmitSearch),
        Some(Action::Search { .. })
    ));
}

#[test]
fn test_up_down_move_card_selection() {
    let mut app = app();
    app.update(Action::SearchFinished(Ok(report(
        &["pikachu", "dragonite", "ditto"],
        &[],
    ))));

    app.update(Action::Input(down_key()));
    app.update(Action::Input(down_key()));
    app.update(Action::Input(down_key()));
    assert_eq!(app.selected, 2);

    app.update(Action::Input(up_key()));
    assert_eq!(app.selected_card().map(|c| c.name.as_str()), Some("dragonite"));
}

#[test]
fn test_ctrl_s_exports_selected_card() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with(AppSettings {
        export_dir: dir.path().to_path_buf(),
        ..AppSettings::default()
    });
    app.update(Action::SearchFinished(Ok(report(&["ditto", "pikachu"], &[]))));
    app.update(Action::Input(down_key()));

    let applied = dispatch(&mut app, Action::Input(ctrl_key('s')));

    match applied.last() {
        Some(Action::ExportSprite {
            name,
            sprite_url,
            dir: export_dir,
        }) => {
            assert_eq!(name, "pikachu");
            assert!(sprite_url.is_some());
            assert_eq!(export_dir, dir.path());
        }
        other => panic!("expected ExportSprite, got {other:?}"),
    }
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    assert!(matches!(
        app.update(Action::Input(ctrl_key('q'))),
        Some(Action::Quit)
    ));
    assert!(matches!(
        app.update(Action::Input(ctrl_key('c'))),
        Some(Action::Quit)
    ));
    // Plain 'q' is just text.
    type_text(&mut app, "q");
    assert_eq!(app.query(), "q");
}

#[test]
fn test_backspace_edits_query() {
    let mut app = app();
    type_text(&mut app, "mew");
    app.update(Action::Input(backspace_key()));
    assert_eq!(app.query(), "me");
}
