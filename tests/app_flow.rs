//! Key handling and the fetches it triggers.

mod common;

use common::{ctrl, drain, key, make_app, page};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use product_dashboard::api::{FetchError, ProductQuery};
use product_dashboard::ui::app::{App, PopupKind, UiCommand};
use product_dashboard::ui::input::handle_key;
use product_dashboard::ui::route::Route;

fn queries(commands: Vec<UiCommand>) -> Vec<ProductQuery> {
    commands
        .into_iter()
        .map(|UiCommand::Fetch { query, .. }| query)
        .collect()
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        handle_key(app, key(KeyCode::Char(ch)));
    }
}

/// Complete the in-flight fetch with `count` of `total` records.
fn settle(app: &mut App, count: u64, total: u64, skip: u64) {
    let request = app.store().state().latest_request;
    app.on_fetch_completed(request, Ok(page(count, total, skip)));
}

#[test]
fn test_starts_on_home_without_fetch() {
    let (mut app, mut rx) = make_app();
    app.start();

    assert_eq!(app.route(), Route::Home);
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn test_function_keys_navigate() {
    let (mut app, mut rx) = make_app();
    app.start();

    handle_key(&mut app, key(KeyCode::F(2)));
    assert_eq!(app.route(), Route::Data);
    assert_eq!(queries(drain(&mut rx)), vec![ProductQuery::first_page()]);

    handle_key(&mut app, key(KeyCode::F(3)));
    assert_eq!(app.route(), Route::AboutUs);
    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.route(), Route::Home);
    handle_key(&mut app, key(KeyCode::BackTab));
    assert_eq!(app.route(), Route::AboutUs);
}

#[test]
fn test_reselecting_data_does_not_refetch() {
    let (mut app, mut rx) = make_app();
    app.navigate(Route::Data);
    drain(&mut rx);

    handle_key(&mut app, key(KeyCode::F(2)));
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn test_typing_then_enter_searches() {
    let (mut app, mut rx) = make_app();
    app.navigate(Route::Data);
    settle(&mut app, 12, 194, 0);
    drain(&mut rx);

    type_text(&mut app, "phone");
    assert!(drain(&mut rx).is_empty());
    assert_eq!(app.table().state().search, "phone");

    handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(queries(drain(&mut rx)), vec![ProductQuery::search("phone")]);
    assert!(app.store().state().loading);
}

#[test]
fn test_backspace_to_empty_reloads_listing() {
    let (mut app, mut rx) = make_app();
    app.navigate(Route::Data);
    settle(&mut app, 12, 194, 0);
    type_text(&mut app, "ab");
    drain(&mut rx);

    handle_key(&mut app, key(KeyCode::Backspace));
    assert!(drain(&mut rx).is_empty());
    handle_key(&mut app, key(KeyCode::Backspace));
    assert_eq!(queries(drain(&mut rx)), vec![ProductQuery::first_page()]);
}

#[test]
fn test_q_is_search_text_on_data_page() {
    let (mut app, _rx) = make_app();
    app.navigate(Route::Data);
    settle(&mut app, 12, 194, 0);

    handle_key(&mut app, key(KeyCode::Char('q')));
    assert!(!app.should_quit());
    assert_eq!(app.table().state().search, "q");
}

#[test]
fn test_quit_keys() {
    let (mut app, _rx) = make_app();
    app.start();
    handle_key(&mut app, key(KeyCode::Char('q')));
    assert!(app.should_quit());

    let (mut app, _rx) = make_app();
    app.navigate(Route::Data);
    handle_key(&mut app, ctrl('q'));
    assert!(app.should_quit());
}

#[test]
fn test_release_events_are_ignored() {
    let (mut app, _rx) = make_app();
    app.start();
    let mut release = KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;

    handle_key(&mut app, release);
    assert_eq!(app.route(), Route::Home);
}

#[test]
fn test_paging_keys() {
    let (mut app, mut rx) = make_app();
    app.navigate(Route::Data);
    settle(&mut app, 12, 100, 0);
    drain(&mut rx);

    handle_key(&mut app, key(KeyCode::Left));
    assert!(drain(&mut rx).is_empty());

    handle_key(&mut app, key(KeyCode::Right));
    assert_eq!(
        queries(drain(&mut rx)),
        vec![ProductQuery::first_page().with_skip(12)]
    );
    settle(&mut app, 12, 100, 12);

    handle_key(&mut app, key(KeyCode::PageUp));
    assert_eq!(queries(drain(&mut rx)), vec![ProductQuery::first_page()]);
}

#[test]
fn test_filter_popup_selects_category() {
    let (mut app, mut rx) = make_app();
    app.navigate(Route::Data);
    settle(&mut app, 12, 194, 0);
    type_text(&mut app, "pho");
    drain(&mut rx);

    handle_key(&mut app, ctrl('f'));
    assert_eq!(app.popup_kind(), Some(PopupKind::CategoryFilter));
    assert_eq!(app.filter_selection(), 0);

    handle_key(&mut app, key(KeyCode::Down));
    handle_key(&mut app, key(KeyCode::Down));
    handle_key(&mut app, key(KeyCode::Enter));

    assert_eq!(app.popup_kind(), None);
    assert_eq!(
        queries(drain(&mut rx)),
        vec![ProductQuery::category("fragrances")]
    );
    assert_eq!(app.table().state().filter, "fragrances");
    assert_eq!(app.table().state().search, "");
}

#[test]
fn test_filter_popup_preselects_active_category() {
    let (mut app, mut rx) = make_app();
    app.navigate(Route::Data);
    settle(&mut app, 12, 194, 0);

    handle_key(&mut app, ctrl('f'));
    handle_key(&mut app, key(KeyCode::Down));
    handle_key(&mut app, key(KeyCode::Down));
    handle_key(&mut app, key(KeyCode::Enter));
    settle(&mut app, 5, 5, 0);
    drain(&mut rx);

    handle_key(&mut app, ctrl('f'));
    assert_eq!(app.filter_selection(), 2);

    handle_key(&mut app, key(KeyCode::Esc));
    assert_eq!(app.table().state().filter, "fragrances");
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn test_filter_popup_wraps_and_escapes() {
    let (mut app, mut rx) = make_app();
    app.navigate(Route::Data);
    settle(&mut app, 12, 194, 0);
    drain(&mut rx);

    handle_key(&mut app, ctrl('f'));
    handle_key(&mut app, key(KeyCode::Up));
    assert_eq!(app.filter_selection(), app.filter_options().values.len());

    handle_key(&mut app, key(KeyCode::Esc));
    assert_eq!(app.popup_kind(), None);
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn test_error_banner_reload() {
    let (mut app, mut rx) = make_app();
    app.navigate(Route::Data);
    let request = app.store().state().latest_request;
    app.on_fetch_completed(request, Err(FetchError::network("Network Error")));
    drain(&mut rx);
    assert!(app.has_error());

    // Input other than Enter is swallowed while the banner shows
    handle_key(&mut app, key(KeyCode::Char('x')));
    assert_eq!(app.table().state().search, "");
    assert!(drain(&mut rx).is_empty());

    handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(queries(drain(&mut rx)), vec![ProductQuery::first_page()]);
    assert!(!app.has_error());
}

#[test]
fn test_remount_resets_table() {
    let (mut app, mut rx) = make_app();
    app.navigate(Route::Data);
    settle(&mut app, 12, 100, 0);
    handle_key(&mut app, key(KeyCode::Right));
    settle(&mut app, 12, 100, 12);

    app.navigate(Route::Home);
    app.navigate(Route::Data);

    assert_eq!(app.table().state().page, 1);
    assert_eq!(
        queries(drain(&mut rx)).last(),
        Some(&ProductQuery::first_page())
    );
}

#[test]
fn test_missing_worker_surfaces_error() {
    let mut app = App::new(&product_dashboard::config::Config::default());
    app.navigate(Route::Data);

    let state = app.store().state();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Fetch worker is not running"));
}
