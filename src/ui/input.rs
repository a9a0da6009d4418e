use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, PopupKind};
use crate::ui::route::Route;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if let Some(kind) = app.popup_kind() {
        handle_popup_key(app, kind, key);
        return;
    }

    match key.code {
        KeyCode::F(n) => {
            if let Some(route) = Route::ALL.iter().find(|r| r.hotkey() == n) {
                app.navigate(*route);
            }
            return;
        }
        KeyCode::Tab => {
            app.navigate(app.route().next());
            return;
        }
        KeyCode::BackTab => {
            app.navigate(app.route().prev());
            return;
        }
        _ => {}
    }

    match app.route() {
        Route::Data => handle_data_key(app, key),
        Route::Home | Route::AboutUs => {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                app.request_quit();
            }
        }
    }
}

fn handle_popup_key(app: &mut App, kind: PopupKind, key: KeyEvent) {
    match kind {
        PopupKind::CategoryFilter => match key.code {
            KeyCode::Esc => app.close_popup(),
            KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'f') && has_ctrl(key) => {
                app.close_popup()
            }
            KeyCode::Up => app.move_filter_selection(-1),
            KeyCode::Down => app.move_filter_selection(1),
            KeyCode::Enter => app.confirm_filter_selection(),
            _ => {}
        },
    }
}

fn handle_data_key(app: &mut App, key: KeyEvent) {
    // The banner replaces the table; the only action is a reload.
    if app.has_error() {
        if key.code == KeyCode::Enter {
            app.mount_data_page();
        }
        return;
    }

    if is_ctrl_char(key, 'f') {
        app.open_filter_popup();
        return;
    }
    if is_ctrl_char(key, 'u') {
        app.on_search_clear();
        return;
    }

    match key.code {
        KeyCode::Enter => app.on_search_commit(),
        KeyCode::Backspace => app.on_search_backspace(),
        KeyCode::Left | KeyCode::PageUp => app.on_prev_page(),
        KeyCode::Right | KeyCode::PageDown => app.on_next_page(),
        KeyCode::Char(ch) if !has_ctrl(key) && !key.modifiers.contains(KeyModifiers::ALT) => {
            app.on_search_char(ch)
        }
        _ => {}
    }
}

fn has_ctrl(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && has_ctrl(key)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
