use crate::ui::app::App;
use crate::ui::state::ViewIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.popup_open() {
        if matches!(key.code, KeyCode::Esc) || is_ctrl_char(key, 'k') {
            app.close_popup();
        }
        return;
    }

    if is_ctrl_char(key, 'k') {
        app.open_analysis();
        return;
    }
    if is_ctrl_char(key, 'l') {
        app.dispatch(ViewIntent::Clear);
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }

    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Char(ch) => app.dispatch(ViewIntent::Insert(ch)),
        KeyCode::Backspace => app.dispatch(ViewIntent::Backspace),
        KeyCode::Delete => app.dispatch(ViewIntent::Delete),
        KeyCode::Left => app.dispatch(ViewIntent::CursorLeft),
        KeyCode::Right => app.dispatch(ViewIntent::CursorRight),
        KeyCode::Home => app.dispatch(ViewIntent::CursorHome),
        KeyCode::End => app.dispatch(ViewIntent::CursorEnd),
        KeyCode::Up => app.dispatch(ViewIntent::ShiftUp),
        KeyCode::Down => app.dispatch(ViewIntent::ShiftDown),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
