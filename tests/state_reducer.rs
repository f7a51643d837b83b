use cipherscope::ui::state::{reduce, ViewIntent, ViewState, MAX_SHIFT};

fn empty() -> ViewState {
    ViewState::with_initial("", 3)
}

#[test]
fn with_initial_puts_the_cursor_at_the_end() {
    let state = ViewState::with_initial("HELLO", 3);
    assert_eq!(state.cursor, 5);
    assert_eq!(state.shift, 3);
}

#[test]
fn with_initial_clamps_an_oversized_shift() {
    let state = ViewState::with_initial("", 99);
    assert_eq!(state.shift, MAX_SHIFT);
}

#[test]
fn typing_appends_at_the_end() {
    let mut state = empty();
    for ch in "HI".chars() {
        state = reduce(state, ViewIntent::Insert(ch));
    }
    assert_eq!(state.text, "HI");
    assert_eq!(state.cursor, 2);
}

#[test]
fn insert_in_the_middle_after_cursor_left() {
    let state = ViewState::with_initial("HT", 0);
    let state = reduce(state, ViewIntent::CursorLeft);
    let state = reduce(state, ViewIntent::Insert('A'));
    assert_eq!(state.text, "HAT");
    assert_eq!(state.cursor, 2);
}

#[test]
fn backspace_at_the_start_is_a_no_op() {
    let state = reduce(ViewState::with_initial("", 0), ViewIntent::Backspace);
    assert_eq!(state.text, "");
    assert_eq!(state.cursor, 0);
}

#[test]
fn delete_removes_under_the_cursor() {
    let state = ViewState::with_initial("ABC", 0);
    let state = reduce(state, ViewIntent::CursorHome);
    let state = reduce(state, ViewIntent::Delete);
    assert_eq!(state.text, "BC");
    assert_eq!(state.cursor, 0);
}

#[test]
fn delete_at_the_end_is_a_no_op() {
    let state = reduce(ViewState::with_initial("ABC", 0), ViewIntent::Delete);
    assert_eq!(state.text, "ABC");
}

#[test]
fn cursor_movement_clamps_to_the_text() {
    let state = ViewState::with_initial("AB", 0);
    let state = reduce(state, ViewIntent::CursorRight);
    assert_eq!(state.cursor, 2);
    let state = reduce(state, ViewIntent::CursorHome);
    let state = reduce(state, ViewIntent::CursorLeft);
    assert_eq!(state.cursor, 0);
    let state = reduce(state, ViewIntent::CursorEnd);
    assert_eq!(state.cursor, 2);
}

#[test]
fn shift_steps_and_clamps() {
    let mut state = ViewState::with_initial("", 24);
    state = reduce(state, ViewIntent::ShiftUp);
    assert_eq!(state.shift, 25);
    state = reduce(state, ViewIntent::ShiftUp);
    assert_eq!(state.shift, 25);
    for _ in 0..30 {
        state = reduce(state, ViewIntent::ShiftDown);
    }
    assert_eq!(state.shift, 0);
}

#[test]
fn clear_empties_the_text_but_keeps_the_shift() {
    let state = reduce(ViewState::with_initial("HELLO", 9), ViewIntent::Clear);
    assert_eq!(state.text, "");
    assert_eq!(state.cursor, 0);
    assert_eq!(state.shift, 9);
}

#[test]
fn multibyte_characters_edit_cleanly() {
    let state = ViewState::with_initial("é", 0);
    let state = reduce(state, ViewIntent::Insert('ü'));
    assert_eq!(state.text, "éü");
    assert_eq!(state.cursor, 2);
    let state = reduce(state, ViewIntent::Backspace);
    let state = reduce(state, ViewIntent::Backspace);
    assert_eq!(state.text, "");
    assert_eq!(state.cursor, 0);
}
