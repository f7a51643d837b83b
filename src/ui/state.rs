//! View state and its pure reducer.
//!
//! The UI holds one [`ViewState`] and advances it exclusively through
//! [`reduce`]: unidirectional data flow, with the ciphertext and the
//! alignment table recomputed from the state on every draw rather than
//! stored in it.

/// Largest valid shift key. The slider clamps here instead of wrapping.
pub const MAX_SHIFT: u8 = 25;

/// Everything the workbench view is rendered from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    /// The plaintext as typed, unfolded.
    pub text: String,
    /// Cursor offset into `text`, counted in characters.
    pub cursor: usize,
    /// Current shift key, `0..=MAX_SHIFT`.
    pub shift: u8,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_initial("HELLO WORLD", 3)
    }
}

impl ViewState {
    /// State seeded from configuration, cursor at the end of the text.
    pub fn with_initial(text: &str, shift: u8) -> Self {
        Self {
            cursor: text.chars().count(),
            text: text.to_string(),
            shift: shift.min(MAX_SHIFT),
        }
    }
}

/// User actions the reducer understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewIntent {
    /// Insert a printable character at the cursor.
    Insert(char),
    /// Remove the character before the cursor.
    Backspace,
    /// Remove the character under the cursor.
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    /// Raise the shift key by one, clamped at `MAX_SHIFT`.
    ShiftUp,
    /// Lower the shift key by one, clamped at zero.
    ShiftDown,
    /// Clear the text, keeping the shift.
    Clear,
}

/// Pure state transition: `(state, intent) -> state`. No side effects.
pub fn reduce(state: ViewState, intent: ViewIntent) -> ViewState {
    let ViewState {
        mut text,
        mut cursor,
        mut shift,
    } = state;
    let len = text.chars().count();

    match intent {
        ViewIntent::Insert(ch) => {
            if !ch.is_control() {
                text.insert(byte_offset(&text, cursor), ch);
                cursor += 1;
            }
        }
        ViewIntent::Backspace => {
            if cursor > 0 {
                cursor -= 1;
                text.remove(byte_offset(&text, cursor));
            }
        }
        ViewIntent::Delete => {
            if cursor < len {
                text.remove(byte_offset(&text, cursor));
            }
        }
        ViewIntent::CursorLeft => cursor = cursor.saturating_sub(1),
        ViewIntent::CursorRight => cursor = (cursor + 1).min(len),
        ViewIntent::CursorHome => cursor = 0,
        ViewIntent::CursorEnd => cursor = len,
        ViewIntent::ShiftUp => shift = (shift + 1).min(MAX_SHIFT),
        ViewIntent::ShiftDown => shift = shift.saturating_sub(1),
        ViewIntent::Clear => {
            text.clear();
            cursor = 0;
        }
    }

    ViewState {
        text,
        cursor,
        shift,
    }
}

/// Byte index of the character offset `cursor`, or the end of the string.
fn byte_offset(text: &str, cursor: usize) -> usize {
    text.char_indices()
        .nth(cursor)
        .map(|(index, _)| index)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_at_cursor_advances_it() {
        let state = ViewState::with_initial("AC", 0);
        let state = reduce(
            ViewState {
                cursor: 1,
                ..state
            },
            ViewIntent::Insert('B'),
        );
        assert_eq!(state.text, "ABC");
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn control_characters_are_not_inserted() {
        let state = reduce(ViewState::with_initial("A", 0), ViewIntent::Insert('\t'));
        assert_eq!(state.text, "A");
    }

    #[test]
    fn shift_clamps_at_both_ends() {
        let state = reduce(ViewState::with_initial("", MAX_SHIFT), ViewIntent::ShiftUp);
        assert_eq!(state.shift, MAX_SHIFT);
        let state = reduce(ViewState::with_initial("", 0), ViewIntent::ShiftDown);
        assert_eq!(state.shift, 0);
    }
}
