//! The alignment view model behind the two-row alphabet table.

use std::collections::BTreeSet;

use crate::cipher::alphabet::{position_of, symbol_at, ALPHABET, ALPHABET_LEN};
use crate::cipher::transform::normalize_shift;

/// Data needed to render the plaintext/ciphertext alphabet correspondence.
///
/// `bottom_row[i]` is the letter `top_row[i]` encrypts to under the shift
/// this alignment was built with. Both rows are produced by the same
/// rotation the transform uses, so the correspondence cannot drift from
/// the actual cipher output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alignment {
    /// The alphabet in natural order.
    pub top_row: [char; ALPHABET_LEN],
    /// The alphabet rotated left by the normalized shift.
    pub bottom_row: [char; ALPHABET_LEN],
    /// Distinct uppercase letters occurring in the input text. Queried for
    /// membership only; columns whose top-row letter is in this set get a
    /// highlight marker.
    pub active: BTreeSet<char>,
}

impl Alignment {
    pub fn new(text: &str, shift: i32) -> Self {
        let shift = usize::from(normalize_shift(shift));

        let mut bottom_row = ALPHABET;
        for (index, cell) in bottom_row.iter_mut().enumerate() {
            *cell = symbol_at((index + shift) % ALPHABET_LEN);
        }

        let active = text
            .chars()
            .map(|ch| ch.to_ascii_uppercase())
            .filter(|ch| position_of(*ch).is_some())
            .collect();

        Self {
            top_row: ALPHABET,
            bottom_row,
            active,
        }
    }

    /// Whether the column for `symbol` should carry a highlight marker.
    pub fn is_active(&self, symbol: char) -> bool {
        self.active.contains(&symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_shift_rows_match() {
        let alignment = Alignment::new("", 0);
        assert_eq!(alignment.top_row, alignment.bottom_row);
    }

    #[test]
    fn bottom_row_rotates_left() {
        let alignment = Alignment::new("", 3);
        assert_eq!(alignment.bottom_row[0], 'D');
        assert_eq!(alignment.bottom_row[22], 'Z');
        assert_eq!(alignment.bottom_row[23], 'A');
        assert_eq!(alignment.bottom_row[25], 'C');
    }

    #[test]
    fn active_set_folds_case_and_drops_non_letters() {
        let alignment = Alignment::new("Hi, hi! 42", 1);
        let expected: BTreeSet<char> = ['H', 'I'].into_iter().collect();
        assert_eq!(alignment.active, expected);
    }

    #[test]
    fn spaces_are_never_active() {
        let alignment = Alignment::new("A B", 0);
        assert!(!alignment.is_active(' '));
        assert!(alignment.is_active('A'));
        assert!(alignment.is_active('B'));
    }
}
