//! Letter-frequency statistics and the English-likeness score.

use crate::cipher::{position_of, ALPHABET_LEN};

/// English letter frequencies in percent, indexed by alphabet position,
/// per Wikipedia's letter-frequency table.
const ENGLISH_FREQUENCIES: [f64; ALPHABET_LEN] = [
    8.2,   // A
    1.5,   // B
    2.8,   // C
    4.3,   // D
    12.7,  // E
    2.2,   // F
    2.0,   // G
    6.1,   // H
    7.0,   // I
    0.15,  // J
    0.77,  // K
    4.0,   // L
    2.4,   // M
    6.7,   // N
    7.5,   // O
    1.9,   // P
    0.095, // Q
    6.0,   // R
    6.3,   // S
    9.1,   // T
    2.8,   // U
    0.98,  // V
    2.4,   // W
    0.15,  // X
    2.0,   // Y
    0.074, // Z
];

/// Percentage frequency of each letter in `text`, indexed by alphabet
/// position. Case-insensitive; non-letters are ignored. All zeros when the
/// text contains no letters.
pub fn letter_frequencies(text: &str) -> [f64; ALPHABET_LEN] {
    let mut counts = [0usize; ALPHABET_LEN];
    let mut total = 0usize;
    for ch in text.chars() {
        if let Some(position) = position_of(ch.to_ascii_uppercase()) {
            counts[position] += 1;
            total += 1;
        }
    }

    let mut frequencies = [0.0; ALPHABET_LEN];
    if total == 0 {
        return frequencies;
    }
    for (frequency, count) in frequencies.iter_mut().zip(counts) {
        *frequency = count as f64 / total as f64 * 100.0;
    }
    frequencies
}

/// Similarity of a frequency profile to standard English, in `0.0..=100.0`.
///
/// Only letters actually present contribute to the deviation sum, so a
/// short text is not penalized for the letters it never had a chance to
/// use. 100 would be a perfect match.
pub fn frequency_score(frequencies: &[f64; ALPHABET_LEN]) -> f64 {
    // Worst case: every observed letter is maximally far from English
    // (the full 100% mass on top of the whole reference distribution).
    let max_deviation: f64 = ENGLISH_FREQUENCIES.iter().sum::<f64>() + 100.0;

    let deviation: f64 = frequencies
        .iter()
        .zip(ENGLISH_FREQUENCIES)
        .filter(|(observed, _)| **observed > 0.0)
        .map(|(observed, english)| (observed - english).abs())
        .sum();

    let score = (max_deviation - deviation) / max_deviation * 100.0;
    score.clamp(0.0, 100.0)
}
