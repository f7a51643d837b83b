//! Brute-force shift recovery.

use tracing::debug;

use crate::analysis::dictionary::is_probable_english;
use crate::analysis::frequency::{frequency_score, letter_frequencies};
use crate::cipher::decrypt;

/// One decryption attempt under a specific shift.
#[derive(Clone, Debug, PartialEq)]
pub struct ShiftCandidate {
    /// The shift this candidate was decrypted with.
    pub shift: u8,
    /// The decrypted text.
    pub plaintext: String,
    /// English-likeness of the decrypted text, `0.0..=100.0`.
    pub score: f64,
    /// Whether the decrypted text passed the common-word check.
    pub dictionary_hit: bool,
}

/// Ranked result of trying every shift against a ciphertext.
#[derive(Clone, Debug, PartialEq)]
pub struct CrackReport {
    /// English-likeness of the ciphertext as given, for comparison.
    pub input_score: f64,
    /// All 26 candidates, best first: dictionary hits before misses, then
    /// by descending score.
    pub candidates: Vec<ShiftCandidate>,
}

impl CrackReport {
    /// The top-ranked candidate. The report always holds all 26 shifts, so
    /// there is always one.
    pub fn best(&self) -> &ShiftCandidate {
        &self.candidates[0]
    }

    /// Whether the top candidate actually passed the word check, as
    /// opposed to merely having the least-bad score.
    pub fn is_confident(&self) -> bool {
        self.best().dictionary_hit
    }
}

/// Try every shift in `0..26` against `ciphertext` and rank the results.
///
/// Candidates that pass the common-word check rank above all that do not;
/// within each group the frequency score decides. The ciphertext's own
/// score is kept so callers can show how far the best candidate moved the
/// text toward English.
pub fn crack(ciphertext: &str) -> CrackReport {
    let input_score = frequency_score(&letter_frequencies(ciphertext));

    let mut candidates: Vec<ShiftCandidate> = (0..26u8)
        .map(|shift| {
            let plaintext = decrypt(ciphertext, i32::from(shift));
            let score = frequency_score(&letter_frequencies(&plaintext));
            let dictionary_hit = is_probable_english(&plaintext);
            ShiftCandidate {
                shift,
                plaintext,
                score,
                dictionary_hit,
            }
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.dictionary_hit
            .cmp(&a.dictionary_hit)
            .then(b.score.total_cmp(&a.score))
    });

    let best = &candidates[0];
    debug!(
        shift = best.shift,
        score = best.score,
        dictionary_hit = best.dictionary_hit,
        "ranked shift candidates"
    );

    CrackReport {
        input_score,
        candidates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::encrypt;

    #[test]
    fn recovers_the_shift_of_an_english_sentence() {
        let cipher = encrypt("THE QUICK BROWN FOX", 7);
        let report = crack(&cipher);
        assert_eq!(report.best().shift, 7);
        assert_eq!(report.best().plaintext, "THE QUICK BROWN FOX");
        assert!(report.is_confident());
    }

    #[test]
    fn report_always_has_all_shifts() {
        let report = crack("QQQQ");
        assert_eq!(report.candidates.len(), 26);
        let mut shifts: Vec<u8> = report.candidates.iter().map(|c| c.shift).collect();
        shifts.sort_unstable();
        assert_eq!(shifts, (0..26).collect::<Vec<u8>>());
    }

    #[test]
    fn zero_shift_of_plain_english_ranks_first() {
        let report = crack("ATTACK THE CASTLE AT DAWN AND HOLD THE GATE");
        assert_eq!(report.best().shift, 0);
        assert!(report.is_confident());
    }
}
