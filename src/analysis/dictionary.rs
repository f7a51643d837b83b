//! Plausibility check against an embedded common-word list.
//!
//! Frequency scoring alone misranks short texts, so candidate decryptions
//! are first checked for recognizable English words and the score only
//! breaks ties. The list is small on purpose: it has to recognize ordinary
//! sentences, not validate arbitrary vocabulary.

use once_cell::sync::Lazy;
use std::collections::HashSet;

#[rustfmt::skip]
const COMMON_WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i",
    "it", "for", "not", "on", "with", "he", "as", "you", "do", "at",
    "this", "but", "his", "by", "from", "they", "we", "say", "her", "she",
    "or", "an", "will", "my", "one", "all", "would", "there", "their", "what",
    "so", "up", "out", "if", "about", "who", "get", "which", "go", "me",
    "when", "make", "can", "like", "time", "no", "just", "him", "know", "take",
    "people", "into", "year", "your", "good", "some", "could", "them", "see", "other",
    "than", "then", "now", "look", "only", "come", "its", "over", "think", "also",
    "back", "after", "use", "two", "how", "our", "work", "first", "well", "way",
    "even", "new", "want", "because", "any", "these", "give", "day", "most", "us",
    "is", "are", "was", "were", "been", "being", "has", "had", "did", "does",
    "said", "each", "many", "more", "very", "where", "much", "should", "still", "such",
    "here", "both", "those", "while", "may", "down", "off", "before", "between", "under",
    "again", "never", "too", "own", "same", "right", "left", "long", "great", "little",
    "old", "man", "men", "woman", "women", "life", "world", "hand", "part", "place",
    "case", "week", "night", "home", "water", "room", "house", "word", "words", "side",
    "kind", "head", "far", "last", "next", "best", "open", "close", "high", "low",
    "hello", "yes", "please", "thanks", "thank", "dear", "love", "friend", "name", "today",
    "attack", "retreat", "enemy", "army", "north", "south", "east", "west", "dawn", "dusk",
    "midnight", "noon", "secret", "message", "meet", "send", "sent", "wait", "hold", "move",
    "king", "queen", "castle", "gate", "bridge", "river", "hill", "tower", "guard", "sword",
    "until", "arrives", "arrive", "tonight", "tomorrow", "morning", "evening", "soon", "late", "early",
    "quick", "brown", "fox", "jumps", "jumped", "lazy", "dog", "dogs", "cat", "cats",
    "valid", "english", "sentence", "text", "letter", "letters", "cipher", "code", "key", "shift",
    "test", "example", "sample", "simple", "plain", "clear", "true", "false", "read", "write",
];

static WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| COMMON_WORDS.iter().copied().collect());

/// Tiered check that `text` reads like English.
///
/// Splits on whitespace and keeps only fully alphabetic words,
/// lowercased. The acceptance bar scales with how many words there are:
/// more than five words requires the first five to all be known, three to
/// five requires at least two of the first three, one or two requires at
/// least one of the first two. Empty or letterless input never passes.
pub fn is_probable_english(text: &str) -> bool {
    let word_count = text.split_whitespace().count();
    let words: Vec<String> = text
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|word| !word.is_empty() && word.chars().all(|ch| ch.is_ascii_alphabetic()))
        .collect();
    let known = |take: usize| {
        words
            .iter()
            .take(take)
            .filter(|word| WORD_SET.contains(word.as_str()))
            .count()
    };

    if word_count > 5 {
        known(5) >= 5
    } else if word_count > 2 {
        known(3) >= 2
    } else {
        known(2) >= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_sentences_pass() {
        assert!(is_probable_english("This is a valid English sentence"));
        assert!(is_probable_english("HELLO WORLD"));
        assert!(is_probable_english("the quick brown fox"));
    }

    #[test]
    fn shifted_gibberish_fails() {
        assert!(!is_probable_english("Xlmw mw rsx e zepmh Irkpmwl wirxirgi"));
        assert!(!is_probable_english("KHOOR ZRUOG"));
    }

    #[test]
    fn empty_and_letterless_input_fails() {
        assert!(!is_probable_english(""));
        assert!(!is_probable_english("12 34"));
    }

    #[test]
    fn punctuation_excludes_a_word_but_not_the_sentence() {
        // "World!" is dropped by the alphabetic filter; "Hello" still hits.
        assert!(is_probable_english("Hello World!"));
    }
}
