mod bigram;
mod proptest_trie;

use crate::dict::DictionaryBuilder;
use crate::settings::Settings;

use super::{BinaryDictionary, Candidate, InputCodes};

pub(super) fn build(words: &[(&str, u8)], bigrams: &[(&str, &str, u8)]) -> Vec<u8> {
    let mut builder = DictionaryBuilder::new();
    for &(word, frequency) in words {
        builder.add_word(word, frequency).unwrap();
    }
    for &(previous, next, frequency) in bigrams {
        builder.add_bigram(previous, next, frequency).unwrap();
    }
    builder.build().unwrap()
}

pub(super) fn make_dict(words: &[(&str, u8)]) -> BinaryDictionary {
    BinaryDictionary::with_settings(build(words, &[]), test_settings()).unwrap()
}

/// Defaults with the retry passes off, so single-pass behavior is visible.
pub(super) fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.search.missing_characters = false;
    settings
}

pub(super) fn sample_dict() -> BinaryDictionary {
    BinaryDictionary::with_settings(
        build(
            &[
                ("the", 255),
                ("then", 120),
                ("there", 150),
                ("they", 160),
                ("cat", 200),
                ("car", 180),
                ("care", 150),
                ("Cat", 40),
                ("don't", 90),
                ("dont", 20),
            ],
            &[("the", "cat", 30), ("the", "car", 60), ("the", "there", 5)],
        ),
        test_settings(),
    )
    .unwrap()
}

/// One position per entry; each string lists that position's alternatives,
/// closest first.
pub(super) fn keys(positions: &[&str]) -> InputCodes {
    let mut input = InputCodes::new(4);
    for alternatives in positions {
        let codes: Vec<u16> = alternatives.encode_utf16().collect();
        input.push(&codes);
    }
    input
}

pub(super) fn words(candidates: &[Candidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.word.as_str()).collect()
}
