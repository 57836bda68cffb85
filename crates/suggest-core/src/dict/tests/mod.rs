
use super::DictionaryBuilder;

/// Builds a dictionary from (word, frequency) pairs.
pub(super) fn build(words: &[(&str, u8)]) -> Vec<u8> {
    let mut builder = DictionaryBuilder::new();
    for &(word, frequency) in words {
        builder.add_word(word, frequency).unwrap();
    }
    builder.build().unwrap()
}
