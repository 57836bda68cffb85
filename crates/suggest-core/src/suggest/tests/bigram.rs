use super::{keys, make_dict, sample_dict, test_settings, words};
use crate::dict::DictError;
use crate::suggest::bigram::reconstruct;
use crate::suggest::BinaryDictionary;
use crate::unicode::decode;

#[test]
fn test_pure_frequency_ranking() {
    let dict = sample_dict();
    let result = dict.bigrams("the", &dict.input_codes()).unwrap();
    assert_eq!(words(&result), ["car", "cat", "there"]);
    let scores: Vec<u32> = result.iter().map(|c| c.score).collect();
    // bigram × (1 + unigram / 32)
    assert_eq!(scores, [60 * 6, 30 * 7, 5 * 5]);
}

#[test]
fn test_input_filters_and_weighs() {
    let dict = sample_dict();
    let result = dict.bigrams("the", &keys(&["c"])).unwrap();
    assert_eq!(words(&result), ["car", "cat"]);
    assert_eq!(result[0].score, 60 * 6 * 2);

    let result = dict.bigrams("the", &keys(&["xt"])).unwrap();
    assert_eq!(words(&result), ["there"]);
    assert_eq!(result[0].score, 5 * 5);
}

#[test]
fn test_previous_word_case_insensitive() {
    let dict = sample_dict();
    let upper = dict.bigrams("THE", &dict.input_codes()).unwrap();
    let lower = dict.bigrams("the", &dict.input_codes()).unwrap();
    assert_eq!(upper, lower);
}

#[test]
fn test_word_without_chain_is_empty() {
    let dict = sample_dict();
    assert!(dict.bigrams("cat", &dict.input_codes()).unwrap().is_empty());
    assert!(dict.bigrams("zebra", &dict.input_codes()).unwrap().is_empty());
    assert!(dict.bigrams("", &dict.input_codes()).unwrap().is_empty());
}

#[test]
fn test_dictionary_without_bigrams_is_empty() {
    let dict = make_dict(&[("the", 10), ("cat", 10)]);
    assert!(!dict.header().has_bigrams);
    assert!(dict.bigrams("the", &dict.input_codes()).unwrap().is_empty());
}

#[test]
fn test_chain_read_is_capped() {
    let mut settings = test_settings();
    settings.limits.max_bigrams = 1;
    let dict =
        BinaryDictionary::with_settings(sample_dict().as_bytes().to_vec(), settings).unwrap();
    let result = dict.bigrams("the", &dict.input_codes()).unwrap();
    assert_eq!(words(&result), ["car"]);
}

#[test]
fn test_reconstruct_every_terminal() {
    let dict = sample_dict();
    let data = dict.as_bytes();
    for (word, _) in dict.words().unwrap() {
        let codes: Vec<u16> = word.encode_utf16().collect();
        let node = crate::suggest::validate::find_word(data, &codes)
            .unwrap()
            .unwrap();
        let (spelled, target) = reconstruct(data, node.offset, 48).unwrap();
        assert_eq!(target.offset, node.offset);
        // Case-insensitive lookup may land on a differently cased twin.
        assert_eq!(decode(&spelled).to_lowercase(), word.to_lowercase());
    }
}

#[test]
fn test_dangling_target() {
    // 'a' with a chain pointing at its own flags byte.
    let data = vec![200, 1, 1, b'a', 0x80, 10, 0x80, 0x00, 0x04, 0x05];
    let dict = BinaryDictionary::with_settings(data, test_settings()).unwrap();
    let err = dict.bigrams("a", &dict.input_codes()).unwrap_err();
    assert!(matches!(err, DictError::DanglingBigram(4)));
}

#[test]
fn test_reconstruct_respects_word_length() {
    let dict = sample_dict();
    let data = dict.as_bytes();
    let codes: Vec<u16> = "there".encode_utf16().collect();
    let node = crate::suggest::validate::find_word(data, &codes)
        .unwrap()
        .unwrap();
    assert!(reconstruct(data, node.offset, 6).is_ok());
    assert!(matches!(
        reconstruct(data, node.offset, 5),
        Err(DictError::DanglingBigram(_))
    ));
}

#[test]
fn test_children_flag_must_match_target() {
    // 'a' carries one entry pointing at the leaf 'b' at offset 10.
    let mut data = vec![
        200, 1, 2, b'a', 0x80, 10, 0x80, 0x00, 0x0A, 5, b'b', 0x80, 20, 0x00,
    ];
    let dict = BinaryDictionary::with_settings(data.clone(), test_settings()).unwrap();
    let result = dict.bigrams("a", &dict.input_codes()).unwrap();
    assert_eq!(words(&result), ["b"]);
    assert_eq!(result[0].score, 5);

    data[6] |= 0x40;
    let dict = BinaryDictionary::with_settings(data, test_settings()).unwrap();
    let err = dict.bigrams("a", &dict.input_codes()).unwrap_err();
    assert!(matches!(err, DictError::DanglingBigram(10)));
}
