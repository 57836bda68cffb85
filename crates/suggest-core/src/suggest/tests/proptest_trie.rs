//! Property-based tests over randomly generated word sets.

use std::collections::BTreeMap;

use proptest::prelude::*;

use super::{build, test_settings};
use crate::suggest::{BinaryDictionary, RankedList, Ranking, TYPED_WORD_SCORE};
use crate::unicode::encode;

fn arb_words() -> impl Strategy<Value = BTreeMap<String, u8>> {
    prop::collection::btree_map("[a-e]{1,6}", any::<u8>(), 1..40)
}

fn open(words: &BTreeMap<String, u8>) -> BinaryDictionary {
    let pairs: Vec<(&str, u8)> = words.iter().map(|(w, &f)| (w.as_str(), f)).collect();
    BinaryDictionary::with_settings(build(&pairs, &[]), test_settings()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn round_trip_reproduces_words(words in arb_words()) {
        let dict = open(&words);
        let listed: BTreeMap<String, u8> = dict.words().unwrap().into_iter().collect();
        prop_assert_eq!(listed, words);
    }

    #[test]
    fn inserted_words_are_valid(words in arb_words(), suffix in "[f-h]{1,2}") {
        let dict = open(&words);
        for word in words.keys() {
            prop_assert!(dict.is_valid_word(word).unwrap());
            prop_assert!(dict.is_valid_word(&word.to_uppercase()).unwrap());
            let longer = format!("{word}{suffix}");
            prop_assert!(!dict.is_valid_word(&longer).unwrap());
        }
    }

    #[test]
    fn typed_word_heads_its_suggestions(words in arb_words()) {
        let dict = open(&words);
        for word in words.keys() {
            let result = dict.suggestions(&dict.typed_input(word)).unwrap();
            prop_assert_eq!(&result.candidates[0].word, word);
            prop_assert_eq!(result.candidates[0].score, TYPED_WORD_SCORE);
        }
    }

    #[test]
    fn suggestions_sorted_and_bounded(words in arb_words(), typed in "[a-f]{1,5}") {
        let dict = open(&words);
        let result = dict.suggestions(&dict.typed_input(&typed)).unwrap();
        prop_assert!(result.candidates.len() <= dict.settings().limits.max_words);
        prop_assert!(result.candidates.windows(2).all(|w| w[0].score >= w[1].score));
        for candidate in &result.candidates {
            prop_assert!(words.contains_key(&candidate.word));
        }
    }

    #[test]
    fn dropped_key_recovered_by_retry(words in arb_words(), pick in any::<prop::sample::Index>()) {
        let (word, _) = words.iter().nth(pick.index(words.len())).unwrap();
        prop_assume!(word.len() >= 2);
        let dict = BinaryDictionary::with_settings(
            open(&words).as_bytes().to_vec(),
            crate::settings::Settings::default(),
        )
        .unwrap();
        let mut typed = word.clone();
        typed.remove(word.len() / 2);
        let result = dict.suggestions(&dict.typed_input(&typed)).unwrap();
        prop_assert!(!result.candidates.is_empty());
    }

    #[test]
    fn ranked_list_invariants(
        offers in prop::collection::vec(("[a-d]{1,2}", 0u32..50), 0..60),
        capacity in 0usize..8,
    ) {
        let mut list = RankedList::new(capacity);
        for (word, score) in &offers {
            list.offer(&encode(word), *score);
        }
        prop_assert!(list.len() <= capacity);
        let scores: Vec<u32> = list.scores().collect();
        prop_assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        prop_assert!(scores.iter().all(|&s| s > 0));
        let mut listed: Vec<String> = list.words().collect();
        listed.sort();
        listed.dedup();
        prop_assert_eq!(listed.len(), list.len());
    }
}
