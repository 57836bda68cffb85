use std::path::Path;

use serde::Serialize;

use suggest_core::{Candidate, InputCodes, RankedList, SearchOptions};

use crate::dict_file::{self, MappedDictionary};
use crate::proximity;

#[derive(Serialize)]
struct SuggestOutput<'a> {
    typed: &'a str,
    candidates: &'a [Candidate],
    next_letters: Vec<(char, u32)>,
}

fn open(file: &str) -> MappedDictionary {
    die!(dict_file::open(Path::new(file)), "Error opening {file}: {}")
}

fn input(dict: &MappedDictionary, typed: &str) -> InputCodes {
    proximity::input_for(typed, dict.settings().limits.max_alternatives)
}

fn print_candidates(candidates: &[Candidate]) {
    if candidates.is_empty() {
        println!("(no candidates)");
    }
    for (i, c) in candidates.iter().enumerate() {
        println!("{:>3}  {:<20} {}", i + 1, c.word, c.score);
    }
}

fn print_json<T: Serialize>(value: &T) {
    let json = die!(serde_json::to_string_pretty(value), "Error encoding JSON: {}");
    println!("{json}");
}

pub fn check(file: &str, word: &str) {
    let dict = open(file);
    match die!(dict.frequency(word), "Error: {}") {
        Some(frequency) => println!("{word}: valid (frequency {frequency})"),
        None => {
            println!("{word}: not found");
            std::process::exit(1);
        }
    }
}

/// Suggestions for `typed`. With `skip`, only that one skip pass runs and
/// the retry driver is bypassed.
pub fn suggest(file: &str, typed: &str, max_edit: Option<usize>, skip: Option<usize>, json: bool) {
    let dict = open(file);
    let input = input(&dict, typed);

    let (candidates, next_letters) = match skip {
        Some(skip_pos) => {
            let mut list = RankedList::new(dict.settings().limits.max_words);
            let options = SearchOptions {
                skip_pos: Some(skip_pos),
                max_edit_distance: max_edit,
            };
            die!(dict.search(&input, &options, &mut list, None), "Error: {}");
            (list.to_candidates(), Vec::new())
        }
        None => {
            let result = die!(dict.suggestions_with(&input, max_edit), "Error: {}");
            (result.candidates, result.next_letters.ranked())
        }
    };

    if json {
        print_json(&SuggestOutput {
            typed,
            candidates: &candidates,
            next_letters,
        });
        return;
    }
    print_candidates(&candidates);
    if !next_letters.is_empty() {
        let letters: Vec<String> = next_letters
            .iter()
            .map(|(c, n)| format!("{c}:{n}"))
            .collect();
        println!("next: {}", letters.join(" "));
    }
}

pub fn bigrams(file: &str, previous: &str, typed: Option<&str>, json: bool) {
    let dict = open(file);
    let input = match typed {
        Some(typed) => input(&dict, typed),
        None => dict.input_codes(),
    };
    let candidates = die!(dict.bigrams(previous, &input), "Error: {}");
    if json {
        print_json(&candidates);
    } else {
        print_candidates(&candidates);
    }
}
