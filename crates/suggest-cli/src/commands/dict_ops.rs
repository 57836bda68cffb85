use std::fs;
use std::path::Path;

use crate::{dict_file, wordlist};

pub fn compile(wordlist_file: &str, output_file: &str, bigrams_file: Option<&str>) {
    let text = die!(
        fs::read_to_string(wordlist_file),
        "Error reading {wordlist_file}: {}"
    );
    let words = die!(wordlist::parse_words(&text), "Error in {wordlist_file}: {}");

    let bigrams = match bigrams_file {
        Some(file) => {
            let text = die!(fs::read_to_string(file), "Error reading {file}: {}");
            die!(wordlist::parse_bigrams(&text), "Error in {file}: {}")
        }
        None => Vec::new(),
    };

    eprintln!(
        "Building trie from {} words ({} bigrams)...",
        words.len(),
        bigrams.len()
    );
    let data = die!(
        wordlist::compile(&words, &bigrams),
        "Error building dictionary: {}"
    );
    die!(
        dict_file::save(Path::new(output_file), &data),
        "Error writing dictionary: {}"
    );
    eprintln!("Wrote {output_file} ({:.1} KB)", data.len() as f64 / 1024.0);
}

pub fn info(file: &str) {
    let dict = die!(dict_file::open(Path::new(file)), "Error opening {file}: {}");
    let words = die!(dict.words(), "Error reading {file}: {}");
    let header = dict.header();
    println!("Version:  {}", header.version);
    println!(
        "Bigrams:  {}",
        if header.has_bigrams { "yes" } else { "no" }
    );
    println!("Size:     {} bytes", dict.as_bytes().len());
    println!("Words:    {}", words.len());
}

pub fn dump(file: &str) {
    let dict = die!(dict_file::open(Path::new(file)), "Error opening {file}: {}");
    let words = die!(dict.words(), "Error reading {file}: {}");
    for (word, frequency) in words {
        println!("{word}\t{frequency}");
    }
}
