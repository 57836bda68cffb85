use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use suggest_core::{BinaryDictionary, DictionaryBuilder};

const STEMS: &[&str] = &[
    "the", "there", "then", "they", "this", "that", "these", "those", "think", "thing", "cat",
    "car", "care", "carry", "cart", "case", "cast", "castle", "keyboard", "key", "keep", "kept",
    "predict", "prediction", "predictive", "press", "pressure", "word", "world", "work", "worker",
    "suggest", "suggestion", "sugar", "summer", "sun", "sunday", "don't", "won't", "can't",
];

const SUFFIXES: &[&str] = &["", "s", "ed", "ing", "er", "ly"];

fn bench_dict() -> Arc<BinaryDictionary> {
    let mut builder = DictionaryBuilder::new();
    for (i, stem) in STEMS.iter().enumerate() {
        for (j, suffix) in SUFFIXES.iter().enumerate() {
            let frequency = (255 - (i * 5 + j * 11) % 250) as u8;
            builder.add_word(&format!("{stem}{suffix}"), frequency).unwrap();
        }
    }
    for pair in STEMS.windows(2) {
        builder.add_bigram(pair[0], pair[1], 40).unwrap();
    }
    Arc::new(BinaryDictionary::new(builder.build().unwrap()).unwrap())
}

static INPUTS: &[(&str, &str)] = &[
    ("short", "th"),
    ("exact", "keyboard"),
    ("typo", "predivtion"),
    ("dropped", "sugestion"),
];

fn bench_suggestions(c: &mut Criterion) {
    let dict = bench_dict();
    let mut group = c.benchmark_group("suggest/suggestions");
    for &(label, typed) in INPUTS {
        let input = dict.typed_input(typed);
        group.bench_with_input(BenchmarkId::new(label, typed.len()), &input, |b, input| {
            b.iter(|| dict.suggestions(input).unwrap());
        });
    }
    group.finish();
}

fn bench_bigrams(c: &mut Criterion) {
    let dict = bench_dict();
    let input = dict.typed_input("c");
    c.bench_function("suggest/bigrams", |b| {
        b.iter(|| dict.bigrams("cat", &input).unwrap());
    });
}

fn bench_validate(c: &mut Criterion) {
    let dict = bench_dict();
    c.bench_function("suggest/is_valid_word", |b| {
        b.iter(|| dict.is_valid_word("Predictive").unwrap());
    });
}

criterion_group!(benches, bench_suggestions, bench_bigrams, bench_validate);
criterion_main!(benches);
