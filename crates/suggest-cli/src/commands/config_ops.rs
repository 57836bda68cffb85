use std::fs;

use suggest_core::settings;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: scoring.typed_letter_multiplier={}, limits.max_words={}, limits.max_word_length={}",
        s.scoring.typed_letter_multiplier, s.limits.max_words, s.limits.max_word_length
    );
}

/// Install a custom settings file before any dictionary is opened.
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error in {file}: {}");
}
