//! Plain-text word lists.
//!
//! Unigram lines are `word<TAB>frequency`, bigram lines are
//! `previous<TAB>next<TAB>frequency`. Blank lines and lines starting with
//! `#` are ignored. Frequencies are 0..=255; bigram frequencies keep only
//! their low 7 bits once compiled.

use tracing::debug;

use suggest_core::DictionaryBuilder;

use crate::error::CliError;

pub type Bigram = (String, String, u8);

pub fn parse_words(text: &str) -> Result<Vec<(String, u8)>, CliError> {
    let mut words = Vec::new();
    for (line, fields) in records(text) {
        let [word, frequency] = fields[..] else {
            return Err(parse_error(line, format!("expected 2 fields, got {}", fields.len())));
        };
        words.push((word.to_string(), frequency_field(line, frequency)?));
    }
    Ok(words)
}

pub fn parse_bigrams(text: &str) -> Result<Vec<Bigram>, CliError> {
    let mut bigrams = Vec::new();
    for (line, fields) in records(text) {
        let [previous, next, frequency] = fields[..] else {
            return Err(parse_error(line, format!("expected 3 fields, got {}", fields.len())));
        };
        bigrams.push((
            previous.to_string(),
            next.to_string(),
            frequency_field(line, frequency)?,
        ));
    }
    Ok(bigrams)
}

/// Build the binary dictionary for parsed lists.
pub fn compile(words: &[(String, u8)], bigrams: &[Bigram]) -> Result<Vec<u8>, CliError> {
    let mut builder = DictionaryBuilder::new();
    for (word, frequency) in words {
        builder.add_word(word, *frequency)?;
    }
    for (previous, next, frequency) in bigrams {
        builder.add_bigram(previous, next, *frequency)?;
    }
    let data = builder.build()?;
    debug!(words = words.len(), bigrams = bigrams.len(), bytes = data.len(), "compiled");
    Ok(data)
}

/// Non-comment lines, 1-based, split on tabs.
fn records(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|(n, line)| (n, line.split('\t').map(str::trim).collect()))
}

fn frequency_field(line: usize, field: &str) -> Result<u8, CliError> {
    field
        .parse()
        .map_err(|_| parse_error(line, format!("invalid frequency {field:?} (expected 0-255)")))
}

fn parse_error(line: usize, message: String) -> CliError {
    CliError::Parse { line, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_words() {
        let text = "# english\nthe\t255\n\ncat\t 120\r\ndon't\t90\n";
        let words = parse_words(text).unwrap();
        assert_eq!(
            words,
            vec![
                ("the".to_string(), 255),
                ("cat".to_string(), 120),
                ("don't".to_string(), 90),
            ]
        );
    }

    #[test]
    fn test_frequency_out_of_range() {
        let err = parse_words("the\t255\ncat\t256\n").unwrap_err();
        assert!(matches!(err, CliError::Parse { line: 2, .. }));
        assert!(err.to_string().contains("256"));
    }

    #[test]
    fn test_missing_field() {
        let err = parse_words("the\n").unwrap_err();
        assert!(matches!(err, CliError::Parse { line: 1, .. }));
        let err = parse_bigrams("the\tcat\n").unwrap_err();
        assert!(err.to_string().contains("expected 3 fields"));
    }

    #[test]
    fn test_parse_bigrams() {
        let bigrams = parse_bigrams("the\tcat\t30\n#x\ty\t1\n").unwrap();
        assert_eq!(bigrams, vec![("the".to_string(), "cat".to_string(), 30)]);
    }

    #[test]
    fn test_compile_rejects_unknown_bigram_word() {
        let words = parse_words("the\t10\n").unwrap();
        let bigrams = parse_bigrams("the\tdog\t5\n").unwrap();
        assert!(matches!(
            compile(&words, &bigrams),
            Err(CliError::Dict(suggest_core::DictError::UnknownWord(_)))
        ));
    }
}
