//! Queries over a validated dictionary buffer.
//!
//! [`BinaryDictionary`] runs the version gate once and then answers
//! suggestion, bigram, and validity queries. All per-query state lives in
//! the call, so one dictionary can serve many threads at once.

mod bigram;
mod input;
mod next_letters;
mod ranked;
mod search;
#[cfg(test)]
mod tests;
mod validate;

pub use input::InputCodes;
pub use next_letters::NextLetters;
pub use ranked::{write_fixed, Candidate, RankedList, Ranking, TYPED_WORD_SCORE};

use tracing::{debug, debug_span};

use crate::dict::{DictError, Header, Siblings, HEADER_SIZE};
use crate::settings::{validate as validate_settings, Settings};
use crate::unicode::{decode, encode};

use search::Search;

/// Per-pass knobs of [`BinaryDictionary::search`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Input position (or word position) where one keystroke may be
    /// missing or extra. Positions past the input are ignored.
    pub skip_pos: Option<usize>,
    /// Edit-distance budget; [`default_edit_distance`] when `None`.
    pub max_edit_distance: Option<usize>,
}

/// Result of [`BinaryDictionary::suggestions`].
#[derive(Debug, Clone)]
pub struct Suggestions {
    pub candidates: Vec<Candidate>,
    pub next_letters: NextLetters,
}

/// Budget used when the caller does not pick one: short inputs tolerate
/// two errors, longer ones one error per two keystrokes.
pub fn default_edit_distance(input_len: usize) -> usize {
    if input_len < 5 {
        2
    } else {
        input_len / 2
    }
}

/// A dictionary buffer that passed the version gate.
///
/// `B` is anything that derefs to bytes: an owned `Vec<u8>`, a borrowed
/// slice, or a memory map.
#[derive(Debug, Clone)]
pub struct BinaryDictionary<B: AsRef<[u8]> = Vec<u8>> {
    data: B,
    header: Header,
    settings: Settings,
}

impl<B: AsRef<[u8]>> BinaryDictionary<B> {
    /// Validate `data` with the global settings.
    pub fn new(data: B) -> Result<Self, DictError> {
        Self::with_settings(data, Settings::default())
    }

    /// Validate `data` with caller-built settings, rejecting the same
    /// values the settings file would.
    pub fn with_settings(data: B, settings: Settings) -> Result<Self, DictError> {
        validate_settings(&settings)?;
        let header = Header::parse(data.as_ref())?;
        debug!(
            version = header.version,
            has_bigrams = header.has_bigrams,
            bytes = data.as_ref().len(),
            "dictionary opened"
        );
        Ok(Self {
            data,
            header,
            settings,
        })
    }

    pub fn header(&self) -> Header {
        self.header
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_ref()
    }

    /// An empty input sized for this dictionary's alternatives limit.
    pub fn input_codes(&self) -> InputCodes {
        InputCodes::new(self.settings.limits.max_alternatives)
    }

    /// Input with no alternatives: exactly what was typed.
    pub fn typed_input(&self, typed: &str) -> InputCodes {
        InputCodes::from_typed(typed, self.settings.limits.max_alternatives)
    }

    /// One traversal pass. Returns how many offers `ranking` kept.
    ///
    /// Pass `next_letters` to collect the letters that follow the typed
    /// prefix in completions.
    pub fn search(
        &self,
        input: &InputCodes,
        options: &SearchOptions,
        ranking: &mut dyn Ranking,
        next_letters: Option<&mut NextLetters>,
    ) -> Result<usize, DictError> {
        let budget = options
            .max_edit_distance
            .unwrap_or_else(|| default_edit_distance(input.len()));
        Search::new(
            self.as_bytes(),
            input,
            &self.settings,
            options.skip_pos,
            budget,
            ranking,
            next_letters,
        )
        .run()
    }

    /// Full suggestion query with the default budget.
    ///
    /// When the primary pass finds fewer words than the configured
    /// threshold, one keystroke at a time is treated as missing or extra
    /// until a pass adds something.
    pub fn suggestions(&self, input: &InputCodes) -> Result<Suggestions, DictError> {
        self.suggestions_with(input, None)
    }

    pub fn suggestions_with(
        &self,
        input: &InputCodes,
        max_edit_distance: Option<usize>,
    ) -> Result<Suggestions, DictError> {
        let _span = debug_span!("suggestions", input_len = input.len()).entered();
        let limits = &self.settings.limits;
        let mut list = RankedList::new(limits.max_words);
        let mut next_letters = NextLetters::new(limits.next_letters_size);

        let primary = SearchOptions {
            skip_pos: None,
            max_edit_distance,
        };
        self.search(input, &primary, &mut list, Some(&mut next_letters))?;

        let search = &self.settings.search;
        if search.missing_characters && list.len() < search.missing_characters_threshold {
            for skip_pos in 0..input.len() {
                let before = list.len();
                let options = SearchOptions {
                    skip_pos: Some(skip_pos),
                    max_edit_distance,
                };
                self.search(input, &options, &mut list, None)?;
                if list.len() > before {
                    debug!(skip_pos, found = list.len(), "skip pass added words");
                    break;
                }
            }
        }

        debug!(found = list.len());
        Ok(Suggestions {
            candidates: list.to_candidates(),
            next_letters,
        })
    }

    /// Words that follow `previous`, ranked, at most `max_bigrams`.
    ///
    /// `input` narrows and weighs the continuations by what has been typed
    /// of the next word so far; pass an empty input for pure frequency.
    pub fn bigrams(&self, previous: &str, input: &InputCodes) -> Result<Vec<Candidate>, DictError> {
        let _span = debug_span!("bigrams", previous, input_len = input.len()).entered();
        let mut list = RankedList::new(self.settings.limits.max_bigrams);
        if self.header.has_bigrams {
            bigram::collect(
                self.as_bytes(),
                &self.settings,
                &encode(previous),
                input,
                &mut list,
            )?;
        }
        debug!(found = list.len());
        Ok(list.to_candidates())
    }

    /// Exact lookup ignoring case and accents.
    pub fn is_valid_word(&self, word: &str) -> Result<bool, DictError> {
        let found = validate::find_word(self.as_bytes(), &encode(word))?;
        Ok(found.is_some())
    }

    /// Frequency of `word` when it is stored, matched as in
    /// [`is_valid_word`](Self::is_valid_word).
    pub fn frequency(&self, word: &str) -> Result<Option<u8>, DictError> {
        let found = validate::find_word(self.as_bytes(), &encode(word))?;
        Ok(found.map(|node| node.frequency))
    }

    /// Every stored word with its frequency, in trie order.
    pub fn words(&self) -> Result<Vec<(String, u8)>, DictError> {
        let mut words = Vec::new();
        let mut prefix = Vec::new();
        collect_words(
            self.as_bytes(),
            HEADER_SIZE,
            self.settings.limits.max_word_length,
            &mut prefix,
            &mut words,
        )?;
        Ok(words)
    }
}

/// Depth-first listing. A child group deeper than `max_len` letters means
/// the addresses loop back, so the walk fails instead of recursing on.
fn collect_words(
    data: &[u8],
    address: usize,
    max_len: usize,
    prefix: &mut Vec<u16>,
    out: &mut Vec<(String, u8)>,
) -> Result<(), DictError> {
    for node in Siblings::at(data, address)? {
        let node = node?;
        prefix.push(node.code);
        if node.terminal {
            out.push((decode(prefix), node.frequency));
        }
        if let Some(child) = node.child_group() {
            if prefix.len() >= max_len {
                return Err(DictError::BadAddress {
                    node: node.offset,
                    address: child,
                });
            }
            collect_words(data, child, max_len, prefix, out)?;
        }
        prefix.pop();
    }
    Ok(())
}
