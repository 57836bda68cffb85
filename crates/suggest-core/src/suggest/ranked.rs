use serde::Serialize;

use crate::unicode::decode;

/// Score given to the word identical to what was typed, keeping it at the
/// head of the list. Fits the `i32` frequency arrays of fixed-width callers.
pub const TYPED_WORD_SCORE: u32 = i32::MAX as u32;

/// A ranked suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub word: String,
    pub score: u32,
}

/// Bounded collection kept in descending score order.
///
/// Search code only offers words; how they are stored and evicted is up to
/// the implementation.
pub trait Ranking {
    /// Offer a word. Returns whether it was kept.
    fn offer(&mut self, word: &[u16], score: u32) -> bool;

    fn len(&self) -> usize;

    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone)]
struct Entry {
    word: Vec<u16>,
    score: u32,
}

/// Fixed-capacity list sorted by descending score.
///
/// - a full list rejects scores at or below its minimum, otherwise the
///   minimum is evicted;
/// - equal scores keep insertion order;
/// - a word already listed is never duplicated: a higher score moves it,
///   anything else is dropped;
/// - zero scores are never listed.
#[derive(Debug, Clone)]
pub struct RankedList {
    entries: Vec<Entry>,
    capacity: usize,
}

impl RankedList {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn scores(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|e| e.score)
    }

    pub fn words(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|e| decode(&e.word))
    }

    /// Lowest listed score, once the list is full.
    pub fn threshold(&self) -> Option<u32> {
        if self.entries.len() < self.capacity {
            None
        } else {
            self.entries.last().map(|e| e.score)
        }
    }

    pub fn to_candidates(&self) -> Vec<Candidate> {
        self.entries
            .iter()
            .map(|e| Candidate {
                word: decode(&e.word),
                score: e.score,
            })
            .collect()
    }

    /// [`write_fixed`] over this list's candidates.
    pub fn write_fixed(
        &self,
        out_words: &mut [u16],
        frequencies: &mut [i32],
        max_word_length: usize,
    ) -> usize {
        write_fixed(&self.to_candidates(), out_words, frequencies, max_word_length)
    }
}

impl Ranking for RankedList {
    fn offer(&mut self, word: &[u16], score: u32) -> bool {
        if score == 0 || self.capacity == 0 {
            return false;
        }
        if let Some(existing) = self.entries.iter().position(|e| e.word == word) {
            if score <= self.entries[existing].score {
                return false;
            }
            self.entries.remove(existing);
        }
        if self.threshold().is_some_and(|min| score <= min) {
            return false;
        }

        let at = self.entries.partition_point(|e| e.score >= score);
        self.entries.insert(
            at,
            Entry {
                word: word.to_vec(),
                score,
            },
        );
        self.entries.truncate(self.capacity);
        true
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Copy candidates into caller-owned parallel arrays.
///
/// Row `i` of `out_words` spans `max_word_length` code units: the word,
/// zero-padded. Words that do not fit with a terminator are skipped.
/// Scores above `i32::MAX` are clamped. Unused rows are zeroed. Returns the
/// number of rows written.
pub fn write_fixed(
    candidates: &[Candidate],
    out_words: &mut [u16],
    frequencies: &mut [i32],
    max_word_length: usize,
) -> usize {
    out_words.fill(0);
    frequencies.fill(0);
    if max_word_length == 0 {
        return 0;
    }
    let rows = frequencies.len().min(out_words.len() / max_word_length);

    let mut written = 0;
    for candidate in candidates {
        if written == rows {
            break;
        }
        let codes: Vec<u16> = candidate.word.encode_utf16().collect();
        if codes.len() >= max_word_length {
            continue;
        }
        let row = &mut out_words[written * max_word_length..(written + 1) * max_word_length];
        row[..codes.len()].copy_from_slice(&codes);
        frequencies[written] = i32::try_from(candidate.score).unwrap_or(i32::MAX);
        written += 1;
    }
    written
}
