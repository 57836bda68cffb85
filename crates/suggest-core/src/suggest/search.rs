//! Approximate-match traversal of the trie.
//!
//! One [`Search`] is one pass over the dictionary for one input. It owns the
//! partial word and borrows everything else; the dictionary buffer is only
//! read.

use tracing::debug;

use crate::dict::{DictError, Node, Siblings, HEADER_SIZE};
use crate::settings::Settings;
use crate::unicode::{fold, same_letter, APOSTROPHE};

use super::input::InputCodes;
use super::next_letters::NextLetters;
use super::ranked::{Ranking, TYPED_WORD_SCORE};

/// Traversal state at one node. Passed by value down the recursion.
#[derive(Debug, Clone, Copy)]
struct Frame {
    depth: usize,
    input_index: usize,
    diffs: usize,
    multiplier: u32,
    /// A skip-position correction was already spent on this path.
    skipped: bool,
}

pub(crate) struct Search<'a, 'r> {
    data: &'a [u8],
    input: &'a InputCodes,
    settings: &'a Settings,
    skip_pos: Option<usize>,
    budget: usize,
    max_depth: usize,
    ranking: &'r mut dyn Ranking,
    next_letters: Option<&'r mut NextLetters>,
    word: Vec<u16>,
    accepted: usize,
}

impl<'a, 'r> Search<'a, 'r> {
    pub(crate) fn new(
        data: &'a [u8],
        input: &'a InputCodes,
        settings: &'a Settings,
        skip_pos: Option<usize>,
        budget: usize,
        ranking: &'r mut dyn Ranking,
        next_letters: Option<&'r mut NextLetters>,
    ) -> Self {
        let len = input.len();
        let max_depth = len
            .saturating_mul(3)
            .min(settings.limits.max_word_length.saturating_sub(1));
        Self {
            data,
            input,
            settings,
            skip_pos: skip_pos.filter(|&p| p < len),
            budget,
            max_depth,
            ranking,
            next_letters,
            word: Vec::with_capacity(max_depth),
            accepted: 0,
        }
    }

    /// Walk the whole trie. Returns how many offers the ranking kept.
    pub(crate) fn run(mut self) -> Result<usize, DictError> {
        if self.input.is_empty() {
            return Ok(0);
        }
        let root = Frame {
            depth: 0,
            input_index: 0,
            diffs: 0,
            multiplier: 1,
            skipped: false,
        };
        self.group(HEADER_SIZE, root)?;
        debug!(
            skip_pos = ?self.skip_pos,
            budget = self.budget,
            accepted = self.accepted,
            "search pass done"
        );
        Ok(self.accepted)
    }

    fn group(&mut self, address: usize, frame: Frame) -> Result<(), DictError> {
        if frame.depth >= self.max_depth {
            return Ok(());
        }
        let data = self.data;
        for node in Siblings::at(data, address)? {
            self.node(&node?, frame)?;
        }
        Ok(())
    }

    fn descend(&mut self, node: &Node, frame: Frame) -> Result<(), DictError> {
        match node.child_group() {
            Some(address) => self.group(address, frame),
            None => Ok(()),
        }
    }

    fn node(&mut self, node: &Node, f: Frame) -> Result<(), DictError> {
        if f.diffs > self.budget {
            return Ok(());
        }
        self.word.truncate(f.depth);
        self.word.push(node.code);

        let len = self.input.len();
        if f.input_index >= len {
            return self.complete(node, f);
        }

        if node.code == APOSTROPHE && fold(self.input.primary(f.input_index)) != APOSTROPHE {
            return self.descend(
                node,
                Frame {
                    depth: f.depth + 1,
                    ..f
                },
            );
        }

        if !f.skipped && self.skip_pos == Some(f.depth) {
            // Dropped keystroke: the stored letter has no input position.
            self.descend(
                node,
                Frame {
                    depth: f.depth + 1,
                    diffs: f.diffs + 1,
                    skipped: true,
                    ..f
                },
            )?;
        }

        if !f.skipped && self.skip_pos == Some(f.input_index) {
            // Extra keystroke: the input position has no stored letter.
            self.node(
                node,
                Frame {
                    input_index: f.input_index + 1,
                    diffs: f.diffs + 1,
                    skipped: true,
                    ..f
                },
            )?;
        }
        // Skip branches leave deeper letters behind.
        self.word.truncate(f.depth + 1);

        let Some((weight, cost)) = self.match_cost(node.code, f.input_index, f.diffs) else {
            return Ok(());
        };
        let next = Frame {
            depth: f.depth + 1,
            input_index: f.input_index + 1,
            diffs: f.diffs + cost,
            multiplier: f.multiplier.saturating_mul(weight),
            skipped: f.skipped,
        };
        if next.diffs > self.budget {
            return Ok(());
        }

        if node.terminal {
            if next.input_index == len {
                self.emit_full(node.frequency, next.multiplier, next.diffs);
            } else if !next.skipped
                && self.skip_pos == Some(len - 1)
                && next.input_index + 1 == len
                && next.diffs < self.budget
            {
                // Only the trailing extra keystroke is left unmatched.
                self.emit_full(node.frequency, next.multiplier, next.diffs + 1);
            }
        }
        self.descend(node, next)
    }

    /// Weight and diff cost of matching `code` at input position `index`,
    /// or `None` when the path dies here.
    fn match_cost(&self, code: u16, index: usize, diffs: usize) -> Option<(u32, usize)> {
        let typed = self.settings.scoring.typed_letter_multiplier;
        let alternatives = self.input.alternatives(index);

        if self.skip_pos.is_some() {
            return alternatives
                .first()
                .filter(|&&c| same_letter(c, code))
                .map(|_| (typed, 0));
        }

        match alternatives.iter().position(|&c| same_letter(c, code)) {
            Some(0) => Some((typed, 0)),
            Some(_) => Some((1, 1)),
            None if self.settings.search.substitutions && diffs + 1 < self.budget => Some((1, 1)),
            None => None,
        }
    }

    fn complete(&mut self, node: &Node, f: Frame) -> Result<(), DictError> {
        if node.terminal {
            let len = self.input.len();
            if let (Some(letters), Some(&next)) =
                (self.next_letters.as_deref_mut(), self.word.get(len))
            {
                letters.register(next);
            }
            if f.diffs == 0 || f.diffs < self.budget {
                let score = u32::from(node.frequency).saturating_mul(f.multiplier);
                self.offer(score.min(TYPED_WORD_SCORE - 1));
            }
        }
        self.descend(
            node,
            Frame {
                depth: f.depth + 1,
                ..f
            },
        )
    }

    fn emit_full(&mut self, frequency: u8, multiplier: u32, diffs: usize) {
        let score = if self.input.is_typed(&self.word) {
            TYPED_WORD_SCORE
        } else {
            let mut score = u32::from(frequency).saturating_mul(multiplier);
            if diffs == 0 {
                score = score.saturating_mul(self.settings.scoring.full_word_multiplier);
            }
            score.min(TYPED_WORD_SCORE - 1)
        };
        self.offer(score);
    }

    fn offer(&mut self, score: u32) {
        if self.ranking.offer(&self.word, score) {
            self.accepted += 1;
        }
    }
}
