//! Next-word prediction from the bigram chains attached to terminal nodes.

use tracing::debug;

use crate::dict::{BigramEntries, DictError, Node, Siblings, HEADER_SIZE};
use crate::settings::Settings;
use crate::unicode::same_letter;

use super::input::InputCodes;
use super::ranked::Ranking;
use super::validate::find_word;

/// Rank the continuations of `previous` into `ranking`.
///
/// A word that is missing, or carries no chain, yields nothing.
pub(crate) fn collect(
    data: &[u8],
    settings: &Settings,
    previous: &[u16],
    input: &InputCodes,
    ranking: &mut dyn Ranking,
) -> Result<usize, DictError> {
    let Some(chain) = find_word(data, previous)?.and_then(|node| node.bigrams) else {
        return Ok(0);
    };

    let mut read = 0;
    let mut accepted = 0;
    for entry in BigramEntries::at(data, chain).take(settings.limits.max_bigrams) {
        let entry = entry?;
        read += 1;
        let (word, target) = reconstruct(data, entry.target, settings.limits.max_word_length)?;
        if target.child_group().is_some() != entry.target_has_children {
            return Err(DictError::DanglingBigram(entry.target));
        }
        let Some(weight) = input_weight(&word, input, settings.scoring.typed_letter_multiplier)
        else {
            continue;
        };
        if ranking.offer(&word, score(entry.frequency, target.frequency, weight)) {
            accepted += 1;
        }
    }
    debug!(read, accepted, "bigram chain walked");
    Ok(accepted)
}

/// Spell out the word whose terminal node starts at `target`.
///
/// Groups are laid out depth-first, so the subtree holding `target` hangs
/// off the sibling with the greatest child address not past it.
pub(crate) fn reconstruct(
    data: &[u8],
    target: usize,
    max_word_length: usize,
) -> Result<(Vec<u16>, Node), DictError> {
    let mut word = Vec::new();
    let mut group = HEADER_SIZE;

    while word.len() + 1 < max_word_length {
        let mut best: Option<(usize, u16)> = None;
        for node in Siblings::at(data, group)? {
            let node = node?;
            if node.offset == target {
                if !node.terminal {
                    break;
                }
                word.push(node.code);
                return Ok((word, node));
            }
            if let Some(child) = node.child_group() {
                if child <= target && best.map_or(true, |(address, _)| child > address) {
                    best = Some((child, node.code));
                }
            }
        }
        let Some((child, code)) = best else {
            break;
        };
        word.push(code);
        group = child;
    }
    Err(DictError::DanglingBigram(target))
}

/// Product of the per-position weights of `word` against `input`, or `None`
/// when the first letter was not among the first keystroke's alternatives.
fn input_weight(word: &[u16], input: &InputCodes, typed_multiplier: u32) -> Option<u32> {
    if input.is_empty() {
        return Some(1);
    }
    let &first = word.first()?;
    if !input
        .alternatives(0)
        .iter()
        .any(|&c| same_letter(c, first))
    {
        return None;
    }
    let weight = word
        .iter()
        .enumerate()
        .take(input.len())
        .filter(|&(i, &code)| same_letter(input.primary(i), code))
        .fold(1u32, |w, _| w.saturating_mul(typed_multiplier));
    Some(weight)
}

/// Continuation frequency boosted by how common the word is on its own.
pub(crate) fn score(bigram_frequency: u8, unigram_frequency: u8, weight: u32) -> u32 {
    u32::from(bigram_frequency)
        .saturating_mul(1 + u32::from(unigram_frequency) / 32)
        .saturating_mul(weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_blend() {
        assert_eq!(score(10, 0, 1), 10);
        assert_eq!(score(10, 31, 1), 10);
        assert_eq!(score(10, 64, 1), 30);
        assert_eq!(score(10, 255, 2), 10 * 8 * 2);
        assert_eq!(score(0, 255, 4), 0);
    }

    #[test]
    fn test_input_weight() {
        let word: Vec<u16> = "the".encode_utf16().collect();
        assert_eq!(input_weight(&word, &InputCodes::new(4), 2), Some(1));
        assert_eq!(
            input_weight(&word, &InputCodes::from_typed("th", 4), 2),
            Some(4)
        );
        assert_eq!(
            input_weight(&word, &InputCodes::from_typed("tx", 4), 2),
            Some(2)
        );
        assert_eq!(input_weight(&word, &InputCodes::from_typed("a", 4), 2), None);
    }
}
