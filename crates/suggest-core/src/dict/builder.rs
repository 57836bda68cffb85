use std::collections::{BTreeMap, HashMap};

use tracing::{debug, debug_span};

use super::header::{Header, ADDRESS_MASK, FORMAT_VERSION};
use super::node::{
    BIGRAM_CHILDREN, BIGRAM_CONTINUED, BIGRAM_ENTRY, BIGRAM_FREQ_MASK, CHAR_ESCAPE, FLAG_ADDRESS,
    FLAG_TERMINAL,
};
use super::DictError;
use crate::unicode::{decode, encode};

#[derive(Default)]
struct BuildNode {
    children: BTreeMap<u16, BuildNode>,
    frequency: Option<u8>,
}

/// Position of a 3-byte field to fill once every node has an offset.
enum Patch {
    Children { at: usize, group: usize },
    Bigram { at: usize, target: Vec<u16> },
}

/// Compiles (word, frequency) pairs and bigram pairs into the binary format.
///
/// Groups are written depth-first: a sibling group is followed by the
/// complete subtree of each of its nodes in order, so child addresses grow
/// with sibling order. Bigram target reconstruction relies on that order.
#[derive(Default)]
pub struct DictionaryBuilder {
    root: BuildNode,
    /// previous word → (next word → frequency)
    bigrams: BTreeMap<Vec<u16>, BTreeMap<Vec<u16>, u8>>,
}

impl DictionaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word. Adding it again keeps the higher frequency.
    pub fn add_word(&mut self, word: &str, frequency: u8) -> Result<(), DictError> {
        let codes = encode(word);
        if codes.is_empty() {
            return Err(DictError::EmptyWord);
        }
        let mut node = &mut self.root;
        for code in codes {
            node = node.children.entry(code).or_default();
        }
        node.frequency = Some(node.frequency.map_or(frequency, |f| f.max(frequency)));
        Ok(())
    }

    /// Record that `next` follows `previous`. Both must be added as words
    /// before [`build`](Self::build). Frequency is stored in 7 bits.
    pub fn add_bigram(&mut self, previous: &str, next: &str, frequency: u8) -> Result<(), DictError> {
        let (previous, next) = (encode(previous), encode(next));
        if previous.is_empty() || next.is_empty() {
            return Err(DictError::EmptyWord);
        }
        let frequency = frequency & BIGRAM_FREQ_MASK;
        self.bigrams
            .entry(previous)
            .or_default()
            .entry(next)
            .and_modify(|f| *f = (*f).max(frequency))
            .or_insert(frequency);
        Ok(())
    }

    pub fn build(&self) -> Result<Vec<u8>, DictError> {
        let _span = debug_span!("build_dictionary").entered();
        for (previous, nexts) in &self.bigrams {
            self.require_word(previous)?;
            for next in nexts.keys() {
                self.require_word(next)?;
            }
        }

        let header = Header {
            version: FORMAT_VERSION,
            has_bigrams: !self.bigrams.is_empty(),
        };
        let mut layout = Layout {
            out: header.to_bytes().to_vec(),
            patches: Vec::new(),
            terminals: HashMap::new(),
            bigrams: &self.bigrams,
        };
        let mut path = Vec::new();
        layout.emit_group(&self.root, &mut path)?;
        let terminal_count = layout.terminals.len();
        let out = layout.finish()?;

        debug!(bytes = out.len(), words = terminal_count);
        Ok(out)
    }

    fn require_word(&self, word: &[u16]) -> Result<(), DictError> {
        let mut node = &self.root;
        for code in word {
            match node.children.get(code) {
                Some(child) => node = child,
                None => return Err(DictError::UnknownWord(decode(word))),
            }
        }
        match node.frequency {
            Some(_) => Ok(()),
            None => Err(DictError::UnknownWord(decode(word))),
        }
    }
}

struct Layout<'b> {
    out: Vec<u8>,
    patches: Vec<Patch>,
    /// word → (node offset, has children)
    terminals: HashMap<Vec<u16>, (usize, bool)>,
    bigrams: &'b BTreeMap<Vec<u16>, BTreeMap<Vec<u16>, u8>>,
}

impl Layout<'_> {
    fn emit_group(&mut self, node: &BuildNode, path: &mut Vec<u16>) -> Result<(), DictError> {
        let count = node.children.len();
        let count_byte = u8::try_from(count).map_err(|_| DictError::TooManySiblings {
            prefix: decode(path),
            count,
        })?;
        self.out.push(count_byte);

        let mut child_patches = Vec::new();
        for (&code, child) in &node.children {
            path.push(code);
            let offset = self.out.len();

            if code < CHAR_ESCAPE as u16 {
                self.out.push(code as u8);
            } else {
                self.out.push(CHAR_ESCAPE);
                self.out.extend_from_slice(&code.to_be_bytes());
            }

            let mut flags = 0u8;
            if child.frequency.is_some() {
                flags |= FLAG_TERMINAL;
            }
            if child.children.is_empty() {
                self.out.push(flags);
            } else {
                child_patches.push(self.out.len());
                self.out.extend_from_slice(&[flags | FLAG_ADDRESS, 0, 0]);
            }

            if let Some(frequency) = child.frequency {
                self.out.push(frequency);
                self.emit_bigrams(path);
                self.terminals
                    .insert(path.clone(), (offset, !child.children.is_empty()));
            }
            path.pop();
        }

        let mut patches = child_patches.into_iter();
        for (&code, child) in &node.children {
            if child.children.is_empty() {
                continue;
            }
            if let Some(at) = patches.next() {
                self.patches.push(Patch::Children {
                    at,
                    group: self.out.len(),
                });
            }
            path.push(code);
            self.emit_group(child, path)?;
            path.pop();
        }
        Ok(())
    }

    /// Entries are written in descending frequency so a capped reader keeps
    /// the strongest continuations.
    fn emit_bigrams(&mut self, previous: &[u16]) {
        let bigrams = self.bigrams;
        let Some(nexts) = bigrams.get(previous) else {
            self.out.push(0);
            return;
        };
        let mut entries: Vec<(&Vec<u16>, u8)> = nexts.iter().map(|(w, &f)| (w, f)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        let last = entries.len() - 1;
        for (i, (target, frequency)) in entries.into_iter().enumerate() {
            self.patches.push(Patch::Bigram {
                at: self.out.len(),
                target: target.clone(),
            });
            self.out.extend_from_slice(&[BIGRAM_ENTRY, 0, 0]);
            let continued = if i < last { BIGRAM_CONTINUED } else { 0 };
            self.out.push(frequency | continued);
        }
    }

    fn finish(mut self) -> Result<Vec<u8>, DictError> {
        if self.out.len() > ADDRESS_MASK + 1 {
            return Err(DictError::TooLarge(self.out.len()));
        }
        for patch in std::mem::take(&mut self.patches) {
            match patch {
                Patch::Children { at, group } => write_address(&mut self.out, at, group),
                Patch::Bigram { at, target } => {
                    let (offset, has_children) = self
                        .terminals
                        .get(&target)
                        .copied()
                        .ok_or_else(|| DictError::UnknownWord(decode(&target)))?;
                    write_address(&mut self.out, at, offset);
                    if has_children {
                        self.out[at] |= BIGRAM_CHILDREN;
                    }
                }
            }
        }
        Ok(self.out)
    }
}

/// Fill the low 22 bits of the 3-byte field at `at`, keeping its flag bits.
fn write_address(out: &mut [u8], at: usize, address: usize) {
    out[at] |= ((address >> 16) & 0x3F) as u8;
    out[at + 1] = (address >> 8) as u8;
    out[at + 2] = address as u8;
}
