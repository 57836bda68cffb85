//! Binary trie dictionary format.
//!
//! A dictionary is a two-byte header followed by sibling groups laid out
//! depth-first. `node` decodes groups and bigram chains through the
//! bounds-checked `cursor`; `builder` produces the same format from word
//! lists.

mod builder;
mod cursor;
mod header;
mod node;
#[cfg(test)]
mod tests;

pub use builder::DictionaryBuilder;
pub use cursor::ByteCursor;
pub use header::{Header, ADDRESS_MASK, FORMAT_VERSION, HEADER_SIZE, VERSION_MIN};
pub use node::{BigramEntries, BigramEntry, ChildLink, Node, Siblings};

/// Errors raised while validating, decoding, or building a dictionary.
///
/// Decoding errors are fatal for the query that hit them: a corrupt buffer
/// never produces a partial or defaulted answer.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("invalid bigram flag: {0}")]
    InvalidBigramFlag(u8),

    #[error("dictionary of {0} bytes exceeds the 22-bit address space")]
    TooLarge(usize),

    #[error("truncated data: read at offset {offset} past end ({len} bytes)")]
    Truncated { offset: usize, len: usize },

    #[error("node at {node} points to invalid address {address}")]
    BadAddress { node: usize, address: usize },

    #[error("bigram target {0} does not resolve to a terminal node")]
    DanglingBigram(usize),

    #[error("sibling group under {prefix:?} has {count} entries (max 255)")]
    TooManySiblings { prefix: String, count: usize },

    #[error("empty word")]
    EmptyWord,

    #[error("unknown word: {0}")]
    UnknownWord(String),

    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),
}
