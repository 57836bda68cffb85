pub mod dict;
pub mod settings;
pub mod suggest;
pub mod unicode;

pub use dict::{DictError, DictionaryBuilder, Header};
pub use suggest::{
    default_edit_distance, write_fixed, BinaryDictionary, Candidate, InputCodes, NextLetters,
    RankedList, Ranking, SearchOptions, Suggestions, TYPED_WORD_SCORE,
};
