//! Character folding for case- and accent-insensitive matching.
//!
//! Dictionary codes are UTF-16 code units stored with their original case.
//! Matchers compare through [`fold`] so one trie branch serves "Cat", "cat"
//! and "çat" alike.

/// Base letters for U+00C0..=U+00FF. Entries without a plain base letter
/// (Æ, Ð, ×, Þ, ß, ...) map to themselves and are lowercased afterwards.
const LATIN1_BASE: [u8; 64] = [
    b'A', b'A', b'A', b'A', b'A', b'A', 0xC6, b'C', // À Á Â Ã Ä Å Æ Ç
    b'E', b'E', b'E', b'E', b'I', b'I', b'I', b'I', // È É Ê Ë Ì Í Î Ï
    0xD0, b'N', b'O', b'O', b'O', b'O', b'O', 0xD7, // Ð Ñ Ò Ó Ô Õ Ö ×
    b'O', b'U', b'U', b'U', b'U', b'Y', 0xDE, 0xDF, // Ø Ù Ú Û Ü Ý Þ ß
    b'a', b'a', b'a', b'a', b'a', b'a', 0xE6, b'c', // à á â ã ä å æ ç
    b'e', b'e', b'e', b'e', b'i', b'i', b'i', b'i', // è é ê ë ì í î ï
    0xF0, b'n', b'o', b'o', b'o', b'o', b'o', 0xF7, // ð ñ ò ó ô õ ö ÷
    b'o', b'u', b'u', b'u', b'u', b'y', 0xFE, b'y', // ø ù ú û ü ý þ ÿ
];

pub const APOSTROPHE: u16 = b'\'' as u16;

/// Strip Latin-1 diacritics and lowercase a single code unit.
///
/// Code units that lowercase to more than one character, or to something
/// outside the BMP, are returned unchanged.
pub fn fold(code: u16) -> u16 {
    let base = match code {
        0xC0..=0xFF => LATIN1_BASE[(code - 0xC0) as usize] as u16,
        _ => code,
    };
    match base {
        0x41..=0x5A => base | 0x20,
        0..=0x7F => base,
        _ => lower_bmp(base).unwrap_or(base),
    }
}

/// Whether a typed code and a stored code denote the same letter.
pub fn same_letter(typed: u16, stored: u16) -> bool {
    typed == stored || fold(typed) == fold(stored)
}

fn lower_bmp(code: u16) -> Option<u16> {
    let c = char::from_u32(code as u32)?;
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => u16::try_from(l as u32).ok(),
        _ => None,
    }
}

/// Encode a word as the code units the dictionary stores.
pub fn encode(word: &str) -> Vec<u16> {
    word.encode_utf16().collect()
}

/// Decode stored code units back into a `String`, replacing lone surrogates.
pub fn decode(codes: &[u16]) -> String {
    String::from_utf16_lossy(codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(c: char) -> char {
        char::from_u32(fold(c as u16) as u32).unwrap()
    }

    #[test]
    fn test_fold_ascii() {
        assert_eq!(f('A'), 'a');
        assert_eq!(f('z'), 'z');
        assert_eq!(f('\''), '\'');
        assert_eq!(f('7'), '7');
    }

    #[test]
    fn test_fold_strips_latin1_accents() {
        assert_eq!(f('É'), 'e');
        assert_eq!(f('é'), 'e');
        assert_eq!(f('ç'), 'c');
        assert_eq!(f('Ñ'), 'n');
        assert_eq!(f('ÿ'), 'y');
    }

    #[test]
    fn test_fold_keeps_letters_without_base() {
        assert_eq!(f('Æ'), 'æ');
        assert_eq!(f('ß'), 'ß');
        assert_eq!(f('Þ'), 'þ');
    }

    #[test]
    fn test_fold_beyond_latin1() {
        assert_eq!(f('Ж'), 'ж');
        assert_eq!(f('Ω'), 'ω');
        assert_eq!(f('あ'), 'あ');
    }

    #[test]
    fn test_fold_lone_surrogate_unchanged() {
        assert_eq!(fold(0xD800), 0xD800);
    }

    #[test]
    fn test_same_letter() {
        assert!(same_letter(b'c' as u16, b'C' as u16));
        assert!(same_letter(b'e' as u16, 0xE9));
        assert!(!same_letter(b'c' as u16, b'x' as u16));
    }

    #[test]
    fn test_encode_decode() {
        let codes = encode("café");
        assert_eq!(codes.len(), 4);
        assert_eq!(decode(&codes), "café");
    }
}
