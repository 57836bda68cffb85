use super::DictError;

/// Header: version byte + bigram flag byte.
pub const HEADER_SIZE: usize = 2;
/// Oldest version carrying the header and per-terminal bigram sections.
pub const VERSION_MIN: u8 = 200;
/// Version written by [`DictionaryBuilder`](super::DictionaryBuilder).
pub const FORMAT_VERSION: u8 = 200;
/// 22-bit addresses limit a dictionary to 4 MiB.
pub const ADDRESS_MASK: usize = 0x3F_FFFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: u8,
    pub has_bigrams: bool,
}

impl Header {
    /// Version gate, run once per buffer before any query.
    pub fn parse(data: &[u8]) -> Result<Self, DictError> {
        // The root group's count byte must be present too.
        if data.len() < HEADER_SIZE + 1 {
            return Err(DictError::InvalidHeader);
        }
        let version = data[0];
        if version < VERSION_MIN {
            return Err(DictError::UnsupportedVersion(version));
        }
        let has_bigrams = match data[1] {
            0 => false,
            1 => true,
            other => return Err(DictError::InvalidBigramFlag(other)),
        };
        if data.len() > ADDRESS_MASK + 1 {
            return Err(DictError::TooLarge(data.len()));
        }
        Ok(Self {
            version,
            has_bigrams,
        })
    }

    pub fn to_bytes(self) -> [u8; HEADER_SIZE] {
        [self.version, self.has_bigrams as u8]
    }
}
