use std::fs::{self, File};
use std::path::Path;

use memmap2::Mmap;
use tracing::debug;

use suggest_core::dict::HEADER_SIZE;
use suggest_core::settings::Settings;
use suggest_core::{BinaryDictionary, DictError};

use crate::error::CliError;

/// A dictionary file mapped into memory.
pub type MappedDictionary = BinaryDictionary<Mmap>;

/// Map `path` read-only and run the version gate over it.
pub fn open(path: &Path) -> Result<MappedDictionary, CliError> {
    open_with_settings(path, Settings::default())
}

pub fn open_with_settings(path: &Path, settings: Settings) -> Result<MappedDictionary, CliError> {
    let file = File::open(path)?;
    // Too short to hold a header; also avoids mapping an empty file.
    if file.metadata()?.len() <= HEADER_SIZE as u64 {
        return Err(DictError::InvalidHeader.into());
    }
    // SAFETY: The file is opened read-only and the mapping is immutable.
    let mmap = unsafe { Mmap::map(&file)? };
    debug!(path = %path.display(), bytes = mmap.len(), "mapped dictionary");
    Ok(BinaryDictionary::with_settings(mmap, settings)?)
}

/// Write a compiled dictionary.
pub fn save(path: &Path, data: &[u8]) -> Result<(), CliError> {
    fs::write(path, data)?;
    Ok(())
}
