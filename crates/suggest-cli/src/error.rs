use std::io;

use suggest_core::settings::SettingsError;
use suggest_core::DictError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("dictionary error: {0}")]
    Dict(#[from] DictError),

    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}
