pub mod commands;
pub mod dict_file;
pub mod error;
pub mod proximity;
pub mod trace_init;
pub mod wordlist;

pub use error::CliError;
