use clap::{Parser, Subcommand};

use suggest_cli::commands::{config_ops, dict_ops, query_ops};

#[derive(Parser)]
#[command(name = "dictool", about = "Suggestion dictionary tool")]
struct Cli {
    /// Custom settings TOML (defaults are embedded)
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a word list into a binary dictionary
    Compile {
        /// Word list (word<TAB>frequency per line)
        wordlist: String,
        /// Output file
        output_file: String,
        /// Bigram list (previous<TAB>next<TAB>frequency per line)
        #[arg(long)]
        bigrams: Option<String>,
    },
    /// Show dictionary header and word count
    Info {
        /// Dictionary file
        dict_file: String,
    },
    /// Print every word with its frequency
    Dump {
        /// Dictionary file
        dict_file: String,
    },
    /// Check whether a word is in the dictionary (case-insensitive)
    Check {
        /// Dictionary file
        dict_file: String,
        /// Word to look up
        word: String,
    },
    /// Suggest corrections and completions for typed text
    Suggest {
        /// Dictionary file
        dict_file: String,
        /// Typed text (QWERTY neighbors are added as alternatives)
        typed: String,
        /// Edit-distance budget (default: 2, or half the input length)
        #[arg(long)]
        max_edit: Option<usize>,
        /// Run a single pass treating this position as missing or extra
        #[arg(long)]
        skip: Option<usize>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Predict words that follow a previous word
    Bigrams {
        /// Dictionary file
        dict_file: String,
        /// Previous word
        previous: String,
        /// Typed start of the next word (optional)
        typed: Option<String>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    suggest_cli::trace_init::init_tracing();
    let cli = Cli::parse();
    if let Some(file) = &cli.settings {
        config_ops::load_settings(file);
    }

    match cli.command {
        Command::Compile {
            wordlist,
            output_file,
            bigrams,
        } => dict_ops::compile(&wordlist, &output_file, bigrams.as_deref()),
        Command::Info { dict_file } => dict_ops::info(&dict_file),
        Command::Dump { dict_file } => dict_ops::dump(&dict_file),
        Command::Check { dict_file, word } => query_ops::check(&dict_file, &word),
        Command::Suggest {
            dict_file,
            typed,
            max_edit,
            skip,
            json,
        } => query_ops::suggest(&dict_file, &typed, max_edit, skip, json),
        Command::Bigrams {
            dict_file,
            previous,
            typed,
            json,
        } => query_ops::bigrams(&dict_file, &previous, typed.as_deref(), json),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
