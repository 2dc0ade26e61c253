use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "defn", version)]
#[command(about = "Plain text dictionary: interactive prompt, one-shot commands and an HTTP API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Dictionary file (overrides the config file)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Directory holding defn.json
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive prompt (the default when no command is given)
    Repl,

    /// Add a word and its definition
    #[command(alias = "a")]
    Add {
        word: String,
        definition: String,
    },

    /// Remove the first entry for a word
    #[command(alias = "rm")]
    Remove { word: String },

    /// Print the definition of a word
    #[command(alias = "get")]
    Define { word: String },

    /// List every word with its definition
    #[command(alias = "ls")]
    List,

    /// Run the HTTP API
    Serve {
        /// Listen address (overrides the config file)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Print a signed token for the HTTP API
    Token {
        /// Name claim to embed
        #[arg(long)]
        name: Option<String>,

        /// Validity in hours
        #[arg(long, default_value_t = 72)]
        hours: u64,
    },

    /// Write a default defn.json into the config directory
    Init,
}
