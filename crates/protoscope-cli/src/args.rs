use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "protoscope")]
#[command(about = "Inspect recorded protocol sessions as a groupable timeline", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the chunked request timeline for a session log
    Timeline {
        /// Path to a JSONL session log
        log: PathBuf,

        /// Keep only chunks whose method matches this regex
        #[arg(long)]
        filter: Option<String>,
    },

    /// Resolve one timeline chunk into full request/response/error detail
    Show {
        /// Path to a JSONL session log
        log: PathBuf,

        /// Chunk index as printed by the timeline view
        chunk: usize,
    },

    /// Print aggregate statistics for a session log
    Summary {
        /// Path to a JSONL session log
        log: PathBuf,
    },
}
