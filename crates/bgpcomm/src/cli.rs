use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// bgpcomm — resolve BGP communities into human-readable labels.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Directories of `.jsonl` community label files, applied in order
    /// over the well-known communities (repeatable).
    #[arg(long, env = "BGPCOMM_LABELS_DIR", value_delimiter = ',')]
    pub labels_dir: Vec<PathBuf>,

    /// Start from an empty registry instead of the IANA well-known
    /// communities.
    #[arg(long)]
    pub no_well_known: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print `community<TAB>label` for each community, `-` when unknown.
    Lookup {
        /// Communities such as `65535:666` or `64512:100`.
        #[arg(required = true)]
        communities: Vec<String>,

        /// Exit with an error if any community is unknown.
        #[arg(long)]
        strict: bool,
    },

    /// Print the assembled registry.
    Dump {
        #[arg(long, value_enum, default_value_t = DumpFormat::Json)]
        format: DumpFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    /// Nested JSON objects, one level per segment.
    Json,
    /// One `{"community", "label"}` record per line.
    Jsonl,
}
