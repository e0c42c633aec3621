/// Command-line argument definitions.
use clap::builder::TypedValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use docsleuth_core::catalog::{TagArea, DEFAULT_CATALOG_FILENAME};
use std::path::PathBuf;

/// Classify design-and-estimate documentation and propose canonical names.
#[derive(Parser, Debug)]
#[command(name = "docsleuth", version, about)]
pub struct Cli {
    /// Enable verbose logging (debug level to stderr)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Rule catalog file (created with defaults when missing)
    #[arg(long, global = true, value_name = "FILE", default_value = DEFAULT_CATALOG_FILENAME)]
    pub catalog: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify every file under a directory and propose canonical names
    Scan {
        /// Directory to scan
        path: PathBuf,

        /// Skip the filename-token phase
        #[arg(long)]
        no_name_match: bool,

        /// Skip the content phase (workbooks are never opened)
        #[arg(long)]
        no_content_match: bool,

        /// Show recognised files only
        #[arg(long)]
        recognised: bool,

        /// Export results to CSV; FILE defaults to docsleuth_scan_<date>.csv
        #[arg(
            long,
            value_name = "FILE",
            num_args = 0..=1,
            default_missing_value = "",
            // clap's stock PathBuf parser rejects empty values, which would
            // make the "" missing-value unrepresentable
            value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from)
        )]
        csv: Option<PathBuf>,
    },

    /// List the document-type rules in precedence order
    Types,

    /// Show one rule in full
    Show {
        /// Rule id, e.g. 1 or 7.1
        id: String,
    },

    /// Add a tag to a rule
    AddTag {
        /// Rule id
        id: String,

        /// Tag text
        tag: String,

        /// Which tag set to modify
        #[arg(long, value_enum, default_value = "name")]
        area: AreaArg,
    },

    /// Remove a tag from a rule (exact, case-sensitive match)
    RemoveTag {
        /// Rule id
        id: String,

        /// Tag text
        tag: String,

        /// Which tag set to modify
        #[arg(long, value_enum, default_value = "name")]
        area: AreaArg,
    },

    /// Replace a rule's rename mask
    SetMask {
        /// Rule id
        id: String,

        /// New mask text
        mask: String,
    },
}

/// Tag-set selector for `add-tag` / `remove-tag`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AreaArg {
    /// Tags matched against filename tokens
    Name,
    /// Tags matched against sampled content rows
    Content,
}

impl From<AreaArg> for TagArea {
    fn from(area: AreaArg) -> Self {
        match area {
            AreaArg::Name => TagArea::Name,
            AreaArg::Content => TagArea::Content,
        }
    }
}
