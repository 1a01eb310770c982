//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::config::{IndexConfig, DEFAULT_OUTPUT};
use crate::core::render::{OutputFormat, RenderConfig};

/// swordx - count word occurrences across files and directory trees.
#[derive(Parser, Debug)]
#[command(name = "swordx")]
#[command(
    author,
    version,
    about,
    long_about = r#"swordx reads every regular file under the given INPUTS, splits the content
into words (runs of letters and digits, lowercased), and counts how often
each word occurs.

The index is appended to the output file, one record per line, either in
alphabetical order (default) or by descending occurrence count.

Output formats:
- text: "word count" per line (default)
- jsonl: one JSON object per line
- json: a single JSON array

Examples:
    swordx notes.txt
    swordx -r -a --min 3 docs
    swordx -r --ignore stopwords.txt --sortbyoccurrence -o freq.txt src
    swordx -r --exclude skip.txt --output - .
"#
)]
pub struct Cli {
    /// Files or directories to scan.
    #[arg(
        value_name = "INPUTS",
        num_args = 0..,
        long_help = "Files or directories to scan (defaults to the current directory).\n\n\
Each root is processed even when it is a directory and --recursive is off;\n\
only subdirectories below a root need --recursive."
    )]
    pub inputs: Vec<PathBuf>,

    /// Descend into subdirectories.
    #[arg(short, long)]
    pub recursive: bool,

    /// Follow symbolic links.
    #[arg(
        short,
        long,
        long_help = "Resolve symbolic links and process their targets.\n\n\
Without this flag links are skipped, including a root that is a link.\n\
Each physical directory is indexed at most once per run, so link cycles terminate."
    )]
    pub follow: bool,

    /// Only count words made of letters (drop words containing digits).
    #[arg(short, long)]
    pub alpha: bool,

    /// Write words ordered by descending occurrence count.
    #[arg(
        short,
        long = "sortbyoccurrence",
        visible_alias = "sort-by-occurrence",
        alias = "sortbyoccurrency",
        long_help = "Write words ordered by descending occurrence count instead of\n\
alphabetically. Words with equal counts stay in alphabetical order."
    )]
    pub sort_by_occurrence: bool,

    /// File listing bare filenames to skip, one per line.
    #[arg(short, long, alias = "explude", value_name = "FILE")]
    pub exclude: Option<PathBuf>,

    /// Minimum word length to count (0 = no minimum).
    #[arg(short, long = "min", value_name = "N", default_value = "0")]
    pub min: usize,

    /// File listing words never to count, one per line.
    #[arg(short, long, value_name = "FILE")]
    pub ignore: Option<PathBuf>,

    /// Accepted for compatibility; currently has no effect.
    #[arg(short, long, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Output file (use - for stdout).
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "SWORDX_OUTPUT",
        default_value = DEFAULT_OUTPUT,
        long_help = "File the index is written to. Use - to write to stdout.\n\n\
The file is opened in append mode: running swordx twice without clearing it\n\
leaves both runs' records in the file. Pass --truncate to start fresh."
    )]
    pub output: PathBuf,

    /// Output format (text/jsonl/json).
    #[arg(
        long,
        default_value = "text",
        value_parser = ["text", "jsonl", "json"],
        value_name = "FORMAT"
    )]
    pub format: String,

    /// Pretty-print JSON output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Truncate the output file instead of appending to it.
    #[arg(long)]
    pub truncate: bool,

    /// Print run statistics to stderr.
    #[arg(long)]
    pub stats: bool,

    /// Verbose mode (more diagnostics).
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode (warnings and errors only).
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Freeze the parsed flags into the run configuration
    pub fn to_config(&self) -> IndexConfig {
        let inputs = if self.inputs.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.inputs.clone()
        };

        IndexConfig {
            inputs,
            recursive: self.recursive,
            follow: self.follow,
            alpha_only: self.alpha,
            sort_by_occurrence: self.sort_by_occurrence,
            min_len: self.min,
            exclude: self.exclude.clone(),
            ignore: self.ignore.clone(),
            log: self.log.clone(),
            output: self.output.clone(),
            format: self.format.parse().unwrap_or_default(),
            truncate: self.truncate,
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.to_config();
    let render_config = RenderConfig::with_pretty(config.format, cli.pretty);

    crate::flows::index::run_index(&config, render_config, cli.stats)
}
