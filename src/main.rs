//! swordx - count words across directory trees
//!
//! swordx provides:
//! - Streaming tokenization of file contents into lowercase words
//! - Filtering by alphabet, minimum length and an ignore list
//! - A prefix-tree index of word -> occurrence count
//! - Directory traversal with exclusion, recursion and symlink policies
//! - Output in lexicographic or occurrence order (text/jsonl/json)

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;
mod lists;
mod logging;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::init_logging(logging::level_for(cli.verbose, cli.quiet));
    cli::run(cli)
}
