//! Index flow - one complete run
//!
//! Load the exclude and ignore lists, open the output sink, walk every root
//! into a fresh word trie, then write either the trie-order dump or the
//! rank-order dump. The trie lives exactly as long as this call.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use tracing::{debug, info, warn};

use crate::backends::scan::Scanner;
use crate::core::config::IndexConfig;
use crate::core::filter::{FilterPipeline, Rejection};
use crate::core::model::{IndexError, ScanReport, WordRecord};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::trie::WordTrie;
use crate::flows::rank::rank_by_occurrence;
use crate::lists::exclude::ExclusionSet;
use crate::lists::ignore::load_ignore_index;

/// Open the output sink: stdout for `-`, otherwise a file in append mode
/// (or truncate mode when requested).
pub fn open_sink(config: &IndexConfig) -> Result<Box<dyn Write>, IndexError> {
    if config.writes_to_stdout() {
        return Ok(Box::new(io::stdout().lock()));
    }

    let mut options = OpenOptions::new();
    options.create(true);
    if config.truncate {
        options.write(true).truncate(true);
    } else {
        options.append(true);
    }

    let file = options
        .open(&config.output)
        .map_err(|source| IndexError::Config {
            role: "output",
            path: config.output.clone(),
            source,
        })?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Index every root and write the result to `sink`
pub fn index_into<W: Write>(
    config: &IndexConfig,
    render: RenderConfig,
    sink: W,
) -> Result<ScanReport> {
    if let Some(log) = &config.log {
        debug!(path = %log.display(), "--log is accepted but has no effect");
    }

    let mut setup_errors = Vec::new();

    let exclusions = match &config.exclude {
        Some(path) => ExclusionSet::load(path).unwrap_or_else(|err| {
            warn!(code = err.code(), "{}; continuing without exclusions", err);
            setup_errors.push(err);
            ExclusionSet::new()
        }),
        None => ExclusionSet::new(),
    };

    let ignore: Option<WordTrie> = match &config.ignore {
        Some(path) => match load_ignore_index(path) {
            Ok(index) => Some(index),
            Err(err) if err.is_fatal() => return Err(err).context("failed to build ignore index"),
            Err(err) => {
                warn!(code = err.code(), "{}; continuing without ignore list", err);
                setup_errors.push(err);
                None
            }
        },
        None => None,
    };

    let mut trie = WordTrie::new();
    let filter = FilterPipeline::new(config, ignore.as_ref());
    let mut report = Scanner::new(config, &exclusions, filter)
        .scan_all(&mut trie)
        .context("indexing aborted")?;
    setup_errors.append(&mut report.errors);
    report.errors = setup_errors;

    let renderer = Renderer::with_config(render);
    let written = if config.sort_by_occurrence {
        renderer.write_records(rank_by_occurrence(&trie), sink)
    } else {
        renderer.write_records(trie.iter().map(WordRecord::from), sink)
    }
    .context("failed to write index")?;

    info!(
        files = report.files_indexed,
        words = report.distinct_words,
        records = written,
        errors = report.errors.len(),
        "index written"
    );
    Ok(report)
}

/// Run the index command
pub fn run_index(config: &IndexConfig, render: RenderConfig, show_stats: bool) -> Result<()> {
    let mut sink = open_sink(config).context("output sink is unusable")?;
    let report = index_into(config, render, &mut sink)?;
    sink.flush().context("failed to flush output")?;

    if show_stats {
        print_stats(&report);
    }

    Ok(())
}

/// Print a run summary to stderr
pub fn print_stats(report: &ScanReport) {
    eprintln!("Index Statistics:");
    eprintln!("   Files indexed: {}", report.files_indexed);
    eprintln!("   Files excluded: {}", report.files_excluded);
    eprintln!(
        "   Skipped: {} links, {} directories, {} revisits",
        report.links_skipped, report.dirs_skipped, report.dirs_revisited
    );
    eprintln!(
        "   Tokens: {} seen, {} counted",
        report.tokens_seen, report.tokens_accepted
    );
    for reason in [
        Rejection::NonAlphabetic,
        Rejection::TooShort,
        Rejection::Ignored,
    ] {
        let n = report.rejected(reason);
        if n > 0 {
            eprintln!("   Rejected ({}): {}", reason.as_str(), n);
        }
    }
    eprintln!("   Distinct words: {}", report.distinct_words);
    if !report.errors.is_empty() {
        eprintln!("   Errors: {}", report.errors.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::OutputFormat;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn run_to_string(config: &IndexConfig) -> (String, ScanReport) {
        let mut buffer = Vec::new();
        let report = index_into(config, RenderConfig::default(), &mut buffer).unwrap();
        (String::from_utf8(buffer).unwrap(), report)
    }

    fn config_for(root: &Path) -> IndexConfig {
        IndexConfig {
            inputs: vec![root.to_path_buf()],
            alpha_only: true,
            ..IndexConfig::default()
        }
    }

    #[test]
    fn test_trie_order_output() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("pets.txt"), "Cat cat DOG dog dog").unwrap();

        let (output, report) = run_to_string(&config_for(temp.path()));
        assert_eq!(output, "cat 2\ndog 3\n");
        assert_eq!(report.distinct_words, 2);
    }

    #[test]
    fn test_rank_order_output() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("pets.txt"), "Cat cat DOG dog dog").unwrap();

        let config = IndexConfig {
            sort_by_occurrence: true,
            ..config_for(temp.path())
        };
        let (output, _) = run_to_string(&config);
        assert_eq!(output, "dog 3\ncat 2\n");
    }

    #[test]
    fn test_ignore_list_applied() {
        let temp = tempdir().unwrap();
        let corpus = temp.path().join("corpus");
        fs::create_dir(&corpus).unwrap();
        fs::write(corpus.join("pets.txt"), "Cat cat DOG dog dog").unwrap();
        let ignore = temp.path().join("ignore.txt");
        fs::write(&ignore, "dog\n").unwrap();

        let config = IndexConfig {
            ignore: Some(ignore),
            ..config_for(&corpus)
        };
        let (output, report) = run_to_string(&config);
        assert_eq!(output, "cat 2\n");
        assert_eq!(report.rejected(Rejection::Ignored), 3);
    }

    #[test]
    fn test_missing_lists_are_reported_and_skipped() {
        let temp = tempdir().unwrap();
        let corpus = temp.path().join("corpus");
        fs::create_dir(&corpus).unwrap();
        fs::write(corpus.join("a.txt"), "still counted").unwrap();

        let config = IndexConfig {
            exclude: Some(temp.path().join("no-exclude")),
            ignore: Some(temp.path().join("no-ignore")),
            ..config_for(&corpus)
        };
        let (output, report) = run_to_string(&config);
        assert_eq!(output, "counted 1\nstill 1\n");
        assert_eq!(report.error_codes(), vec!["CONFIG_ERROR", "CONFIG_ERROR"]);
    }

    #[test]
    fn test_jsonl_output() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("f.txt"), "b a b").unwrap();

        let mut buffer = Vec::new();
        index_into(
            &config_for(temp.path()),
            RenderConfig::new(OutputFormat::Jsonl),
            &mut buffer,
        )
        .unwrap();

        let records: Vec<WordRecord> = String::from_utf8(buffer)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(
            records,
            vec![WordRecord::new("a", 1), WordRecord::new("b", 2)]
        );
    }

    #[test]
    fn test_sink_appends_across_runs() {
        let temp = tempdir().unwrap();
        let corpus = temp.path().join("corpus");
        fs::create_dir(&corpus).unwrap();
        fs::write(corpus.join("f.txt"), "word").unwrap();
        let output = temp.path().join("out.txt");

        let config = IndexConfig {
            output: output.clone(),
            ..config_for(&corpus)
        };
        run_index(&config, RenderConfig::default(), false).unwrap();
        run_index(&config, RenderConfig::default(), false).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "word 1\nword 1\n");

        let truncating = IndexConfig {
            truncate: true,
            ..config
        };
        run_index(&truncating, RenderConfig::default(), false).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "word 1\n");
    }

    #[test]
    fn test_unusable_sink_aborts() {
        let temp = tempdir().unwrap();
        let config = IndexConfig {
            output: temp.path().join("missing-dir").join("out.txt"),
            ..config_for(temp.path())
        };
        let err = run_index(&config, RenderConfig::default(), false).unwrap_err();
        assert!(err.to_string().contains("output sink is unusable"));
    }
}
