//! Renderer module
//!
//! Writes word records to the output sink in one of three formats:
//! text (`word count`), jsonl, or json. Records are streamed, never
//! buffered as a whole, so a trie-order dump needs no extra memory.

use serde::Serialize;
use std::io::{self, Write};

use crate::core::model::WordRecord;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Serializes word records to a writer
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Append every record to `writer` in iteration order.
    ///
    /// Returns the number of records written.
    pub fn write_records<W, I>(&self, records: I, mut writer: W) -> io::Result<usize>
    where
        W: Write,
        I: IntoIterator<Item = WordRecord>,
    {
        let mut written = 0;

        if self.config.format == OutputFormat::Json {
            writer.write_all(b"[")?;
        }

        for record in records {
            match self.config.format {
                OutputFormat::Text => writeln!(writer, "{} {}", record.word, record.count)?,
                OutputFormat::Jsonl => {
                    self.write_json(&mut writer, &record)?;
                    writer.write_all(b"\n")?;
                }
                OutputFormat::Json => {
                    if written > 0 {
                        writer.write_all(b",")?;
                    }
                    if self.config.pretty {
                        writer.write_all(b"\n")?;
                    }
                    self.write_json(&mut writer, &record)?;
                }
            }
            written += 1;
        }

        if self.config.format == OutputFormat::Json {
            if self.config.pretty && written > 0 {
                writer.write_all(b"\n")?;
            }
            writer.write_all(b"]\n")?;
        }

        Ok(written)
    }

    fn write_json<W: Write, T: Serialize>(&self, writer: &mut W, value: &T) -> io::Result<()> {
        if self.config.pretty {
            serde_json::to_writer_pretty(&mut *writer, value)?;
        } else {
            serde_json::to_writer(&mut *writer, value)?;
        }
        Ok(())
    }
}
