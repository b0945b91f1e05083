//! Document loading for the command-line tool.
//!
//! This module reads JSON, JSON Lines, or YAML documents from files or stdin
//! (optionally gzip-compressed) and converts them into a [`Value`] that paths
//! can be resolved against.

use crate::value::Value;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Serialization format of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    /// One JSON value per line, loaded as an array
    JsonLines,
    Yaml,
}

impl Format {
    /// Determines the format from a file name, ignoring a trailing `.gz`.
    ///
    /// Examples:
    /// - `data.jsonl` → JsonLines
    /// - `data.yml.gz` → Yaml
    /// - `data.json`, `data` → Json
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path_str = path.as_ref().to_string_lossy();

        let base = if let Some(stripped) = path_str.strip_suffix(".gz") {
            stripped
        } else {
            &path_str
        };

        if base.ends_with(".jsonl") || base.ends_with(".ndjson") {
            Format::JsonLines
        } else if base.ends_with(".yaml") || base.ends_with(".yml") {
            Format::Yaml
        } else {
            Format::Json
        }
    }
}

/// Loads a document from the filesystem.
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be read
/// - The file has a `.gz` suffix but is not valid gzip
/// - The contents are not valid in the detected format
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    let format = Format::from_path(path_ref);
    log::debug!("loading {} as {:?}", path_ref.display(), format);
    parse_str(&content, format)
}

/// Loads a document from standard input.
///
/// Gzip input is detected by its magic bytes. The content is tried as JSON,
/// then JSON Lines, then YAML.
pub fn load_stdin() -> Result<Value> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in stdin")?
    };

    parse_detect(&content)
}

/// Parses content whose format is unknown, trying JSON, JSON Lines, then YAML.
pub fn parse_detect(content: &str) -> Result<Value> {
    for format in [Format::Json, Format::JsonLines] {
        if let Ok(value) = parse_str(content, format) {
            log::debug!("detected {:?} input", format);
            return Ok(value);
        }
    }
    parse_str(content, Format::Yaml)
        .context("Failed to parse input: not valid JSON, JSON Lines, or YAML")
}

/// Parses `content` in the given format.
pub fn parse_str(content: &str, format: Format) -> Result<Value> {
    match format {
        Format::Json => {
            let value: serde_json::Value =
                serde_json::from_str(content).context("Failed to parse JSON")?;
            Ok(value.into())
        }
        Format::JsonLines => parse_jsonl_content(content),
        Format::Yaml => {
            let value: serde_yaml::Value =
                serde_yaml::from_str(content).context("Failed to parse YAML")?;
            Ok(value.into())
        }
    }
}

/// Parses JSONL content into an array with one element per line.
///
/// Blank lines are skipped.
fn parse_jsonl_content(content: &str) -> Result<Value> {
    let mut lines = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let value: serde_json::Value = serde_json::from_str(line)
            .with_context(|| format!("Invalid JSON on line {}", line_num + 1))?;
        lines.push(Value::from(value));
    }

    if lines.is_empty() {
        anyhow::bail!("No valid JSON found in JSONL content");
    }

    Ok(Value::Array(lines))
}

fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped stdin")?;
    Ok(content)
}
