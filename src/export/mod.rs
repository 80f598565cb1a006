//! Output formats for fingerprint records
//!
//! Supported formats:
//! - JSON (pretty-printed, the default)
//! - YAML
//! - XML (flat, one element per field)
//! - Text (`Key: Value` blocks)
//!
//! Serialization always completes in memory before anything is written, so
//! a failure never leaves a partial output file behind.

pub mod json;
pub mod text;
pub mod xml;
pub mod yaml;

use crate::error::{FingerprintError, Result};
use crate::record::FingerprintRecord;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Serialization formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Yaml,
    Xml,
    Txt,
}

impl std::str::FromStr for Format {
    type Err = FingerprintError;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            "xml" => Ok(Self::Xml),
            "txt" => Ok(Self::Txt),
            _ => Err(FingerprintError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Xml => "xml",
            Format::Txt => "txt",
        };
        f.write_str(name)
    }
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Json, Format::Yaml, Format::Xml, Format::Txt];

    /// Serialize a record in this format
    pub fn serialize(&self, record: &FingerprintRecord) -> Result<String> {
        let output = match self {
            Format::Json => json::to_json(record)?,
            Format::Yaml => yaml::to_yaml(record)?,
            Format::Xml => xml::to_xml(record)?,
            Format::Txt => text::to_text(record),
        };
        debug!(format = %self, bytes = output.len(), "serialized fingerprint");
        Ok(output)
    }
}

/// Base64-encode serialized output (standard alphabet, padded)
pub fn encode_base64(output: &str) -> String {
    STANDARD.encode(output.as_bytes())
}

/// Where the final text goes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Destination {
    #[default]
    Stdout,
    File(PathBuf),
}

impl Destination {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Destination::Stdout, Destination::File)
    }

    /// Write the text, replacing any existing file
    pub fn write(&self, output: &str) -> Result<()> {
        match self {
            Destination::Stdout => {
                println!("{}", output);
                Ok(())
            }
            Destination::File(path) => write_file(path, output),
        }
    }
}

fn write_file(path: &Path, output: &str) -> Result<()> {
    std::fs::write(path, output).map_err(|source| FingerprintError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = output.len(), "wrote fingerprint");
    Ok(())
}
