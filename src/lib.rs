//! Fingerprinter - structured fingerprints of single files
//!
//! A fingerprint describes one file through its metadata and digests:
//! name, detected media type, size, the full content as base64, an optional
//! note and a creation timestamp, followed by MD5/SHA-1/SHA-256/SHA-512 of
//! the whole file and SHA-256/MD5 of every line.
//!
//! ## Pipeline
//!
//! ```text
//! Read → Classify → Digest → Build record → Serialize → (Base64) → Output
//! ```
//!
//! - **Read**: whole file into memory, plus the size the filesystem reports
//! - **Classify**: magic byte sniffing (or the `file` utility), never fatal
//! - **Digest**: whole-file digests and per-line digests over one segmentation
//! - **Build record**: immutable [`FingerprintRecord`]
//! - **Serialize**: JSON (default), YAML, XML or plain text
//!
//! ## Example
//!
//! ```no_run
//! use fingerprinter::cli::{fingerprint_file, FingerprintOptions};
//! use fingerprinter::export::Format;
//! use std::path::Path;
//!
//! let options = FingerprintOptions {
//!     note: Some("release artifact".into()),
//!     format: Format::Yaml,
//!     ..Default::default()
//! };
//! let yaml = fingerprint_file(Path::new("build/app.tar.gz"), &options).unwrap();
//! println!("{}", yaml);
//! ```

pub mod cli;
pub mod error;
pub mod export;
pub mod logging;
pub mod pipeline;
pub mod record;

pub use error::{FingerprintError, Result};
pub use export::Format;
pub use record::FingerprintRecord;
