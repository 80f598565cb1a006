use crate::error::{FingerprintError, Result};
use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

/// Label used when nothing more specific can be said about the content
pub const GENERIC_MEDIA_TYPE: &str = "application/octet-stream";

/// Label for zero-length files, matching what `file --mime-type` prints
pub const EMPTY_MEDIA_TYPE: &str = "inode/x-empty";

/// Label for content that decodes as UTF-8 but has no magic signature
pub const TEXT_MEDIA_TYPE: &str = "text/plain";

/// Media type detection backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Classifier {
    /// In-process magic byte sniffing
    #[default]
    Magic,
    /// Ask the `file` utility, falling back to `Magic` when it is unusable
    FileCommand,
}

impl std::str::FromStr for Classifier {
    type Err = FingerprintError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "magic" => Ok(Self::Magic),
            "file" => Ok(Self::FileCommand),
            _ => Err(FingerprintError::UnsupportedClassifier(s.to_string())),
        }
    }
}

impl Classifier {
    /// Best-effort media type for a file; never fails
    pub fn classify(&self, path: &Path, content: &[u8]) -> String {
        let media_type = match self {
            Classifier::Magic => sniff(content),
            Classifier::FileCommand => match file_command(path) {
                Some(media_type) => media_type,
                None => {
                    warn!(path = %path.display(), "file command unavailable, sniffing content instead");
                    sniff(content)
                }
            },
        };
        debug!(classifier = ?self, media_type = %media_type, "classified input");
        media_type
    }
}

/// Sniff a media type from content alone
pub fn sniff(content: &[u8]) -> String {
    if content.is_empty() {
        return EMPTY_MEDIA_TYPE.to_string();
    }
    if let Some(kind) = infer::get(content) {
        return kind.mime_type().to_string();
    }
    if std::str::from_utf8(content).is_ok() {
        TEXT_MEDIA_TYPE.to_string()
    } else {
        GENERIC_MEDIA_TYPE.to_string()
    }
}

fn file_command(path: &Path) -> Option<String> {
    let output = file_invocation(path).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let media_type = String::from_utf8(output.stdout).ok()?.trim().to_string();
    // `file` reports unreadable paths on stdout with a zero exit status
    if media_type.contains('/') && !media_type.contains(char::is_whitespace) {
        Some(media_type)
    } else {
        None
    }
}

/// `file` invocation; `--` keeps paths such as `-v` from being read as options
fn file_invocation(path: &Path) -> Command {
    let mut command = Command::new("file");
    command.args(["--mime-type", "-b", "--"]).arg(path);
    command
}
