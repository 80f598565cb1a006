use digest::Digest;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use tracing::debug;

/// Digest algorithms a fingerprint carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
    ];

    /// Length of the lowercase hex digest
    pub fn hex_len(&self) -> usize {
        match self {
            HashAlgorithm::Md5 => 32,
            HashAlgorithm::Sha1 => 40,
            HashAlgorithm::Sha256 => 64,
            HashAlgorithm::Sha512 => 128,
        }
    }

    /// Lowercase hex digest of `data`
    pub fn hex_digest(&self, data: &[u8]) -> String {
        match self {
            HashAlgorithm::Md5 => hex_digest::<Md5>(data),
            HashAlgorithm::Sha1 => hex_digest::<Sha1>(data),
            HashAlgorithm::Sha256 => hex_digest::<Sha256>(data),
            HashAlgorithm::Sha512 => hex_digest::<Sha512>(data),
        }
    }
}

fn hex_digest<D: Digest>(data: &[u8]) -> String {
    hex::encode(D::digest(data))
}

/// Whole-file digests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDigests {
    pub md5: String,
    pub sha1: String,
    pub sha256: String,
    pub sha512: String,
}

/// Per-line digests, one entry per segment in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDigests {
    pub sha256: Vec<String>,
    pub md5: Vec<String>,
}

impl LineDigests {
    pub fn total(&self) -> usize {
        self.sha256.len()
    }
}

/// Compute the four whole-file digests
pub fn digest_file(content: &[u8]) -> FileDigests {
    FileDigests {
        md5: HashAlgorithm::Md5.hex_digest(content),
        sha1: HashAlgorithm::Sha1.hex_digest(content),
        sha256: HashAlgorithm::Sha256.hex_digest(content),
        sha512: HashAlgorithm::Sha512.hex_digest(content),
    }
}

/// Compute SHA-256 and MD5 for every line
pub fn digest_lines(content: &[u8]) -> LineDigests {
    let lines = split_lines(content);
    let sha256 = lines
        .iter()
        .map(|line| HashAlgorithm::Sha256.hex_digest(line))
        .collect();
    let md5 = lines
        .iter()
        .map(|line| HashAlgorithm::Md5.hex_digest(line))
        .collect();
    debug!(lines = lines.len(), "computed line digests");
    LineDigests { sha256, md5 }
}

/// Split content into lines without their terminators
///
/// Lines end at `\n`, and a `\r` right before it belongs to the terminator.
/// A final terminator does not open an extra empty line, so empty content
/// has no lines at all. A lone `\r` is line content, not a separator.
pub fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    if content.is_empty() {
        return Vec::new();
    }
    let body = content.strip_suffix(b"\n").unwrap_or(content);
    let count = body.split(|b| *b == b'\n').count();
    let last_terminated = body.len() != content.len();

    body.split(|b| *b == b'\n')
        .enumerate()
        .map(|(i, line)| {
            if i + 1 < count || last_terminated {
                line.strip_suffix(b"\r").unwrap_or(line)
            } else {
                line
            }
        })
        .collect()
}
