use crate::error::{FingerprintError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Raw bytes of a file together with their length
#[derive(Debug, Clone)]
pub struct FileContents {
    pub bytes: Vec<u8>,
    /// Number of bytes actually read, which is what the digests cover
    pub size: u64,
}

/// Read a whole file into memory
///
/// The handle is opened and drained in one scope, so it is closed before
/// this returns. The metadata length only sizes the buffer: procfs files
/// report 0 and a growing file may outpace it, so `size` is taken from the
/// bytes read. Open and read failures keep the path and the OS reason.
pub fn read_file(path: &Path) -> Result<FileContents> {
    let read_error = |source| FingerprintError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(read_error)?;
    let reported = file.metadata().map_err(read_error)?.len();

    let mut bytes = Vec::with_capacity(reported as usize);
    file.read_to_end(&mut bytes).map_err(read_error)?;

    let size = bytes.len() as u64;
    if size != reported {
        warn!(path = %path.display(), reported, read = size, "file size changed or is not reported by the filesystem");
    }
    debug!(path = %path.display(), size, "read input file");
    Ok(FileContents { bytes, size })
}
