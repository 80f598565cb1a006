use crate::error::Result;
use crate::export::{encode_base64, Destination, Format};
use crate::pipeline::{digest_file, digest_lines, read_file, Classifier};
use crate::record::{build_record, FingerprintRecord, RecordInputs};
use std::path::{Path, PathBuf};
use tracing::info;

/// Options for fingerprinting a file
#[derive(Debug, Clone, Default)]
pub struct FingerprintOptions {
    pub note: Option<String>,
    pub format: Format,
    pub base64_output: bool,
    pub output: Option<PathBuf>,
    pub classifier: Classifier,
}

/// Read, classify and digest a file into a record
pub fn generate_fingerprint(
    input_path: &Path,
    note: Option<&str>,
    classifier: Classifier,
) -> Result<FingerprintRecord> {
    let contents = read_file(input_path)?;
    let media_type = classifier.classify(input_path, &contents.bytes);
    let file_digests = digest_file(&contents.bytes);
    let line_digests = digest_lines(&contents.bytes);

    let file_name = input_path.to_string_lossy();
    let record = build_record(RecordInputs {
        file_name: &file_name,
        contents: &contents,
        media_type,
        file_digests,
        line_digests,
        note,
    });
    info!(
        file = %record.meta.file_name,
        size = record.meta.file_size,
        lines = record.lines.total,
        "fingerprint generated"
    );
    Ok(record)
}

/// Serialize a record and apply the base64 wrapping if requested
pub fn render_fingerprint(record: &FingerprintRecord, options: &FingerprintOptions) -> Result<String> {
    let output = options.format.serialize(record)?;
    if options.base64_output {
        Ok(encode_base64(&output))
    } else {
        Ok(output)
    }
}

/// Fingerprint a file and return the final text without writing it
pub fn fingerprint_file(input_path: &Path, options: &FingerprintOptions) -> Result<String> {
    let record = generate_fingerprint(input_path, options.note.as_deref(), options.classifier)?;
    render_fingerprint(&record, options)
}

/// Fingerprint a file and deliver the text to stdout or the output file
pub fn run_fingerprint(input_path: &Path, options: &FingerprintOptions) -> Result<()> {
    let output = fingerprint_file(input_path, options)?;
    Destination::from_option(options.output.clone()).write(&output)
}
