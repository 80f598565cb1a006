use crate::pipeline::{FileContents, FileDigests, LineDigests};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Format of `DateCreated`
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// File identity and descriptive metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meta {
    #[serde(rename = "FileName")]
    pub file_name: String,
    #[serde(rename = "MediaType")]
    pub media_type: String,
    #[serde(rename = "FileSize")]
    pub file_size: u64,
    #[serde(rename = "FileBase64")]
    pub file_base64: String,
    #[serde(rename = "Note")]
    pub note: String,
    #[serde(rename = "DateCreated")]
    pub date_created: String,
}

/// Whole-file digests as lowercase hex
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hashes {
    #[serde(rename = "MD5")]
    pub md5: String,
    #[serde(rename = "SHA1")]
    pub sha1: String,
    #[serde(rename = "SHA256")]
    pub sha256: String,
    #[serde(rename = "SHA512")]
    pub sha512: String,
}

/// Per-line digests in file order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lines {
    #[serde(rename = "Total")]
    pub total: usize,
    #[serde(rename = "SHA256")]
    pub sha256: Vec<String>,
    #[serde(rename = "MD5")]
    pub md5: Vec<String>,
}

/// The complete fingerprint of one file
///
/// Built once by [`build_record`] and only read afterwards; exporters take
/// it by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FingerprintRecord {
    #[serde(rename = "Meta")]
    pub meta: Meta,
    #[serde(rename = "Hashes")]
    pub hashes: Hashes,
    #[serde(rename = "Lines")]
    pub lines: Lines,
}

/// A section rendered as ordered `(key, value)` pairs
///
/// Keys match the serde names, values are the plain string form used by the
/// flat text and XML renderings.
pub type Fields = Vec<(&'static str, String)>;

impl Meta {
    pub fn fields(&self) -> Fields {
        vec![
            ("FileName", self.file_name.clone()),
            ("MediaType", self.media_type.clone()),
            ("FileSize", self.file_size.to_string()),
            ("FileBase64", self.file_base64.clone()),
            ("Note", self.note.clone()),
            ("DateCreated", self.date_created.clone()),
        ]
    }
}

impl Hashes {
    pub fn fields(&self) -> Fields {
        vec![
            ("MD5", self.md5.clone()),
            ("SHA1", self.sha1.clone()),
            ("SHA256", self.sha256.clone()),
            ("SHA512", self.sha512.clone()),
        ]
    }
}

impl Lines {
    pub fn fields(&self) -> Fields {
        vec![
            ("Total", self.total.to_string()),
            ("SHA256", list_string(&self.sha256)),
            ("MD5", list_string(&self.md5)),
        ]
    }
}

impl FingerprintRecord {
    /// The three sections in output order
    pub fn sections(&self) -> [(&'static str, Fields); 3] {
        [
            ("Meta", self.meta.fields()),
            ("Hashes", self.hashes.fields()),
            ("Lines", self.lines.fields()),
        ]
    }
}

/// Render a list the way the flat formats show it: `[a, b, c]`
pub fn list_string(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

/// Everything the record builder aggregates
pub struct RecordInputs<'a> {
    pub file_name: &'a str,
    pub contents: &'a FileContents,
    pub media_type: String,
    pub file_digests: FileDigests,
    pub line_digests: LineDigests,
    pub note: Option<&'a str>,
}

/// Assemble a record stamped with the current local time
pub fn build_record(inputs: RecordInputs<'_>) -> FingerprintRecord {
    build_record_at(inputs, Local::now())
}

/// Assemble a record with an explicit creation time
pub fn build_record_at(inputs: RecordInputs<'_>, created: DateTime<Local>) -> FingerprintRecord {
    let RecordInputs {
        file_name,
        contents,
        media_type,
        file_digests,
        line_digests,
        note,
    } = inputs;

    FingerprintRecord {
        meta: Meta {
            file_name: file_name.to_string(),
            media_type,
            file_size: contents.size,
            file_base64: STANDARD.encode(&contents.bytes),
            note: note.unwrap_or_default().to_string(),
            date_created: created.format(DATE_FORMAT).to_string(),
        },
        hashes: Hashes {
            md5: file_digests.md5,
            sha1: file_digests.sha1,
            sha256: file_digests.sha256,
            sha512: file_digests.sha512,
        },
        lines: Lines {
            total: line_digests.total(),
            sha256: line_digests.sha256,
            md5: line_digests.md5,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{digest_file, digest_lines};
    use chrono::TimeZone;

    fn inputs<'a>(contents: &'a FileContents, note: Option<&'a str>) -> RecordInputs<'a> {
        RecordInputs {
            file_name: "sample.txt",
            contents,
            media_type: "text/plain".into(),
            file_digests: digest_file(&contents.bytes),
            line_digests: digest_lines(&contents.bytes),
            note,
        }
    }

    #[test]
    fn test_build_record_fields() {
        let contents = FileContents {
            bytes: b"ab\ncd".to_vec(),
            size: 5,
        };
        let created = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        let record = build_record_at(inputs(&contents, Some("first pass")), created);

        assert_eq!(record.meta.file_name, "sample.txt");
        assert_eq!(record.meta.file_size, 5);
        assert_eq!(record.meta.file_base64, "YWIKY2Q=");
        assert_eq!(record.meta.note, "first pass");
        assert_eq!(record.meta.date_created, "2024-03-09 07:05:01");
        assert_eq!(record.hashes.md5, digest_file(b"ab\ncd").md5);
        assert_eq!(record.lines.total, 2);
        assert_eq!(record.lines.sha256.len(), 2);
        assert_eq!(record.lines.md5.len(), 2);
    }

    #[test]
    fn test_missing_note_is_empty() {
        let contents = FileContents {
            bytes: Vec::new(),
            size: 0,
        };
        let record = build_record(inputs(&contents, None));
        assert_eq!(record.meta.note, "");
        assert_eq!(record.lines.total, 0);
        assert_eq!(record.meta.file_base64, "");
    }

    #[test]
    fn test_date_created_shape() {
        let contents = FileContents {
            bytes: b"x".to_vec(),
            size: 1,
        };
        let record = build_record(inputs(&contents, None));
        let parsed = chrono::NaiveDateTime::parse_from_str(&record.meta.date_created, DATE_FORMAT);
        assert!(parsed.is_ok(), "unexpected timestamp {}", record.meta.date_created);
    }

    #[test]
    fn test_sections_order() {
        let contents = FileContents {
            bytes: b"one\ntwo\n".to_vec(),
            size: 8,
        };
        let record = build_record(inputs(&contents, None));
        let sections = record.sections();

        let names: Vec<&str> = sections.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["Meta", "Hashes", "Lines"]);

        let meta_keys: Vec<&str> = sections[0].1.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            meta_keys,
            ["FileName", "MediaType", "FileSize", "FileBase64", "Note", "DateCreated"]
        );

        let lines = &sections[2].1;
        assert_eq!(lines[0], ("Total", "2".to_string()));
        assert!(lines[1].1.starts_with('[') && lines[1].1.ends_with(']'));
    }

    #[test]
    fn test_list_string() {
        assert_eq!(list_string(&[]), "[]");
        assert_eq!(list_string(&["a".into(), "b".into()]), "[a, b]");
    }
}
