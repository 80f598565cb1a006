//! Plain `Key: Value` text

use crate::record::FingerprintRecord;

/// Render a record as three blank-line separated blocks
pub fn to_text(record: &FingerprintRecord) -> String {
    let blocks: Vec<String> = record
        .sections()
        .into_iter()
        .map(|(_, fields)| {
            fields
                .iter()
                .map(|(key, value)| format!("{}: {}\n", key, value))
                .collect::<String>()
        })
        .collect();
    blocks.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests::sample_record;

    #[test]
    fn test_to_text_blocks() {
        let record = sample_record();
        let text = to_text(&record);

        let blocks: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].starts_with("FileName: sample.txt\nMediaType: text/plain\n"));
        assert!(blocks[0].contains("Note: \nDateCreated: 2024-01-02 03:04:05"));
        assert!(blocks[1].starts_with(&format!("MD5: {}", record.hashes.md5)));
        assert!(blocks[2].starts_with("Total: 2\n"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_to_text_lists_inline() {
        let record = sample_record();
        let text = to_text(&record);
        let expected = format!(
            "SHA256: [{}, {}]\n",
            record.lines.sha256[0], record.lines.sha256[1]
        );
        assert!(text.contains(&expected));
    }
}
