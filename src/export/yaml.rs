//! YAML block mappings

use crate::error::Result;
use crate::record::FingerprintRecord;

/// Serialize a record as a YAML document
pub fn to_yaml(record: &FingerprintRecord) -> Result<String> {
    Ok(serde_yaml::to_string(record)?)
}
