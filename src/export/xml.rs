//! Flat XML under a `Fingerprint` root

use crate::error::{FingerprintError, Result};
use crate::record::FingerprintRecord;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

const ROOT: &str = "Fingerprint";

/// Serialize a record as XML
///
/// Every field is one element holding its string form; list fields are not
/// expanded into repeated elements.
pub fn to_xml(record: &FingerprintRecord) -> Result<String> {
    let mut writer = Writer::new(Vec::new());

    write(&mut writer, Event::Start(BytesStart::new(ROOT)))?;
    for (section, fields) in record.sections() {
        write(&mut writer, Event::Start(BytesStart::new(section)))?;
        for (key, value) in &fields {
            write(&mut writer, Event::Start(BytesStart::new(*key)))?;
            write(&mut writer, Event::Text(BytesText::new(value)))?;
            write(&mut writer, Event::End(BytesEnd::new(*key)))?;
        }
        write(&mut writer, Event::End(BytesEnd::new(section)))?;
    }
    write(&mut writer, Event::End(BytesEnd::new(ROOT)))?;

    String::from_utf8(writer.into_inner()).map_err(|e| FingerprintError::Xml(e.to_string()))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| FingerprintError::Xml(e.to_string()))
}
