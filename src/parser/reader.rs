//! Metadata reader
//!
//! Opens an image container, pulls its EXIF block with `kamadak-exif` and
//! flattens the primary image's fields into a [`TagMap`]. GPS fields are
//! kept together as one nested value under [`GPS_INFO_NAME`].

use crate::error::MetaxError;
use crate::parser::tag_names::{exif_key, GPS_INFO_NAME, GPS_INFO_TAG};
use crate::types::{Rational, TagMap, TagValue};
use crate::Result;
use anyhow::Context as _;
use exif::{Context, Field, In, Value};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::Path;
use tracing::{debug, warn};

/// Read the tag mapping of an image file.
///
/// A readable image without EXIF yields an empty mapping. Open failures and
/// unreadable containers are errors.
pub fn read_exif_tags(path: &Path) -> Result<TagMap> {
    let file =
        File::open(path).with_context(|| format!("Failed to open image file: {:?}", path))?;
    let mut reader = BufReader::new(file);
    read_container(&mut reader).with_context(|| format!("Failed to read EXIF from {:?}", path))
}

/// Read the tag mapping of an image already held in memory
pub fn read_exif_tags_from_bytes(data: &[u8]) -> Result<TagMap> {
    let mut reader = Cursor::new(data);
    read_container(&mut reader)
}

fn read_container<R: BufRead + Seek>(reader: &mut R) -> Result<TagMap> {
    let result = exif::Reader::new()
        .continue_on_error(true)
        .read_from_container(reader)
        .or_else(|e| {
            e.distill_partial_result(|errors| {
                for err in &errors {
                    warn!("Skipping unreadable EXIF entry: {}", err);
                }
            })
        });

    match result {
        Ok(exif) => {
            let tags = tags_from_fields(exif.fields());
            debug!("Read {} EXIF tags", tags.len());
            Ok(tags)
        }
        Err(exif::Error::NotFound(container)) => {
            debug!("No EXIF data in {} container", container);
            Ok(TagMap::new())
        }
        Err(e) => Err(MetaxError::Exif(e).into()),
    }
}

/// Build the tag mapping from decoded EXIF fields.
///
/// Only primary-image fields are kept. The EXIF and Interoperability IFD
/// pointers stay as plain values; Interoperability entries are dropped. The
/// GPS pointer is replaced by the nested GPS block, whose entries keep their
/// raw ids for the decoder.
pub fn tags_from_fields<'a>(fields: impl IntoIterator<Item = &'a Field>) -> TagMap {
    let mut tags = TagMap::new();
    let mut gps_entries: Vec<(u16, TagValue)> = Vec::new();

    for field in fields {
        if field.ifd_num != In::PRIMARY {
            continue;
        }
        let id = field.tag.number();
        match field.tag.context() {
            Context::Tiff | Context::Exif => {
                if id == GPS_INFO_TAG {
                    continue;
                }
                tags.insert(exif_key(id), convert_value(field));
            }
            Context::Gps => gps_entries.push((id, convert_value(field))),
            _ => {}
        }
    }

    if !gps_entries.is_empty() {
        tags.insert(GPS_INFO_NAME, TagValue::Gps(gps_entries));
    }
    tags
}

fn convert_value(field: &Field) -> TagValue {
    match &field.value {
        Value::Ascii(strings) => TagValue::Text(
            strings
                .iter()
                .map(|s| {
                    String::from_utf8_lossy(s)
                        .trim_end_matches('\0')
                        .to_string()
                })
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Byte(bytes) => TagValue::Bytes(bytes.clone()),
        Value::Undefined(bytes, _) => TagValue::Bytes(bytes.clone()),
        Value::SByte(values) => TagValue::Integers(values.iter().map(|&v| v as i64).collect()),
        Value::Short(values) => TagValue::Integers(values.iter().map(|&v| v as i64).collect()),
        Value::SShort(values) => TagValue::Integers(values.iter().map(|&v| v as i64).collect()),
        Value::Long(values) => TagValue::Integers(values.iter().map(|&v| v as i64).collect()),
        Value::SLong(values) => TagValue::Integers(values.iter().map(|&v| v as i64).collect()),
        Value::Rational(values) => TagValue::Rationals(
            values
                .iter()
                .map(|r| Rational::new(r.num as i64, r.denom as i64))
                .collect(),
        ),
        Value::SRational(values) => TagValue::Rationals(
            values
                .iter()
                .map(|r| Rational::new(r.num as i64, r.denom as i64))
                .collect(),
        ),
        Value::Float(values) => TagValue::Floats(values.iter().map(|&v| v as f64).collect()),
        Value::Double(values) => TagValue::Floats(values.clone()),
        _ => TagValue::Text(field.display_value().to_string()),
    }
}
