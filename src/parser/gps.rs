//! GPS decoder
//!
//! Resolves the nested GPS block of a tag mapping and converts its
//! degree/minute/second triples into a signed decimal coordinate.

use crate::error::GpsDecodeError;
use crate::parser::tag_names::{gps_key, GPS_INFO_NAME};
use crate::types::{Coordinate, TagMap, TagValue};

/// Extract the GPS block from a tag mapping, with entry names resolved.
///
/// Returns `None` when the image has no GPS block or the block is empty.
pub fn get_gps(tags: &TagMap) -> Option<TagMap> {
    let entries = match tags.get(GPS_INFO_NAME)? {
        TagValue::Gps(entries) if !entries.is_empty() => entries,
        _ => return None,
    };

    let mut gps = TagMap::new();
    for (id, value) in entries {
        gps.insert(gps_key(*id), value.clone());
    }
    Some(gps)
}

/// Convert one (degree, minute, second) value to decimal degrees
pub fn convert_to_degrees(value: &TagValue, tag: &'static str) -> Result<f64, GpsDecodeError> {
    let components = value
        .as_rationals()
        .ok_or(GpsDecodeError::UnexpectedType(tag))?;
    if components.len() < 3 {
        return Err(GpsDecodeError::TooFewComponents(tag));
    }

    let mut parts = [0.0f64; 3];
    for (part, rational) in parts.iter_mut().zip(components) {
        *part = rational
            .to_f64()
            .ok_or(GpsDecodeError::ZeroDenominator(tag))?;
    }
    let [degrees, minutes, seconds] = parts;
    Ok(degrees + minutes / 60.0 + seconds / 3600.0)
}

fn signed_axis(
    gps: &TagMap,
    value_tag: &'static str,
    ref_tag: &'static str,
    positive_ref: &str,
) -> Result<f64, GpsDecodeError> {
    let value = gps
        .get(value_tag)
        .ok_or(GpsDecodeError::MissingTag(value_tag))?;
    let degrees = convert_to_degrees(value, value_tag)?;
    let reference = gps
        .get(ref_tag)
        .ok_or(GpsDecodeError::MissingTag(ref_tag))?
        .as_text()
        .ok_or(GpsDecodeError::UnexpectedType(ref_tag))?;

    if reference == positive_ref {
        Ok(degrees)
    } else {
        Ok(-degrees)
    }
}

/// Convert a resolved GPS block to a decimal coordinate.
///
/// Latitude is negated unless its reference is exactly "N", longitude
/// unless its reference is exactly "E".
pub fn gps_to_decimal(gps: &TagMap) -> Result<Coordinate, GpsDecodeError> {
    let latitude = signed_axis(gps, "GPSLatitude", "GPSLatitudeRef", "N")?;
    let longitude = signed_axis(gps, "GPSLongitude", "GPSLongitudeRef", "E")?;
    Ok(Coordinate::new(latitude, longitude))
}
