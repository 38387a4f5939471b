//! Single-image analysis pipeline
//!
//! Reader → decoder → formatters → geocoder. Produces an [`AnalysisReport`];
//! only the reader can fail, everything after it degrades to "absent".

use crate::conversion::{decimal_to_ddm, decimal_to_dms, map_links, to_maidenhead, to_utm};
use crate::geocode::ReverseGeocoder;
use crate::olc;
use crate::parser::{get_gps, gps_to_decimal, read_exif_tags};
use crate::types::{AnalysisReport, Coordinate, LocationReport, TagMap};
use crate::Result;
use std::path::Path;
use tracing::{debug, info};

/// Read an image and derive every location notation for it
pub fn analyze_image(path: &Path, geocoder: &dyn ReverseGeocoder) -> Result<AnalysisReport> {
    info!("Analyzing {:?}", path);
    let tags = read_exif_tags(path)?;
    Ok(analyze_tags(path, tags, geocoder))
}

/// Run the decode/format/geocode stages over an already-read tag mapping
pub fn analyze_tags(path: &Path, tags: TagMap, geocoder: &dyn ReverseGeocoder) -> AnalysisReport {
    let gps_raw = get_gps(&tags);
    let coordinate = match gps_raw.as_ref().map(gps_to_decimal) {
        Some(Ok(coordinate)) => Some(coordinate),
        Some(Err(e)) => {
            debug!("GPS block present but unusable: {}", e);
            None
        }
        None => {
            debug!("No GPS block in {:?}", path);
            None
        }
    };

    let location = coordinate.map(|coordinate| locate(coordinate, geocoder));

    AnalysisReport {
        path: path.to_path_buf(),
        tags,
        gps_raw,
        location,
    }
}

/// Every derived notation for a coordinate, plus the geocode lookup
pub fn locate(coordinate: Coordinate, geocoder: &dyn ReverseGeocoder) -> LocationReport {
    let Coordinate {
        latitude,
        longitude,
    } = coordinate;

    LocationReport {
        coordinate,
        dms_latitude: decimal_to_dms(latitude),
        dms_longitude: decimal_to_dms(longitude),
        ddm_latitude: decimal_to_ddm(latitude),
        ddm_longitude: decimal_to_ddm(longitude),
        utm: to_utm(latitude, longitude),
        maidenhead: to_maidenhead(latitude, longitude),
        plus_code: olc::encode(latitude, longitude),
        map_links: map_links(coordinate),
        geocode: geocoder.reverse(coordinate),
    }
}
