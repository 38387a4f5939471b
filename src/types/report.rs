use crate::geocode::GeocodeResult;
use crate::types::{Coordinate, Ddm, Dms, MapLinks, TagMap, Utm};
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Placeholder shown for absent device fields
pub const NOT_AVAILABLE: &str = "N/A";

/// Everything derived from one image in one run
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisReport {
    pub path: PathBuf,
    pub tags: TagMap,
    /// GPS block with names resolved, if the image carries one
    pub gps_raw: Option<TagMap>,
    /// Present only when the GPS block decoded to a coordinate
    pub location: Option<LocationReport>,
}

impl AnalysisReport {
    pub fn make(&self) -> &str {
        self.tags.get_text("Make").unwrap_or(NOT_AVAILABLE)
    }

    pub fn model(&self) -> &str {
        self.tags.get_text("Model").unwrap_or(NOT_AVAILABLE)
    }

    pub fn software(&self) -> &str {
        self.tags.get_text("Software").unwrap_or(NOT_AVAILABLE)
    }

    pub fn has_coordinates(&self) -> bool {
        self.location.is_some()
    }
}

/// All notations derived from a decoded coordinate
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocationReport {
    pub coordinate: Coordinate,
    pub dms_latitude: Dms,
    pub dms_longitude: Dms,
    pub ddm_latitude: Ddm,
    pub ddm_longitude: Ddm,
    pub utm: Utm,
    pub maidenhead: String,
    pub plus_code: String,
    pub map_links: MapLinks,
    pub geocode: Option<GeocodeResult>,
}
