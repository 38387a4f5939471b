use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Signed decimal-degree position (negative = South/West)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Degrees, minutes, seconds
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dms {
    /// Truncated toward zero, so it carries the sign except when |value| < 1
    pub degrees: i32,
    pub minutes: u32,
    pub seconds: f64,
    /// Sign of the source value
    pub negative: bool,
}

impl Dms {
    pub fn to_decimal(&self) -> f64 {
        let magnitude =
            self.degrees.unsigned_abs() as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative && self.degrees == 0 { "-" } else { "" };
        write!(
            f,
            "{}{}° {}' {:.4}\"",
            sign, self.degrees, self.minutes, self.seconds
        )
    }
}

/// Degrees and decimal minutes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ddm {
    pub degrees: i32,
    /// Always unsigned
    pub minutes: f64,
    pub negative: bool,
}

impl Ddm {
    pub fn to_decimal(&self) -> f64 {
        let magnitude = self.degrees.unsigned_abs() as f64 + self.minutes / 60.0;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl fmt::Display for Ddm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative && self.degrees == 0 { "-" } else { "" };
        write!(f, "{}{}° {:.6}'", sign, self.degrees, self.minutes)
    }
}

/// Universal Transverse Mercator position on the WGS84 ellipsoid
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Utm {
    /// 1..=60
    pub zone: u8,
    pub easting: f64,
    pub northing: f64,
    pub southern: bool,
}

impl Utm {
    pub fn hemisphere(&self) -> char {
        if self.southern {
            'S'
        } else {
            'N'
        }
    }
}

impl fmt::Display for Utm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zone {}{}, E={}, N={}",
            self.zone,
            self.hemisphere(),
            self.easting,
            self.northing
        )
    }
}

/// Links to public map services centred on a coordinate
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MapLinks {
    pub google_maps: String,
    pub openstreetmap: String,
}
