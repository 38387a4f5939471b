//! Coordinate conversion utilities
//!
//! Pure functions turning a decimal-degree coordinate into the notations
//! shown in a report: DMS, DDM, UTM, Maidenhead locator and map links.
//! Plus Codes live in [`crate::olc`].

use crate::types::{Coordinate, Ddm, Dms, MapLinks, Utm};

/// WGS84 semi-major axis in metres
pub const WGS84_A: f64 = 6378137.0;
/// WGS84 first eccentricity (rounded, as used by common UTM converters)
pub const WGS84_ECC: f64 = 0.0818192;
/// UTM central meridian scale factor
pub const UTM_K0: f64 = 0.9996;
/// False easting applied to every zone
pub const UTM_FALSE_EASTING: f64 = 500_000.0;
/// False northing applied south of the equator
pub const UTM_FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

/// Decimal degrees to degrees/minutes/seconds.
///
/// Degrees truncate toward zero; minutes and seconds come from the
/// absolute remainder.
pub fn decimal_to_dms(value: f64) -> Dms {
    let degrees = value.trunc();
    let total_minutes = (value - degrees).abs() * 60.0;
    let minutes = total_minutes.trunc();
    let seconds = (total_minutes - minutes) * 60.0;
    Dms {
        degrees: degrees as i32,
        minutes: minutes as u32,
        seconds,
        negative: value < 0.0,
    }
}

/// Decimal degrees to degrees/decimal minutes
pub fn decimal_to_ddm(value: f64) -> Ddm {
    let degrees = value.trunc();
    Ddm {
        degrees: degrees as i32,
        minutes: ((value - degrees) * 60.0).abs(),
        negative: value < 0.0,
    }
}

/// UTM zone number for a longitude.
///
/// `floor((lon + 180) / 6) + 1`; longitude 180 folds into zone 60.
pub fn utm_zone(longitude: f64) -> u8 {
    let zone = ((longitude + 180.0) / 6.0).floor() as i64 + 1;
    zone.clamp(1, 60) as u8
}

/// Forward transverse Mercator projection without the southern offset.
///
/// Returns (zone, easting, northing). Series coefficients follow the
/// standard USGS formulation so results match conventional converters.
pub fn project_utm(latitude: f64, longitude: f64) -> (u8, f64, f64) {
    let zone = utm_zone(longitude);
    let lat_rad = latitude.to_radians();
    let lon_rad = longitude.to_radians();
    let lon_origin = (zone as f64 - 1.0) * 6.0 - 180.0 + 3.0;
    let lon_origin_rad = lon_origin.to_radians();

    let a = WGS84_A;
    let ecc = WGS84_ECC;
    let k0 = UTM_K0;
    let e2 = ecc.powf(2.0);
    let e4 = ecc.powf(4.0);
    let e6 = ecc.powf(6.0);
    let ep2 = e2 / (1.0 - e2);

    let n = a / (1.0 - e2 * lat_rad.sin().powf(2.0)).sqrt();
    let t = lat_rad.tan().powf(2.0);
    let c = ep2 * lat_rad.cos().powf(2.0);
    let aa = lat_rad.cos() * (lon_rad - lon_origin_rad);

    let m = a
        * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * lat_rad
            - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * lat_rad).sin()
            + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * lat_rad).sin()
            - (35.0 * e6 / 3072.0) * (6.0 * lat_rad).sin());

    let easting = k0
        * n
        * (aa
            + (1.0 - t + c) * aa.powf(3.0) / 6.0
            + (5.0 - 18.0 * t + t.powf(2.0) + 72.0 * c - 58.0 * ep2) * aa.powf(5.0) / 120.0)
        + UTM_FALSE_EASTING;

    let northing = k0
        * (m + n
            * lat_rad.tan()
            * (aa.powf(2.0) / 2.0
                + (5.0 - t + 9.0 * c + 4.0 * c.powf(2.0)) * aa.powf(4.0) / 24.0
                + (61.0 - 58.0 * t + t.powf(2.0) + 600.0 * c - 330.0 * ep2) * aa.powf(6.0)
                    / 720.0));

    (zone, easting, northing)
}

/// Decimal coordinate to UTM, northing offset for southern latitudes
pub fn to_utm(latitude: f64, longitude: f64) -> Utm {
    let (zone, easting, mut northing) = project_utm(latitude, longitude);
    let southern = latitude < 0.0;
    if southern {
        northing += UTM_FALSE_NORTHING_SOUTH;
    }
    Utm {
        zone,
        easting,
        northing,
        southern,
    }
}

const FIELD_LETTERS: &[u8; 18] = b"ABCDEFGHIJKLMNOPQR";
const SUBSQUARE_LETTERS: &[u8; 24] = b"abcdefghijklmnopqrstuvwx";

/// Six-character Maidenhead locator (field, square, subsquare)
pub fn to_maidenhead(latitude: f64, longitude: f64) -> String {
    let lat = latitude + 90.0;
    let lon = longitude + 180.0;

    // Clamp so the north pole and the antimeridian stay inside the grid
    let lon_field = ((lon / 20.0).floor() as usize).min(17);
    let lat_field = ((lat / 10.0).floor() as usize).min(17);
    let lon_square = (((lon % 20.0) / 2.0).floor() as usize).min(9);
    let lat_square = ((lat % 10.0).floor() as usize).min(9);
    let lon_sub = (((lon % 2.0) * 12.0).floor() as usize).min(23);
    let lat_sub = (((lat % 1.0) * 24.0).floor() as usize).min(23);

    let mut locator = String::with_capacity(6);
    locator.push(FIELD_LETTERS[lon_field] as char);
    locator.push(FIELD_LETTERS[lat_field] as char);
    locator.push_str(&lon_square.to_string());
    locator.push_str(&lat_square.to_string());
    locator.push(SUBSQUARE_LETTERS[lon_sub] as char);
    locator.push(SUBSQUARE_LETTERS[lat_sub] as char);
    locator
}

/// Google Maps and OpenStreetMap links for a coordinate
pub fn map_links(coordinate: Coordinate) -> MapLinks {
    let Coordinate {
        latitude,
        longitude,
    } = coordinate;
    MapLinks {
        google_maps: format!("https://maps.google.com/?q={},{}", latitude, longitude),
        openstreetmap: format!(
            "https://www.openstreetmap.org/?mlat={}&mlon={}",
            latitude, longitude
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_decimal_to_dms() {
        let dms = decimal_to_dms(-33.8688);
        assert_eq!((dms.degrees, dms.minutes), (-33, 52));
        assert_close(dms.seconds, 7.68, 1e-6);
        assert!(dms.negative);

        // Sign survives even though the degree truncates to zero
        let dms = decimal_to_dms(-0.1);
        assert_eq!((dms.degrees, dms.minutes), (0, 6));
        assert!(dms.negative);
        assert_close(dms.to_decimal(), -0.1, 1e-12);
        assert_eq!(dms.to_string(), "-0° 6' 0.0000\"");
    }

    #[test]
    fn test_dms_round_trip() {
        for value in [51.5, -33.8688, 151.2093, -74.006, 0.000123, -179.99999, 89.999] {
            let dms = decimal_to_dms(value);
            let back = decimal_to_dms(dms.to_decimal());
            assert_eq!(back.degrees, dms.degrees, "degrees drifted for {value}");
            assert_eq!(back.minutes, dms.minutes, "minutes drifted for {value}");
            assert!((back.seconds - dms.seconds).abs() < 1e-6);
            assert_close(dms.to_decimal(), value, 1e-9);
        }
    }

    #[test]
    fn test_decimal_to_ddm() {
        let ddm = decimal_to_ddm(-74.006);
        assert_eq!(ddm.degrees, -74);
        assert_close(ddm.minutes, 0.36, 1e-9);
        assert_close(ddm.to_decimal(), -74.006, 1e-12);

        let ddm = decimal_to_ddm(151.2093);
        assert_eq!(ddm.degrees, 151);
        assert_close(ddm.minutes, 12.558, 1e-9);
    }

    #[test]
    fn test_utm_zone_boundaries() {
        assert_eq!(utm_zone(-180.0), 1);
        assert_eq!(utm_zone(-174.0), 2);
        assert_eq!(utm_zone(0.0), 31);
        assert_eq!(utm_zone(-0.1), 30);
        assert_eq!(utm_zone(179.9999), 60);
        assert_eq!(utm_zone(180.0), 60);

        let mut lon = -180.0_f64;
        while lon < 180.0 {
            let expected = ((lon + 180.0) / 6.0).floor() as u8 + 1;
            assert_eq!(utm_zone(lon), expected, "zone mismatch at {lon}");
            lon += 0.25;
        }
    }

    #[test]
    fn test_to_utm_reference_points() {
        // London
        let utm = to_utm(51.5, -0.1);
        assert_eq!(utm.zone, 30);
        assert_close(utm.easting, 701277.6652307109, 1e-4);
        assert_close(utm.northing, 5709417.119649982, 1e-4);
        assert_eq!(utm.hemisphere(), 'N');

        // Sydney
        let utm = to_utm(-33.8688, 151.2093);
        assert_eq!(utm.zone, 56);
        assert_close(utm.easting, 334368.6336080131, 1e-4);
        assert_close(utm.northing, 6250948.35006567, 1e-4);
        assert_eq!(utm.hemisphere(), 'S');

        // New York
        let utm = to_utm(40.7128, -74.006);
        assert_eq!(utm.zone, 18);
        assert_close(utm.easting, 583959.3723509554, 1e-4);
        assert_close(utm.northing, 4507350.993143933, 1e-4);

        // On a central meridian at the equator
        let utm = to_utm(0.0, 3.0);
        assert_eq!(utm.zone, 31);
        assert_close(utm.easting, 500000.0, 1e-9);
        assert_close(utm.northing, 0.0, 1e-9);
    }

    #[test]
    fn test_southern_northing_offset() {
        for (lat, lon) in [(-33.9, 18.4), (-0.5, 30.0), (-60.0, -70.0)] {
            let (_, _, raw) = project_utm(lat, lon);
            let utm = to_utm(lat, lon);
            assert_close(utm.northing - raw, UTM_FALSE_NORTHING_SOUTH, 1e-6);

            // Mirror across the equator: projection is odd in latitude
            let (_, _, mirrored) = project_utm(-lat, lon);
            assert_close(utm.northing + mirrored, UTM_FALSE_NORTHING_SOUTH, 1e-6);
            assert!(utm.northing >= raw + UTM_FALSE_NORTHING_SOUTH - 1e-6);
        }
    }

    #[test]
    fn test_to_maidenhead() {
        assert_eq!(to_maidenhead(51.5, -0.1), "IO91wm");
        assert!(to_maidenhead(51.5, -0.1).starts_with("IO91"));
        assert_eq!(to_maidenhead(-33.8688, 151.2093), "QF56od");
        assert_eq!(to_maidenhead(40.7128, -74.006), "FN20xr");
        assert_eq!(to_maidenhead(47.36559, 8.524997), "JN47gi");
        assert_eq!(to_maidenhead(0.0, 3.0), "JJ10ma");
        // Grid corners stay inside the alphabet
        assert_eq!(to_maidenhead(-90.0, -180.0), "AA00aa");
        assert_eq!(to_maidenhead(90.0, 180.0).len(), 6);
    }

    #[test]
    fn test_maidenhead_is_deterministic() {
        let first = to_maidenhead(12.345678, -98.765432);
        for _ in 0..10 {
            assert_eq!(to_maidenhead(12.345678, -98.765432), first);
        }
    }

    #[test]
    fn test_map_links() {
        let links = map_links(Coordinate::new(51.5, -0.1));
        assert_eq!(links.google_maps, "https://maps.google.com/?q=51.5,-0.1");
        assert_eq!(
            links.openstreetmap,
            "https://www.openstreetmap.org/?mlat=51.5&mlon=-0.1"
        );
    }
}
