//! Open Location Code (Plus Code) encoder
//!
//! Integer implementation of the encoding half of the published Open
//! Location Code specification, matching the current reference encoder
//! (the float-based `open-location-code` 0.1 crate predates the integer
//! rework and pins `geo` 0.4). Only encoding is needed here; decoding and
//! short-code recovery are not provided.

use anyhow::{bail, Result};

const CODE_ALPHABET: &[u8; 20] = b"23456789CFGHJMPQRVWX";
const SEPARATOR: char = '+';
const SEPARATOR_POSITION: usize = 8;
const PADDING: char = '0';
const ENCODING_BASE: i64 = 20;
const LATITUDE_MAX: i64 = 90;
const LONGITUDE_MAX: i64 = 180;
const MAX_DIGIT_COUNT: usize = 15;
const PAIR_CODE_LENGTH: usize = 10;
const GRID_CODE_LENGTH: u32 = (MAX_DIGIT_COUNT - PAIR_CODE_LENGTH) as u32;
const GRID_COLUMNS: i64 = 4;
const GRID_ROWS: i64 = 5;
const PAIR_PRECISION: i64 = 8000; // ENCODING_BASE^3
const FINAL_LAT_PRECISION: i64 = PAIR_PRECISION * 3125; // * GRID_ROWS^5
const FINAL_LNG_PRECISION: i64 = PAIR_PRECISION * 1024; // * GRID_COLUMNS^5

/// Length of a standard full code, roughly a 14 x 14 m area
pub const DEFAULT_CODE_LENGTH: usize = PAIR_CODE_LENGTH;

/// Encode a coordinate as a 10-digit Plus Code
pub fn encode(latitude: f64, longitude: f64) -> String {
    encode_integers(
        latitude_to_integer(latitude),
        longitude_to_integer(longitude),
        DEFAULT_CODE_LENGTH,
    )
}

/// Encode a coordinate with an explicit digit count.
///
/// Valid lengths are 2, 4, 6, 8 and anything from 10 upwards; lengths past
/// 15 are capped at 15.
pub fn encode_with_length(latitude: f64, longitude: f64, code_length: usize) -> Result<String> {
    if code_length < 2 || (code_length < PAIR_CODE_LENGTH && code_length % 2 == 1) {
        bail!("Invalid Open Location Code length: {}", code_length);
    }
    Ok(encode_integers(
        latitude_to_integer(latitude),
        longitude_to_integer(longitude),
        code_length.min(MAX_DIGIT_COUNT),
    ))
}

// Round before flooring so values like 0.1 * precision don't land one unit low
fn scaled_floor(value: f64, precision: i64) -> i64 {
    ((value * precision as f64 * 1e6).round() / 1e6).floor() as i64
}

fn latitude_to_integer(latitude: f64) -> i64 {
    let max = 2 * LATITUDE_MAX * FINAL_LAT_PRECISION;
    let value = scaled_floor(latitude.clamp(-90.0, 90.0), FINAL_LAT_PRECISION)
        + LATITUDE_MAX * FINAL_LAT_PRECISION;
    // The north pole belongs to the cell just below it
    value.clamp(0, max - 1)
}

fn longitude_to_integer(longitude: f64) -> i64 {
    let span = 2 * LONGITUDE_MAX * FINAL_LNG_PRECISION;
    let value = scaled_floor(longitude, FINAL_LNG_PRECISION) + LONGITUDE_MAX * FINAL_LNG_PRECISION;
    value.rem_euclid(span)
}

fn encode_integers(mut lat_val: i64, mut lng_val: i64, code_length: usize) -> String {
    let mut digits: Vec<u8> = Vec::with_capacity(MAX_DIGIT_COUNT);

    if code_length > PAIR_CODE_LENGTH {
        for _ in 0..GRID_CODE_LENGTH {
            let lat_digit = lat_val % GRID_ROWS;
            let lng_digit = lng_val % GRID_COLUMNS;
            digits.push(CODE_ALPHABET[(lat_digit * GRID_COLUMNS + lng_digit) as usize]);
            lat_val /= GRID_ROWS;
            lng_val /= GRID_COLUMNS;
        }
    } else {
        lat_val /= GRID_ROWS.pow(GRID_CODE_LENGTH);
        lng_val /= GRID_COLUMNS.pow(GRID_CODE_LENGTH);
    }

    for _ in 0..PAIR_CODE_LENGTH / 2 {
        digits.push(CODE_ALPHABET[(lng_val % ENCODING_BASE) as usize]);
        digits.push(CODE_ALPHABET[(lat_val % ENCODING_BASE) as usize]);
        lat_val /= ENCODING_BASE;
        lng_val /= ENCODING_BASE;
    }
    // Digits were produced least significant first
    digits.reverse();

    let mut code = String::with_capacity(MAX_DIGIT_COUNT + 1);
    for (i, digit) in digits.iter().enumerate() {
        if i == SEPARATOR_POSITION {
            code.push(SEPARATOR);
        }
        code.push(*digit as char);
    }

    if code_length >= SEPARATOR_POSITION {
        return code.chars().take(code_length + 1).collect();
    }
    let mut short: String = code.chars().take(code_length).collect();
    short.extend(std::iter::repeat(PADDING).take(SEPARATOR_POSITION - code_length));
    short.push(SEPARATOR);
    short
}
