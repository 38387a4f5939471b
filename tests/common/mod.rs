//! Shared fixtures: minimal little-endian EXIF JPEGs built in memory

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

const ASCII: u16 = 2;
const LONG: u16 = 4;
const RATIONAL: u16 = 5;

/// GPS block content; each axis is three (numerator, denominator) pairs
pub struct GpsFixture {
    pub lat_ref: &'static str,
    pub lat: [(u32, u32); 3],
    pub lon_ref: &'static str,
    pub lon: [(u32, u32); 3],
}

/// 51° 30' 0" N, 0° 6' 0" W  =>  51.5, -0.1
pub fn london() -> GpsFixture {
    GpsFixture {
        lat_ref: "N",
        lat: [(51, 1), (30, 1), (0, 1)],
        lon_ref: "W",
        lon: [(0, 1), (6, 1), (0, 1)],
    }
}

/// 33° 52' 7.68" S, 151° 12' 33.48" E  =>  -33.8688, 151.2093
pub fn sydney() -> GpsFixture {
    GpsFixture {
        lat_ref: "S",
        lat: [(33, 1), (52, 1), (768, 100)],
        lon_ref: "E",
        lon: [(151, 1), (12, 1), (3348, 100)],
    }
}

struct Entry {
    tag: u16,
    kind: u16,
    count: u32,
    data: Vec<u8>,
}

fn ascii(tag: u16, text: &str) -> Entry {
    let mut data = text.as_bytes().to_vec();
    data.push(0);
    Entry {
        tag,
        kind: ASCII,
        count: data.len() as u32,
        data,
    }
}

fn rationals(tag: u16, values: &[(u32, u32); 3]) -> Entry {
    let mut data = Vec::with_capacity(24);
    for (num, denom) in values {
        data.extend_from_slice(&num.to_le_bytes());
        data.extend_from_slice(&denom.to_le_bytes());
    }
    Entry {
        tag,
        kind: RATIONAL,
        count: 3,
        data,
    }
}

fn long(tag: u16, value: u32) -> Entry {
    Entry {
        tag,
        kind: LONG,
        count: 1,
        data: value.to_le_bytes().to_vec(),
    }
}

fn ifd_len(entries: usize) -> usize {
    2 + 12 * entries + 4
}

fn external_len(entries: &[Entry]) -> usize {
    entries
        .iter()
        .filter(|e| e.data.len() > 4)
        .map(|e| (e.data.len() + 1) & !1)
        .sum()
}

/// Append an IFD at the current end of `tiff`, followed by its out-of-line values
fn write_ifd(tiff: &mut Vec<u8>, entries: &[Entry]) {
    let start = tiff.len();
    let mut data_offset = start + ifd_len(entries.len());

    tiff.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    let mut external = Vec::new();
    for entry in entries {
        tiff.extend_from_slice(&entry.tag.to_le_bytes());
        tiff.extend_from_slice(&entry.kind.to_le_bytes());
        tiff.extend_from_slice(&entry.count.to_le_bytes());
        if entry.data.len() <= 4 {
            let mut inline = entry.data.clone();
            inline.resize(4, 0);
            tiff.extend_from_slice(&inline);
        } else {
            tiff.extend_from_slice(&(data_offset as u32).to_le_bytes());
            external.extend_from_slice(&entry.data);
            if entry.data.len() % 2 == 1 {
                external.push(0);
            }
            data_offset = start + ifd_len(entries.len()) + external.len();
        }
    }
    tiff.extend_from_slice(&0u32.to_le_bytes());
    tiff.extend_from_slice(&external);
}

/// TIFF structure with Make/Model in IFD0 and an optional GPS IFD
pub fn tiff_block(make: &str, model: &str, gps: Option<&GpsFixture>) -> Vec<u8> {
    let mut tiff = vec![b'I', b'I', 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00];

    let mut ifd0 = vec![ascii(0x010F, make), ascii(0x0110, model)];
    if gps.is_some() {
        let ifd0_end = 8 + ifd_len(3) + external_len(&ifd0);
        ifd0.push(long(0x8825, ifd0_end as u32));
    }
    write_ifd(&mut tiff, &ifd0);

    if let Some(gps) = gps {
        let gps_ifd = vec![
            ascii(0x0001, gps.lat_ref),
            rationals(0x0002, &gps.lat),
            ascii(0x0003, gps.lon_ref),
            rationals(0x0004, &gps.lon),
        ];
        write_ifd(&mut tiff, &gps_ifd);
    }
    tiff
}

/// Wrap a TIFF block into a JPEG with a single APP1 segment
pub fn jpeg_with_tiff(tiff: &[u8]) -> Vec<u8> {
    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    let segment_len = (2 + 6 + tiff.len()) as u16;
    jpeg.extend_from_slice(&segment_len.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

pub fn exif_jpeg(make: &str, model: &str, gps: Option<&GpsFixture>) -> Vec<u8> {
    jpeg_with_tiff(&tiff_block(make, model, gps))
}

/// A JPEG carrying no metadata segment at all
pub fn bare_jpeg() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xD9]
}

pub fn write_image(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).expect("Failed to write fixture image");
    path
}
