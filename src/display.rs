//! Console presentation of an analysis report
//!
//! `print_report` writes the styled, sectioned view; `transcript` renders
//! the plain-text version that gets saved to disk.

use crate::types::{AnalysisReport, LocationReport, NOT_AVAILABLE};
use console::style;
use std::io::{self, Write};

fn heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", style(format!("=== {} ===", title)).green())
}

/// Print the full report
pub fn print_report<W: Write>(out: &mut W, report: &AnalysisReport) -> io::Result<()> {
    heading(out, "DEVICE INFO")?;
    writeln!(out, "Make: {}", report.make())?;
    writeln!(out, "Model: {}", report.model())?;
    writeln!(out, "Software: {}", report.software())?;
    writeln!(out)?;

    heading(out, "EXIF DATA")?;
    if report.tags.is_empty() {
        writeln!(out, "{}", NOT_AVAILABLE)?;
    }
    for (name, value) in report.tags.iter() {
        writeln!(out, "{}: {}", style(name).cyan(), value)?;
    }

    writeln!(out)?;
    heading(out, "GPS RAW")?;
    match &report.gps_raw {
        Some(gps) => writeln!(out, "{}", gps)?,
        None => writeln!(out, "None")?,
    }

    match &report.location {
        Some(location) => print_location(out, location),
        None => writeln!(out, "{}", style("No GPS coordinates found.").red()),
    }
}

fn print_location<W: Write>(out: &mut W, location: &LocationReport) -> io::Result<()> {
    writeln!(out)?;
    heading(out, "GPS DECIMAL")?;
    writeln!(
        out,
        "{} {}",
        location.coordinate.latitude, location.coordinate.longitude
    )?;

    writeln!(out)?;
    heading(out, "DMS")?;
    writeln!(out, "Latitude: {}", location.dms_latitude)?;
    writeln!(out, "Longitude: {}", location.dms_longitude)?;

    writeln!(out)?;
    heading(out, "DDM")?;
    writeln!(out, "Latitude: {}", location.ddm_latitude)?;
    writeln!(out, "Longitude: {}", location.ddm_longitude)?;

    writeln!(out)?;
    heading(out, "UTM")?;
    writeln!(out, "Zone: {}{}", location.utm.zone, location.utm.hemisphere())?;
    writeln!(out, "Easting: {}", location.utm.easting)?;
    writeln!(out, "Northing: {}", location.utm.northing)?;

    writeln!(out)?;
    heading(out, "MAIDENHEAD GRID")?;
    writeln!(out, "{}", location.maidenhead)?;

    writeln!(out)?;
    heading(out, "PLUS CODE")?;
    writeln!(out, "{}", location.plus_code)?;

    writeln!(out)?;
    heading(out, "MAP LINKS")?;
    writeln!(out, "Google Maps: {}", location.map_links.google_maps)?;
    writeln!(out, "OpenStreetMap: {}", location.map_links.openstreetmap)?;

    writeln!(out)?;
    heading(out, "FULL REVERSE GEOLOCATION")?;
    match &location.geocode {
        Some(geo) => {
            writeln!(
                out,
                "Display name: {}",
                geo.display_name().unwrap_or(NOT_AVAILABLE)
            )?;
            for (key, value) in geo.address() {
                writeln!(out, "  {}: {}", style(key).cyan(), value)?;
            }
            Ok(())
        }
        None => writeln!(out, "{}", style("Reverse geocoding unavailable.").yellow()),
    }
}

/// Plain-text transcript: one `name: value` line per tag, then the
/// derived location lines when coordinates exist
pub fn transcript(report: &AnalysisReport) -> String {
    let mut lines: Vec<String> = report
        .tags
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect();

    if let Some(location) = &report.location {
        lines.push(String::new());
        lines.extend(
            location_fields(location)
                .into_iter()
                .map(|(field, value)| format!("{}: {}", field, value)),
        );
    }
    lines.join("\n")
}

/// Derived location values as (label, text) pairs, in report order
pub fn location_fields(location: &LocationReport) -> Vec<(&'static str, String)> {
    let geo = location
        .geocode
        .as_ref()
        .map(|g| g.display_name().map(str::to_string).unwrap_or_else(|| g.to_string()))
        .unwrap_or_else(|| "None".to_string());

    vec![
        ("Decimal", location.coordinate.to_string()),
        (
            "DMS",
            format!("{}, {}", location.dms_latitude, location.dms_longitude),
        ),
        (
            "DDM",
            format!("{}, {}", location.ddm_latitude, location.ddm_longitude),
        ),
        ("UTM", location.utm.to_string()),
        ("Maidenhead", location.maidenhead.clone()),
        ("Plus Code", location.plus_code.clone()),
        ("Google Maps", location.map_links.google_maps.clone()),
        ("OpenStreetMap", location.map_links.openstreetmap.clone()),
        ("Reverse Geo", geo),
    ]
}
