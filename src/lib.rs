//! ExiF MeTaX Library
//!
//! Reads EXIF metadata from image files, decodes the embedded GPS block into
//! decimal coordinates and derives the usual location notations from them:
//! degrees-minutes-seconds, degrees-decimal-minutes, UTM, Maidenhead and
//! Open Location Code (Plus Code). An optional reverse geocoding step asks
//! a Nominatim service for a place description.
//!
//! # Features
//!
//! - **`csv`** (default): Enable the `field,value` CSV companion export
//! - **`cli`** (default): Build the interactive command-line binary
//! - **`serde`**: Enable serialization/deserialization of types
//!
//! # Quick Start
//!
//! Analyze an image without touching the network:
//! ```rust,no_run
//! use exif_metax::{analyze_image, Offline};
//! use std::path::Path;
//!
//! let report = analyze_image(Path::new("photo.jpg"), &Offline).unwrap();
//! println!("Camera: {} {}", report.make(), report.model());
//! if let Some(location) = &report.location {
//!     println!("Decimal: {}", location.coordinate);
//!     println!("UTM: {}", location.utm);
//!     println!("Plus Code: {}", location.plus_code);
//! }
//! ```
//!
//! Convert a coordinate directly:
//! ```rust
//! use exif_metax::{decimal_to_dms, to_maidenhead, olc};
//!
//! assert_eq!(to_maidenhead(51.5, -0.1), "IO91wm");
//! assert_eq!(decimal_to_dms(51.5).to_string(), "51° 30' 0.0000\"");
//! assert_eq!(olc::encode(51.5, -0.1), "9C3XGW22+22");
//! ```
//!
//! # Public API
//!
//! ## Reading
//! - [`read_exif_tags`] - Read the primary image's tags from a file
//! - [`read_exif_tags_from_bytes`] - Same, from an in-memory image
//! - [`get_gps`] - Extract the GPS block with tag names resolved
//! - [`gps_to_decimal`] - Decode a GPS block into a [`Coordinate`]
//!
//! ## Conversion Utilities
//! - [`decimal_to_dms`] / [`decimal_to_ddm`] - Sexagesimal notations
//! - [`to_utm`] - WGS84 Universal Transverse Mercator
//! - [`to_maidenhead`] - 6-character Maidenhead locator
//! - [`olc::encode`] - Open Location Code
//! - [`map_links`] - Google Maps and OpenStreetMap URLs
//!
//! ## Analysis and Output
//! - [`analyze_image`] - Full pipeline for one image
//! - [`NominatimClient`] / [`Offline`] - [`ReverseGeocoder`] implementations
//! - [`print_report`] / [`transcript`] - Console and plain-text rendering
//! - [`save_transcript`] / [`export_to_csv`] - Persistence
//! - [`run_session`] - The interactive prompt loop

// Module declarations
pub mod analysis;
pub mod conversion;
pub mod display;
pub mod error;
pub mod export;
pub mod geocode;
pub mod olc;
pub mod parser;
pub mod session;
pub mod types;

// Re-export everything from modules for convenience
#[allow(ambiguous_glob_reexports)]
pub use analysis::*;
#[allow(ambiguous_glob_reexports)]
pub use conversion::*;
#[allow(ambiguous_glob_reexports)]
pub use display::*;
#[allow(ambiguous_glob_reexports)]
pub use error::*;
#[allow(ambiguous_glob_reexports)]
pub use export::*;
#[allow(ambiguous_glob_reexports)]
pub use geocode::*;
#[allow(ambiguous_glob_reexports)]
pub use parser::*;
#[allow(ambiguous_glob_reexports)]
pub use session::*;
#[allow(ambiguous_glob_reexports)]
pub use types::*;

// Re-export Result type for convenience
pub use anyhow::Result;
