use std::fmt;

/// Custom error types for metadata extraction and report persistence
#[derive(Debug)]
pub enum MetaxError {
    /// I/O errors
    Io(std::io::Error),
    /// EXIF container or IFD errors reported by the reader
    Exif(exif::Error),
    /// Report export error
    Export(String),
}

impl fmt::Display for MetaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaxError::Io(err) => write!(f, "I/O error: {}", err),
            MetaxError::Exif(err) => write!(f, "EXIF error: {}", err),
            MetaxError::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for MetaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MetaxError::Io(err) => Some(err),
            MetaxError::Exif(err) => Some(err),
            MetaxError::Export(_) => None,
        }
    }
}

impl From<std::io::Error> for MetaxError {
    fn from(err: std::io::Error) -> Self {
        MetaxError::Io(err)
    }
}

impl From<exif::Error> for MetaxError {
    fn from(err: exif::Error) -> Self {
        MetaxError::Exif(err)
    }
}

/// Reasons a GPS block could not be turned into a decimal coordinate.
///
/// Every variant is a "no coordinates" outcome for the caller; the variant
/// only records why, for diagnostics and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GpsDecodeError {
    /// The GPS block has no entry with this name
    MissingTag(&'static str),
    /// The entry exists but is not the expected kind of value
    UnexpectedType(&'static str),
    /// A degree/minute/second triple had fewer than three components
    TooFewComponents(&'static str),
    /// A rational component had a zero denominator
    ZeroDenominator(&'static str),
}

impl fmt::Display for GpsDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpsDecodeError::MissingTag(tag) => write!(f, "missing GPS tag {}", tag),
            GpsDecodeError::UnexpectedType(tag) => write!(f, "unexpected value type for {}", tag),
            GpsDecodeError::TooFewComponents(tag) => {
                write!(f, "{} needs degree, minute and second components", tag)
            }
            GpsDecodeError::ZeroDenominator(tag) => {
                write!(f, "{} has a rational with zero denominator", tag)
            }
        }
    }
}

impl std::error::Error for GpsDecodeError {}
