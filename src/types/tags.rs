use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// EXIF rational number, signed or unsigned on disk, widened to i64
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rational {
    pub num: i64,
    pub denom: i64,
}

impl Rational {
    pub fn new(num: i64, denom: i64) -> Self {
        Self { num, denom }
    }

    /// Value as f64, or `None` when the denominator is zero
    pub fn to_f64(&self) -> Option<f64> {
        if self.denom == 0 {
            None
        } else {
            Some(self.num as f64 / self.denom as f64)
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.denom)
    }
}

/// Raw value of a single tag as read from the image
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TagValue {
    Text(String),
    Bytes(Vec<u8>),
    Integers(Vec<i64>),
    Rationals(Vec<Rational>),
    Floats(Vec<f64>),
    /// Nested GPS block keyed by raw GPS tag id
    Gps(Vec<(u16, TagValue)>),
}

impl TagValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_rationals(&self) -> Option<&[Rational]> {
        match self {
            TagValue::Rationals(values) => Some(values),
            _ => None,
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    if values.len() == 1 {
        return write!(f, "{}", values[0]);
    }
    write!(f, "(")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", value)?;
    }
    write!(f, ")")
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Text(text) => write!(f, "{}", text),
            TagValue::Bytes(bytes) => {
                // Undefined payloads are often printable (ExifVersion "0232")
                if !bytes.is_empty() && bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
                    write!(f, "b\"{}\"", String::from_utf8_lossy(bytes))
                } else {
                    write!(f, "b\"")?;
                    for b in bytes {
                        write!(f, "\\x{:02x}", b)?;
                    }
                    write!(f, "\"")
                }
            }
            TagValue::Integers(values) => write_list(f, values),
            TagValue::Rationals(values) => write_list(f, values),
            TagValue::Floats(values) => write_list(f, values),
            TagValue::Gps(entries) => {
                write!(f, "{{")?;
                for (i, (id, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", id, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Mapping of tag name to raw value, in the order tags were read
///
/// One value per name: inserting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagMap {
    entries: Vec<(String, TagValue)>,
}

impl TagMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: TagValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&TagValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Text value of a tag, if present and textual
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(TagValue::as_text)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for TagMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        write!(f, "}}")
    }
}
