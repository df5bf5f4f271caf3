//! Byte sizes with binary units
//!
//! A [`Size`] is a signed byte count. It is built from an integer, float or
//! numeric string scaled by a [`SizeUnit`], parsed from human input such as
//! `"1.5 GiB"` or `"512k"`, and rendered with the largest fitting unit
//! (`"1.50 KiB"`).
//!
//! # Modules
//!
//! - [`unit`]: the power-of-1024 units
//! - [`number`]: the numeric magnitude grammar shared by all string inputs
//! - [`error`]: error type for construction and parsing

pub mod error;
pub mod number;
pub mod unit;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::size::error::SizeError;
use crate::size::number::{parse_magnitude, round_to_bytes};
pub use crate::size::unit::SizeUnit;

/// Magnitude accepted by [`Size::new`]
#[derive(Debug, Clone, PartialEq)]
pub enum Magnitude {
    /// Wide enough for every primitive integer; narrowed in [`Size::new`]
    Int(i128),
    Float(f64),
    Text(String),
}

macro_rules! int_magnitude {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Magnitude {
                fn from(value: $ty) -> Self {
                    Magnitude::Int(i128::from(value))
                }
            }
        )*
    };
}

int_magnitude!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<usize> for Magnitude {
    fn from(value: usize) -> Self {
        // usize is at most 64 bits on every supported target
        Magnitude::Int(value as i128)
    }
}

impl From<isize> for Magnitude {
    fn from(value: isize) -> Self {
        Magnitude::Int(value as i128)
    }
}

impl From<f64> for Magnitude {
    fn from(value: f64) -> Self {
        Magnitude::Float(value)
    }
}

impl From<f32> for Magnitude {
    fn from(value: f32) -> Self {
        Magnitude::Float(value.into())
    }
}

impl From<&str> for Magnitude {
    fn from(value: &str) -> Self {
        Magnitude::Text(value.to_string())
    }
}

impl From<String> for Magnitude {
    fn from(value: String) -> Self {
        Magnitude::Text(value)
    }
}

pub struct Size {
    bytes: i64,
    rendered: OnceLock<String>,
}

impl Size {
    /// Scale `value` by `unit`.
    ///
    /// Integers are multiplied exactly. Floats and numeric strings are scaled
    /// and then rounded half to even.
    pub fn new(value: impl Into<Magnitude>, unit: SizeUnit) -> Result<Self, SizeError> {
        let bytes = match value.into() {
            Magnitude::Int(value) => value
                .checked_mul(i128::from(unit.factor()))
                .and_then(|bytes| i64::try_from(bytes).ok())
                .ok_or_else(|| SizeError::OutOfRange(format!("{value} {unit}")))?,
            Magnitude::Float(value) => round_to_bytes(value * unit.factor() as f64)
                .map_err(|_| SizeError::OutOfRange(format!("{value:e} {unit}")))?,
            Magnitude::Text(value) => round_to_bytes(parse_magnitude(&value)? * unit.factor() as f64)?,
        };
        Ok(Self::from_bytes(bytes))
    }

    pub fn from_bytes(bytes: i64) -> Self {
        Self {
            bytes,
            rendered: OnceLock::new(),
        }
    }

    /// Parse human input such as `"1 TiB"`, `"512k"` or `"  1.5 gb "`.
    ///
    /// Trailing whitespace is dropped and case is ignored. A trailing `ib`
    /// and then a trailing `b` are stripped, leaving an optional unit code
    /// (`k`, `m`, `g`, `t`) after the magnitude. No unit code means bytes.
    pub fn from_string(string: &str) -> Result<Self, SizeError> {
        Self::parse(string)
            .map_err(|source| SizeError::InvalidSizeString {
                input: string.to_string(),
                source: Box::new(source),
            })
            .inspect_err(|e| debug!("Rejected size: {}", e))
    }

    fn parse(string: &str) -> Result<Self, SizeError> {
        let sanitized = string.trim_end().to_lowercase();

        let mut rest = sanitized.as_str();
        if let Some(stripped) = rest.strip_suffix("ib") {
            rest = stripped;
        }
        if let Some(stripped) = rest.strip_suffix('b') {
            rest = stripped;
        }

        match rest.chars().last().and_then(SizeUnit::from_code) {
            // Unit codes are ASCII, so dropping one byte stays on a char boundary
            Some(unit) => Self::new(&rest[..rest.len() - 1], unit),
            None => Self::new(rest, SizeUnit::B),
        }
    }

    pub fn bytes(&self) -> i64 {
        self.bytes
    }

    /// Byte count expressed in `unit`, without rounding.
    pub fn convert_to(&self, unit: SizeUnit) -> f64 {
        self.bytes as f64 / unit.factor() as f64
    }

    /// Largest unit the absolute byte count still fills at least once.
    pub fn display_unit(&self) -> SizeUnit {
        let absolute = self.bytes.unsigned_abs();
        SizeUnit::ALL
            .into_iter()
            .rev()
            .find(|unit| absolute >= unit.factor())
            .unwrap_or(SizeUnit::B)
    }

    /// Human-readable form, rendered once and reused.
    pub fn as_str(&self) -> &str {
        self.rendered.get_or_init(|| match self.display_unit() {
            SizeUnit::B => format!("{} {}", self.bytes, SizeUnit::B),
            unit => format!("{:.2} {}", self.convert_to(unit), unit),
        })
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::from_bytes(0)
    }
}

impl From<i64> for Size {
    fn from(bytes: i64) -> Self {
        Self::from_bytes(bytes)
    }
}

impl Clone for Size {
    fn clone(&self) -> Self {
        Self::from_bytes(self.bytes)
    }
}

impl fmt::Debug for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Size({})", self.as_str())
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl PartialEq for Size {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Size {}

impl PartialEq<i64> for Size {
    fn eq(&self, other: &i64) -> bool {
        self.bytes == *other
    }
}

impl PartialEq<Size> for i64 {
    fn eq(&self, other: &Size) -> bool {
        *self == other.bytes
    }
}

impl PartialOrd for Size {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Size {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bytes.cmp(&other.bytes)
    }
}

impl PartialOrd<i64> for Size {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.bytes.cmp(other))
    }
}

impl Hash for Size {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl Serialize for Size {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.bytes)
    }
}

struct SizeVisitor;

impl Visitor<'_> for SizeVisitor {
    type Value = Size;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a byte count or a size string such as \"1.5 MiB\"")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Size, E> {
        Ok(Size::from_bytes(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Size, E> {
        i64::try_from(value)
            .map(Size::from_bytes)
            .map_err(|_| E::custom(SizeError::OutOfRange(value.to_string())))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Size, E> {
        Size::new(value, SizeUnit::B).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Size, E> {
        Size::from_string(value).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Size {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SizeVisitor)
    }
}
