//! Two-part API version (`major.minor`)
//!
//! Packages declare the QuestionPy API they were built against with this type.
//! The textual form is strict: exactly two dot-separated numbers without
//! leading zeros, signs or whitespace.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::version::comparable::ComparableVersion;
use crate::version::error::VersionError;
use crate::version::parse_part;

/// `major.minor` where each number is `0` or has no leading zero.
fn api_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)$").unwrap())
}

pub struct APIVersion {
    version: ComparableVersion<2>,
    rendered: OnceLock<String>,
}

impl APIVersion {
    pub fn new(major: u64, minor: u64) -> Self {
        Self::from_comparable(ComparableVersion::new([major, minor]))
    }

    /// Build from signed numbers, failing on negative parts.
    pub fn try_new(major: i64, minor: i64) -> Result<Self, VersionError> {
        ComparableVersion::try_from_signed([major, minor]).map(Self::from_comparable)
    }

    fn from_comparable(version: ComparableVersion<2>) -> Self {
        Self {
            version,
            rendered: OnceLock::new(),
        }
    }

    /// Parse the canonical `major.minor` form.
    pub fn from_string(s: &str) -> Result<Self, VersionError> {
        Self::parse(s).inspect_err(|e| debug!("Rejected API version '{}': {}", s, e))
    }

    fn parse(s: &str) -> Result<Self, VersionError> {
        let captures = api_pattern()
            .captures(s)
            .ok_or_else(|| VersionError::InvalidApiVersion(s.to_string()))?;

        let major = parse_part(&captures[1])?;
        let minor = parse_part(&captures[2])?;
        Ok(Self::new(major, minor))
    }

    pub fn major(&self) -> u64 {
        self.version.parts()[0]
    }

    pub fn minor(&self) -> u64 {
        self.version.parts()[1]
    }

    pub fn as_comparable(&self) -> &ComparableVersion<2> {
        &self.version
    }

    /// Canonical string form, rendered once and reused.
    pub fn as_str(&self) -> &str {
        self.rendered.get_or_init(|| self.version.to_string())
    }
}

impl Default for APIVersion {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Clone for APIVersion {
    fn clone(&self) -> Self {
        Self::from_comparable(self.version)
    }
}

impl fmt::Debug for APIVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("APIVersion")
            .field("major", &self.major())
            .field("minor", &self.minor())
            .finish()
    }
}

impl fmt::Display for APIVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for APIVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl PartialEq for APIVersion {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
    }
}

impl Eq for APIVersion {}

impl PartialOrd for APIVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for APIVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version.cmp(&other.version)
    }
}

impl Hash for APIVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.version.hash(state);
    }
}

impl Serialize for APIVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for APIVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_string(&s).map_err(serde::de::Error::custom)
    }
}
