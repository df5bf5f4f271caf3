//! Semantic version (`major.minor.patch[-prerelease][+build]`)
//!
//! Ordering and equality only look at the numeric core. Two versions that differ
//! solely in prerelease or build metadata compare equal even though they render
//! differently. Callers that need full Semantic Versioning 2.0 precedence use
//! [`SemVer::precedence_cmp`].

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
use crate::version::requirement::Requirement;

/// Full semantic version grammar.
///
/// - Group 1-3: major, minor, patch (no leading zeros)
/// - Group 4: prerelease, numeric identifiers without leading zeros
/// - Group 5: build metadata, leading zeros allowed
fn semver_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(concat!(
            r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)",
            r"(?:-((?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)",
            r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
            r"(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
        ))
        .unwrap()
    })
}

pub struct SemVer {
    version: ComparableVersion<3>,
    prerelease: Option<String>,
    build: Option<String>,
    rendered: OnceLock<String>,
}

impl SemVer {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self::from_parts(ComparableVersion::new([major, minor, patch]), None, None)
    }

    /// Build from signed numbers, failing on negative parts.
    pub fn try_new(major: i64, minor: i64, patch: i64) -> Result<Self, VersionError> {
        ComparableVersion::try_from_signed([major, minor, patch])
            .map(|version| Self::from_parts(version, None, None))
    }

    fn from_parts(
        version: ComparableVersion<3>,
        prerelease: Option<String>,
        build: Option<String>,
    ) -> Self {
        Self {
            version,
            prerelease,
            build,
            rendered: OnceLock::new(),
        }
    }

    /// Attach prerelease metadata.
    ///
    /// The value is stored as given; only [`SemVer::from_string`] validates it.
    pub fn with_prerelease(self, prerelease: impl Into<String>) -> Self {
        Self::from_parts(self.version, Some(prerelease.into()), self.build)
    }

    /// Attach build metadata. Not validated, see [`SemVer::with_prerelease`].
    pub fn with_build(self, build: impl Into<String>) -> Self {
        Self::from_parts(self.version, self.prerelease, Some(build.into()))
    }

    /// Parse a full semantic version string. Partial matches are rejected.
    pub fn from_string(s: &str) -> Result<Self, VersionError> {
        Self::parse(s).inspect_err(|e| debug!("Rejected SemVer '{}': {}", s, e))
    }

    fn parse(s: &str) -> Result<Self, VersionError> {
        let captures = semver_pattern()
            .captures(s)
            .ok_or_else(|| VersionError::InvalidSemVer(s.to_string()))?;

        let major = parse_part(&captures[1])?;
        let minor = parse_part(&captures[2])?;
        let patch = parse_part(&captures[3])?;

        Ok(Self::from_parts(
            ComparableVersion::new([major, minor, patch]),
            captures.get(4).map(|m| m.as_str().to_string()),
            captures.get(5).map(|m| m.as_str().to_string()),
        ))
    }

    pub fn major(&self) -> u64 {
        self.version.parts()[0]
    }

    pub fn minor(&self) -> u64 {
        self.version.parts()[1]
    }

    pub fn patch(&self) -> u64 {
        self.version.parts()[2]
    }

    pub fn prerelease(&self) -> Option<&str> {
        self.prerelease.as_deref()
    }

    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    pub fn as_comparable(&self) -> &ComparableVersion<3> {
        &self.version
    }

    /// Canonical string form, rendered once and reused.
    pub fn as_str(&self) -> &str {
        self.rendered.get_or_init(|| {
            let mut rendered = self.version.to_string();
            if let Some(prerelease) = &self.prerelease {
                rendered.push('-');
                rendered.push_str(prerelease);
            }
            if let Some(build) = &self.build {
                rendered.push('+');
                rendered.push_str(build);
            }
            rendered
        })
    }

    /// Same numeric core without prerelease and build metadata.
    pub fn finalize(&self) -> Self {
        Self::from_parts(self.version, None, None)
    }

    pub fn bump_major(&self) -> Self {
        Self::new(self.major().saturating_add(1), 0, 0)
    }

    pub fn bump_minor(&self) -> Self {
        Self::new(self.major(), self.minor().saturating_add(1), 0)
    }

    pub fn bump_patch(&self) -> Self {
        Self::new(self.major(), self.minor(), self.patch().saturating_add(1))
    }

    /// Increment the last number in the prerelease, dropping build metadata.
    ///
    /// Without a prerelease this yields `rc.1`. A prerelease without any
    /// digits gets a `.1` identifier appended.
    pub fn bump_prerelease(&self) -> Self {
        let prerelease = increment_last_number(self.prerelease.as_deref().unwrap_or("rc.0"));
        Self::from_parts(self.version, Some(prerelease), None)
    }

    /// Increment the last number in the build metadata, keeping the prerelease.
    ///
    /// Without build metadata this yields `build.1`.
    pub fn bump_build(&self) -> Self {
        let build = increment_last_number(self.build.as_deref().unwrap_or("build.0"));
        Self::from_parts(self.version, self.prerelease.clone(), Some(build))
    }

    /// Convert into a [`semver::Version`], validating the metadata.
    pub fn to_semver(&self) -> Result<semver::Version, VersionError> {
        let pre = match &self.prerelease {
            Some(pre) => semver::Prerelease::new(pre)
                .map_err(|e| VersionError::Precedence(format!("prerelease '{pre}': {e}")))?,
            None => semver::Prerelease::EMPTY,
        };
        let build = match &self.build {
            Some(build) => semver::BuildMetadata::new(build)
                .map_err(|e| VersionError::Precedence(format!("build '{build}': {e}")))?,
            None => semver::BuildMetadata::EMPTY,
        };

        Ok(semver::Version {
            major: self.major(),
            minor: self.minor(),
            patch: self.patch(),
            pre,
            build,
        })
    }

    /// Compare using full Semantic Versioning 2.0 precedence.
    ///
    /// Unlike `Ord`, a prerelease ranks below its release and prerelease
    /// identifiers are compared. Build metadata never affects precedence.
    pub fn precedence_cmp(&self, other: &Self) -> Result<Ordering, VersionError> {
        let mut left = self.to_semver()?;
        let mut right = other.to_semver()?;
        left.build = semver::BuildMetadata::EMPTY;
        right.build = semver::BuildMetadata::EMPTY;
        Ok(left.cmp(&right))
    }

    /// Check this version against an expression such as `">=1.2.0"`.
    ///
    /// Uses the same core-only ordering as the comparison operators.
    pub fn matches(&self, expr: &str) -> Result<bool, VersionError> {
        Ok(expr.parse::<Requirement>()?.satisfies(self))
    }
}

/// Add one to the last run of ASCII digits, keeping its width unless it
/// carries over (`007` -> `008`, `rc.99` -> `rc.100`).
fn increment_last_number(identifiers: &str) -> String {
    let Some(last_digit) = identifiers.rfind(|c: char| c.is_ascii_digit()) else {
        return format!("{identifiers}.1");
    };
    let end = last_digit + 1;
    let start = identifiers[..end]
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(0, |(i, c)| i + c.len_utf8());

    let mut digits: Vec<u8> = identifiers[start..end].bytes().collect();
    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry {
        digits.insert(0, b'1');
    }

    let mut bumped = String::with_capacity(identifiers.len() + 1);
    bumped.push_str(&identifiers[..start]);
    bumped.extend(digits.into_iter().map(char::from));
    bumped.push_str(&identifiers[end..]);
    bumped
}

impl Default for SemVer {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl Clone for SemVer {
    fn clone(&self) -> Self {
        Self::from_parts(self.version, self.prerelease.clone(), self.build.clone())
    }
}

impl fmt::Debug for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SemVer")
            .field("major", &self.major())
            .field("minor", &self.minor())
            .field("patch", &self.patch())
            .field("prerelease", &self.prerelease)
            .field("build", &self.build)
            .finish()
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemVer {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl PartialEq for SemVer {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
    }
}

impl Eq for SemVer {}

impl PartialOrd for SemVer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemVer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version.cmp(&other.version)
    }
}

impl Hash for SemVer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.version.hash(state);
    }
}

impl Serialize for SemVer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SemVer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_string(&s).map_err(serde::de::Error::custom)
    }
}
