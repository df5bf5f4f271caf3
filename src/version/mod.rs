//! Version value types shared between the host and question packages
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────────┐     ┌─────────────┐
//! │ APIVersion  │────▶│ ComparableVersion │◀────│   SemVer    │
//! │ (major.min) │     │  (ordered tuple)  │     │ (+metadata) │
//! └─────────────┘     └───────────────────┘     └─────────────┘
//!                                                      │
//!                                                      ▼
//!                                               ┌─────────────┐
//!                                               │ Requirement │
//!                                               │ (>=, <, ..) │
//!                                               └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`comparable`]: fixed-arity ordering shared by both version types
//! - [`api`]: two-part API versions
//! - [`semver`]: semantic versions with prerelease and build metadata
//! - [`requirement`]: single-comparator expressions for [`semver::SemVer::matches`]
//! - [`error`]: error type for construction and parsing

pub mod api;
pub mod comparable;
pub mod error;
pub mod requirement;
pub mod semver;

use crate::version::error::VersionError;

/// Parse a grammar-checked run of ASCII digits into a version part.
fn parse_part(digits: &str) -> Result<u64, VersionError> {
    digits
        .parse::<u64>()
        .map_err(|_| VersionError::PartOutOfRange(digits.to_string()))
}
