//! Shared value types for the QuestionPy package ecosystem
//!
//! Manifests and question exports exchanged between the host application and
//! question-type packages carry versions and sizes as strings. This crate
//! parses, compares and renders them:
//!
//! - [`APIVersion`]: `major.minor` API level a package targets
//! - [`SemVer`]: package version with optional prerelease and build metadata
//! - [`Size`] / [`SizeUnit`]: byte counts with binary units
//!
//! Every type round-trips through its canonical string form and plugs into
//! serde as a typed field.

pub mod config;
pub mod logging;
pub mod size;
pub mod version;

pub use size::error::SizeError;
pub use size::{Size, SizeUnit};
pub use version::api::APIVersion;
pub use version::comparable::ComparableVersion;
pub use version::error::VersionError;
pub use version::semver::SemVer;
