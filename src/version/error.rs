use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("negative version parts are not allowed: part {index} is {value}")]
    NegativePart { index: usize, value: i64 },

    #[error("invalid API version string: '{0}'")]
    InvalidApiVersion(String),

    #[error("invalid SemVer string: '{0}'")]
    InvalidSemVer(String),

    #[error("version part out of range: '{0}'")]
    PartOutOfRange(String),

    #[error("cannot compare a version with {left} parts to one with {right} parts")]
    Incomparable { left: usize, right: usize },

    #[error("invalid version requirement: '{0}'")]
    InvalidRequirement(String),

    #[error("version is not valid for precedence comparison: {0}")]
    Precedence(String),
}
