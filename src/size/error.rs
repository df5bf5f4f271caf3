use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeError {
    #[error("could not convert string to a number: '{0}'")]
    InvalidNumber(String),

    #[error("size out of range: {0}")]
    OutOfRange(String),

    #[error("Could not convert '{input}' to a size")]
    InvalidSizeString {
        input: String,
        #[source]
        source: Box<SizeError>,
    },

    #[error("unknown size unit: '{0}'")]
    UnknownUnit(String),
}
