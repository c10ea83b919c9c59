//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result]
//! alias. Variants cover invalid configuration and generic errors; degenerate
//! runtime situations (zero spawn rate, zero gravity, removing an unknown
//! handle) are defined behavior and deliberately not represented here.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("boom").into();
        assert!(matches!(err, Error::Other(_)));
    }

    #[test]
    fn invalid_config_formats_message() {
        let err = Error::InvalidConfig("viewport must be > 0".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: viewport must be > 0"
        );
    }
}
