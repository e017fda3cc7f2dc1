use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("could not convert {field} '{input}' to a number")]
    Parse { field: &'static str, input: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse error classes reported by the order flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A field value outside its allowed set or range.
    InvalidArgument,
    /// Text that could not be converted to a number.
    ParseFailure,
    /// Console or file IO failed.
    Io,
    /// Startup configuration was unusable.
    Config,
}

impl Error {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Domain(_) => ErrorKind::InvalidArgument,
            Error::Parse { .. } => ErrorKind::ParseFailure,
            Error::Io(_) | Error::Json(_) => ErrorKind::Io,
            Error::Config(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_are_invalid_arguments() {
        let err = Error::from(DomainError::InvalidSide {
            value: "hold".into(),
        });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.to_string(), "Side must be BUY or SELL, got 'hold'");
    }

    #[test]
    fn parse_errors_name_the_field() {
        let err = Error::Parse {
            field: "price",
            input: "cheap".into(),
        };
        assert_eq!(err.kind(), ErrorKind::ParseFailure);
        assert_eq!(err.to_string(), "could not convert price 'cheap' to a number");
    }

    #[test]
    fn end_of_input_is_io() {
        let err = Error::from(std::io::Error::from(std::io::ErrorKind::UnexpectedEof));
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
