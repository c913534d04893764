//! Error types for Tabview
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! The table pipeline itself never fails; errors come from loading
//! configuration or rows and from misusing controlled state.

use snafu::Snafu;

/// Main error type for the crate
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// A column id that the table does not know about
    #[snafu(display("Unknown column: {id}"))]
    UnknownColumn { id: String },

    /// Controlled/uncontrolled ownership misuse
    #[snafu(display("Controlled state error: {message}"))]
    ControlledState { message: String },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownColumn { id: "owner".into() };
        assert_eq!(err.to_string(), "Unknown column: owner");

        let err = Error::Invalid {
            message: "page size must be positive".into(),
        };
        assert!(err.to_string().contains("page size"));
    }

    #[test]
    fn test_from_json_error() {
        let source = serde_json::from_str::<Vec<u8>>("not json").expect_err("parse fails");
        let err: Error = source.into();
        assert!(matches!(err, Error::Json { .. }));
    }
}
