// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Errors surfaced by the showcase.
///
/// None of these are fatal to the controller: callers log them and keep the
/// previous visual state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Manifest Error: {0}")]
    Manifest(String),

    /// An image resource could not be fetched or decoded.
    #[error("Decode Error: {resource}: {reason}")]
    Decode { resource: String, reason: String },
}

impl Error {
    /// Builds a decode error for the given resource.
    pub fn decode(resource: impl Into<String>, reason: impl ToString) -> Self {
        Error::Decode {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Manifest(_) => "error-manifest",
            Error::Decode { .. } => "error-decode",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn decode_error_names_the_source() {
        let err = Error::decode("photos/a.png", "truncated stream");
        assert_eq!(
            format!("{}", err),
            "Decode Error: photos/a.png: truncated stream"
        );
        assert_eq!(err.i18n_key(), "error-decode");
    }

    #[test]
    fn i18n_keys_are_distinct() {
        let keys = [
            Error::Io(String::new()).i18n_key(),
            Error::Config(String::new()).i18n_key(),
            Error::Manifest(String::new()).i18n_key(),
            Error::decode("", "").i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
