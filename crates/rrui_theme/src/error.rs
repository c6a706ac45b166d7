//! Theme error types

use thiserror::Error;

/// Errors raised by the theme crate.
///
/// Theme construction and cache lookups are total; only parsing user input
/// and persisting preferences can fail.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Color scheme name not recognized
    #[error("unknown color scheme: {0}")]
    UnknownColorScheme(String),

    /// Preference key not recognized
    #[error("unknown preference key: {0}")]
    UnknownPreference(String),

    /// Preference value has the wrong type or is out of range
    #[error("invalid value {value:?} for preference {key}")]
    InvalidPreferenceValue { key: String, value: String },

    /// Failed to read or write the preferences file
    #[error("failed to access preferences at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Preferences file is not valid TOML
    #[error("invalid preferences file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Preferences could not be encoded
    #[error("failed to encode preferences: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
