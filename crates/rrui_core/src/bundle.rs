//! Resource bundles
//!
//! A [`Bundle`] is the namespace named assets are resolved from. Theme code
//! treats it as an opaque lookup table: a missing color resolves to the
//! caller's fallback, never to an error.
//!
//! Bundles can be assembled in code or loaded from a TOML manifest:
//!
//! ```toml
//! identifier = "com.example.app"
//!
//! [colors]
//! primary = "#1E66F5"
//!
//! [fonts]
//! body = "Inter"
//!
//! [images]
//! logo = "images/logo.png"
//! ```

use crate::color::Color;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Identifier used in cache keys when a bundle has none
pub const UNKNOWN_BUNDLE_ID: &str = "unknown";

/// Bundle manifest loading errors
#[derive(Error, Debug)]
pub enum BundleError {
    #[error("failed to read bundle manifest {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid bundle manifest: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Deserialize)]
struct BundleManifest {
    identifier: Option<String>,
    #[serde(default)]
    colors: BTreeMap<String, Color>,
    #[serde(default)]
    fonts: BTreeMap<String, String>,
    #[serde(default)]
    images: BTreeMap<String, String>,
}

/// Named-asset namespace (colors, font families, image paths)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bundle {
    identifier: Option<String>,
    colors: FxHashMap<String, Color>,
    fonts: FxHashMap<String, String>,
    images: FxHashMap<String, String>,
}

impl Bundle {
    /// Create an empty bundle with the given identifier
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: Some(identifier.into()),
            ..Self::default()
        }
    }

    /// Bundle without an identifier; every lookup falls back
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Parse a bundle manifest
    pub fn from_toml_str(source: &str) -> Result<Self, BundleError> {
        let manifest: BundleManifest = toml::from_str(source)?;
        Ok(Self {
            identifier: manifest.identifier,
            colors: manifest.colors.into_iter().collect(),
            fonts: manifest.fonts.into_iter().collect(),
            images: manifest.images.into_iter().collect(),
        })
    }

    /// Read and parse a bundle manifest from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BundleError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| BundleError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let bundle = Self::from_toml_str(&source)?;
        tracing::debug!(
            "loaded bundle {:?} from {} ({} colors)",
            bundle.identifier,
            path.display(),
            bundle.colors.len()
        );
        Ok(bundle)
    }

    pub fn with_color(mut self, name: impl Into<String>, color: Color) -> Self {
        self.colors.insert(name.into(), color);
        self
    }

    pub fn with_font(mut self, name: impl Into<String>, family: impl Into<String>) -> Self {
        self.fonts.insert(name.into(), family.into());
        self
    }

    pub fn with_image(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.images.insert(name.into(), path.into());
        self
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Identifier for cache keys, `"unknown"` when unset
    pub fn identifier_or_unknown(&self) -> &str {
        self.identifier.as_deref().unwrap_or(UNKNOWN_BUNDLE_ID)
    }

    /// Resolve a named color, returning `fallback` if the bundle lacks it
    pub fn resolve_color(&self, name: &str, fallback: Color) -> Color {
        match self.colors.get(name) {
            Some(color) => *color,
            None => fallback,
        }
    }

    pub fn has_color(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    pub fn font_family(&self, name: &str) -> Option<&str> {
        self.fonts.get(name).map(String::as_str)
    }

    pub fn image_path(&self, name: &str) -> Option<&str> {
        self.images.get(name).map(String::as_str)
    }
}
