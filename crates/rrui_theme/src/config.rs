//! Persisted performance configuration
//!
//! Settings are stored as flat string keys in a [`PreferenceStore`]. They
//! are read once when the configuration is loaded and written back on every
//! mutation. Missing or mistyped keys fall back to their defaults.

use crate::cache::DEFAULT_MAX_CACHE_SIZE;
use crate::error::{Result, ThemeError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Preference keys
pub mod keys {
    pub const CACHING_ENABLED: &str = "performance.cachingEnabled";
    pub const LAZY_LOADING_ENABLED: &str = "performance.lazyLoadingEnabled";
    pub const ANIMATIONS_ENABLED: &str = "performance.animationsEnabled";
    pub const MONITORING_ENABLED: &str = "performance.monitoringEnabled";
    pub const MAX_CACHE_SIZE: &str = "performance.maxCacheSize";
    pub const IMAGE_CACHE_SIZE: &str = "performance.imageCacheSize";
    pub const MEMORY_WARNING_THRESHOLD_MB: &str = "performance.memoryWarningThresholdMb";
    pub const FRAME_BUDGET_MS: &str = "performance.frameBudgetMs";

    /// Every key, in display order
    pub const ALL: [&str; 8] = [
        CACHING_ENABLED,
        LAZY_LOADING_ENABLED,
        ANIMATIONS_ENABLED,
        MONITORING_ENABLED,
        MAX_CACHE_SIZE,
        IMAGE_CACHE_SIZE,
        MEMORY_WARNING_THRESHOLD_MB,
        FRAME_BUDGET_MS,
    ];
}

/// A stored preference value
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferenceValue {
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl PreferenceValue {
    pub fn as_bool(self) -> Option<bool> {
        match self {
            PreferenceValue::Bool(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_int(self) -> Option<i64> {
        match self {
            PreferenceValue::Int(value) => Some(value),
            _ => None,
        }
    }

    /// Floats accept integer values too
    pub fn as_float(self) -> Option<f64> {
        match self {
            PreferenceValue::Float(value) => Some(value),
            PreferenceValue::Int(value) => Some(value as f64),
            PreferenceValue::Bool(_) => None,
        }
    }
}

impl fmt::Display for PreferenceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceValue::Bool(value) => write!(f, "{}", value),
            PreferenceValue::Int(value) => write!(f, "{}", value),
            PreferenceValue::Float(value) => write!(f, "{}", value),
        }
    }
}

/// Flat key/value user-preferences storage
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<PreferenceValue>;

    fn set(&mut self, key: &str, value: PreferenceValue) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory preference store
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, PreferenceValue>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<PreferenceValue> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: PreferenceValue) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Preference store backed by a TOML file, rewritten on every change
#[derive(Clone, Debug)]
pub struct TomlFilePreferences {
    path: PathBuf,
    values: BTreeMap<String, PreferenceValue>,
}

impl TomlFilePreferences {
    /// Open a preferences file. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(source) => toml::from_str(&source)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => {
                return Err(ThemeError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let encoded = toml::to_string(&self.values)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ThemeError::Io {
                path: parent.display().to_string(),
                source,
            })?;
        }
        fs::write(&self.path, encoded).map_err(|source| ThemeError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }
}

impl PreferenceStore for TomlFilePreferences {
    fn get(&self, key: &str) -> Option<PreferenceValue> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: PreferenceValue) -> Result<()> {
        let previous = self.values.insert(key.to_string(), value);
        if let Err(err) = self.flush() {
            match previous {
                Some(previous) => self.values.insert(key.to_string(), previous),
                None => self.values.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if let Some(previous) = self.values.remove(key) {
            if let Err(err) = self.flush() {
                self.values.insert(key.to_string(), previous);
                return Err(err);
            }
        }
        Ok(())
    }
}

/// Snapshot of the performance settings
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PerformanceSettings {
    pub caching_enabled: bool,
    pub lazy_loading_enabled: bool,
    pub animations_enabled: bool,
    pub monitoring_enabled: bool,
    pub max_cache_size: usize,
    pub image_cache_size: usize,
    pub memory_warning_threshold_mb: f64,
    pub frame_budget_ms: f64,
}

impl Default for PerformanceSettings {
    fn default() -> Self {
        Self {
            caching_enabled: true,
            lazy_loading_enabled: true,
            animations_enabled: true,
            monitoring_enabled: false,
            max_cache_size: DEFAULT_MAX_CACHE_SIZE,
            image_cache_size: DEFAULT_MAX_CACHE_SIZE,
            memory_warning_threshold_mb: 512.0,
            frame_budget_ms: 16.67,
        }
    }
}

impl PerformanceSettings {
    /// Current value of a key as a preference value
    pub fn value(&self, key: &str) -> Result<PreferenceValue> {
        let value = match key {
            keys::CACHING_ENABLED => PreferenceValue::Bool(self.caching_enabled),
            keys::LAZY_LOADING_ENABLED => PreferenceValue::Bool(self.lazy_loading_enabled),
            keys::ANIMATIONS_ENABLED => PreferenceValue::Bool(self.animations_enabled),
            keys::MONITORING_ENABLED => PreferenceValue::Bool(self.monitoring_enabled),
            keys::MAX_CACHE_SIZE => PreferenceValue::Int(self.max_cache_size as i64),
            keys::IMAGE_CACHE_SIZE => PreferenceValue::Int(self.image_cache_size as i64),
            keys::MEMORY_WARNING_THRESHOLD_MB => {
                PreferenceValue::Float(self.memory_warning_threshold_mb)
            }
            keys::FRAME_BUDGET_MS => PreferenceValue::Float(self.frame_budget_ms),
            _ => return Err(ThemeError::UnknownPreference(key.to_string())),
        };
        Ok(value)
    }

    /// Apply a value to a key, validating its type and range
    fn apply(&mut self, key: &str, value: PreferenceValue) -> Result<()> {
        let invalid = || ThemeError::InvalidPreferenceValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        let size = || {
            value
                .as_int()
                .and_then(|v| usize::try_from(v).ok())
                .ok_or_else(invalid)
        };
        let positive_float = || {
            value
                .as_float()
                .filter(|v| v.is_finite() && *v > 0.0)
                .ok_or_else(invalid)
        };

        match key {
            keys::CACHING_ENABLED => self.caching_enabled = value.as_bool().ok_or_else(invalid)?,
            keys::LAZY_LOADING_ENABLED => {
                self.lazy_loading_enabled = value.as_bool().ok_or_else(invalid)?
            }
            keys::ANIMATIONS_ENABLED => {
                self.animations_enabled = value.as_bool().ok_or_else(invalid)?
            }
            keys::MONITORING_ENABLED => {
                self.monitoring_enabled = value.as_bool().ok_or_else(invalid)?
            }
            keys::MAX_CACHE_SIZE => self.max_cache_size = size()?,
            keys::IMAGE_CACHE_SIZE => self.image_cache_size = size()?,
            keys::MEMORY_WARNING_THRESHOLD_MB => {
                self.memory_warning_threshold_mb = positive_float()?
            }
            keys::FRAME_BUDGET_MS => self.frame_budget_ms = positive_float()?,
            _ => return Err(ThemeError::UnknownPreference(key.to_string())),
        }
        Ok(())
    }
}

/// Performance settings bound to the store they persist to
pub struct PerformanceConfiguration {
    store: Box<dyn PreferenceStore>,
    settings: PerformanceSettings,
}

impl PerformanceConfiguration {
    /// Load settings from a store, keeping defaults for absent or invalid keys
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        let mut settings = PerformanceSettings::default();
        for key in keys::ALL {
            let Some(value) = store.get(key) else {
                continue;
            };
            if let Err(err) = settings.apply(key, value) {
                tracing::warn!("ignoring stored preference: {}", err);
            }
        }
        tracing::debug!("loaded performance configuration: {:?}", settings);
        Self { store, settings }
    }

    /// Configuration with defaults and a throwaway in-memory store
    pub fn in_memory() -> Self {
        Self::load(Box::new(MemoryPreferences::new()))
    }

    pub fn settings(&self) -> &PerformanceSettings {
        &self.settings
    }

    pub fn caching_enabled(&self) -> bool {
        self.settings.caching_enabled
    }

    pub fn lazy_loading_enabled(&self) -> bool {
        self.settings.lazy_loading_enabled
    }

    pub fn animations_enabled(&self) -> bool {
        self.settings.animations_enabled
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.settings.monitoring_enabled
    }

    pub fn max_cache_size(&self) -> usize {
        self.settings.max_cache_size
    }

    pub fn image_cache_size(&self) -> usize {
        self.settings.image_cache_size
    }

    pub fn memory_warning_threshold_mb(&self) -> f64 {
        self.settings.memory_warning_threshold_mb
    }

    pub fn frame_budget_ms(&self) -> f64 {
        self.settings.frame_budget_ms
    }

    pub fn set_caching_enabled(&mut self, enabled: bool) -> Result<()> {
        self.set(keys::CACHING_ENABLED, PreferenceValue::Bool(enabled))
    }

    pub fn set_lazy_loading_enabled(&mut self, enabled: bool) -> Result<()> {
        self.set(keys::LAZY_LOADING_ENABLED, PreferenceValue::Bool(enabled))
    }

    pub fn set_animations_enabled(&mut self, enabled: bool) -> Result<()> {
        self.set(keys::ANIMATIONS_ENABLED, PreferenceValue::Bool(enabled))
    }

    pub fn set_monitoring_enabled(&mut self, enabled: bool) -> Result<()> {
        self.set(keys::MONITORING_ENABLED, PreferenceValue::Bool(enabled))
    }

    pub fn set_max_cache_size(&mut self, size: usize) -> Result<()> {
        self.set(keys::MAX_CACHE_SIZE, PreferenceValue::Int(size as i64))
    }

    pub fn set_image_cache_size(&mut self, size: usize) -> Result<()> {
        self.set(keys::IMAGE_CACHE_SIZE, PreferenceValue::Int(size as i64))
    }

    pub fn set_memory_warning_threshold_mb(&mut self, threshold: f64) -> Result<()> {
        self.set(
            keys::MEMORY_WARNING_THRESHOLD_MB,
            PreferenceValue::Float(threshold),
        )
    }

    pub fn set_frame_budget_ms(&mut self, budget: f64) -> Result<()> {
        self.set(keys::FRAME_BUDGET_MS, PreferenceValue::Float(budget))
    }

    /// Validate, persist and apply one key. Settings change only once the
    /// store has accepted the value.
    pub fn set(&mut self, key: &str, value: PreferenceValue) -> Result<()> {
        let mut staged = self.settings.clone();
        staged.apply(key, value)?;
        self.store.set(key, value)?;
        self.settings = staged;
        Ok(())
    }

    /// Parse a textual value for `key` (as typed on a command line) and set it
    pub fn set_from_str(&mut self, key: &str, raw: &str) -> Result<()> {
        let current = self.settings.value(key)?;
        let invalid = || ThemeError::InvalidPreferenceValue {
            key: key.to_string(),
            value: raw.to_string(),
        };
        let value = match current {
            PreferenceValue::Bool(_) => PreferenceValue::Bool(raw.parse().map_err(|_| invalid())?),
            PreferenceValue::Int(_) => PreferenceValue::Int(raw.parse().map_err(|_| invalid())?),
            PreferenceValue::Float(_) => {
                PreferenceValue::Float(raw.parse().map_err(|_| invalid())?)
            }
        };
        self.set(key, value)
    }

    /// Remove every stored key and return to defaults
    pub fn reset(&mut self) -> Result<()> {
        for key in keys::ALL {
            self.store.remove(key)?;
        }
        self.settings = PerformanceSettings::default();
        Ok(())
    }
}

impl fmt::Debug for PerformanceConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PerformanceConfiguration")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Default for PerformanceConfiguration {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_store_is_empty() {
        let config = PerformanceConfiguration::in_memory();
        assert_eq!(config.settings(), &PerformanceSettings::default());
        assert_eq!(config.max_cache_size(), 100);
    }

    #[test]
    fn load_skips_mistyped_values() {
        let mut store = MemoryPreferences::new();
        store.set(keys::CACHING_ENABLED, PreferenceValue::Int(1)).unwrap();
        store.set(keys::MAX_CACHE_SIZE, PreferenceValue::Int(-5)).unwrap();
        store.set(keys::ANIMATIONS_ENABLED, PreferenceValue::Bool(false)).unwrap();

        let config = PerformanceConfiguration::load(Box::new(store));

        assert!(config.caching_enabled());
        assert_eq!(config.max_cache_size(), 100);
        assert!(!config.animations_enabled());
    }

    #[test]
    fn setters_reject_invalid_values_without_persisting() {
        let mut config = PerformanceConfiguration::in_memory();
        let err = config
            .set(keys::FRAME_BUDGET_MS, PreferenceValue::Float(-1.0))
            .unwrap_err();
        assert!(matches!(err, ThemeError::InvalidPreferenceValue { .. }));
        assert_eq!(config.frame_budget_ms(), 16.67);

        assert!(matches!(
            config.set("performance.bogus", PreferenceValue::Bool(true)),
            Err(ThemeError::UnknownPreference(_))
        ));
    }

    #[test]
    fn set_from_str_uses_the_key_type() {
        let mut config = PerformanceConfiguration::in_memory();
        config.set_from_str(keys::MAX_CACHE_SIZE, "25").unwrap();
        config.set_from_str(keys::MONITORING_ENABLED, "true").unwrap();
        config.set_from_str(keys::MEMORY_WARNING_THRESHOLD_MB, "256").unwrap();

        assert_eq!(config.max_cache_size(), 25);
        assert!(config.monitoring_enabled());
        assert_eq!(config.memory_warning_threshold_mb(), 256.0);
        assert!(config.set_from_str(keys::CACHING_ENABLED, "yes").is_err());
    }

    struct ReadOnlyPreferences;

    impl PreferenceStore for ReadOnlyPreferences {
        fn get(&self, _key: &str) -> Option<PreferenceValue> {
            None
        }

        fn set(&mut self, key: &str, _value: PreferenceValue) -> Result<()> {
            Err(ThemeError::Io {
                path: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_write_keeps_previous_settings() {
        let mut config = PerformanceConfiguration::load(Box::new(ReadOnlyPreferences));

        assert!(matches!(
            config.set_max_cache_size(7),
            Err(ThemeError::Io { .. })
        ));
        assert!(config.set_caching_enabled(false).is_err());
        assert!(config.set_from_str(keys::FRAME_BUDGET_MS, "8").is_err());

        assert_eq!(config.max_cache_size(), 100);
        assert!(config.caching_enabled());
        assert_eq!(config.frame_budget_ms(), 16.67);
        assert_eq!(config.settings(), &PerformanceSettings::default());
    }

    #[test]
    fn toml_store_rolls_back_unwritten_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("performance.toml");
        let mut store = TomlFilePreferences::open(&path).unwrap();
        store.set(keys::MAX_CACHE_SIZE, PreferenceValue::Int(5)).unwrap();

        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(store.set(keys::MAX_CACHE_SIZE, PreferenceValue::Int(9)).is_err());
        assert!(store.set(keys::CACHING_ENABLED, PreferenceValue::Bool(false)).is_err());
        assert!(store.remove(keys::MAX_CACHE_SIZE).is_err());

        assert_eq!(store.get(keys::MAX_CACHE_SIZE), Some(PreferenceValue::Int(5)));
        assert_eq!(store.get(keys::CACHING_ENABLED), None);
    }

    #[test]
    fn float_preferences_accept_integers() {
        assert_eq!(PreferenceValue::Int(3).as_float(), Some(3.0));
        assert_eq!(PreferenceValue::Bool(true).as_float(), None);
    }
}
