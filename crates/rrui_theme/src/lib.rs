//! RRUI Theme System
//!
//! Semantic colors, design tokens, a theme provider and the resource caches
//! components draw their styling from.
//!
//! # Overview
//!
//! - **Tokens**: semantic color roles, typography, spacing, elevation,
//!   border radii, animation durations, component sizes
//! - **Themes**: immutable bundles of resolved tokens for one [`ColorScheme`]
//!   (light, dark or high contrast)
//! - **Provider**: the mutable "current theme" for a view hierarchy, following
//!   system appearance changes
//! - **Optimizer**: bounded caches for themes, colors, fonts and images, sized
//!   by a persisted [`PerformanceConfiguration`]
//!
//! # Quick Start
//!
//! ```rust
//! use rrui_core::Bundle;
//! use rrui_theme::{ColorRole, ColorScheme, PerformanceOptimizer, ThemeProvider};
//!
//! let bundle = Bundle::new("com.example.app");
//!
//! // App root owns the provider and passes the theme down
//! let mut provider = ThemeProvider::with_bundle(bundle.clone());
//! let primary = provider.current_theme().color(ColorRole::Primary);
//! provider.toggle_theme();
//! assert_eq!(provider.current_theme().name(), "Dark");
//!
//! // Resolved resources are memoized per (name, bundle, scheme)
//! let mut optimizer = PerformanceOptimizer::with_defaults();
//! let theme = optimizer.get_cached_theme("Light", &bundle, ColorScheme::Light);
//! assert_eq!(theme.color(ColorRole::Primary), primary);
//! ```
//!
//! Nothing here is global: providers and optimizers are plain values passed
//! to whoever needs them.

pub mod cache;
pub mod config;
pub mod error;
pub mod optimizer;
pub mod provider;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use cache::{AccessCountCache, CacheStats, DEFAULT_MAX_CACHE_SIZE};
pub use config::{
    MemoryPreferences, PerformanceConfiguration, PerformanceSettings, PreferenceStore,
    PreferenceValue, TomlFilePreferences,
};
pub use error::{Result, ThemeError};
pub use optimizer::{
    CacheSizes, ColorKey, FontKey, ImageAsset, ImageKey, PerformanceOptimizer, ThemeKey,
    MISSING_COLOR,
};
pub use provider::{ThemeChangeListener, ThemeProvider};
pub use theme::{
    ColorScheme, Theme, ThemeOverrides, DARK_THEME_NAME, HIGH_CONTRAST_THEME_NAME,
    LIGHT_THEME_NAME,
};
pub use tokens::*;
