//! Theme, color, font and image memoization
//!
//! A [`PerformanceOptimizer`] owns one [`AccessCountCache`] per resource
//! kind. It is constructed explicitly and handed to whatever needs cached
//! resources; there is no process-wide instance.

use crate::cache::{AccessCountCache, CacheStats};
use crate::config::PerformanceConfiguration;
use crate::error::Result;
use crate::theme::{ColorScheme, Theme, ThemeOverrides};
use crate::tokens::{ColorRole, Font, FontWeight};
use rrui_core::{Bundle, Color, SystemEvent};
use serde::Serialize;
use std::sync::Arc;

/// Color returned for names that neither the bundle nor the role table know
pub const MISSING_COLOR: Color = Color::TRANSPARENT;

/// Cache key for themes
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ThemeKey {
    pub name: String,
    pub bundle_id: String,
    pub color_scheme: ColorScheme,
}

impl ThemeKey {
    pub fn new(name: &str, bundle: &Bundle, color_scheme: ColorScheme) -> Self {
        Self {
            name: name.to_string(),
            bundle_id: bundle.identifier_or_unknown().to_string(),
            color_scheme,
        }
    }
}

/// Cache key for named colors
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorKey {
    pub name: String,
    pub bundle_id: String,
}

impl ColorKey {
    pub fn new(name: &str, bundle: &Bundle) -> Self {
        Self {
            name: name.to_string(),
            bundle_id: bundle.identifier_or_unknown().to_string(),
        }
    }
}

/// Cache key for fonts. The point size is keyed by its bit pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontKey {
    pub name: String,
    pub size_bits: u32,
    pub weight: FontWeight,
    pub bundle_id: String,
}

impl FontKey {
    pub fn new(name: &str, size: f32, weight: FontWeight, bundle: &Bundle) -> Self {
        Self {
            name: name.to_string(),
            size_bits: size.to_bits(),
            weight,
            bundle_id: bundle.identifier_or_unknown().to_string(),
        }
    }

    pub fn size(&self) -> f32 {
        f32::from_bits(self.size_bits)
    }
}

/// Cache key for images
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageKey {
    pub name: String,
    pub bundle_id: String,
}

impl ImageKey {
    pub fn new(name: &str, bundle: &Bundle) -> Self {
        Self {
            name: name.to_string(),
            bundle_id: bundle.identifier_or_unknown().to_string(),
        }
    }
}

/// A named image resolved against a bundle
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImageAsset {
    pub name: String,
    pub bundle_id: String,
    /// Path from the bundle manifest, `None` if the bundle lacks the image
    pub path: Option<String>,
}

/// Entry counts per cache kind
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheSizes {
    pub themes: usize,
    pub colors: usize,
    pub fonts: usize,
    pub images: usize,
}

impl CacheSizes {
    pub fn total(&self) -> usize {
        self.themes + self.colors + self.fonts + self.images
    }
}

/// Memoizes resolved themes, colors, fonts and images
pub struct PerformanceOptimizer {
    config: PerformanceConfiguration,
    themes: AccessCountCache<ThemeKey, Arc<Theme>>,
    colors: AccessCountCache<ColorKey, Color>,
    fonts: AccessCountCache<FontKey, Arc<Font>>,
    images: AccessCountCache<ImageKey, Arc<ImageAsset>>,
}

impl PerformanceOptimizer {
    pub fn new(config: PerformanceConfiguration) -> Self {
        let max = config.max_cache_size();
        let image_max = config.image_cache_size();
        Self {
            themes: AccessCountCache::new(max),
            colors: AccessCountCache::new(max),
            fonts: AccessCountCache::new(max),
            images: AccessCountCache::new(image_max),
            config,
        }
    }

    /// Optimizer with default settings held in memory
    pub fn with_defaults() -> Self {
        Self::new(PerformanceConfiguration::in_memory())
    }

    pub fn configuration(&self) -> &PerformanceConfiguration {
        &self.config
    }

    /// Mutate (and persist) the configuration, then resize the caches to match
    pub fn configure<F>(&mut self, update: F) -> Result<()>
    where
        F: FnOnce(&mut PerformanceConfiguration) -> Result<()>,
    {
        let result = update(&mut self.config);
        let max = self.config.max_cache_size();
        self.themes.set_capacity(max);
        self.colors.set_capacity(max);
        self.fonts.set_capacity(max);
        self.images.set_capacity(self.config.image_cache_size());
        if !self.config.caching_enabled() {
            self.clear_caches();
        }
        result
    }

    /// Theme for `(name, bundle, scheme)`, built with [`Theme::create`] on a miss
    pub fn get_cached_theme(
        &mut self,
        name: &str,
        bundle: &Bundle,
        color_scheme: ColorScheme,
    ) -> Arc<Theme> {
        let build = || {
            Arc::new(Theme::create(
                name,
                color_scheme,
                bundle,
                ThemeOverrides::default(),
            ))
        };
        if !self.config.caching_enabled() {
            return build();
        }
        self.themes
            .get_or_insert_with(ThemeKey::new(name, bundle, color_scheme), build)
    }

    /// Named color from the bundle. Unknown names fall back to the light
    /// value of the matching role, then to [`MISSING_COLOR`].
    pub fn get_cached_color(&mut self, name: &str, bundle: &Bundle) -> Color {
        let build = || {
            let fallback = ColorRole::from_asset_name(name)
                .map(ColorRole::light_fallback)
                .unwrap_or(MISSING_COLOR);
            bundle.resolve_color(name, fallback)
        };
        if !self.config.caching_enabled() {
            return build();
        }
        self.colors
            .get_or_insert_with(ColorKey::new(name, bundle), build)
    }

    /// Font for a bundle font name; unregistered names are used as the family
    pub fn get_cached_font(
        &mut self,
        name: &str,
        size: f32,
        weight: FontWeight,
        bundle: &Bundle,
    ) -> Arc<Font> {
        let build = || {
            Arc::new(Font {
                family: bundle.font_family(name).unwrap_or(name).to_string(),
                size,
                weight,
            })
        };
        if !self.config.caching_enabled() {
            return build();
        }
        self.fonts
            .get_or_insert_with(FontKey::new(name, size, weight, bundle), build)
    }

    pub fn get_cached_image(&mut self, name: &str, bundle: &Bundle) -> Arc<ImageAsset> {
        let build = || {
            Arc::new(ImageAsset {
                name: name.to_string(),
                bundle_id: bundle.identifier_or_unknown().to_string(),
                path: bundle.image_path(name).map(str::to_string),
            })
        };
        if !self.config.caching_enabled() {
            return build();
        }
        self.images
            .get_or_insert_with(ImageKey::new(name, bundle), build)
    }

    /// Empty all four caches
    pub fn clear_caches(&mut self) {
        let before = self.cache_sizes();
        self.themes.clear();
        self.colors.clear();
        self.fonts.clear();
        self.images.clear();
        tracing::debug!("cleared caches ({} entries)", before.total());
    }

    /// Evict one least-accessed entry from each cache holding more than half
    /// of its capacity
    pub fn optimize_caches(&mut self) {
        fn trim<K, V>(kind: &str, cache: &mut AccessCountCache<K, V>)
        where
            K: std::hash::Hash + Eq + Clone + std::fmt::Debug,
            V: Clone,
        {
            if cache.len() > cache.capacity() / 2 {
                if let Some(key) = cache.evict_least_accessed() {
                    tracing::debug!("optimize_caches: trimmed {} entry {:?}", kind, key);
                }
            }
        }

        trim("theme", &mut self.themes);
        trim("color", &mut self.colors);
        trim("font", &mut self.fonts);
        trim("image", &mut self.images);
    }

    /// React to a forwarded system event. Low memory clears every cache.
    pub fn handle_system_event(&mut self, event: &SystemEvent) {
        if let SystemEvent::LowMemory = event {
            tracing::warn!("low memory signal: clearing resource caches");
            self.clear_caches();
        }
    }

    pub fn cache_sizes(&self) -> CacheSizes {
        CacheSizes {
            themes: self.themes.len(),
            colors: self.colors.len(),
            fonts: self.fonts.len(),
            images: self.images.len(),
        }
    }

    /// Combined hit/miss/eviction counters across all caches
    pub fn stats(&self) -> CacheStats {
        [
            self.themes.stats(),
            self.colors.stats(),
            self.fonts.stats(),
            self.images.stats(),
        ]
        .into_iter()
        .fold(CacheStats::default(), |acc, s| CacheStats {
            hits: acc.hits + s.hits,
            misses: acc.misses + s.misses,
            evictions: acc.evictions + s.evictions,
        })
    }

    pub fn theme_cache(&self) -> &AccessCountCache<ThemeKey, Arc<Theme>> {
        &self.themes
    }

    pub fn color_cache(&self) -> &AccessCountCache<ColorKey, Color> {
        &self.colors
    }

    pub fn font_cache(&self) -> &AccessCountCache<FontKey, Arc<Font>> {
        &self.fonts
    }

    pub fn image_cache(&self) -> &AccessCountCache<ImageKey, Arc<ImageAsset>> {
        &self.images
    }
}

impl Default for PerformanceOptimizer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_keys_do_not_collide_on_delimiters() {
        let a = Bundle::new("x");
        let left = ThemeKey {
            name: "a_b".into(),
            bundle_id: "c".into(),
            color_scheme: ColorScheme::Light,
        };
        let right = ThemeKey {
            name: "a".into(),
            bundle_id: "b_c".into(),
            color_scheme: ColorScheme::Light,
        };
        assert_ne!(left, right);
        assert_ne!(ColorKey::new("a_b", &a), ColorKey::new("a", &a));
    }

    #[test]
    fn anonymous_bundle_keys_use_unknown() {
        let key = ImageKey::new("logo", &Bundle::anonymous());
        assert_eq!(key.bundle_id, "unknown");
    }

    #[test]
    fn font_key_round_trips_size() {
        let key = FontKey::new("body", 17.5, FontWeight::Medium, &Bundle::anonymous());
        assert_eq!(key.size(), 17.5);
    }

    #[test]
    fn role_names_fall_back_to_light_palette() {
        let mut optimizer = PerformanceOptimizer::with_defaults();
        let bundle = Bundle::anonymous();
        assert_eq!(
            optimizer.get_cached_color("primary", &bundle),
            ColorRole::Primary.light_fallback()
        );
        assert_eq!(optimizer.get_cached_color("nope", &bundle), MISSING_COLOR);
    }

    #[test]
    fn fonts_resolve_family_from_bundle() {
        let mut optimizer = PerformanceOptimizer::with_defaults();
        let bundle = Bundle::new("app").with_font("body", "Inter");

        let body = optimizer.get_cached_font("body", 17.0, FontWeight::Regular, &bundle);
        let raw = optimizer.get_cached_font("Menlo", 12.0, FontWeight::Regular, &bundle);

        assert_eq!(body.family, "Inter");
        assert_eq!(raw.family, "Menlo");
    }
}
