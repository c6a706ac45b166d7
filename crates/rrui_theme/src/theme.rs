//! Themes and color schemes

use crate::error::ThemeError;
use crate::tokens::*;
use rrui_core::{Appearance, Bundle};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of the built-in light theme
pub const LIGHT_THEME_NAME: &str = "Light";
/// Name of the built-in dark theme
pub const DARK_THEME_NAME: &str = "Dark";
/// Name of the built-in high-contrast theme
pub const HIGH_CONTRAST_THEME_NAME: &str = "High Contrast";

/// Palette variant selector
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
    HighContrast,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 3] = [
        ColorScheme::Light,
        ColorScheme::Dark,
        ColorScheme::HighContrast,
    ];

    /// Stable identifier, also used in cache keys and bundle asset suffixes
    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
            ColorScheme::HighContrast => "highContrast",
        }
    }

    /// True only for the `Dark` palette. `HighContrast` is its own palette
    /// and reports false here, even though [`ColorScheme::appearance`] maps it
    /// to a dark appearance.
    pub fn is_dark(self) -> bool {
        matches!(self, ColorScheme::Dark)
    }

    /// Platform appearance flag: light for `Light`, dark for everything else
    pub fn appearance(self) -> Appearance {
        match self {
            ColorScheme::Light => Appearance::Light,
            ColorScheme::Dark | ColorScheme::HighContrast => Appearance::Dark,
        }
    }

    /// Resolve the palette for this scheme
    pub fn resolve_colors(self, bundle: &Bundle) -> ThemeColors {
        match self {
            ColorScheme::Light => ThemeColors::new(bundle),
            ColorScheme::Dark => ThemeColors::dark(bundle),
            ColorScheme::HighContrast => ThemeColors::high_contrast(bundle),
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            "highcontrast" => Ok(ColorScheme::HighContrast),
            _ => Err(ThemeError::UnknownColorScheme(s.to_string())),
        }
    }
}

/// Optional replacements for the library-wide token scales
#[derive(Clone, Debug, Default)]
pub struct ThemeOverrides {
    pub typography: Option<Typography>,
    pub spacing: Option<Spacing>,
    pub elevation: Option<Elevation>,
    pub border_radius: Option<BorderRadius>,
    pub animation: Option<AnimationDurations>,
    pub component_size: Option<ComponentSize>,
}

impl ThemeOverrides {
    pub fn typography(mut self, typography: Typography) -> Self {
        self.typography = Some(typography);
        self
    }

    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn elevation(mut self, elevation: Elevation) -> Self {
        self.elevation = Some(elevation);
        self
    }

    pub fn border_radius(mut self, border_radius: BorderRadius) -> Self {
        self.border_radius = Some(border_radius);
        self
    }

    pub fn animation(mut self, animation: AnimationDurations) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn component_size(mut self, component_size: ComponentSize) -> Self {
        self.component_size = Some(component_size);
        self
    }
}

/// A fully resolved theme for one color scheme
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    name: String,
    color_scheme: ColorScheme,
    colors: ThemeColors,
    typography: Typography,
    spacing: Spacing,
    elevation: Elevation,
    border_radius: BorderRadius,
    animation: AnimationDurations,
    component_size: ComponentSize,
}

impl Theme {
    /// Build a theme. Pure: identical arguments give equal themes.
    pub fn create(
        name: impl Into<String>,
        color_scheme: ColorScheme,
        bundle: &Bundle,
        overrides: ThemeOverrides,
    ) -> Self {
        Self {
            name: name.into(),
            color_scheme,
            colors: color_scheme.resolve_colors(bundle),
            typography: overrides.typography.unwrap_or_default(),
            spacing: overrides.spacing.unwrap_or_default(),
            elevation: overrides.elevation.unwrap_or_default(),
            border_radius: overrides.border_radius.unwrap_or_default(),
            animation: overrides.animation.unwrap_or_default(),
            component_size: overrides.component_size.unwrap_or_default(),
        }
    }

    /// Built-in light theme, named `"Light"`
    pub fn light(bundle: &Bundle) -> Self {
        Self::create(LIGHT_THEME_NAME, ColorScheme::Light, bundle, ThemeOverrides::default())
    }

    /// Built-in dark theme, named `"Dark"`
    pub fn dark(bundle: &Bundle) -> Self {
        Self::create(DARK_THEME_NAME, ColorScheme::Dark, bundle, ThemeOverrides::default())
    }

    /// Built-in high-contrast theme, named `"High Contrast"`
    pub fn high_contrast(bundle: &Bundle) -> Self {
        Self::create(
            HIGH_CONTRAST_THEME_NAME,
            ColorScheme::HighContrast,
            bundle,
            ThemeOverrides::default(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    pub fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    pub fn color(&self, role: ColorRole) -> rrui_core::Color {
        self.colors.get(role)
    }

    pub fn typography(&self) -> &Typography {
        &self.typography
    }

    pub fn spacing(&self) -> &Spacing {
        &self.spacing
    }

    pub fn elevation(&self) -> &Elevation {
        &self.elevation
    }

    pub fn border_radius(&self) -> &BorderRadius {
        &self.border_radius
    }

    pub fn animation(&self) -> &AnimationDurations {
        &self.animation
    }

    pub fn component_size(&self) -> &ComponentSize {
        &self.component_size
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light(&Bundle::anonymous())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_parses_common_spellings() {
        assert_eq!("light".parse::<ColorScheme>().unwrap(), ColorScheme::Light);
        assert_eq!("Dark".parse::<ColorScheme>().unwrap(), ColorScheme::Dark);
        assert_eq!(
            "high-contrast".parse::<ColorScheme>().unwrap(),
            ColorScheme::HighContrast
        );
        assert_eq!(
            "highContrast".parse::<ColorScheme>().unwrap(),
            ColorScheme::HighContrast
        );
        assert!(matches!(
            "sepia".parse::<ColorScheme>(),
            Err(ThemeError::UnknownColorScheme(_))
        ));
    }

    #[test]
    fn appearance_is_light_only_for_light() {
        assert_eq!(ColorScheme::Light.appearance(), Appearance::Light);
        assert_eq!(ColorScheme::Dark.appearance(), Appearance::Dark);
        assert_eq!(ColorScheme::HighContrast.appearance(), Appearance::Dark);
    }

    #[test]
    fn is_dark_names_the_dark_palette_only() {
        assert!(ColorScheme::Dark.is_dark());
        assert!(!ColorScheme::Light.is_dark());
        assert!(!ColorScheme::HighContrast.is_dark());
        assert!(ColorScheme::HighContrast.appearance().is_dark());
    }

    #[test]
    fn create_selects_palette_by_scheme() {
        let bundle = Bundle::anonymous();
        for scheme in ColorScheme::ALL {
            let theme = Theme::create("Custom", scheme, &bundle, ThemeOverrides::default());
            assert_eq!(theme.colors(), &scheme.resolve_colors(&bundle));
            assert_eq!(theme.color_scheme(), scheme);
            assert_eq!(theme.name(), "Custom");
        }
    }

    #[test]
    fn overrides_replace_only_their_scale() {
        let spacing = Spacing {
            md: 20.0,
            ..Spacing::default()
        };
        let theme = Theme::create(
            "Roomy",
            ColorScheme::Light,
            &Bundle::anonymous(),
            ThemeOverrides::default()
                .spacing(spacing.clone())
                .animation(AnimationDurations::reduced_motion()),
        );

        assert_eq!(theme.spacing(), &spacing);
        assert_eq!(theme.animation().normal, 0.0);
        assert_eq!(theme.typography(), &Typography::default());
        assert_eq!(theme.border_radius(), &BorderRadius::default());
    }
}
