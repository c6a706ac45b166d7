//! Semantic color roles
//!
//! Every role is resolved from a [`Bundle`] by its asset name. The light
//! palette is the base; dark and high-contrast palettes start from the light
//! resolution and apply an explicit override list, each override resolved
//! from the variant-qualified asset name (`"surface.dark"`,
//! `"outline.highContrast"`). A role missing from an override list keeps its
//! light value in that variant.

use rrui_core::{Bundle, Color};
use serde::{Deserialize, Serialize};

macro_rules! color_roles {
    ($( $(#[$meta:meta])* $variant:ident => $field:ident, $asset:literal; )*) => {
        /// Semantic color role keys for dynamic access
        #[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
        pub enum ColorRole {
            $( $(#[$meta])* $variant, )*
        }

        impl ColorRole {
            /// Every role, in declaration order
            pub const ALL: &'static [ColorRole] = &[ $( ColorRole::$variant, )* ];

            /// Bundle asset name for this role
            pub fn asset_name(self) -> &'static str {
                match self {
                    $( ColorRole::$variant => $asset, )*
                }
            }

            /// Look a role up by its bundle asset name
            pub fn from_asset_name(name: &str) -> Option<ColorRole> {
                match name {
                    $( $asset => Some(ColorRole::$variant), )*
                    _ => None,
                }
            }
        }

        /// Complete set of resolved semantic colors
        #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
        pub struct ThemeColors {
            $( pub $field: Color, )*
        }

        impl ThemeColors {
            /// Get a color by role
            pub fn get(&self, role: ColorRole) -> Color {
                match role {
                    $( ColorRole::$variant => self.$field, )*
                }
            }

            /// Replace the color for a role
            pub fn set(&mut self, role: ColorRole, color: Color) {
                match role {
                    $( ColorRole::$variant => self.$field = color, )*
                }
            }

            fn from_fn(mut resolve: impl FnMut(ColorRole) -> Color) -> Self {
                Self {
                    $( $field: resolve(ColorRole::$variant), )*
                }
            }
        }
    };
}

color_roles! {
    // Brand
    Primary => primary, "primary";
    OnPrimary => on_primary, "onPrimary";
    PrimaryContainer => primary_container, "primaryContainer";
    OnPrimaryContainer => on_primary_container, "onPrimaryContainer";
    Secondary => secondary, "secondary";
    OnSecondary => on_secondary, "onSecondary";
    SecondaryContainer => secondary_container, "secondaryContainer";
    OnSecondaryContainer => on_secondary_container, "onSecondaryContainer";
    Tertiary => tertiary, "tertiary";
    OnTertiary => on_tertiary, "onTertiary";

    // Surfaces
    Background => background, "background";
    OnBackground => on_background, "onBackground";
    Surface => surface, "surface";
    OnSurface => on_surface, "onSurface";
    SurfaceVariant => surface_variant, "surfaceVariant";
    OnSurfaceVariant => on_surface_variant, "onSurfaceVariant";

    // Status
    Error => error, "error";
    OnError => on_error, "onError";
    Success => success, "success";
    OnSuccess => on_success, "onSuccess";
    Warning => warning, "warning";
    OnWarning => on_warning, "onWarning";
    Info => info, "info";
    OnInfo => on_info, "onInfo";

    // Outlines
    Outline => outline, "outline";
    OutlineVariant => outline_variant, "outlineVariant";

    // Interaction states
    Disabled => disabled, "disabled";
    OnDisabled => on_disabled, "onDisabled";
    Focus => focus, "focus";
    Hover => hover, "hover";
    Pressed => pressed, "pressed";
    Selected => selected, "selected";
    Active => active, "active";

    // Gradients
    GradientStart => gradient_start, "gradientStart";
    GradientEnd => gradient_end, "gradientEnd";

    // Overlays
    Overlay => overlay, "overlay";
    Scrim => scrim, "scrim";

    // Text
    TextPrimary => text_primary, "textPrimary";
    TextSecondary => text_secondary, "textSecondary";
    TextTertiary => text_tertiary, "textTertiary";
    TextDisabled => text_disabled, "textDisabled";
    TextInverse => text_inverse, "textInverse";
    TextLink => text_link, "textLink";

    // Neutral ramp
    Neutral50 => neutral_50, "neutral50";
    Neutral100 => neutral_100, "neutral100";
    Neutral200 => neutral_200, "neutral200";
    Neutral300 => neutral_300, "neutral300";
    Neutral400 => neutral_400, "neutral400";
    Neutral500 => neutral_500, "neutral500";
    Neutral600 => neutral_600, "neutral600";
    Neutral700 => neutral_700, "neutral700";
    Neutral800 => neutral_800, "neutral800";
    Neutral900 => neutral_900, "neutral900";
}

/// Asset-name suffix for dark overrides
pub const DARK_SUFFIX: &str = "dark";

/// Asset-name suffix for high-contrast overrides
pub const HIGH_CONTRAST_SUFFIX: &str = "highContrast";

impl ThemeColors {
    /// Resolve the light palette from a bundle
    pub fn new(bundle: &Bundle) -> Self {
        Self::from_fn(|role| bundle.resolve_color(role.asset_name(), role.light_fallback()))
    }

    /// Resolve the dark palette: light values plus the dark override list
    pub fn dark(bundle: &Bundle) -> Self {
        let mut colors = Self::new(bundle);
        colors.apply_overrides(bundle, DARK_SUFFIX, &dark_overrides());
        colors
    }

    /// Resolve the high-contrast palette: light values plus the high-contrast override list
    pub fn high_contrast(bundle: &Bundle) -> Self {
        let mut colors = Self::new(bundle);
        colors.apply_overrides(bundle, HIGH_CONTRAST_SUFFIX, &high_contrast_overrides());
        colors
    }

    fn apply_overrides(&mut self, bundle: &Bundle, suffix: &str, overrides: &[(ColorRole, Color)]) {
        for &(role, fallback) in overrides {
            let name = variant_asset_name(role, suffix);
            self.set(role, bundle.resolve_color(&name, fallback));
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::new(&Bundle::anonymous())
    }
}

/// Variant-qualified asset name, e.g. `"onSecondary.dark"`
pub fn variant_asset_name(role: ColorRole, suffix: &str) -> String {
    format!("{}.{}", role.asset_name(), suffix)
}

/// Roles the dark palette overrides
pub fn dark_override_roles() -> Vec<ColorRole> {
    dark_overrides().iter().map(|(role, _)| *role).collect()
}

/// Roles the high-contrast palette overrides
pub fn high_contrast_override_roles() -> Vec<ColorRole> {
    high_contrast_overrides().iter().map(|(role, _)| *role).collect()
}

impl ColorRole {
    /// Built-in light value used when a bundle lacks the asset
    pub fn light_fallback(self) -> Color {
        use ColorRole::*;
        match self {
            Primary => Color::from_hex(0x1E66F5),
            OnPrimary => Color::WHITE,
            PrimaryContainer => Color::from_hex(0xD6E2FD),
            OnPrimaryContainer => Color::from_hex(0x0A2A6B),
            Secondary => Color::from_hex(0x8839EF),
            OnSecondary => Color::WHITE,
            SecondaryContainer => Color::from_hex(0xE9DCFC),
            OnSecondaryContainer => Color::from_hex(0x3B1670),
            Tertiary => Color::from_hex(0x179299),
            OnTertiary => Color::WHITE,
            Background => Color::from_hex(0xEFF1F5),
            OnBackground => Color::from_hex(0x4C4F69),
            Surface => Color::WHITE,
            OnSurface => Color::from_hex(0x4C4F69),
            SurfaceVariant => Color::from_hex(0xE6E9EF),
            OnSurfaceVariant => Color::from_hex(0x5C5F77),
            Error => Color::from_hex(0xD20F39),
            OnError => Color::WHITE,
            Success => Color::from_hex(0x40A02B),
            OnSuccess => Color::WHITE,
            Warning => Color::from_hex(0xDF8E1D),
            OnWarning => Color::WHITE,
            Info => Color::from_hex(0x04A5E5),
            OnInfo => Color::WHITE,
            Outline => Color::from_hex(0x9CA0B0),
            OutlineVariant => Color::from_hex(0xCCD0DA),
            Disabled => Color::from_hex(0xDCE0E8),
            OnDisabled => Color::from_hex(0x9CA0B0),
            Focus => Color::from_hex(0x1E66F5),
            Hover => Color::BLACK.with_alpha_u8(10),
            Pressed => Color::BLACK.with_alpha_u8(26),
            Selected => Color::from_hex(0x1E66F5).with_alpha_u8(31),
            Active => Color::from_hex(0x114AB3),
            GradientStart => Color::from_hex(0x1E66F5),
            GradientEnd => Color::from_hex(0x8839EF),
            Overlay => Color::BLACK.with_alpha_u8(102),
            Scrim => Color::BLACK.with_alpha_u8(82),
            TextPrimary => Color::from_hex(0x4C4F69),
            TextSecondary => Color::from_hex(0x6C6F85),
            TextTertiary => Color::from_hex(0x8C8FA1),
            TextDisabled => Color::from_hex(0xACB0BE),
            TextInverse => Color::WHITE,
            TextLink => Color::from_hex(0x1E66F5),
            Neutral50 => Color::from_hex(0xF9FAFB),
            Neutral100 => Color::from_hex(0xF3F4F6),
            Neutral200 => Color::from_hex(0xE5E7EB),
            Neutral300 => Color::from_hex(0xD1D5DB),
            Neutral400 => Color::from_hex(0x9CA3AF),
            Neutral500 => Color::from_hex(0x6B7280),
            Neutral600 => Color::from_hex(0x4B5563),
            Neutral700 => Color::from_hex(0x374151),
            Neutral800 => Color::from_hex(0x1F2937),
            Neutral900 => Color::from_hex(0x111827),
        }
    }
}

fn dark_overrides() -> [(ColorRole, Color); 40] {
    use ColorRole::*;
    [
        (OnPrimary, Color::from_hex(0x11111B)),
        (PrimaryContainer, Color::from_hex(0x1D3461)),
        (OnPrimaryContainer, Color::from_hex(0xCFE0FD)),
        (OnSecondary, Color::from_hex(0x11111B)),
        (SecondaryContainer, Color::from_hex(0x3E2A5C)),
        (OnSecondaryContainer, Color::from_hex(0xE8DAFB)),
        (OnTertiary, Color::from_hex(0x11111B)),
        (Background, Color::from_hex(0x1E1E2E)),
        (OnBackground, Color::from_hex(0xCDD6F4)),
        (Surface, Color::from_hex(0x313244)),
        (OnSurface, Color::from_hex(0xCDD6F4)),
        (SurfaceVariant, Color::from_hex(0x45475A)),
        (OnSurfaceVariant, Color::from_hex(0xBAC2DE)),
        (OnError, Color::from_hex(0x11111B)),
        (OnSuccess, Color::from_hex(0x11111B)),
        (OnWarning, Color::from_hex(0x11111B)),
        (OnInfo, Color::from_hex(0x11111B)),
        (Outline, Color::from_hex(0x6C7086)),
        (OutlineVariant, Color::from_hex(0x45475A)),
        (Disabled, Color::from_hex(0x45475A)),
        (OnDisabled, Color::from_hex(0x7F849C)),
        (Hover, Color::WHITE.with_alpha_u8(15)),
        (Pressed, Color::WHITE.with_alpha_u8(31)),
        (Overlay, Color::BLACK.with_alpha_u8(153)),
        (Scrim, Color::BLACK.with_alpha_u8(128)),
        (TextPrimary, Color::from_hex(0xCDD6F4)),
        (TextSecondary, Color::from_hex(0xBAC2DE)),
        (TextTertiary, Color::from_hex(0x9399B2)),
        (TextDisabled, Color::from_hex(0x6C7086)),
        (TextInverse, Color::from_hex(0x11111B)),
        (Neutral50, Color::from_hex(0x111827)),
        (Neutral100, Color::from_hex(0x1F2937)),
        (Neutral200, Color::from_hex(0x374151)),
        (Neutral300, Color::from_hex(0x4B5563)),
        (Neutral400, Color::from_hex(0x6B7280)),
        (Neutral500, Color::from_hex(0x9CA3AF)),
        (Neutral600, Color::from_hex(0xD1D5DB)),
        (Neutral700, Color::from_hex(0xE5E7EB)),
        (Neutral800, Color::from_hex(0xF3F4F6)),
        (Neutral900, Color::from_hex(0xF9FAFB)),
    ]
}

fn high_contrast_overrides() -> [(ColorRole, Color); 32] {
    use ColorRole::*;
    [
        (Primary, Color::from_hex(0x0033A0)),
        (OnPrimary, Color::WHITE),
        (Secondary, Color::from_hex(0x4A0E9E)),
        (OnSecondary, Color::WHITE),
        (Background, Color::WHITE),
        (OnBackground, Color::BLACK),
        (Surface, Color::WHITE),
        (OnSurface, Color::BLACK),
        (OnSurfaceVariant, Color::BLACK),
        (Error, Color::from_hex(0x9B0020)),
        (Success, Color::from_hex(0x1B5E20)),
        (OnSuccess, Color::WHITE),
        (Warning, Color::from_hex(0x8A4B00)),
        (OnWarning, Color::WHITE),
        (Info, Color::from_hex(0x004E7A)),
        (OnInfo, Color::WHITE),
        (Outline, Color::BLACK),
        (OutlineVariant, Color::from_hex(0x333333)),
        (Focus, Color::BLACK),
        (TextPrimary, Color::BLACK),
        (TextSecondary, Color::from_hex(0x1A1A1A)),
        (TextTertiary, Color::from_hex(0x333333)),
        (TextDisabled, Color::from_hex(0x555555)),
        (TextLink, Color::from_hex(0x0033A0)),
        (Neutral200, Color::from_hex(0xBDBDBD)),
        (Neutral300, Color::from_hex(0x8C8C8C)),
        (Neutral400, Color::from_hex(0x6B6B6B)),
        (Neutral500, Color::from_hex(0x4D4D4D)),
        (Neutral600, Color::from_hex(0x333333)),
        (Neutral700, Color::from_hex(0x1F1F1F)),
        (Neutral800, Color::from_hex(0x0F0F0F)),
        (Neutral900, Color::BLACK),
    ]
}
