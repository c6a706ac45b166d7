use rrui_core::{Appearance, Bundle, Color, SystemEvent};
use rrui_theme::{
    dark_override_roles, high_contrast_override_roles, variant_asset_name, ColorRole, ColorScheme,
    Theme, ThemeColors, ThemeOverrides, ThemeProvider, DARK_SUFFIX, HIGH_CONTRAST_SUFFIX,
};

fn app_bundle() -> Bundle {
    Bundle::new("com.example.app")
        .with_color("primary", Color::from_hex(0x0A84FF))
        .with_color("surface.dark", Color::from_hex(0x1C1C1E))
}

#[test]
fn create_is_deterministic() {
    let bundle = app_bundle();
    for scheme in ColorScheme::ALL {
        let first = Theme::create("Brand", scheme, &bundle, ThemeOverrides::default());
        let second = Theme::create("Brand", scheme, &bundle, ThemeOverrides::default());
        assert_eq!(first, second, "scheme={scheme:?}");
    }
}

#[test]
fn every_role_resolves_in_every_scheme() {
    let bundle = Bundle::anonymous();
    for scheme in ColorScheme::ALL {
        let colors = scheme.resolve_colors(&bundle);
        for &role in ColorRole::ALL {
            let color = colors.get(role);
            assert!(
                color.to_array().iter().all(|c| c.is_finite() && (0.0..=1.0).contains(c)),
                "scheme={scheme:?} role={role:?} resolved to {color:?}"
            );
        }
    }
}

#[test]
fn variant_overrides_read_variant_assets() {
    let marker = Color::from_hex(0xABCDEF);
    let mut bundle = Bundle::new("variants");
    for &role in ColorRole::ALL {
        bundle = bundle
            .with_color(variant_asset_name(role, DARK_SUFFIX), marker)
            .with_color(variant_asset_name(role, HIGH_CONTRAST_SUFFIX), marker);
    }

    let dark = ThemeColors::dark(&bundle);
    for role in dark_override_roles() {
        assert_eq!(dark.get(role), marker, "dark {role:?}");
    }

    let high_contrast = ThemeColors::high_contrast(&bundle);
    for role in high_contrast_override_roles() {
        assert_eq!(high_contrast.get(role), marker, "high contrast {role:?}");
    }
}

#[test]
fn bundle_assets_reach_the_theme() {
    let bundle = app_bundle();
    let light = Theme::light(&bundle);
    let dark = Theme::dark(&bundle);

    assert_eq!(light.color(ColorRole::Primary), Color::from_hex(0x0A84FF));
    assert_eq!(dark.color(ColorRole::Primary), Color::from_hex(0x0A84FF));
    assert_eq!(dark.color(ColorRole::Surface), Color::from_hex(0x1C1C1E));
    assert_ne!(light.color(ColorRole::Surface), Color::from_hex(0x1C1C1E));
}

#[test]
fn toggle_round_trips_builtin_light() {
    let bundle = app_bundle();
    let mut provider = ThemeProvider::new(Theme::light(&bundle), bundle.clone());

    provider.toggle_theme();
    assert_eq!(provider.current_theme(), &Theme::dark(&bundle));
    assert_eq!(provider.color_scheme(), Appearance::Dark);

    provider.toggle_theme();
    assert_eq!(provider.current_theme(), &Theme::light(&bundle));
    assert_eq!(provider.color_scheme(), Appearance::Light);
}

#[test]
fn system_appearance_replaces_custom_theme() {
    let bundle = app_bundle();
    let mut provider = ThemeProvider::with_bundle(bundle.clone());
    provider.set_theme(Theme::create(
        "Ocean",
        ColorScheme::HighContrast,
        &bundle,
        ThemeOverrides::default(),
    ));

    provider.update_for_system_color_scheme(Appearance::Dark);
    assert_eq!(provider.current_theme(), &Theme::dark(&bundle));

    provider.set_theme(Theme::create(
        "Ocean",
        ColorScheme::Dark,
        &bundle,
        ThemeOverrides::default(),
    ));
    provider.handle_system_event(&SystemEvent::AppearanceChanged(Appearance::Light));
    assert_eq!(provider.current_theme(), &Theme::light(&bundle));
}

#[test]
fn theme_exports_to_json() {
    let theme = Theme::high_contrast(&Bundle::anonymous());
    let json = serde_json::to_value(&theme).unwrap();

    assert_eq!(json["name"], "High Contrast");
    assert_eq!(json["color_scheme"], "highContrast");
    assert_eq!(json["colors"]["on_background"], "#000000");

    let back: Theme = serde_json::from_value(json).unwrap();
    assert_eq!(back, theme);
}

#[test]
fn builtin_themes_survive_serialization() {
    let bundle = Bundle::anonymous();
    for theme in [
        Theme::light(&bundle),
        Theme::dark(&bundle),
        Theme::high_contrast(&bundle),
    ] {
        let json = serde_json::to_string(&theme).unwrap();
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme, "{} changed after a JSON round trip", theme.name());
    }
}
