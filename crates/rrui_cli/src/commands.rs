//! Subcommand implementations

use crate::OutputFormat;
use anyhow::{Context, Result};
use rrui_core::Bundle;
use rrui_theme::config::keys;
use rrui_theme::{
    AnimationDurations, ColorScheme, PerformanceConfiguration, Theme, ThemeOverrides,
    TomlFilePreferences,
};
use serde::Serialize;
use std::path::Path;

pub fn theme(
    scheme: &str,
    name: Option<&str>,
    bundle_path: Option<&Path>,
    reduced_motion: bool,
    format: OutputFormat,
) -> Result<()> {
    let theme = resolve_theme(scheme, name, bundle_path, reduced_motion)?;
    println!("{}", render(&theme, format)?);
    Ok(())
}

fn resolve_theme(
    scheme: &str,
    name: Option<&str>,
    bundle_path: Option<&Path>,
    reduced_motion: bool,
) -> Result<Theme> {
    let scheme: ColorScheme = scheme.parse()?;
    let bundle = match bundle_path {
        Some(path) => Bundle::load(path)
            .with_context(|| format!("Failed to load bundle {}", path.display()))?,
        None => Bundle::anonymous(),
    };

    let mut overrides = ThemeOverrides::default();
    if reduced_motion {
        overrides = overrides.animation(AnimationDurations::reduced_motion());
    }
    let name = name.unwrap_or(match scheme {
        ColorScheme::Light => rrui_theme::LIGHT_THEME_NAME,
        ColorScheme::Dark => rrui_theme::DARK_THEME_NAME,
        ColorScheme::HighContrast => rrui_theme::HIGH_CONTRAST_THEME_NAME,
    });

    let theme = Theme::create(name, scheme, &bundle, overrides);
    tracing::info!(
        "Resolved theme {:?} ({}) from bundle {}",
        theme.name(),
        scheme,
        bundle.identifier_or_unknown()
    );
    Ok(theme)
}

pub fn config_show(prefs: &Path) -> Result<()> {
    for line in settings_lines(&open(prefs)?)? {
        println!("{}", line);
    }
    Ok(())
}

/// One `key = value` line per setting, in key order
fn settings_lines(config: &PerformanceConfiguration) -> Result<Vec<String>> {
    keys::ALL
        .iter()
        .map(|key| -> Result<String> {
            Ok(format!("{} = {}", key, config.settings().value(key)?))
        })
        .collect()
}

pub fn config_set(prefs: &Path, key: &str, value: &str) -> Result<()> {
    let mut config = open(prefs)?;
    config
        .set_from_str(key, value)
        .with_context(|| format!("Failed to set {}", key))?;
    tracing::info!("{} = {} (saved to {})", key, value, prefs.display());
    Ok(())
}

pub fn config_reset(prefs: &Path) -> Result<()> {
    let mut config = open(prefs)?;
    config.reset().context("Failed to reset preferences")?;
    tracing::info!("Reset preferences in {}", prefs.display());
    Ok(())
}

fn open(prefs: &Path) -> Result<PerformanceConfiguration> {
    let store = TomlFilePreferences::open(prefs)
        .with_context(|| format!("Failed to open preferences {}", prefs.display()))?;
    Ok(PerformanceConfiguration::load(Box::new(store)))
}

fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Toml => toml::to_string_pretty(value)?,
    })
}
