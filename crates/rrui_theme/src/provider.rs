//! Theme provider
//!
//! Holds the current theme for one view hierarchy. The provider is an
//! explicitly owned value: the app root creates it and passes the resolved
//! [`Theme`] down to components. All mutation goes through `&mut self`, so a
//! provider lives on the UI thread that owns it.

use crate::theme::{Theme, LIGHT_THEME_NAME};
use rrui_core::{Appearance, Bundle, SystemEvent};

/// Listener invoked after every theme transition
pub type ThemeChangeListener = Box<dyn FnMut(&Theme)>;

/// Mutable holder of the current theme
pub struct ThemeProvider {
    /// Active theme
    current: Theme,

    /// Platform light/dark flag derived from the active theme's scheme
    color_scheme: Appearance,

    /// Bundle the built-in themes resolve from
    bundle: Bundle,

    /// Change listeners (app layer uses these to schedule a redraw)
    listeners: Vec<ThemeChangeListener>,
}

impl ThemeProvider {
    /// Create a provider with an initial theme
    pub fn new(theme: Theme, bundle: Bundle) -> Self {
        let color_scheme = theme.color_scheme().appearance();
        tracing::debug!(
            "ThemeProvider::new - theme {:?} ({:?})",
            theme.name(),
            color_scheme
        );
        Self {
            current: theme,
            color_scheme,
            bundle,
            listeners: Vec::new(),
        }
    }

    /// Create a provider starting from the built-in light theme
    pub fn with_bundle(bundle: Bundle) -> Self {
        let theme = Theme::light(&bundle);
        Self::new(theme, bundle)
    }

    /// The active theme
    pub fn current_theme(&self) -> &Theme {
        &self.current
    }

    /// Derived platform light/dark flag
    pub fn color_scheme(&self) -> Appearance {
        self.color_scheme
    }

    pub fn bundle(&self) -> &Bundle {
        &self.bundle
    }

    /// Register a listener called after each transition
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(&Theme) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Replace the active theme
    pub fn set_theme(&mut self, theme: Theme) {
        tracing::debug!(
            "ThemeProvider::set_theme - switching from {:?} to {:?}",
            self.current.name(),
            theme.name()
        );
        self.color_scheme = theme.color_scheme().appearance();
        self.current = theme;
        self.notify();
    }

    /// Switch to dark when the active theme is named exactly `"Light"`,
    /// otherwise switch to light.
    ///
    /// The test is on the name, not the scheme: a custom light theme with any
    /// other name toggles to dark and never back to itself.
    pub fn toggle_theme(&mut self) {
        let next = if self.current.name() == LIGHT_THEME_NAME {
            Theme::dark(&self.bundle)
        } else {
            Theme::light(&self.bundle)
        };
        self.set_theme(next);
    }

    /// Follow a system appearance change.
    ///
    /// Always installs the matching built-in theme, discarding any custom
    /// theme that was active.
    pub fn update_for_system_color_scheme(&mut self, appearance: Appearance) {
        self.color_scheme = appearance;
        let next = match appearance {
            Appearance::Light => Theme::light(&self.bundle),
            Appearance::Dark => Theme::dark(&self.bundle),
        };
        self.set_theme(next);
    }

    /// Handle a forwarded system event. Returns true if the theme changed.
    pub fn handle_system_event(&mut self, event: &SystemEvent) -> bool {
        match event {
            SystemEvent::AppearanceChanged(appearance) => {
                self.update_for_system_color_scheme(*appearance);
                true
            }
            SystemEvent::LowMemory => false,
        }
    }

    fn notify(&mut self) {
        for listener in self.listeners.iter_mut() {
            listener(&self.current);
        }
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::with_bundle(Bundle::anonymous())
    }
}
