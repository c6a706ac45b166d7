//! Border radius tokens for theming

use serde::{Deserialize, Serialize};

/// Radius token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    None,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Full,
}

/// Border radius scale
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BorderRadius {
    pub none: f32,
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    /// Pill / circle
    pub full: f32,
}

impl BorderRadius {
    /// Get radius by token key
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::None => self.none,
            RadiusToken::Xs => self.xs,
            RadiusToken::Sm => self.sm,
            RadiusToken::Md => self.md,
            RadiusToken::Lg => self.lg,
            RadiusToken::Xl => self.xl,
            RadiusToken::Xxl => self.xxl,
            RadiusToken::Full => self.full,
        }
    }
}

impl Default for BorderRadius {
    fn default() -> Self {
        Self {
            none: 0.0,
            xs: 2.0,
            sm: 4.0,
            md: 8.0,
            lg: 12.0,
            xl: 16.0,
            xxl: 24.0,
            full: 9999.0,
        }
    }
}
