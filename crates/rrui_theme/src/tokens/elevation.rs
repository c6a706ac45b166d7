//! Elevation tokens (shadow presets)

use rrui_core::Color;
use serde::{Deserialize, Serialize};

/// Elevation token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ElevationToken {
    None,
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
}

/// A drop shadow definition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub radius: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, radius: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            radius,
            color,
        }
    }

    pub const fn none() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            radius: 0.0,
            color: Color::TRANSPARENT,
        }
    }

    pub fn is_none(&self) -> bool {
        self.radius == 0.0 && self.color.a == 0.0
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

/// Complete set of elevation presets
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Elevation {
    pub none: Shadow,
    pub level1: Shadow,
    pub level2: Shadow,
    pub level3: Shadow,
    pub level4: Shadow,
    pub level5: Shadow,
}

impl Elevation {
    /// Get shadow by token key
    pub fn get(&self, token: ElevationToken) -> &Shadow {
        match token {
            ElevationToken::None => &self.none,
            ElevationToken::Level1 => &self.level1,
            ElevationToken::Level2 => &self.level2,
            ElevationToken::Level3 => &self.level3,
            ElevationToken::Level4 => &self.level4,
            ElevationToken::Level5 => &self.level5,
        }
    }
}

impl Default for Elevation {
    fn default() -> Self {
        let base = Color::BLACK;
        Self {
            none: Shadow::none(),
            level1: Shadow::new(0.0, 1.0, 2.0, base.with_alpha_u8(20)),
            level2: Shadow::new(0.0, 2.0, 4.0, base.with_alpha_u8(26)),
            level3: Shadow::new(0.0, 4.0, 8.0, base.with_alpha_u8(31)),
            level4: Shadow::new(0.0, 8.0, 16.0, base.with_alpha_u8(36)),
            level5: Shadow::new(0.0, 16.0, 24.0, base.with_alpha_u8(41)),
        }
    }
}
