//! Component sizing constants

use serde::{Deserialize, Serialize};

/// Size class shared by buttons, icons, avatars and inputs
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum ControlSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Small / medium / large triple
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizeScale {
    pub small: f32,
    pub medium: f32,
    pub large: f32,
}

impl SizeScale {
    pub const fn new(small: f32, medium: f32, large: f32) -> Self {
        Self {
            small,
            medium,
            large,
        }
    }

    pub fn get(&self, size: ControlSize) -> f32 {
        match size {
            ControlSize::Small => self.small,
            ControlSize::Medium => self.medium,
            ControlSize::Large => self.large,
        }
    }
}

/// Fixed component dimensions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentSize {
    pub button_height: SizeScale,
    pub input_height: SizeScale,
    pub icon: SizeScale,
    pub avatar: SizeScale,
    /// Minimum hit target for any interactive element
    pub min_touch_target: f32,
    pub border_width: f32,
    pub focus_ring_width: f32,
}

impl ComponentSize {
    /// Control height, never below the minimum touch target for medium and up
    pub fn control_height(&self, size: ControlSize) -> f32 {
        match size {
            ControlSize::Small => self.button_height.small,
            _ => self.button_height.get(size).max(self.min_touch_target),
        }
    }
}

impl Default for ComponentSize {
    fn default() -> Self {
        Self {
            button_height: SizeScale::new(32.0, 44.0, 56.0),
            input_height: SizeScale::new(36.0, 44.0, 52.0),
            icon: SizeScale::new(16.0, 24.0, 32.0),
            avatar: SizeScale::new(24.0, 40.0, 64.0),
            min_touch_target: 44.0,
            border_width: 1.0,
            focus_ring_width: 2.0,
        }
    }
}
