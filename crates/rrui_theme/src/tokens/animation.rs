//! Animation duration tokens

use serde::{Deserialize, Serialize};

/// Animation token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum AnimationToken {
    Instant,
    Fast,
    Normal,
    Slow,
    Slower,
}

/// Animation durations in seconds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationDurations {
    pub instant: f32,
    pub fast: f32,
    pub normal: f32,
    pub slow: f32,
    pub slower: f32,
}

impl AnimationDurations {
    pub fn get(&self, token: AnimationToken) -> f32 {
        match token {
            AnimationToken::Instant => self.instant,
            AnimationToken::Fast => self.fast,
            AnimationToken::Normal => self.normal,
            AnimationToken::Slow => self.slow,
            AnimationToken::Slower => self.slower,
        }
    }

    /// Durations with every animation disabled
    pub fn reduced_motion() -> Self {
        Self {
            instant: 0.0,
            fast: 0.0,
            normal: 0.0,
            slow: 0.0,
            slower: 0.0,
        }
    }
}

impl Default for AnimationDurations {
    fn default() -> Self {
        Self {
            instant: 0.0,
            fast: 0.15,
            normal: 0.25,
            slow: 0.35,
            slower: 0.5,
        }
    }
}
