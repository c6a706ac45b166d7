//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a theme:
//! - Semantic colors
//! - Typography (text styles, font weights)
//! - Spacing
//! - Elevation (shadow presets)
//! - Border radii
//! - Animation durations
//! - Component sizing

mod animation;
mod color;
mod component_size;
mod elevation;
mod radius;
mod spacing;
mod typography;

pub use animation::*;
pub use color::*;
pub use component_size::*;
pub use elevation::*;
pub use radius::*;
pub use spacing::*;
pub use typography::*;
