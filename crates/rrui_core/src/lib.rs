//! RRUI Core
//!
//! Platform-facing primitives shared by the RRUI crates:
//!
//! - **Colors**: RGBA values with hex parsing and serde support
//! - **Bundles**: named-asset namespaces colors, fonts and images resolve from
//! - **System events**: appearance changes and memory pressure from the host
//!
//! # Example
//!
//! ```rust
//! use rrui_core::{Bundle, Color};
//!
//! let bundle = Bundle::new("com.example.app").with_color("primary", Color::from_hex(0x1E66F5));
//!
//! assert_eq!(bundle.resolve_color("primary", Color::BLACK), Color::from_hex(0x1E66F5));
//! assert_eq!(bundle.resolve_color("missing", Color::BLACK), Color::BLACK);
//! ```

pub mod bundle;
pub mod color;
pub mod events;

pub use bundle::{Bundle, BundleError, UNKNOWN_BUNDLE_ID};
pub use color::{Color, ColorParseError};
pub use events::{
    Appearance, SystemEvent, SystemEventDispatcher, SystemEventHandler, SystemEventKind,
};
