//! Data models for team entries and presentation options

mod customization;
mod entry;
mod variant;

// Re-export all public types
pub use customization::{
    Customization, CustomizationChange, CustomizationError, LayoutKind, DEFAULT_SCALE_PERCENT,
    MAX_SCALE_PERCENT, MIN_SCALE_PERCENT,
};
pub use entry::{SpriteUrls, TeamEntry};
pub use variant::Variant;
