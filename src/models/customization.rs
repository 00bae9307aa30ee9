//! Presentation options for the rendered team card and the redraw policy
//! attached to each kind of change.

use image::Rgba;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::variant::Variant;

/// Smallest sprite scale the UI allows, in percent
pub const MIN_SCALE_PERCENT: u32 = 50;
/// Largest sprite scale the UI allows, in percent
pub const MAX_SCALE_PERCENT: u32 = 200;
/// Default sprite scale, in percent
pub const DEFAULT_SCALE_PERCENT: u32 = 100;

/// How roster entries are arranged on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayoutKind {
    /// Single row, one column per entry
    #[default]
    #[serde(rename = "line")]
    Line,
    /// Three columns by two rows
    #[serde(rename = "grid-2x3")]
    Grid2x3,
    /// Two columns by three rows
    #[serde(rename = "grid-3x2")]
    Grid3x2,
}

impl LayoutKind {
    /// Parse a layout from string
    pub fn from_str(s: &str) -> Option<LayoutKind> {
        match s.trim().to_lowercase().as_str() {
            "line" => Some(LayoutKind::Line),
            "grid-2x3" => Some(LayoutKind::Grid2x3),
            "grid-3x2" => Some(LayoutKind::Grid3x2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutKind::Line => "line",
            LayoutKind::Grid2x3 => "grid-2x3",
            LayoutKind::Grid3x2 => "grid-3x2",
        }
    }

    /// Grid shape as `(columns, rows)` for `count` entries.
    ///
    /// Grids have a fixed shape; a line grows one column per entry.
    pub fn grid(&self, count: usize) -> (usize, usize) {
        match self {
            LayoutKind::Line => (count, 1),
            LayoutKind::Grid2x3 => (3, 2),
            LayoutKind::Grid3x2 => (2, 3),
        }
    }

}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when a customization change is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomizationError {
    #[error("scale {value}% is outside the allowed range {min}%..={max}%")]
    ScaleOutOfRange { value: u32, min: u32, max: u32 },
}

/// A single user edit to the presentation options.
#[derive(Debug, Clone, PartialEq)]
pub enum CustomizationChange {
    Layout(LayoutKind),
    BackgroundColor(Rgba<u8>),
    TransparentBackground(bool),
    SpriteVariant(Variant),
    ScalePercent(u32),
    Label(String),
    LabelColor(Rgba<u8>),
}

/// The shared presentation state read by the layout engine and compositor.
///
/// Fields are only changed through [`Customization::apply`], which keeps the
/// scale within `MIN_SCALE_PERCENT..=MAX_SCALE_PERCENT`.
#[derive(Debug, Clone, PartialEq)]
pub struct Customization {
    layout: LayoutKind,
    background_color: Rgba<u8>,
    transparent_background: bool,
    sprite_variant: Variant,
    scale_percent: u32,
    label: String,
    label_color: Rgba<u8>,
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            layout: LayoutKind::Line,
            background_color: Rgba([0xf0, 0xf0, 0xf0, 255]),
            transparent_background: false,
            sprite_variant: Variant::Default,
            scale_percent: DEFAULT_SCALE_PERCENT,
            label: String::new(),
            label_color: Rgba([0x33, 0x33, 0x33, 255]),
        }
    }
}

impl Customization {
    /// Apply a change and report whether the canvas needs to be redrawn.
    ///
    /// A background color change while the background is transparent, and a
    /// label color change while there is no label, have no visible effect and
    /// do not request a redraw. On error the state is left unchanged.
    pub fn apply(&mut self, change: CustomizationChange) -> Result<bool, CustomizationError> {
        let redraw = match change {
            CustomizationChange::Layout(layout) => {
                self.layout = layout;
                true
            }
            CustomizationChange::BackgroundColor(color) => {
                self.background_color = color;
                !self.transparent_background
            }
            CustomizationChange::TransparentBackground(transparent) => {
                self.transparent_background = transparent;
                true
            }
            CustomizationChange::SpriteVariant(variant) => {
                self.sprite_variant = variant;
                true
            }
            CustomizationChange::ScalePercent(value) => {
                if !(MIN_SCALE_PERCENT..=MAX_SCALE_PERCENT).contains(&value) {
                    return Err(CustomizationError::ScaleOutOfRange {
                        value,
                        min: MIN_SCALE_PERCENT,
                        max: MAX_SCALE_PERCENT,
                    });
                }
                self.scale_percent = value;
                true
            }
            CustomizationChange::Label(label) => {
                self.label = label;
                true
            }
            CustomizationChange::LabelColor(color) => {
                self.label_color = color;
                self.has_label()
            }
        };
        Ok(redraw)
    }

    pub fn layout(&self) -> LayoutKind {
        self.layout
    }

    pub fn background_color(&self) -> Rgba<u8> {
        self.background_color
    }

    pub fn transparent_background(&self) -> bool {
        self.transparent_background
    }

    /// The background color only has an effect while the background is opaque.
    pub fn background_color_enabled(&self) -> bool {
        !self.transparent_background
    }

    pub fn sprite_variant(&self) -> Variant {
        self.sprite_variant
    }

    pub fn scale_percent(&self) -> u32 {
        self.scale_percent
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the label has any visible text.
    pub fn has_label(&self) -> bool {
        !self.label.trim().is_empty()
    }

    pub fn label_color(&self) -> Rgba<u8> {
        self.label_color
    }
}
