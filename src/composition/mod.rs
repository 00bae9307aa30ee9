//! Canvas compositing for the team card
//!
//! [`render_team`] loads sprites through the roster's cache, lays entries out
//! with [`crate::layout::compute_layout`] and paints background, sprites and
//! label onto a fixed-size [`Canvas`].

mod blend;
mod error;
mod render;
mod text;

pub use error::{RenderReport, Warning};
pub use render::{paint, render_team};
pub use text::{label_font_size, LabelBounds, LABEL_BOTTOM_INSET, MIN_LABEL_SIZE};

use image::{Rgba, RgbaImage};

/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 600;
/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 400;

const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// The fixed-size raster surface the team is drawn onto.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: RgbaImage::from_pixel(width, height, CLEAR) }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Reset every pixel to fully transparent.
    pub fn clear(&mut self) {
        self.fill(CLEAR);
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgba<u8>) {
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub(crate) fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}
