//! Team label rendering with a scaled 8x8 bitmap font

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgba, RgbaImage};

use super::blend::{blend_over, pixel_span};

/// Smallest label font size in pixels
pub const MIN_LABEL_SIZE: f32 = 16.0;
/// Gap between the label's bottom edge and the canvas bottom
pub const LABEL_BOTTOM_INSET: f32 = 10.0;

const GLYPH_CELLS: usize = 8;

/// Font size for a canvas: one thirtieth of its width, at least 16px.
pub fn label_font_size(canvas_width: u32) -> f32 {
    (canvas_width as f32 / 30.0).max(MIN_LABEL_SIZE)
}

/// Where a label ended up on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS.get(c).or_else(|| BASIC_FONTS.get('?')).unwrap_or([0; 8])
}

/// Draw `text` in bold, horizontally centered with its bottom edge
/// `LABEL_BOTTOM_INSET` pixels above the bottom of the canvas.
///
/// Glyphs are monospaced squares of the font size. Characters outside the
/// basic Latin range are drawn as `?`.
pub(crate) fn draw_label(canvas: &mut RgbaImage, text: &str, color: Rgba<u8>) -> LabelBounds {
    let (width, height) = canvas.dimensions();
    let size = label_font_size(width);
    let cell = size / GLYPH_CELLS as f32;
    // Bold: each lit cell bleeds right by half a cell
    let bold = (cell * 0.5).max(1.0);

    let chars: Vec<char> = text.chars().collect();
    let text_width = chars.len() as f32 * size;
    let x0 = width as f32 / 2.0 - text_width / 2.0;
    let y0 = height as f32 - LABEL_BOTTOM_INSET - size;

    // Coverage mask so overlapping bold cells blend only once
    let mut mask = vec![false; (width * height) as usize];
    for (i, c) in chars.iter().enumerate() {
        let gx = x0 + i as f32 * size;
        for (row, bits) in glyph(*c).iter().enumerate() {
            let top = y0 + row as f32 * cell;
            for col in 0..GLYPH_CELLS {
                if bits & (1 << col) == 0 {
                    continue;
                }
                let left = gx + col as f32 * cell;
                for py in pixel_span(top, top + cell, height) {
                    for px in pixel_span(left, left + cell + bold, width) {
                        mask[(py * width + px) as usize] = true;
                    }
                }
            }
        }
    }

    if color[3] > 0 {
        for (index, covered) in mask.iter().enumerate() {
            if *covered {
                let (px, py) = (index as u32 % width, index as u32 / width);
                let blended = blend_over(&color, canvas.get_pixel(px, py));
                canvas.put_pixel(px, py, blended);
            }
        }
    }

    LabelBounds { x: x0, y: y0, width: text_width, height: size }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size() {
        assert_eq!(label_font_size(300), 16.0);
        assert_eq!(label_font_size(600), 20.0);
        assert_eq!(label_font_size(900), 30.0);
    }

    #[test]
    fn test_label_is_centered_near_bottom() {
        let mut canvas = RgbaImage::from_pixel(600, 400, Rgba([0, 0, 0, 0]));
        let bounds = draw_label(&mut canvas, "AB", Rgba([255, 0, 0, 255]));
        assert_eq!(bounds.height, 20.0);
        assert_eq!(bounds.x, 280.0);
        assert_eq!(bounds.y, 370.0);

        let lit: Vec<(u32, u32)> = canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| p[3] > 0)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!lit.is_empty());
        assert!(lit.iter().all(|(_, y)| *y >= 370 && *y < 390));
        assert!(lit.iter().all(|(x, _)| *x >= 280 && *x < 322));
    }

    #[test]
    fn test_unknown_glyph_falls_back() {
        assert_eq!(glyph('\u{2603}'), glyph('?'));
        assert_ne!(glyph('A'), [0; 8]);
    }
}
