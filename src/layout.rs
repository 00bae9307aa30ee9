//! Geometry for placing roster entries on the canvas
//!
//! Every entry is drawn into a square of `BASE_SPRITE_SIZE * scale / 100`
//! pixels. Spacing is shared equally between the gaps, including a leading
//! and trailing margin on each axis. Negative spacing (sprites larger than the
//! canvas allows) is returned as-is; keeping the scale within bounds is the
//! caller's job.

use crate::models::LayoutKind;

/// Native pixel size of a standard front sprite
pub const BASE_SPRITE_SIZE: f32 = 96.0;

/// A square draw region in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// Side length of a sprite at `scale_percent`.
pub fn draw_size(scale_percent: u32) -> f32 {
    BASE_SPRITE_SIZE * scale_percent as f32 / 100.0
}

/// Compute draw regions for `count` entries, in roster order.
///
/// # Examples
///
/// ```
/// use teamsprite::layout::compute_layout;
/// use teamsprite::models::LayoutKind;
///
/// let rects = compute_layout(3, 500, 200, LayoutKind::Line, 100);
/// assert_eq!(rects.len(), 3);
/// assert_eq!(rects[0].x, 53.0);
/// assert_eq!(rects[0].y, 52.0);
/// ```
pub fn compute_layout(
    count: usize,
    canvas_width: u32,
    canvas_height: u32,
    layout: LayoutKind,
    scale_percent: u32,
) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }

    let size = draw_size(scale_percent);
    let width = canvas_width as f32;
    let height = canvas_height as f32;
    let (cols, rows) = layout.grid(count);

    let spacing_x = (width - cols as f32 * size) / (cols as f32 + 1.0);

    match layout {
        LayoutKind::Line => {
            // Single row, vertically centered
            let y = (height - size) / 2.0;
            (0..count)
                .map(|i| Rect { x: spacing_x + i as f32 * (size + spacing_x), y, size })
                .collect()
        }
        LayoutKind::Grid2x3 | LayoutKind::Grid3x2 => {
            let spacing_y = (height - rows as f32 * size) / (rows as f32 + 1.0);
            (0..count)
                .map(|i| {
                    let row = (i / cols) as f32;
                    let col = (i % cols) as f32;
                    Rect {
                        x: spacing_x + col * (size + spacing_x),
                        y: spacing_y + row * (size + spacing_y),
                        size,
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_roster_has_no_rects() {
        assert!(compute_layout(0, 500, 200, LayoutKind::Line, 100).is_empty());
        assert!(compute_layout(0, 500, 200, LayoutKind::Grid2x3, 100).is_empty());
    }

    #[test]
    fn test_line_three_entries() {
        let rects = compute_layout(3, 500, 200, LayoutKind::Line, 100);
        let xs: Vec<f32> = rects.iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![53.0, 202.0, 351.0]);
        assert!(rects.iter().all(|r| r.size == 96.0 && r.y == 52.0));

        // Leading and trailing margins match the gaps
        let trailing = 500.0 - (rects[2].x + rects[2].size);
        assert_eq!(trailing, 53.0);
        assert_eq!(rects[1].x - (rects[0].x + rects[0].size), 53.0);
    }

    #[test]
    fn test_line_single_entry_is_centered() {
        let rects = compute_layout(1, 600, 400, LayoutKind::Line, 100);
        assert_eq!(rects, vec![Rect { x: 252.0, y: 152.0, size: 96.0 }]);
    }

    #[test]
    fn test_grid_2x3_row_major() {
        let rects = compute_layout(6, 600, 400, LayoutKind::Grid2x3, 100);
        assert_eq!(rects.len(), 6);
        // spacing_x = (600 - 288) / 4 = 78, spacing_y = (400 - 192) / 3 = 69.333
        assert_eq!(rects[0].x, 78.0);
        assert_eq!(rects[1].x, 252.0);
        assert_eq!(rects[2].x, 426.0);
        assert_eq!(rects[3].x, 78.0);
        assert_eq!(rects[0].y, rects[2].y);
        assert!(rects[3].y > rects[0].y);
        assert_eq!(rects[3].y, rects[5].y);
    }

    #[test]
    fn test_grid_3x2_two_columns() {
        let rects = compute_layout(5, 400, 600, LayoutKind::Grid3x2, 100);
        // spacing_x = (400 - 192) / 3, spacing_y = (600 - 288) / 4 = 78
        let spacing_x = 208.0 / 3.0;
        assert!((rects[0].x - spacing_x).abs() < 1e-4);
        assert!((rects[1].x - (spacing_x * 2.0 + 96.0)).abs() < 1e-4);
        assert_eq!(rects[0].y, 78.0);
        assert_eq!(rects[2].y, 252.0);
        assert_eq!(rects[4].y, 426.0);
        assert_eq!(rects[4].x, rects[0].x);
    }

    #[test]
    fn test_scale_changes_draw_size() {
        let rects = compute_layout(2, 500, 200, LayoutKind::Line, 150);
        assert!(rects.iter().all(|r| r.size == 144.0));
        assert_eq!(draw_size(50), 48.0);
    }

    #[test]
    fn test_oversized_sprites_pass_through_negative_spacing() {
        let rects = compute_layout(6, 300, 100, LayoutKind::Line, 200);
        // (300 - 6 * 192) / 7 < 0
        assert!(rects[0].x < 0.0);
        assert!(rects[0].y < 0.0);
    }
}
