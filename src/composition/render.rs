//! Team rendering: background, sprites, label

use crate::image_cache::ImageCache;
use crate::layout::compute_layout;
use crate::models::{Customization, TeamEntry, Variant};
use crate::roster::Roster;

use super::blend::{blit_sprite, scale_sprite};
use super::error::{RenderReport, Warning};
use super::text::draw_label;
use super::Canvas;

/// Render the roster onto the canvas.
///
/// Waits for every entry's sprites to settle (loaded or failed), then paints
/// the current state. Entries whose preferred and default sprites are both
/// unavailable are skipped and reported as warnings; the rest of the team is
/// still drawn.
///
/// # Examples
///
/// ```ignore
/// let mut canvas = Canvas::new(600, 400);
/// let report = render_team(&mut canvas, &roster, &customization).await;
/// for warning in &report.warnings {
///     eprintln!("Warning: {}", warning);
/// }
/// ```
pub async fn render_team(
    canvas: &mut Canvas,
    roster: &Roster,
    customization: &Customization,
) -> RenderReport {
    let cache = roster.cache();
    // All-settled join: a failing entry never short-circuits the others
    futures::future::join_all(roster.iter().map(|entry| cache.ensure_loaded(entry))).await;
    paint(canvas, roster.entries(), cache, customization)
}

/// Paint `entries` with whatever `cache` currently holds.
///
/// This is the synchronous half of [`render_team`]; it never waits for loads.
pub fn paint(
    canvas: &mut Canvas,
    entries: &[TeamEntry],
    cache: &ImageCache,
    customization: &Customization,
) -> RenderReport {
    let mut report = RenderReport::default();

    canvas.clear();
    if !customization.transparent_background() {
        canvas.fill(customization.background_color());
    }

    let rects = compute_layout(
        entries.len(),
        canvas.width(),
        canvas.height(),
        customization.layout(),
        customization.scale_percent(),
    );

    let preferred = customization.sprite_variant();
    for (entry, rect) in entries.iter().zip(&rects) {
        let Some(sprite) = cache.get(entry.id, preferred).or_else(|| cache.get(entry.id, Variant::Default))
        else {
            tracing::warn!(id = entry.id, variant = %preferred, "no sprite available, skipping {}", entry.name);
            report.warnings.push(Warning::new(format!(
                "No sprite available for {} ({} or default)",
                entry.display_name(),
                preferred
            )));
            continue;
        };

        match scale_sprite(&sprite, rect.size) {
            Some(scaled) => {
                blit_sprite(canvas.image_mut(), &scaled, rect.x.round() as i64, rect.y.round() as i64);
                report.drawn += 1;
            }
            None => report.warnings.push(Warning::new(format!(
                "Sprite for {} is too small to draw at {:.1}px",
                entry.display_name(),
                rect.size
            ))),
        }
    }

    if customization.has_label() {
        draw_label(canvas.image_mut(), customization.label().trim(), customization.label_color());
    }

    tracing::debug!(drawn = report.drawn, skipped = report.warnings.len(), "painted team");
    report
}
