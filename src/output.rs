//! PNG export of the rendered canvas

use image::{ImageOutputFormat, RgbaImage};
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::composition::Canvas;

/// File stem used when the team has no label
pub const DEFAULT_EXPORT_NAME: &str = "pokemon-team";

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Turns a rendered canvas into a downloadable PNG.
pub trait CanvasExporter {
    /// Export `canvas` under `filename` and return where it was written.
    fn export_png(&self, canvas: &Canvas, filename: &str) -> Result<PathBuf, OutputError>;
}

/// Writes exports as files inside a directory.
#[derive(Debug, Clone)]
pub struct PngFileExporter {
    out_dir: PathBuf,
}

impl PngFileExporter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: out_dir.into() }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

impl CanvasExporter for PngFileExporter {
    fn export_png(&self, canvas: &Canvas, filename: &str) -> Result<PathBuf, OutputError> {
        let path = self.out_dir.join(filename);
        save_png(canvas.image(), &path)?;
        tracing::info!("exported {}x{} canvas to {}", canvas.width(), canvas.height(), path.display());
        Ok(path)
    }
}

/// File name for an export: the label, or `pokemon-team` when it is empty.
///
/// Path separators in the label are replaced so the export always lands in
/// the output directory.
///
/// # Examples
///
/// ```
/// use teamsprite::output::export_filename;
///
/// assert_eq!(export_filename(""), "pokemon-team.png");
/// assert_eq!(export_filename("Team Rocket"), "Team Rocket.png");
/// assert_eq!(export_filename("a/b"), "a_b.png");
/// ```
pub fn export_filename(label: &str) -> String {
    let stem = label.trim();
    let stem = if stem.is_empty() { DEFAULT_EXPORT_NAME } else { stem };
    let safe: String = stem.chars().map(|c| if matches!(c, '/' | '\\') { '_' } else { c }).collect();
    format!("{}.png", safe)
}

/// Encode the canvas as PNG bytes.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, OutputError> {
    let mut bytes = Vec::new();
    canvas.image().write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)?;
    Ok(bytes)
}

/// Save an RGBA image to a PNG file.
///
/// # Arguments
///
/// * `image` - The image to save
/// * `path` - The output file path
///
/// # Returns
///
/// * `Ok(())` on success
/// * `Err(OutputError)` on failure
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}
