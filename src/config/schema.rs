//! Configuration schema types for `teamsprite.toml`
//!
//! Every section is optional; missing values fall back to the defaults the
//! team card uses out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::color::parse_color;
use crate::composition::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::models::{
    Customization, CustomizationChange, LayoutKind, Variant, DEFAULT_SCALE_PERCENT,
    MAX_SCALE_PERCENT, MIN_SCALE_PERCENT,
};
use crate::repository::{DEFAULT_ARTWORK_URL_TEMPLATE, DEFAULT_BASE_URL};

/// Data service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Endpoint for records and the name listing
    pub base_url: String,
    /// Official artwork URL, `{id}` is replaced with the numeric id
    pub artwork_url_template: String,
    /// Page size for the name listing used by search
    pub name_page_limit: u32,
    /// Per-request timeout for records and sprites
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            artwork_url_template: DEFAULT_ARTWORK_URL_TEMPLATE.to_string(),
            name_page_limit: 1000,
            timeout_ms: 10_000,
        }
    }
}

/// Output canvas size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { width: DEFAULT_CANVAS_WIDTH, height: DEFAULT_CANVAS_HEIGHT }
    }
}

/// Initial presentation options, as written in the file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomizationConfig {
    pub layout: String,
    pub background_color: String,
    pub transparent_background: bool,
    pub sprite_variant: String,
    pub scale_percent: u32,
    pub label: String,
    pub label_color: String,
}

impl Default for CustomizationConfig {
    fn default() -> Self {
        Self {
            layout: LayoutKind::Line.as_str().to_string(),
            background_color: "#f0f0f0".to_string(),
            transparent_background: false,
            sprite_variant: Variant::Default.as_str().to_string(),
            scale_percent: DEFAULT_SCALE_PERCENT,
            label: String::new(),
            label_color: "#333333".to_string(),
        }
    }
}

/// Where exported cards are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub out_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(".") }
    }
}

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamspriteConfig {
    pub api: ApiConfig,
    pub canvas: CanvasConfig,
    pub customization: CustomizationConfig,
    pub export: ExportConfig,
}

/// Configuration validation error
#[derive(Debug, Clone, Error)]
#[error("teamsprite.toml: '{field}' {message}")]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "customization.layout")
    pub field: String,
    /// Error message
    pub message: String,
}

impl TeamspriteConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();
        let mut push = |field: &str, message: String| {
            errors.push(ConfigValidationError { field: field.to_string(), message })
        };

        if self.api.base_url.trim().is_empty() {
            push("api.base_url", "must be a non-empty URL".to_string());
        }
        if !self.api.artwork_url_template.contains("{id}") {
            push("api.artwork_url_template", "must contain an {id} placeholder".to_string());
        }
        if self.api.name_page_limit == 0 {
            push("api.name_page_limit", "must be a positive integer".to_string());
        }
        if self.api.timeout_ms == 0 {
            push("api.timeout_ms", "must be a positive integer".to_string());
        }

        if self.canvas.width == 0 || self.canvas.height == 0 {
            push("canvas", "dimensions must be positive".to_string());
        }

        let c = &self.customization;
        if LayoutKind::from_str(&c.layout).is_none() {
            push(
                "customization.layout",
                format!("unknown layout '{}' (expected line, grid-2x3 or grid-3x2)", c.layout),
            );
        }
        if Variant::from_str(&c.sprite_variant).is_none() {
            push(
                "customization.sprite_variant",
                format!("unknown variant '{}' (expected default, shiny or artwork)", c.sprite_variant),
            );
        }
        if !(MIN_SCALE_PERCENT..=MAX_SCALE_PERCENT).contains(&c.scale_percent) {
            push(
                "customization.scale_percent",
                format!("must be between {} and {}", MIN_SCALE_PERCENT, MAX_SCALE_PERCENT),
            );
        }
        if let Err(e) = parse_color(&c.background_color) {
            push("customization.background_color", e.to_string());
        }
        if let Err(e) = parse_color(&c.label_color) {
            push("customization.label_color", e.to_string());
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Build the starting [`Customization`], or the validation errors that
    /// prevent it.
    pub fn to_customization(&self) -> Result<Customization, Vec<ConfigValidationError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let c = &self.customization;
        let changes = [
            LayoutKind::from_str(&c.layout).map(CustomizationChange::Layout),
            parse_color(&c.background_color).ok().map(CustomizationChange::BackgroundColor),
            Some(CustomizationChange::TransparentBackground(c.transparent_background)),
            Variant::from_str(&c.sprite_variant).map(CustomizationChange::SpriteVariant),
            Some(CustomizationChange::ScalePercent(c.scale_percent)),
            Some(CustomizationChange::Label(c.label.clone())),
            parse_color(&c.label_color).ok().map(CustomizationChange::LabelColor),
        ];

        let mut customization = Customization::default();
        for change in changes.into_iter().flatten() {
            customization.apply(change).map_err(|e| {
                vec![ConfigValidationError {
                    field: "customization".to_string(),
                    message: e.to_string(),
                }]
            })?;
        }
        Ok(customization)
    }
}
