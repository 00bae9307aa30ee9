//! Configuration loading and discovery for `teamsprite.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::{ConfigValidationError, TeamspriteConfig};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file
pub const CONFIG_FILE_NAME: &str = "teamsprite.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse teamsprite.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

impl From<Vec<ConfigValidationError>> for ConfigError {
    fn from(errors: Vec<ConfigValidationError>) -> Self {
        ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect())
    }
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override export directory
    pub out_dir: Option<PathBuf>,
    /// Override layout name
    pub layout: Option<String>,
    /// Override sprite variant name
    pub variant: Option<String>,
    /// Override sprite scale in percent
    pub scale: Option<u32>,
    /// Override team label
    pub label: Option<String>,
    /// Override label color
    pub label_color: Option<String>,
    /// Override background color
    pub background: Option<String>,
    /// Force a transparent background
    pub transparent: Option<bool>,
    /// Override canvas width
    pub width: Option<u32>,
    /// Override canvas height
    pub height: Option<u32>,
}

/// Find teamsprite.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for teamsprite.toml
/// 2. Check XDG_CONFIG_HOME/teamsprite/teamsprite.toml (or ~/.config/teamsprite/teamsprite.toml)
///
/// # Returns
/// - `Some(path)` if a teamsprite.toml file is found
/// - `None` if no config file is found
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find teamsprite.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("teamsprite").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find teamsprite.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a teamsprite.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the default
/// configuration.
///
/// # Example
/// ```ignore
/// let config = load_config(None)?;
/// let config = load_config(Some(Path::new("cards/teamsprite.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<TeamspriteConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(TeamspriteConfig::default())
        }
    }
}

/// Load configuration from a specific file path.
///
/// A relative `export.out_dir` is resolved against the file's directory.
fn load_config_file(path: &Path) -> Result<TeamspriteConfig, ConfigError> {
    tracing::debug!(path = %path.display(), "loading config");
    let contents = fs::read_to_string(path)?;
    let mut config: TeamspriteConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(errors.into());
    }

    if let Some(root) = config_root(path) {
        config.export.out_dir = resolve_path(root, &config.export.out_dir);
    }

    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values. Overridden values
/// are not validated here; call [`TeamspriteConfig::validate`] afterwards.
pub fn merge_cli_overrides(config: &mut TeamspriteConfig, overrides: &CliOverrides) {
    if let Some(ref out_dir) = overrides.out_dir {
        config.export.out_dir = out_dir.clone();
    }

    let c = &mut config.customization;
    if let Some(ref layout) = overrides.layout {
        c.layout = layout.clone();
    }
    if let Some(ref variant) = overrides.variant {
        c.sprite_variant = variant.clone();
    }
    if let Some(scale) = overrides.scale {
        c.scale_percent = scale;
    }
    if let Some(ref label) = overrides.label {
        c.label = label.clone();
    }
    if let Some(ref label_color) = overrides.label_color {
        c.label_color = label_color.clone();
    }
    if let Some(ref background) = overrides.background {
        c.background_color = background.clone();
    }
    if let Some(transparent) = overrides.transparent {
        c.transparent_background = transparent;
    }

    if let Some(width) = overrides.width {
        config.canvas.width = width;
    }
    if let Some(height) = overrides.height {
        config.canvas.height = height;
    }
}

/// Directory containing a config file.
pub fn config_root(config_path: &Path) -> Option<&Path> {
    config_path.parent().filter(|p| !p.as_os_str().is_empty())
}

/// Resolve a path relative to the config directory.
///
/// If the path is absolute, returns it unchanged.
pub fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LayoutKind;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, contents: &[u8]) -> PathBuf {
        let config_path = dir.join(CONFIG_FILE_NAME);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(contents)
            .expect("should write config content");
        config_path
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"[canvas]\nwidth = 300");

        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"[canvas]\nwidth = 300");

        let subdir = temp.path().join("teams").join("kanto");
        fs::create_dir_all(&subdir).expect("should create subdirectories");

        let found = find_config_from(subdir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_not_found() {
        let temp = TempDir::new().expect("should create temp dir");
        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, None);
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(
            temp.path(),
            br#"
[canvas]
width = 900

[customization]
layout = "grid-3x2"
label = "Johto"

[export]
out_dir = "cards"
"#,
        );

        let config = load_config(Some(&config_path)).expect("should load valid config");
        assert_eq!(config.canvas.width, 900);
        assert_eq!(config.canvas.height, 400);
        assert_eq!(config.customization.layout, "grid-3x2");
        assert_eq!(config.customization.label, "Johto");
        assert_eq!(config.export.out_dir, temp.path().join("cards"));
    }

    #[test]
    fn test_load_config_missing_file_errors() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join("nonexistent.toml");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"this is not valid toml {{{");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_validation_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(
            temp.path(),
            br#"
[customization]
layout = "spiral"
scale_percent = 400
"#,
        );

        match load_config(Some(&config_path)) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].contains("customization.layout"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_merge_cli_overrides_out_dir() {
        let mut config = TeamspriteConfig::default();
        let overrides = CliOverrides { out_dir: Some(PathBuf::from("dist")), ..Default::default() };

        merge_cli_overrides(&mut config, &overrides);
        assert_eq!(config.export.out_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_merge_cli_overrides_multiple() {
        let mut config = TeamspriteConfig::default();
        let overrides = CliOverrides {
            layout: Some("grid-2x3".to_string()),
            scale: Some(75),
            transparent: Some(true),
            width: Some(320),
            ..Default::default()
        };

        merge_cli_overrides(&mut config, &overrides);
        assert_eq!(config.canvas.width, 320);
        assert_eq!(config.canvas.height, 400);

        let customization = config.to_customization().expect("overrides are valid");
        assert_eq!(customization.layout(), LayoutKind::Grid2x3);
        assert_eq!(customization.scale_percent(), 75);
        assert!(customization.transparent_background());
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let mut config = TeamspriteConfig::default();
        let overrides = CliOverrides { scale: Some(250), ..Default::default() };

        merge_cli_overrides(&mut config, &overrides);
        let error: ConfigError = config.to_customization().unwrap_err().into();
        assert!(error.to_string().contains("customization.scale_percent"));
    }

    #[test]
    fn test_resolve_path() {
        let root = Path::new("/project");
        assert_eq!(resolve_path(root, Path::new("/other/path")), PathBuf::from("/other/path"));
        assert_eq!(resolve_path(root, Path::new("cards")), PathBuf::from("/project/cards"));
    }

    #[test]
    fn test_config_root() {
        assert_eq!(config_root(Path::new("/project/teamsprite.toml")), Some(Path::new("/project")));
        assert_eq!(config_root(Path::new("teamsprite.toml")), None);
    }
}
