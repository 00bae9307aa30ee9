//! Render command implementation

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use crate::composition::Canvas;
use crate::config::{merge_cli_overrides, CliOverrides, ConfigError};
use crate::image_cache::{HttpImageSource, ImageCache};
use crate::output::PngFileExporter;
use crate::session::{SessionError, TeamSession};

use super::{
    load_or_report, report_config_error, repository, runtime, EXIT_ERROR, EXIT_SUCCESS,
};

/// Execute the render command
///
/// Members that cannot be added are reported and skipped; the card is still
/// written for the rest of the team.
pub fn run_render(names: &[String], config_path: Option<&Path>, overrides: &CliOverrides) -> ExitCode {
    let mut config = match load_or_report(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    merge_cli_overrides(&mut config, overrides);

    let customization = match config.to_customization() {
        Ok(c) => c,
        Err(errors) => return report_config_error(&ConfigError::from(errors)),
    };

    let repository = match repository(&config) {
        Ok(r) => r,
        Err(code) => return code,
    };
    let images = match HttpImageSource::new(config.api.timeout_ms) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Cannot create HTTP client: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let rt = match runtime() {
        Ok(rt) => rt,
        Err(code) => return code,
    };

    let mut session = TeamSession::new(
        repository,
        ImageCache::new(Arc::new(images)),
        customization,
        Canvas::new(config.canvas.width, config.canvas.height),
    );

    let mut failed = 0;
    rt.block_on(async {
        for name in names {
            match session.add_member(name).await {
                Ok(entry) => eprintln!("Added {} (#{})", entry.display_name(), entry.id),
                Err(e) => {
                    failed += 1;
                    report_add_error(name, &e);
                }
            }
        }
    });

    if failed == names.len() {
        eprintln!("Error: No team members could be added");
        return ExitCode::from(EXIT_ERROR);
    }

    for warning in &session.last_report().warnings {
        eprintln!("Warning: {}", warning);
    }

    let exporter = PngFileExporter::new(&config.export.out_dir);
    match session.export(&exporter) {
        Ok(path) => {
            println!("Saved: {}", path.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn report_add_error(name: &str, error: &SessionError) {
    match error {
        SessionError::Repository(e) => eprintln!("Warning: Skipping '{}': {}", name, e),
        other => eprintln!("Warning: Cannot add '{}': {}", name, other),
    }
}
