//! Show command implementation (JSON record output)

use std::path::Path;
use std::process::ExitCode;

use crate::repository::PokemonRepository;

use super::{load_or_report, report_repository_error, repository, runtime, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the show command - print one record as pretty JSON
pub fn run_show(key: &str, config_path: Option<&Path>) -> ExitCode {
    let config = match load_or_report(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let repository = match repository(&config) {
        Ok(r) => r,
        Err(code) => return code,
    };
    let rt = match runtime() {
        Ok(rt) => rt,
        Err(code) => return code,
    };

    let entry = match rt.block_on(repository.fetch_by_name_or_id(key)) {
        Ok(entry) => entry,
        Err(e) => return report_repository_error(&e),
    };

    match serde_json::to_string_pretty(&entry) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: Cannot serialize record: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
