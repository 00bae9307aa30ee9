//! Search command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::repository::{plan_search, PokemonRepository, SearchPlan, MIN_QUERY_LEN};

use super::{
    load_or_report, report_repository_error, repository, runtime, EXIT_ERROR, EXIT_INVALID_ARGS,
    EXIT_SUCCESS,
};

/// Execute the search command - list names containing the query
pub fn run_search(query: &str, config_path: Option<&Path>) -> ExitCode {
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

    rt.block_on(async {
        let names = match repository.list_names(config.api.name_page_limit).await {
            Ok(names) => names,
            Err(e) => return report_repository_error(&e),
        };

        match plan_search(&names, query) {
            SearchPlan::TooShort => {
                eprintln!("Error: Query must be at least {} characters", MIN_QUERY_LEN);
                ExitCode::from(EXIT_INVALID_ARGS)
            }
            SearchPlan::Matches(matches) => {
                for named in matches {
                    println!("{}", named.name);
                }
                ExitCode::from(EXIT_SUCCESS)
            }
            SearchPlan::DirectLookup(key) => match repository.fetch_by_name_or_id(&key).await {
                Ok(entry) => {
                    println!("{}", entry.name);
                    ExitCode::from(EXIT_SUCCESS)
                }
                Err(e) => report_repository_error(&e),
            },
            SearchPlan::NoMatches => {
                eprintln!("No Pokémon found matching '{}'", query.trim());
                ExitCode::from(EXIT_ERROR)
            }
        }
    })
}
