//! Teamsprite - Command-line tool for rendering Pokémon team cards

use std::process::ExitCode;

use teamsprite::cli;

fn main() -> ExitCode {
    cli::run()
}
