//! # carlot
//!
//! Entry point. Setup lives in `lib.rs` so the menus can be tested.

use std::process::ExitCode;

use clap::Parser;

use carlot_cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    carlot_cli::init_tracing();

    match carlot_cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err}");
            eprintln!("Terminating Program");
            ExitCode::FAILURE
        }
    }
}
