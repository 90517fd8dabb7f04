//! # Carlot CLI
//!
//! Terminal front end over `carlot-ingest`.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        carlot startup                                   │
//! │                                                                         │
//! │  1. Parse arguments (cli.rs) ─────────────────────────────────────────► │
//! │     • --data, --errors, --capacity, --json, --sort                      │
//! │                                                                         │
//! │  2. Initialize Tracing ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, written to stderr             │
//! │     • Default: warn, carlot crates at info; RUST_LOG overrides          │
//! │                                                                         │
//! │  3. Load Inventory ───────────────────────────────────────────────────► │
//! │     • Data file → valid cars + error file                               │
//! │     • Any failure here: "ERROR: ..." and exit 1                         │
//! │                                                                         │
//! │  4. Optional sort (--sort)                                              │
//! │                                                                         │
//! │  5. --json ? print snapshot and exit : run the menus (menu.rs)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use anyhow::Result;
use carlot_ingest::Inventory;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod menu;
pub mod report;

pub use cli::Args;
pub use menu::Menu;

use report::write_load_notices;

/// Loads the inventory described by `args` and runs it to completion.
pub fn run(args: Args) -> Result<()> {
    let mut inventory = Inventory::load(&args.ingest_config())?;

    if let Some(field) = args.sort {
        info!(%field, "Applying initial sort");
        inventory.sort_by(field);
    }

    if args.json {
        let json = serde_json::to_string_pretty(&inventory.store().snapshot())?;
        println!("{json}");
        return Ok(());
    }

    write_load_notices(&mut io::stdout().lock(), &inventory)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut inventory, stdin.lock(), stdout.lock()).run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Every accepted and rejected record
/// - `RUST_LOG=carlot_ingest=trace` - One crate only
/// - Default: warnings, plus info from the carlot crates
///
/// Logs go to stderr so they never interleave with the menu tables.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,carlot=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
