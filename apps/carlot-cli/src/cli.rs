//! Command-line arguments for the `carlot` binary.

use std::path::PathBuf;

use carlot_core::{SortField, MAX_RECORDS};
use carlot_ingest::{IngestConfig, DEFAULT_DATA_FILE, DEFAULT_ERROR_FILE};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "carlot", version, about = "Vehicle inventory validator and browser")]
pub struct Args {
    /// Data file, one vehicle per line: ID MODEL QUANTITY PRICE
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Error file for rejected lines. Truncated on every run.
    #[arg(long, default_value = DEFAULT_ERROR_FILE)]
    pub errors: PathBuf,

    /// Maximum number of valid records to keep (at least 1)
    #[arg(long, default_value_t = MAX_RECORDS)]
    pub capacity: usize,

    /// Print the valid records as JSON and exit instead of opening the menu
    #[arg(long)]
    pub json: bool,

    /// Sort the inventory before listing: id, model, quantity or price
    #[arg(long)]
    pub sort: Option<SortField>,
}

impl Args {
    /// Ingest settings taken from the arguments.
    pub fn ingest_config(&self) -> IngestConfig {
        IngestConfig::new(&self.data)
            .error_path(&self.errors)
            .capacity(self.capacity)
    }
}
