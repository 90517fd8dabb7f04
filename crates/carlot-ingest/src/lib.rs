//! # carlot-ingest: File Layer for Carlot
//!
//! This crate reads the vehicle data file, runs every line through the
//! validator from `carlot-core`, and routes the results: valid cars into a
//! [`carlot_core::RecordStore`], rejects into the error file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Carlot Data Flow                                 │
//! │                                                                         │
//! │  carlot-cli (startup)                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  carlot-ingest (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ IngestConfig  │    │   Inventory   │    │  RejectSink  │  │   │
//! │  │   │ (config.rs)   │───►│ (pipeline.rs) │───►│  (sink.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ paths,        │    │ RecordStore + │    │ FileSink     │  │   │
//! │  │   │ capacity      │    │ IngestReport  │    │ MemorySink   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                │                                │
//! │       ▼                                ▼                                │
//! │    Data.txt                      ErrorFile.txt                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Paths and capacity
//! - [`pipeline`] - Line-by-line ingest and the [`Inventory`] query surface
//! - [`sink`] - Where rejected records are written
//! - [`error`] - Fatal ingest errors
//!
//! ## Usage
//!
//! ```rust,no_run
//! use carlot_core::SortField;
//! use carlot_ingest::{IngestConfig, Inventory};
//!
//! let config = IngestConfig::new("Data.txt").error_path("ErrorFile.txt");
//! let mut inventory = Inventory::load(&config)?;
//!
//! inventory.sort_by(SortField::Price);
//! for car in inventory.list_valid() {
//!     println!("{} {}", car.id(), car.price());
//! }
//! # Ok::<(), carlot_ingest::IngestError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod pipeline;
pub mod sink;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{IngestConfig, DEFAULT_DATA_FILE, DEFAULT_ERROR_FILE};
pub use error::{IngestError, IngestResult};
pub use pipeline::{IngestReport, Inventory};
pub use sink::{FileSink, MemorySink, RejectSink, SinkLines, NUM_WIDTH, TEXT_WIDTH};
