//! # carlot-core: Pure Inventory Logic for Carlot
//!
//! This crate is the **heart** of Carlot. It validates vehicle records,
//! holds the accepted ones, and orders them, all as pure code with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Carlot Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    carlot-cli (menu + tables)                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             carlot-ingest (Data.txt → store / ErrorFile)        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ carlot-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌──────────┐  │   │
//! │  │   │   types   │  │ validation │  │   store   │  │   sort   │  │   │
//! │  │   │    Car    │  │ FieldCheck │  │ RecordSt. │  │ selection│  │   │
//! │  │   │ SortField │  │ Rejection  │  │  search   │  │   desc   │  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO TERMINAL • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Car, RawRecord, SortField)
//! - [`validation`] - Field validators and the composite record validator
//! - [`store`] - Fixed-capacity record arena with an ordering index
//! - [`sort`] - Descending selection sort over the ordering index
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use carlot_core::{validate_record, RawRecord, RecordStore, SortField};
//!
//! let mut store = RecordStore::new();
//! for line in ["AB12MP349 Fusion5 20 17000", "ZZ99YY123 CorvetteZ06 25 102000"] {
//!     let car = validate_record(&RawRecord::from_line(line)).unwrap();
//!     store.push(car).unwrap();
//! }
//!
//! store.sort_by(SortField::Price);
//! assert_eq!(store.list()[0].id(), "ZZ99YY123");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod sort;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, FieldViolation};
pub use store::{InventorySnapshot, RecordStore};
pub use types::{Car, Field, RawRecord, SortField};
pub use validation::{validate_fields, validate_record, FieldCheck, Rejection};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of valid records retained per run.
pub const MAX_RECORDS: usize = 80;

/// Price floor. A car must be priced strictly above this.
pub const MIN_PRICE: f64 = 5000.0;

/// Minimum model name length.
pub const MIN_MODEL_LEN: usize = 3;

/// Required car ID length.
pub const REQ_ID_LEN: usize = 9;

/// Car ID layout: `[0, ID_PREFIX_LEN)` letters, `[ID_PREFIX_LEN, ID_BODY_END)`
/// alphanumeric, `[ID_BODY_END, REQ_ID_LEN)` digits.
pub const ID_PREFIX_LEN: usize = 2;

/// End (exclusive) of the alphanumeric body of a car ID.
pub const ID_BODY_END: usize = 7;

/// Relative window used by price search (±15%).
pub const PRICE_TOLERANCE: f64 = 0.15;
