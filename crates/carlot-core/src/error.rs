//! # Error Types
//!
//! Domain-specific error types for carlot-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  carlot-core errors (this file)                                        │
//! │  ├── FieldViolation  - One broken field rule (the diagnostic clause)   │
//! │  └── CoreError       - Store capacity, bad sort selectors              │
//! │                                                                         │
//! │  carlot-ingest errors (separate crate)                                 │
//! │  └── IngestError     - Unreadable input, unwritable error file         │
//! │                                                                         │
//! │  Flow: FieldViolation → Rejection → error file line                    │
//! │        IngestError → CLI prints "ERROR: ..." and exits                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. A `FieldViolation`'s `Display` is exactly the clause written to the
//!    error file, so message text lives in one place
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::types::Field;
use crate::{MIN_MODEL_LEN, MIN_PRICE, REQ_ID_LEN};

// =============================================================================
// Field Violation
// =============================================================================

/// A single broken validation rule.
///
/// Each validator reports every rule it saw broken, but never the same rule
/// twice for one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FieldViolation {
    /// ID is not exactly [`REQ_ID_LEN`] characters.
    #[error("Car ID must be {} characters long", REQ_ID_LEN)]
    IdLength,

    /// One of the first two ID characters is not `A-Z` (or is `O`).
    #[error("First 2 characters of Car ID must be letters (A-Z, letter O is not allowed)")]
    IdPrefix,

    /// One of ID characters 3-7 is not `A-Z`/`0-9` (or is `O`).
    #[error("Characters 3-7 of Car ID must be alphanumeric (A-Z, 0-9, letter O is not allowed)")]
    IdBody,

    /// One of the last two ID characters is not a digit.
    #[error("Characters 8-9 of Car ID must be numeric")]
    IdSuffix,

    /// Model is shorter than [`MIN_MODEL_LEN`].
    #[error("Model must be at least {} characters long", MIN_MODEL_LEN)]
    ModelLength,

    /// Model does not start with `A-Z` (or starts with `O`).
    #[error("Model must start with a capital letter (A-Z, letter O is not allowed)")]
    ModelFirstChar,

    /// Model contains a character outside `A-Z`, `a-z`, `0-9`.
    #[error("Model must be alphanumeric (A-Z, a-z, 0-9)")]
    ModelAlphanumeric,

    /// Quantity token did not parse as a whole number.
    #[error("Quantity must be a whole number")]
    QuantityNotNumeric,

    /// Quantity is below zero.
    #[error("Quantity must be greater than or equal to 0")]
    QuantityNegative,

    /// Price token did not parse as a finite number.
    #[error("Price must be a number")]
    PriceNotNumeric,

    /// Price is at or below [`MIN_PRICE`].
    #[error("Price must be greater than ${}", MIN_PRICE)]
    PriceTooLow,
}

impl FieldViolation {
    /// The field this rule belongs to.
    pub const fn field(&self) -> Field {
        match self {
            FieldViolation::IdLength
            | FieldViolation::IdPrefix
            | FieldViolation::IdBody
            | FieldViolation::IdSuffix => Field::Id,
            FieldViolation::ModelLength
            | FieldViolation::ModelFirstChar
            | FieldViolation::ModelAlphanumeric => Field::Model,
            FieldViolation::QuantityNotNumeric | FieldViolation::QuantityNegative => {
                Field::Quantity
            }
            FieldViolation::PriceNotNumeric | FieldViolation::PriceTooLow => Field::Price,
        }
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Core store and query errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The record store has reached its capacity ceiling.
    ///
    /// ## When This Occurs
    /// - Ingest keeps pushing after [`crate::MAX_RECORDS`] valid records.
    ///   The ingest pipeline checks `is_full()` first, so in practice this
    ///   only surfaces when the store is driven directly.
    #[error("Record store is full ({capacity} records)")]
    StoreFull { capacity: usize },

    /// A sort field name that isn't one of id/model/quantity/price.
    #[error("Unknown sort field: '{0}'")]
    InvalidSortField(String),

    /// A numeric menu selector outside 1..=4.
    #[error("Sort selector {0} is out of range (1-4)")]
    InvalidSelector(u8),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
