//! # Domain Types
//!
//! Core domain types used throughout Carlot.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐  validate_record  ┌─────────────────┐             │
//! │  │   RawRecord     │ ────────────────► │      Car        │             │
//! │  │  ─────────────  │                   │  ─────────────  │             │
//! │  │  id     (text)  │                   │  id (upper)     │             │
//! │  │  model  (text)  │                   │  model (upper)  │             │
//! │  │  quantity(text) │                   │  quantity i64   │             │
//! │  │  price  (text)  │                   │  price    f64   │             │
//! │  └─────────────────┘                   └─────────────────┘             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │     Field       │   │   SortField     │                             │
//! │  │  Id / Model /   │   │  Id / Model /   │                             │
//! │  │  Quantity/Price │   │  Quantity/Price │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `Car` can only be obtained from the validator, so anything holding one
//! knows it already passed every field rule.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Car
// =============================================================================

/// A validated vehicle inventory record.
///
/// Immutable once built. ID and model are stored uppercased.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Car {
    id: String,
    model: String,
    quantity: i64,
    price: f64,
}

impl Car {
    /// Builds a car from values that have already passed validation.
    pub(crate) fn new(id: &str, model: &str, quantity: i64, price: f64) -> Self {
        Car {
            id: id.to_uppercase(),
            model: model.to_uppercase(),
            quantity,
            price,
        }
    }

    /// The 9-character vehicle ID.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The model name.
    #[inline]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Units in stock.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price in dollars.
    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }
}

// =============================================================================
// Raw Record
// =============================================================================

/// One input line split into its four tokens, untouched.
///
/// Missing tokens are empty strings. Extra tokens are dropped but counted in
/// `token_count`, so the validator can reject the line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub id: String,
    pub model: String,
    pub quantity: String,
    pub price: String,
    pub token_count: usize,
}

impl RawRecord {
    /// Number of whitespace-separated tokens a well-formed line carries.
    pub const FIELD_COUNT: usize = 4;

    /// Tokenizes a line on whitespace in fixed ID, Model, Quantity, Price order.
    ///
    /// ## Example
    /// ```rust
    /// use carlot_core::RawRecord;
    ///
    /// let raw = RawRecord::from_line("AB12MP349  Fusion5\t20 17000.00");
    /// assert_eq!(raw.model, "Fusion5");
    /// assert_eq!(raw.token_count, 4);
    /// ```
    pub fn from_line(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        let mut next = || tokens.next().unwrap_or_default().to_string();

        let id = next();
        let model = next();
        let quantity = next();
        let price = next();

        RawRecord {
            id,
            model,
            quantity,
            price,
            token_count: line.split_whitespace().count(),
        }
    }

    /// Whether the line had exactly four tokens.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.token_count == Self::FIELD_COUNT
    }
}

// =============================================================================
// Field
// =============================================================================

/// The four record fields, in diagnostic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Id,
    Model,
    Quantity,
    Price,
}

impl Field {
    /// All fields in the order diagnostics are reported.
    pub const ALL: [Field; 4] = [Field::Id, Field::Model, Field::Quantity, Field::Price];

    /// Label that prefixes this field's block in a diagnostic line.
    pub const fn label(&self) -> &'static str {
        match self {
            Field::Id => "Invalid ID:",
            Field::Model => "Invalid Model:",
            Field::Quantity => "Invalid Quant:",
            Field::Price => "Invalid Price:",
        }
    }
}

// =============================================================================
// Sort Field
// =============================================================================

/// Key the inventory can be sorted by.
///
/// Parsing happens at the edge (menu number or CLI flag), so an unknown key
/// never reaches the sorter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    Model,
    Quantity,
    Price,
}

impl SortField {
    /// All sort fields in menu order.
    pub const ALL: [SortField; 4] = [
        SortField::Id,
        SortField::Model,
        SortField::Quantity,
        SortField::Price,
    ];

    /// Maps a 1-based menu selection to a sort field.
    ///
    /// ## Example
    /// ```rust
    /// use carlot_core::SortField;
    ///
    /// assert_eq!(SortField::from_selector(4).unwrap(), SortField::Price);
    /// assert!(SortField::from_selector(5).is_err());
    /// ```
    pub fn from_selector(selector: u8) -> CoreResult<Self> {
        match selector {
            1 => Ok(SortField::Id),
            2 => Ok(SortField::Model),
            3 => Ok(SortField::Quantity),
            4 => Ok(SortField::Price),
            other => Err(CoreError::InvalidSelector(other)),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortField::Id => "ID",
            SortField::Model => "Model",
            SortField::Quantity => "Quantity",
            SortField::Price => "Price",
        };
        f.write_str(name)
    }
}

impl FromStr for SortField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(SortField::Id),
            "model" => Ok(SortField::Model),
            "quantity" | "qty" => Ok(SortField::Quantity),
            "price" => Ok(SortField::Price),
            _ => Err(CoreError::InvalidSortField(s.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_record_short_line() {
        let raw = RawRecord::from_line("AB12MP349 gwaggon 17000.00");
        assert_eq!(raw.id, "AB12MP349");
        assert_eq!(raw.quantity, "17000.00");
        assert_eq!(raw.price, "");
        assert_eq!(raw.token_count, 3);
        assert!(!raw.is_well_formed());
    }

    #[test]
    fn test_raw_record_extra_tokens() {
        let raw = RawRecord::from_line("AB12MP349 Fusion5 20 17000 extra");
        assert_eq!(raw.price, "17000");
        assert_eq!(raw.token_count, 5);
        assert!(!raw.is_well_formed());
    }

    #[test]
    fn test_car_uppercases_once() {
        let car = Car::new("ab12mp349", "Fusion5", 1, 6000.0);
        assert_eq!(car.id(), "AB12MP349");
        assert_eq!(car.model(), "FUSION5");
    }

    #[test]
    fn test_sort_field_from_str() {
        assert_eq!("price".parse::<SortField>().unwrap(), SortField::Price);
        assert_eq!("Model".parse::<SortField>().unwrap(), SortField::Model);
        assert_eq!("qty".parse::<SortField>().unwrap(), SortField::Quantity);
        assert!(matches!(
            "color".parse::<SortField>(),
            Err(CoreError::InvalidSortField(_))
        ));
    }

    #[test]
    fn test_sort_field_selector_range() {
        assert_eq!(SortField::from_selector(1).unwrap(), SortField::Id);
        assert_eq!(
            SortField::from_selector(0),
            Err(CoreError::InvalidSelector(0))
        );
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(Field::Id.label(), "Invalid ID:");
        assert_eq!(Field::Quantity.label(), "Invalid Quant:");
    }
}
