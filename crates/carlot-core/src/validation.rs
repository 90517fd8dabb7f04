//! # Validation Module
//!
//! Field validators and the composite record validator.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Record Validation                                  │
//! │                                                                         │
//! │  RawRecord ──► parse quantity / price tokens                           │
//! │      │                                                                  │
//! │      ├──► check_id        ──► FieldCheck { Id,       [violations] }    │
//! │      ├──► check_model     ──► FieldCheck { Model,    [violations] }    │
//! │      ├──► check_quantity  ──► FieldCheck { Quantity, [violations] }    │
//! │      └──► check_price     ──► FieldCheck { Price,    [violations] }    │
//! │                                                                         │
//! │  All four always run. Any failure ──► Rejection (one block per field)  │
//! │  No failure ─────────────────────────► Car (ID / model uppercased)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Within one field, each rule is reported at most once, and some rules
//! short-circuit the rest:
//! - ID: a length failure suppresses the positional checks.
//! - Model: a length failure suppresses the character checks, and a bad
//!   first character suppresses the alphanumeric check.
//!
//! ## Usage
//! ```rust
//! use carlot_core::validation::{check_id, check_model};
//!
//! assert!(check_id("AB12MP349").is_ok());
//! assert!(!check_model("accord3").is_ok());
//! ```

use std::fmt;

use crate::error::FieldViolation;
use crate::types::{Car, Field, RawRecord};
use crate::{ID_BODY_END, ID_PREFIX_LEN, MIN_MODEL_LEN, MIN_PRICE, REQ_ID_LEN};

/// Width of the label cell that starts each diagnostic block.
const LABEL_WIDTH: usize = 15;

// =============================================================================
// Field Check
// =============================================================================

/// Outcome of validating one field: the field plus every rule it broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    field: Field,
    violations: Vec<FieldViolation>,
}

impl FieldCheck {
    fn new(field: Field) -> Self {
        FieldCheck {
            field,
            violations: Vec::new(),
        }
    }

    /// Records a violation unless the same rule was already recorded.
    fn record(&mut self, violation: FieldViolation) {
        if !self.violations.contains(&violation) {
            self.violations.push(violation);
        }
    }

    /// A check that failed on a single rule, filed under that rule's field.
    fn failed(violation: FieldViolation) -> Self {
        FieldCheck {
            field: violation.field(),
            violations: vec![violation],
        }
    }

    /// The field that was checked.
    pub fn field(&self) -> Field {
        self.field
    }

    /// Rules broken, in the order they were first seen.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Whether the field passed.
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for FieldCheck {
    /// Renders `Invalid <Field>: [ <clause> <clause> ]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<width$}[ ", self.field.label(), width = LABEL_WIDTH)?;
        for violation in &self.violations {
            write!(f, "{violation} ")?;
        }
        f.write_str("]")
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// `A-Z` except `O`.
#[inline]
fn is_restricted_upper(c: char) -> bool {
    c.is_ascii_uppercase() && c != 'O'
}

/// Validates a car ID.
///
/// ## Rules
/// - Exactly 9 characters (checked first; failure skips the rest)
/// - Characters 1-2: `A-Z`, no `O`
/// - Characters 3-7: `A-Z` (no `O`) or `0-9`
/// - Characters 8-9: `0-9`
///
/// ## Example
/// ```rust
/// use carlot_core::validation::check_id;
/// use carlot_core::FieldViolation;
///
/// assert!(check_id("AB12MP349").is_ok());
/// assert_eq!(check_id("AB12MP34").violations(), &[FieldViolation::IdLength]);
/// ```
pub fn check_id(id: &str) -> FieldCheck {
    let mut check = FieldCheck::new(Field::Id);

    if id.chars().count() != REQ_ID_LEN {
        check.record(FieldViolation::IdLength);
        return check;
    }

    for (i, c) in id.chars().enumerate() {
        if i < ID_PREFIX_LEN {
            if !is_restricted_upper(c) {
                check.record(FieldViolation::IdPrefix);
            }
        } else if i < ID_BODY_END {
            if !(is_restricted_upper(c) || c.is_ascii_digit()) {
                check.record(FieldViolation::IdBody);
            }
        } else if !c.is_ascii_digit() {
            check.record(FieldViolation::IdSuffix);
        }
    }

    check
}

/// Validates a model name.
///
/// ## Rules
/// - At least 3 characters (failure skips the rest)
/// - First character: `A-Z`, no `O` (failure skips the alphanumeric check)
/// - Remaining characters: `A-Z`, `a-z`, `0-9`
pub fn check_model(model: &str) -> FieldCheck {
    let mut check = FieldCheck::new(Field::Model);

    if model.chars().count() < MIN_MODEL_LEN {
        check.record(FieldViolation::ModelLength);
        return check;
    }

    let mut chars = model.chars();
    if !chars.next().is_some_and(is_restricted_upper) {
        check.record(FieldViolation::ModelFirstChar);
        return check;
    }

    if !chars.all(|c| c.is_ascii_alphanumeric()) {
        check.record(FieldViolation::ModelAlphanumeric);
    }

    check
}

/// Validates a quantity: must be `>= 0`.
pub fn check_quantity(quantity: i64) -> FieldCheck {
    let mut check = FieldCheck::new(Field::Quantity);
    if quantity < 0 {
        check.record(FieldViolation::QuantityNegative);
    }
    check
}

/// Validates a price: must be strictly greater than [`MIN_PRICE`].
pub fn check_price(price: f64) -> FieldCheck {
    let mut check = FieldCheck::new(Field::Price);
    if price > MIN_PRICE {
        return check;
    }
    check.record(FieldViolation::PriceTooLow);
    check
}

fn parse_quantity(token: &str) -> Result<i64, FieldViolation> {
    token
        .parse::<i64>()
        .map_err(|_| FieldViolation::QuantityNotNumeric)
}

fn parse_price(token: &str) -> Result<f64, FieldViolation> {
    match token.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(FieldViolation::PriceNotNumeric),
    }
}

// =============================================================================
// Rejection
// =============================================================================

/// Why a record was refused: every failing field, in ID, Model, Quantity,
/// Price order, plus the token count when the line was malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    token_count: Option<usize>,
    failures: Vec<FieldCheck>,
}

impl Rejection {
    /// Failing field checks, in field order.
    pub fn failures(&self) -> &[FieldCheck] {
        &self.failures
    }

    /// The fields that failed, in field order.
    pub fn failed_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.failures.iter().map(FieldCheck::field)
    }

    /// Token count of the line, if it wasn't exactly four.
    pub fn malformed_token_count(&self) -> Option<usize> {
        self.token_count
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        if let Some(found) = self.token_count {
            write!(
                f,
                "{:<width$}[ Record must have exactly {} fields, found {} ]",
                "Invalid Line:",
                RawRecord::FIELD_COUNT,
                found,
                width = LABEL_WIDTH
            )?;
            first = false;
        }

        for check in &self.failures {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{check}")?;
            first = false;
        }

        Ok(())
    }
}

impl std::error::Error for Rejection {}

// =============================================================================
// Record Validator
// =============================================================================

fn collect_failures(checks: [FieldCheck; 4]) -> Vec<FieldCheck> {
    checks.into_iter().filter(|check| !check.is_ok()).collect()
}

/// Validates already-typed field values.
///
/// Every validator runs, even after an earlier one failed, so the rejection
/// names every bad field at once.
///
/// ## Example
/// ```rust
/// use carlot_core::validate_fields;
///
/// assert!(validate_fields("AB12MP349", "Fusion5", 20, 17000.0).is_ok());
///
/// let rejection = validate_fields("AB12MP34", "R", -3, 5000.0).unwrap_err();
/// assert_eq!(rejection.failures().len(), 4);
/// ```
pub fn validate_fields(id: &str, model: &str, quantity: i64, price: f64) -> Result<(), Rejection> {
    let failures = collect_failures([
        check_id(id),
        check_model(model),
        check_quantity(quantity),
        check_price(price),
    ]);

    if failures.is_empty() {
        Ok(())
    } else {
        Err(Rejection {
            token_count: None,
            failures,
        })
    }
}

/// Validates one tokenized input line.
///
/// On success returns the normalized [`Car`]; this is the only way to build
/// one outside this crate.
pub fn validate_record(raw: &RawRecord) -> Result<Car, Rejection> {
    let quantity = parse_quantity(&raw.quantity);
    let price = parse_price(&raw.price);

    let failures = collect_failures([
        check_id(&raw.id),
        check_model(&raw.model),
        match quantity {
            Ok(quantity) => check_quantity(quantity),
            Err(violation) => FieldCheck::failed(violation),
        },
        match price {
            Ok(price) => check_price(price),
            Err(violation) => FieldCheck::failed(violation),
        },
    ]);

    let token_count = (!raw.is_well_formed()).then_some(raw.token_count);

    match (quantity, price) {
        (Ok(quantity), Ok(price)) if failures.is_empty() && token_count.is_none() => {
            Ok(Car::new(&raw.id, &raw.model, quantity, price))
        }
        _ => Err(Rejection {
            token_count,
            failures,
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
