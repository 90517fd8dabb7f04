//! # Record Store
//!
//! Fixed-capacity storage for validated cars, plus the ordering index the
//! sorter rearranges.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          RecordStore                                    │
//! │                                                                         │
//! │   cars  (arena, append-only)        order (display order)              │
//! │   ┌───┬───────────────────────┐     ┌───┬───┬───┬───┐                  │
//! │   │ 0 │ AB12MP349 FUSION5 ... │ ◄── │ 2 │ 0 │ 3 │ 1 │                  │
//! │   │ 1 │ XY34LK678 MUSTANG7 .. │     └───┴───┴───┴───┘                  │
//! │   │ 2 │ ZZ99YY123 CORVETTE... │                                        │
//! │   │ 3 │ PQ78RS901 CAMRY9 .... │     Always a permutation of 0..len     │
//! │   └───┴───────────────────────┘                                        │
//! │                                                                         │
//! │   push()    → cars.push + order.push(new slot)                         │
//! │   sort_by() → permutes `order` only                                    │
//! │   list()    → cars viewed through `order`                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::sort::selection_sort_desc;
use crate::types::{Car, SortField};
use crate::{MAX_RECORDS, PRICE_TOLERANCE};

/// Validated cars in a fixed-capacity arena, viewed through an ordering index.
///
/// ## Invariants
/// - `order` is a permutation of `0..cars.len()`
/// - `cars.len() <= capacity`
/// - Cars are never moved, mutated, or removed once pushed
#[derive(Debug, Clone)]
pub struct RecordStore {
    cars: Vec<Car>,
    order: Vec<usize>,
    capacity: usize,
}

impl Default for RecordStore {
    fn default() -> Self {
        RecordStore::new()
    }
}

impl RecordStore {
    /// Creates an empty store holding at most [`MAX_RECORDS`] cars.
    pub fn new() -> Self {
        RecordStore::with_capacity(MAX_RECORDS)
    }

    /// Creates an empty store with a custom ceiling.
    ///
    /// The ceiling may come from the command line, so at most
    /// [`MAX_RECORDS`] slots are reserved up front.
    pub fn with_capacity(capacity: usize) -> Self {
        let reserve = capacity.min(MAX_RECORDS);
        RecordStore {
            cars: Vec::with_capacity(reserve),
            order: Vec::with_capacity(reserve),
            capacity,
        }
    }

    /// Appends a car at the end of the current display order.
    ///
    /// ## Returns
    /// - `Ok(slot)` - the arena slot the car was stored in
    /// - `Err(CoreError::StoreFull)` - the store is at capacity
    pub fn push(&mut self, car: Car) -> CoreResult<usize> {
        if self.is_full() {
            return Err(CoreError::StoreFull {
                capacity: self.capacity,
            });
        }

        let slot = self.cars.len();
        self.cars.push(car);
        self.order.push(slot);
        Ok(slot)
    }

    /// Number of stored cars.
    #[inline]
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// The capacity ceiling.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cars.len() >= self.capacity
    }

    /// Cars in current display order.
    pub fn iter(&self) -> impl Iterator<Item = &Car> + '_ {
        self.order.iter().map(|&slot| &self.cars[slot])
    }

    /// Cars in current display order, collected.
    pub fn list(&self) -> Vec<&Car> {
        self.iter().collect()
    }

    /// Sorts the display order, descending by `field`. Car storage is not
    /// touched.
    pub fn sort_by(&mut self, field: SortField) {
        selection_sort_desc(&self.cars, &mut self.order, field);
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Cars whose ID or model contains `query`, ignoring case.
    ///
    /// An empty query matches nothing.
    ///
    /// ## Example
    /// ```rust
    /// use carlot_core::{validate_record, RawRecord, RecordStore};
    ///
    /// let mut store = RecordStore::new();
    /// let car = validate_record(&RawRecord::from_line("GH23IJ457 Civic6 10 14500")).unwrap();
    /// store.push(car).unwrap();
    ///
    /// assert_eq!(store.search_text("civic").len(), 1);
    /// assert_eq!(store.search_text("ij45").len(), 1);
    /// assert!(store.search_text("camry").is_empty());
    /// ```
    pub fn search_text(&self, query: &str) -> Vec<&Car> {
        let needle = query.trim().to_uppercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.iter()
            .filter(|car| car.id().contains(&needle) || car.model().contains(&needle))
            .collect()
    }

    /// Cars priced within ±15% of `target`.
    ///
    /// Non-positive or non-finite targets match nothing.
    pub fn search_price(&self, target: f64) -> Vec<&Car> {
        if !target.is_finite() || target <= 0.0 {
            return Vec::new();
        }

        let window = target * PRICE_TOLERANCE;
        let (low, high) = (target - window, target + window);

        self.iter()
            .filter(|car| car.price() >= low && car.price() <= high)
            .collect()
    }

    /// Serializable snapshot of the cars in display order.
    pub fn snapshot(&self) -> InventorySnapshot<'_> {
        InventorySnapshot {
            count: self.len(),
            capacity: self.capacity,
            cars: self.list(),
        }
    }
}

/// The store as exported to JSON.
#[derive(Debug, Serialize)]
pub struct InventorySnapshot<'a> {
    pub count: usize,
    pub capacity: usize,
    pub cars: Vec<&'a Car>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn car(id: &str, model: &str, quantity: i64, price: f64) -> Car {
        Car::new(id, model, quantity, price)
    }

    fn sample_store() -> RecordStore {
        let mut store = RecordStore::new();
        store.push(car("AB12MP349", "Fusion5", 20, 17000.0)).unwrap();
        store.push(car("GH23IJ457", "Civic6", 10, 14500.0)).unwrap();
        store.push(car("ZZ99YY123", "CorvetteZ06", 25, 102000.0)).unwrap();
        store.push(car("HJ23IJ486", "Civic8", 4, 17700.0)).unwrap();
        store
    }

    fn ids(cars: &[&Car]) -> Vec<String> {
        cars.iter().map(|car| car.id().to_string()).collect()
    }

    #[test]
    fn test_push_keeps_append_order() {
        let store = sample_store();
        assert_eq!(store.len(), 4);
        assert_eq!(store.order, [0, 1, 2, 3]);
        assert_eq!(store.list()[2].id(), "ZZ99YY123");
    }

    #[test]
    fn test_huge_ceiling_is_not_preallocated() {
        let mut store = RecordStore::with_capacity(usize::MAX);
        assert_eq!(store.capacity(), usize::MAX);
        assert!(store.cars.capacity() <= MAX_RECORDS);

        store.push(car("AB12MP349", "Fusion5", 20, 17000.0)).unwrap();
        assert!(!store.is_full());
    }

    #[test]
    fn test_push_rejects_when_full() {
        let mut store = RecordStore::with_capacity(2);
        store.push(car("AB12MP349", "Fusion5", 20, 17000.0)).unwrap();
        store.push(car("GH23IJ457", "Civic6", 10, 14500.0)).unwrap();
        assert!(store.is_full());

        let err = store.push(car("ZZ99YY123", "CorvetteZ06", 25, 102000.0));
        assert_eq!(err, Err(CoreError::StoreFull { capacity: 2 }));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_sort_by_permutes_order() {
        let mut store = sample_store();
        store.sort_by(SortField::Price);

        assert_eq!(
            ids(&store.list()),
            ["ZZ99YY123", "HJ23IJ486", "AB12MP349", "GH23IJ457"]
        );

        let mut slots = store.order.clone();
        slots.sort_unstable();
        assert_eq!(slots, [0, 1, 2, 3]);
    }

    #[test]
    fn test_sort_then_resort_other_field() {
        let mut store = sample_store();
        store.sort_by(SortField::Price);
        store.sort_by(SortField::Quantity);

        let quantities: Vec<i64> = store.iter().map(Car::quantity).collect();
        assert_eq!(quantities, [25, 20, 10, 4]);
    }

    #[test]
    fn test_search_text_case_insensitive() {
        let store = sample_store();
        assert_eq!(ids(&store.search_text("civic")), ["GH23IJ457", "HJ23IJ486"]);
        assert_eq!(ids(&store.search_text("  zz99 ")), ["ZZ99YY123"]);
        assert!(store.search_text("").is_empty());
        assert_eq!(ids(&store.search_text("ab")), ["AB12MP349"]);
    }

    #[test]
    fn test_search_text_follows_display_order() {
        let mut store = sample_store();
        store.sort_by(SortField::Price);
        assert_eq!(ids(&store.search_text("civic")), ["HJ23IJ486", "GH23IJ457"]);
    }

    #[test]
    fn test_search_price_window() {
        let store = sample_store();
        // 15000 ± 2250 → [12750, 17250]
        assert_eq!(ids(&store.search_price(15000.0)), ["AB12MP349", "GH23IJ457"]);
        assert!(store.search_price(9_999_999_999.0).is_empty());
        assert!(store.search_price(0.0).is_empty());
        assert!(store.search_price(f64::NAN).is_empty());
    }

    #[test]
    fn test_snapshot_serializes_in_display_order() {
        let mut store = sample_store();
        store.sort_by(SortField::Id);

        let json = serde_json::to_value(store.snapshot()).unwrap();
        assert_eq!(json["count"], 4);
        assert_eq!(json["capacity"], 80);
        assert_eq!(json["cars"][0]["id"], "ZZ99YY123");
        assert_eq!(json["cars"][0]["model"], "CORVETTEZ06");
    }
}
