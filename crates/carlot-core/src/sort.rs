//! # Sort Module
//!
//! Descending selection sort over an ordering index.
//!
//! ## How It Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  cars (arena, never moves)      order (permutation of arena slots)     │
//! │  ┌───┬─────────┐                ┌───┬───┬───┐                          │
//! │  │ 0 │ 5000.01 │                │ 0 │ 1 │ 2 │   before                 │
//! │  │ 1 │ 102000  │                └───┴───┴───┘                          │
//! │  │ 2 │ 17000   │   sort(Price)  ┌───┬───┬───┐                          │
//! │  └───┴─────────┘  ───────────►  │ 1 │ 2 │ 0 │   after                  │
//! │                                 └───┴───┴───┘                          │
//! │                                                                         │
//! │  For each slot i: scan i+1.. for a STRICTLY greater key, swap it in.   │
//! │  Equal keys never displace the current pick, so the first-seen         │
//! │  maximum wins.                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::cmp::Ordering;

use crate::types::{Car, SortField};

/// Compares two cars by one field.
///
/// Prices are finite once validated, so `partial_cmp` always answers; the
/// fallback only exists to keep the function total.
pub fn compare(a: &Car, b: &Car, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id().cmp(b.id()),
        SortField::Model => a.model().cmp(b.model()),
        SortField::Quantity => a.quantity().cmp(&b.quantity()),
        SortField::Price => a.price().partial_cmp(&b.price()).unwrap_or(Ordering::Equal),
    }
}

/// Reorders `order` in place so the cars it points at are in descending
/// `field` order. `cars` is only read.
///
/// Every entry of `order` must be a valid index into `cars`.
pub fn selection_sort_desc(cars: &[Car], order: &mut [usize], field: SortField) {
    for i in 0..order.len() {
        let mut max = i;

        for j in (i + 1)..order.len() {
            if compare(&cars[order[j]], &cars[order[max]], field) == Ordering::Greater {
                max = j;
            }
        }

        order.swap(i, max);
    }
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

    fn prices(cars: &[Car], order: &[usize]) -> Vec<f64> {
        order.iter().map(|&i| cars[i].price()).collect()
    }

    #[test]
    fn test_sort_by_price_descending() {
        let cars = vec![
            car("EF45AB678", "LongModelName", 10, 5000.01),
            car("ZZ99YY123", "CorvetteZ06", 25, 102000.0),
            car("AB12MP349", "Fusion5", 20, 17000.0),
        ];
        let mut order = vec![0, 1, 2];

        selection_sort_desc(&cars, &mut order, SortField::Price);

        assert_eq!(order, [1, 2, 0]);
        assert_eq!(prices(&cars, &order), [102000.0, 17000.0, 5000.01]);
    }

    #[test]
    fn test_sort_leaves_arena_untouched() {
        let cars = vec![
            car("AB12MP349", "Fusion5", 20, 17000.0),
            car("ZZ99YY123", "CorvetteZ06", 25, 102000.0),
        ];
        let before = cars.clone();
        let mut order = vec![0, 1];

        selection_sort_desc(&cars, &mut order, SortField::Id);

        assert_eq!(cars, before);
        assert_eq!(order, [1, 0]);
    }

    #[test]
    fn test_sort_strings_lexicographic() {
        let cars = vec![
            car("AB12MP349", "Camry9", 1, 7500.0),
            car("AB12MP350", "Camry10", 1, 7600.0),
            car("AB12MP351", "Civic5", 1, 13500.0),
        ];
        let mut order = vec![0, 1, 2];

        selection_sort_desc(&cars, &mut order, SortField::Model);

        let models: Vec<&str> = order.iter().map(|&i| cars[i].model()).collect();
        // Byte order, not natural order: "CAMRY9" > "CAMRY10"
        assert_eq!(models, ["CIVIC5", "CAMRY9", "CAMRY10"]);
    }

    #[test]
    fn test_sort_ties_keep_first_seen() {
        let cars = vec![
            car("PQ78RS901", "Camry9", 0, 7500.0),
            car("UV45EF890", "Optima4", 0, 5200.0),
            car("AB12MP349", "Fusion5", 20, 17000.0),
            car("UV45EF891", "Optima5", 0, 5300.0),
        ];
        let mut order = vec![0, 1, 2, 3];

        selection_sort_desc(&cars, &mut order, SortField::Quantity);

        // 2 is the max; the three zero-quantity cars come after it. Slot 0
        // was swapped out to where 2 was, so their relative order follows
        // the selection-sort swaps rather than a stable sort.
        assert_eq!(order[0], 2);
        assert_eq!(order, [2, 1, 0, 3]);
    }

    #[test]
    fn test_sort_equal_keys_are_not_reordered() {
        let cars = vec![
            car("AB12MP349", "Civic5", 3, 9000.0),
            car("AB12MP350", "Civic6", 3, 9000.0),
            car("AB12MP351", "Civic7", 3, 9000.0),
        ];
        let mut order = vec![0, 1, 2];

        selection_sort_desc(&cars, &mut order, SortField::Price);

        assert_eq!(order, [0, 1, 2]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let cars = vec![
            car("PQ78RS901", "Camry9", 0, 7500.0),
            car("UV45EF890", "Optima4", 0, 5200.0),
            car("AB12MP349", "Fusion5", 20, 17000.0),
            car("UV45EF891", "Optima5", 0, 5300.0),
            car("GH23IJ456", "Civic5", 18, 13500.0),
        ];

        for field in SortField::ALL {
            let mut once = (0..cars.len()).collect::<Vec<_>>();
            selection_sort_desc(&cars, &mut once, field);

            let mut twice = once.clone();
            selection_sort_desc(&cars, &mut twice, field);

            assert_eq!(once, twice, "sorting twice by {field} changed the order");
        }
    }

    #[test]
    fn test_sort_empty_and_single() {
        let cars = vec![car("AB12MP349", "Fusion5", 20, 17000.0)];

        let mut empty: Vec<usize> = Vec::new();
        selection_sort_desc(&cars, &mut empty, SortField::Id);
        assert!(empty.is_empty());

        let mut single = vec![0];
        selection_sort_desc(&cars, &mut single, SortField::Price);
        assert_eq!(single, [0]);
    }
}
