//! Property-based tests for comparator laws.
//!
//! - **Antisymmetry**: `cmp(a, b) == cmp(b, a).reverse()`
//! - **Double Reverse Identity**: `cmp.reversed().reversed() == cmp`
//! - **Absent Ordering**: `nulls_first` places `None` before every value,
//!   `nulls_last` after every value, and delegates when both are present

#![cfg(feature = "comparator")]

use std::cmp::Ordering;

use fnkit::comparator::Comparator;
use proptest::prelude::*;

fn natural() -> Comparator<i32> {
    Comparator::natural_order()
}

proptest! {
    #[test]
    fn prop_antisymmetry(a in any::<i32>(), b in any::<i32>()) {
        let comparator = natural();
        prop_assert_eq!(comparator.compare(&a, &b), comparator.compare(&b, &a).reverse());
    }

    #[test]
    fn prop_double_reverse_identity(a in any::<i32>(), b in any::<i32>()) {
        let twice = natural().reversed().reversed();
        prop_assert_eq!(twice.compare(&a, &b), natural().compare(&a, &b));
    }

    #[test]
    fn prop_reversed_negates(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(natural().reversed().compare(&a, &b), natural().compare(&a, &b).reverse());
    }

    #[test]
    fn prop_nulls_first(value in any::<i32>()) {
        let comparator = natural().nulls_first();
        prop_assert_eq!(comparator.compare(&None, &Some(value)), Ordering::Less);
        prop_assert_eq!(comparator.compare(&Some(value), &None), Ordering::Greater);
        prop_assert_eq!(comparator.compare(&None, &None), Ordering::Equal);
    }

    #[test]
    fn prop_nulls_last(value in any::<i32>()) {
        let comparator = natural().nulls_last();
        prop_assert_eq!(comparator.compare(&None, &Some(value)), Ordering::Greater);
        prop_assert_eq!(comparator.compare(&Some(value), &None), Ordering::Less);
    }

    #[test]
    fn prop_nulls_delegate_when_present(a in any::<i32>(), b in any::<i32>()) {
        let comparator = natural().nulls_last();
        prop_assert_eq!(comparator.compare(&Some(a), &Some(b)), a.cmp(&b));
    }

    #[test]
    fn prop_sort_matches_std(mut values in proptest::collection::vec(any::<i32>(), 0..50)) {
        let mut expected = values.clone();
        expected.sort_unstable();
        natural().sort(&mut values);
        prop_assert_eq!(values, expected);
    }
}
