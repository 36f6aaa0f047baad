//! Capacity growth stays geometric, so appends are amortized O(1).

use collection::{BulkGrowth, DynamicArray, GrowthPolicy};
use collection_test_utils::seeded_values;

/// Total relocation cost for `n` single appends under `policy`.
fn relocations_for(policy: GrowthPolicy, n: usize) -> u64 {
    let mut coll = DynamicArray::with_policy(policy).unwrap();
    for value in seeded_values(11, n) {
        coll.add(value);
    }
    assert_eq!(coll.count(), n);
    coll.metrics().elements_relocated
}

#[test]
fn doubling_relocates_less_than_twice_the_appends() {
    for n in [1, 10, 100, 1_000, 50_000] {
        let relocated = relocations_for(GrowthPolicy::doubling(), n);
        assert!(relocated < 2 * n as u64, "n={n}: relocated {relocated}");
    }
}

#[test]
fn one_and_a_half_relocates_less_than_three_times_the_appends() {
    // Geometric series bound for factor 3/2 is 1 / (1.5 - 1) = 2, plus
    // slack for integer rounding on small capacities.
    for n in [1_000, 50_000] {
        let relocated = relocations_for(GrowthPolicy::with_factor(3, 2), n);
        assert!(relocated < 3 * n as u64, "n={n}: relocated {relocated}");
    }
}

#[test]
fn relocation_cost_per_append_does_not_grow_with_n() {
    let small = relocations_for(GrowthPolicy::doubling(), 1 << 10) as f64 / (1 << 10) as f64;
    let large = relocations_for(GrowthPolicy::doubling(), 1 << 16) as f64 / (1 << 16) as f64;
    assert!(large <= small * 1.1, "small {small}, large {large}");
}

#[test]
fn bulk_strategies_agree_on_contents() {
    let values = seeded_values(3, 3_000);
    let mut fit = DynamicArray::new();
    let mut repeated = DynamicArray::with_policy(GrowthPolicy {
        bulk: BulkGrowth::Repeated,
        ..GrowthPolicy::doubling()
    })
    .unwrap();

    fit.add_range(values.iter().copied());
    repeated.add_range(values.iter().copied());

    assert_eq!(fit, repeated);
    assert_eq!(fit.capacity(), 3_000);
    assert_eq!(repeated.capacity(), 4_096);
    assert_eq!(fit.metrics().growth_events, 1);
    assert_eq!(repeated.metrics().growth_events, 1);
}

#[test]
fn capacity_is_monotonic_through_mixed_operations() {
    let mut coll = DynamicArray::new();
    let mut last = coll.capacity();
    for (i, value) in seeded_values(5, 5_000).into_iter().enumerate() {
        if i % 3 == 0 && !coll.is_empty() {
            coll.remove_at(0).unwrap();
        } else {
            coll.insert_at(coll.count() / 2, value).unwrap();
        }
        assert!(coll.capacity() >= last);
        assert!(coll.capacity() >= coll.count());
        last = coll.capacity();
    }
    assert_eq!(coll.metrics().peak_capacity, coll.capacity());
}
