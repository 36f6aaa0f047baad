//! Benchmark profiles for the Collection growable array.
//!
//! Provides named growth policies and pre-filled arrays so the criterion
//! benches and ad-hoc profiling share the same inputs:
//!
//! - [`policy_profiles`]: the growth policies compared across benches
//! - [`filled`]: an array of `len` seeded values under a given policy

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use collection_core::{BulkGrowth, DynamicArray, GrowthPolicy};
use collection_test_utils::seeded_values;

/// Seed shared by every bench input.
pub const BENCH_SEED: u64 = 0x5EED;

/// Growth policies compared in the append benches, with display names.
pub fn policy_profiles() -> Vec<(&'static str, GrowthPolicy)> {
    vec![
        ("double_fit", GrowthPolicy::doubling()),
        (
            "double_repeated",
            GrowthPolicy {
                bulk: BulkGrowth::Repeated,
                ..GrowthPolicy::doubling()
            },
        ),
        ("one_and_half", GrowthPolicy::with_factor(3, 2)),
    ]
}

/// An array holding `len` seeded values, grown under `policy`.
///
/// # Panics
///
/// Panics if `policy` fails validation.
pub fn filled(policy: GrowthPolicy, len: usize) -> DynamicArray<i64> {
    let mut array = DynamicArray::with_policy(policy).expect("bench policy must validate");
    array.add_range(seeded_values(BENCH_SEED, len));
    array
}
