//! Replays seeded operation scripts against `DynamicArray` and a `Vec`
//! reference model and checks they never diverge.

use collection::DynamicArray;
use collection::{BulkGrowth, GrowthPolicy};
use collection_test_utils::{apply_to_array, apply_to_model, random_ops, Op, Outcome};
use proptest::prelude::*;

fn replay(mut array: DynamicArray<i64>, ops: &[Op]) -> Result<(), TestCaseError> {
    let mut model = Vec::new();
    for (step, op) in ops.iter().enumerate() {
        let before = array.capacity();
        let got = apply_to_array(&mut array, op);
        let want = apply_to_model(&mut model, op);
        prop_assert_eq!(&got, &want, "step {} ({:?})", step, op);
        prop_assert_eq!(array.as_slice(), model.as_slice(), "step {}", step);
        prop_assert!(array.capacity() >= array.count());
        prop_assert!(array.capacity() >= before, "capacity shrank at step {}", step);
        if got == Outcome::Rejected {
            prop_assert_eq!(array.capacity(), before);
        }
    }
    Ok(())
}

#[test]
fn fixed_seeds_default_policy() {
    for seed in 0..32 {
        let ops = random_ops(seed, 500);
        replay(DynamicArray::new(), &ops).unwrap();
    }
}

#[test]
fn fixed_seed_repeated_bulk_growth() {
    let policy = GrowthPolicy {
        bulk: BulkGrowth::Repeated,
        ..GrowthPolicy::with_factor(3, 2)
    };
    let ops = random_ops(0xC0FFEE, 2000);
    replay(DynamicArray::with_policy(policy).unwrap(), &ops).unwrap();
}

proptest! {
    #[test]
    fn any_seed_any_policy(
        seed in any::<u64>(),
        initial in 0usize..8,
        numerator in 2usize..5,
        repeated in any::<bool>(),
    ) {
        let policy = GrowthPolicy {
            initial_capacity: initial,
            factor_numerator: numerator,
            factor_denominator: 1,
            bulk: if repeated { BulkGrowth::Repeated } else { BulkGrowth::ResizeToFit },
        };
        let array = DynamicArray::with_policy(policy).unwrap();
        replay(array, &random_ops(seed, 200))?;
    }
}
