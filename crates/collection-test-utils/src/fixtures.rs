//! Deterministic input data.

use std::fmt::Display;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// `len` consecutive integers starting at `start`.
pub fn sequential(start: i32, len: usize) -> Vec<i32> {
    (0..len as i32).map(|offset| start + offset).collect()
}

/// The expected display string for `items`: `[a, b, c]`, or `[]`.
///
/// Built independently of `DynamicArray`'s `Display` impl so the two can
/// be compared.
pub fn joined_display<T: Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

/// `len` pseudo-random integers from a ChaCha8 stream seeded with `seed`.
///
/// The same seed always yields the same values.
pub fn seeded_values(seed: u64, len: usize) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(-1_000_000..1_000_000)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_counts_up() {
        assert_eq!(sequential(1000, 3), vec![1000, 1001, 1002]);
        assert!(sequential(5, 0).is_empty());
    }

    #[test]
    fn joined_display_formats() {
        assert_eq!(joined_display::<i32>(&[]), "[]");
        assert_eq!(joined_display(&[5]), "[5]");
        assert_eq!(joined_display(&[5, 6, 7]), "[5, 6, 7]");
    }

    #[test]
    fn seeded_values_are_deterministic() {
        assert_eq!(seeded_values(42, 16), seeded_values(42, 16));
        assert_ne!(seeded_values(42, 16), seeded_values(43, 16));
        assert_eq!(seeded_values(7, 100).len(), 100);
    }
}
