//! Replayable operation scripts.
//!
//! An [`Op`] sequence is applied to a `Vec<i64>` reference model with
//! [`apply_to_model`] and to a [`DynamicArray<i64>`] with
//! [`apply_to_array`]. Both return an [`Outcome`] per step; a correct
//! array produces the same outcomes and the same element sequence as
//! the model.
//!
//! Indices in generated scripts deliberately overshoot the current count
//! so out-of-range rejection is exercised alongside the happy path.

use collection_core::DynamicArray;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// One mutation or read against an array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Add(i64),
    AddRange(Vec<i64>),
    InsertAt(usize, i64),
    RemoveAt(usize),
    Exchange(usize, usize),
    Set(usize, i64),
    Get(usize),
    Clear,
}

/// Observable result of applying one [`Op`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The operation succeeded and returned nothing.
    Done,
    /// The operation succeeded and returned a value (removed, replaced, or read).
    Value(i64),
    /// The index was out of range; nothing changed.
    Rejected,
}

/// Generate `len` operations from a ChaCha8 stream seeded with `seed`.
///
/// Clears are rare so the array reaches sizes where growth matters.
pub fn random_ops(seed: u64, len: usize) -> Vec<Op> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut count = 0usize;
    let mut ops = Vec::with_capacity(len);
    for _ in 0..len {
        // Up to two past the end, so both bounds are probed.
        let index = rng.random_range(0..count + 3);
        let value = rng.random_range(-1000..1000);
        let op = match rng.random_range(0..100) {
            0..=29 => Op::Add(value),
            30..=34 => {
                let n = rng.random_range(0..40);
                Op::AddRange((0..n).map(|k| value + k).collect())
            }
            35..=54 => Op::InsertAt(index, value),
            55..=69 => Op::RemoveAt(index),
            70..=79 => Op::Exchange(index, rng.random_range(0..count + 3)),
            80..=89 => Op::Set(index, value),
            90..=98 => Op::Get(index),
            _ => Op::Clear,
        };
        count = projected_count(count, &op);
        ops.push(op);
    }
    ops
}

fn projected_count(count: usize, op: &Op) -> usize {
    match op {
        Op::Add(_) => count + 1,
        Op::AddRange(values) => count + values.len(),
        Op::InsertAt(index, _) if *index <= count => count + 1,
        Op::RemoveAt(index) if *index < count => count - 1,
        Op::Clear => 0,
        _ => count,
    }
}

/// Apply `op` to the `Vec` reference model.
pub fn apply_to_model(model: &mut Vec<i64>, op: &Op) -> Outcome {
    let count = model.len();
    match op {
        Op::Add(value) => {
            model.push(*value);
            Outcome::Done
        }
        Op::AddRange(values) => {
            model.extend_from_slice(values);
            Outcome::Done
        }
        Op::InsertAt(index, value) if *index <= count => {
            model.insert(*index, *value);
            Outcome::Done
        }
        Op::RemoveAt(index) if *index < count => Outcome::Value(model.remove(*index)),
        Op::Exchange(i, j) if *i < count && *j < count => {
            model.swap(*i, *j);
            Outcome::Done
        }
        Op::Set(index, value) if *index < count => {
            Outcome::Value(std::mem::replace(&mut model[*index], *value))
        }
        Op::Get(index) if *index < count => Outcome::Value(model[*index]),
        Op::Clear => {
            model.clear();
            Outcome::Done
        }
        _ => Outcome::Rejected,
    }
}

/// Apply `op` to a [`DynamicArray`].
pub fn apply_to_array(array: &mut DynamicArray<i64>, op: &Op) -> Outcome {
    let result = match op {
        Op::Add(value) => {
            array.add(*value);
            Ok(Outcome::Done)
        }
        Op::AddRange(values) => {
            array.add_range(values.iter().copied());
            Ok(Outcome::Done)
        }
        Op::InsertAt(index, value) => array.insert_at(*index, *value).map(|_| Outcome::Done),
        Op::RemoveAt(index) => array.remove_at(*index).map(Outcome::Value),
        Op::Exchange(i, j) => array.exchange(*i, *j).map(|_| Outcome::Done),
        Op::Set(index, value) => array.set(*index, *value).map(Outcome::Value),
        Op::Get(index) => array.get(*index).map(|value| Outcome::Value(*value)),
        Op::Clear => {
            array.clear();
            Ok(Outcome::Done)
        }
    };
    result.unwrap_or(Outcome::Rejected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ops_are_deterministic() {
        assert_eq!(random_ops(9, 200), random_ops(9, 200));
        assert_eq!(random_ops(9, 200).len(), 200);
    }

    #[test]
    fn model_rejects_out_of_range() {
        let mut model = vec![1, 2, 3];
        assert_eq!(apply_to_model(&mut model, &Op::RemoveAt(3)), Outcome::Rejected);
        assert_eq!(apply_to_model(&mut model, &Op::InsertAt(4, 0)), Outcome::Rejected);
        assert_eq!(apply_to_model(&mut model, &Op::Exchange(0, 3)), Outcome::Rejected);
        assert_eq!(model, vec![1, 2, 3]);
    }

    #[test]
    fn array_and_model_agree_on_small_script() {
        let ops = vec![
            Op::Add(5),
            Op::AddRange(vec![6, 7]),
            Op::InsertAt(0, 4),
            Op::Exchange(0, 3),
            Op::RemoveAt(1),
            Op::Set(9, 0),
            Op::Get(2),
        ];
        let mut model = Vec::new();
        let mut array = DynamicArray::new();
        for op in &ops {
            assert_eq!(apply_to_array(&mut array, op), apply_to_model(&mut model, op));
        }
        assert_eq!(array.as_slice(), model.as_slice());
    }
}
