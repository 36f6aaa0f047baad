//! The growable array and its checked operations.
//!
//! [`DynamicArray`] owns a contiguous run of elements plus an explicit
//! capacity. When an append or insert would exceed that capacity, the
//! array asks its [`GrowthPolicy`] for a larger one, allocates fresh
//! storage, moves every element across in order, and releases the old
//! storage.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use crate::config::{GrowthPolicy, PolicyError};
use crate::error::{CollectionError, Operation};
use crate::metrics::GrowthMetrics;

fn out_of_range(op: Operation, index: usize, count: usize) -> CollectionError {
    CollectionError::IndexOutOfRange { op, index, count }
}

/// A contiguous, ordered, growable sequence of `T`.
///
/// Checked operations ([`get`](Self::get), [`set`](Self::set),
/// [`insert_at`](Self::insert_at), [`remove_at`](Self::remove_at),
/// [`exchange`](Self::exchange)) return
/// [`CollectionError::IndexOutOfRange`] instead of panicking, and leave
/// the array untouched when they fail. `Index`/`IndexMut` are the
/// panicking counterparts of `get`/`set`.
///
/// Capacity only ever grows. [`clear`](Self::clear) and
/// [`remove_at`](Self::remove_at) keep the allocation.
///
/// The array holds no interior mutability: every mutation takes
/// `&mut self`, so sharing one across threads requires external
/// synchronization.
#[derive(Debug)]
pub struct DynamicArray<T> {
    /// Backing storage. `items.capacity() >= capacity` at all times so
    /// `Vec` never reallocates behind the policy's back.
    items: Vec<T>,
    /// Allocated slots as chosen by the policy.
    capacity: usize,
    policy: GrowthPolicy,
    metrics: GrowthMetrics,
}

impl<T> DynamicArray<T> {
    /// Create an empty array under the default doubling policy.
    pub fn new() -> Self {
        Self::from_policy(GrowthPolicy::default())
    }

    /// Create an empty array under `policy`.
    ///
    /// Fails if the policy's growth factor does not exceed one.
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self::from_policy(policy))
    }

    /// Create an empty array with exactly `capacity` slots allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            policy: GrowthPolicy::default(),
            metrics: GrowthMetrics::with_capacity(capacity),
        }
    }

    /// Create an array holding `items` in iteration order.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut array = Self::new();
        array.add_range(items);
        array
    }

    fn from_policy(policy: GrowthPolicy) -> Self {
        let capacity = policy.initial_capacity;
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            policy,
            metrics: GrowthMetrics::with_capacity(capacity),
        }
    }

    /// Number of elements present.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// `true` if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of allocated slots. Always `>= count()`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The growth policy in effect.
    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// Reallocation counters accumulated so far.
    pub fn metrics(&self) -> &GrowthMetrics {
        &self.metrics
    }

    /// Borrow the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        self.items
            .get(index)
            .ok_or_else(|| out_of_range(Operation::Get, index, self.items.len()))
    }

    /// Replace the element at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, CollectionError> {
        let count = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(out_of_range(Operation::Set, index, count))?;
        Ok(mem::replace(slot, value))
    }

    /// Append `value` at the end, growing first if the array is full.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `isize::MAX` bytes.
    pub fn add(&mut self, value: T) {
        self.ensure_capacity(self.items.len().saturating_add(1));
        self.items.push(value);
    }

    /// Append every value from `values` in order.
    ///
    /// Storage for the iterator's lower size bound is reserved up front
    /// in a single growth step (or several, under
    /// [`BulkGrowth::Repeated`](crate::BulkGrowth::Repeated)); anything
    /// beyond that grows one append at a time.
    pub fn add_range<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        let (lower, _) = values.size_hint();
        self.reserve(lower);
        for value in values {
            self.add(value);
        }
    }

    /// Insert `value` at `index`, shifting the elements at `index..` one
    /// slot to the right. `index == count()` appends.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        let count = self.items.len();
        if index > count {
            return Err(out_of_range(Operation::InsertAt, index, count));
        }
        self.ensure_capacity(count.saturating_add(1));
        self.items.insert(index, value);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting the elements
    /// after it one slot to the left.
    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        let count = self.items.len();
        if index >= count {
            return Err(out_of_range(Operation::RemoveAt, index, count));
        }
        Ok(self.items.remove(index))
    }

    /// Swap the elements at `i` and `j`. `i == j` is a valid no-op.
    pub fn exchange(&mut self, i: usize, j: usize) -> Result<(), CollectionError> {
        let count = self.items.len();
        for index in [i, j] {
            if index >= count {
                return Err(out_of_range(Operation::Exchange, index, count));
            }
        }
        self.items.swap(i, j);
        Ok(())
    }

    /// Drop every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Ensure room for at least `additional` more elements, growing by the
    /// policy if needed.
    pub fn reserve(&mut self, additional: usize) {
        self.ensure_capacity(self.items.len().saturating_add(additional));
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate mutably over the elements in order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    fn ensure_capacity(&mut self, required: usize) {
        if required <= self.capacity {
            return;
        }
        let new_capacity = self.policy.next_capacity(self.capacity, required);
        self.relocate(new_capacity);
    }

    /// Move every element into freshly allocated storage of `new_capacity`
    /// slots. The old storage is released when it is replaced.
    fn relocate(&mut self, new_capacity: usize) {
        let mut storage = Vec::with_capacity(new_capacity);
        let relocated = self.items.len();
        storage.extend(self.items.drain(..));
        self.items = storage;
        let old_capacity = mem::replace(&mut self.capacity, new_capacity);
        self.metrics.record_growth(relocated, new_capacity);
        tracing::trace!(
            target: "collection::growth",
            old_capacity,
            new_capacity,
            count = relocated,
            "grew array storage"
        );
    }
}

impl<T: fmt::Display> DynamicArray<T> {
    /// Render as `[e0, e1, ...]`, or `[]` when empty.
    ///
    /// Same output as the `Display` impl.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str("]")
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    /// Copies elements into storage of the same capacity. The clone starts
    /// with fresh metrics.
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend(self.items.iter().cloned());
        Self {
            items,
            capacity: self.capacity,
            policy: self.policy.clone(),
            metrics: GrowthMetrics::with_capacity(self.capacity),
        }
    }
}

/// Equality compares elements only; capacity, policy and metrics are ignored.
impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= count()`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    /// # Panics
    ///
    /// Panics if `index >= count()`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        let count = self.items.len();
        match self.items.get_mut(index) {
            Some(item) => item,
            None => panic!("{}", out_of_range(Operation::Set, index, count)),
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.add_range(iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_items(items)
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    /// Takes over the vector's storage; capacity is at least the default
    /// initial capacity.
    fn from(mut items: Vec<T>) -> Self {
        let policy = GrowthPolicy::default();
        let capacity = items.len().max(policy.initial_capacity);
        items.reserve_exact(capacity - items.len());
        Self {
            items,
            capacity,
            policy,
            metrics: GrowthMetrics::with_capacity(capacity),
        }
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
