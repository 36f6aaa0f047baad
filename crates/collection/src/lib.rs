//! Collection: a generic growable array with checked indexed mutation.
//!
//! This is the facade crate that re-exports the public API of
//! `collection-core`. For most users, adding `collection` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use collection::prelude::*;
//!
//! let mut coll: DynamicArray<i32> = DynamicArray::new();
//! assert_eq!(coll.to_string(), "[]");
//!
//! coll.add(5);
//! coll.add_range([6, 7]);
//! assert_eq!(coll.to_string(), "[5, 6, 7]");
//!
//! coll.exchange(0, 2).unwrap();
//! assert_eq!(coll.to_string(), "[7, 6, 5]");
//!
//! let err = coll.get(3).unwrap_err();
//! assert!(matches!(err, CollectionError::IndexOutOfRange { index: 3, .. }));
//! ```
//!
//! # Growth
//!
//! Capacity grows geometrically under a [`GrowthPolicy`] and never
//! shrinks. The default doubles, starting from four slots:
//!
//! ```rust
//! use collection::{BulkGrowth, DynamicArray, GrowthPolicy};
//!
//! let policy = GrowthPolicy {
//!     bulk: BulkGrowth::Repeated,
//!     ..GrowthPolicy::with_factor(3, 2)
//! };
//! let mut coll = DynamicArray::with_policy(policy).unwrap();
//! coll.add_range(0..100);
//! // 4 -> 6 -> 9 -> ... -> 94 -> 141, applied in one reallocation.
//! assert_eq!(coll.capacity(), 141);
//! assert_eq!(coll.metrics().growth_events, 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use collection_core::{
    collection, BulkGrowth, CollectionError, DynamicArray, GrowthMetrics, GrowthPolicy, Operation,
    PolicyError,
};

/// Growth policy configuration (`collection_core::config`).
pub use collection_core::config;

/// Error types (`collection_core::error`).
pub use collection_core::error;

/// Common imports for typical Collection usage.
///
/// ```rust
/// use collection::prelude::*;
///
/// let coll = collection![1, 2, 3];
/// assert_eq!(coll.count(), 3);
/// ```
pub mod prelude {
    pub use collection_core::{collection, CollectionError, DynamicArray, GrowthPolicy};
}
