//! Growable contiguous array with configurable geometric growth.
//!
//! [`DynamicArray`] is an ordered, indexable sequence that owns its
//! storage and tracks an explicit capacity. Growth is driven by a
//! [`GrowthPolicy`]; every reallocation is counted in [`GrowthMetrics`]
//! and reported as a `tracing` event at `TRACE` level on the
//! `collection::growth` target.
//!
//! # Bounds
//!
//! | Operation | Valid indices |
//! |-----------|---------------|
//! | `get`, `set`, `remove_at`, `exchange` | `index < count()` |
//! | `insert_at` | `index <= count()` |
//!
//! Anything else yields [`CollectionError::IndexOutOfRange`] and leaves
//! the array unchanged.
//!
//! ```
//! use collection_core::DynamicArray;
//!
//! let mut coll = DynamicArray::from([1, 2, 3, 4, 5]);
//! coll.insert_at(2, 99).unwrap();
//! assert_eq!(coll.to_string(), "[1, 2, 99, 3, 4, 5]");
//! assert_eq!(coll.remove_at(2).unwrap(), 99);
//! assert!(coll.exchange(0, 5).is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
mod macros;
pub mod metrics;

pub use array::DynamicArray;
pub use config::{BulkGrowth, GrowthPolicy, PolicyError};
pub use error::{CollectionError, Operation};
pub use metrics::GrowthMetrics;
