//! Test utilities for Collection development.
//!
//! Provides deterministic input fixtures ([`sequential`], [`seeded_values`],
//! [`joined_display`]) and an operation script ([`Op`], [`random_ops`])
//! that can be replayed against both a `Vec` reference model and a
//! [`DynamicArray`](collection_core::DynamicArray) so their states can be
//! compared step by step.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod script;

pub use fixtures::{joined_display, seeded_values, sequential};
pub use script::{apply_to_array, apply_to_model, random_ops, Op, Outcome};
