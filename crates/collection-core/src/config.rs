//! Growth policy configuration and validation.
//!
//! [`GrowthPolicy`] decides how much storage a [`DynamicArray`](crate::DynamicArray)
//! allocates when it runs out of room. The factor is kept as an integer
//! ratio so the rule is exact and platform independent.

use std::error::Error;
use std::fmt;

// ── BulkGrowth ─────────────────────────────────────────────────────

/// How a bulk append sizes its growth step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BulkGrowth {
    /// One growth step: the scaled capacity, or the required size if that
    /// is larger.
    #[default]
    ResizeToFit,
    /// Apply the geometric factor repeatedly until the required size fits.
    Repeated,
}

// ── GrowthPolicy ───────────────────────────────────────────────────

/// Capacity growth rule for a [`DynamicArray`](crate::DynamicArray).
///
/// Growth is geometric: each step multiplies the current capacity by
/// `factor_numerator / factor_denominator`. A factor strictly greater than
/// one is what keeps single-element appends amortized O(1), so
/// [`validate()`](Self::validate) rejects anything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Capacity of a freshly constructed empty array, and the smallest
    /// capacity any growth step will choose. Default: 4.
    pub initial_capacity: usize,
    /// Numerator of the growth factor. Default: 2.
    pub factor_numerator: usize,
    /// Denominator of the growth factor. Default: 1.
    pub factor_denominator: usize,
    /// Sizing rule for bulk appends. Default: [`BulkGrowth::ResizeToFit`].
    pub bulk: BulkGrowth,
}

impl GrowthPolicy {
    /// Default capacity of an empty array.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 4;

    /// Default growth factor numerator (doubling).
    pub const DEFAULT_FACTOR_NUMERATOR: usize = 2;

    /// Default growth factor denominator (doubling).
    pub const DEFAULT_FACTOR_DENOMINATOR: usize = 1;

    /// Capacity doubling with the default initial capacity.
    pub fn doubling() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            factor_numerator: Self::DEFAULT_FACTOR_NUMERATOR,
            factor_denominator: Self::DEFAULT_FACTOR_DENOMINATOR,
            bulk: BulkGrowth::ResizeToFit,
        }
    }

    /// Growth by `numerator / denominator` per step.
    ///
    /// The result is not validated; call [`validate()`](Self::validate)
    /// or pass it to [`DynamicArray::with_policy`](crate::DynamicArray::with_policy).
    pub fn with_factor(numerator: usize, denominator: usize) -> Self {
        Self {
            factor_numerator: numerator,
            factor_denominator: denominator,
            ..Self::doubling()
        }
    }

    /// Check that the factor is a well-formed ratio greater than one.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.factor_denominator == 0 {
            return Err(PolicyError::ZeroDenominator);
        }
        if self.factor_numerator <= self.factor_denominator {
            return Err(PolicyError::NonGrowingFactor {
                numerator: self.factor_numerator,
                denominator: self.factor_denominator,
            });
        }
        Ok(())
    }

    /// Choose the capacity to grow to when `required` slots are needed and
    /// `current` are allocated.
    ///
    /// Returns `current` unchanged if it already fits. Otherwise the result
    /// is at least `required`, at least `initial_capacity`, and strictly
    /// greater than `current`.
    pub fn next_capacity(&self, current: usize, required: usize) -> usize {
        if required <= current {
            return current;
        }
        match self.bulk {
            BulkGrowth::ResizeToFit => self
                .scale(current)
                .max(self.initial_capacity)
                .max(required),
            BulkGrowth::Repeated => {
                let mut cap = current.max(self.initial_capacity);
                while cap < required {
                    cap = self.scale(cap);
                }
                cap
            }
        }
    }

    /// One geometric step. Always advances by at least one slot so small
    /// capacities under fractional factors still make progress.
    fn scale(&self, capacity: usize) -> usize {
        let grown = capacity.saturating_mul(self.factor_numerator) / self.factor_denominator.max(1);
        grown.max(capacity.saturating_add(1))
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::doubling()
    }
}

// ── PolicyError ────────────────────────────────────────────────────

/// Errors detected by [`GrowthPolicy::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolicyError {
    /// `factor_denominator` is zero.
    ZeroDenominator,
    /// The factor does not exceed one, so appends would not be amortized O(1).
    NonGrowingFactor {
        /// The configured numerator.
        numerator: usize,
        /// The configured denominator.
        denominator: usize,
    },
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDenominator => write!(f, "growth factor denominator is zero"),
            Self::NonGrowingFactor {
                numerator,
                denominator,
            } => {
                write!(
                    f,
                    "growth factor {numerator}/{denominator} must be greater than 1"
                )
            }
        }
    }
}

impl Error for PolicyError {}
