//! Element type constraints for sparse matrices
//!
//! The kernel only operates on floating-point values. This module defines
//! the trait that constrains what types can be stored as matrix entries.

use core::fmt::Debug;
use core::ops::{Add, Mul, Neg};

/// Trait for types that can be stored as sparse matrix entries
///
/// All element types must be:
/// - Copy: entries are read and written by value
/// - PartialEq: exact-zero detection relies on `==`
/// - closed under `+`, `*` and unary `-`
pub trait SparseElement:
    Copy + PartialEq + Debug + Add<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity; never stored
    const ZERO: Self;

    /// True if this value is exactly zero
    ///
    /// Both `0.0` and `-0.0` count as zero.
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Convert from f64 for generic construction
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic operations
    fn to_f64(self) -> f64;
}

impl SparseElement for f32 {
    const ZERO: Self = 0.0;

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl SparseElement for f64 {
    const ZERO: Self = 0.0;

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_zero() {
        assert!(0.0f32.is_zero());
        assert!((-0.0f32).is_zero());
        assert!(!f32::MIN_POSITIVE.is_zero());
        assert!(0.0f64.is_zero());
        assert!(!1e-300f64.is_zero());
    }

    #[test]
    fn test_f64_conversion() {
        assert_eq!(f32::from_f64(1.5), 1.5f32);
        assert_eq!(2.25f32.to_f64(), 2.25);
        assert_eq!(f64::from_f64(-3.0).to_f64(), -3.0);
    }
}
