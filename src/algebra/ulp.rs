// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Approximate equality of floating point values measured in units in the
//! last place (ULPs).
//!
//! Two finite values are `n` ULPs apart when there are `n - 1` representable
//! values strictly between them. Positive and negative zero are equal, values
//! of opposite sign are measured through zero, and NaN is never equal to
//! anything.

/// The tolerance used throughout the crate when floating point results are
/// compared against exact reference values.
pub const DEFAULT_MAX_ULPS: u64 = 2;

/// Floating point types whose values can be compared by ULP distance.
pub trait UlpEq: Copy {
    /// Number of representable steps between `self` and `other`, or `None`
    /// if either is NaN.
    fn ulp_distance(self, other: Self) -> Option<u64>;

    /// Check that `self` and `other` are at most `max_ulps` steps apart.
    fn ulp_eq(self, other: Self, max_ulps: u64) -> bool {
        self.ulp_distance(other)
            .is_some_and(|distance| distance <= max_ulps)
    }
}

macro_rules! impl_ulp_eq {
    ($float:ty, $signed:ty) => {
        impl UlpEq for $float {
            fn ulp_distance(self, other: Self) -> Option<u64> {
                if self.is_nan() || other.is_nan() {
                    return None;
                }
                if self == other {
                    return Some(0);
                }
                // Reinterpret the bits so that integer order matches float order,
                // with both zeros mapping to 0.
                let ordered = |value: $float| {
                    let bits = value.to_bits() as $signed;
                    if bits < 0 { <$signed>::MIN - bits } else { bits }
                };
                Some(ordered(self).abs_diff(ordered(other)) as u64)
            }
        }
    };
}

impl_ulp_eq!(f32, i32);
impl_ulp_eq!(f64, i64);

/// Number of representable `f64` steps between `a` and `b`, or `None` if
/// either is NaN.
pub fn ulp_distance(a: f64, b: f64) -> Option<u64> {
    a.ulp_distance(b)
}

/// Check that `a` and `b` are at most `max_ulps` representable steps apart.
///
/// # Examples
///
/// ```rust
/// use pretzelrs::{DEFAULT_MAX_ULPS, float_eq};
///
/// assert!(float_eq(0.1 + 0.2, 0.3, DEFAULT_MAX_ULPS));
/// assert!(!float_eq(1.0, 1.0001, DEFAULT_MAX_ULPS));
/// assert!(!float_eq(f64::NAN, f64::NAN, DEFAULT_MAX_ULPS));
/// ```
pub fn float_eq(a: f64, b: f64, max_ulps: u64) -> bool {
    a.ulp_eq(b, max_ulps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_values() {
        let one = 1.0f64;
        let next = f64::from_bits(one.to_bits() + 1);
        let after = f64::from_bits(one.to_bits() + 2);
        let beyond = f64::from_bits(one.to_bits() + 3);

        assert_eq!(ulp_distance(one, next), Some(1));
        assert!(float_eq(one, after, DEFAULT_MAX_ULPS));
        assert!(!float_eq(one, beyond, DEFAULT_MAX_ULPS));
        assert!(!float_eq(one, next, 0));
    }

    #[test]
    fn signed_zeros_and_sign_changes() {
        assert_eq!(ulp_distance(0.0, -0.0), Some(0));

        let tiny = f64::from_bits(1);
        assert_eq!(ulp_distance(tiny, -tiny), Some(2));
        assert!(!float_eq(-1.0, 1.0, DEFAULT_MAX_ULPS));
    }

    #[test]
    fn nan_and_infinity() {
        assert_eq!(ulp_distance(f64::NAN, 1.0), None);
        assert!(float_eq(f64::INFINITY, f64::INFINITY, 0));
        assert!(!float_eq(f64::INFINITY, f64::NEG_INFINITY, DEFAULT_MAX_ULPS));
    }

    #[test]
    fn single_precision() {
        let value = -2.5f32;
        let next = f32::from_bits(value.to_bits() + 1);
        assert_eq!(value.ulp_distance(next), Some(1));
        assert!(value.ulp_eq(next, DEFAULT_MAX_ULPS));
        assert!(!1.0f32.ulp_eq(1.5, DEFAULT_MAX_ULPS));
    }
}
