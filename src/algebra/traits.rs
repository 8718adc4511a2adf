// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Helper trait for types that support additive operations.
pub trait Additive:
    Sized + Add<Output = Self> + AddAssign + Sub<Output = Self> + SubAssign + Neg<Output = Self>
{
}

/// Helper trait for types that support multiplicative operations.
pub trait Multiplicative: Sized + Mul<Output = Self> + MulAssign {}

/// Helper trait for the basic requirements of matrix entries. Equality is only
/// required to be partial so that floating point types qualify.
pub trait AlgebraicBase: Sized + Clone + PartialEq + Debug {}

impl<T> Additive for T where
    T: Add<Output = Self> + AddAssign + Sub<Output = Self> + SubAssign + Neg<Output = Self>
{
}

impl<T> Multiplicative for T where T: Mul<Output = Self> + MulAssign {}

impl<T> AlgebraicBase for T where T: Sized + Clone + PartialEq + Debug {}

/// Expected functionality for matrix entry types throughout `pretzelrs`. The
/// entries are expected to form a commutative ring with unity, though this is
/// not checked by this trait.
pub trait RingLike: AlgebraicBase + Additive + Multiplicative {
    /// Creates a new ring element representing the additive identity.
    fn zero() -> Self;
    /// Creates a new ring element representing the multiplicative identity.
    fn one() -> Self;
    /// Divide `self` by `divisor` in a context where the quotient is known to
    /// exist in the ring (as in fraction-free elimination). For integer types
    /// the division is truncating, so a non-exact quotient is silently wrong;
    /// callers are responsible for exactness.
    fn exact_div(self, divisor: &Self) -> Self;

    /// Check if the element is the additive identity.
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

/// Entry types supporting division by every non-zero element, together with a
/// magnitude used to select pivots during elimination.
pub trait FieldLike: RingLike + PartialOrd + Div<Output = Self> + DivAssign {
    /// Absolute value of `self`, used to compare pivot candidates.
    fn magnitude(&self) -> Self;

    /// Return the multiplicative inverse of `self`. Panics at zero.
    fn invert(&self) -> Self {
        assert!(!self.is_zero(), "attempting to invert zero");
        Self::one() / self.clone()
    }
}

macro_rules! impl_integer_ring {
    ($($int:ty),*) => {
        $(
            impl RingLike for $int {
                fn zero() -> Self {
                    0
                }

                fn one() -> Self {
                    1
                }

                fn exact_div(self, divisor: &Self) -> Self {
                    self / *divisor
                }
            }
        )*
    };
}

macro_rules! impl_float_field {
    ($($float:ty),*) => {
        $(
            impl RingLike for $float {
                fn zero() -> Self {
                    0.0
                }

                fn one() -> Self {
                    1.0
                }

                fn exact_div(self, divisor: &Self) -> Self {
                    self / *divisor
                }
            }

            impl FieldLike for $float {
                fn magnitude(&self) -> Self {
                    self.abs()
                }
            }
        )*
    };
}

impl_integer_ring!(i32, i64, i128);
impl_float_field!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identities() {
        assert_eq!(i32::zero(), 0);
        assert_eq!(i64::one(), 1);
        assert_eq!(f64::zero(), 0.0);
        assert_eq!(f32::one(), 1.0);
        assert!(0i128.is_zero());
        assert!(!(-3i32).is_zero());
    }

    #[test]
    fn exact_division() {
        assert_eq!(42i32.exact_div(&-7), -6);
        assert_eq!(9.0f64.exact_div(&4.0), 2.25);
    }

    #[test]
    fn float_inverse_and_magnitude() {
        assert_eq!(4.0f64.invert(), 0.25);
        assert_eq!((-0.5f32).invert(), -2.0);
        assert_eq!((-3.5f64).magnitude(), 3.5);
    }

    #[test]
    #[should_panic(expected = "attempting to invert zero")]
    fn invert_zero() {
        let _ = 0.0f64.invert();
    }
}
