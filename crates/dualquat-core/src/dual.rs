//! Dual numbers over an arbitrary algebra.
//!
//! A dual number `a + εb` with `ε² = 0` is a first-order Taylor expansion:
//!
//! - `(a + εa') + (b + εb') = (a + b) + ε(a' + b')`
//! - `(a + εa')(b + εb') = ab + ε(ab' + a'b)`
//! - `(a + εa') / (b + εb') = a/b + ε(a'b − ab')/b²`
//!
//! The underlying type does not have to be commutative. Products keep the
//! left operand on the left, so `Dual<Quaternion<T>>` is the dual quaternion
//! algebra.

use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::scalar::{two, FuzzyEq, Scalar, SquareRoot};

/// A dual number `real + ε·dual`.
///
/// The default value is `(X::default(), X::zero())`: zero for `Dual<f64>`,
/// identity plus a zero dual part for `Dual<Quaternion<T>>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dual<X> {
    real: X,
    dual: X,
}

impl<X> Dual<X> {
    /// Creates a dual number from its real and dual parts.
    #[inline]
    pub const fn new(real: X, dual: X) -> Self {
        Self { real, dual }
    }
}

impl<X: Default + Zero> Default for Dual<X> {
    fn default() -> Self {
        Self::new(X::default(), X::zero())
    }
}

impl<X: Copy> Dual<X> {
    /// Real part.
    #[inline]
    #[must_use]
    pub fn real(&self) -> X {
        self.real
    }

    /// Dual part.
    #[inline]
    #[must_use]
    pub fn dual(&self) -> X {
        self.dual
    }
}

impl<X: Copy + Neg<Output = X>> Dual<X> {
    /// Dual conjugate, `real − ε·dual`.
    ///
    /// Not to be confused with quaternion conjugation.
    #[inline]
    #[must_use]
    pub fn conjugated(&self) -> Self {
        Self::new(self.real, -self.dual)
    }
}

impl<T: Scalar> Dual<T> {
    /// Dual number with zero dual part.
    #[inline]
    pub fn from_real(real: T) -> Self {
        Self::new(real, T::zero())
    }
}

impl<X: Add<Output = X>> Add for Dual<X> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.real + rhs.real, self.dual + rhs.dual)
    }
}

impl<X: Sub<Output = X>> Sub for Dual<X> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.real - rhs.real, self.dual - rhs.dual)
    }
}

impl<X: Neg<Output = X>> Neg for Dual<X> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.real, -self.dual)
    }
}

/// `Dual<X> · Dual<S>`. With `S = X` this is the ordinary product; with
/// `X = Quaternion<T>` and `S = T` it scales a dual quaternion by a dual scalar.
impl<X, S> Mul<Dual<S>> for Dual<X>
where
    X: Copy + Mul<S, Output = X> + Add<Output = X>,
    S: Copy,
{
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Dual<S>) -> Self {
        // ε² = 0 drops dual·dual
        Self::new(
            self.real * rhs.real,
            self.real * rhs.dual + self.dual * rhs.real,
        )
    }
}

/// `Dual<X> / Dual<S>`, the divisor must have a commutative real part.
impl<X, S> Div<Dual<S>> for Dual<X>
where
    X: Copy + Mul<S, Output = X> + Div<S, Output = X> + Sub<Output = X>,
    S: Copy + Mul<Output = S>,
{
    type Output = Self;

    #[inline]
    fn div(self, rhs: Dual<S>) -> Self {
        Self::new(
            self.real / rhs.real,
            (self.dual * rhs.real - self.real * rhs.dual) / (rhs.real * rhs.real),
        )
    }
}

macro_rules! impl_dual_scalar_ops {
    ($($t:ty),*) => {$(
        impl<X: Mul<$t, Output = X>> Mul<$t> for Dual<X> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $t) -> Self {
                Self::new(self.real * rhs, self.dual * rhs)
            }
        }

        impl<X: Div<$t, Output = X>> Div<$t> for Dual<X> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: $t) -> Self {
                Self::new(self.real / rhs, self.dual / rhs)
            }
        }
    )*};
}

impl_dual_scalar_ops!(f32, f64);

impl<T: Scalar> Zero for Dual<T> {
    fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    fn is_zero(&self) -> bool {
        self.real.is_zero() && self.dual.is_zero()
    }
}

impl<T: Scalar> One for Dual<T> {
    fn one() -> Self {
        Self::from_real(T::one())
    }
}

impl<T: Scalar> SquareRoot for Dual<T> {
    fn square_root(self) -> Self {
        let root = self.real.sqrt();
        Self::new(root, self.dual / (two::<T>() * root))
    }
}

impl<X: FuzzyEq> FuzzyEq for Dual<X> {
    fn fuzzy_eq(&self, other: &Self) -> bool {
        self.real.fuzzy_eq(&other.real) && self.dual.fuzzy_eq(&other.dual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dual_quaternion::DualQuaternion;
    use crate::quaternion::Quaternion;
    use crate::scalar::{equals, pow, sqrt};

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Dual::<f64>::default(), Dual::new(0.0, 0.0));
    }

    #[test]
    fn test_default_quaternion_has_zero_dual_part() {
        let dual = Dual::<Quaternion<f64>>::default();
        assert_eq!(dual.real(), Quaternion::identity());
        assert_eq!(dual.dual(), Quaternion::zero());
        assert_eq!(DualQuaternion::from(dual), DualQuaternion::identity());
        assert_eq!(
            DualQuaternion::from(Dual::<Quaternion<f32>>::default()),
            DualQuaternion::default()
        );
    }

    #[test]
    fn test_add_sub_neg() {
        let a = Dual::new(2.0_f64, -3.0);
        let b = Dual::new(-7.5, 1.5);
        assert_eq!(a + b, Dual::new(-5.5, -1.5));
        assert_eq!(a - b, Dual::new(9.5, -4.5));
        assert_eq!(-a, Dual::new(-2.0, 3.0));
    }

    #[test]
    fn test_multiply_drops_dual_squared() {
        let a = Dual::new(1.5_f32, -4.0);
        let b = Dual::new(-2.0_f32, 0.5);
        assert_eq!(a * b, Dual::new(-3.0, 8.75));

        let epsilon = Dual::new(0.0_f64, 1.0);
        assert_eq!(epsilon * epsilon, Dual::new(0.0, 0.0));
    }

    #[test]
    fn test_divide() {
        let a = Dual::new(-7.5_f64, 3.0);
        let b = Dual::new(1.5_f64, -2.0);
        let c = a / b;
        assert!(equals(&c, &Dual::new(-5.0, -4.666_666_666_666_667)));
        assert!(equals(&(c * b), &a));
    }

    #[test]
    fn test_scalar_ops() {
        let a = Dual::new(2.0_f64, -6.0);
        assert_eq!(a * 0.5_f64, Dual::new(1.0, -3.0));
        assert_eq!(a / 2.0_f64, Dual::new(1.0, -3.0));
    }

    #[test]
    fn test_conjugated() {
        assert_eq!(Dual::new(1.0_f32, -3.5).conjugated(), Dual::new(1.0, 3.5));
    }

    #[test]
    fn test_sqrt_is_first_order_expansion() {
        let root = sqrt(Dual::new(16.0_f64, 2.0));
        assert_eq!(root, Dual::new(4.0, 0.25));
        assert!(equals(&(root * root), &Dual::new(16.0, 2.0)));
    }

    #[test]
    fn test_pow() {
        let a = Dual::new(3.0_f64, 1.0);
        assert_eq!(pow(a, 0), Dual::new(1.0, 0.0));
        assert_eq!(pow(a, 2), Dual::new(9.0, 6.0));
        assert_eq!(pow(a, 3), Dual::new(27.0, 27.0));
    }

    #[test]
    fn test_fuzzy_eq() {
        assert!(Dual::new(1.0_f32, 0.0).fuzzy_eq(&Dual::new(1.0 + 1.0e-7, 1.0e-7)));
        assert!(!Dual::new(1.0_f32, 0.0).fuzzy_eq(&Dual::new(1.0, 1.0e-3)));
    }
}
