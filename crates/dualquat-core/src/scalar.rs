//! Scalar utilities shared by the whole algebra.
//!
//! - [`Scalar`] binds a float type to its glam vector and matrix types
//! - [`Vector3`] maps a glam vector back to its float type
//! - [`FuzzyEq`] compares values within a fixed per-type tolerance
//! - [`pow`] and [`sqrt`] work on plain scalars as well as on [`Dual`](crate::Dual) numbers

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::{DMat3, DMat4, DVec3, Mat3, Mat4, Vec3};
use num_traits::{Float, One};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Underlying floating-point type of [`Quaternion`](crate::Quaternion),
/// [`Dual`](crate::Dual) and [`DualQuaternion`](crate::DualQuaternion).
///
/// Implemented for `f32` (backed by [`glam::Vec3`], [`glam::Mat3`], [`glam::Mat4`])
/// and `f64` (backed by [`glam::DVec3`], [`glam::DMat3`], [`glam::DMat4`]).
pub trait Scalar:
    Float + FuzzyEq + Default + Debug + Display + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Three-component vector type.
    type Vec3: Vector3<Scalar = Self>
        + Copy
        + Debug
        + Default
        + PartialEq
        + FuzzyEq
        + Serialize
        + DeserializeOwned
        + Send
        + Sync
        + Add<Output = Self::Vec3>
        + Sub<Output = Self::Vec3>
        + Neg<Output = Self::Vec3>
        + Mul<Self, Output = Self::Vec3>
        + Div<Self, Output = Self::Vec3>;

    /// 3×3 matrix type, column-major.
    type Mat3: Copy + Debug + PartialEq + FuzzyEq;

    /// 4×4 matrix type, column-major.
    type Mat4: Copy + Debug + PartialEq + FuzzyEq;

    /// Absolute tolerance used by [`FuzzyEq`].
    const EQUALITY_PRECISION: Self;

    /// Builds a vector from its components.
    fn vec3(x: Self, y: Self, z: Self) -> Self::Vec3;

    /// Returns the components of a vector.
    fn vec3_to_array(v: Self::Vec3) -> [Self; 3];

    /// Dot product of two vectors.
    fn vec3_dot(a: Self::Vec3, b: Self::Vec3) -> Self;

    /// Cross product of two vectors.
    fn vec3_cross(a: Self::Vec3, b: Self::Vec3) -> Self::Vec3;

    /// Builds a 3×3 matrix from three columns.
    fn mat3_from_cols(x: Self::Vec3, y: Self::Vec3, z: Self::Vec3) -> Self::Mat3;

    /// Builds a homogeneous 4×4 transform from a rotation and a translation.
    fn mat4_from_rotation_translation(rotation: Self::Mat3, translation: Self::Vec3) -> Self::Mat4;

    /// Vector with every component set to NaN.
    fn vec3_nan() -> Self::Vec3 {
        let nan = Self::nan();
        Self::vec3(nan, nan, nan)
    }
}

/// A glam three-component vector, mapped back to its [`Scalar`].
///
/// Constructors that take a vector are generic over this trait, so
/// `DualQuaternion::translation(Vec3::X)` is a `DualQuaternion<f32>` without
/// spelling out the scalar type.
pub trait Vector3 {
    /// Component type.
    type Scalar: Scalar;

    /// The same vector, typed as `<Self::Scalar as Scalar>::Vec3`.
    fn into_vec3(self) -> <Self::Scalar as Scalar>::Vec3;
}

macro_rules! impl_scalar {
    ($t:ty, $vec3:ty, $mat3:ty, $mat4:ty, $precision:expr) => {
        impl Scalar for $t {
            type Vec3 = $vec3;
            type Mat3 = $mat3;
            type Mat4 = $mat4;

            const EQUALITY_PRECISION: Self = $precision;

            #[inline]
            fn vec3(x: Self, y: Self, z: Self) -> Self::Vec3 {
                <$vec3>::new(x, y, z)
            }

            #[inline]
            fn vec3_to_array(v: Self::Vec3) -> [Self; 3] {
                v.to_array()
            }

            #[inline]
            fn vec3_dot(a: Self::Vec3, b: Self::Vec3) -> Self {
                a.dot(b)
            }

            #[inline]
            fn vec3_cross(a: Self::Vec3, b: Self::Vec3) -> Self::Vec3 {
                a.cross(b)
            }

            #[inline]
            fn mat3_from_cols(x: Self::Vec3, y: Self::Vec3, z: Self::Vec3) -> Self::Mat3 {
                <$mat3>::from_cols(x, y, z)
            }

            fn mat4_from_rotation_translation(
                rotation: Self::Mat3,
                translation: Self::Vec3,
            ) -> Self::Mat4 {
                <$mat4>::from_cols(
                    rotation.x_axis.extend(0.0),
                    rotation.y_axis.extend(0.0),
                    rotation.z_axis.extend(0.0),
                    translation.extend(1.0),
                )
            }
        }

        impl Vector3 for $vec3 {
            type Scalar = $t;

            #[inline]
            fn into_vec3(self) -> $vec3 {
                self
            }
        }

        impl FuzzyEq for $t {
            #[inline]
            fn fuzzy_eq(&self, other: &Self) -> bool {
                self == other || (self - other).abs() < <$t as Scalar>::EQUALITY_PRECISION
            }
        }

        impl FuzzyEq for $vec3 {
            fn fuzzy_eq(&self, other: &Self) -> bool {
                self.to_array()
                    .iter()
                    .zip(other.to_array().iter())
                    .all(|(a, b)| a.fuzzy_eq(b))
            }
        }

        impl FuzzyEq for $mat3 {
            fn fuzzy_eq(&self, other: &Self) -> bool {
                self.to_cols_array()
                    .iter()
                    .zip(other.to_cols_array().iter())
                    .all(|(a, b)| a.fuzzy_eq(b))
            }
        }

        impl FuzzyEq for $mat4 {
            fn fuzzy_eq(&self, other: &Self) -> bool {
                self.to_cols_array()
                    .iter()
                    .zip(other.to_cols_array().iter())
                    .all(|(a, b)| a.fuzzy_eq(b))
            }
        }

        impl SquareRoot for $t {
            #[inline]
            fn square_root(self) -> Self {
                Float::sqrt(self)
            }
        }
    };
}

impl_scalar!(f32, Vec3, Mat3, Mat4, 1.0e-6);
impl_scalar!(f64, DVec3, DMat3, DMat4, 1.0e-12);

/// Equality within a fixed absolute tolerance.
///
/// The tolerance is [`Scalar::EQUALITY_PRECISION`] of the underlying type.
/// Composite types compare component-wise. NaN never compares equal.
pub trait FuzzyEq {
    /// Returns `true` if `self` and `other` differ by less than the tolerance.
    fn fuzzy_eq(&self, other: &Self) -> bool;
}

/// Free-function form of [`FuzzyEq::fuzzy_eq`].
#[inline]
pub fn equals<V: FuzzyEq + ?Sized>(a: &V, b: &V) -> bool {
    a.fuzzy_eq(b)
}

/// Square root, overloaded for scalars and [`Dual`](crate::Dual) numbers.
pub trait SquareRoot {
    /// Returns the square root of `self`.
    #[must_use]
    fn square_root(self) -> Self;
}

/// Square root of a scalar or a dual number.
///
/// For dual numbers this is the first-order expansion
/// `sqrt(a + εb) = sqrt(a) + ε·b/(2·sqrt(a))`, not a per-component root.
#[inline]
pub fn sqrt<V: SquareRoot>(value: V) -> V {
    value.square_root()
}

/// Integer power by repeated squaring. `pow(x, 0)` is one.
pub fn pow<V: Copy + One>(base: V, exponent: u32) -> V {
    let mut result = V::one();
    let mut base = base;
    let mut exponent = exponent;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result * base;
        }
        exponent >>= 1;
        if exponent > 0 {
            base = base * base;
        }
    }
    result
}

#[inline]
pub(crate) fn two<T: Scalar>() -> T {
    T::one() + T::one()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzy_eq_precision() {
        assert!(1.0_f32.fuzzy_eq(&(1.0 + 5.0e-7)));
        assert!(!1.0_f32.fuzzy_eq(&(1.0 + 5.0e-6)));
        assert!(1.0_f64.fuzzy_eq(&(1.0 + 5.0e-13)));
        assert!(!1.0_f64.fuzzy_eq(&(1.0 + 5.0e-12)));
    }

    #[test]
    fn test_fuzzy_eq_nan_and_infinity() {
        assert!(!f64::NAN.fuzzy_eq(&f64::NAN));
        assert!(f64::INFINITY.fuzzy_eq(&f64::INFINITY));
        assert!(!Vec3::NAN.fuzzy_eq(&Vec3::NAN));
    }

    #[test]
    fn test_vector_and_matrix_equality() {
        assert!(equals(&Vec3::new(1.0, 2.0, 3.0), &Vec3::new(1.0, 2.0, 3.0 + 1.0e-7)));
        assert!(!equals(&DVec3::X, &DVec3::Y));
        assert!(equals(&Mat4::IDENTITY, &Mat4::IDENTITY));
        assert!(!equals(&DMat3::IDENTITY, &DMat3::ZERO));
    }

    #[test]
    fn test_pow() {
        assert_eq!(pow(3.0_f64, 0), 1.0);
        assert_eq!(pow(3.0_f64, 1), 3.0);
        assert_eq!(pow(3.0_f64, 2), 9.0);
        assert_eq!(pow(2.0_f32, 10), 1024.0);
    }

    #[test]
    fn test_sqrt_scalar() {
        assert_eq!(sqrt(16.0_f64), 4.0);
        assert!(sqrt(-1.0_f32).is_nan());
    }

    #[test]
    fn test_vector_maps_back_to_scalar() {
        fn scalar_of<V: Vector3>(_: V) -> &'static str {
            std::any::type_name::<V::Scalar>()
        }
        assert_eq!(scalar_of(Vec3::X), "f32");
        assert_eq!(scalar_of(DVec3::X), "f64");
        assert_eq!(Vec3::Y.into_vec3(), Vec3::Y);
    }

    #[test]
    fn test_mat4_from_rotation_translation() {
        let m = f32::mat4_from_rotation_translation(Mat3::IDENTITY, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m, Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)));
    }
}
