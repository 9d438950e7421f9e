//! Quaternions over a generic [`Scalar`].
//!
//! A quaternion is stored as a vector part `[x, y, z]` and a scalar part `w`.
//! Unit quaternions represent rotations. Non-unit ones show up as
//! intermediate values, for example as the dual part of a
//! [`DualQuaternion`](crate::DualQuaternion).

use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};
use crate::options::PreconditionPolicy;
use crate::scalar::{two, FuzzyEq, Scalar, Vector3};

/// A quaternion `[vector, scalar]`.
///
/// The default value is the identity rotation `[0, 0, 0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Scalar")]
pub struct Quaternion<T: Scalar> {
    vector: T::Vec3,
    scalar: T,
}

impl<T: Scalar> Quaternion<T> {
    /// Creates a quaternion from its vector and scalar parts.
    #[inline]
    pub fn new<V: Vector3<Scalar = T>>(vector: V, scalar: T) -> Self {
        Self {
            vector: vector.into_vec3(),
            scalar,
        }
    }

    /// The identity rotation `[0, 0, 0, 1]`.
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::Vec3::default(), T::one())
    }

    /// The zero quaternion `[0, 0, 0, 0]`.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::Vec3::default(), T::zero())
    }

    /// Rotation quaternion.
    ///
    /// Counterclockwise rotation by `angle` radians about `normalized_axis`:
    /// `[a·sin(θ/2), cos(θ/2)]`. The axis is used as given, a non-unit axis
    /// gives a non-unit quaternion.
    pub fn rotation<V: Vector3<Scalar = T>>(angle: T, normalized_axis: V) -> Self {
        let half = angle / two::<T>();
        Self::new(normalized_axis.into_vec3() * half.sin(), half.cos())
    }

    /// Vector part.
    #[inline]
    #[must_use]
    pub fn vector(&self) -> T::Vec3 {
        self.vector
    }

    /// Scalar part.
    #[inline]
    #[must_use]
    pub fn scalar(&self) -> T {
        self.scalar
    }

    /// Dot product of two quaternions.
    #[inline]
    #[must_use]
    pub fn dot(self, other: Self) -> T {
        T::vec3_dot(self.vector, other.vector) + self.scalar * other.scalar
    }

    /// Squared length, the dot product of the quaternion with itself.
    #[inline]
    #[must_use]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Length.
    #[inline]
    #[must_use]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Quaternion scaled to unit length.
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> Self {
        *self / self.length()
    }

    /// Whether the squared length equals one within tolerance.
    #[inline]
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.length_squared().fuzzy_eq(&T::one())
    }

    /// Conjugate `[-vector, scalar]`.
    #[inline]
    #[must_use]
    pub fn conjugated(&self) -> Self {
        Self::new(-self.vector, self.scalar)
    }

    /// Inverse `q* / |q|²`.
    #[must_use]
    pub fn inverted(&self) -> Self {
        self.conjugated() / self.length_squared()
    }

    /// Inverse of a unit quaternion, equal to [`conjugated()`](Self::conjugated).
    pub fn try_inverted_normalized(&self) -> MathResult<Self> {
        if !self.is_normalized() {
            return Err(MathError::NotNormalized {
                operation: "Quaternion::inverted_normalized",
                subject: "quaternion",
            });
        }
        Ok(self.conjugated())
    }

    /// [`try_inverted_normalized()`](Self::try_inverted_normalized) under the
    /// process-wide [`PreconditionPolicy`]. The permissive sentinel is the
    /// identity quaternion.
    #[must_use]
    pub fn inverted_normalized(&self) -> Self {
        self.inverted_normalized_with(PreconditionPolicy::current())
    }

    /// [`try_inverted_normalized()`](Self::try_inverted_normalized) under `policy`.
    #[must_use]
    pub fn inverted_normalized_with(&self, policy: PreconditionPolicy) -> Self {
        policy.resolve(self.try_inverted_normalized(), Self::identity)
    }

    /// Rotation angle of a unit quaternion, `2·acos(w)`.
    #[inline]
    #[must_use]
    pub fn rotation_angle(&self) -> T {
        two::<T>() * self.scalar.acos()
    }

    /// Rotation axis of a unit quaternion, `vector / sqrt(1 − w²)`.
    ///
    /// The identity quaternion has no defined axis and yields a NaN vector.
    /// That is the expected result, not an error.
    #[must_use]
    pub fn rotation_axis(&self) -> T::Vec3 {
        self.vector / (T::one() - self.scalar * self.scalar).sqrt()
    }

    /// Rotation matrix of a unit quaternion.
    #[must_use]
    pub fn matrix(&self) -> T::Mat3 {
        let [x, y, z] = T::vec3_to_array(self.vector);
        let w = self.scalar;
        let one = T::one();
        let two = two::<T>();

        T::mat3_from_cols(
            T::vec3(
                one - two * (y * y + z * z),
                two * (x * y + z * w),
                two * (x * z - y * w),
            ),
            T::vec3(
                two * (x * y - z * w),
                one - two * (x * x + z * z),
                two * (y * z + x * w),
            ),
            T::vec3(
                two * (x * z + y * w),
                two * (y * z - x * w),
                one - two * (x * x + y * y),
            ),
        )
    }

    /// Rotates a vector, `(q·[v, 0]·q⁻¹).vector`.
    ///
    /// Works for quaternions of any non-zero length.
    #[must_use]
    pub fn rotate_vector(&self, vector: T::Vec3) -> T::Vec3 {
        (*self * Self::new(vector, T::zero()) * self.inverted()).vector
    }

    /// Rotates a vector with a unit quaternion, `(q·[v, 0]·q*).vector`.
    pub fn try_rotate_vector_normalized(&self, vector: T::Vec3) -> MathResult<T::Vec3> {
        if !self.is_normalized() {
            return Err(MathError::NotNormalized {
                operation: "Quaternion::rotate_vector_normalized",
                subject: "quaternion",
            });
        }
        Ok((*self * Self::new(vector, T::zero()) * self.conjugated()).vector)
    }

    /// [`try_rotate_vector_normalized()`](Self::try_rotate_vector_normalized)
    /// under the process-wide [`PreconditionPolicy`]. The permissive sentinel
    /// is a NaN vector.
    #[must_use]
    pub fn rotate_vector_normalized(&self, vector: T::Vec3) -> T::Vec3 {
        self.rotate_vector_normalized_with(vector, PreconditionPolicy::current())
    }

    /// [`try_rotate_vector_normalized()`](Self::try_rotate_vector_normalized)
    /// under `policy`.
    #[must_use]
    pub fn rotate_vector_normalized_with(
        &self,
        vector: T::Vec3,
        policy: PreconditionPolicy,
    ) -> T::Vec3 {
        policy.resolve(self.try_rotate_vector_normalized(vector), T::vec3_nan)
    }
}

impl<T: Scalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> Zero for Quaternion<T> {
    fn zero() -> Self {
        Self::new(T::Vec3::default(), T::zero())
    }

    fn is_zero(&self) -> bool {
        self.vector == T::Vec3::default() && self.scalar.is_zero()
    }
}

impl<T: Scalar> Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.vector + rhs.vector, self.scalar + rhs.scalar)
    }
}

impl<T: Scalar> Sub for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.vector - rhs.vector, self.scalar - rhs.scalar)
    }
}

impl<T: Scalar> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.vector, -self.scalar)
    }
}

/// Hamilton product. Not commutative.
impl<T: Scalar> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            rhs.vector * self.scalar
                + self.vector * rhs.scalar
                + T::vec3_cross(self.vector, rhs.vector),
            self.scalar * rhs.scalar - T::vec3_dot(self.vector, rhs.vector),
        )
    }
}

impl<T: Scalar> Mul<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.vector * rhs, self.scalar * rhs)
    }
}

impl<T: Scalar> Div<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.vector / rhs, self.scalar / rhs)
    }
}

impl<T: Scalar> FuzzyEq for Quaternion<T> {
    fn fuzzy_eq(&self, other: &Self) -> bool {
        self.vector.fuzzy_eq(&other.vector) && self.scalar.fuzzy_eq(&other.scalar)
    }
}

impl From<glam::Quat> for Quaternion<f32> {
    fn from(q: glam::Quat) -> Self {
        Self::new(glam::Vec3::new(q.x, q.y, q.z), q.w)
    }
}

impl From<Quaternion<f32>> for glam::Quat {
    fn from(q: Quaternion<f32>) -> Self {
        glam::Quat::from_xyzw(q.vector.x, q.vector.y, q.vector.z, q.scalar)
    }
}

impl From<glam::DQuat> for Quaternion<f64> {
    fn from(q: glam::DQuat) -> Self {
        Self::new(glam::DVec3::new(q.x, q.y, q.z), q.w)
    }
}

impl From<Quaternion<f64>> for glam::DQuat {
    fn from(q: Quaternion<f64>) -> Self {
        glam::DQuat::from_xyzw(q.vector.x, q.vector.y, q.vector.z, q.scalar)
    }
}
