//! Dual quaternions for rigid body transformations.
//!
//! A dual quaternion `q̂ = q₀ + ε·q_ε` encodes a rotation and a translation
//! as one 8-scalar value. For a rigid transform, `q₀` is the unit rotation
//! quaternion and `q_ε = ½·[t, 0]·q₀`. Transforms compose by multiplication,
//! and points are transformed without going through a matrix.
//!
//! There are three conjugations:
//!
//! | Method | Result |
//! |---|---|
//! | [`quaternion_conjugated`](DualQuaternion::quaternion_conjugated) | `q₀* + ε·q_ε*` |
//! | [`dual_conjugated`](DualQuaternion::dual_conjugated) | `q₀ − ε·q_ε` |
//! | [`conjugated`](DualQuaternion::conjugated) | `q₀* − ε·q_ε*` |

use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::dual::Dual;
use crate::error::{MathError, MathResult};
use crate::options::PreconditionPolicy;
use crate::quaternion::Quaternion;
use crate::scalar::{pow, sqrt, two, FuzzyEq, Scalar, Vector3};

/// A dual quaternion representing a rigid body transformation.
///
/// The default value is the identity transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent, bound = "T: Scalar")]
pub struct DualQuaternion<T: Scalar> {
    inner: Dual<Quaternion<T>>,
}

impl<T: Scalar> DualQuaternion<T> {
    /// Creates a dual quaternion from its real and dual parts.
    #[inline]
    pub fn new(real: Quaternion<T>, dual: Quaternion<T>) -> Self {
        Self::from_dual(Dual::new(real, dual))
    }

    /// Wraps the result of generic dual-number arithmetic.
    #[inline]
    pub(crate) fn from_dual(inner: Dual<Quaternion<T>>) -> Self {
        Self { inner }
    }

    /// The identity transform `[0, 1] + ε[0, 0]`.
    #[inline]
    pub fn identity() -> Self {
        Self::new(Quaternion::identity(), Quaternion::zero())
    }

    /// Pure rotation `[a·sin(θ/2), cos(θ/2)] + ε[0, 0]`.
    ///
    /// Counterclockwise by `angle` radians about `normalized_axis`. The axis
    /// is not normalized here.
    pub fn rotation<V: Vector3<Scalar = T>>(angle: T, normalized_axis: V) -> Self {
        Self::new(Quaternion::rotation(angle, normalized_axis), Quaternion::zero())
    }

    /// Pure translation `[0, 1] + ε[v/2, 0]`.
    pub fn translation<V: Vector3<Scalar = T>>(vector: V) -> Self {
        Self::new(
            Quaternion::identity(),
            Quaternion::new(vector.into_vec3() / two::<T>(), T::zero()),
        )
    }

    /// Embeds a point as `[0, 1] + ε[v, 0]`, the form consumed by
    /// [`transform_point`](Self::transform_point).
    pub fn from_vector<V: Vector3<Scalar = T>>(vector: V) -> Self {
        Self::new(Quaternion::identity(), Quaternion::new(vector, T::zero()))
    }

    /// Rotation followed by translation.
    ///
    /// Equivalent to `translation(translation) * DualQuaternion::new(rotation, 0)`.
    /// The rotation is expected to be normalized.
    pub fn from_rotation_translation<V: Vector3<Scalar = T>>(
        rotation: Quaternion<T>,
        translation: V,
    ) -> Self {
        let t = Quaternion::new(translation, T::zero());
        Self::new(rotation, t * rotation * (T::one() / two::<T>()))
    }

    /// Splits a rigid transform into its rotation quaternion and translation.
    #[must_use]
    pub fn to_rotation_translation(&self) -> (Quaternion<T>, T::Vec3) {
        (self.real(), self.translation_vector())
    }

    /// Real part, the rotation.
    #[inline]
    #[must_use]
    pub fn real(&self) -> Quaternion<T> {
        self.inner.real()
    }

    /// Dual part.
    #[inline]
    #[must_use]
    pub fn dual(&self) -> Quaternion<T> {
        self.inner.dual()
    }

    /// The underlying dual number.
    #[inline]
    #[must_use]
    pub fn as_dual(&self) -> Dual<Quaternion<T>> {
        self.inner
    }

    /// Rotation angle, `2·acos(q₀.w)`. Expects a normalized real part.
    #[inline]
    #[must_use]
    pub fn rotation_angle(&self) -> T {
        self.real().rotation_angle()
    }

    /// Rotation axis. Expects a normalized real part.
    ///
    /// Returns a NaN vector when there is no rotation, see
    /// [`Quaternion::rotation_axis`].
    #[inline]
    #[must_use]
    pub fn rotation_axis(&self) -> T::Vec3 {
        self.real().rotation_axis()
    }

    /// Translation, `2·(q_ε·q₀*).vector`.
    #[must_use]
    pub fn translation_vector(&self) -> T::Vec3 {
        (self.dual() * self.real().conjugated()).vector() * two::<T>()
    }

    /// Homogeneous 4×4 transformation matrix.
    #[must_use]
    pub fn matrix(&self) -> T::Mat4 {
        T::mat4_from_rotation_translation(self.real().matrix(), self.translation_vector())
    }

    /// Quaternion conjugate `q₀* + ε·q_ε*`.
    #[must_use]
    pub fn quaternion_conjugated(&self) -> Self {
        Self::new(self.real().conjugated(), self.dual().conjugated())
    }

    /// Dual conjugate `q₀ − ε·q_ε`.
    #[must_use]
    pub fn dual_conjugated(&self) -> Self {
        Self::from_dual(self.inner.conjugated())
    }

    /// Quaternion and dual conjugate `q₀* − ε·q_ε* = q₀* + ε[q_ε.vector, −q_ε.w]`.
    #[must_use]
    pub fn conjugated(&self) -> Self {
        let dual = self.dual();
        Self::new(
            self.real().conjugated(),
            Quaternion::new(dual.vector(), -dual.scalar()),
        )
    }

    /// Squared length `q₀·q₀ + ε·2(q₀·q_ε)`, without a square root.
    #[must_use]
    pub fn length_squared(&self) -> Dual<T> {
        let real = self.real();
        Dual::new(real.dot(real), two::<T>() * real.dot(self.dual()))
    }

    /// Length `|q₀| + ε·(q₀·q_ε)/|q₀|`.
    #[must_use]
    pub fn length(&self) -> Dual<T> {
        sqrt(self.length_squared())
    }

    /// Whether [`length_squared`](Self::length_squared) equals `(1, 0)` within tolerance.
    ///
    /// The real part uses [`Scalar::EQUALITY_PRECISION`] as is. The dual part
    /// `2·(q₀·q_ε)` carries rounding error proportional to `|q₀|·|q_ε|`, so its
    /// tolerance is scaled by `max(1, 2·|q₀|·|q_ε|)`.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        let real = self.real();
        let length_squared = self.length_squared();
        let scale = T::one().max(two::<T>() * real.length() * self.dual().length());
        length_squared.real().fuzzy_eq(&T::one())
            && length_squared.dual().abs() < T::EQUALITY_PRECISION * scale
    }

    /// Dual quaternion of unit length, `q̂ / |q̂|`.
    ///
    /// The length must not be close to zero.
    #[must_use]
    pub fn normalized(&self) -> Self {
        *self / self.length()
    }

    /// Inverse `q̂* / |q̂|²`.
    ///
    /// See [`inverted_normalized`](Self::inverted_normalized) for the faster
    /// variant for normalized input.
    #[must_use]
    pub fn inverted(&self) -> Self {
        self.quaternion_conjugated() / pow(self.length(), 2)
    }

    /// Inverse of a normalized dual quaternion, equal to
    /// [`quaternion_conjugated`](Self::quaternion_conjugated).
    pub fn try_inverted_normalized(&self) -> MathResult<Self> {
        if !self.is_normalized() {
            return Err(MathError::NotNormalized {
                operation: "DualQuaternion::inverted_normalized",
                subject: "dual quaternion",
            });
        }
        Ok(self.quaternion_conjugated())
    }

    /// [`try_inverted_normalized`](Self::try_inverted_normalized) under the
    /// process-wide [`PreconditionPolicy`]. The permissive sentinel is the
    /// identity.
    #[must_use]
    pub fn inverted_normalized(&self) -> Self {
        self.inverted_normalized_with(PreconditionPolicy::current())
    }

    /// [`try_inverted_normalized`](Self::try_inverted_normalized) under `policy`.
    #[must_use]
    pub fn inverted_normalized_with(&self, policy: PreconditionPolicy) -> Self {
        policy.resolve(self.try_inverted_normalized(), Self::default)
    }

    /// Rotates and translates a point, `q̂·v̂·conj(q̂⁻¹)`.
    ///
    /// Works for any non-degenerate dual quaternion at the cost of a full
    /// inverse.
    #[must_use]
    pub fn transform_point(&self, vector: T::Vec3) -> T::Vec3 {
        (*self * Self::from_vector(vector) * self.inverted().dual_conjugated())
            .dual()
            .vector()
    }

    /// Rotates and translates a point with a normalized dual quaternion,
    /// `q̂·v̂·conj(q̂*)`.
    pub fn try_transform_point_normalized(&self, vector: T::Vec3) -> MathResult<T::Vec3> {
        if !self.is_normalized() {
            return Err(MathError::NotNormalized {
                operation: "DualQuaternion::transform_point_normalized",
                subject: "dual quaternion",
            });
        }
        Ok((*self * Self::from_vector(vector) * self.conjugated())
            .dual()
            .vector())
    }

    /// [`try_transform_point_normalized`](Self::try_transform_point_normalized)
    /// under the process-wide [`PreconditionPolicy`]. The permissive sentinel
    /// is a NaN vector.
    #[must_use]
    pub fn transform_point_normalized(&self, vector: T::Vec3) -> T::Vec3 {
        self.transform_point_normalized_with(vector, PreconditionPolicy::current())
    }

    /// [`try_transform_point_normalized`](Self::try_transform_point_normalized)
    /// under `policy`.
    #[must_use]
    pub fn transform_point_normalized_with(
        &self,
        vector: T::Vec3,
        policy: PreconditionPolicy,
    ) -> T::Vec3 {
        policy.resolve(self.try_transform_point_normalized(vector), T::vec3_nan)
    }
}

impl<T: Scalar> Default for DualQuaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> From<Dual<Quaternion<T>>> for DualQuaternion<T> {
    fn from(dual: Dual<Quaternion<T>>) -> Self {
        Self::from_dual(dual)
    }
}

impl<T: Scalar> Add for DualQuaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_dual(self.inner + rhs.inner)
    }
}

impl<T: Scalar> Sub for DualQuaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_dual(self.inner - rhs.inner)
    }
}

impl<T: Scalar> Neg for DualQuaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_dual(-self.inner)
    }
}

/// Composition. `a * b` applies `b` first, then `a`.
impl<T: Scalar> Mul for DualQuaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_dual(self.inner * rhs.inner)
    }
}

impl<T: Scalar> Mul<Dual<T>> for DualQuaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Dual<T>) -> Self {
        Self::from_dual(self.inner * rhs)
    }
}

impl<T: Scalar> Div<Dual<T>> for DualQuaternion<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Dual<T>) -> Self {
        Self::from_dual(self.inner / rhs)
    }
}

impl<T: Scalar> Mul<T> for DualQuaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.real() * rhs, self.dual() * rhs)
    }
}

impl<T: Scalar> Div<T> for DualQuaternion<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.real() / rhs, self.dual() / rhs)
    }
}

impl<T: Scalar> FuzzyEq for DualQuaternion<T> {
    fn fuzzy_eq(&self, other: &Self) -> bool {
        self.inner.fuzzy_eq(&other.inner)
    }
}
