//! Core algebra for dualquat-rs.
//!
//! This crate provides the types used to represent rigid 3D transformations:
//! - [`Quaternion`] for rotations
//! - [`Dual`] for dual numbers over any algebra, including quaternions
//! - [`DualQuaternion`] for rotation plus translation in one value
//! - Tolerance comparison, diagnostic output, and the precondition policy
//!   applied by the `*_normalized` operations

// Documentation lints - the error cases are described in prose
#![allow(clippy::missing_errors_doc)]
// Short math names like `x`, `y`, `z`, `w` are the convention
#![allow(clippy::many_single_char_names)]
// Constructors returning Self don't need must_use
#![allow(clippy::must_use_candidate)]
// Division of a dual number is implemented through multiplication
#![allow(clippy::suspicious_arithmetic_impl)]

pub mod debug;
pub mod dual;
pub mod dual_quaternion;
pub mod error;
pub mod options;
pub mod quaternion;
pub mod scalar;
pub mod state;

pub use debug::{DebugOutput, DebugPrint};
pub use dual::Dual;
pub use dual_quaternion::DualQuaternion;
pub use error::{MathError, MathResult};
pub use options::{MathOptions, PreconditionPolicy};
pub use quaternion::Quaternion;
pub use scalar::{equals, pow, sqrt, FuzzyEq, Scalar, SquareRoot, Vector3};
pub use state::{reset_options, with_options, with_options_mut};

// Re-export glam types for convenience
pub use glam::{DMat3, DMat4, DVec3, Mat3, Mat4, Vec3};
