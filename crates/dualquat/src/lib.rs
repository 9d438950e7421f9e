//! dualquat-rs: rigid 3D transformations as dual quaternions.
//!
//! A [`DualQuaternion`] stores a rotation and a translation in eight scalars.
//! Transforms compose by multiplication and transform points directly.
//!
//! # Quick Start
//!
//! ```
//! use dualquat::*;
//! use std::f64::consts::FRAC_PI_2;
//!
//! // Rotate a quarter turn around Z, then move one unit along X
//! let transform =
//!     DualQuaternion::translation(DVec3::X) * DualQuaternion::rotation(FRAC_PI_2, DVec3::Z);
//!
//! let point = transform.transform_point_normalized(DVec3::X);
//! assert!(equals(&point, &DVec3::new(1.0, 1.0, 0.0)));
//! ```
//!
//! # Crates
//!
//! - `dualquat-core`: the algebra, tolerance comparison, diagnostic output
//!   and options
//! - `dualquat-image`: raw pixel buffers to and from TGA bytes
//!
//! # Preconditions
//!
//! The `*_normalized` operations require unit-length input. The `try_*`
//! variants return a [`MathError`]. The plain variants consult the
//! [`PreconditionPolicy`], which either panics or logs and returns a
//! sentinel value.

mod error;
mod init;

pub use error::{Error, Result};
pub use init::{init, init_from_file, init_with, load_options, save_options};

// Re-export core types
pub use dualquat_core::{
    debug::{DebugOutput, DebugPrint},
    equals, pow, reset_options, sqrt, Dual, DualQuaternion, FuzzyEq, MathError, MathOptions,
    MathResult, PreconditionPolicy, Quaternion, Scalar, SquareRoot, Vector3,
};

// Re-export image types
pub use dualquat_image::{
    Image, ImageConverter, ImageError, ImageResult, ImageView, PixelFormat, PixelType,
    TgaImageConverter,
};

pub use glam;
pub use glam::{DMat3, DMat4, DVec3, Mat3, Mat4, Vec3};
