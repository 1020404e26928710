//! Vector/matrix math primitives
//!
//! Pure value types with no hidden state. Degenerate inputs degrade to
//! zero-valued results rather than NaN, so a bad frame never stalls the loop.
//! Dividing a vector or quaternion by zero, with `/` or `/=`, yields zero.

pub mod matrix;
pub mod quaternion;
pub mod scalar;
pub mod vector;

pub use matrix::{Matrix2x2, Matrix3x3, Matrix4x4};
pub use quaternion::Quaternion;
pub use scalar::{EPSILON, approx_eq};
pub use vector::{Vector2, Vector3, Vector4};
