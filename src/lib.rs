//! vec4d - generic 4D vector algebra
//!
//! Re-exports the math crate and adds the layered configuration and the
//! report used by the `vec4d` binary.

pub mod config;
pub mod report;

pub use vec4d_math::{MathError, Scalar, Vec2, Vec3, Vec4, Vector4D};
