//! 4D Vector Mathematics Library
//!
//! This crate provides a generic 4-component vector and the lower-dimensional
//! vectors it can be widened from.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Vec3`] / [`Vec2`] - widening sources for [`Vec4`]
//! - [`Scalar`] - numeric bound shared by all vector types
//! - [`MathError`] - errors from the checked operations
//!
//! ## Division policy
//!
//! Plain arithmetic (`/`, `divide_*`, `normalize`, `distance_to_line`) never
//! inspects its divisor: floats yield NaN/inf, integers panic. Every fallible
//! operation has a checked twin (`try_normalize`, `try_normalized`,
//! `try_distance_to_line`, `checked_div_scalar`) returning
//! [`MathError::DivisionByZero`].

mod error;
mod scalar;
mod vec2;
mod vec3;
mod vec4;

pub use error::MathError;
pub use scalar::Scalar;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::{Vec4, Vector4D};
