//! 3D Vector type

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::{Scalar, Vec4};

/// 3D Vector with x, y, z components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

// SAFETY: `repr(C)` with three fields of the same type leaves no padding.
unsafe impl<T: Zeroable> Zeroable for Vec3<T> {}
unsafe impl<T: Pod> Pod for Vec3<T> {}

impl<T> Vec3<T> {
    /// Create a new Vec3
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Scalar> Vec3<T> {
    /// Widen to a Vec4 with the given w
    #[inline]
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4::from_vec3(self, w)
    }
}

impl<T> From<[T; 3]> for Vec3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

impl<T: fmt::Display> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "vec3: ({:.*}, {:.*}, {:.*})",
                p, self.x, p, self.y, p, self.z
            ),
            None => write!(f, "vec3: ({}, {}, {})", self.x, self.y, self.z),
        }
    }
}
