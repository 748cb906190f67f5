//! 2D Vector type

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::{Scalar, Vec3};

/// 2D Vector with x, y components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

// SAFETY: `repr(C)` with two fields of the same type leaves no padding.
unsafe impl<T: Zeroable> Zeroable for Vec2<T> {}
unsafe impl<T: Pod> Pod for Vec2<T> {}

impl<T> Vec2<T> {
    /// Create a new Vec2
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Vec2<T> {
    /// Widen to a Vec3 with the given z
    #[inline]
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3::new(self.x, self.y, z)
    }
}

impl<T> From<[T; 2]> for Vec2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T: fmt::Display> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "vec2: ({:.*}, {:.*})", p, self.x, p, self.y),
            None => write!(f, "vec2: ({}, {})", self.x, self.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
    }

    #[test]
    fn test_extend() {
        let v = Vec2::new(1, 2).extend(3);
        assert_eq!(v, Vec3::new(1, 2, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec2::new(1.5, -2.0).to_string(), "vec2: (1.5, -2)");
        assert_eq!(format!("{:.1}", Vec2::new(1.0, 2.0)), "vec2: (1.0, 2.0)");
    }
}
