//! 4D Vector type

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::{MathError, Scalar, Vec2, Vec3};

/// Single-precision 4D vector
pub type Vector4D = Vec4<f32>;

/// 4D Vector with x, y, z, w components
///
/// Generic over any [`Scalar`]. Arithmetic never checks its divisors: float
/// instantiations propagate NaN/inf and integer instantiations panic, exactly
/// like the underlying scalar. Use the `try_*` / `checked_*` methods to get a
/// [`MathError::DivisionByZero`] instead.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

// SAFETY: `repr(C)` with four fields of the same type leaves no padding.
unsafe impl<T: Zeroable> Zeroable for Vec4<T> {}
unsafe impl<T: Pod> Pod for Vec4<T> {}

impl<T> Vec4<T> {
    /// Create a new Vec4
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }
}

impl<T: Scalar> Vec4<T> {
    /// All components zero
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Broadcast one value to all four components
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::new(value, value, value, value)
    }

    /// Widen a Vec2 with explicit z and w
    #[inline]
    pub fn from_vec2(v: Vec2<T>, z: T, w: T) -> Self {
        Self::new(v.x, v.y, z, w)
    }

    /// Widen a Vec3 with an explicit w
    #[inline]
    pub fn from_vec3(v: Vec3<T>, w: T) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// The x component
    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    /// The y component
    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    /// The z component
    #[inline]
    pub fn z(&self) -> T {
        self.z
    }

    /// The w component
    #[inline]
    pub fn w(&self) -> T {
        self.w
    }

    /// Overwrite the x component
    #[inline]
    pub fn set_x(&mut self, value: T) {
        self.x = value;
    }

    /// Overwrite the y component
    #[inline]
    pub fn set_y(&mut self, value: T) {
        self.y = value;
    }

    /// Overwrite the z component
    #[inline]
    pub fn set_z(&mut self, value: T) {
        self.z = value;
    }

    /// Overwrite the w component
    #[inline]
    pub fn set_w(&mut self, value: T) {
        self.w = value;
    }

    // In-place arithmetic. Every mutator returns `&mut Self` so calls chain:
    // `v.add_scalar(1.0).multiply_vec(scale)`.

    /// Component-wise addition of another vector
    pub fn add_vec(&mut self, other: Self) -> &mut Self {
        self.add_xyzw(other.x, other.y, other.z, other.w)
    }

    /// Add the same value to every component
    pub fn add_scalar(&mut self, value: T) -> &mut Self {
        self.add_xyzw(value, value, value, value)
    }

    /// Add a separate value to each component
    pub fn add_xyzw(&mut self, x: T, y: T, z: T, w: T) -> &mut Self {
        self.x = self.x + x;
        self.y = self.y + y;
        self.z = self.z + z;
        self.w = self.w + w;
        self
    }

    /// Component-wise subtraction of another vector
    pub fn subtract_vec(&mut self, other: Self) -> &mut Self {
        self.subtract_xyzw(other.x, other.y, other.z, other.w)
    }

    /// Subtract the same value from every component
    pub fn subtract_scalar(&mut self, value: T) -> &mut Self {
        self.subtract_xyzw(value, value, value, value)
    }

    /// Subtract a separate value from each component
    pub fn subtract_xyzw(&mut self, x: T, y: T, z: T, w: T) -> &mut Self {
        self.x = self.x - x;
        self.y = self.y - y;
        self.z = self.z - z;
        self.w = self.w - w;
        self
    }

    /// Component-wise multiplication (Hadamard product)
    pub fn multiply_vec(&mut self, other: Self) -> &mut Self {
        self.multiply_xyzw(other.x, other.y, other.z, other.w)
    }

    /// Scale every component by the same value
    pub fn multiply_scalar(&mut self, value: T) -> &mut Self {
        self.multiply_xyzw(value, value, value, value)
    }

    /// Scale each component by a separate value
    pub fn multiply_xyzw(&mut self, x: T, y: T, z: T, w: T) -> &mut Self {
        self.x = self.x * x;
        self.y = self.y * y;
        self.z = self.z * z;
        self.w = self.w * w;
        self
    }

    /// Component-wise division by another vector
    pub fn divide_vec(&mut self, other: Self) -> &mut Self {
        self.divide_xyzw(other.x, other.y, other.z, other.w)
    }

    /// Divide every component by the same value
    pub fn divide_scalar(&mut self, value: T) -> &mut Self {
        self.divide_xyzw(value, value, value, value)
    }

    /// Divide each component by a separate value
    pub fn divide_xyzw(&mut self, x: T, y: T, z: T, w: T) -> &mut Self {
        self.x = self.x / x;
        self.y = self.y / y;
        self.z = self.z / z;
        self.w = self.w / w;
        self
    }

    /// Divide by a scalar, rejecting a zero divisor
    pub fn checked_div_scalar(self, value: T) -> Result<Self, MathError> {
        if value == T::zero() {
            log::trace!("checked_div_scalar rejected a zero divisor");
            return Err(MathError::DivisionByZero { operation: "checked_div_scalar" });
        }
        Ok(self / value)
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// True when every component equals zero
    ///
    /// For floats, `-0.0` counts as zero and NaN does not.
    #[inline]
    pub fn is_null(&self) -> bool {
        let zero = T::zero();
        self.x == zero && self.y == zero && self.z == zero && self.w == zero
    }

    /// Every component strictly less than the other's
    #[inline]
    pub fn all_lt(self, other: Self) -> bool {
        self.x < other.x && self.y < other.y && self.z < other.z && self.w < other.w
    }

    /// Every component less than or equal to the other's
    #[inline]
    pub fn all_le(self, other: Self) -> bool {
        self.x <= other.x && self.y <= other.y && self.z <= other.z && self.w <= other.w
    }

    /// Every component strictly greater than the other's
    #[inline]
    pub fn all_gt(self, other: Self) -> bool {
        self.x > other.x && self.y > other.y && self.z > other.z && self.w > other.w
    }

    /// Every component greater than or equal to the other's
    #[inline]
    pub fn all_ge(self, other: Self) -> bool {
        self.x >= other.x && self.y >= other.y && self.z >= other.z && self.w >= other.w
    }

    /// Components as an array
    #[inline]
    pub fn to_array(self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl<T: Float> Vec4<T> {
    /// Largest absolute component, the scale used to keep squares in range
    #[inline]
    fn max_abs_component(self) -> T {
        self.x.abs().max(self.y.abs()).max(self.z.abs()).max(self.w.abs())
    }

    /// Length (Euclidean norm)
    ///
    /// Components are scaled by the largest one before squaring, so tiny and
    /// huge vectors neither underflow to zero nor overflow to infinity.
    pub fn length(self) -> T {
        let scale = self.max_abs_component();
        if scale == T::zero() || !scale.is_finite() {
            return self.length_squared().sqrt();
        }
        (self / scale).length_squared().sqrt() * scale
    }

    /// Alias of [`Vec4::length`]
    #[inline]
    pub fn magnitude(self) -> T {
        self.length()
    }

    /// Normalize to unit length in place
    ///
    /// A zero vector becomes all NaN.
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Copy normalized to unit length
    ///
    /// A zero vector yields all NaN; see [`Vec4::try_normalized`].
    pub fn normalized(self) -> Self {
        let scaled = self / self.max_abs_component();
        scaled / scaled.length_squared().sqrt()
    }

    /// Normalize in place, failing on a zero vector
    ///
    /// On error `self` is left unchanged.
    pub fn try_normalize(&mut self) -> Result<&mut Self, MathError> {
        *self = self.try_normalized()?;
        Ok(self)
    }

    /// Copy normalized to unit length, failing on a zero vector
    pub fn try_normalized(self) -> Result<Self, MathError> {
        if self.max_abs_component() == T::zero() {
            log::trace!("try_normalized called on a zero-length vector");
            return Err(MathError::DivisionByZero { operation: "normalize" });
        }
        Ok(self.normalized())
    }

    /// Euclidean distance between two points
    pub fn distance_to_point(self, other: Self) -> T {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        let dw = self.w - other.w;
        (dx * dx + dy * dy + dz * dz + dw * dw).sqrt()
    }

    /// Distance from this point to the line through `point` along `direction`
    ///
    /// `direction` need not be unit length. A zero direction yields NaN.
    pub fn distance_to_line(self, point: Self, direction: Self) -> T {
        self.distance_to_unit_line(point, direction.normalized())
    }

    /// [`Vec4::distance_to_line`], failing on a zero direction
    pub fn try_distance_to_line(self, point: Self, direction: Self) -> Result<T, MathError> {
        let unit = direction.try_normalized().map_err(|_| {
            log::trace!("try_distance_to_line called with a zero direction");
            MathError::DivisionByZero { operation: "distance_to_line" }
        })?;
        Ok(self.distance_to_unit_line(point, unit))
    }

    fn distance_to_unit_line(self, point: Self, unit: Self) -> T {
        let offset = self - point;
        let along = offset.dot(unit);
        // Cancellation can push this slightly below zero for points on the line.
        // NaN must fall through untouched.
        let rejected = offset.length_squared() - along * along;
        if rejected < T::zero() {
            T::zero()
        } else {
            rejected.sqrt()
        }
    }

    /// Every component within `epsilon` of the other's
    pub fn approx_eq(self, other: Self, epsilon: T) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
            && (self.w - other.w).abs() <= epsilon
    }
}

impl<T: Scalar> Default for Vec4<T> {
    fn default() -> Self {
        Self::zero()
    }
}

// Conversions

impl<T: Scalar> From<Vec2<T>> for Vec4<T> {
    fn from(v: Vec2<T>) -> Self {
        Self::from_vec2(v, T::zero(), T::zero())
    }
}

impl<T: Scalar> From<Vec3<T>> for Vec4<T> {
    fn from(v: Vec3<T>) -> Self {
        Self::from_vec3(v, T::zero())
    }
}

impl<T> From<[T; 4]> for Vec4<T> {
    fn from([x, y, z, w]: [T; 4]) -> Self {
        Self { x, y, z, w }
    }
}

impl<T> From<Vec4<T>> for [T; 4] {
    fn from(v: Vec4<T>) -> Self {
        [v.x, v.y, v.z, v.w]
    }
}

// Ordering: a relation holds only if it holds for every component.

impl<T: Scalar> PartialOrd for Vec4<T> {
    /// `Less`/`Greater` only when every component is strictly less/greater.
    ///
    /// `<=` and `>=` are also component-wise, so `a <= b` can hold while
    /// `partial_cmp` returns `None` (some components equal, the rest less).
    /// Code that orders through `partial_cmp` (sorting, `max_by`) will
    /// therefore disagree with `<=`/`>=`; call `all_le`/`all_ge` explicitly.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.all_lt(*other) {
            Some(Ordering::Less)
        } else if self.all_gt(*other) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }

    fn lt(&self, other: &Self) -> bool {
        self.all_lt(*other)
    }

    fn le(&self, other: &Self) -> bool {
        self.all_le(*other)
    }

    fn gt(&self, other: &Self) -> bool {
        self.all_gt(*other)
    }

    fn ge(&self, other: &Self) -> bool {
        self.all_ge(*other)
    }
}

// Operator overloads

impl<T: Scalar> Add for Vec4<T> {
    type Output = Self;
    #[inline]
    fn add(mut self, other: Self) -> Self {
        self.add_vec(other);
        self
    }
}

impl<T: Scalar> Add<T> for Vec4<T> {
    type Output = Self;
    #[inline]
    fn add(mut self, value: T) -> Self {
        self.add_scalar(value);
        self
    }
}

impl<T: Scalar> AddAssign for Vec4<T> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.add_vec(other);
    }
}

impl<T: Scalar> AddAssign<T> for Vec4<T> {
    #[inline]
    fn add_assign(&mut self, value: T) {
        self.add_scalar(value);
    }
}

impl<T: Scalar> Sub for Vec4<T> {
    type Output = Self;
    #[inline]
    fn sub(mut self, other: Self) -> Self {
        self.subtract_vec(other);
        self
    }
}

impl<T: Scalar> Sub<T> for Vec4<T> {
    type Output = Self;
    #[inline]
    fn sub(mut self, value: T) -> Self {
        self.subtract_scalar(value);
        self
    }
}

impl<T: Scalar> SubAssign for Vec4<T> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.subtract_vec(other);
    }
}

impl<T: Scalar> SubAssign<T> for Vec4<T> {
    #[inline]
    fn sub_assign(&mut self, value: T) {
        self.subtract_scalar(value);
    }
}

impl<T: Scalar> Mul for Vec4<T> {
    type Output = Self;
    #[inline]
    fn mul(mut self, other: Self) -> Self {
        self.multiply_vec(other);
        self
    }
}

impl<T: Scalar> Mul<T> for Vec4<T> {
    type Output = Self;
    #[inline]
    fn mul(mut self, scalar: T) -> Self {
        self.multiply_scalar(scalar);
        self
    }
}

impl<T: Scalar> MulAssign for Vec4<T> {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        self.multiply_vec(other);
    }
}

impl<T: Scalar> MulAssign<T> for Vec4<T> {
    #[inline]
    fn mul_assign(&mut self, scalar: T) {
        self.multiply_scalar(scalar);
    }
}

impl<T: Scalar> Div for Vec4<T> {
    type Output = Self;
    #[inline]
    fn div(mut self, other: Self) -> Self {
        self.divide_vec(other);
        self
    }
}

impl<T: Scalar> Div<T> for Vec4<T> {
    type Output = Self;
    #[inline]
    fn div(mut self, scalar: T) -> Self {
        self.divide_scalar(scalar);
        self
    }
}

impl<T: Scalar> DivAssign for Vec4<T> {
    #[inline]
    fn div_assign(&mut self, other: Self) {
        self.divide_vec(other);
    }
}

impl<T: Scalar> DivAssign<T> for Vec4<T> {
    #[inline]
    fn div_assign(&mut self, scalar: T) {
        self.divide_scalar(scalar);
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for Vec4<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

// Text

impl<T: fmt::Display> fmt::Display for Vec4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "vec4: ({:.*}, {:.*}, {:.*}, {:.*})",
                p, self.x, p, self.y, p, self.z, p, self.w
            ),
            None => write!(f, "vec4: ({}, {}, {}, {})", self.x, self.y, self.z, self.w),
        }
    }
}

/// Accepts the `Display` form `vec4: (x, y, z, w)` or a bare `x,y,z,w` list
impl<T: FromStr> FromStr for Vec4<T> {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut body = s.trim();
        if let Some(rest) = body.strip_prefix("vec4:") {
            body = rest.trim_start();
        }
        if let Some(inner) = body.strip_prefix('(').and_then(|b| b.strip_suffix(')')) {
            body = inner;
        }

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(MathError::Parse(format!(
                "expected 4 components in '{}', found {}",
                s.trim(),
                parts.len()
            )));
        }

        let parse = |part: &str| {
            part.parse::<T>()
                .map_err(|_| MathError::Parse(format!("invalid component '{}'", part)))
        };
        Ok(Self::new(
            parse(parts[0])?,
            parse(parts[1])?,
            parse(parts[2])?,
            parse(parts[3])?,
        ))
    }
}
