use std::{
    ops::*,
    fmt::Display
};
use crate::*;

/// 3D vector
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Vec3<T: Real> {
    pub x : T,
    pub y : T,
    pub z : T
}

impl<T: Real> Vec3<T> {
    /// Create a new vector
    #[inline(always)]
    #[must_use]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Create a vector with all components set to `val`
    #[inline(always)]
    #[must_use]
    pub fn set(val: T) -> Self {
        Self { x: val, y: val, z: val }
    }

    /// Calculate the dot product of 2 vectors
    #[inline]
    #[must_use]
    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Calculate the cross product of 2 vectors
    #[inline]
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        Self { x: self.y * rhs.z - self.z * rhs.y,
               y: self.z * rhs.x - self.x * rhs.z,
               z: self.x * rhs.y - self.y * rhs.x }
    }

    /// Calculate the square length of the vector
    #[inline]
    #[must_use]
    pub fn len_sq(self) -> T {
        self.dot(self)
    }

    /// Calculate the length of the vector
    #[inline]
    #[must_use]
    pub fn len(self) -> T {
        self.len_sq().sqrt()
    }

    /// Calculate the square distance between 2 vectors
    #[inline]
    #[must_use]
    pub fn dist_sq(self, other: Self) -> T {
        (other - self).len_sq()
    }

    /// Calculate the distance between 2 vectors
    #[inline]
    #[must_use]
    pub fn dist(self, other: Self) -> T {
        self.dist_sq(other).sqrt()
    }

    /// Normalize the vector, returns the zero vector if the length is 0
    #[must_use]
    pub fn normalize(self) -> Self {
        if self.is_zero() {
            self
        } else {
            self * self.len().recip()
        }
    }

    /// Normalize the vector if the length is not 0, return `or` otherwise
    #[must_use]
    pub fn normalize_or(self, or: Self) -> Self {
        if self.is_zero() {
            or
        } else {
            self.normalize()
        }
    }

    /// Check if the vector has a length close to 1
    #[inline]
    #[must_use]
    pub fn is_normalized(self) -> bool {
        self.len_sq().is_close_to(T::one(), T::from_f64(1e-5))
    }

    /// Linearly interpolate between 2 vectors
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Self, val: T) -> Self {
        self + (other - self) * val
    }

    /// Get the component-wise minimum of 2 vectors
    #[inline]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self { x: self.x.min(other.x), y: self.y.min(other.y), z: self.z.min(other.z) }
    }

    /// Get the component-wise maximum of 2 vectors
    #[inline]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self { x: self.x.max(other.x), y: self.y.max(other.y), z: self.z.max(other.z) }
    }

    /// Get the component-wise absolute value of the vector
    #[inline]
    #[must_use]
    pub fn abs(self) -> Self {
        Self { x: self.x.abs(), y: self.y.abs(), z: self.z.abs() }
    }
}

impl<T: Real> Zero for Vec3<T> {
    fn zero() -> Self {
        Self { x: T::zero(), y: T::zero(), z: T::zero() }
    }
}

impl<T: Real> Add for Vec3<T> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<T: Real> AddAssign for Vec3<T> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl<T: Real> Sub for Vec3<T> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<T: Real> SubAssign for Vec3<T> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl<T: Real> Mul<T> for Vec3<T> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: T) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs }
    }
}

impl<T: Real> MulAssign<T> for Vec3<T> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: T) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl<T: Real> Div<T> for Vec3<T> {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: T) -> Self {
        Self { x: self.x / rhs, y: self.y / rhs, z: self.z / rhs }
    }
}

impl<T: Real> DivAssign<T> for Vec3<T> {
    #[inline(always)]
    fn div_assign(&mut self, rhs: T) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

impl<T: Real> Neg for Vec3<T> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y, z: -self.z }
    }
}

impl<T: Real> ApproxEq<T> for Vec3<T> {
    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.x.is_close_to(rhs.x, epsilon) &&
        self.y.is_close_to(rhs.y, epsilon) &&
        self.z.is_close_to(rhs.z, epsilon)
    }

    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_close_to(rhs, T::EPSILON)
    }
}

impl<T: Real> ApproxZero<T> for Vec3<T> {
    fn is_close_to_zero(self, epsilon: T) -> bool {
        self.x.is_close_to_zero(epsilon) &&
        self.y.is_close_to_zero(epsilon) &&
        self.z.is_close_to_zero(epsilon)
    }

    fn is_zero(self) -> bool {
        self.is_close_to_zero(T::EPSILON)
    }
}

impl<T: Real + Display> Display for Vec3<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({}, {}, {})", self.x, self.y, self.z))
    }
}

#[allow(non_camel_case_types)] pub type f32v3 = Vec3<f32>;
#[allow(non_camel_case_types)] pub type f64v3 = Vec3<f64>;
