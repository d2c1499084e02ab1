use std::fmt::Display;

use crate::*;

/// 3D capsule, axis along the local Y axis, with hemispherical end caps centered at
/// `(0, +-half_height, 0)` in local space
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Capsule<T: Real> {
    pub center      : Vec3<T>,
    pub half_height : T,
    pub radius      : T
}

impl<T: Real> Capsule<T> {
    /// Create a new capsule
    #[inline]
    #[must_use]
    pub fn new(center: Vec3<T>, half_height: T, radius: T) -> Self {
        Self { center, half_height, radius }
    }

    /// Convert the capsule to a tapered capsule with equal cap radii
    #[inline]
    #[must_use]
    pub fn to_tapered(self) -> TaperedCapsule<T> {
        TaperedCapsule { center: self.center, half_height: self.half_height, top_radius: self.radius, bottom_radius: self.radius }
    }
}

impl<T: Real> ApproxEq<T> for Capsule<T> {
    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.center.is_close_to(rhs.center, epsilon) &&
        self.half_height.is_close_to(rhs.half_height, epsilon) &&
        self.radius.is_close_to(rhs.radius, epsilon)
    }

    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_close_to(rhs, T::EPSILON)
    }
}

impl<T: Real + Display> Display for Capsule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ c: {}, hh: {}, r: {} }}", self.center, self.half_height, self.radius))
    }
}

/// 3D tapered capsule, axis along the local Y axis, with the top cap sphere using
/// `top_radius` and the bottom cap sphere using `bottom_radius`
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TaperedCapsule<T: Real> {
    pub center        : Vec3<T>,
    pub half_height   : T,
    pub top_radius    : T,
    pub bottom_radius : T
}

impl<T: Real> TaperedCapsule<T> {
    /// Create a new tapered capsule
    #[inline]
    #[must_use]
    pub fn new(center: Vec3<T>, half_height: T, top_radius: T, bottom_radius: T) -> Self {
        Self { center, half_height, top_radius, bottom_radius }
    }
}

impl<T: Real> ApproxEq<T> for TaperedCapsule<T> {
    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.center.is_close_to(rhs.center, epsilon) &&
        self.half_height.is_close_to(rhs.half_height, epsilon) &&
        self.top_radius.is_close_to(rhs.top_radius, epsilon) &&
        self.bottom_radius.is_close_to(rhs.bottom_radius, epsilon)
    }

    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_close_to(rhs, T::EPSILON)
    }
}

impl<T: Real + Display> Display for TaperedCapsule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ c: {}, hh: {}, rt: {}, rb: {} }}", self.center, self.half_height, self.top_radius, self.bottom_radius))
    }
}

impl<T: Real> From<Capsule<T>> for TaperedCapsule<T> {
    fn from(capsule: Capsule<T>) -> Self {
        capsule.to_tapered()
    }
}
