use std::fmt::Display;

use crate::*;

/// 3D cylinder, axis along the local Y axis
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Cylinder<T: Real> {
    pub center      : Vec3<T>,
    pub half_height : T,
    pub radius      : T
}

impl<T: Real> Cylinder<T> {
    /// Create a new cylinder
    #[inline]
    #[must_use]
    pub fn new(center: Vec3<T>, half_height: T, radius: T) -> Self {
        Self { center, half_height, radius }
    }

    /// Convert the cylinder to a tapered cylinder with equal radii
    #[inline]
    #[must_use]
    pub fn to_tapered(self) -> TaperedCylinder<T> {
        TaperedCylinder { center: self.center, half_height: self.half_height, top_radius: self.radius, bottom_radius: self.radius }
    }
}

impl<T: Real> ApproxEq<T> for Cylinder<T> {
    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.center.is_close_to(rhs.center, epsilon) &&
        self.half_height.is_close_to(rhs.half_height, epsilon) &&
        self.radius.is_close_to(rhs.radius, epsilon)
    }

    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_close_to(rhs, T::EPSILON)
    }
}

impl<T: Real + Display> Display for Cylinder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ c: {}, hh: {}, r: {} }}", self.center, self.half_height, self.radius))
    }
}

/// 3D tapered cylinder, axis along the local Y axis, with the radius interpolating linearly
/// from `bottom_radius` at `-half_height` to `top_radius` at `+half_height`
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TaperedCylinder<T: Real> {
    pub center        : Vec3<T>,
    pub half_height   : T,
    pub top_radius    : T,
    pub bottom_radius : T
}

impl<T: Real> TaperedCylinder<T> {
    /// Create a new tapered cylinder
    #[inline]
    #[must_use]
    pub fn new(center: Vec3<T>, half_height: T, top_radius: T, bottom_radius: T) -> Self {
        Self { center, half_height, top_radius, bottom_radius }
    }

    /// Get the radius at a given height in `[-half_height, half_height]`
    #[inline]
    #[must_use]
    pub fn radius_at(self, y: T) -> T {
        let t = (y + self.half_height) / (self.half_height * T::from_i32(2));
        self.bottom_radius + (self.top_radius - self.bottom_radius) * t
    }
}

impl<T: Real> ApproxEq<T> for TaperedCylinder<T> {
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

impl<T: Real + Display> Display for TaperedCylinder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ c: {}, hh: {}, rt: {}, rb: {} }}", self.center, self.half_height, self.top_radius, self.bottom_radius))
    }
}

impl<T: Real> From<Cylinder<T>> for TaperedCylinder<T> {
    fn from(cylinder: Cylinder<T>) -> Self {
        cylinder.to_tapered()
    }
}
