use std::fmt::Display;

use crate::*;

/// Result of classifying an AABB against another AABB
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AabbClassification {
    /// The boxes do not touch
    Outside,
    /// The boxes overlap without either fully containing the first
    Partial,
    /// The first box lies fully inside the second
    Inside
}

/// 3D axis aligned bounding box
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Aabb<T: Real> {
    pub min : Vec3<T>,
    pub max : Vec3<T>
}

impl<T: Real> Aabb<T> {
    /// Create a new aabb from its extents
    #[inline]
    #[must_use]
    pub fn new(min: Vec3<T>, max: Vec3<T>) -> Self {
        Self { min, max }
    }

    /// Create an aabb from its center and half extent
    #[inline]
    #[must_use]
    pub fn from_center_half_extent(center: Vec3<T>, half_extent: Vec3<T>) -> Self {
        Self { min: center - half_extent, max: center + half_extent }
    }

    /// Get the size of the aabb
    #[inline]
    #[must_use]
    pub fn size(self) -> Vec3<T> {
        self.max - self.min
    }

    /// Get the center of the aabb
    #[inline]
    #[must_use]
    pub fn center(self) -> Vec3<T> {
        (self.min + self.max) / T::from_i32(2)
    }

    /// Get the half extent of the aabb
    #[inline]
    #[must_use]
    pub fn half_extent(self) -> Vec3<T> {
        self.size() / T::from_i32(2)
    }

    /// Create the smallest aabb fitting both aabbs
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self { min: self.min.min(other.min), max: self.max.max(other.max) }
    }

    /// Check if the aabb contains a point
    #[inline]
    #[must_use]
    pub fn contains_point(self, point: Vec3<T>) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y &&
        point.z >= self.min.z && point.z <= self.max.z
    }

    /// Classify how this aabb relates to another aabb
    ///
    /// [`AabbClassification::Inside`] means this aabb lies fully inside `other`.
    #[must_use]
    pub fn classify(self, other: Self) -> AabbClassification {
        if self.max.x < other.min.x { return AabbClassification::Outside; }
        if self.max.y < other.min.y { return AabbClassification::Outside; }
        if self.max.z < other.min.z { return AabbClassification::Outside; }

        if self.min.x > other.max.x { return AabbClassification::Outside; }
        if self.min.y > other.max.y { return AabbClassification::Outside; }
        if self.min.z > other.max.z { return AabbClassification::Outside; }

        if self.min.x < other.min.x { return AabbClassification::Partial; }
        if self.min.y < other.min.y { return AabbClassification::Partial; }
        if self.min.z < other.min.z { return AabbClassification::Partial; }

        if self.max.x > other.max.x { return AabbClassification::Partial; }
        if self.max.y > other.max.y { return AabbClassification::Partial; }
        if self.max.z > other.max.z { return AabbClassification::Partial; }

        AabbClassification::Inside
    }
}

impl<T: Real> ApproxEq<T> for Aabb<T> {
    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.min.is_close_to(rhs.min, epsilon) &&
        self.max.is_close_to(rhs.max, epsilon)
    }

    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_close_to(rhs, T::EPSILON)
    }
}

impl<T: Real + Display> Display for Aabb<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ min: {}, max: {} }}", self.min, self.max))
    }
}
