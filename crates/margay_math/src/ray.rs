use std::fmt::Display;

use crate::{Real, ApproxEq, Vec3};

/// 3D ray
///
/// A ray carries the interval of distances on which a hit is accepted: every
/// intersection test in this crate reports a hit parameter `t` only when
/// `min_t <= t <= max_t`. A bounded segment test over a displacement vector is a ray
/// with `[0, 1]` (see [`Ray::segment`]), a picking ray is a ray with `[0, T::MAX]`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Ray<T: Real> {
    pub orig  : Vec3<T>,
    pub min_t : T,
    pub dir   : Vec3<T>,
    pub max_t : T
}

impl<T: Real> Ray<T> {
    /// Create a new ray
    #[inline]
    #[must_use]
    pub fn new(orig: Vec3<T>, dir: Vec3<T>, min: T, max: T) -> Self {
        Self { orig, min_t: min, dir, max_t: max }
    }

    /// Create a new ray from just an origin and a direction, implicitly sets `min_t == 0` and `max_t == T::MAX`
    #[inline]
    #[must_use]
    pub fn from_orig_and_dir(orig: Vec3<T>, dir: Vec3<T>) -> Self {
        Self { orig, min_t: T::zero(), dir, max_t: T::MAX }
    }

    /// Create a ray covering the segment from `orig` to `orig + displacement`
    ///
    /// `dir` is the full displacement, so hit parameters map onto `[0, 1]` over the segment.
    #[inline]
    #[must_use]
    pub fn segment(orig: Vec3<T>, displacement: Vec3<T>) -> Self {
        Self { orig, min_t: T::zero(), dir: displacement, max_t: T::one() }
    }

    /// Check if a point at a given distance is on the ray
    #[inline]
    #[must_use]
    pub fn is_on_ray(self, dist: T) -> bool {
        dist >= self.min_t && dist <= self.max_t
    }

    /// Get the point at a given distance on the ray
    #[inline]
    #[must_use]
    pub fn point_at(self, dist: T) -> Vec3<T> {
        self.orig + self.dir * dist
    }

    /// Clamp the given ray param so it fits on the ray
    #[inline]
    #[must_use]
    pub fn clamp_dist(self, dist: T) -> T {
        dist.clamp(self.min_t, self.max_t)
    }

    /// Get the closest point on the infinite line through the ray to the given point
    ///
    /// `dir` must be normalized; the result is not clamped to `[min_t, max_t]`.
    #[must_use]
    pub fn closest_point_to(self, point: Vec3<T>) -> Vec3<T> {
        debug_assert!(self.dir.is_normalized());
        self.orig + self.dir * self.dir.dot(point - self.orig)
    }

    /// Calculate the perpendicular distance from the given point to the infinite line through the ray
    ///
    /// `dir` must be normalized.
    #[must_use]
    pub fn dist_to_point(self, point: Vec3<T>) -> T {
        debug_assert!(self.dir.is_normalized());
        let offset = point - self.orig;
        (offset - self.dir * self.dir.dot(offset)).len()
    }
}

impl<T: Real> ApproxEq<T> for Ray<T> {
    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.orig.is_close_to(rhs.orig, epsilon) &&
        self.min_t.is_close_to(rhs.min_t, epsilon) &&
        self.dir.is_close_to(rhs.dir, epsilon) &&
        self.max_t.is_close_to(rhs.max_t, epsilon)
    }

    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_close_to(rhs, T::EPSILON)
    }
}

impl<T: Real + Display> Display for Ray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ o: {}, d: {}, t: [{}, {}] }}", self.orig, self.dir, self.min_t, self.max_t))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn closest_point() {
        let ray = Ray::from_orig_and_dir(Vec3::new(1f64, 0f64, 0f64), Vec3::new(0f64, 0f64, 1f64));

        let closest = ray.closest_point_to(Vec3::new(4f64, 2f64, 3f64));
        assert!(closest.is_close_to(Vec3::new(1f64, 0f64, 3f64), 1e-12));

        // projection is not clamped, points behind the origin project to negative distances
        let closest = ray.closest_point_to(Vec3::new(0f64, 0f64, -5f64));
        assert!(closest.is_close_to(Vec3::new(1f64, 0f64, -5f64), 1e-12));
    }

    #[test]
    fn point_distance() {
        let ray = Ray::from_orig_and_dir(Vec3::new(0f64, 0f64, 0f64), Vec3::new(1f64, 0f64, 0f64));

        assert!(ray.dist_to_point(Vec3::new(7f64, 3f64, 4f64)).is_close_to(5f64, 1e-12));
        assert!(ray.dist_to_point(Vec3::new(-2f64, 0f64, 0f64)).is_close_to(0f64, 1e-12));
    }
}
