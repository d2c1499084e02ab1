use std::fmt::Display;

use crate::*;

/// 3D sphere
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Sphere<T: Real> {
    pub center : Vec3<T>,
    pub radius : T
}

/// Result of a swept sphere test
///
/// `dist` is the parametric position in `[0, 1)` along the displacement at which the
/// spheres first touch, `normal` points from the first sphere towards the impact.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SweepHit<T: Real> {
    pub dist   : T,
    pub normal : Vec3<T>
}

impl<T: Real> Sphere<T> {
    /// Create a new sphere
    #[inline]
    #[must_use]
    pub fn new(center: Vec3<T>, radius: T) -> Self {
        Self { center, radius }
    }

    /// Check if the sphere contains a point
    #[inline]
    #[must_use]
    pub fn contains_point(self, point: Vec3<T>) -> bool {
        self.center.dist_sq(point) <= self.radius * self.radius
    }

    /// Check if 2 spheres overlap (touching counts as overlapping)
    #[inline]
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        let max_dist = self.radius + other.radius;
        self.center.dist_sq(other.center) <= max_dist * max_dist
    }

    /// Calculate the distance between the sphere and a point, 0 if the point is inside
    #[inline]
    #[must_use]
    pub fn dist_to_point(self, point: Vec3<T>) -> T {
        let dist = self.center.dist(point);
        if dist > self.radius { dist - self.radius } else { T::zero() }
    }

    /// Swept sphere test against another sphere moving by `displacement` relative to this one
    ///
    /// Returns the earliest contact within the displacement, or `None` if the spheres never
    /// come within touching distance during it. If the spheres already overlap at the start,
    /// the hit has `dist == 0` and the normal separates the spheres (falling back to the
    /// reversed displacement when the centers coincide).
    pub fn move_hits(self, other: Self, displacement: Vec3<T>) -> Option<SweepHit<T>> {
        let diff = other.center - self.center;
        let radius_sum = self.radius + other.radius;
        let center_dist_sq = diff.len_sq();
        let radius_sum_sq = radius_sum * radius_sum;

        // collision at the beginning of the movement
        if center_dist_sq <= radius_sum_sq {
            let normal = if center_dist_sq <= T::SAFE_EPSILON {
                (-displacement).normalize()
            } else {
                diff.normalize()
            };
            return Some(SweepHit { dist: T::zero(), normal });
        }

        // one or more points on the displacement with the needed distance
        let a = displacement.len_sq();
        if a.is_zero() {
            return None;
        }

        let b = diff.dot(displacement) * T::from_i32(2);
        let c = center_dist_sq - radius_sum_sq;
        let mut disc = b * b - a * c * T::from_i32(4);
        if disc < T::zero() {
            return None;
        }

        // the closer of the two points
        disc = disc.sqrt();
        let factor = (a * T::from_i32(2)).recip();
        let mut lambda = (-b - disc) * factor;
        if lambda < T::zero() {
            lambda = (-b + disc) * factor;
        }

        // only accept a point inside the movement range
        if lambda <= T::zero() || lambda >= T::one() {
            return None;
        }

        let normal = (other.center + displacement * lambda - self.center).normalize();
        Some(SweepHit { dist: lambda, normal })
    }
}

impl<T: Real> ApproxEq<T> for Sphere<T> {
    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.center.is_close_to(rhs.center, epsilon) &&
        self.radius.is_close_to(rhs.radius, epsilon)
    }

    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_close_to(rhs, T::EPSILON)
    }
}

impl<T: Real + Display> Display for Sphere<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ c: {}, r: {} }}", self.center, self.radius))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn overlaps() {
        let a = Sphere::new(Vec3::new(0f64, 0f64, 0f64), 1f64);

        assert!(!a.overlaps(Sphere::new(Vec3::new(3f64, 0f64, 0f64), 1f64)));
        assert!(a.overlaps(Sphere::new(Vec3::new(1.5f64, 0f64, 0f64), 1f64)));

        // touching counts
        assert!(a.overlaps(Sphere::new(Vec3::new(2f64, 0f64, 0f64), 1f64)));
    }

    #[test]
    fn move_hits_overlap_at_start() {
        let a = Sphere::new(Vec3::new(0f64, 0f64, 0f64), 1f64);
        let b = Sphere::new(Vec3::new(1f64, 0f64, 0f64), 1f64);

        let hit = a.move_hits(b, Vec3::new(0f64, 5f64, 0f64)).unwrap();
        assert_eq!(hit.dist, 0f64);
        assert!(hit.normal.is_close_to(Vec3::new(1f64, 0f64, 0f64), 1e-12));

        // coincident centers fall back to the reversed displacement
        let hit = a.move_hits(a, Vec3::new(0f64, 5f64, 0f64)).unwrap();
        assert_eq!(hit.dist, 0f64);
        assert!(hit.normal.is_close_to(Vec3::new(0f64, -1f64, 0f64), 1e-12));
    }

    #[test]
    fn move_hits_approach() {
        let a = Sphere::new(Vec3::new(0f64, 0f64, 0f64), 0.5f64);
        let b = Sphere::new(Vec3::new(3f64, 0f64, 0f64), 0.5f64);

        // b moves towards a far enough to touch at |3 - 2.5 t| == 1, t == 0.8
        let hit = a.move_hits(b, Vec3::new(-2.5f64, 0f64, 0f64)).unwrap();
        assert!(hit.dist.is_close_to(0.8f64, 1e-12));
        assert!(hit.normal.is_close_to(Vec3::new(1f64, 0f64, 0f64), 1e-12));

        // too short a displacement never gets within touching distance
        assert!(a.move_hits(b, Vec3::new(-1f64, 0f64, 0f64)).is_none());

        // moving away
        assert!(a.move_hits(b, Vec3::new(2f64, 0f64, 0f64)).is_none());

        // no displacement at all
        assert!(a.move_hits(b, Vec3::zero()).is_none());
    }
}
