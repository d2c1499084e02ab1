use std::fmt::Display;

use crate::*;

/// 3D triangle
///
/// The winding of `p1, p2, p3` determines the normal direction.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Triangle<T: Real> {
    pub p1 : Vec3<T>,
    pub p2 : Vec3<T>,
    pub p3 : Vec3<T>
}

impl<T: Real> Triangle<T> {
    /// Create a new triangle
    #[inline]
    #[must_use]
    pub fn new(p1: Vec3<T>, p2: Vec3<T>, p3: Vec3<T>) -> Self {
        Self { p1, p2, p3 }
    }

    /// Calculate the unit normal of the triangle
    #[inline]
    #[must_use]
    pub fn normal(self) -> Vec3<T> {
        (self.p2 - self.p1).cross(self.p3 - self.p2).normalize()
    }

    /// Check if a point on the triangle's plane lies within the triangle
    ///
    /// The point is assumed to be on the plane already, this is not verified.
    #[inline]
    #[must_use]
    pub fn contains_point(self, point: Vec3<T>) -> bool {
        let normal = (self.p2 - self.p1).cross(self.p3 - self.p2);
        self.contains_point_with_normal(normal, point)
    }

    /// Check if a point on the triangle's plane lies within the triangle, using a precomputed normal
    #[must_use]
    pub fn contains_point_with_normal(self, normal: Vec3<T>, point: Vec3<T>) -> bool {
        let edge1 = self.p2 - self.p1;
        let edge2 = self.p3 - self.p2;
        let edge3 = self.p1 - self.p3;

        if edge1.cross(point - self.p1).dot(normal) < T::zero() { return false; }
        if edge2.cross(point - self.p2).dot(normal) < T::zero() { return false; }
        if edge3.cross(point - self.p3).dot(normal) < T::zero() { return false; }
        true
    }

    /// Get the closest point on the triangle to the given point
    ///
    /// Classifies the point against the vertex, edge and face Voronoi regions of the
    /// triangle, so points out past a corner clamp onto the corner instead of past it.
    #[must_use]
    pub fn closest_point_to(self, point: Vec3<T>) -> Vec3<T> {
        let ab = self.p2 - self.p1;
        let ac = self.p3 - self.p1;

        // vertex region p1
        let ap = point - self.p1;
        let d1 = ab.dot(ap);
        let d2 = ac.dot(ap);
        if d1 <= T::zero() && d2 <= T::zero() {
            return self.p1;
        }

        // vertex region p2
        let bp = point - self.p2;
        let d3 = ab.dot(bp);
        let d4 = ac.dot(bp);
        if d3 >= T::zero() && d4 <= d3 {
            return self.p2;
        }

        // edge region p1-p2
        let vc = d1 * d4 - d3 * d2;
        if vc <= T::zero() && d1 >= T::zero() && d3 <= T::zero() {
            let denom = d1 - d3;
            if denom.is_zero() {
                return self.p1;
            }
            return self.p1 + ab * (d1 / denom);
        }

        // vertex region p3
        let cp = point - self.p3;
        let d5 = ab.dot(cp);
        let d6 = ac.dot(cp);
        if d6 >= T::zero() && d5 <= d6 {
            return self.p3;
        }

        // edge region p1-p3
        let vb = d5 * d2 - d1 * d6;
        if vb <= T::zero() && d2 >= T::zero() && d6 <= T::zero() {
            let denom = d2 - d6;
            if denom.is_zero() {
                return self.p1;
            }
            return self.p1 + ac * (d2 / denom);
        }

        // edge region p2-p3
        let va = d3 * d6 - d5 * d4;
        if va <= T::zero() && d4 - d3 >= T::zero() && d5 - d6 >= T::zero() {
            let denom = (d4 - d3) + (d5 - d6);
            if denom.is_zero() {
                return self.p2;
            }
            return self.p2 + (self.p3 - self.p2) * ((d4 - d3) / denom);
        }

        // face region
        let denom = va + vb + vc;
        if denom.is_zero() {
            // degenerate triangle, the edges cover it
            return self.closest_point_on_edge(point);
        }
        let v = vb / denom;
        let w = vc / denom;
        self.p1 + ab * v + ac * w
    }

    /// Get the closest point on any of the triangle's edges to the given point
    ///
    /// Ties go to the earliest edge in the order p1-p2, p2-p3, p3-p1.
    #[must_use]
    pub fn closest_point_on_edge(self, point: Vec3<T>) -> Vec3<T> {
        let cp12 = LineSegment::new(self.p1, self.p2).closest_point_to(point);
        let cp23 = LineSegment::new(self.p2, self.p3).closest_point_to(point);
        let cp31 = LineSegment::new(self.p3, self.p1).closest_point_to(point);

        let l12 = (point - cp12).len();
        let l23 = (point - cp23).len();
        let l31 = (point - cp31).len();

        let mut min_dist = l12;
        let mut result = cp12;
        if l23 < min_dist {
            min_dist = l23;
            result = cp23;
        }
        if l31 < min_dist {
            result = cp31;
        }
        result
    }
}

impl<T: Real> ApproxEq<T> for Triangle<T> {
    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.p1.is_close_to(rhs.p1, epsilon) &&
        self.p2.is_close_to(rhs.p2, epsilon) &&
        self.p3.is_close_to(rhs.p3, epsilon)
    }

    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_close_to(rhs, T::EPSILON)
    }
}

impl<T: Real + Display> Display for Triangle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ p1: {}, p2: {}, p3: {} }}", self.p1, self.p2, self.p3))
    }
}
