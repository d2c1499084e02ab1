use std::fmt::Display;

use crate::*;

/// 3D quad
///
/// Assumed planar and convex with a consistent winding of `p1, p2, p3, p4`; this is not
/// validated.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Quad<T: Real> {
    pub p1 : Vec3<T>,
    pub p2 : Vec3<T>,
    pub p3 : Vec3<T>,
    pub p4 : Vec3<T>
}

impl<T: Real> Quad<T> {
    /// Create a new quad
    #[inline]
    #[must_use]
    pub fn new(p1: Vec3<T>, p2: Vec3<T>, p3: Vec3<T>, p4: Vec3<T>) -> Self {
        Self { p1, p2, p3, p4 }
    }

    /// Calculate the unit normal of the quad
    #[inline]
    #[must_use]
    pub fn normal(self) -> Vec3<T> {
        (self.p2 - self.p1).cross(self.p3 - self.p2).normalize()
    }

    /// Split the quad into 2 triangles along the p1-p3 diagonal
    #[inline]
    #[must_use]
    pub fn triangles(self) -> (Triangle<T>, Triangle<T>) {
        (Triangle::new(self.p1, self.p2, self.p3), Triangle::new(self.p1, self.p3, self.p4))
    }

    /// Check if a point on the quad's plane lies within the quad
    ///
    /// The point is assumed to be on the plane already, this is not verified.
    #[must_use]
    pub fn contains_point(self, point: Vec3<T>) -> bool {
        let (tri1, tri2) = self.triangles();
        tri1.contains_point(point) || tri2.contains_point(point)
    }

    /// Get the closest point on the quad to the given point
    #[must_use]
    pub fn closest_point_to(self, point: Vec3<T>) -> Vec3<T> {
        let (tri1, tri2) = self.triangles();
        let cp1 = tri1.closest_point_to(point);
        let cp2 = tri2.closest_point_to(point);

        if (point - cp2).len_sq() < (point - cp1).len_sq() {
            cp2
        } else {
            cp1
        }
    }

    /// Get the closest point on any of the quad's edges to the given point
    ///
    /// Ties go to the earliest edge in the order p1-p2, p2-p3, p3-p4, p4-p1.
    #[must_use]
    pub fn closest_point_on_edge(self, point: Vec3<T>) -> Vec3<T> {
        let cp12 = LineSegment::new(self.p1, self.p2).closest_point_to(point);
        let cp23 = LineSegment::new(self.p2, self.p3).closest_point_to(point);
        let cp34 = LineSegment::new(self.p3, self.p4).closest_point_to(point);
        let cp41 = LineSegment::new(self.p4, self.p1).closest_point_to(point);

        let l12 = (point - cp12).len();
        let l23 = (point - cp23).len();
        let l34 = (point - cp34).len();
        let l41 = (point - cp41).len();

        let mut min_dist = l12;
        let mut result = cp12;
        if l23 < min_dist {
            min_dist = l23;
            result = cp23;
        }
        if l34 < min_dist {
            min_dist = l34;
            result = cp34;
        }
        if l41 < min_dist {
            result = cp41;
        }
        result
    }
}

impl<T: Real> ApproxEq<T> for Quad<T> {
    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.p1.is_close_to(rhs.p1, epsilon) &&
        self.p2.is_close_to(rhs.p2, epsilon) &&
        self.p3.is_close_to(rhs.p3, epsilon) &&
        self.p4.is_close_to(rhs.p4, epsilon)
    }

    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_close_to(rhs, T::EPSILON)
    }
}

impl<T: Real + Display> Display for Quad<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ p1: {}, p2: {}, p3: {}, p4: {} }}", self.p1, self.p2, self.p3, self.p4))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn unit_quad() -> Quad<f64> {
        Quad::new(
            Vec3::new(0f64, 0f64, 0f64),
            Vec3::new(1f64, 0f64, 0f64),
            Vec3::new(1f64, 1f64, 0f64),
            Vec3::new(0f64, 1f64, 0f64),
        )
    }

    #[test]
    fn contains_point() {
        let quad = unit_quad();

        assert!(quad.contains_point(Vec3::new(0.5f64, 0.5f64, 0f64)));
        assert!(quad.contains_point(Vec3::new(0.9f64, 0.1f64, 0f64)));
        assert!(quad.contains_point(Vec3::new(0.1f64, 0.9f64, 0f64)));
        assert!(!quad.contains_point(Vec3::new(1.5f64, 0.5f64, 0f64)));
        assert!(!quad.contains_point(Vec3::new(-0.1f64, 0.5f64, 0f64)));

        // points on the splitting diagonal and the outer edges count as inside
        assert!(quad.contains_point(Vec3::new(0.5f64, 0.5f64, 0f64)));
        assert!(quad.contains_point(Vec3::new(1f64, 0.5f64, 0f64)));
        assert!(quad.contains_point(quad.p4));
    }

    #[test]
    fn closest_point() {
        let quad = unit_quad();

        // interior point is returned unchanged
        let inside = Vec3::new(0.25f64, 0.75f64, 0f64);
        assert!(quad.closest_point_to(inside).is_close_to(inside, 1e-12));

        // point above the face projects onto it
        let closest = quad.closest_point_to(Vec3::new(0.25f64, 0.75f64, 2f64));
        assert!(closest.is_close_to(inside, 1e-12));

        // corner region
        let closest = quad.closest_point_to(Vec3::new(3f64, 3f64, 0f64));
        assert!(closest.is_close_to(quad.p3, 1e-12));

        // edge region
        let closest = quad.closest_point_to(Vec3::new(0.5f64, 4f64, 1f64));
        assert!(closest.is_close_to(Vec3::new(0.5f64, 1f64, 0f64), 1e-12));
    }

    #[test]
    fn closest_point_on_edge() {
        let quad = unit_quad();

        let closest = quad.closest_point_on_edge(Vec3::new(0.5f64, 0.1f64, 0f64));
        assert!(closest.is_close_to(Vec3::new(0.5f64, 0f64, 0f64), 1e-12));

        let closest = quad.closest_point_on_edge(Vec3::new(-1f64, 0.5f64, 0f64));
        assert!(closest.is_close_to(Vec3::new(0f64, 0.5f64, 0f64), 1e-12));
    }
}
