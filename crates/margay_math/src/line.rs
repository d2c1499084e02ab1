use std::fmt::Display;

use crate::{Real, ApproxEq, RealConsts, Vec3};

/// 3D line segment
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LineSegment<T: Real> {
    pub begin : Vec3<T>,
    pub end   : Vec3<T>
}

impl<T: Real> LineSegment<T> {
    /// Create a new line segment
    #[inline]
    #[must_use]
    pub fn new(begin: Vec3<T>, end: Vec3<T>) -> Self {
        Self { begin, end }
    }

    /// Get the direction of the line segment
    #[inline]
    #[must_use]
    pub fn dir(self) -> Vec3<T> {
        (self.end - self.begin).normalize()
    }

    /// Get the length of the line segment
    #[inline]
    #[must_use]
    pub fn len(self) -> T {
        (self.end - self.begin).len()
    }

    /// Get the closest point on the line segment to the given point
    ///
    /// A degenerate segment (`begin` and `end` coincide) returns `begin`.
    #[must_use]
    pub fn closest_point_to(self, point: Vec3<T>) -> Vec3<T> {
        let dir = self.end - self.begin;
        let len_sq = dir.len_sq();
        if len_sq <= T::SAFE_EPSILON {
            return self.begin;
        }

        let lambda = dir.dot(point - self.begin) / len_sq;
        if lambda <= T::zero() {
            self.begin
        } else if lambda >= T::one() {
            self.end
        } else {
            self.begin + dir * lambda
        }
    }

    /// Check if a point is on the line segment
    #[inline]
    #[must_use]
    pub fn is_on_segment(self, point: Vec3<T>) -> bool {
        (point - self.closest_point_to(point)).len_sq() <= T::SAFE_EPSILON
    }

    /// Calculate the closest distance between this line segment and another one
    pub fn dist_to_segment(self, other: Self) -> T {
        let threshold = T::from_f64(0.00001);

        let u = self.end - self.begin;
        let v = other.end - other.begin;
        let w = self.begin - other.begin;
        let a = u.dot(u);
        let b = u.dot(v);
        let c = v.dot(v);
        let d = u.dot(w);
        let e = v.dot(w);
        let det = a * c - b * b;

        let mut sn;
        let mut sd = det;
        let mut tn;
        let mut td = det;

        if det < threshold {
            // segments parallel, pick the s=0 edge
            sn = T::zero();
            sd = T::one();
            tn = e;
            td = c;
        } else {
            sn = b * e - c * d;
            tn = a * e - b * d;
            if sn < T::zero() {
                sn = T::zero();
                tn = e;
                td = c;
            } else if sn > sd {
                sn = sd;
                tn = e + b;
                td = c;
            }
        }

        if tn < T::zero() {
            tn = T::zero();
            // recompute s for the t=0 edge
            if -d < T::zero() {
                sn = T::zero();
            } else if -d > a {
                sn = sd;
            } else {
                sn = -d;
                sd = a;
            }
        } else if tn > td {
            tn = td;
            // recompute s for the t=1 edge
            if -d + b < T::zero() {
                sn = T::zero();
            } else if -d + b > a {
                sn = sd;
            } else {
                sn = -d + b;
                sd = a;
            }
        }

        let s = if sn.abs() < threshold { T::zero() } else { sn / sd };
        let t = if tn.abs() < threshold { T::zero() } else { tn / td };

        (w + u * s - v * t).len()
    }
}

impl<T: Real> ApproxEq<T> for LineSegment<T> {
    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.begin.is_close_to(rhs.begin, epsilon) &&
        self.end.is_close_to(rhs.end, epsilon)
    }

    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_close_to(rhs, T::EPSILON)
    }
}

impl<T: Real + Display> Display for LineSegment<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ a: {}, b: {} }}", self.begin, self.end))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn closest_point() {
        let segment = LineSegment::new(Vec3::new(0f64, 0f64, 0f64), Vec3::new(4f64, 0f64, 0f64));

        // interior projection
        let closest = segment.closest_point_to(Vec3::new(1f64, 3f64, 0f64));
        assert!(closest.is_close_to(Vec3::new(1f64, 0f64, 0f64), 1e-12));

        // clamped to begin and end
        let closest = segment.closest_point_to(Vec3::new(-2f64, 1f64, 0f64));
        assert!(closest.is_close_to(segment.begin, 1e-12));
        let closest = segment.closest_point_to(Vec3::new(9f64, -1f64, 0f64));
        assert!(closest.is_close_to(segment.end, 1e-12));
    }

    #[test]
    fn closest_point_degenerate() {
        let p = Vec3::new(2f64, 3f64, 4f64);
        let segment = LineSegment::new(p, p);
        assert_eq!(segment.closest_point_to(Vec3::new(10f64, 10f64, 10f64)), p);
    }

    #[test]
    fn segment_distance() {
        let a = LineSegment::new(Vec3::new(-1f64, 0f64, 0f64), Vec3::new(1f64, 0f64, 0f64));
        let b = LineSegment::new(Vec3::new(0f64, 1f64, -1f64), Vec3::new(0f64, 1f64, 1f64));

        // crossing segments, one unit apart
        assert!(a.dist_to_segment(b).is_close_to(1f64, 1e-9));

        // parallel segments
        let c = LineSegment::new(Vec3::new(-1f64, 2f64, 0f64), Vec3::new(1f64, 2f64, 0f64));
        assert!(a.dist_to_segment(c).is_close_to(2f64, 1e-9));

        // disjoint along the same line
        let d = LineSegment::new(Vec3::new(3f64, 0f64, 0f64), Vec3::new(5f64, 0f64, 0f64));
        assert!(a.dist_to_segment(d).is_close_to(2f64, 1e-9));
    }

    #[test]
    fn segment_distance_symmetric() {
        let segments = [
            (LineSegment::new(Vec3::new(-1f64, 0f64, 0f64), Vec3::new(1f64, 0f64, 0f64)),
             LineSegment::new(Vec3::new(0f64, 1f64, -1f64), Vec3::new(2f64, 3f64, 1f64))),
            (LineSegment::new(Vec3::new(0.5f64, -2f64, 1f64), Vec3::new(1f64, 4f64, 0f64)),
             LineSegment::new(Vec3::new(-3f64, 1f64, -1f64), Vec3::new(0f64, 1f64, 7f64))),
            (LineSegment::new(Vec3::new(1f64, 1f64, 1f64), Vec3::new(2f64, 2f64, 2f64)),
             LineSegment::new(Vec3::new(4f64, 4f64, 4f64), Vec3::new(5f64, 4f64, 4f64))),
        ];

        for (a, b) in segments {
            assert!(a.dist_to_segment(b).is_close_to(b.dist_to_segment(a), 1e-4));
        }
    }
}
