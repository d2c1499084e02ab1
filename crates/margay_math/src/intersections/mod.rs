use crate::{Ray, Real};

/// Trait for shapes a ray can be cast against
pub trait IntersectWithRay<T: Real> {
    /// Cast the ray against the shape, returning the distance along the ray of the earliest
    /// hit within the ray's `[min_t, max_t]` window, or `None` if the ray misses
    fn intersect_ray(&self, ray: &Ray<T>) -> Option<T>;
}

mod ray_intersections;
