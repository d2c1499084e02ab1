use crate::*;


//- Ray-plane intersection -----------------------------------------------------------------------------------------------------

impl<T: Real> IntersectWithRay<T> for Plane<T> {
    fn intersect_ray(&self, ray: &Ray<T>) -> Option<T> {
        let denom = self.normal.dot(ray.dir);
        if denom == T::zero() {
            return None;
        }

        let numer = self.normal.dot(ray.orig) - self.dist;
        let t = -(numer / denom);
        if ray.is_on_ray(t) {
            Some(t)
        } else {
            None
        }
    }
}

//- Ray-sphere intersection ----------------------------------------------------------------------------------------------------

impl<T: Real> IntersectWithRay<T> for Sphere<T> {
    fn intersect_ray(&self, ray: &Ray<T>) -> Option<T> {
        // |orig + dir * t - center|^2 == radius^2, a quadratic in t with a halved b term
        let a = ray.dir.len_sq();
        if a.is_zero() {
            return None;
        }

        let to_orig = ray.orig - self.center;
        let b = ray.dir.dot(to_orig);
        let c = to_orig.len_sq() - self.radius * self.radius;

        let disc = b * b - a * c;
        if disc < T::zero() {
            return None;
        }
        let disc = disc.sqrt();

        let t = (-b - disc) / a;
        if ray.is_on_ray(t) {
            return Some(t);
        }
        let t = (-b + disc) / a;
        if ray.is_on_ray(t) {
            return Some(t);
        }
        None
    }
}

//- Ray-aabb intersection ------------------------------------------------------------------------------------------------------

impl<T: Real> IntersectWithRay<T> for Aabb<T> {
    // Solves t per face plane and verifies the other 2 coordinates lie within the box at
    // that t, keeping the smallest valid t. Axes the ray runs parallel to are skipped, the
    // faces crossing them are caught by the other axes.
    fn intersect_ray(&self, ray: &Ray<T>) -> Option<T> {
        let half_extent = self.half_extent();
        let point = ray.orig - self.center();
        let mut best: Option<T> = None;

        // box faces on the x axis
        if ray.dir.x.abs() > T::SAFE_EPSILON {
            let factor = ray.dir.x.recip();
            for face_x in [half_extent.x, -half_extent.x] {
                let t = (face_x - point.x) * factor;
                if ray.is_on_ray(t) && best.map_or(true, |cur| t < cur) {
                    let hy = point.y + ray.dir.y * t;
                    if hy >= -half_extent.y && hy <= half_extent.y {
                        let hz = point.z + ray.dir.z * t;
                        if hz >= -half_extent.z && hz <= half_extent.z {
                            best = Some(t);
                        }
                    }
                }
            }
        }

        // box faces on the y axis
        if ray.dir.y.abs() > T::SAFE_EPSILON {
            let factor = ray.dir.y.recip();
            for face_y in [half_extent.y, -half_extent.y] {
                let t = (face_y - point.y) * factor;
                if ray.is_on_ray(t) && best.map_or(true, |cur| t < cur) {
                    let hx = point.x + ray.dir.x * t;
                    if hx >= -half_extent.x && hx <= half_extent.x {
                        let hz = point.z + ray.dir.z * t;
                        if hz >= -half_extent.z && hz <= half_extent.z {
                            best = Some(t);
                        }
                    }
                }
            }
        }

        // box faces on the z axis
        if ray.dir.z.abs() > T::SAFE_EPSILON {
            let factor = ray.dir.z.recip();
            for face_z in [half_extent.z, -half_extent.z] {
                let t = (face_z - point.z) * factor;
                if ray.is_on_ray(t) && best.map_or(true, |cur| t < cur) {
                    let hx = point.x + ray.dir.x * t;
                    if hx >= -half_extent.x && hx <= half_extent.x {
                        let hy = point.y + ray.dir.y * t;
                        if hy >= -half_extent.y && hy <= half_extent.y {
                            best = Some(t);
                        }
                    }
                }
            }
        }

        best
    }
}

//- Ray-cylinder intersection --------------------------------------------------------------------------------------------------

impl<T: Real> IntersectWithRay<T> for Cylinder<T> {
    fn intersect_ray(&self, ray: &Ray<T>) -> Option<T> {
        let local_orig = ray.orig - self.center;
        let dir = ray.dir;
        let radius_sq = self.radius * self.radius;
        let mut best: Option<T> = None;

        // curved hull, a quadratic in the xz plane
        let a = dir.x * dir.x + dir.z * dir.z;
        let b = (local_orig.x * dir.x + local_orig.z * dir.z) * T::from_i32(2);
        let c = local_orig.x * local_orig.x + local_orig.z * local_orig.z - radius_sq;

        let disc = b * b - a * c * T::from_i32(4);
        if disc > T::SAFE_EPSILON {
            let disc = disc.sqrt();
            let two_a = a * T::from_i32(2);

            for t in [(disc - b) / two_a, -(disc + b) / two_a] {
                if ray.is_on_ray(t) && best.map_or(true, |cur| t < cur) {
                    let y = local_orig.y + dir.y * t;
                    if y > -self.half_height && y < self.half_height {
                        best = Some(t);
                    }
                }
            }
        }

        // flat end caps
        if dir.y.abs() > T::SAFE_EPSILON {
            let factor = dir.y.recip();
            for cap_y in [self.half_height, -self.half_height] {
                let t = (cap_y - local_orig.y) * factor;
                if ray.is_on_ray(t) && best.map_or(true, |cur| t < cur) {
                    let x = local_orig.x + dir.x * t;
                    let z = local_orig.z + dir.z * t;
                    if x * x + z * z <= radius_sq {
                        best = Some(t);
                    }
                }
            }
        }

        best
    }
}

impl<T: Real> IntersectWithRay<T> for TaperedCylinder<T> {
    // Same hull quadratic as the plain cylinder, with the linear radius-over-height blend
    // folded into the coefficients instead of deriving a separate cone equation.
    fn intersect_ray(&self, ray: &Ray<T>) -> Option<T> {
        let local_orig = ray.orig - self.center;
        let dir = ray.dir;
        let radius_diff = self.top_radius - self.bottom_radius;
        let radius_top_sq = self.top_radius * self.top_radius;
        let radius_bottom_sq = self.bottom_radius * self.bottom_radius;
        let mut best: Option<T> = None;

        let f1 = self.bottom_radius * radius_diff / self.half_height;
        let f2 = (radius_diff * radius_diff) / (self.half_height * self.half_height * T::from_i32(4));
        let f3 = local_orig.y + self.half_height;

        let a = dir.x * dir.x + dir.z * dir.z - f2 * dir.y * dir.y;
        let b = (local_orig.x * dir.x + local_orig.z * dir.z) * T::from_i32(2)
            - dir.y * (f2 * T::from_i32(2) * f3 + f1);
        let c = local_orig.x * local_orig.x + local_orig.z * local_orig.z
            - radius_bottom_sq - f3 * (f1 + f2 * f3);

        let disc = b * b - a * c * T::from_i32(4);
        if disc > T::SAFE_EPSILON {
            let disc = disc.sqrt();
            let two_a = a * T::from_i32(2);

            for t in [(disc - b) / two_a, -(disc + b) / two_a] {
                if ray.is_on_ray(t) && best.map_or(true, |cur| t < cur) {
                    let y = local_orig.y + dir.y * t;
                    if y > -self.half_height && y < self.half_height {
                        best = Some(t);
                    }
                }
            }
        }

        // flat end caps, each with its own radius
        if dir.y.abs() > T::SAFE_EPSILON {
            let factor = dir.y.recip();
            for (cap_y, cap_radius_sq) in [(self.half_height, radius_top_sq), (-self.half_height, radius_bottom_sq)] {
                let t = (cap_y - local_orig.y) * factor;
                if ray.is_on_ray(t) && best.map_or(true, |cur| t < cur) {
                    let x = local_orig.x + dir.x * t;
                    let z = local_orig.z + dir.z * t;
                    if x * x + z * z <= cap_radius_sq {
                        best = Some(t);
                    }
                }
            }
        }

        best
    }
}

//- Ray-capsule intersection ---------------------------------------------------------------------------------------------------

impl<T: Real> IntersectWithRay<T> for Capsule<T> {
    fn intersect_ray(&self, ray: &Ray<T>) -> Option<T> {
        let local_orig = ray.orig - self.center;
        let dir = ray.dir;
        let radius_sq = self.radius * self.radius;
        let mut best: Option<T> = None;

        // curved hull of the cylindrical mid-section
        let a = dir.x * dir.x + dir.z * dir.z;
        let b = (local_orig.x * dir.x + local_orig.z * dir.z) * T::from_i32(2);
        let c = local_orig.x * local_orig.x + local_orig.z * local_orig.z - radius_sq;

        let disc = b * b - a * c * T::from_i32(4);
        if disc > T::SAFE_EPSILON {
            let disc = disc.sqrt();
            let two_a = a * T::from_i32(2);

            for t in [(disc - b) / two_a, -(disc + b) / two_a] {
                if ray.is_on_ray(t) && best.map_or(true, |cur| t < cur) {
                    let y = local_orig.y + dir.y * t;
                    if y > -self.half_height && y < self.half_height {
                        best = Some(t);
                    }
                }
            }
        }

        // hemispherical end caps
        if dir.y.abs() > T::SAFE_EPSILON {
            let local_ray = Ray::new(local_orig, dir, ray.min_t, ray.max_t);
            for cap_y in [self.half_height, -self.half_height] {
                let cap = Sphere::new(Vec3::new(T::zero(), cap_y, T::zero()), self.radius);
                if let Some(t) = cap.intersect_ray(&local_ray) {
                    if best.map_or(true, |cur| t < cur) {
                        best = Some(t);
                    }
                }
            }
        }

        best
    }
}

impl<T: Real> IntersectWithRay<T> for TaperedCapsule<T> {
    // The lateral surface between two differently sized cap spheres is tangent to both, so
    // it is tilted relative to the axis. The effective cone is derived by scaling the cap
    // radii by the cosine of the tilt and shifting the span the hull covers.
    fn intersect_ray(&self, ray: &Ray<T>) -> Option<T> {
        let local_orig = ray.orig - self.center;
        let dir = ray.dir;
        let mut best: Option<T> = None;

        // tilt of the lateral surface
        let sin_tilt = (self.bottom_radius - self.top_radius) / (self.half_height * T::from_i32(2));
        let cos_tilt = (T::one() - sin_tilt * sin_tilt).sqrt();

        let bottom_offset = self.bottom_radius * sin_tilt;
        let half_height = self.half_height + (self.top_radius * sin_tilt - bottom_offset) * T::from_f64(0.5);
        let local_y = local_orig.y + self.half_height - bottom_offset;
        let radius_top = self.top_radius * cos_tilt;
        let radius_bottom = self.bottom_radius * cos_tilt;
        let radius_diff = radius_top - radius_bottom;

        // curved hull over the shifted span [0, 2 * half_height]
        let f1 = radius_bottom * radius_diff / half_height;
        let f2 = (radius_diff * radius_diff) / (half_height * half_height * T::from_i32(4));

        let a = dir.x * dir.x + dir.z * dir.z - f2 * dir.y * dir.y;
        let b = (local_orig.x * dir.x + local_orig.z * dir.z) * T::from_i32(2)
            - dir.y * (f2 * T::from_i32(2) * local_y + f1);
        let c = local_orig.x * local_orig.x + local_orig.z * local_orig.z
            - radius_bottom * radius_bottom - local_y * (f1 + f2 * local_y);

        let disc = b * b - a * c * T::from_i32(4);
        if disc > T::SAFE_EPSILON {
            let disc = disc.sqrt();
            let two_a = a * T::from_i32(2);

            for t in [(disc - b) / two_a, -(disc + b) / two_a] {
                if ray.is_on_ray(t) && best.map_or(true, |cur| t < cur) {
                    let y = local_y + dir.y * t;
                    if y > T::zero() && y < half_height * T::from_i32(2) {
                        best = Some(t);
                    }
                }
            }
        }

        // hemispherical end caps, each with its own radius
        if dir.y.abs() > T::SAFE_EPSILON {
            let local_ray = Ray::new(local_orig, dir, ray.min_t, ray.max_t);
            for (cap_y, cap_radius) in [(self.half_height, self.top_radius), (-self.half_height, self.bottom_radius)] {
                let cap = Sphere::new(Vec3::new(T::zero(), cap_y, T::zero()), cap_radius);
                if let Some(t) = cap.intersect_ray(&local_ray) {
                    if best.map_or(true, |cur| t < cur) {
                        best = Some(t);
                    }
                }
            }
        }

        best
    }
}

//- Ray-triangle intersection --------------------------------------------------------------------------------------------------

impl<T: Real> IntersectWithRay<T> for Triangle<T> {
    fn intersect_ray(&self, ray: &Ray<T>) -> Option<T> {
        let normal = (self.p2 - self.p1).cross(self.p3 - self.p2);
        self.intersect_ray_with_normal(ray, normal)
    }
}

impl<T: Real> Triangle<T> {
    /// Cast a ray against the triangle using a precomputed normal, saving the cross product
    /// when the caller already has one
    ///
    /// The normal does not need to be normalized, only its direction is used.
    pub fn intersect_ray_with_normal(self, ray: &Ray<T>, normal: Vec3<T>) -> Option<T> {
        let dot = ray.dir.dot(normal);
        if dot.is_close_to_zero(T::from_f64(0.00001)) {
            return None;
        }

        let t = (self.p1 - ray.orig).dot(normal) / dot;
        if !ray.is_on_ray(t) {
            return None;
        }

        let hit_point = ray.point_at(t);
        if self.contains_point_with_normal(normal, hit_point) {
            Some(t)
        } else {
            None
        }
    }
}
