//! A generic geometry math library, built to fit the needs of the Margay game engine
//!
//! The crate supplies the narrow-phase collision and picking primitives shared by the
//! physics and rendering sides of the engine: closest-point and distance queries,
//! ray/shape intersection tests, point containment tests, and swept sphere tests.
//!
//! Everything is generic over [`Real`], so the physics side instantiates the same code
//! with `f64` that the rendering side instantiates with `f32`, with epsilon guards
//! scaled per precision.

#![allow(dead_code)]

mod numeric;
pub use numeric::*;

mod constants;
pub use constants::*;

mod vec3;
pub use vec3::*;

mod ray;
pub use ray::*;

mod line;
pub use line::*;

mod plane;
pub use plane::*;

mod sphere;
pub use sphere::*;

mod aabb;
pub use aabb::*;

mod cylinder;
pub use cylinder::*;

mod capsule;
pub use capsule::*;

mod triangle;
pub use triangle::*;

mod quad;
pub use quad::*;

mod intersections;
pub use intersections::*;
