//! Coordinate arithmetic and shape splitting for worlds whose axes wrap.
//!
//! A [`WorldGeometry`](world::WorldGeometry) describes a world whose x and y
//! axes may each wrap around, making the world a cylinder or a torus. It
//! offers three layers of operations:
//!
//! * wrap arithmetic: wrapping, clamping, shortest differences, and picking
//!   the copy of a point nearest another;
//! * splitting: cutting spans, rectangles, segments and convex polygons at the
//!   seams into fragments that flat-space geometry can handle;
//! * spatial predicates built on top of splitting.
//!
//! # Examples
//!
//! ```
//! # use world_geometry::prelude::*;
//! let world = WorldGeometry::new(100, 100);
//! assert_eq!(world.diff_x(5, 95), 10);
//!
//! let parts = world.split_rect(Rect::from_sides(90, 10, 105, 20));
//! assert_eq!(parts.as_slice(), &[Rect::from_sides(90, 10, 100, 20), Rect::from_sides(0, 10, 5, 20)]);
//! ```
#![warn(missing_docs)]

pub mod axis;
pub mod error;
pub mod lerp;
pub mod predicates;
pub mod prelude;
pub mod scalar;
pub mod split;
pub mod world;

#[cfg(test)]
mod tests;
