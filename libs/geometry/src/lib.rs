//! 2-D flat-space geometry primitives.
//!
//! Everything here assumes an infinite Euclidean plane; the `world_geometry`
//! crate builds wrap-aware operations on top of these types.
//!
//! # Examples
//!
//! Create a [rectangle](crate::rect::Rect):
//!
//! ```
//! # use geometry::prelude::*;
//! let rect = Rect::from_sides(10, 20, 30, 40);
//! assert_eq!(rect.area(), 400);
//! ```
#![warn(missing_docs)]

extern crate self as geometry;

pub mod bbox;
pub mod contains;
pub mod coord;
pub mod dir;
pub mod intersect;
pub mod line;
pub mod point;
pub mod polygon;
pub mod prelude;
pub mod rect;
pub mod span;
pub mod transform;
