//! An import prelude that re-exports commonly used items.

pub use geometry::prelude::*;

pub use crate::axis::Axis;
pub use crate::lerp::{AxisDiff, AxisLerp, PointDiff, PointLerp, WrapMode};
pub use crate::scalar::WrapScalar;
pub use crate::split::{AxisFragments, Fragments};
pub use crate::world::{WorldGeometry, WorldGeometryConfig};
