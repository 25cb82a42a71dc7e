//! Difference and interpolation behaviors bound to a world geometry.
//!
//! Each behavior resolves which axes wrap once, when it is created, so that
//! hot loops can evaluate it repeatedly without consulting the geometry.
//!
//! # Example
//!
//! ```
//! # use world_geometry::prelude::*;
//! let world = WorldGeometry::new(100, 100);
//! let lerp = world.x_lerp_fn(None);
//! // Interpolates across the seam rather than through the middle of the world.
//! assert_eq!(lerp.eval(0.5, 90., 10.), 100.);
//! ```

use geometry::prelude::*;

use crate::scalar::wrap_diff;
use crate::world::WorldGeometry;

/// Which axes of a geometry wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Neither axis wraps.
    None,
    /// Only the x axis wraps.
    X,
    /// Only the y axis wraps.
    Y,
    /// Both axes wrap.
    Both,
}

impl WrapMode {
    /// The wrap mode of `world`.
    pub fn of(world: &WorldGeometry) -> Self {
        match (world.wraps_x(), world.wraps_y()) {
            (false, false) => Self::None,
            (true, false) => Self::X,
            (false, true) => Self::Y,
            (true, true) => Self::Both,
        }
    }

    /// Whether the axis along `dir` wraps.
    pub fn wraps(&self, dir: Dir) -> bool {
        matches!(
            (self, dir),
            (Self::Both, _) | (Self::X, Dir::Horiz) | (Self::Y, Dir::Vert)
        )
    }
}

/// A scalar difference along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisDiff {
    /// Plain subtraction.
    Flat,
    /// Shortest difference modulo the axis size.
    Wrapped {
        /// The axis size.
        size: f32,
    },
}

impl AxisDiff {
    /// Evaluates `a - b`.
    #[inline]
    pub fn eval(&self, a: f32, b: f32) -> f32 {
        match *self {
            Self::Flat => a - b,
            Self::Wrapped { size } => wrap_diff(a, b, size),
        }
    }
}

/// A vector difference between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointDiff {
    mode: WrapMode,
    size: Point,
}

impl PointDiff {
    /// The wrap mode this difference was resolved with.
    pub fn mode(&self) -> WrapMode {
        self.mode
    }

    /// Evaluates `a - b`.
    #[inline]
    pub fn eval(&self, a: Point, b: Point) -> Point {
        match self.mode {
            WrapMode::None => a - b,
            WrapMode::X => Point::new(wrap_diff(a.x, b.x, self.size.x), a.y - b.y),
            WrapMode::Y => Point::new(a.x - b.x, wrap_diff(a.y, b.y, self.size.y)),
            WrapMode::Both => Point::new(
                wrap_diff(a.x, b.x, self.size.x),
                wrap_diff(a.y, b.y, self.size.y),
            ),
        }
    }
}

/// Linear interpolation along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLerp {
    diff: AxisDiff,
    threshold: Option<f32>,
}

impl AxisLerp {
    /// Interpolates a fraction `offset` of the way from `min` to `max`.
    ///
    /// If the distance between the endpoints exceeds the discontinuity
    /// threshold, jumps straight to `max`.
    pub fn eval(&self, offset: f32, min: f32, max: f32) -> f32 {
        let distance = self.diff.eval(max, min);
        match self.threshold {
            Some(threshold) if distance.abs() > threshold => min + distance,
            _ => min + offset * distance,
        }
    }
}

/// Linear interpolation between points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLerp {
    diff: PointDiff,
    threshold: Option<f32>,
}

impl PointLerp {
    /// Interpolates a fraction `offset` of the way from `min` to `max`.
    ///
    /// If the length of the displacement exceeds the discontinuity threshold,
    /// jumps straight to `max`.
    pub fn eval(&self, offset: f32, min: Point, max: Point) -> Point {
        let distance = self.diff.eval(max, min);
        match self.threshold {
            Some(threshold) if distance.magnitude() > threshold => min + distance,
            _ => min + distance * offset,
        }
    }
}

impl WorldGeometry {
    fn axis_diff_fn(&self, dir: Dir) -> AxisDiff {
        let axis = self.axis(dir);
        if axis.wraps() {
            AxisDiff::Wrapped {
                size: axis.size_as(),
            }
        } else {
            AxisDiff::Flat
        }
    }

    /// The x difference behavior of this geometry.
    pub fn x_diff_fn(&self) -> AxisDiff {
        self.axis_diff_fn(Dir::Horiz)
    }

    /// The y difference behavior of this geometry.
    pub fn y_diff_fn(&self) -> AxisDiff {
        self.axis_diff_fn(Dir::Vert)
    }

    /// The point difference behavior of this geometry.
    pub fn diff_fn(&self) -> PointDiff {
        PointDiff {
            mode: WrapMode::of(self),
            size: Point::new(self.axis(Dir::Horiz).size_as(), self.axis(Dir::Vert).size_as()),
        }
    }

    /// Interpolation along x, snapping across gaps wider than `threshold`.
    pub fn x_lerp_fn(&self, threshold: Option<f32>) -> AxisLerp {
        AxisLerp {
            diff: self.x_diff_fn(),
            threshold,
        }
    }

    /// Interpolation along y, snapping across gaps wider than `threshold`.
    pub fn y_lerp_fn(&self, threshold: Option<f32>) -> AxisLerp {
        AxisLerp {
            diff: self.y_diff_fn(),
            threshold,
        }
    }

    /// Interpolation between points, snapping across gaps longer than `threshold`.
    pub fn lerp_fn(&self, threshold: Option<f32>) -> PointLerp {
        PointLerp {
            diff: self.diff_fn(),
            threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn wrap_mode_matches_geometry() {
        let world = WorldGeometry::with_wrapping(Point::new(10, 10), false, true);
        let mode = WrapMode::of(&world);
        assert_eq!(mode, WrapMode::Y);
        assert!(mode.wraps(Dir::Vert));
        assert!(!mode.wraps(Dir::Horiz));
        assert_eq!(WrapMode::of(&WorldGeometry::null()), WrapMode::None);
    }

    #[test]
    fn diff_fns_agree_with_geometry() {
        let world = WorldGeometry::with_wrapping(Point::new(100, 60), true, true);
        let diff = world.diff_fn();
        let a = Point::new(3., 58.);
        let b = Point::new(97., 1.);
        assert_eq!(diff.eval(a, b), world.diff(a, b));
        assert_eq!(world.x_diff_fn().eval(3., 97.), 6.);
        assert_eq!(world.y_diff_fn().eval(58., 1.), -3.);
    }

    #[test]
    fn lerp_snaps_past_threshold() {
        let world = WorldGeometry::null();
        let lerp = world.x_lerp_fn(Some(5.));
        assert_eq!(lerp.eval(0.5, 0., 4.), 2.);
        assert_eq!(lerp.eval(0.5, 0., 8.), 8.);
    }

    #[test]
    fn point_lerp_wraps() {
        let world = WorldGeometry::new(100, 100);
        let lerp = world.lerp_fn(None);
        let p = lerp.eval(0.25, Point::new(98., 0.), Point::new(6., 8.));
        assert_relative_eq!(p, Point::new(100., 2.));
        let snapping = world.lerp_fn(Some(1.));
        assert_eq!(
            snapping.eval(0.25, Point::new(98., 0.), Point::new(6., 8.)),
            Point::new(106., 8.)
        );
    }
}
