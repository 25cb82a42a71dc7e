//! The world geometry and its vector wrap arithmetic.

use geometry::prelude::*;
use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::error::{Error, Result};
use crate::scalar::WrapScalar;

/// The shape of a world whose axes may wrap around.
///
/// A null geometry (both sizes 0) behaves as the plain Euclidean plane.
///
/// # Example
///
/// ```
/// # use world_geometry::prelude::*;
/// let world = WorldGeometry::with_wrapping(Point::new(100, 100), true, false);
/// assert_eq!(world.diff_x(5f32, 95.), 10.);
/// assert_eq!(world.diff_y(5f32, 95.), -90.);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WorldGeometryConfig", into = "WorldGeometryConfig")]
pub struct WorldGeometry {
    axes: Dirs<Axis>,
}

/// The serialized form of a [`WorldGeometry`].
///
/// ```toml
/// size = [3000, 2000]
/// x_wraps = true
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldGeometryConfig {
    /// The world width and height.
    pub size: [u32; 2],
    /// Whether the x axis wraps.
    #[serde(default)]
    pub x_wraps: bool,
    /// Whether the y axis wraps.
    #[serde(default)]
    pub y_wraps: bool,
}

impl From<WorldGeometryConfig> for WorldGeometry {
    fn from(config: WorldGeometryConfig) -> Self {
        let [width, height] = config.size;
        for (dir, size, wraps) in [
            (Dir::Horiz, width, config.x_wraps),
            (Dir::Vert, height, config.y_wraps),
        ] {
            if wraps && size == 0 {
                tracing::warn!(axis = %dir, "ignoring wrapping on an axis of size 0");
            }
        }
        WorldGeometry::with_wrapping(Point::new(width, height), config.x_wraps, config.y_wraps)
    }
}

impl From<WorldGeometry> for WorldGeometryConfig {
    fn from(world: WorldGeometry) -> Self {
        Self {
            size: [world.width(), world.height()],
            x_wraps: world.wraps_x(),
            y_wraps: world.wraps_y(),
        }
    }
}

impl WorldGeometry {
    /// The null geometry: no wrapping, unbounded on both axes.
    pub const fn null() -> Self {
        Self {
            axes: Dirs::new(Axis::null(), Axis::null()),
        }
    }

    /// A world that wraps horizontally (if `width` is nonzero) but not vertically.
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            axes: Dirs::new(Axis::new(width, true), Axis::new(height, false)),
        }
    }

    /// A world with the given size and per-axis wrapping.
    ///
    /// Wrapping is ignored on an axis of size 0.
    pub const fn with_wrapping(size: Point<u32>, x_wraps: bool, y_wraps: bool) -> Self {
        Self {
            axes: Dirs::new(Axis::new(size.x, x_wraps), Axis::new(size.y, y_wraps)),
        }
    }

    /// Parses a geometry from a TOML document shaped like [`WorldGeometryConfig`].
    ///
    /// # Example
    ///
    /// ```
    /// # use world_geometry::prelude::*;
    /// let world = WorldGeometry::from_toml("size = [100, 50]\ny_wraps = true\n")?;
    /// assert!(!world.wraps_x());
    /// assert!(world.wraps_y());
    /// # Ok::<(), world_geometry::error::Error>(())
    /// ```
    pub fn from_toml(s: &str) -> Result<Self> {
        let config: WorldGeometryConfig = toml::from_str(s).map_err(Error::Config)?;
        Ok(config.into())
    }

    /// Returns true if both sizes are 0.
    pub fn is_null(&self) -> bool {
        self.width() == 0 && self.height() == 0
    }

    /// The axis along `dir`.
    #[inline]
    pub fn axis(&self, dir: Dir) -> Axis {
        self.axes[dir]
    }

    /// The world width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.axes[Dir::Horiz].size()
    }

    /// The world height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.axes[Dir::Vert].size()
    }

    /// The world width and height.
    pub fn size(&self) -> Point<u32> {
        Point::new(self.width(), self.height())
    }

    /// Whether the x axis wraps.
    #[inline]
    pub fn wraps_x(&self) -> bool {
        self.axes[Dir::Horiz].wraps()
    }

    /// Whether the y axis wraps.
    #[inline]
    pub fn wraps_y(&self) -> bool {
        self.axes[Dir::Vert].wraps()
    }

    /// Whether either axis wraps.
    #[inline]
    pub fn wraps_any(&self) -> bool {
        self.axes.iter().any(|(_, axis)| axis.wraps())
    }

    /// Wraps each coordinate of `p` into the world.
    pub fn wrap<S: WrapScalar>(&self, p: Point<S>) -> Point<S> {
        p.map(|dir, v| self.axes[dir].wrap(v))
    }

    /// Wraps an x-coordinate.
    pub fn wrap_x<S: WrapScalar>(&self, x: S) -> S {
        self.axes[Dir::Horiz].wrap(x)
    }

    /// Wraps a y-coordinate.
    pub fn wrap_y<S: WrapScalar>(&self, y: S) -> S {
        self.axes[Dir::Vert].wrap(y)
    }

    /// Brings each coordinate of `p` in bounds.
    pub fn limit<S: WrapScalar>(&self, p: Point<S>) -> Point<S> {
        p.map(|dir, v| self.axes[dir].limit(v))
    }

    /// Brings an x-coordinate in bounds.
    pub fn limit_x<S: WrapScalar>(&self, x: S) -> S {
        self.axes[Dir::Horiz].limit(x)
    }

    /// Brings a y-coordinate in bounds.
    pub fn limit_y<S: WrapScalar>(&self, y: S) -> S {
        self.axes[Dir::Vert].limit(y)
    }

    /// The shortest displacement from `b` to `a`.
    ///
    /// # Example
    ///
    /// ```
    /// # use world_geometry::prelude::*;
    /// let world = WorldGeometry::with_wrapping(Point::new(100, 100), true, true);
    /// assert_eq!(world.diff(Point::new(5, 98), Point::new(95, 2)), Point::new(10, -4));
    /// ```
    pub fn diff<S: WrapScalar>(&self, a: Point<S>, b: Point<S>) -> Point<S> {
        a.zip_with(b, |dir, a, b| self.axes[dir].diff(a, b))
    }

    /// The shortest signed x difference `a - b`.
    pub fn diff_x<S: WrapScalar>(&self, a: S, b: S) -> S {
        self.axes[Dir::Horiz].diff(a, b)
    }

    /// The shortest signed y difference `a - b`.
    pub fn diff_y<S: WrapScalar>(&self, a: S, b: S) -> S {
        self.axes[Dir::Vert].diff(a, b)
    }

    /// The per-axis positive distance from `b` to `a`.
    pub fn pdiff<S: WrapScalar>(&self, a: Point<S>, b: Point<S>) -> Point<S> {
        a.zip_with(b, |dir, a, b| self.axes[dir].pdiff(a, b))
    }

    /// The positive x distance from `b` to `a`.
    pub fn pdiff_x<S: WrapScalar>(&self, a: S, b: S) -> S {
        self.axes[Dir::Horiz].pdiff(a, b)
    }

    /// The positive y distance from `b` to `a`.
    pub fn pdiff_y<S: WrapScalar>(&self, a: S, b: S) -> S {
        self.axes[Dir::Vert].pdiff(a, b)
    }

    /// The copy of `target` closest to `source`.
    pub fn nearest_to<S: WrapScalar>(&self, source: Point<S>, target: Point<S>) -> Point<S> {
        source.zip_with(target, |dir, s, t| self.axes[dir].nearest_to(s, t))
    }

    /// The copy of the x-coordinate `target` closest to `source`.
    pub fn nearest_to_x<S: WrapScalar>(&self, source: S, target: S) -> S {
        self.axes[Dir::Horiz].nearest_to(source, target)
    }

    /// The copy of the y-coordinate `target` closest to `source`.
    pub fn nearest_to_y<S: WrapScalar>(&self, source: S, target: S) -> S {
        self.axes[Dir::Vert].nearest_to(source, target)
    }

    /// Whether the box from `min` to `max` straddles a seam on either axis.
    pub fn crosses_wrap<S: WrapScalar>(&self, min: Point<S>, max: Point<S>) -> bool {
        Dir::ALL
            .iter()
            .any(|&dir| self.axes[dir].crosses_wrap(min.coord(dir), max.coord(dir)))
    }

    /// Whether `[min, max]` straddles the x seam.
    pub fn crosses_wrap_x<S: WrapScalar>(&self, min: S, max: S) -> bool {
        self.axes[Dir::Horiz].crosses_wrap(min, max)
    }

    /// Whether `[min, max]` straddles the y seam.
    pub fn crosses_wrap_y<S: WrapScalar>(&self, min: S, max: S) -> bool {
        self.axes[Dir::Vert].crosses_wrap(min, max)
    }

    /// The wrapped cell index of `p`.
    pub fn index(&self, p: Point<i32>) -> Point<u32> {
        Point::new(self.index_x(p.x), self.index_y(p.y))
    }

    /// The wrapped cell index of an x-coordinate.
    pub fn index_x(&self, x: i32) -> u32 {
        self.axes[Dir::Horiz].index(x)
    }

    /// The wrapped cell index of a y-coordinate.
    pub fn index_y(&self, y: i32) -> u32 {
        self.axes[Dir::Vert].index(y)
    }

    /// Whether two cells refer to the same location.
    ///
    /// # Example
    ///
    /// ```
    /// # use world_geometry::prelude::*;
    /// let world = WorldGeometry::new(100, 100);
    /// assert!(world.equal(Point::new(-1, 5), Point::new(99, 5)));
    /// assert!(!world.equal(Point::new(5, -1), Point::new(5, 99)));
    /// ```
    pub fn equal(&self, a: Point<i32>, b: Point<i32>) -> bool {
        self.index(a) == self.index(b)
    }

    /// The point halfway along the shortest path between `a` and `b`.
    ///
    /// # Example
    ///
    /// ```
    /// # use world_geometry::prelude::*;
    /// let world = WorldGeometry::new(100, 100);
    /// assert_eq!(world.midpoint(Point::new(96f32, 10.), Point::new(2., 20.)), Point::new(99., 15.));
    /// ```
    pub fn midpoint<S: WrapScalar>(&self, a: Point<S>, b: Point<S>) -> Point<S> {
        let half = self.diff(a, b).zip_with(b, |_, d, b| d.halve().saturating_add(b));
        self.limit(half)
    }

    /// Fails if `extent` along `dir` is wider than a wrapping axis.
    pub(crate) fn check_extent(&self, dir: Dir, extent: f64) -> Result<()> {
        let axis = self.axes[dir];
        if axis.wraps() && extent > f64::from(axis.size()) {
            tracing::debug!(axis = %dir, extent, size = axis.size(), "shape wider than the world");
            return Err(Error::ExtentExceedsWorld {
                dir,
                extent,
                size: axis.size(),
            });
        }
        Ok(())
    }
}
