use geometry::prelude::*;

use super::{compose, one, two, AxisFragments, Fragments};
use crate::error::Result;
use crate::world::WorldGeometry;

/// The infinite line perpendicular to `dir` at coordinate `at`.
pub(super) fn seam(dir: Dir, at: f32) -> Line {
    Line::new(
        Point::from_dir_coords(dir, at, 0.),
        Point::from_dir_coords(dir, at, 1.),
    )
}

impl WorldGeometry {
    /// Splits `line` across the seam along `dir`.
    ///
    /// The segment is first oriented to run in the positive direction along
    /// `dir`. Unless `preserve_direction` is set, fragments are returned in
    /// that orientation. With `preserve_direction`, the fragments are ordered
    /// and oriented so that walking them in sequence retraces the original
    /// segment from start to end.
    pub fn split_line_along(
        &self,
        mut line: Line,
        dir: Dir,
        preserve_direction: bool,
    ) -> AxisFragments<Line> {
        let axis = self.axis(dir);
        if !axis.wraps() {
            return one(line);
        }
        let size: f32 = axis.size_as();
        debug_assert!(
            line.diff().coord(dir).abs() <= size,
            "line spans {} along {dir}, more than the world size {size}",
            line.diff().coord(dir).abs(),
        );

        let swap = line.make_positive(dir) && preserve_direction;
        let start = line.start().with_coord(dir, axis.wrap(line.start().coord(dir)));
        let wrapped = Line::new(start, start + line.diff());

        if wrapped.end().coord(dir) > size {
            if let Some(hit) = wrapped.intersection(&seam(dir, size), true) {
                tracing::trace!(axis = %dir, "splitting line across seam");
                let across = hit.coord(!dir);
                let high = Point::from_dir_coords(dir, size, across);
                let low = Point::from_dir_coords(dir, 0., across);
                let end = wrapped.end() - Point::from_dir_coords(dir, size, 0.);
                return if swap {
                    two(Line::new(end, low), Line::new(high, wrapped.start()))
                } else {
                    two(Line::new(wrapped.start(), high), Line::new(low, end))
                };
            }
        }

        one(if swap { wrapped.reversed() } else { wrapped })
    }

    /// Splits `line` across the x seam.
    pub fn split_line_x(&self, line: Line, preserve_direction: bool) -> AxisFragments<Line> {
        self.split_line_along(line, Dir::Horiz, preserve_direction)
    }

    /// Splits `line` across the y seam.
    pub fn split_line_y(&self, line: Line, preserve_direction: bool) -> AxisFragments<Line> {
        self.split_line_along(line, Dir::Vert, preserve_direction)
    }

    /// Splits `line` across both seams, x first.
    ///
    /// # Example
    ///
    /// ```
    /// # use world_geometry::prelude::*;
    /// let world = WorldGeometry::new(100, 100);
    /// let line = Line::new(Point::new(95., 0.), Point::new(105., 10.));
    /// let parts = world.split_line(line, false);
    /// assert_eq!(
    ///     parts.as_slice(),
    ///     &[
    ///         Line::new(Point::new(95., 0.), Point::new(100., 5.)),
    ///         Line::new(Point::new(0., 5.), Point::new(5., 10.)),
    ///     ]
    /// );
    /// ```
    pub fn split_line(&self, line: Line, preserve_direction: bool) -> Fragments<Line> {
        compose(self.split_line_x(line, preserve_direction), |l| {
            self.split_line_y(l, preserve_direction)
        })
    }

    /// Splits `line` after translating it by `position`.
    pub fn split_line_at(
        &self,
        line: Line,
        position: Point,
        preserve_direction: bool,
    ) -> Fragments<Line> {
        self.split_line(line.translate(position), preserve_direction)
    }

    /// Splits `line` across both seams, failing if it is longer than the world.
    pub fn try_split_line(&self, line: Line, preserve_direction: bool) -> Result<Fragments<Line>> {
        for dir in Dir::ALL {
            self.check_extent(dir, f64::from(line.diff().coord(dir).abs()))?;
        }
        Ok(self.split_line(line, preserve_direction))
    }
}
