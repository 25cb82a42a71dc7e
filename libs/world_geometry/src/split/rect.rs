use geometry::prelude::*;

use super::{compose, one, AxisFragments, Fragments};
use crate::error::Result;
use crate::scalar::WrapScalar;
use crate::world::WorldGeometry;

impl WorldGeometry {
    /// Splits `rect` across the seam along `dir`.
    ///
    /// The lower corner is wrapped into the world and the size is kept.
    pub fn split_rect_along<S: WrapScalar>(
        &self,
        rect: Rect<S>,
        dir: Dir,
    ) -> AxisFragments<Rect<S>> {
        let axis = self.axis(dir);
        if rect.is_null() || !axis.wraps() {
            return one(rect);
        }

        let min = rect.min().with_coord(dir, axis.wrap(rect.lower_coord(dir)));
        let wrapped = Rect::with_size(min, rect.size());
        let spans = axis.split_span(wrapped.span(dir));
        if spans.len() > 1 {
            tracing::trace!(axis = %dir, "splitting rect across seam");
        }
        spans
            .into_iter()
            .map(|span| wrapped.with_span(span, dir))
            .collect()
    }

    /// Splits `rect` across the x seam.
    pub fn split_rect_x<S: WrapScalar>(&self, rect: Rect<S>) -> AxisFragments<Rect<S>> {
        self.split_rect_along(rect, Dir::Horiz)
    }

    /// Splits `rect` across the y seam.
    pub fn split_rect_y<S: WrapScalar>(&self, rect: Rect<S>) -> AxisFragments<Rect<S>> {
        self.split_rect_along(rect, Dir::Vert)
    }

    /// Splits `rect` across both seams, x first.
    ///
    /// # Example
    ///
    /// ```
    /// # use world_geometry::prelude::*;
    /// let world = WorldGeometry::new(100, 100);
    /// let parts = world.split_rect(Rect::from_sides(90f32, 10., 105., 20.));
    /// assert_eq!(
    ///     parts.as_slice(),
    ///     &[Rect::from_sides(90., 10., 100., 20.), Rect::from_sides(0., 10., 5., 20.)]
    /// );
    /// ```
    pub fn split_rect<S: WrapScalar>(&self, rect: Rect<S>) -> Fragments<Rect<S>> {
        compose(self.split_rect_x(rect), |r| self.split_rect_y(r))
    }

    /// Splits `rect` after translating it by `position`.
    pub fn split_rect_at<S: WrapScalar>(
        &self,
        rect: Rect<S>,
        position: Point<S>,
    ) -> Fragments<Rect<S>> {
        self.split_rect(rect.translate(position))
    }

    /// Splits `rect` across both seams, failing if it is wider than the world.
    pub fn try_split_rect<S: WrapScalar>(&self, rect: Rect<S>) -> Result<Fragments<Rect<S>>> {
        if !rect.is_null() {
            for dir in Dir::ALL {
                self.check_extent(dir, rect.length(dir).to_f64())?;
            }
        }
        Ok(self.split_rect(rect))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn rect_inside_world_is_one_fragment() {
        let world = WorldGeometry::with_wrapping(Point::new(100, 100), true, true);
        let rect = Rect::from_sides(10, 10, 20, 20);
        assert_eq!(world.split_rect(rect).as_slice(), &[rect]);
    }

    #[test]
    fn rect_is_wrapped_into_world() {
        let world = WorldGeometry::new(100, 100);
        let parts = world.split_rect_x(Rect::from_sides(-30, 0, -20, 5));
        assert_eq!(parts.as_slice(), &[Rect::from_sides(70, 0, 80, 5)]);
    }

    #[test]
    fn corner_rect_splits_four_ways_x_first() {
        let world = WorldGeometry::with_wrapping(Point::new(100, 100), true, true);
        let parts = world.split_rect(Rect::from_sides(95, 90, 105, 110));
        assert_eq!(
            parts.as_slice(),
            &[
                Rect::from_sides(95, 90, 100, 100),
                Rect::from_sides(95, 0, 100, 10),
                Rect::from_sides(0, 90, 5, 100),
                Rect::from_sides(0, 0, 5, 10),
            ]
        );
    }

    #[test]
    fn null_rect_is_unchanged() {
        let world = WorldGeometry::with_wrapping(Point::new(100, 100), true, true);
        let parts = world.split_rect(Rect::<f32>::null());
        assert_eq!(parts.len(), 1);
        assert!(parts[0].is_null());
    }

    #[test]
    fn split_at_translates_first() {
        let world = WorldGeometry::new(100, 100);
        let parts = world.split_rect_at(Rect::from_sides(0, 0, 10, 10), Point::new(95, 0));
        assert_eq!(
            parts.as_slice(),
            &[Rect::from_sides(95, 0, 100, 10), Rect::from_sides(0, 0, 5, 10)]
        );
    }

    #[test]
    fn try_split_rejects_wide_rects() {
        let world = WorldGeometry::new(100, 100);
        assert!(world.try_split_rect(Rect::from_sides(0f32, 0., 150., 10.)).is_err());
        assert!(world.try_split_rect(Rect::from_sides(0f32, 0., 10., 150.)).is_ok());
    }
}
