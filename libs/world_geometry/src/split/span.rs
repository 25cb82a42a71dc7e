use geometry::prelude::*;

use super::{one, two, AxisFragments};
use crate::axis::Axis;
use crate::scalar::WrapScalar;
use crate::world::WorldGeometry;

impl Axis {
    /// Splits `span` where it crosses the seam of this axis.
    ///
    /// The start is wrapped into the world first; the length is preserved.
    pub fn split_span<S: WrapScalar>(&self, span: Span<S>) -> AxisFragments<Span<S>> {
        if !self.wraps() {
            return one(span);
        }
        let size: S = self.size_as();
        debug_assert!(
            span.length() <= size,
            "span of length {:?} is longer than the world ({:?})",
            span.length(),
            size
        );

        let wrapped = Span::with_start_and_length(self.wrap(span.start()), span.length());
        if wrapped.stop() > size {
            two(
                Span::new(wrapped.start(), size),
                Span::new(S::ZERO, wrapped.stop() - size),
            )
        } else {
            one(wrapped)
        }
    }
}

impl WorldGeometry {
    /// Splits a horizontal interval across the x seam.
    ///
    /// # Example
    ///
    /// ```
    /// # use world_geometry::prelude::*;
    /// let world = WorldGeometry::new(100, 100);
    /// let parts = world.split_span_x(Span::new(-5, 10));
    /// assert_eq!(parts.as_slice(), &[Span::new(95, 100), Span::new(0, 10)]);
    /// ```
    pub fn split_span_x<S: WrapScalar>(&self, span: Span<S>) -> AxisFragments<Span<S>> {
        self.axis(Dir::Horiz).split_span(span)
    }

    /// Splits a vertical interval across the y seam.
    pub fn split_span_y<S: WrapScalar>(&self, span: Span<S>) -> AxisFragments<Span<S>> {
        self.axis(Dir::Vert).split_span(span)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn span_within_world_is_wrapped_once() {
        let world = WorldGeometry::new(100, 100);
        let parts = world.split_span_x(Span::new(110f32, 120.));
        assert_eq!(parts.as_slice(), &[Span::new(10., 20.)]);
    }

    #[test]
    fn span_on_non_wrapping_axis_is_unchanged() {
        let world = WorldGeometry::new(100, 100);
        let parts = world.split_span_y(Span::new(90, 130));
        assert_eq!(parts.as_slice(), &[Span::new(90, 130)]);
    }

    #[test]
    fn split_preserves_length() {
        let world = WorldGeometry::with_wrapping(Point::new(50, 50), true, true);
        let parts = world.split_span_y(Span::new(45.5f32, 52.));
        assert_eq!(parts.len(), 2);
        let total: f32 = parts.iter().map(Span::length).sum();
        assert_eq!(total, 6.5);
    }
}
