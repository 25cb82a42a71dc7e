//! Intersections of geometric objects.

/// Trait for calculating the intersection with another geometric object.
///
/// # Example
///
/// ```
/// # use geometry::prelude::*;
/// let a = Polygon::from(Rect::from_sides(0., 0., 2., 2.));
/// let b = Polygon::from(Rect::from_sides(1., 1., 3., 3.));
/// assert_eq!(a.intersect(&b).map(|p| p.convex_area()), Some(1.));
/// assert_eq!(Span::new(0, 4).intersect(&Span::new(5, 6)), None);
/// ```
pub trait Intersect<T: ?Sized> {
    /// The type of the output shape representing the intersection.
    type Output;
    /// Calculates the intersection of this shape with `other`.
    ///
    /// Returns [`None`] if the shapes are disjoint.
    fn intersect(&self, other: &T) -> Option<Self::Output>;
}
