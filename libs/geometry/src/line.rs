//! Directed line segments.

use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::dir::Dir;
use crate::point::Point;
use crate::rect::Rect;
use crate::transform::TranslateMut;

/// Determinants smaller than this are treated as parallel lines.
const PARALLEL_EPSILON: f32 = 1e-9;

/// A directed line segment from `start` to `end`.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
}

impl Line {
    /// Creates a new segment from `start` to `end`.
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// The starting point.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The ending point.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// The displacement `end - start`.
    #[inline]
    pub fn diff(&self) -> Point {
        self.end - self.start
    }

    /// The length of the segment.
    pub fn length(&self) -> f32 {
        self.diff().magnitude()
    }

    /// The midpoint of the segment.
    pub fn center(&self) -> Point {
        (self.start + self.end) / 2.
    }

    /// Swaps the endpoints in place.
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
    }

    /// Returns the segment with its endpoints swapped.
    pub fn reversed(mut self) -> Self {
        self.reverse();
        self
    }

    /// Orients the segment so it runs in the positive direction along `dir`.
    ///
    /// Returns true if the endpoints were swapped.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let mut line = Line::new(Point::new(0., 5.), Point::new(1., 2.));
    /// assert!(line.make_positive(Dir::Vert));
    /// assert_eq!(line.start(), Point::new(1., 2.));
    /// assert!(!line.make_positive(Dir::Horiz));
    /// ```
    pub fn make_positive(&mut self, dir: Dir) -> bool {
        if self.end.coord(dir) < self.start.coord(dir) {
            self.reverse();
            true
        } else {
            false
        }
    }

    /// The point a fraction `t` of the way from `start` to `end`.
    #[inline]
    pub fn point_at(&self, t: f32) -> Point {
        self.start + self.diff() * t
    }

    /// Computes where this segment meets `other`.
    ///
    /// If `infinite` is true, both segments are extended into infinite lines
    /// before intersecting. Parallel lines never intersect.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let a = Line::new(Point::new(0., 0.), Point::new(2., 2.));
    /// let b = Line::new(Point::new(0., 4.), Point::new(1., 3.));
    /// assert_eq!(a.intersection(&b, false), None);
    /// assert_eq!(a.intersection(&b, true), Some(Point::new(2., 2.)));
    /// ```
    pub fn intersection(&self, other: &Line, infinite: bool) -> Option<Point> {
        let (t, u) = self.intersection_params(other)?;
        if !infinite && !((0. ..=1.).contains(&t) && (0. ..=1.).contains(&u)) {
            return None;
        }
        Some(self.point_at(t))
    }

    /// The parameters along `self` and `other` at which the two infinite lines meet.
    fn intersection_params(&self, other: &Line) -> Option<(f32, f32)> {
        let r = self.diff();
        let s = other.diff();
        let denom = r.cross(s);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let qp = other.start - self.start;
        Some((qp.cross(s) / denom, qp.cross(r) / denom))
    }

    /// Checks whether two segments touch, including at endpoints and along
    /// collinear overlaps.
    pub fn intersects(&self, other: &Line) -> bool {
        let o1 = orientation(self.start, self.end, other.start);
        let o2 = orientation(self.start, self.end, other.end);
        let o3 = orientation(other.start, other.end, self.start);
        let o4 = orientation(other.start, other.end, self.end);

        if o1 * o2 < 0. && o3 * o4 < 0. {
            return true;
        }

        (o1 == 0. && on_segment(self.start, self.end, other.start))
            || (o2 == 0. && on_segment(self.start, self.end, other.end))
            || (o3 == 0. && on_segment(other.start, other.end, self.start))
            || (o4 == 0. && on_segment(other.start, other.end, self.end))
    }

    /// The shortest distance from any point of the segment to `point`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let line = Line::new(Point::new(0., 0.), Point::new(10., 0.));
    /// assert_eq!(line.distance_to(Point::new(5., 3.)), 3.);
    /// assert_eq!(line.distance_to(Point::new(13., 4.)), 5.);
    /// ```
    pub fn distance_to(&self, point: Point) -> f32 {
        let d = self.diff();
        let len2 = d.dot(d);
        if len2 == 0. {
            return self.start.distance_to(point);
        }
        let t = ((point - self.start).dot(d) / len2).clamp(0., 1.);
        self.point_at(t).distance_to(point)
    }
}

/// Signed area of the triangle `(a, b, c)`, doubled.
fn orientation(a: Point, b: Point, c: Point) -> f32 {
    (b - a).cross(c - a)
}

/// Whether `p`, known to be collinear with `a` and `b`, lies between them.
fn on_segment(a: Point, b: Point, p: Point) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

impl Bbox for Line {
    fn bbox(&self) -> Option<Rect> {
        Some(Rect::new(self.start, self.end))
    }
}

impl TranslateMut for Line {
    fn translate_mut(&mut self, p: Point) {
        self.start.translate_mut(p);
        self.end.translate_mut(p);
    }
}

impl From<(Point, Point)> for Line {
    fn from(value: (Point, Point)) -> Self {
        Self::new(value.0, value.1)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::prelude::*;

    #[test]
    fn crossing_segments_intersect() {
        let a = Line::new(Point::new(0., 0.), Point::new(4., 4.));
        let b = Line::new(Point::new(0., 4.), Point::new(4., 0.));
        assert!(a.intersects(&b));
        assert_relative_eq!(a.intersection(&b, false).unwrap(), Point::new(2., 2.));
    }

    #[test]
    fn touching_and_collinear_segments_intersect() {
        let a = Line::new(Point::new(0., 0.), Point::new(4., 0.));
        assert!(a.intersects(&Line::new(Point::new(4., 0.), Point::new(4., 3.))));
        assert!(a.intersects(&Line::new(Point::new(2., 0.), Point::new(6., 0.))));
        assert!(!a.intersects(&Line::new(Point::new(5., 0.), Point::new(6., 0.))));
        assert!(!a.intersects(&Line::new(Point::new(0., 1.), Point::new(4., 1.))));
    }

    #[test]
    fn parallel_lines_have_no_intersection() {
        let a = Line::new(Point::new(0., 0.), Point::new(4., 0.));
        let b = Line::new(Point::new(0., 1.), Point::new(4., 1.));
        assert_eq!(a.intersection(&b, true), None);
    }

    #[test]
    fn make_positive_per_axis() {
        let mut line = Line::new(Point::new(3., 0.), Point::new(1., 5.));
        assert!(!line.make_positive(Dir::Vert));
        assert!(line.make_positive(Dir::Horiz));
        assert_eq!(line, Line::new(Point::new(1., 5.), Point::new(3., 0.)));
    }
}
