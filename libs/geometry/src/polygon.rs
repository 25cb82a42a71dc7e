//! Convex polygons with floating point vertices.

use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::contains::{Containment, Contains};
use crate::intersect::Intersect;
use crate::line::Line;
use crate::point::Point;
use crate::rect::Rect;
use crate::transform::TranslateMut;

/// A convex polygon, given by its vertices in order.
///
/// Either winding is accepted. A polygon with no vertices is null.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Creates an empty (null) polygon.
    #[inline]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Creates a polygon with the given vertices.
    pub fn from_verts(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Appends a vertex.
    #[inline]
    pub fn push(&mut self, vertex: Point) {
        self.vertices.push(vertex);
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The vertices, in order.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The last vertex, if any.
    #[inline]
    pub fn last(&self) -> Option<Point> {
        self.vertices.last().copied()
    }

    /// The number of sides, equal to the number of vertices.
    #[inline]
    pub fn sides(&self) -> usize {
        self.vertices.len()
    }

    /// The side running from vertex `i` to vertex `i + 1`, wrapping around.
    ///
    /// # Panics
    ///
    /// Panics if the polygon is null.
    pub fn side(&self, i: usize) -> Line {
        let n = self.vertices.len();
        Line::new(self.vertices[i % n], self.vertices[(i + 1) % n])
    }

    /// Iterates over every side, starting with the side leaving the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = Line> + '_ {
        (0..self.sides()).map(|i| self.side(i))
    }

    /// The average of the vertices, or the origin for a null polygon.
    pub fn center(&self) -> Point {
        if self.is_null() {
            return Point::zero();
        }
        let sum = self
            .vertices
            .iter()
            .fold(Point::zero(), |acc, &v| acc + v);
        sum / self.vertices.len() as f32
    }

    /// The signed area, positive for counterclockwise winding.
    pub fn signed_area(&self) -> f32 {
        self.edges()
            .map(|edge| edge.start().cross(edge.end()))
            .sum::<f32>()
            / 2.
    }

    /// The area enclosed by the polygon.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let tri = Polygon::from_verts(vec![
    ///     Point::new(0., 0.),
    ///     Point::new(0., 4.),
    ///     Point::new(3., 0.),
    /// ]);
    /// assert_eq!(tri.convex_area(), 6.);
    /// ```
    pub fn convex_area(&self) -> f32 {
        self.signed_area().abs()
    }

    /// +1 for counterclockwise winding, -1 for clockwise or degenerate polygons.
    fn winding(&self) -> f32 {
        if self.signed_area() > 0. {
            1.
        } else {
            -1.
        }
    }

    /// Tests whether two convex polygons touch, using the separating axis theorem.
    pub fn intersects(&self, other: &Polygon) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        self.edges()
            .chain(other.edges())
            .all(|edge| {
                let d = edge.diff();
                let axis = Point::new(-d.y, d.x);
                let (min1, max1) = self.project(axis);
                let (min2, max2) = other.project(axis);
                !(max1 < min2 || max2 < min1)
            })
    }

    /// The interval covered by projecting every vertex onto `axis`.
    fn project(&self, axis: Point) -> (f32, f32) {
        self.vertices
            .iter()
            .map(|v| v.dot(axis))
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p), hi.max(p))
            })
    }

    /// Tests whether the segment `line` touches the polygon.
    pub fn intersects_line(&self, line: &Line) -> bool {
        if self.is_null() {
            return false;
        }
        self.encloses(&line.start()) || self.edges().any(|edge| edge.intersects(line))
    }

    /// The point where `line` first meets the polygon boundary, measured from
    /// the start of `line`.
    ///
    /// Returns `None` if the segment never crosses a side.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let square = Polygon::from(Rect::from_sides(0., 0., 4., 4.));
    /// let line = Line::new(Point::new(-2., 2.), Point::new(6., 2.));
    /// assert_eq!(square.line_intersection(&line), Some(Point::new(0., 2.)));
    /// ```
    pub fn line_intersection(&self, line: &Line) -> Option<Point> {
        let start = line.start();
        self.edges()
            .filter_map(|edge| line.intersection(&edge, false))
            .min_by(|a, b| {
                start
                    .distance_to(*a)
                    .total_cmp(&start.distance_to(*b))
            })
    }

    /// The distance from the polygon to `point`, or zero if it lies inside.
    pub fn distance(&self, point: Point) -> f32 {
        if self.encloses(&point) {
            return 0.;
        }
        self.edges()
            .map(|edge| edge.distance_to(point))
            .fold(f32::INFINITY, f32::min)
    }

    /// Clips `subject` against the convex polygon `clip`.
    ///
    /// The result is the intersection of the two polygons, null if they do not
    /// overlap.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let a = Polygon::from(Rect::from_sides(0., 0., 4., 4.));
    /// let b = Polygon::from(Rect::from_sides(2., 2., 6., 6.));
    /// assert_eq!(Polygon::clip(&a, &b).convex_area(), 4.);
    /// ```
    pub fn clip(subject: &Polygon, clip: &Polygon) -> Polygon {
        if subject.is_null() || clip.is_null() {
            return Polygon::new();
        }
        let winding = clip.winding();
        let mut output = subject.vertices.clone();

        for edge in clip.edges() {
            if output.is_empty() {
                break;
            }
            let inside = |p: Point| edge.diff().cross(p - edge.start()) * winding >= 0.;
            let input = std::mem::take(&mut output);
            let mut prev = input[input.len() - 1];
            for &cur in &input {
                match (inside(prev), inside(cur)) {
                    (true, true) => output.push(cur),
                    (true, false) => output.extend(Line::new(prev, cur).intersection(&edge, true)),
                    (false, true) => {
                        output.extend(Line::new(prev, cur).intersection(&edge, true));
                        output.push(cur);
                    }
                    (false, false) => {}
                }
                prev = cur;
            }
        }

        Polygon::from_verts(output)
    }
}

impl From<Rect> for Polygon {
    /// The four corners of `rect`, counterclockwise from the lower left.
    fn from(rect: Rect) -> Self {
        if rect.is_null() {
            return Polygon::new();
        }
        Polygon::from_verts(rect.edges().iter().map(Line::start).collect())
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Polygon::from_verts(iter.into_iter().collect())
    }
}

impl Bbox for Polygon {
    fn bbox(&self) -> Option<Rect> {
        self.vertices
            .iter()
            .map(|&v| Rect::new(v, v))
            .reduce(Rect::union)
    }
}

impl Contains<Point> for Polygon {
    /// Boundary points are contained.
    fn contains(&self, p: &Point) -> Containment {
        if self.vertices.len() < 3 {
            return Containment::None;
        }
        let winding = self.winding();
        Containment::full_if(
            self.edges()
                .all(|edge| edge.diff().cross(*p - edge.start()) * winding >= 0.),
        )
    }
}

impl Intersect<Polygon> for Polygon {
    type Output = Polygon;

    fn intersect(&self, other: &Polygon) -> Option<Self::Output> {
        let clipped = Polygon::clip(self, other);
        if clipped.is_null() {
            None
        } else {
            Some(clipped)
        }
    }
}

impl TranslateMut for Polygon {
    fn translate_mut(&mut self, p: Point) {
        self.vertices.translate_mut(p);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::prelude::*;

    fn diamond() -> Polygon {
        Polygon::from_verts(vec![
            Point::new(2., 0.),
            Point::new(4., 2.),
            Point::new(2., 4.),
            Point::new(0., 2.),
        ])
    }

    #[test]
    fn containment_ignores_winding() {
        let ccw = diamond();
        let cw = Polygon::from_verts(ccw.vertices().iter().rev().copied().collect());
        for poly in [ccw, cw] {
            assert!(poly.encloses(&Point::new(2., 2.)));
            assert!(poly.encloses(&Point::new(1., 1.)));
            assert!(!poly.encloses(&Point::new(0.5, 0.5)));
        }
    }

    #[test]
    fn separating_axis_intersection() {
        let a = diamond();
        let touching = a.clone().translate(Point::new(4., 0.));
        let apart = a.clone().translate(Point::new(4.5, 0.));
        assert!(a.intersects(&touching));
        assert!(!a.intersects(&apart));
        assert!(!a.intersects(&Polygon::new()));
    }

    #[test]
    fn clip_keeps_overlap() {
        let square = Polygon::from(Rect::from_sides(0., 0., 4., 4.));
        let clipped = Polygon::clip(&diamond(), &square);
        assert_relative_eq!(clipped.convex_area(), 8.);
        let far = Polygon::from(Rect::from_sides(10., 10., 11., 11.));
        assert_eq!(Polygon::clip(&square, &far).convex_area(), 0.);
    }

    #[test]
    fn distance_outside_and_inside() {
        let square = Polygon::from(Rect::from_sides(0., 0., 4., 4.));
        assert_eq!(square.distance(Point::new(2., 2.)), 0.);
        assert_relative_eq!(square.distance(Point::new(7., 8.)), 5.);
    }

    #[test]
    fn center_and_area() {
        let poly = diamond();
        assert_eq!(poly.center(), Point::new(2., 2.));
        assert_relative_eq!(poly.convex_area(), 8.);
        assert!(poly.signed_area() > 0.);
    }
}
