//! Spatial queries between shapes in a wrapping world.
//!
//! Each query splits its operands into fragments that do not cross a seam,
//! then asks the flat-space question of every pair of fragments.

use geometry::prelude::*;

use crate::world::WorldGeometry;

impl WorldGeometry {
    /// Whether `rect` contains `pos`, edges included.
    ///
    /// # Example
    ///
    /// ```
    /// # use world_geometry::prelude::*;
    /// let world = WorldGeometry::new(100, 100);
    /// let rect = Rect::from_sides(95., 0., 105., 10.);
    /// assert!(world.rect_contains(&rect, Point::new(2., 5.)));
    /// assert!(world.rect_contains(&rect, Point::new(-2., 5.)));
    /// assert!(!world.rect_contains(&rect, Point::new(50., 5.)));
    /// ```
    pub fn rect_contains(&self, rect: &Rect, pos: Point) -> bool {
        let pos = self.wrap(pos);
        self.split_rect(*rect).iter().any(|r| r.encloses(&pos))
    }

    /// Whether two rectangles overlap anywhere.
    pub fn rect_intersects_rect(&self, a: &Rect, b: &Rect) -> bool {
        let bs = self.split_rect(*b);
        self.split_rect(*a)
            .iter()
            .any(|ra| bs.iter().any(|rb| ra.intersects(rb)))
    }

    /// The overlap of `a` with the copy of `b` closest to it.
    ///
    /// Null rectangles overlap nothing.
    ///
    /// # Example
    ///
    /// ```
    /// # use world_geometry::prelude::*;
    /// let world = WorldGeometry::new(100, 100);
    /// let a = Rect::from_sides(95., 0., 105., 10.);
    /// let b = Rect::from_sides(0., 5., 10., 20.);
    /// assert_eq!(world.rect_overlap(&a, &b), Some(Rect::from_sides(100., 5., 105., 10.)));
    /// ```
    pub fn rect_overlap(&self, a: &Rect, b: &Rect) -> Option<Rect> {
        if a.is_null() || b.is_null() {
            return None;
        }
        let b = Rect::with_size(self.nearest_to(a.min(), b.min()), b.size());
        a.intersection(b)
    }

    /// Whether the convex polygon `poly` contains `pos`, boundary included.
    pub fn poly_contains(&self, poly: &Polygon, pos: Point) -> bool {
        let pos = self.wrap(pos);
        self.split_poly(poly).iter().any(|p| p.encloses(&pos))
    }

    /// The area shared by two convex polygons.
    pub fn poly_overlap_area(&self, a: &Polygon, b: &Polygon) -> f32 {
        let bs = self.split_poly(b);
        self.split_poly(a)
            .iter()
            .flat_map(|pa| bs.iter().map(move |pb| Polygon::clip(pa, pb).convex_area()))
            .sum()
    }

    /// Whether the segment `line` touches `rect`.
    pub fn line_intersects_rect(&self, line: &Line, rect: &Rect) -> bool {
        let rects = self.split_rect(*rect);
        self.split_line(*line, false)
            .iter()
            .any(|l| rects.iter().any(|r| r.intersects_line(l)))
    }

    /// Whether the segment `line` touches the convex polygon `poly`.
    pub fn line_intersects_poly(&self, line: &Line, poly: &Polygon) -> bool {
        let polys = self.split_poly(poly);
        self.split_line(*line, false)
            .iter()
            .any(|l| polys.iter().any(|p| p.intersects_line(l)))
    }

    /// Whether two convex polygons overlap anywhere.
    pub fn poly_intersects_poly(&self, a: &Polygon, b: &Polygon) -> bool {
        let bs = self.split_poly(b);
        self.split_poly(a)
            .iter()
            .any(|pa| bs.iter().any(|pb| pb.intersects(pa)))
    }

    /// Whether `rect` touches the circle of the given `radius` around `center`.
    pub fn rect_intersects_circle(&self, rect: &Rect, center: Point, radius: f32) -> bool {
        self.rect_contains(rect, center)
            || rect
                .edges()
                .iter()
                .any(|edge| self.line_intersects_circle(edge, center, radius))
    }

    /// Whether the segment `line` touches the circle of the given `radius`
    /// around `center`.
    pub fn line_intersects_circle(&self, line: &Line, center: Point, radius: f32) -> bool {
        self.split_line(*line, false).iter().any(|l| {
            l.distance_to(self.nearest_to(l.center(), center)) <= radius
        })
    }

    /// The first point where `line`, walked from its start, enters `poly`.
    ///
    /// # Example
    ///
    /// ```
    /// # use world_geometry::prelude::*;
    /// let world = WorldGeometry::new(100, 100);
    /// let poly = Polygon::from(Rect::from_sides(2., 0., 6., 4.));
    /// let line = Line::new(Point::new(90., 2.), Point::new(110., 2.));
    /// assert_eq!(world.line_intersects_poly_at(&line, &poly), Some(Point::new(2., 2.)));
    /// ```
    pub fn line_intersects_poly_at(&self, line: &Line, poly: &Polygon) -> Option<Point> {
        let polys = self.split_poly(poly);
        self.split_line(*line, true)
            .iter()
            .find_map(|l| polys.iter().find_map(|p| p.line_intersection(l)))
    }

    /// The distance from `poly` to the copy of `point` nearest its center.
    pub fn poly_distance(&self, poly: &Polygon, point: Point) -> f32 {
        poly.distance(self.nearest_to(poly.center(), point))
    }

    /// The point in `rect` closest to `pos`, near the copy of `pos` closest to the box.
    ///
    /// # Example
    ///
    /// ```
    /// # use world_geometry::prelude::*;
    /// let world = WorldGeometry::new(100, 100);
    /// let rect = Rect::from_sides(0., 0., 10., 10.);
    /// assert_eq!(world.nearest_coord_in_box(&rect, Point::new(97., 5.)), Point::new(0., 5.));
    /// ```
    pub fn nearest_coord_in_box(&self, rect: &Rect, pos: Point) -> Point {
        let offset = rect.center();
        let relative = self.diff(pos, offset);
        rect.with_center(Point::zero()).nearest_point_to(relative) + offset
    }

    /// The shortest displacement from the point in `rect` closest to `pos` to `pos`.
    pub fn diff_to_nearest_coord_in_box(&self, rect: &Rect, pos: Point) -> Point {
        let coord = self.nearest_coord_in_box(rect, pos);
        self.diff(pos, coord)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::prelude::*;

    fn torus() -> WorldGeometry {
        WorldGeometry::with_wrapping(Point::new(100, 100), true, true)
    }

    #[test]
    fn rects_intersect_across_seams() {
        let world = torus();
        let a = Rect::from_sides(95., 95., 105., 105.);
        let b = Rect::from_sides(2., 2., 3., 3.);
        let c = Rect::from_sides(50., 50., 60., 60.);
        assert!(world.rect_intersects_rect(&a, &b));
        assert!(world.rect_intersects_rect(&b, &a));
        assert!(!world.rect_intersects_rect(&a, &c));
        assert!(!WorldGeometry::null().rect_intersects_rect(&a, &b));
    }

    #[test]
    fn rect_overlap_is_none_when_apart() {
        let world = torus();
        let a = Rect::from_sides(0., 0., 10., 10.);
        assert_eq!(world.rect_overlap(&a, &Rect::from_sides(40., 40., 50., 50.)), None);
        assert_eq!(
            world.rect_overlap(&a, &Rect::from_sides(95., 5., 102., 20.)),
            Some(Rect::from_sides(0., 5., 2., 10.))
        );
    }

    #[test]
    fn null_rect_overlaps_nothing() {
        let a = Rect::from_sides(0., 0., 10., 10.);
        for world in [torus(), WorldGeometry::null()] {
            assert_eq!(world.rect_overlap(&a, &Rect::null()), None);
            assert_eq!(world.rect_overlap(&Rect::null(), &a), None);
            assert_eq!(world.rect_overlap(&Rect::null(), &Rect::null()), None);
        }
    }

    #[test]
    fn poly_containment_across_seam() {
        let world = torus();
        let poly = Polygon::from_verts(vec![
            Point::new(98., 40.),
            Point::new(104., 40.),
            Point::new(101., 46.),
        ]);
        assert!(world.poly_contains(&poly, Point::new(1., 41.)));
        assert!(world.poly_contains(&poly, Point::new(99., 41.)));
        assert!(!world.poly_contains(&poly, Point::new(10., 41.)));
    }

    #[test]
    fn overlap_area_across_seam() {
        let world = torus();
        let a = Polygon::from(Rect::from_sides(98., 0., 102., 4.));
        let b = Polygon::from(Rect::from_sides(0., 0., 10., 10.));
        assert_relative_eq!(world.poly_overlap_area(&a, &b), 8.);
        assert_relative_eq!(world.poly_overlap_area(&b, &a), 8.);
        assert!(world.poly_intersects_poly(&a, &b));
    }

    #[test]
    fn lines_hit_shapes_across_seam() {
        let world = torus();
        let line = Line::new(Point::new(90., 50.), Point::new(105., 50.));
        let rect = Rect::from_sides(2., 45., 4., 55.);
        let poly = Polygon::from(rect);
        assert!(world.line_intersects_rect(&line, &rect));
        assert!(world.line_intersects_poly(&line, &poly));
        let short = Line::new(Point::new(90., 50.), Point::new(99., 50.));
        assert!(!world.line_intersects_rect(&short, &rect));
        assert!(!world.line_intersects_poly(&short, &poly));
    }

    #[test]
    fn first_hit_follows_line_direction() {
        let world = torus();
        let poly = Polygon::from(Rect::from_sides(2., 0., 6., 4.));
        let backwards = Line::new(Point::new(10., 2.), Point::new(-10., 2.));
        assert_eq!(
            world.line_intersects_poly_at(&backwards, &poly),
            Some(Point::new(6., 2.))
        );
        let miss = Line::new(Point::new(10., 20.), Point::new(-10., 20.));
        assert_eq!(world.line_intersects_poly_at(&miss, &poly), None);
    }

    #[test]
    fn circles_across_seam() {
        let world = torus();
        let line = Line::new(Point::new(0., 0.), Point::new(0., 10.));
        assert!(world.line_intersects_circle(&line, Point::new(98., 5.), 2.5));
        assert!(!world.line_intersects_circle(&line, Point::new(95., 5.), 2.5));

        let rect = Rect::from_sides(0., 0., 10., 10.);
        assert!(world.rect_intersects_circle(&rect, Point::new(98., 5.), 2.5));
        assert!(world.rect_intersects_circle(&rect, Point::new(105., 5.), 0.1));
        assert!(!world.rect_intersects_circle(&rect, Point::new(50., 50.), 5.));
    }

    #[test]
    fn poly_distance_uses_nearest_copy() {
        let world = torus();
        let poly = Polygon::from(Rect::from_sides(0., 0., 10., 10.));
        assert_relative_eq!(world.poly_distance(&poly, Point::new(97., 5.)), 3.);
        assert_relative_eq!(world.poly_distance(&poly, Point::new(5., 5.)), 0.);
    }

    #[test]
    fn diff_to_nearest_coord() {
        let world = torus();
        let rect = Rect::from_sides(0., 0., 10., 10.);
        assert_eq!(
            world.diff_to_nearest_coord_in_box(&rect, Point::new(97., 15.)),
            Point::new(-3., 5.)
        );
        assert_eq!(
            world.diff_to_nearest_coord_in_box(&rect, Point::new(4., 4.)),
            Point::zero()
        );
    }
}
