use geometry::prelude::*;

use super::line::seam;
use super::{compose, one, two, AxisFragments, Fragments};
use crate::error::Result;
use crate::world::WorldGeometry;

/// Appends `vertex` unless it repeats the previous vertex.
fn push_vertex(poly: &mut Polygon, vertex: Point) {
    if poly.last() != Some(vertex) {
        poly.push(vertex);
    }
}

/// The coordinate across `dir` at which `side` meets the seam at `at`.
fn seam_crossing(side: &Line, dir: Dir, at: f32) -> f32 {
    side.intersection(&seam(dir, at), true)
        .unwrap_or_else(|| side.start())
        .coord(!dir)
}

impl WorldGeometry {
    /// Splits the convex polygon `poly` across the seam along `dir`.
    ///
    /// The polygon is first moved by a whole number of world sizes so that
    /// its center lies inside the world. Each side is then classified against
    /// the low seam at 0 and the high seam at the world size. Vertices are
    /// collected into one of two fragments, switching fragments whenever a
    /// side crosses a seam.
    pub fn split_poly_along(&self, poly: &Polygon, dir: Dir) -> AxisFragments<Polygon> {
        let axis = self.axis(dir);
        if poly.is_null() || !axis.wraps() {
            return one(poly.clone());
        }
        let size: f32 = axis.size_as();

        let center = poly.center().coord(dir);
        let poly = poly
            .clone()
            .translate(Point::from_dir_coords(dir, axis.wrap(center) - center, 0.));
        let correct = Point::from_dir_coords(dir, size, 0.);

        let mut acc: [Polygon; 2] = Default::default();
        let mut active = 0;

        for side in poly.edges() {
            let start = side.start();
            let s = start.coord(dir);
            let e = side.end().coord(dir);

            if (s < 0.) ^ (e < 0.) {
                let across = seam_crossing(&side, dir, 0.);
                let low = Point::from_dir_coords(dir, 0., across);
                let high = Point::from_dir_coords(dir, size, across);
                if s < 0. {
                    push_vertex(&mut acc[active], start + correct);
                    push_vertex(&mut acc[active], high);
                    active ^= 1;
                    push_vertex(&mut acc[active], low);
                } else {
                    push_vertex(&mut acc[active], start);
                    push_vertex(&mut acc[active], low);
                    active ^= 1;
                    push_vertex(&mut acc[active], high);
                }
            } else if (s > size) ^ (e > size) {
                let across = seam_crossing(&side, dir, size);
                let low = Point::from_dir_coords(dir, 0., across);
                let high = Point::from_dir_coords(dir, size, across);
                if s > size {
                    push_vertex(&mut acc[active], start - correct);
                    push_vertex(&mut acc[active], low);
                    active ^= 1;
                    push_vertex(&mut acc[active], high);
                } else {
                    push_vertex(&mut acc[active], start);
                    push_vertex(&mut acc[active], high);
                    active ^= 1;
                    push_vertex(&mut acc[active], low);
                }
            } else if s < 0. {
                push_vertex(&mut acc[active], start + correct);
            } else if s > size {
                push_vertex(&mut acc[active], start - correct);
            } else {
                push_vertex(&mut acc[active], start);
            }
        }

        let [first, second] = acc;
        match (first.is_null(), second.is_null()) {
            (_, true) => one(first),
            (true, false) => one(second),
            (false, false) => {
                tracing::trace!(axis = %dir, "splitting polygon across seam");
                two(first, second)
            }
        }
    }

    /// Splits `poly` across the x seam.
    pub fn split_poly_x(&self, poly: &Polygon) -> AxisFragments<Polygon> {
        self.split_poly_along(poly, Dir::Horiz)
    }

    /// Splits `poly` across the y seam.
    pub fn split_poly_y(&self, poly: &Polygon) -> AxisFragments<Polygon> {
        self.split_poly_along(poly, Dir::Vert)
    }

    /// Splits `poly` across both seams, x first.
    ///
    /// # Example
    ///
    /// ```
    /// # use world_geometry::prelude::*;
    /// let world = WorldGeometry::new(100, 100);
    /// let square = Polygon::from(Rect::from_sides(-2., 0., 2., 4.));
    /// let parts = world.split_poly(&square);
    /// assert_eq!(parts.len(), 2);
    /// assert_eq!(parts[0].convex_area() + parts[1].convex_area(), 16.);
    /// ```
    pub fn split_poly(&self, poly: &Polygon) -> Fragments<Polygon> {
        compose(self.split_poly_x(poly), |p| self.split_poly_y(&p))
    }

    /// Splits `poly` after translating it by `position`.
    pub fn split_poly_at(&self, poly: &Polygon, position: Point) -> Fragments<Polygon> {
        self.split_poly(&poly.clone().translate(position))
    }

    /// Splits `poly` across both seams, failing if it is wider than the world.
    pub fn try_split_poly(&self, poly: &Polygon) -> Result<Fragments<Polygon>> {
        if let Some(bbox) = poly.bbox() {
            for dir in Dir::ALL {
                self.check_extent(dir, f64::from(bbox.length(dir)))?;
            }
        }
        Ok(self.split_poly(poly))
    }
}
