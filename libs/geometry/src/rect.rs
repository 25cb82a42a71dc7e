//! Axis-aligned rectangles.

use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::contains::{Containment, Contains};
use crate::coord::Coord;
use crate::dir::Dir;
use crate::intersect::Intersect;
use crate::line::Line;
use crate::point::Point;
use crate::span::Span;
use crate::transform::TranslateMut;

/// An axis-aligned rectangle, specified by lower-left and upper-right corners.
///
/// A rectangle whose lower-left corner lies beyond its upper-right corner on
/// either axis is *null*: it contains nothing, and is what [`Rect::null`] returns.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Rect<T = f32> {
    /// The lower-left corner.
    p0: Point<T>,
    /// The upper-right corner.
    p1: Point<T>,
}

impl<T: Coord> Rect<T> {
    /// Creates a new rectangle from the given opposite corner points.
    ///
    /// # Examples
    ///
    /// Create a rectangle from the lower right and upper left corners:
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::new(Point::new(30, 20), Point::new(15, 40));
    /// assert_eq!(rect.left(), 15);
    /// assert_eq!(rect.bot(), 20);
    /// assert_eq!(rect.right(), 30);
    /// assert_eq!(rect.top(), 40);
    /// ```
    #[inline]
    pub fn new(p0: Point<T>, p1: Point<T>) -> Self {
        Self {
            p0: Point::new(p0.x.partial_min(p1.x), p0.y.partial_min(p1.y)),
            p1: Point::new(p0.x.partial_max(p1.x), p0.y.partial_max(p1.y)),
        }
    }

    /// The null rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::<f32>::null();
    /// assert!(rect.is_null());
    /// assert!(!rect.intersects(&Rect::from_sides(0., 0., 1., 1.)));
    /// ```
    pub const fn null() -> Self {
        Self {
            p0: Point::new(T::MAX, T::MAX),
            p1: Point::new(T::MIN, T::MIN),
        }
    }

    /// Creates a rectangle from all 4 sides (left, bottom, right, top).
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(15, 20, 30, 40);
    /// assert_eq!(rect.left(), 15);
    /// assert_eq!(rect.bot(), 20);
    /// assert_eq!(rect.right(), 30);
    /// assert_eq!(rect.top(), 40);
    /// ```
    ///
    /// # Panics
    ///
    /// This method panics if `left > right` or if `bot > top`.
    ///
    /// If you want sides to be sorted for you, consider using [`Rect::new`] instead.
    #[inline]
    pub fn from_sides(left: T, bot: T, right: T, top: T) -> Self {
        assert!(
            left <= right,
            "Rect::from_sides requires that left ({:?}) <= right ({:?})",
            left,
            right
        );
        assert!(
            bot <= top,
            "Rect::from_sides requires that bot ({:?}) <= top ({:?})",
            bot,
            top
        );
        Self::new(Point::new(left, bot), Point::new(right, top))
    }

    /// Creates a rectangle with lower-left corner `min` and the given size.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::with_size(Point::new(10, 20), Point::new(5, 8));
    /// assert_eq!(rect, Rect::from_sides(10, 20, 15, 28));
    /// ```
    #[inline]
    pub fn with_size(min: Point<T>, size: Point<T>) -> Self {
        Self::new(min, min + size)
    }

    /// Creates a rectangle from horizontal and vertical [`Span`]s.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_spans(Span::new(15, 30), Span::new(20, 40));
    /// assert_eq!(rect, Rect::from_sides(15, 20, 30, 40));
    /// ```
    pub fn from_spans(h: Span<T>, v: Span<T>) -> Self {
        Self {
            p0: Point::new(h.start(), v.start()),
            p1: Point::new(h.stop(), v.stop()),
        }
    }

    /// Returns true if this is a null rectangle.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.p0.x > self.p1.x || self.p0.y > self.p1.y
    }

    /// The lower-left corner.
    #[inline]
    pub fn min(&self) -> Point<T> {
        self.p0
    }

    /// The upper-right corner.
    #[inline]
    pub fn max(&self) -> Point<T> {
        self.p1
    }

    /// Returns the bottom y-coordinate of the rectangle.
    #[inline]
    pub fn bot(&self) -> T {
        self.p0.y
    }

    /// Returns the top y-coordinate of the rectangle.
    #[inline]
    pub fn top(&self) -> T {
        self.p1.y
    }

    /// Returns the left x-coordinate of the rectangle.
    #[inline]
    pub fn left(&self) -> T {
        self.p0.x
    }

    /// Returns the right x-coordinate of the rectangle.
    #[inline]
    pub fn right(&self) -> T {
        self.p1.x
    }

    /// The lower coordinate along `dir`: left for horizontal, bottom for vertical.
    #[inline]
    pub fn lower_coord(&self, dir: Dir) -> T {
        self.p0.coord(dir)
    }

    /// The upper coordinate along `dir`: right for horizontal, top for vertical.
    #[inline]
    pub fn upper_coord(&self, dir: Dir) -> T {
        self.p1.coord(dir)
    }

    /// Returns the horizontal [`Span`] of the rectangle.
    pub fn hspan(&self) -> Span<T> {
        self.span(Dir::Horiz)
    }

    /// Returns the vertical [`Span`] of the rectangle.
    pub fn vspan(&self) -> Span<T> {
        self.span(Dir::Vert)
    }

    /// Returns the [`Span`] of the rectangle along `dir`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(10, 20, 30, 40);
    /// assert_eq!(rect.span(Dir::Horiz), Span::new(10, 30));
    /// assert_eq!(rect.span(Dir::Vert), Span::new(20, 40));
    /// ```
    pub fn span(&self, dir: Dir) -> Span<T> {
        Span::new(self.p0.coord(dir), self.p1.coord(dir))
    }

    /// Returns a [`Rect`] with the given `span` in the given `dir`, and the current span in the
    /// other direction.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(10, 20, 30, 40);
    /// assert_eq!(rect.with_span(Span::new(100, 200), Dir::Vert), Rect::from_sides(10, 100, 30, 200));
    /// ```
    pub fn with_span(self, span: Span<T>, dir: Dir) -> Self {
        Self {
            p0: self.p0.with_coord(dir, span.start()),
            p1: self.p1.with_coord(dir, span.stop()),
        }
    }

    /// The length of the rectangle along `dir`.
    #[inline]
    pub fn length(&self, dir: Dir) -> T {
        self.p1.coord(dir) - self.p0.coord(dir)
    }

    /// Returns the horizontal width of the rectangle.
    #[inline]
    pub fn width(&self) -> T {
        self.length(Dir::Horiz)
    }

    /// Returns the vertical height of the rectangle.
    #[inline]
    pub fn height(&self) -> T {
        self.length(Dir::Vert)
    }

    /// The width and height as a point.
    #[inline]
    pub fn size(&self) -> Point<T> {
        self.p1 - self.p0
    }

    /// Returns the area of the rectangle, or zero for a null rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// assert_eq!(Rect::from_sides(10, 20, 30, 50).area(), 600);
    /// ```
    pub fn area(&self) -> T {
        if self.is_null() {
            T::ZERO
        } else {
            self.width() * self.height()
        }
    }

    /// Returns the center point of the rectangle.
    ///
    /// Integer centers are rounded toward zero.
    pub fn center(&self) -> Point<T> {
        Point::new(
            (self.p0.x + self.p1.x).halve(),
            (self.p0.y + self.p1.y).halve(),
        )
    }

    /// Returns a rectangle of the same size centered at `center`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(10., 10., 14., 12.);
    /// assert_eq!(rect.with_center(Point::zero()), Rect::from_sides(-2., -1., 2., 1.));
    /// ```
    pub fn with_center(self, center: Point<T>) -> Self {
        let offset = center - self.center();
        Self {
            p0: self.p0 + offset,
            p1: self.p1 + offset,
        }
    }

    /// Checks if this rectangle intersects with `other`.
    ///
    /// Rectangles that share only an edge or a corner intersect. Null
    /// rectangles intersect nothing.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(0, 0, 10, 10);
    /// assert!(rect.intersects(&Rect::from_sides(10, 5, 20, 6)));
    /// assert!(!rect.intersects(&Rect::from_sides(11, 5, 20, 6)));
    /// ```
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        !(other.p1.x < self.p0.x
            || self.p1.x < other.p0.x
            || other.p1.y < self.p0.y
            || self.p1.y < other.p0.y)
    }

    /// Calculates the intersection of this rectangle with `other`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let r1 = Rect::from_sides(0, 0, 10, 10);
    /// let r2 = Rect::from_sides(5, -5, 20, 6);
    /// assert_eq!(r1.intersection(r2), Some(Rect::from_sides(5, 0, 10, 6)));
    /// ```
    pub fn intersection(self, other: Self) -> Option<Self> {
        if !self.intersects(&other) {
            return None;
        }
        Some(Self {
            p0: Point::new(
                self.p0.x.partial_max(other.p0.x),
                self.p0.y.partial_max(other.p0.y),
            ),
            p1: Point::new(
                self.p1.x.partial_min(other.p1.x),
                self.p1.y.partial_min(other.p1.y),
            ),
        })
    }

    /// Calculates the smallest rectangle containing this rectangle and `other`.
    pub fn union(self, other: Self) -> Self {
        if self.is_null() {
            return other;
        }
        if other.is_null() {
            return self;
        }
        Self {
            p0: Point::new(
                self.p0.x.partial_min(other.p0.x),
                self.p0.y.partial_min(other.p0.y),
            ),
            p1: Point::new(
                self.p1.x.partial_max(other.p1.x),
                self.p1.y.partial_max(other.p1.y),
            ),
        }
    }

    /// The point within the rectangle nearest to `point`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(0, 0, 10, 10);
    /// assert_eq!(rect.nearest_point_to(Point::new(15, 5)), Point::new(10, 5));
    /// assert_eq!(rect.nearest_point_to(Point::new(3, 4)), Point::new(3, 4));
    /// ```
    pub fn nearest_point_to(&self, point: Point<T>) -> Point<T> {
        Point::new(
            point.x.partial_clamp(self.p0.x, self.p1.x),
            point.y.partial_clamp(self.p0.y, self.p1.y),
        )
    }
}

impl Rect<f32> {
    /// The four edges, counterclockwise from the bottom edge.
    pub fn edges(&self) -> [Line; 4] {
        let ll = self.p0;
        let lr = Point::new(self.p1.x, self.p0.y);
        let ur = self.p1;
        let ul = Point::new(self.p0.x, self.p1.y);
        [
            Line::new(ll, lr),
            Line::new(lr, ur),
            Line::new(ur, ul),
            Line::new(ul, ll),
        ]
    }

    /// Checks whether the segment `line` touches this rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(0., 0., 10., 10.);
    /// assert!(rect.intersects_line(&Line::new(Point::new(-5., 5.), Point::new(5., 15.))));
    /// assert!(!rect.intersects_line(&Line::new(Point::new(-5., 5.), Point::new(-1., 15.))));
    /// ```
    pub fn intersects_line(&self, line: &Line) -> bool {
        if self.is_null() {
            return false;
        }
        self.encloses(&line.start())
            || self.encloses(&line.end())
            || self.edges().iter().any(|edge| edge.intersects(line))
    }
}

impl Bbox for Rect<f32> {
    fn bbox(&self) -> Option<Rect> {
        if self.is_null() {
            None
        } else {
            Some(*self)
        }
    }
}

impl<T: Coord> Intersect<Rect<T>> for Rect<T> {
    type Output = Self;

    fn intersect(&self, bounds: &Rect<T>) -> Option<Self::Output> {
        self.intersection(*bounds)
    }
}

impl<T: Coord> TranslateMut<T> for Rect<T> {
    fn translate_mut(&mut self, p: Point<T>) {
        if self.is_null() {
            return;
        }
        self.p0.translate_mut(p);
        self.p1.translate_mut(p);
    }
}

impl<T: Coord> Contains<Point<T>> for Rect<T> {
    fn contains(&self, other: &Point<T>) -> Containment {
        Containment::full_if(
            other.x >= self.p0.x
                && other.x <= self.p1.x
                && other.y >= self.p0.y
                && other.y <= self.p1.y,
        )
    }
}

impl<T: Coord> Contains<Rect<T>> for Rect<T> {
    fn contains(&self, other: &Rect<T>) -> Containment {
        if other.is_null() || !self.intersects(other) {
            Containment::None
        } else if other.p0.x >= self.p0.x
            && other.p1.x <= self.p1.x
            && other.p0.y >= self.p0.y
            && other.p1.y <= self.p1.y
        {
            Containment::Full
        } else {
            Containment::Partial
        }
    }
}
