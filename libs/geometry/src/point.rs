//! 2-D points.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::dir::Dir;
use crate::transform::TranslateMut;

/// A point (or displacement) in two-dimensional space.
///
/// Defaults to `f32` coordinates; integer points (`Point<i32>`) are used for
/// tile-like addressing.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Point<T = f32> {
    /// The x-coordinate of the point.
    pub x: T,
    /// The y-coordinate of the point.
    pub y: T,
}

impl<T: Coord> Point<T> {
    /// Creates a new [`Point`] from (x,y) coordinates.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Returns the origin, `(0, 0)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let origin = Point::<i32>::zero();
    /// assert_eq!(origin, Point::new(0, 0));
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Self {
            x: T::ZERO,
            y: T::ZERO,
        }
    }

    /// Creates a new point from the given axis and coordinates.
    ///
    /// If `dir` is [`Dir::Horiz`], `a` becomes the x-coordinate and `b` becomes the y-coordinate.
    /// If `dir` is [`Dir::Vert`], `a` becomes the y-coordinate and `b` becomes the x-coordinate.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// assert_eq!(Point::from_dir_coords(Dir::Horiz, 1, 2), Point::new(1, 2));
    /// assert_eq!(Point::from_dir_coords(Dir::Vert, 1, 2), Point::new(2, 1));
    /// ```
    pub fn from_dir_coords(dir: Dir, a: T, b: T) -> Self {
        match dir {
            Dir::Horiz => Self::new(a, b),
            Dir::Vert => Self::new(b, a),
        }
    }

    /// Gets the coordinate along axis `dir`.
    #[inline]
    pub fn coord(&self, dir: Dir) -> T {
        match dir {
            Dir::Horiz => self.x,
            Dir::Vert => self.y,
        }
    }

    /// Returns a copy of this point with the coordinate along `dir` replaced by `value`.
    #[inline]
    pub fn with_coord(mut self, dir: Dir, value: T) -> Self {
        match dir {
            Dir::Horiz => self.x = value,
            Dir::Vert => self.y = value,
        }
        self
    }

    /// Applies `f` to each coordinate.
    #[inline]
    pub fn map<U>(self, mut f: impl FnMut(Dir, T) -> U) -> Point<U> {
        Point {
            x: f(Dir::Horiz, self.x),
            y: f(Dir::Vert, self.y),
        }
    }

    /// Combines two points coordinate by coordinate.
    #[inline]
    pub fn zip_with<U>(self, other: Self, mut f: impl FnMut(Dir, T, T) -> U) -> Point<U> {
        Point {
            x: f(Dir::Horiz, self.x, other.x),
            y: f(Dir::Vert, self.y, other.y),
        }
    }
}

impl Point<f32> {
    /// The Euclidean length of this point viewed as a vector.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// assert_eq!(Point::new(3., 4.).magnitude(), 5.);
    /// ```
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.x.hypot(self.y)
    }

    /// The dot product with `other`.
    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// The z-component of the cross product with `other`.
    ///
    /// Positive if `other` is counterclockwise from `self`.
    #[inline]
    pub fn cross(&self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// The distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: Self) -> f32 {
        (*self - other).magnitude()
    }
}

impl<T: Coord> TranslateMut<T> for Point<T> {
    fn translate_mut(&mut self, p: Point<T>) {
        self.x += p.x;
        self.y += p.y;
    }
}

impl<T: Coord> Add<Point<T>> for Point<T> {
    type Output = Self;
    fn add(self, rhs: Point<T>) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Coord> AddAssign<Point<T>> for Point<T> {
    fn add_assign(&mut self, rhs: Point<T>) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: Coord> Sub<Point<T>> for Point<T> {
    type Output = Self;
    fn sub(self, rhs: Point<T>) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Coord> SubAssign<Point<T>> for Point<T> {
    fn sub_assign(&mut self, rhs: Point<T>) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T: Coord> Mul<T> for Point<T> {
    type Output = Self;

    /// Scales both coordinates by `rhs`.
    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Coord> Div<T> for Point<T> {
    type Output = Self;

    /// Divides both coordinates by `rhs`.
    fn div(self, rhs: T) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: Coord + Neg<Output = T>> Neg for Point<T> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Coord> From<(T, T)> for Point<T> {
    fn from(value: (T, T)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

impl AbsDiffEq for Point<f32> {
    type Epsilon = f32;

    fn default_epsilon() -> Self::Epsilon {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Point<f32> {
    fn default_max_relative() -> Self::Epsilon {
        f32::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn arithmetic_is_componentwise() {
        let a = Point::new(1, 2);
        let b = Point::new(10, 20);
        assert_eq!(a + b, Point::new(11, 22));
        assert_eq!(b - a, Point::new(9, 18));
        assert_eq!(a * 3, Point::new(3, 6));
        assert_eq!(b / 10, Point::new(1, 2));
        assert_eq!(-a, Point::new(-1, -2));
    }

    #[test]
    fn coordinates_by_axis() {
        let p = Point::new(4., 7.);
        assert_eq!(p.coord(Dir::Horiz), 4.);
        assert_eq!(p.coord(Dir::Vert), 7.);
        assert_eq!(p.with_coord(Dir::Vert, 1.), Point::new(4., 1.));
    }

    #[test]
    fn cross_sign_gives_turn_direction() {
        let east = Point::new(1., 0.);
        let north = Point::new(0., 1.);
        assert!(east.cross(north) > 0.);
        assert!(north.cross(east) < 0.);
        assert_relative_eq!(Point::new(0.1f32 + 0.2, 0.), Point::new(0.3, 0.));
    }
}
