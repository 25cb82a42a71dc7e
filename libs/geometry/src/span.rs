//! A one-dimensional span.
//!
//! A span represents the closed interval `[start, stop]`.
use serde::{Deserialize, Serialize};

use crate::contains::{Containment, Contains};
use crate::coord::Coord;
use crate::intersect::Intersect;

/// A closed interval of coordinates in one dimension.
///
/// Represents the range `[start, stop]`, with `start <= stop`.
#[derive(Debug, Default, Clone, Copy, PartialOrd, Serialize, Deserialize, PartialEq)]
pub struct Span<T = f32> {
    start: T,
    stop: T,
}

impl<T: Coord> Span<T> {
    /// Creates a new [`Span`] between two coordinates, in either order.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let span = Span::new(20, 10);
    /// assert_eq!(span.start(), 10);
    /// assert_eq!(span.stop(), 20);
    /// ```
    pub fn new(start: T, stop: T) -> Self {
        Self {
            start: start.partial_min(stop),
            stop: start.partial_max(stop),
        }
    }

    /// Creates a span of zero length encompassing the given point.
    pub const fn from_point(x: T) -> Self {
        Self { start: x, stop: x }
    }

    /// Creates a span of the given non-negative length starting from `start`.
    pub fn with_start_and_length(start: T, length: T) -> Self {
        Self::new(start, start + length)
    }

    /// Gets the start of the span.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Gets the stop of the span.
    #[inline]
    pub fn stop(&self) -> T {
        self.stop
    }

    /// Gets the length of the span.
    #[inline]
    pub fn length(&self) -> T {
        self.stop - self.start
    }

    /// Gets the center of the span, rounded toward zero for integers.
    #[inline]
    pub fn center(&self) -> T {
        (self.start + self.stop).halve()
    }

    /// Checks if the span intersects with the [`Span`] `other`.
    ///
    /// Spans that touch at an endpoint intersect.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(other.stop < self.start || self.stop < other.start)
    }

    /// Calculates the intersection of this span with `other`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let s1 = Span::new(0, 10);
    /// assert_eq!(s1.intersection(Span::new(5, 20)), Some(Span::new(5, 10)));
    /// assert_eq!(s1.intersection(Span::new(15, 20)), None);
    /// ```
    pub fn intersection(self, other: Self) -> Option<Self> {
        let start = self.start.partial_max(other.start);
        let stop = self.stop.partial_min(other.stop);
        if start > stop {
            None
        } else {
            Some(Self { start, stop })
        }
    }

    /// Calculates the smallest interval containing this span and `other`.
    pub fn union(self, other: Self) -> Self {
        Self {
            start: self.start.partial_min(other.start),
            stop: self.stop.partial_max(other.stop),
        }
    }

    /// Returns a new [`Span`] representing the union of the current span with the given point.
    pub fn add_point(self, pos: T) -> Self {
        Self {
            start: self.start.partial_min(pos),
            stop: self.stop.partial_max(pos),
        }
    }

    /// Translates the span by the given amount.
    pub fn translate(self, amount: T) -> Self {
        Self {
            start: self.start + amount,
            stop: self.stop + amount,
        }
    }

    /// Gets the shortest distance between this span and a point.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let span = Span::new(10, 20);
    /// assert_eq!(span.dist_to(4), 6);
    /// assert_eq!(span.dist_to(12), 0);
    /// assert_eq!(span.dist_to(27), 7);
    /// ```
    pub fn dist_to(&self, point: T) -> T {
        if point < self.start {
            self.start - point
        } else if point > self.stop {
            point - self.stop
        } else {
            T::ZERO
        }
    }

    /// The coordinate within the span closest to `point`.
    #[inline]
    pub fn nearest_to(&self, point: T) -> T {
        point.partial_clamp(self.start, self.stop)
    }
}

impl<T: Coord> Intersect<Span<T>> for Span<T> {
    type Output = Self;
    fn intersect(&self, other: &Span<T>) -> Option<Self::Output> {
        self.intersection(*other)
    }
}

impl<T: Coord> Contains<T> for Span<T> {
    fn contains(&self, other: &T) -> Containment {
        Containment::full_if(*other >= self.start && *other <= self.stop)
    }
}

impl<T: Coord> Contains<Span<T>> for Span<T> {
    fn contains(&self, other: &Span<T>) -> Containment {
        if other.start >= self.start && other.stop <= self.stop {
            Containment::Full
        } else if self.intersects(other) {
            Containment::Partial
        } else {
            Containment::None
        }
    }
}

impl<T: Coord> From<(T, T)> for Span<T> {
    #[inline]
    fn from(tup: (T, T)) -> Self {
        Self::new(tup.0, tup.1)
    }
}

impl<T: Coord> From<Span<T>> for (T, T) {
    #[inline]
    fn from(s: Span<T>) -> Self {
        (s.start(), s.stop())
    }
}
