//! Wrap arithmetic along a single world axis.

use crate::scalar::{wrap_diff, WrapScalar};

/// The extent of the world along one axis, and whether that axis wraps.
///
/// An axis of size 0 is unbounded and never wraps. Sizes are capped at
/// [`Axis::MAX_SIZE`] so that every coordinate type can hold the extent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Axis {
    size: u32,
    wraps: bool,
}

impl Axis {
    /// The largest supported extent, `i32::MAX`.
    pub const MAX_SIZE: u32 = i32::MAX as u32;

    /// Creates a new axis, ignoring `wraps` if `size` is 0.
    ///
    /// A `size` above [`Axis::MAX_SIZE`] is clamped to it.
    pub const fn new(size: u32, wraps: bool) -> Self {
        let size = if size > Self::MAX_SIZE {
            Self::MAX_SIZE
        } else {
            size
        };
        Self {
            size,
            wraps: wraps && size != 0,
        }
    }

    /// An unbounded, non-wrapping axis.
    pub const fn null() -> Self {
        Self::new(0, false)
    }

    /// The world extent along this axis.
    #[inline]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Whether coordinates wrap around at the world extent.
    #[inline]
    pub const fn wraps(&self) -> bool {
        self.wraps
    }

    /// The world extent as a coordinate.
    #[inline]
    pub fn size_as<S: WrapScalar>(&self) -> S {
        S::from_u32(self.size)
    }

    /// Reduces `v` into `[0, size)` if this axis wraps.
    ///
    /// # Example
    ///
    /// ```
    /// # use world_geometry::axis::Axis;
    /// let axis = Axis::new(100, true);
    /// assert_eq!(axis.wrap(-5), 95);
    /// assert_eq!(axis.wrap(250.5f32), 50.5);
    /// assert_eq!(Axis::new(100, false).wrap(-5), -5);
    /// ```
    #[inline]
    pub fn wrap<S: WrapScalar>(&self, v: S) -> S {
        if self.wraps {
            v.pmod(self.size_as())
        } else {
            v
        }
    }

    /// Brings `v` in bounds: wraps on a wrapping axis, otherwise clamps into
    /// the world extent.
    ///
    /// Float results on a non-wrapping axis stay strictly below the size.
    /// An unbounded axis leaves `v` unchanged.
    pub fn limit<S: WrapScalar>(&self, v: S) -> S {
        if self.size == 0 {
            v
        } else if self.wraps {
            self.wrap(v)
        } else {
            let size = self.size_as();
            v.partial_clamp(S::ZERO, S::upper_limit(size))
        }
    }

    /// The shortest signed difference `a - b`.
    ///
    /// On a wrapping axis the result lies in `[-size / 2, size / 2)`. A
    /// difference of exactly half the size is `-size / 2` whichever way
    /// round the arguments are, so `diff(a, b) == -diff(b, a)` everywhere
    /// except at that tie. Off a wrapping axis the subtraction saturates.
    ///
    /// # Example
    ///
    /// ```
    /// # use world_geometry::axis::Axis;
    /// let axis = Axis::new(100, true);
    /// assert_eq!(axis.diff(5, 95), 10);
    /// assert_eq!(axis.diff(95, 5), -10);
    /// assert_eq!(axis.diff(50, 0), -50);
    /// assert_eq!(axis.diff(0, 50), -50);
    /// ```
    #[inline]
    pub fn diff<S: WrapScalar>(&self, a: S, b: S) -> S {
        if self.wraps {
            wrap_diff(a, b, self.size_as())
        } else {
            a.saturating_sub(b)
        }
    }

    /// The distance travelled from `b` to `a` moving only in the positive
    /// direction.
    #[inline]
    pub fn pdiff<S: WrapScalar>(&self, a: S, b: S) -> S {
        if self.wraps {
            let size = self.size_as();
            (a.pmod(size) - b.pmod(size)).pmod(size)
        } else {
            a.saturating_sub(b)
        }
    }

    /// The copy of `target` closest to `source`.
    ///
    /// Integer copies past the numeric bounds saturate.
    ///
    /// # Example
    ///
    /// ```
    /// # use world_geometry::axis::Axis;
    /// let axis = Axis::new(100, true);
    /// assert_eq!(axis.nearest_to(95, 3), 103);
    /// assert_eq!(axis.nearest_to(95, 60), 60);
    /// ```
    pub fn nearest_to<S: WrapScalar>(&self, source: S, target: S) -> S {
        if !self.wraps || target.distance(source) < self.size_as::<S>().halve() {
            target
        } else {
            source.saturating_add(self.diff(target, source))
        }
    }

    /// Whether the interval `[min, max]` straddles the seam once wrapped.
    #[inline]
    pub fn crosses_wrap<S: WrapScalar>(&self, min: S, max: S) -> bool {
        self.wraps && self.wrap(max) < self.wrap(min)
    }

    /// The cell index of `v`.
    ///
    /// Negative cells on a non-wrapping axis index as 0.
    #[inline]
    pub fn index(&self, v: i32) -> u32 {
        self.wrap(v).max(0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_never_wraps() {
        let axis = Axis::new(0, true);
        assert!(!axis.wraps());
        assert_eq!(axis.wrap(-7), -7);
        assert_eq!(axis.limit(-7.5f32), -7.5);
        assert_eq!(axis.diff(3, 10), -7);
    }

    #[test]
    fn limit_clamps_non_wrapping_axis() {
        let axis = Axis::new(10, false);
        assert_eq!(axis.limit(12), 10);
        assert_eq!(axis.limit(-3), 0);
        assert!(axis.limit(12f32) < 10.);
        assert_eq!(axis.limit(4.5f32), 4.5);
    }

    #[test]
    fn limit_wraps_wrapping_axis() {
        let axis = Axis::new(10, true);
        assert_eq!(axis.limit(12), 2);
        assert_eq!(axis.limit(-3f32), 7.);
    }

    #[test]
    fn pdiff_is_positive() {
        let axis = Axis::new(100, true);
        assert_eq!(axis.pdiff(5, 95), 10);
        assert_eq!(axis.pdiff(95, 5), 90);
        assert_eq!(Axis::new(100, false).pdiff(5, 95), -90);
    }

    #[test]
    fn crosses_wrap_detects_seam() {
        let axis = Axis::new(100, true);
        assert!(axis.crosses_wrap(90, 105));
        assert!(!axis.crosses_wrap(10, 20));
        assert!(!Axis::new(100, false).crosses_wrap(90, 105));
    }

    #[test]
    fn index_wraps_cells() {
        let axis = Axis::new(100, true);
        assert_eq!(axis.index(-1), 99);
        assert_eq!(axis.index(205), 5);
        assert_eq!(Axis::new(100, false).index(-4), 0);
    }

    #[test]
    fn extreme_coordinates_saturate() {
        let axis = Axis::new(100, true);
        assert_eq!(axis.diff(i32::MAX - 10, 0), 37);
        assert_eq!(axis.pdiff(i32::MIN, i32::MAX), 5);
        assert_eq!(axis.nearest_to(i32::MAX - 5, i32::MIN + 5), i32::MAX);
        assert_eq!(axis.nearest_to(i32::MIN + 5, i32::MAX - 5), i32::MIN);
        assert_eq!(Axis::new(100, false).diff(i32::MAX, -10), i32::MAX);
    }

    #[test]
    fn oversized_axis_is_clamped() {
        let axis = Axis::new(u32::MAX, true);
        assert_eq!(axis.size(), Axis::MAX_SIZE);
        assert_eq!(axis.wrap(-1), i32::MAX - 1);
        assert_eq!(axis.index(-1), Axis::MAX_SIZE - 1);
    }
}
