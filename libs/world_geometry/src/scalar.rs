//! Scalar types that wrap around a world axis.

use geometry::coord::Coord;

/// A coordinate type with a positive modulo.
///
/// Integer coordinates address cells; float coordinates address continuous
/// positions.
pub trait WrapScalar: Coord {
    /// Reduces `self` into `[0, size)`, even for negative input.
    fn pmod(self, size: Self) -> Self;

    /// The largest in-bounds value on a non-wrapping axis of the given size.
    fn upper_limit(size: Self) -> Self;

    /// `|self - other|`, saturating at the largest representable value.
    fn distance(self, other: Self) -> Self;

    /// `self + other`, saturating at the numeric bounds.
    fn saturating_add(self, other: Self) -> Self;

    /// `self - other`, saturating at the numeric bounds.
    fn saturating_sub(self, other: Self) -> Self;
}

impl WrapScalar for i32 {
    #[inline]
    fn pmod(self, size: Self) -> Self {
        self.rem_euclid(size)
    }

    #[inline]
    fn upper_limit(size: Self) -> Self {
        size
    }

    #[inline]
    fn distance(self, other: Self) -> Self {
        i32::try_from(self.abs_diff(other)).unwrap_or(i32::MAX)
    }

    #[inline]
    fn saturating_add(self, other: Self) -> Self {
        i32::saturating_add(self, other)
    }

    #[inline]
    fn saturating_sub(self, other: Self) -> Self {
        i32::saturating_sub(self, other)
    }
}

impl WrapScalar for f32 {
    /// Tiny negative inputs can round up to exactly `size`; those map to 0.
    #[inline]
    fn pmod(self, size: Self) -> Self {
        let r = self.rem_euclid(size);
        if r >= size {
            0.
        } else {
            r
        }
    }

    /// The largest `f32` strictly below `size`, so that the result truncates
    /// to a valid index.
    #[inline]
    fn upper_limit(size: Self) -> Self {
        if size > 0. {
            f32::from_bits(size.to_bits() - 1)
        } else {
            0.
        }
    }

    #[inline]
    fn distance(self, other: Self) -> Self {
        (self - other).abs()
    }

    #[inline]
    fn saturating_add(self, other: Self) -> Self {
        self + other
    }

    #[inline]
    fn saturating_sub(self, other: Self) -> Self {
        self - other
    }
}

/// The signed difference `a - b` with the smallest magnitude modulo `size`.
///
/// Results lie in `[-size / 2, size / 2)`; a difference of exactly half the
/// size maps to the negative end.
///
/// Both operands are reduced into `[0, size)` first, so extreme integer
/// coordinates do not overflow.
///
/// # Example
///
/// ```
/// # use world_geometry::scalar::wrap_diff;
/// assert_eq!(wrap_diff(5, 95, 100), 10);
/// assert_eq!(wrap_diff(95, 5, 100), -10);
/// assert_eq!(wrap_diff(50, 0, 100), -50);
/// ```
#[inline]
pub fn wrap_diff<S: WrapScalar>(a: S, b: S, size: S) -> S {
    let half = size.halve();
    (a.pmod(size) - b.pmod(size) + half).pmod(size) - half
}
