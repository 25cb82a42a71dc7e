//! Numeric coordinate types.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

/// A scalar that can be used as a coordinate of geometric primitives.
///
/// Implemented for the integer and floating point types used for world
/// coordinates and world sizes.
pub trait Coord:
    Copy
    + Default
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
{
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;
    /// The smallest representable value.
    const MIN: Self;
    /// The largest representable value.
    const MAX: Self;

    /// Converts an unsigned size into this coordinate type, saturating at
    /// [`Coord::MAX`].
    fn from_u32(value: u32) -> Self;

    /// Lossy conversion used for diagnostics.
    fn to_f64(self) -> f64;

    /// The smaller of two coordinates.
    ///
    /// If the values are unordered (eg. NaN), returns `self`.
    #[inline]
    fn partial_min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// The larger of two coordinates.
    ///
    /// If the values are unordered (eg. NaN), returns `self`.
    #[inline]
    fn partial_max(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }

    /// Restricts `self` to the closed interval `[lo, hi]`.
    #[inline]
    fn partial_clamp(self, lo: Self, hi: Self) -> Self {
        self.partial_max(lo).partial_min(hi)
    }

    /// Half of `self`, rounding toward zero for integers.
    #[inline]
    fn halve(self) -> Self {
        self / (Self::ONE + Self::ONE)
    }
}

macro_rules! impl_coord {
    ($($t:ty => $zero:expr, $one:expr, $from_u32:expr);* $(;)?) => {
        $(
            impl Coord for $t {
                const ZERO: Self = $zero;
                const ONE: Self = $one;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn from_u32(value: u32) -> Self {
                    ($from_u32)(value)
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_coord! {
    i32 => 0, 1, |v| i32::try_from(v).unwrap_or(i32::MAX);
    i64 => 0, 1, i64::from;
    u32 => 0, 1, std::convert::identity;
    f32 => 0., 1., |v| v as f32;
    f64 => 0., 1., f64::from;
}
