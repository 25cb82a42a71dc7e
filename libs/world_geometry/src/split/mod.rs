//! Splitting shapes into fragments that do not cross a seam.
//!
//! Every splitter works one axis at a time. The two-axis splitters split along
//! x first and then split each x fragment along y, so a shape yields 1, 2 or
//! 4 fragments.

use tinyvec::ArrayVec;

mod line;
mod poly;
mod rect;
mod span;

/// The fragments of a shape split along one axis.
pub type AxisFragments<T> = ArrayVec<[T; 2]>;

/// The fragments of a shape split along both axes.
pub type Fragments<T> = ArrayVec<[T; 4]>;

/// A single fragment.
pub(crate) fn one<T: Default>(value: T) -> AxisFragments<T> {
    let mut out = AxisFragments::new();
    out.push(value);
    out
}

/// Two fragments, in order.
pub(crate) fn two<T: Default>(first: T, second: T) -> AxisFragments<T> {
    let mut out = AxisFragments::new();
    out.push(first);
    out.push(second);
    out
}

/// Splits each of `fragments` again with `split`, concatenating the results.
pub(crate) fn compose<T: Default>(
    fragments: AxisFragments<T>,
    mut split: impl FnMut(T) -> AxisFragments<T>,
) -> Fragments<T> {
    let mut out = Fragments::new();
    for fragment in fragments {
        out.extend(split(fragment));
    }
    out
}
