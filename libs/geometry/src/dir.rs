//! The x and y axes.

use std::fmt::Display;

use array_map::{ArrayMap, Indexable};
use serde::{Deserialize, Serialize};

/// A coordinate axis.
///
/// `!dir` gives the perpendicular axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
#[repr(u8)]
#[derive(Indexable)]
pub enum Dir {
    /// x.
    Horiz,
    /// y.
    Vert,
}

impl Dir {
    /// Both axes. Per-axis algorithms run over them in this order.
    pub const ALL: [Dir; 2] = [Dir::Horiz, Dir::Vert];

    /// The perpendicular axis.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// assert_eq!(Dir::Vert.other(), Dir::Horiz);
    /// assert_eq!(!Dir::Horiz, Dir::Vert);
    /// ```
    pub const fn other(&self) -> Self {
        match *self {
            Self::Horiz => Self::Vert,
            Self::Vert => Self::Horiz,
        }
    }

    /// The coordinate name, `"x"` or `"y"`.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Horiz => "x",
            Self::Vert => "y",
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::ops::Not for Dir {
    type Output = Self;
    fn not(self) -> Self::Output {
        self.other()
    }
}

/// One `T` per axis.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub struct Dirs<T> {
    inner: ArrayMap<Dir, T, 2>,
}

impl<T> Dirs<T> {
    /// Pairs `x` with [`Dir::Horiz`] and `y` with [`Dir::Vert`].
    pub const fn new(x: T, y: T) -> Self {
        // Element order follows the variant order of `Dir`.
        Self {
            inner: ArrayMap::new([x, y]),
        }
    }

    /// Iterates over the axes in [`Dir::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Dir, &T)> + '_ {
        Dir::ALL.into_iter().map(move |dir| (dir, &self[dir]))
    }
}

impl<T> std::ops::Index<Dir> for Dirs<T> {
    type Output = T;
    fn index(&self, index: Dir) -> &Self::Output {
        self.inner.index(index)
    }
}

impl<T> std::ops::IndexMut<Dir> for Dirs<T> {
    fn index_mut(&mut self, index: Dir) -> &mut Self::Output {
        self.inner.index_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dirs_index_by_axis() {
        let mut dirs = Dirs::new(3, 4);
        assert_eq!(dirs[Dir::Horiz], 3);
        dirs[Dir::Vert] = 9;
        assert_eq!(
            dirs.iter().collect::<Vec<_>>(),
            vec![(Dir::Horiz, &3), (Dir::Vert, &9)]
        );
    }

    #[test]
    fn axes_display_as_coordinate_names() {
        assert_eq!(Dir::Horiz.to_string(), "x");
        assert_eq!(format!("{}", !Dir::Horiz), "y");
    }
}
