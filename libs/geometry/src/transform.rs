//! Translation traits.

use crate::coord::Coord;
use crate::point::Point;

/// A trait for specifying how a shape is translated by a [`Point`].
pub trait TranslateMut<T: Coord = f32> {
    /// Translates the shape by a [`Point`] through mutation.
    fn translate_mut(&mut self, p: Point<T>);
}

impl<C: Coord, T: TranslateMut<C>> TranslateMut<C> for Vec<T> {
    fn translate_mut(&mut self, p: Point<C>) {
        for i in self.iter_mut() {
            i.translate_mut(p);
        }
    }
}

impl<C: Coord, T: TranslateMut<C>> TranslateMut<C> for Option<T> {
    fn translate_mut(&mut self, p: Point<C>) {
        if let Some(inner) = self.as_mut() {
            inner.translate_mut(p);
        }
    }
}

/// A trait for specifying how a shape is translated by a [`Point`].
///
/// Takes in an owned copy of the shape and returns the translated version.
pub trait Translate<T: Coord = f32>: TranslateMut<T> + Sized {
    /// Translates the shape by a [`Point`] through mutation.
    ///
    /// Creates a new shape at a location equal to the translation of the original.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(0, 0, 10, 10);
    /// assert_eq!(rect.translate(Point::new(5, -5)), Rect::from_sides(5, -5, 15, 5));
    /// ```
    fn translate(mut self, p: Point<T>) -> Self {
        self.translate_mut(p);
        self
    }
}

impl<C: Coord, T: TranslateMut<C> + Sized> Translate<C> for T {}
