//! An import prelude that re-exports commonly used items.

pub use crate::bbox::Bbox;
pub use crate::contains::{Containment, Contains};
pub use crate::coord::Coord;
pub use crate::dir::{Dir, Dirs};
pub use crate::intersect::Intersect;
pub use crate::line::Line;
pub use crate::point::Point;
pub use crate::polygon::Polygon;
pub use crate::rect::Rect;
pub use crate::span::Span;
pub use crate::transform::{Translate, TranslateMut};
