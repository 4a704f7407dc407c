//! Integer pixel geometry for tapline.
//!
//! Input coordinates are whole pixels on the display or on the target
//! surface, so everything here is `i32` based.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}
