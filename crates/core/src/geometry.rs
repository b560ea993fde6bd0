//! Integer grid geometry.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A 2D integer vector, used both for cell coordinates and for footprints.
///
/// `x` grows to the right, `y` grows downwards; `(0, 0)` is the top-left cell.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl ValueObject for Vec2 {}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `true` when both components are strictly positive (a usable footprint).
    pub const fn is_positive(self) -> bool {
        self.x > 0 && self.y > 0
    }

    /// Footprint area. Widened so large grids cannot overflow.
    pub const fn area(self) -> i64 {
        self.x as i64 * self.y as i64
    }

    /// Every cell of the rectangle anchored at `self` with extent `size`,
    /// row-major (y outer, x inner). Empty for non-positive sizes.
    pub fn cells(self, size: Vec2) -> impl Iterator<Item = Vec2> {
        let anchor = self;
        (0..size.y.max(0)).flat_map(move |dy| {
            (0..size.x.max(0)).map(move |dx| Vec2::new(anchor.x + dx, anchor.y + dy))
        })
    }
}

impl From<(i32, i32)> for Vec2 {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl core::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
