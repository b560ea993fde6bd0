//! Dense 2D cell storage.
//!
//! [`Grid`] is a fixed `width × height` matrix addressed by `(x, y)`, with
//! `x` growing to the right and `y` growing downwards. Cells are stored
//! row-major in a single `Vec`, so `(x, y)` lives at index `y * width + x`.
//!
//! ## Bounds
//!
//! Coordinates are signed so that callers can ask about positions left of
//! or above the grid without casting. Every accessor checks bounds:
//!
//! - [`Grid::get`] and [`Grid::get_mut`] return `None` outside the grid
//! - [`Grid::set`] returns [`InventoryError::OutOfBounds`]
//! - [`Grid::contains_rect`] checks a whole footprint in one call
//!
//! Dimensions must be positive and never change after construction.

use crate::error::{InventoryError, InventoryResult};
use crate::geometry::Vec2;

/// Fixed-size `width × height` matrix of cells, stored row-major.
///
/// Dimensions are validated once at construction and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: i32,
    height: i32,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(width: i32, height: i32, fill: T) -> InventoryResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(InventoryError::invalid_dimension(width, height));
        }
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            cells: vec![fill; len],
        })
    }

    /// Reset every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// `true` when the rectangle `anchor + size` lies fully inside the grid.
    pub fn contains_rect(&self, anchor: Vec2, size: Vec2) -> bool {
        anchor.x >= 0
            && anchor.y >= 0
            && size.x > 0
            && size.y > 0
            && anchor.x as i64 + size.x as i64 <= self.width as i64
            && anchor.y as i64 + size.y as i64 <= self.height as i64
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut T> {
        self.index(x, y).map(move |i| &mut self.cells[i])
    }

    /// Overwrite one cell. Fails with `OutOfBounds` outside the grid.
    pub fn set(&mut self, x: i32, y: i32, value: T) -> InventoryResult<()> {
        let slot = self
            .get_mut(x, y)
            .ok_or_else(|| InventoryError::out_of_bounds(x, y))?;
        *slot = value;
        Ok(())
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width as usize)
    }

    /// Every cell paired with its coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Vec2, &T)> {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let i = i as i32;
            (Vec2::new(i % width, i / width), cell)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            Grid::new(0, 3, false),
            Err(InventoryError::invalid_dimension(0, 3))
        );
        assert_eq!(
            Grid::new(2, -1, false),
            Err(InventoryError::invalid_dimension(2, -1))
        );
    }

    #[test]
    fn set_and_get_are_row_major() {
        let mut grid = Grid::new(3, 2, 0u8).unwrap();
        grid.set(2, 1, 7).unwrap();
        assert_eq!(grid.get(2, 1), Some(&7));
        assert_eq!(grid.rows().nth(1).unwrap(), &[0, 0, 7]);
        assert_eq!(grid.iter().last(), Some((Vec2::new(2, 1), &7)));
    }

    #[test]
    fn out_of_bounds_access_is_rejected() {
        let mut grid = Grid::new(2, 2, 0u8).unwrap();
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, -1), None);
        assert_eq!(grid.set(-1, 0, 1), Err(InventoryError::out_of_bounds(-1, 0)));
    }

    #[test]
    fn contains_rect_checks_far_edge() {
        let grid = Grid::new(4, 4, ()).unwrap();
        assert!(grid.contains_rect(Vec2::new(2, 2), Vec2::new(2, 2)));
        assert!(!grid.contains_rect(Vec2::new(3, 2), Vec2::new(2, 2)));
        assert!(!grid.contains_rect(Vec2::new(-1, 0), Vec2::new(1, 1)));
        assert!(!grid.contains_rect(Vec2::new(i32::MAX, 0), Vec2::new(2, 1)));
    }
}
