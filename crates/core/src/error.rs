//! Inventory error model.

use thiserror::Error;

/// Result type used across the inventory layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Only precondition violations and validation failures end up here. Ordinary
/// "did not apply" outcomes (no room, item absent) are reported as `false` or
/// `None` by the operations themselves.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Grid dimensions must be strictly positive.
    #[error("invalid inventory dimension: {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },

    /// An item footprint (or requested size) has a non-positive side.
    #[error("invalid item size: {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    /// A coordinate lies outside the grid extent.
    #[error("coordinate ({x}, {y}) is out of bounds")]
    OutOfBounds { x: i32, y: i32 },

    /// A throwing accessor was called on an unoccupied cell.
    #[error("cell ({x}, {y}) is empty")]
    EmptyCell { x: i32, y: i32 },

    /// The referenced item is not resident.
    #[error("item not found")]
    NotFound,

    /// A seed entry could not be placed during construction.
    #[error("placement conflict: {0}")]
    PlacementConflict(String),

    /// Defragmentation could not find room for an item.
    #[error("reorganization failed: {0}")]
    ReorganizationFailed(String),

    /// A required argument was malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl InventoryError {
    pub fn invalid_dimension(width: i32, height: i32) -> Self {
        Self::InvalidDimension { width, height }
    }

    pub fn invalid_size(width: i32, height: i32) -> Self {
        Self::InvalidSize { width, height }
    }

    pub fn out_of_bounds(x: i32, y: i32) -> Self {
        Self::OutOfBounds { x, y }
    }

    pub fn empty_cell(x: i32, y: i32) -> Self {
        Self::EmptyCell { x, y }
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn placement_conflict(msg: impl Into<String>) -> Self {
        Self::PlacementConflict(msg.into())
    }

    pub fn reorganization_failed(msg: impl Into<String>) -> Self {
        Self::ReorganizationFailed(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
