//! `gridpack-core` — foundation building blocks for grid inventories.
//!
//! This crate contains **pure** primitives (no IO): geometry, dense cell
//! storage, identifiers and the error model.

pub mod entity;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{InventoryError, InventoryResult};
pub use geometry::Vec2;
pub use grid::Grid;
pub use id::ItemId;
pub use value_object::ValueObject;
