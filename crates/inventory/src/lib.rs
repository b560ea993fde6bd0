//! Grid inventory: rectangular items on a fixed 2D grid.
//!
//! Pure in-memory domain logic (no IO). Items never overlap, placement is
//! deterministic (row-major first fit), and every mutation is announced to
//! registered listeners.

pub mod event;
pub mod inventory;
pub mod item;
pub mod packing;

pub use event::InventoryEvent;
pub use inventory::GridInventory;
pub use item::{Item, Placeable};

pub use gridpack_core::{Grid, InventoryError, InventoryResult, ItemId, Vec2};
pub use gridpack_events::{ListenerId, Subscription};
