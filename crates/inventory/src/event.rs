use serde::{Deserialize, Serialize};

use gridpack_core::Vec2;
use gridpack_events::Event;

use crate::item::Placeable;

/// Lifecycle notification emitted by a [`crate::GridInventory`].
///
/// Fired synchronously, after the inventory state is consistent again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InventoryEvent<I> {
    /// An item was placed with its top-left cell at `position`.
    Added { item: I, position: Vec2 },
    /// An item was taken out; `position` is the anchor it vacated.
    Removed { item: I, position: Vec2 },
    /// A move succeeded. Follows the `Removed`/`Added` pair of the move.
    Moved { item: I, position: Vec2 },
    /// A non-empty inventory was wiped. No per-item events accompany it.
    Cleared,
}

impl<I> InventoryEvent<I> {
    pub fn item(&self) -> Option<&I> {
        match self {
            InventoryEvent::Added { item, .. }
            | InventoryEvent::Removed { item, .. }
            | InventoryEvent::Moved { item, .. } => Some(item),
            InventoryEvent::Cleared => None,
        }
    }

    pub fn position(&self) -> Option<Vec2> {
        match self {
            InventoryEvent::Added { position, .. }
            | InventoryEvent::Removed { position, .. }
            | InventoryEvent::Moved { position, .. } => Some(*position),
            InventoryEvent::Cleared => None,
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, InventoryEvent::Added { .. })
    }

    pub fn is_removed(&self) -> bool {
        matches!(self, InventoryEvent::Removed { .. })
    }

    pub fn is_moved(&self) -> bool {
        matches!(self, InventoryEvent::Moved { .. })
    }

    pub fn is_cleared(&self) -> bool {
        matches!(self, InventoryEvent::Cleared)
    }
}

impl<I: Placeable> Event for InventoryEvent<I> {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::Added { .. } => "inventory.item.added",
            InventoryEvent::Removed { .. } => "inventory.item.removed",
            InventoryEvent::Moved { .. } => "inventory.item.moved",
            InventoryEvent::Cleared => "inventory.cleared",
        }
    }
}
