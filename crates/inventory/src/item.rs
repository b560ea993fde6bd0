use serde::{Deserialize, Serialize};

use gridpack_core::{Entity, ItemId, Vec2};

/// Capability an item must offer to live in a [`crate::GridInventory`].
///
/// Identity comes from [`Entity::id`]: two items with the same name and size
/// are still different items unless their ids match. The footprint is not
/// validated here; sizing-aware inventory operations reject non-positive
/// sizes with `InvalidSize`.
pub trait Placeable: Entity + Clone + core::fmt::Debug + Send + 'static {
    /// Grouping label, used by `count_by_name`. Not unique.
    fn name(&self) -> &str;

    /// Footprint in cells (`x` = width, `y` = height).
    fn size(&self) -> Vec2;
}

/// Default item model: an id, a display name and a rectangular footprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    size: Vec2,
}

impl Item {
    /// Create an item with a fresh identity.
    pub fn new(name: impl Into<String>, size: Vec2) -> Self {
        Self::with_id(ItemId::new(), name, size)
    }

    pub fn with_id(id: ItemId, name: impl Into<String>, size: Vec2) -> Self {
        Self {
            id,
            name: name.into(),
            size,
        }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

impl core::hash::Hash for Item {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

impl Placeable for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> Vec2 {
        self.size
    }
}
