//! The grid inventory container.

use std::collections::HashMap;

use gridpack_core::{Grid, InventoryError, InventoryResult, Vec2};
use gridpack_events::{ListenerId, Listeners, Subscription};

use crate::event::InventoryEvent;
use crate::item::Placeable;
use crate::packing::{self, Resident};

#[derive(Debug, Clone)]
struct Placement<I> {
    item: I,
    anchor: Vec2,
}

/// Fixed-size 2D container of rectangular items that never overlap.
///
/// State is kept twice: a dense cell grid (point queries) and an
/// item → anchor map (reverse lookups). Both are only ever written through
/// `place` and `vacate`.
///
/// Listeners run synchronously on the caller's thread, after the mutation
/// they describe is complete. They receive the event only; the borrow held by
/// the mutating call keeps them from re-entering the inventory.
///
/// The inventory does no internal locking. Wrap it in a `Mutex` to share it.
pub struct GridInventory<I: Placeable> {
    cells: Grid<Option<I::Id>>,
    placements: HashMap<I::Id, Placement<I>>,
    listeners: Listeners<InventoryEvent<I>>,
}

impl<I: Placeable> core::fmt::Debug for GridInventory<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridInventory")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("count", &self.len())
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl<I: Placeable> GridInventory<I> {
    /// Create an empty `width × height` inventory.
    pub fn new(width: i32, height: i32) -> InventoryResult<Self> {
        Ok(Self {
            cells: Grid::new(width, height, None)?,
            placements: HashMap::new(),
            listeners: Listeners::new(),
        })
    }

    /// Create an inventory pre-populated with `entries`.
    ///
    /// Each entry is validated like [`GridInventory::add_at`]; an entry that
    /// overlaps, leaves the grid or repeats an item fails the whole
    /// construction with `PlacementConflict`.
    pub fn with_items<E>(width: i32, height: i32, entries: E) -> InventoryResult<Self>
    where
        E: IntoIterator<Item = (I, Vec2)>,
    {
        let mut inventory = Self::new(width, height)?;
        for (item, position) in entries {
            if !inventory.can_place_at(&item, position)? {
                return Err(InventoryError::placement_conflict(format!(
                    "item {:?} cannot be placed at {position}",
                    item.id()
                )));
            }
            inventory.place(item, position);
        }
        Ok(inventory)
    }

    pub fn width(&self) -> i32 {
        self.cells.width()
    }

    pub fn height(&self) -> i32 {
        self.cells.height()
    }

    /// Number of distinct resident items.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Number of cells not covered by any item.
    pub fn free_cell_count(&self) -> usize {
        self.cells.iter().filter(|(_, cell)| cell.is_none()).count()
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// Whether `item` could be placed with its top-left cell at `position`.
    ///
    /// `false` if the item is already resident, would leave the grid, or
    /// would cover an occupied cell.
    pub fn can_place_at(&self, item: &I, position: Vec2) -> InventoryResult<bool> {
        let size = validated_size(item)?;
        if self.contains(item) {
            return Ok(false);
        }
        Ok(packing::rect_is_free(&self.cells, position, size))
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> InventoryResult<bool> {
        self.cells
            .get(x, y)
            .map(Option::is_some)
            .ok_or_else(|| InventoryError::out_of_bounds(x, y))
    }

    pub fn is_occupied_at(&self, position: Vec2) -> InventoryResult<bool> {
        self.is_occupied(position.x, position.y)
    }

    pub fn is_free(&self, x: i32, y: i32) -> InventoryResult<bool> {
        self.is_occupied(x, y).map(|occupied| !occupied)
    }

    pub fn is_free_at(&self, position: Vec2) -> InventoryResult<bool> {
        self.is_free(position.x, position.y)
    }

    pub fn contains(&self, item: &I) -> bool {
        self.placements.contains_key(&item.id())
    }

    /// Anchor (top-left cell) of a resident item.
    pub fn position_of(&self, item: &I) -> Option<Vec2> {
        self.placements.get(&item.id()).map(|p| p.anchor)
    }

    /// Item covering `(x, y)`.
    ///
    /// Fails with `OutOfBounds` outside the grid and `EmptyCell` on a free cell.
    pub fn item_at(&self, x: i32, y: i32) -> InventoryResult<&I> {
        let cell = self
            .cells
            .get(x, y)
            .ok_or_else(|| InventoryError::out_of_bounds(x, y))?;
        cell.as_ref()
            .and_then(|id| self.placements.get(id))
            .map(|p| &p.item)
            .ok_or_else(|| InventoryError::empty_cell(x, y))
    }

    pub fn item_at_position(&self, position: Vec2) -> InventoryResult<&I> {
        self.item_at(position.x, position.y)
    }

    /// Non-failing [`GridInventory::item_at`].
    pub fn try_item_at(&self, x: i32, y: i32) -> Option<&I> {
        self.item_at(x, y).ok()
    }

    /// Every cell covered by `item`, row-major (y outer, x inner).
    pub fn positions(&self, item: &I) -> InventoryResult<Vec<Vec2>> {
        self.try_positions(item).ok_or_else(InventoryError::not_found)
    }

    /// Non-failing [`GridInventory::positions`].
    pub fn try_positions(&self, item: &I) -> Option<Vec<Vec2>> {
        let placement = self.placements.get(&item.id())?;
        Some(placement.anchor.cells(placement.item.size()).collect())
    }

    /// Number of resident items whose name equals `name`.
    pub fn count_by_name(&self, name: &str) -> usize {
        self.placements
            .values()
            .filter(|p| p.item.name() == name)
            .count()
    }

    /// Each resident item once. Order is arbitrary but stable until the
    /// next mutation.
    pub fn iter(&self) -> impl Iterator<Item = &I> {
        self.placements.values().map(|p| &p.item)
    }

    /// First free anchor for a `size` footprint, scanning row by row from
    /// `(0, 0)`.
    pub fn find_free_position(&self, size: Vec2) -> InventoryResult<Option<Vec2>> {
        if !size.is_positive() {
            return Err(InventoryError::invalid_size(size.x, size.y));
        }
        Ok(packing::first_fit(&self.cells, size))
    }

    /// Whether [`GridInventory::add_first_fit`] would succeed.
    pub fn can_add_first_fit(&self, item: &I) -> InventoryResult<bool> {
        let size = validated_size(item)?;
        Ok(!self.contains(item) && packing::first_fit(&self.cells, size).is_some())
    }

    /// Mirror the current occupancy into `matrix`, overwriting every cell.
    ///
    /// `matrix` must have exactly this inventory's dimensions.
    pub fn copy_to(&self, matrix: &mut Grid<Option<I>>) -> InventoryResult<()> {
        if matrix.width() != self.width() || matrix.height() != self.height() {
            return Err(InventoryError::invalid_argument(format!(
                "matrix is {}x{}, inventory is {}x{}",
                matrix.width(),
                matrix.height(),
                self.width(),
                self.height()
            )));
        }
        for (cell, occupant) in self.cells.iter() {
            let item = occupant
                .as_ref()
                .and_then(|id| self.placements.get(id))
                .map(|p| p.item.clone());
            matrix.set(cell.x, cell.y, item)?;
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------------

    /// Place `item` with its top-left cell at `position`.
    ///
    /// Returns `Ok(false)` (and changes nothing) when the placement is not
    /// legal. Fails with `InvalidSize` for a non-positive footprint.
    pub fn add_at(&mut self, item: &I, position: Vec2) -> InventoryResult<bool> {
        if !self.can_place_at(item, position)? {
            return Ok(false);
        }
        self.place(item.clone(), position);
        tracing::debug!(item = ?item.id(), %position, "item added");
        self.emit(InventoryEvent::Added {
            item: item.clone(),
            position,
        });
        Ok(true)
    }

    /// Place `item` at the first free anchor (see
    /// [`GridInventory::find_free_position`]).
    pub fn add_first_fit(&mut self, item: &I) -> InventoryResult<bool> {
        let size = validated_size(item)?;
        if self.contains(item) {
            return Ok(false);
        }
        match packing::first_fit(&self.cells, size) {
            Some(position) => self.add_at(item, position),
            None => Ok(false),
        }
    }

    /// Take `item` out. Returns `false` if it is not resident.
    pub fn remove(&mut self, item: &I) -> bool {
        self.remove_with_position(item).is_some()
    }

    /// Take `item` out, returning the anchor it vacated.
    pub fn remove_with_position(&mut self, item: &I) -> Option<Vec2> {
        let placement = self.vacate(item.id())?;
        let position = placement.anchor;
        tracing::debug!(item = ?item.id(), %position, "item removed");
        self.emit(InventoryEvent::Removed {
            item: placement.item,
            position,
        });
        Some(position)
    }

    /// Remove everything. Emits a single `Cleared` unless already empty.
    pub fn clear(&mut self) {
        if self.placements.is_empty() {
            return;
        }
        let removed = self.placements.len();
        self.placements.clear();
        self.cells.fill(None);
        tracing::debug!(removed, "inventory cleared");
        self.emit(InventoryEvent::Cleared);
    }

    /// Relocate a resident item so its top-left cell is `new_position`.
    ///
    /// The item is vacated before the target is validated, so a target that
    /// overlaps the item's own current cells is accepted. On success emits
    /// `Removed`, `Added`, then `Moved`. On failure the item is put back at
    /// its original anchor, emitting `Removed` then `Added` for that anchor,
    /// and `false` is returned.
    ///
    /// `item` only selects the resident by id. The stored item's footprint is
    /// what gets validated and placed, and it is the item carried by the events.
    ///
    /// Returns `false` without touching anything if `new_position` is outside
    /// the grid or `item` is not resident.
    pub fn move_item(&mut self, item: &I, new_position: Vec2) -> bool {
        if !self.cells.contains(new_position.x, new_position.y) {
            return false;
        }
        let id = item.id();
        let Some(Placement {
            item: resident,
            anchor: original,
        }) = self.vacate(id)
        else {
            return false;
        };
        self.emit(InventoryEvent::Removed {
            item: resident.clone(),
            position: original,
        });

        let fits = packing::rect_is_free(&self.cells, new_position, resident.size());
        let target = if fits { new_position } else { original };
        self.place(resident.clone(), target);
        self.emit(InventoryEvent::Added {
            item: resident.clone(),
            position: target,
        });

        if !fits {
            tracing::debug!(item = ?id, from = %original, to = %new_position, "move rejected");
            return false;
        }
        tracing::debug!(item = ?id, from = %original, to = %new_position, "item moved");
        self.emit(InventoryEvent::Moved {
            item: resident,
            position: new_position,
        });
        true
    }

    /// Defragment: repack every resident, largest area first.
    ///
    /// Ties are broken by the item's current anchor (`y`, then `x`) and each
    /// item goes to its first-fit anchor. One `Added` is emitted per item.
    /// The plan is computed up front; if any item would find no room the call
    /// fails with `ReorganizationFailed` and the inventory is left untouched.
    pub fn reorganize_space(&mut self) -> InventoryResult<()> {
        let residents: Vec<Resident<I::Id>> = self
            .placements
            .iter()
            .map(|(id, p)| Resident {
                key: *id,
                anchor: p.anchor,
                size: p.item.size(),
            })
            .collect();

        let plan = packing::plan_reorganize(self.width(), self.height(), residents)
            .map_err(|id| {
                tracing::warn!(item = ?id, "reorganize found no room for item");
                InventoryError::reorganization_failed(format!("no free position for item {id:?}"))
            })?;

        let mut snapshot = std::mem::take(&mut self.placements);
        self.cells.fill(None);

        for (id, position) in plan {
            let Some(Placement { item, .. }) = snapshot.remove(&id) else {
                continue;
            };
            self.place(item.clone(), position);
            self.emit(InventoryEvent::Added { item, position });
        }
        tracing::info!(items = self.len(), "inventory reorganized");
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Listeners
    // ---------------------------------------------------------------------

    /// Register a callback for every event.
    pub fn subscribe<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&InventoryEvent<I>) + Send + 'static,
    {
        self.listeners.subscribe(callback)
    }

    /// Register a callback for `Added` events: `(item, position)`.
    pub fn on_added<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&I, Vec2) + Send + 'static,
    {
        self.subscribe_positioned(InventoryEvent::is_added, callback)
    }

    /// Register a callback for `Removed` events: `(item, vacated anchor)`.
    pub fn on_removed<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&I, Vec2) + Send + 'static,
    {
        self.subscribe_positioned(InventoryEvent::is_removed, callback)
    }

    /// Register a callback for `Moved` events: `(item, new position)`.
    pub fn on_moved<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&I, Vec2) + Send + 'static,
    {
        self.subscribe_positioned(InventoryEvent::is_moved, callback)
    }

    /// Register a callback for `Cleared` events.
    pub fn on_cleared<F>(&mut self, mut callback: F) -> ListenerId
    where
        F: FnMut() + Send + 'static,
    {
        self.listeners
            .subscribe_filtered(InventoryEvent::is_cleared, move |_: &InventoryEvent<I>| {
                callback()
            })
    }

    /// Drain-style subscription; receives a clone of every later event.
    pub fn subscribe_channel(&mut self) -> Subscription<InventoryEvent<I>> {
        self.listeners.subscribe_channel()
    }

    /// Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn subscribe_positioned<F>(
        &mut self,
        filter: fn(&InventoryEvent<I>) -> bool,
        mut callback: F,
    ) -> ListenerId
    where
        F: FnMut(&I, Vec2) + Send + 'static,
    {
        self.listeners
            .subscribe_filtered(filter, move |event: &InventoryEvent<I>| {
                if let (Some(item), Some(position)) = (event.item(), event.position()) {
                    callback(item, position);
                }
            })
    }

    // ---------------------------------------------------------------------
    // Internal bookkeeping: the only writers of `cells` and `placements`.
    // ---------------------------------------------------------------------

    /// Record an already validated placement.
    fn place(&mut self, item: I, anchor: Vec2) {
        let id = item.id();
        for cell in anchor.cells(item.size()) {
            if let Some(slot) = self.cells.get_mut(cell.x, cell.y) {
                *slot = Some(id);
            }
        }
        self.placements.insert(id, Placement { item, anchor });
    }

    fn vacate(&mut self, id: I::Id) -> Option<Placement<I>> {
        let placement = self.placements.remove(&id)?;
        for cell in placement.anchor.cells(placement.item.size()) {
            if let Some(slot) = self.cells.get_mut(cell.x, cell.y) {
                *slot = None;
            }
        }
        Some(placement)
    }

    fn emit(&mut self, event: InventoryEvent<I>) {
        self.listeners.emit(&event);
    }
}

impl<'a, I: Placeable> IntoIterator for &'a GridInventory<I> {
    type Item = &'a I;
    type IntoIter = Box<dyn Iterator<Item = &'a I> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

fn validated_size<I: Placeable>(item: &I) -> InventoryResult<Vec2> {
    let size = item.size();
    if size.is_positive() {
        Ok(size)
    } else {
        Err(InventoryError::invalid_size(size.x, size.y))
    }
}
