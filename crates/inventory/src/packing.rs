//! Free-space search and the defragmentation plan.
//!
//! Everything here works on a bare occupancy grid so it can run against the
//! live inventory or against a scratch copy.

use gridpack_core::{Grid, Vec2};

/// `true` when the rectangle fits inside the grid and every covered cell is empty.
pub fn rect_is_free<T>(cells: &Grid<Option<T>>, anchor: Vec2, size: Vec2) -> bool {
    cells.contains_rect(anchor, size)
        && anchor
            .cells(size)
            .all(|cell| matches!(cells.get(cell.x, cell.y), Some(None)))
}

/// First anchor, scanning rows top to bottom and each row left to right,
/// whose `size` rectangle is entirely free.
///
/// Only anchors that keep the rectangle in bounds are tried, so a footprint
/// larger than the grid yields `None`. `size` must be positive.
pub fn first_fit<T>(cells: &Grid<Option<T>>, size: Vec2) -> Option<Vec2> {
    debug_assert!(size.is_positive());
    let last_y = cells.height() - size.y;
    let last_x = cells.width() - size.x;
    (0..=last_y)
        .flat_map(|y| (0..=last_x).map(move |x| Vec2::new(x, y)))
        .find(|&anchor| rect_is_free(cells, anchor, size))
}

/// One resident as seen by the reorganizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resident<K> {
    pub key: K,
    pub anchor: Vec2,
    pub size: Vec2,
}

/// Largest area first; ties broken by the original anchor (`y`, then `x`).
///
/// Anchors are unique among residents, so the order is total.
pub fn reorganize_order<K>(residents: &mut [Resident<K>]) {
    residents.sort_by(|a, b| {
        b.size
            .area()
            .cmp(&a.size.area())
            .then(a.anchor.y.cmp(&b.anchor.y))
            .then(a.anchor.x.cmp(&b.anchor.x))
    });
}

/// Greedy repack of `residents` into an empty `width × height` grid.
///
/// Returns each key with its new anchor, in placement order. If some resident
/// finds no free spot, returns that resident's key instead. Never backtracks,
/// so it can fail even when a valid packing exists.
pub fn plan_reorganize<K: Copy>(
    width: i32,
    height: i32,
    mut residents: Vec<Resident<K>>,
) -> Result<Vec<(K, Vec2)>, K> {
    reorganize_order(&mut residents);

    let Ok(mut scratch) = Grid::<Option<()>>::new(width, height, None) else {
        return match residents.first() {
            Some(r) => Err(r.key),
            None => Ok(Vec::new()),
        };
    };

    let mut plan = Vec::with_capacity(residents.len());
    for resident in residents {
        let anchor = first_fit(&scratch, resident.size).ok_or(resident.key)?;
        for cell in anchor.cells(resident.size) {
            if let Some(slot) = scratch.get_mut(cell.x, cell.y) {
                *slot = Some(());
            }
        }
        plan.push((resident.key, anchor));
    }
    Ok(plan)
}
