//! Drives a grid inventory through a short scripted session.
//!
//! Every inventory event is logged as JSON. Configure with
//! `GRIDPACK_WIDTH`, `GRIDPACK_HEIGHT`, `GRIDPACK_LOG_FORMAT` and `RUST_LOG`.

mod config;

use anyhow::Context;

use gridpack_core::Vec2;
use gridpack_inventory::{Grid, GridInventory, Item, Placeable};

use crate::config::DemoConfig;

fn main() -> anyhow::Result<()> {
    gridpack_observability::init();

    let config = DemoConfig::from_env();
    tracing::info!(width = config.width, height = config.height, "starting demo session");

    let mut inventory = GridInventory::new(config.width, config.height)
        .context("failed to create inventory")?;
    inventory.subscribe(|event| match serde_json::to_string(event) {
        Ok(json) => tracing::info!(target: "gridpack::events", "{json}"),
        Err(err) => tracing::error!("failed to serialize event: {err}"),
    });

    let items = [
        Item::new("potion", Vec2::new(1, 1)),
        Item::new("sword", Vec2::new(1, 3)),
        Item::new("shield", Vec2::new(2, 2)),
        Item::new("potion", Vec2::new(1, 1)),
        Item::new("bow", Vec2::new(2, 3)),
    ];
    for item in &items {
        if !inventory.add_first_fit(item)? {
            tracing::warn!(item = item.name(), "no room");
        }
    }

    let sword = &items[1];
    let bounds = config.size();
    let corner = Vec2::new(bounds.x - 1, bounds.y - sword.size().y);
    if !inventory.move_item(sword, corner) {
        tracing::warn!(%corner, "could not move sword");
    }
    inventory.remove(&items[0]);

    tracing::info!(potions = inventory.count_by_name("potion"), "before reorganize");
    render(&inventory)?;

    inventory
        .reorganize_space()
        .context("reorganize failed")?;
    render(&inventory)?;

    inventory.clear();
    Ok(())
}

/// Log the grid as text, one row per line, using each item's initial.
fn render(inventory: &GridInventory<Item>) -> anyhow::Result<()> {
    let mut matrix = Grid::new(inventory.width(), inventory.height(), None)?;
    inventory.copy_to(&mut matrix)?;
    let picture: Vec<String> = matrix
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    cell.as_ref()
                        .and_then(|item: &Item| item.name().chars().next())
                        .unwrap_or('.')
                })
                .collect()
        })
        .collect();
    tracing::info!(free = inventory.free_cell_count(), "grid:\n{}", picture.join("\n"));
    Ok(())
}
