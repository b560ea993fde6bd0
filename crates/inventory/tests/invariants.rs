//! Property tests: random operation sequences never break the grid's invariants.

use gridpack_inventory::{Grid, GridInventory, InventoryEvent, Item, Placeable, Vec2};
use proptest::prelude::*;

const WIDTH: i32 = 6;
const HEIGHT: i32 = 5;

#[derive(Debug, Clone)]
enum Op {
    AddAt(usize, Vec2),
    AddFirstFit(usize),
    Remove(usize),
    Move(usize, Vec2),
    Reorganize,
    Clear,
}

fn position() -> impl Strategy<Value = Vec2> {
    (-1..=WIDTH, -1..=HEIGHT).prop_map(|(x, y)| Vec2::new(x, y))
}

fn op(pool: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..pool, position()).prop_map(|(i, p)| Op::AddAt(i, p)),
        3 => (0..pool).prop_map(Op::AddFirstFit),
        2 => (0..pool).prop_map(Op::Remove),
        3 => (0..pool, position()).prop_map(|(i, p)| Op::Move(i, p)),
        1 => Just(Op::Reorganize),
        1 => Just(Op::Clear),
    ]
}

fn pool() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec((1..=3i32, 1..=3i32), 1..8).prop_map(|sizes| {
        sizes
            .into_iter()
            .enumerate()
            .map(|(i, (w, h))| Item::new(format!("item-{}", i % 3), Vec2::new(w, h)))
            .collect()
    })
}

fn scenario() -> impl Strategy<Value = (Vec<Item>, Vec<Op>)> {
    pool().prop_flat_map(|items| {
        let n = items.len();
        (Just(items), prop::collection::vec(op(n), 0..40))
    })
}

fn apply(inv: &mut GridInventory<Item>, items: &[Item], op: &Op) {
    match op {
        Op::AddAt(i, p) => {
            inv.add_at(&items[*i], *p).unwrap();
        }
        Op::AddFirstFit(i) => {
            inv.add_first_fit(&items[*i]).unwrap();
        }
        Op::Remove(i) => {
            inv.remove(&items[*i]);
        }
        Op::Move(i, p) => {
            inv.move_item(&items[*i], *p);
        }
        Op::Reorganize => {
            // Greedy packing may legitimately give up; state must then be untouched.
            let before = snapshot(inv);
            if inv.reorganize_space().is_err() {
                assert_eq!(snapshot(inv), before);
            }
        }
        Op::Clear => inv.clear(),
    }
}

fn snapshot(inv: &GridInventory<Item>) -> Grid<Option<Item>> {
    let mut matrix = Grid::new(inv.width(), inv.height(), None).unwrap();
    inv.copy_to(&mut matrix).unwrap();
    matrix
}

/// Bounds, no overlap, grid/map agreement and count, via the public API.
fn assert_consistent(inv: &GridInventory<Item>) {
    let mut covered = 0usize;
    let mut distinct = 0usize;
    for item in inv {
        distinct += 1;
        let cells = inv.positions(item).unwrap();
        assert_eq!(cells.len() as i64, item.size().area());
        for cell in cells {
            assert!(cell.x >= 0 && cell.y >= 0 && cell.x < inv.width() && cell.y < inv.height());
            assert_eq!(inv.item_at(cell.x, cell.y).unwrap(), item);
        }
        covered += item.size().area() as usize;
    }
    assert_eq!(distinct, inv.len());
    assert_eq!(covered + inv.free_cell_count(), (inv.width() * inv.height()) as usize);
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: after every operation, items stay in bounds and never share a cell.
    #[test]
    fn random_operations_preserve_invariants((items, ops) in scenario()) {
        let mut inv = GridInventory::new(WIDTH, HEIGHT).unwrap();
        for op in &ops {
            apply(&mut inv, &items, op);
            assert_consistent(&inv);
        }
    }

    /// Property: a successful add followed by a remove restores the grid.
    #[test]
    fn add_then_remove_round_trips((items, ops) in scenario(), extra in (1..=3i32, 1..=3i32), p in position()) {
        let mut inv = GridInventory::new(WIDTH, HEIGHT).unwrap();
        for op in &ops {
            apply(&mut inv, &items, op);
        }
        let before = snapshot(&inv);
        let count = inv.len();

        let newcomer = Item::new("newcomer", Vec2::new(extra.0, extra.1));
        if inv.add_at(&newcomer, p).unwrap() {
            prop_assert!(inv.remove(&newcomer));
        }
        prop_assert_eq!(snapshot(&inv), before);
        prop_assert_eq!(inv.len(), count);
    }

    /// Property: re-adding a resident item is rejected and announces nothing.
    #[test]
    fn adding_a_resident_is_idempotent((items, ops) in scenario(), p in position()) {
        let mut inv = GridInventory::new(WIDTH, HEIGHT).unwrap();
        for op in &ops {
            apply(&mut inv, &items, op);
        }
        let events = inv.subscribe_channel();
        for item in &items {
            if inv.contains(item) {
                prop_assert!(!inv.add_at(item, p).unwrap());
                prop_assert!(!inv.add_first_fit(item).unwrap());
            }
        }
        prop_assert!(events.drain().iter().all(|e| !e.is_added()));
    }

    /// Property: a rejected move leaves every cell exactly as it was.
    #[test]
    fn failed_move_restores_state((items, ops) in scenario(), target in 0usize..8, p in position()) {
        let mut inv = GridInventory::new(WIDTH, HEIGHT).unwrap();
        for op in &ops {
            apply(&mut inv, &items, op);
        }
        let item = &items[target % items.len()];
        let before = snapshot(&inv);
        let anchor = inv.position_of(item);

        if !inv.move_item(item, p) {
            prop_assert_eq!(snapshot(&inv), before);
            prop_assert_eq!(inv.position_of(item), anchor);
        } else {
            prop_assert_eq!(inv.position_of(item), Some(p));
        }
    }

    /// Property: first fit is deterministic and nothing earlier in row-major order fits.
    #[test]
    fn first_fit_is_deterministic_and_minimal((items, ops) in scenario(), w in 1..=4i32, h in 1..=4i32) {
        let mut inv = GridInventory::new(WIDTH, HEIGHT).unwrap();
        for op in &ops {
            apply(&mut inv, &items, op);
        }
        let size = Vec2::new(w, h);
        let first = inv.find_free_position(size).unwrap();
        prop_assert_eq!(inv.find_free_position(size).unwrap(), first);

        let probe = Item::new("probe", size);
        let earlier = (0..HEIGHT)
            .flat_map(|y| (0..WIDTH).map(move |x| Vec2::new(x, y)))
            .take_while(|&a| Some(a) != first);
        for anchor in earlier {
            prop_assert!(!inv.can_place_at(&probe, anchor).unwrap());
        }
        if let Some(found) = first {
            prop_assert!(inv.can_place_at(&probe, found).unwrap());
        }
    }

    /// Property: reorganizing keeps the same residents and never overlaps.
    #[test]
    fn reorganize_preserves_residents((items, ops) in scenario()) {
        let mut inv = GridInventory::new(WIDTH, HEIGHT).unwrap();
        for op in &ops {
            apply(&mut inv, &items, op);
        }
        let mut residents_before: Vec<Item> = inv.iter().cloned().collect();
        let free_before = inv.free_cell_count();
        let events = inv.subscribe_channel();

        match inv.reorganize_space() {
            Ok(()) => {
                let added: Vec<InventoryEvent<Item>> = events.drain();
                prop_assert_eq!(added.len(), residents_before.len());
                prop_assert!(added.iter().all(InventoryEvent::is_added));
            }
            Err(_) => prop_assert!(events.drain().is_empty()),
        }

        let mut residents_after: Vec<Item> = inv.iter().cloned().collect();
        let key = |i: &Item| i.id_typed();
        residents_before.sort_by_key(key);
        residents_after.sort_by_key(key);
        prop_assert_eq!(residents_after, residents_before);
        prop_assert_eq!(inv.free_cell_count(), free_before);
        assert_consistent(&inv);
    }
}
