//! Generation stepping with the classic B3/S23 rule on channel 0.

use rayon::prelude::*;

use super::grid::{alloc_cells, World};
use crate::cell::Cell;

/// Apply B3/S23 to one cell.
///
/// - Birth: a dead cell with exactly 3 alive neighbours becomes alive
/// - Survival: an alive cell with 2 or 3 alive neighbours stays alive
///
/// Channels 1 and 2 are carried through unchanged.
#[inline]
pub fn next_state(cell: Cell, alive_neighbors: u8) -> Cell {
    let alive = matches!((cell.is_alive(), alive_neighbors), (true, 2) | (_, 3));
    cell.with_liveness(alive)
}

/// Compute one output row from the frozen input generation.
fn step_row(world: &World, y: usize, row: &mut [Cell]) {
    let base = world.index_of(0, y);
    let input = &world.cells()[base..base + world.width()];
    for (x, (out, &cell)) in row.iter_mut().zip(input).enumerate() {
        *out = next_state(cell, world.alive_neighbors(x, y));
    }
}

fn step_rows(world: &World, cells: &mut [Cell]) {
    for (y, row) in cells.chunks_mut(world.width()).enumerate() {
        step_row(world, y, row);
    }
}

fn trace_step(world: &World, next: &World) {
    tracing::trace!(
        generation = next.generation(),
        population = next.population(),
        before = world.population(),
        "stepped world"
    );
}

/// Step the automaton forward by one generation.
///
/// Reads only from `world` and writes into a freshly allocated successor, so
/// the input is never modified.
pub fn step(world: &World) -> World {
    let _span = tracing::trace_span!(
        "step",
        generation = world.generation(),
        width = world.width(),
        height = world.height()
    )
    .entered();

    let mut cells = vec![Cell::dead(); world.len()];
    step_rows(world, &mut cells);

    let next = world.next_generation(cells);
    trace_step(world, &next);
    next
}

/// Same result as [`step`], with rows distributed across `pool`.
pub fn step_with_pool(world: &World, pool: &rayon::ThreadPool) -> World {
    let _span = tracing::trace_span!(
        "step",
        generation = world.generation(),
        width = world.width(),
        height = world.height(),
        threads = pool.current_num_threads()
    )
    .entered();

    let mut cells = vec![Cell::dead(); world.len()];
    pool.install(|| {
        cells
            .par_chunks_mut(world.width())
            .enumerate()
            .for_each(|(y, row)| step_row(world, y, row));
    });

    let next = world.next_generation(cells);
    trace_step(world, &next);
    next
}

/// Fallible variant of [`step`] that reports allocation failure instead of
/// aborting.
pub fn try_step(world: &World) -> crate::error::Result<World> {
    let mut cells = alloc_cells(world.len())?;
    cells.resize(world.len(), Cell::dead());
    step_rows(world, &mut cells);
    let next = world.next_generation(cells);
    trace_step(world, &next);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with(width: usize, height: usize, alive: &[(usize, usize)]) -> World {
        let mut world = World::new(width, height).unwrap();
        for &(x, y) in alive {
            world.set(x, y, Cell::alive()).unwrap();
        }
        world
    }

    #[test]
    fn test_next_state_rules() {
        let dead = Cell::dead();
        let alive = Cell::alive();

        for n in 0..=8u8 {
            let expected_dead = if n == 3 { 1 } else { 0 };
            assert_eq!(next_state(dead, n).0, expected_dead, "dead with {n}");

            let expected_alive = if n == 2 || n == 3 { 1 } else { 0 };
            assert_eq!(next_state(alive, n).0, expected_alive, "alive with {n}");
        }
    }

    #[test]
    fn test_next_state_normalizes_liveness() {
        assert_eq!(next_state(Cell(10, 0, 0), 2), Cell(1, 0, 0));
        assert_eq!(next_state(Cell(10, 0, 0), 5), Cell(0, 0, 0));
    }

    #[test]
    fn test_next_state_passes_aux_through() {
        assert_eq!(next_state(Cell(0, 4, 9), 3), Cell(1, 4, 9));
        assert_eq!(next_state(Cell(1, 4, 9), 0), Cell(0, 4, 9));
    }

    #[test]
    fn test_step_generation_increments() {
        let world = World::new(4, 4).unwrap();
        assert_eq!(world.generation(), 0);
        let next = step(&world);
        assert_eq!(next.generation(), 1);
        assert_eq!(step(&next).generation(), 2);
    }

    #[test]
    fn test_step_empty_grid_stays_empty() {
        let world = World::new(4, 4).unwrap();
        let next = step(&world);
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn test_step_isolated_cell_dies() {
        let world = world_with(9, 9, &[(4, 4)]);
        let next = step(&world);
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn test_step_does_not_mutate_input() {
        let world = world_with(6, 6, &[(1, 2), (2, 2), (3, 2)]);
        let snapshot = world.clone();
        let _ = step(&world);
        assert_eq!(world, snapshot);
    }

    #[test]
    fn test_step_uses_frozen_generation() {
        // Row-by-row in-place updates would let (2, 1) be born early and
        // change what (2, 2) sees; the blinker result proves they don't.
        let world = world_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let next = step(&world);
        assert_eq!(next.population(), 3);
        for (x, y) in [(2, 1), (2, 2), (2, 3)] {
            assert!(next.get(x, y).unwrap().is_alive());
        }
    }

    #[test]
    fn test_try_step_matches_step() {
        let world = world_with(7, 5, &[(0, 0), (1, 0), (2, 0), (6, 4), (3, 3)]);
        assert_eq!(try_step(&world).unwrap(), step(&world));
    }

    #[test]
    fn test_step_with_pool_matches_step() {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(3)
            .build()
            .unwrap();
        let world = world_with(16, 11, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2), (15, 10)]);
        let mut seq = world.clone();
        let mut par = world;
        for _ in 0..10 {
            seq = step(&seq);
            par = step_with_pool(&par, &pool);
            assert_eq!(seq, par);
        }
    }
}
