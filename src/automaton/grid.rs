//! The toroidal grid: construction, indexing, and neighbour lookup.

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{EngineError, Result};

/// Neighbour offsets as `(dx, dy)`, row-major from top-left, centre excluded.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A fixed-size toroidal grid of cells in row-major order.
///
/// Dimensions never change after construction. A world is only ever replaced
/// wholesale by the result of a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWorld")]
pub struct World {
    width: usize,
    height: usize,
    generation: u64,
    cells: Vec<Cell>,
}

/// Unchecked serialized form; validated on the way into [`World`].
#[derive(Deserialize)]
struct RawWorld {
    width: usize,
    height: usize,
    #[serde(default)]
    generation: u64,
    cells: Vec<Cell>,
}

impl TryFrom<RawWorld> for World {
    type Error = EngineError;

    fn try_from(raw: RawWorld) -> Result<Self> {
        let mut world = World::from_cells(raw.width, raw.height, raw.cells)?;
        world.generation = raw.generation;
        Ok(world)
    }
}

/// Number of cells in a `width x height` grid, rejecting empty or overflowing sizes.
fn cell_count(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(EngineError::InvalidDimension { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(EngineError::AllocationFailure { cells: usize::MAX })
}

/// Reserve exactly `count` cells, surfacing allocator failure as an error.
pub(crate) fn alloc_cells(count: usize) -> Result<Vec<Cell>> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(count)
        .map_err(|_| EngineError::AllocationFailure { cells: count })?;
    Ok(cells)
}

impl World {
    /// Create a `width x height` world with every cell dead.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let count = cell_count(width, height)?;
        let mut cells = alloc_cells(count)?;
        cells.resize(count, Cell::dead());
        tracing::debug!(width, height, "created world");
        Ok(World {
            width,
            height,
            generation: 0,
            cells,
        })
    }

    /// Wrap an existing row-major cell buffer.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self> {
        let expected = cell_count(width, height)?;
        if cells.len() != expected {
            return Err(EngineError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(World {
            width,
            height,
            generation: 0,
            cells,
        })
    }

    /// Successor world sharing this world's dimensions. Caller guarantees
    /// `cells.len() == self.len()`.
    pub(crate) fn next_generation(&self, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), self.cells.len());
        World {
            width: self.width,
            height: self.height,
            generation: self.generation.wrapping_add(1),
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells. Never zero.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of steps applied since this world was drawn or created.
    ///
    /// Wraps to 0 after `u64::MAX`; stepping never fails on the counter.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Linear index for `(x, y)`. Coordinates must be in bounds.
    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize> {
        if self.in_bounds(x, y) {
            Ok(self.index_of(x, y))
        } else {
            Err(EngineError::IndexOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Cell> {
        let idx = self.checked_index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Mutable access for field-level edits.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell> {
        let idx = self.checked_index(x, y)?;
        Ok(&mut self.cells[idx])
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<()> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Map any logical coordinate onto the torus.
    #[inline]
    fn wrap(&self, x: i64, y: i64) -> (usize, usize) {
        (
            x.rem_euclid(self.width as i64) as usize,
            y.rem_euclid(self.height as i64) as usize,
        )
    }

    /// Read with toroidal addressing; never out of range.
    pub fn get_wrapped(&self, x: i64, y: i64) -> Cell {
        let (x, y) = self.wrap(x, y);
        self.cells[self.index_of(x, y)]
    }

    /// Write with toroidal addressing; never out of range.
    pub fn set_wrapped(&mut self, x: i64, y: i64, cell: Cell) {
        let (x, y) = self.wrap(x, y);
        let idx = self.index_of(x, y);
        self.cells[idx] = cell;
    }

    /// The eight toroidal neighbours of `(x, y)` in [`NEIGHBOR_OFFSETS`] order.
    ///
    /// On grids narrower or shorter than 3 the same cell may appear more
    /// than once, including `(x, y)` itself.
    pub fn neighbors(&self, x: usize, y: usize) -> [Cell; 8] {
        let (x, y) = (x as i64, y as i64);
        NEIGHBOR_OFFSETS.map(|(dx, dy)| self.get_wrapped(x + dx, y + dy))
    }

    /// Count alive cells among the eight toroidal neighbours.
    pub fn alive_neighbors(&self, x: usize, y: usize) -> u8 {
        self.neighbors(x, y)
            .iter()
            .filter(|c| c.is_alive())
            .count() as u8
    }

    /// Serialize as `{"width", "height", "generation", "cells": [[c0, c1, c2], ..]}`.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| EngineError::MalformedWorld(e.to_string()))
    }

    /// Parse a world from its JSON form, applying the same dimension and
    /// cell-count checks as [`World::from_cells`]. `generation` may be omitted.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::MalformedWorld(e.to_string()))
    }
}
