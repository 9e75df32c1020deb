//! Stepping, world queries, and cell access by coordinate.

use std::ptr;

use super::status::{guard, status_of, GolStatus};
use crate::automaton::{try_step, World};
use crate::cell::Cell;

/// Computes the next generation of `world`.
///
/// # Safety
/// - `world` must be a valid world handle, or null
///
/// # Returns
/// A newly allocated world handle, or null if `world` is null or allocation
/// fails. The input is left untouched; the caller frees both handles.
#[no_mangle]
pub unsafe extern "C" fn gol_run_game_of_life(world: *const World) -> *mut World {
    if world.is_null() {
        tracing::warn!("gol_run_game_of_life called with null world");
        return ptr::null_mut();
    }

    let world = &*world;
    guard(ptr::null_mut(), || match try_step(world) {
        Ok(next) => Box::into_raw(Box::new(next)),
        Err(e) => {
            tracing::warn!(error = %e, "gol_run_game_of_life failed");
            ptr::null_mut()
        }
    })
}

/// # Safety
/// - `world` must be a valid world handle, or null
///
/// # Returns
/// The width, or 0 if `world` is null.
#[no_mangle]
pub unsafe extern "C" fn gol_world_width(world: *const World) -> u32 {
    if world.is_null() {
        return 0;
    }
    (*world).width() as u32
}

/// # Safety
/// - `world` must be a valid world handle, or null
///
/// # Returns
/// The height, or 0 if `world` is null.
#[no_mangle]
pub unsafe extern "C" fn gol_world_height(world: *const World) -> u32 {
    if world.is_null() {
        return 0;
    }
    (*world).height() as u32
}

/// # Safety
/// - `world` must be a valid world handle, or null
///
/// # Returns
/// The generation counter, or 0 if `world` is null.
#[no_mangle]
pub unsafe extern "C" fn gol_world_generation(world: *const World) -> u64 {
    if world.is_null() {
        return 0;
    }
    (*world).generation()
}

/// # Safety
/// - `world` must be a valid world handle, or null
///
/// # Returns
/// Number of alive cells, or 0 if `world` is null.
#[no_mangle]
pub unsafe extern "C" fn gol_world_population(world: *const World) -> u64 {
    if world.is_null() {
        return 0;
    }
    (*world).population() as u64
}

/// Copies the cell at `(x, y)` into a new cell handle.
///
/// # Safety
/// - `world` must be a valid world handle
/// - `out` must be a valid pointer to writable storage for one handle
/// - the handle written to `*out` must be freed with `gol_cell_free()`
#[no_mangle]
pub unsafe extern "C" fn gol_world_get_cell(
    world: *const World,
    x: u32,
    y: u32,
    out: *mut *mut Cell,
) -> GolStatus {
    if world.is_null() {
        return GolStatus::InvalidHandle;
    }
    if out.is_null() {
        return GolStatus::InvalidArgument;
    }

    let world = &*world;
    guard(GolStatus::Panicked, || {
        status_of(world.get(x as usize, y as usize).map(|cell| {
            *out = Box::into_raw(Box::new(cell));
        }))
    })
}

/// Overwrites the cell at `(x, y)` with a copy of `*cell`.
///
/// # Safety
/// - `world` must be a valid, exclusively held world handle
/// - `cell` must be a valid cell handle
#[no_mangle]
pub unsafe extern "C" fn gol_world_set_cell(
    world: *mut World,
    x: u32,
    y: u32,
    cell: *const Cell,
) -> GolStatus {
    if world.is_null() || cell.is_null() {
        tracing::warn!("gol_world_set_cell called with null handle");
        return GolStatus::InvalidHandle;
    }

    let world = &mut *world;
    let cell = *cell;
    guard(GolStatus::Panicked, || {
        status_of(world.set(x as usize, y as usize, cell))
    })
}
