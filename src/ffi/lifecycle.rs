//! World creation and destruction.

use std::ptr;

use super::status::{guard, status_of, GolStatus};
use crate::automaton::{random_world, seeded_world, World};
use crate::config::WorldConfig;

/// Creates a default 8x8 world with random contents.
///
/// # Returns
/// A new world handle, or null on failure.
///
/// # Safety
/// The returned pointer must eventually be freed with `gol_world_free()`.
#[no_mangle]
pub extern "C" fn gol_random_world() -> *mut World {
    guard(ptr::null_mut(), || match random_world(&mut rand::rng()) {
        Ok(world) => Box::into_raw(Box::new(world)),
        Err(e) => {
            tracing::warn!(error = %e, "gol_random_world failed");
            ptr::null_mut()
        }
    })
}

/// Creates a default 8x8 world drawn from a source seeded with `seed`.
///
/// The same seed always yields the same world.
#[no_mangle]
pub extern "C" fn gol_random_world_seeded(seed: u64) -> *mut World {
    guard(
        ptr::null_mut(),
        || match seeded_world(&WorldConfig::default(), seed) {
            Ok(world) => Box::into_raw(Box::new(world)),
            Err(e) => {
                tracing::warn!(error = %e, seed, "gol_random_world_seeded failed");
                ptr::null_mut()
            }
        },
    )
}

/// Creates an all-dead world with the given dimensions.
///
/// # Safety
/// - `out` must be a valid pointer to writable storage for one handle
///
/// # Returns
/// `Ok` with the handle written to `*out`; otherwise an error status and
/// `*out` is left untouched.
#[no_mangle]
pub unsafe extern "C" fn gol_create_world(
    width: i32,
    height: i32,
    out: *mut *mut World,
) -> GolStatus {
    if out.is_null() {
        return GolStatus::InvalidArgument;
    }
    if width <= 0 || height <= 0 {
        tracing::warn!(width, height, "gol_create_world rejected dimensions");
        return GolStatus::InvalidDimension;
    }

    guard(GolStatus::Panicked, || {
        let world = World::new(width as usize, height as usize);
        status_of(world.map(|world| {
            *out = Box::into_raw(Box::new(world));
        }))
    })
}

/// Destroys a world and frees its memory.
///
/// # Safety
/// - `ptr` must be a handle returned by this library, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn gol_world_free(ptr: *mut World) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}
