//! Worlds exchanged as UTF-8 JSON text.
//!
//! Layout: `{"width": W, "height": H, "generation": G, "cells": [[c0, c1, c2], ...]}`
//! with cells in row-major order. `generation` may be omitted on input.

use std::{ptr, slice, str};

use super::status::{guard, status_of, GolStatus};
use crate::automaton::World;
use crate::error::EngineError;

/// Writes the JSON form of `world` into `buf`.
///
/// # Safety
/// - `world` must be a valid world handle
/// - `buf` must point to `buf_len` writable bytes, or be null when `buf_len` is 0
/// - `out_len` must be a valid pointer to writable storage for one `usize`
///
/// # Returns
/// `Ok` with the byte count in `*out_len`. If the buffer is too small,
/// `BufferTooSmall` with the required byte count in `*out_len` and nothing
/// written, so callers can size the buffer with a first call of length 0.
/// The text is not NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn gol_world_to_json(
    world: *const World,
    buf: *mut u8,
    buf_len: usize,
    out_len: *mut usize,
) -> GolStatus {
    if world.is_null() {
        return GolStatus::InvalidHandle;
    }
    if out_len.is_null() || (buf.is_null() && buf_len != 0) {
        return GolStatus::InvalidArgument;
    }

    let world = &*world;
    guard(GolStatus::Panicked, || {
        let json = match world.to_json() {
            Ok(json) => json,
            Err(e) => return status_of(Err(e)),
        };

        *out_len = json.len();
        if json.len() > buf_len {
            return GolStatus::BufferTooSmall;
        }
        ptr::copy_nonoverlapping(json.as_ptr(), buf, json.len());
        GolStatus::Ok
    })
}

/// Parses a world from `len` bytes of JSON text.
///
/// # Safety
/// - `json` must point to `len` readable bytes
/// - `out` must be a valid pointer to writable storage for one handle
/// - the handle written to `*out` must be freed with `gol_world_free()`
///
/// # Returns
/// `Ok` with a new handle in `*out`; `MalformedWorld` if the text is not
/// UTF-8 JSON describing a world whose cell count matches its dimensions.
#[no_mangle]
pub unsafe extern "C" fn gol_world_from_json(
    json: *const u8,
    len: usize,
    out: *mut *mut World,
) -> GolStatus {
    if json.is_null() || out.is_null() {
        return GolStatus::InvalidArgument;
    }

    let bytes = slice::from_raw_parts(json, len);
    guard(GolStatus::Panicked, || {
        let parsed = str::from_utf8(bytes)
            .map_err(|e| EngineError::MalformedWorld(e.to_string()))
            .and_then(World::from_json);
        status_of(parsed.map(|world| {
            *out = Box::into_raw(Box::new(world));
        }))
    })
}
