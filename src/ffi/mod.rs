//! C FFI layer for host integration.
//!
//! This module exports C ABI functions for hosts that hold worlds and cells
//! as opaque handles. All functions are marked with `#[no_mangle]` and use
//! `extern "C"`.
//!
//! The actual logic is in the `automaton` module. These functions are thin wrappers
//! that handle null checks, pointer safety, panic containment, and
//! error-to-status conversion.

pub mod cell;
pub mod json;
pub mod lifecycle;
pub mod status;
pub mod world;

pub use cell::{
    gol_cell_free, gol_cell_get_0, gol_cell_get_1, gol_cell_get_2, gol_cell_new, gol_cell_set_0,
    gol_cell_set_1, gol_cell_set_2,
};
pub use json::{gol_world_from_json, gol_world_to_json};
pub use lifecycle::{gol_create_world, gol_random_world, gol_random_world_seeded, gol_world_free};
pub use status::GolStatus;
pub use world::{
    gol_run_game_of_life, gol_world_generation, gol_world_get_cell, gol_world_height,
    gol_world_population, gol_world_set_cell, gol_world_width,
};
