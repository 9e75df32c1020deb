//! Core automaton logic and grid operations.
//!
//! This module contains the actual logic for building worlds, drawing
//! random ones, and stepping them. The FFI layer in `ffi/` calls these
//! functions.

pub mod engine;
pub mod grid;
pub mod random;
pub mod stepping;

pub use engine::{Engine, PARALLEL_THRESHOLD};
pub use grid::{World, NEIGHBOR_OFFSETS};
pub use random::{random_world, random_world_with, seeded_world};
pub use stepping::{next_state, step, step_with_pool, try_step};
