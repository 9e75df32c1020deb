//! Toroidal Life - Conway's Game of Life on a wrap-around grid
//!
//! Cells carry three numeric channels: channel 0 is liveness and follows
//! B3/S23, channels 1 and 2 ride along unchanged. Worlds are plain values;
//! stepping produces a new world and never mutates its input.
//!
//! Rust callers use [`automaton`] directly. Hosts use the C ABI in [`ffi`].

pub mod automaton;
pub mod cell;
pub mod config;
pub mod error;
pub mod ffi;

pub use automaton::{random_world, random_world_with, seeded_world, step, Engine, World};
pub use cell::Cell;
pub use config::{AuxChannels, WorldConfig};
pub use error::{EngineError, Result};
