//! Random world initialization from an injected random source.
//!
//! Cells are drawn in row-major order, one `random_bool` per cell, so a
//! seeded source always produces the same world for the same config.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::grid::World;
use crate::cell::Cell;
use crate::config::{AuxChannels, WorldConfig};
use crate::error::Result;

/// Draw a world described by `config` from `rng`.
pub fn random_world_with<R: Rng>(config: &WorldConfig, rng: &mut R) -> Result<World> {
    config.validate()?;

    let mut world = World::new(config.width, config.height)?;
    for y in 0..config.height {
        for x in 0..config.width {
            let alive = rng.random_bool(config.alive_probability);
            let cell = match config.aux_channels {
                AuxChannels::Zero => Cell(alive as u32, 0, 0),
                AuxChannels::Coordinates => Cell(alive as u32, x as u32, y as u32),
            };
            world.set(x, y, cell)?;
        }
    }

    tracing::debug!(
        width = config.width,
        height = config.height,
        population = world.population(),
        "drew random world"
    );
    Ok(world)
}

/// Draw a default 8x8 world with alive probability 0.5.
pub fn random_world<R: Rng>(rng: &mut R) -> Result<World> {
    random_world_with(&WorldConfig::default(), rng)
}

/// Draw a world from a ChaCha8 stream seeded with `seed`.
pub fn seeded_world(config: &WorldConfig, seed: u64) -> Result<World> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_world_with(config, &mut rng)
}
