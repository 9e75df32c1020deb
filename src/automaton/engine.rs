//! Engine: a validated world config plus a rayon pool for large steps.

use rand::Rng;

use super::grid::World;
use super::random::{random_world_with, seeded_world};
use super::stepping::{step, step_with_pool};
use crate::config::WorldConfig;
use crate::error::{EngineError, Result};

/// Worlds with fewer cells than this are stepped on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Owns the configuration for drawing worlds and the thread pool used to
/// step them. Holds no world state itself.
pub struct Engine {
    config: WorldConfig,
    thread_pool: rayon::ThreadPool,
}

impl Engine {
    /// Create an engine. `num_threads == 0` is treated as 1.
    pub fn new(config: WorldConfig, num_threads: usize) -> Result<Self> {
        config.validate()?;

        let num_threads = num_threads.max(1);
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .or_else(|e| {
                tracing::warn!(num_threads, error = %e, "falling back to single-threaded pool");
                rayon::ThreadPoolBuilder::new().num_threads(1).build()
            })
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

        tracing::debug!(
            threads = thread_pool.current_num_threads(),
            width = config.width,
            height = config.height,
            "created engine"
        );
        Ok(Engine {
            config,
            thread_pool,
        })
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn num_threads(&self) -> usize {
        self.thread_pool.current_num_threads()
    }

    /// Draw a world from the engine's config.
    pub fn random_world<R: Rng>(&self, rng: &mut R) -> Result<World> {
        random_world_with(&self.config, rng)
    }

    /// Draw a reproducible world from the engine's config.
    pub fn seeded_world(&self, seed: u64) -> Result<World> {
        seeded_world(&self.config, seed)
    }

    /// Advance `world` one generation.
    pub fn step(&self, world: &World) -> World {
        if world.len() < PARALLEL_THRESHOLD || self.num_threads() == 1 {
            step(world)
        } else {
            step_with_pool(world, &self.thread_pool)
        }
    }

    /// Advance `world` by `generations` steps. Zero returns a copy.
    pub fn run(&self, world: &World, generations: u64) -> World {
        let mut current = world.clone();
        for _ in 0..generations {
            current = self.step(&current);
        }
        current
    }
}
