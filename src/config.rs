//! World configuration for random initialization.

use crate::error::{EngineError, Result};

/// Side length of the world produced by `random_world()` with no arguments.
pub const DEFAULT_SIZE: usize = 8;

/// Default probability that a freshly drawn cell is alive.
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.5;

/// How channels 1 and 2 are filled when a random world is drawn.
///
/// Both variants are pass-through: stepping never changes these channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuxChannels {
    /// Channels 1 and 2 start at 0.
    #[default]
    Zero,
    /// Channel 1 holds the cell's x coordinate, channel 2 its y coordinate.
    Coordinates,
}

/// Parameters for drawing a random world.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
    /// Number of columns. Default: 8.
    pub width: usize,
    /// Number of rows. Default: 8.
    pub height: usize,
    /// Probability that channel 0 is drawn alive. Default: 0.5.
    pub alive_probability: f64,
    /// Initial auxiliary channel contents. Default: [`AuxChannels::Zero`].
    pub aux_channels: AuxChannels,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
            aux_channels: AuxChannels::Zero,
        }
    }
}

impl WorldConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_alive_probability(mut self, p: f64) -> Self {
        self.alive_probability = p;
        self
    }

    pub fn with_aux_channels(mut self, aux: AuxChannels) -> Self {
        self.aux_channels = aux;
        self
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidDimension`] if either side is 0
    /// - [`EngineError::InvalidProbability`] if the probability is NaN or
    ///   outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(EngineError::InvalidProbability(self.alive_probability));
        }
        Ok(())
    }
}
