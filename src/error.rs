//! Error types for world construction and cell access.

use thiserror::Error;

/// Errors raised by the automaton engine.
///
/// Every variant is a deterministic function of the caller's input; none of
/// them are transient, so nothing in the crate retries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Width or height is zero.
    #[error("invalid world dimensions {width}x{height}: both sides must be at least 1")]
    InvalidDimension { width: usize, height: usize },

    /// Non-wrapping access outside `[0, width) x [0, height)`.
    #[error("cell ({x}, {y}) out of range for {width}x{height} world")]
    IndexOutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Cell channel index outside `0..3`.
    #[error("cell channel {channel} out of range (cells have 3 channels)")]
    ChannelOutOfRange { channel: usize },

    /// A cell buffer does not hold exactly `width * height` cells.
    #[error("expected {expected} cells, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    /// Backing storage for the grid could not be reserved.
    #[error("unable to allocate storage for {cells} cells")]
    AllocationFailure { cells: usize },

    /// Alive probability is NaN or outside `[0, 1]`.
    #[error("alive probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    /// The rayon pool backing parallel steps could not be started.
    #[error("unable to build step thread pool: {0}")]
    ThreadPool(String),

    /// Serialized world text is not valid JSON or does not describe a valid
    /// world.
    #[error("malformed world json: {0}")]
    MalformedWorld(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = EngineError::InvalidDimension {
            width: 0,
            height: 4,
        };
        assert_eq!(
            err.to_string(),
            "invalid world dimensions 0x4: both sides must be at least 1"
        );

        let err = EngineError::IndexOutOfRange {
            x: 9,
            y: 1,
            width: 8,
            height: 8,
        };
        assert_eq!(err.to_string(), "cell (9, 1) out of range for 8x8 world");

        let err = EngineError::ThreadPool("no threads".into());
        assert_eq!(err.to_string(), "unable to build step thread pool: no threads");
    }
}
