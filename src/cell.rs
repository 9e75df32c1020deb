//! The three-channel cell value.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Number of numeric channels carried by every cell.
pub const CHANNELS: usize = 3;

/// A single grid cell.
///
/// Channel 0 is liveness (non-zero = alive). Channels 1 and 2 are auxiliary
/// state that the transition rule carries through untouched.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell(pub u32, pub u32, pub u32);

impl Cell {
    /// An alive cell with zeroed auxiliary channels.
    pub const fn alive() -> Self {
        Cell(1, 0, 0)
    }

    /// A dead cell with zeroed auxiliary channels.
    pub const fn dead() -> Self {
        Cell(0, 0, 0)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.0 != 0
    }

    /// Read channel `index`.
    pub fn channel(&self, index: usize) -> Result<u32> {
        match index {
            0 => Ok(self.0),
            1 => Ok(self.1),
            2 => Ok(self.2),
            channel => Err(EngineError::ChannelOutOfRange { channel }),
        }
    }

    /// Overwrite channel `index`, leaving the others as they are.
    pub fn set_channel(&mut self, index: usize, value: u32) -> Result<()> {
        match index {
            0 => self.0 = value,
            1 => self.1 = value,
            2 => self.2 = value,
            channel => return Err(EngineError::ChannelOutOfRange { channel }),
        }
        Ok(())
    }

    /// Same auxiliary channels, liveness replaced.
    #[inline]
    pub(crate) fn with_liveness(self, alive: bool) -> Self {
        Cell(alive as u32, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell() {
        let c = Cell(0, 0, 0);
        assert_eq!(c, Cell::dead());
        assert!(!c.is_alive());

        let Cell(state, _, _) = Cell::alive();
        assert_eq!(state, 1);
    }

    #[test]
    fn test_update_cell_value() {
        let mut c = Cell::default();
        c.0 = 1;
        assert!(c.is_alive());
        c.2 = 7;
        assert_eq!(c, Cell(1, 0, 7));
    }

    #[test]
    fn test_nonzero_liveness_counts_as_alive() {
        assert!(Cell(10, 0, 0).is_alive());
    }

    #[test]
    fn test_channel_access() {
        let mut c = Cell(1, 2, 3);
        assert_eq!(c.channel(0), Ok(1));
        assert_eq!(c.channel(2), Ok(3));
        assert_eq!(
            c.channel(3),
            Err(EngineError::ChannelOutOfRange { channel: 3 })
        );

        c.set_channel(1, 42).unwrap();
        assert_eq!(c, Cell(1, 42, 3));
        assert!(c.set_channel(5, 0).is_err());
        assert_eq!(c, Cell(1, 42, 3));
    }

    #[test]
    fn test_with_liveness_keeps_aux() {
        let c = Cell(0, 5, 6).with_liveness(true);
        assert_eq!(c, Cell(1, 5, 6));
        assert_eq!(c.with_liveness(false), Cell(0, 5, 6));
    }
}
