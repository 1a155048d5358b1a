#![no_std]

extern crate alloc;

use core::time::Duration;
use serde::{Deserialize, Serialize};

pub use card::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use observation::*;
pub use shuffle::*;
pub use types::*;

mod card;
mod engine;
mod error;
mod grid;
mod observation;
mod shuffle;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards per row and per column.
    pub side: Coord,
    /// How long a revealed pair stays up before it is compared.
    pub resolve_delay: Duration,
}

impl GameConfig {
    pub const DEFAULT_SIDE: Coord = 4;
    pub const DEFAULT_RESOLVE_DELAY: Duration = Duration::from_secs(1);

    pub const fn new_unchecked(side: Coord, resolve_delay: Duration) -> Self {
        Self {
            side,
            resolve_delay,
        }
    }

    pub fn new(side: Coord, resolve_delay: Duration) -> Result<Self> {
        let config = Self::new_unchecked(side, resolve_delay);
        if config.total_cells() % PAIR_SIZE as CellIndex != 0 {
            return Err(GameError::OddCellCount);
        }
        Ok(config)
    }

    pub const fn total_cells(&self) -> CellIndex {
        mult(self.side, self.side)
    }

    pub const fn symbol_count(&self) -> SymbolId {
        self.total_cells() / PAIR_SIZE as CellIndex
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_SIDE, Self::DEFAULT_RESOLVE_DELAY)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    Ignored,
    FirstRevealed,
    SecondRevealed,
}

impl SelectOutcome {
    /// Whether this outcome could have changed what the player sees
    pub const fn has_update(self) -> bool {
        match self {
            Self::Ignored => false,
            Self::FirstRevealed => true,
            Self::SecondRevealed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    NoChange,
    Matched,
    Mismatched,
    Won,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        use TickOutcome::*;
        match self {
            NoChange => false,
            Matched => true,
            Mismatched => true,
            Won => true,
        }
    }
}
