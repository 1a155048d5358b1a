use alloc::vec::Vec;
use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a presentation layer needs after an input, detached from the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub side: Coord,
    /// Row-major cell views.
    pub cells: Vec<CellView>,
    pub moves: u32,
    pub elapsed: Duration,
    pub final_time: Option<Duration>,
    pub won: bool,
    pub input_locked: bool,
}

impl Observation {
    pub fn from_engine(engine: &MatchEngine, now: Timestamp) -> Self {
        let grid = engine.grid();
        Self {
            side: grid.side(),
            cells: grid.iter().map(Card::view).collect(),
            moves: engine.moves(),
            elapsed: engine.elapsed(now),
            final_time: engine.final_time(),
            won: engine.is_won(),
            input_locked: engine.is_won() || engine.turn().is_resolving(),
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<CellView> {
        if coords.0 >= self.side || coords.1 >= self.side {
            return None;
        }
        self.cells
            .get(usize::from(coords_to_index(coords, self.side)))
            .copied()
    }

    pub fn face_up_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_face_down()).count()
    }
}
