use memory_match_core::*;
use web_time::Instant;

use crate::input::Command;

/// What the host loop should do after a command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Update {
    /// Nothing visible changed.
    Unchanged,
    /// Redraw the board.
    Redraw,
    /// Redraw now, then again once the revealed pair resolves.
    RedrawAndSettle,
    ShowHelp,
    Quit,
}

/// One terminal game: the engine plus the wall clock feeding it.
pub struct Session {
    engine: MatchEngine,
    epoch: Instant,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let epoch = Instant::now();
        let engine = MatchEngine::new(config, seed, epoch.elapsed())?;
        Ok(Self { engine, epoch })
    }

    pub fn now(&self) -> Timestamp {
        self.epoch.elapsed()
    }

    pub fn side(&self) -> Coord {
        self.engine.grid().side()
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn observe(&self) -> Observation {
        Observation::from_engine(&self.engine, self.now())
    }

    pub fn update(&mut self, command: Command) -> Update {
        let now = self.now();
        match command {
            Command::Select(coords) => {
                let index = coords_to_index(coords, self.side());
                log::debug!("select {coords:?} (cell {index})");
                match self.engine.select(index, now) {
                    SelectOutcome::SecondRevealed => Update::RedrawAndSettle,
                    outcome if outcome.has_update() => Update::Redraw,
                    _ => Update::Unchanged,
                }
            }
            Command::Restart => {
                self.engine.restart(now);
                Update::Redraw
            }
            Command::Help => Update::ShowHelp,
            Command::Quit => Update::Quit,
        }
    }

    /// Blocks out the rest of the resolve delay for a revealed pair, then lets the engine resolve it.
    pub fn settle(&mut self) -> TickOutcome {
        if let TurnState::Resolving(_, _, since) = self.engine.turn() {
            let due = since + self.engine.config().resolve_delay;
            let remaining = due.saturating_sub(self.now());
            if !remaining.is_zero() {
                std::thread::sleep(remaining);
            }
        }
        self.tick()
    }

    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.engine.tick(self.now());
        if outcome == TickOutcome::Won {
            log::info!(
                "Won in {} moves and {}s",
                self.engine.moves(),
                self.engine.elapsed_secs(self.now())
            );
        }
        outcome
    }
}
