use core::num::Saturating;
use core::time::Duration;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Where the current turn stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// No card waiting for a partner.
    Idle,
    /// One card is up and awaiting a second selection.
    OnePending(CellIndex),
    /// Two cards are up, input is locked until the resolve delay has elapsed since the timestamp.
    Resolving(CellIndex, CellIndex, Timestamp),
}

impl TurnState {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_resolving(self) -> bool {
        matches!(self, Self::Resolving(..))
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Drives a single game: turn resolution, move counting, timing and win detection.
///
/// The engine never reads a clock, every input carries the host's current [`Timestamp`].
#[derive(Clone, Debug)]
pub struct MatchEngine {
    config: GameConfig,
    grid: GridState,
    rng: SmallRng,
    turn: TurnState,
    moves: Saturating<u32>,
    started_at: Timestamp,
    final_time: Option<Duration>,
    won: bool,
}

impl MatchEngine {
    /// Shuffles a fresh grid from `seed` and starts the clock at `now`.
    pub fn new(config: GameConfig, seed: u64, now: Timestamp) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = GridState::new(config.side)?;
        grid.shuffle_and_reset(&mut rng);
        log::debug!(
            "New {0}x{0} game, seed: {seed}, started at {now:?}",
            config.side
        );
        Ok(Self {
            config,
            grid,
            rng,
            turn: TurnState::Idle,
            moves: Saturating(0),
            started_at: now,
            final_time: None,
            won: false,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    pub fn moves(&self) -> u32 {
        self.moves.0
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn final_time(&self) -> Option<Duration> {
        self.final_time
    }

    pub fn cell(&self, index: CellIndex) -> Option<CellView> {
        self.grid.view(index)
    }

    /// Time since the game started, frozen at the final time once won.
    pub fn elapsed(&self, now: Timestamp) -> Duration {
        self.final_time
            .unwrap_or_else(|| now.saturating_sub(self.started_at))
    }

    /// Whole seconds of [`MatchEngine::elapsed`], for a clock display.
    pub fn elapsed_secs(&self, now: Timestamp) -> u32 {
        self.elapsed(now).as_secs().try_into().unwrap_or(u32::MAX)
    }

    /// Player picked the cell at `index`. Anything out of turn is ignored.
    pub fn select(&mut self, index: CellIndex, now: Timestamp) -> SelectOutcome {
        use SelectOutcome::*;

        if self.grid.validate_index(index).is_err() {
            log::warn!(
                "Ignoring selection of cell {index}, grid only has {}",
                self.grid.len()
            );
            return Ignored;
        }

        if self.won {
            log::trace!("Ignoring selection of cell {index}, game already won");
            return Ignored;
        }

        match self.turn {
            TurnState::Idle => {
                if !self.reveal(index) {
                    return Ignored;
                }
                self.turn = TurnState::OnePending(index);
                FirstRevealed
            }
            TurnState::OnePending(first) if first == index => {
                log::trace!("Ignoring repeated selection of cell {index}");
                Ignored
            }
            TurnState::OnePending(first) => {
                if !self.reveal(index) {
                    return Ignored;
                }
                self.turn = TurnState::Resolving(first, index, now);
                SecondRevealed
            }
            TurnState::Resolving(..) => {
                log::trace!("Ignoring selection of cell {index} while resolving");
                Ignored
            }
        }
    }

    /// Advances the clock: resolves a pending pair once its delay has passed, then checks for a win.
    pub fn tick(&mut self, now: Timestamp) -> TickOutcome {
        let outcome = self.resolve_due(now);
        if self.check_win(now) {
            TickOutcome::Won
        } else {
            outcome
        }
    }

    /// Reshuffles and starts over, abandoning whatever turn was in flight.
    pub fn restart(&mut self, now: Timestamp) {
        self.grid.shuffle_and_reset(&mut self.rng);
        self.turn = TurnState::Idle;
        self.moves = Saturating(0);
        self.started_at = now;
        self.final_time = None;
        self.won = false;
        log::debug!("Restarted at {now:?}");
    }

    fn reveal(&mut self, index: CellIndex) -> bool {
        match self.grid.flip(index) {
            Ok(()) => {
                self.moves += 1;
                log::trace!("Flipped cell {index}, moves: {}", self.moves);
                true
            }
            Err(err) => {
                log::trace!("Ignoring selection of cell {index}: {err}");
                false
            }
        }
    }

    fn resolve_due(&mut self, now: Timestamp) -> TickOutcome {
        let TurnState::Resolving(first, second, since) = self.turn else {
            return TickOutcome::NoChange;
        };

        if now.saturating_sub(since) < self.config.resolve_delay {
            return TickOutcome::NoChange;
        }

        self.turn = TurnState::Idle;
        if self.grid.value(first) == self.grid.value(second) {
            for index in [first, second] {
                if let Err(err) = self.grid.mark_matched(index) {
                    log::warn!("Could not mark cell {index} as matched: {err}");
                }
            }
            log::debug!("Matched cells {first} and {second}");
            TickOutcome::Matched
        } else {
            for index in [first, second] {
                if let Err(err) = self.grid.unflip(index) {
                    log::warn!("Could not turn cell {index} face-down: {err}");
                }
            }
            log::trace!("Cells {first} and {second} do not match");
            TickOutcome::Mismatched
        }
    }

    /// Latches the win the first time every card is matched, returns whether it just happened.
    fn check_win(&mut self, now: Timestamp) -> bool {
        if self.won || !self.grid.all_matched() {
            return false;
        }

        let final_time = now.saturating_sub(self.started_at);
        self.final_time = Some(final_time);
        self.won = true;
        log::debug!(
            "Won in {} moves, final time: {final_time:?}",
            self.moves
        );
        true
    }
}
