use core::time::Duration;
use serde::{Deserialize, Serialize};

pub use driver::*;
pub use effect::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use pattern::*;
pub use tile::*;
pub use types::*;

mod driver;
mod effect;
mod engine;
mod error;
mod generator;
mod pattern;
mod tile;
mod types;

/// Timings and tunables of a game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for background color picks.
    pub seed: u64,
    pub initial_length: usize,
    /// How long a tile stays lit when played back or acknowledged.
    pub highlight: Duration,
    /// Gap before each tile during playback.
    pub pace: Duration,
    pub fade: Duration,
    pub failure_highlight: Rgb,
    pub failure_cycles: u8,
    pub failure_cycle: Duration,
    /// Delay before the background starts fading after a failure.
    pub restart_delay: Duration,
    /// Pause between the post-failure fade and the new first round.
    pub restart_pause: Duration,
}

impl EngineConfig {
    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    pub fn validate(&self) -> Result<()> {
        if self.initial_length == 0 {
            return Err(GameError::ZeroPatternLength);
        }
        if self.failure_cycles == 0 {
            return Err(GameError::ZeroFailureCycles);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            initial_length: 2,
            highlight: Duration::from_millis(400),
            pace: Duration::from_millis(100),
            fade: Duration::from_millis(500),
            failure_highlight: Rgb::WHITE,
            failure_cycles: 3,
            failure_cycle: Duration::from_millis(400),
            restart_delay: Duration::from_millis(800),
            restart_pause: Duration::from_millis(800),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StartOutcome {
    AlreadyStarted,
    Started,
}

impl StartOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Started)
    }
}

/// Outcome of a player selecting a tile
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    /// Input was not being accepted.
    Ignored,
    Matched,
    /// Last symbol of the pattern matched, no more input this round.
    RoundComplete,
    Mismatch,
}

impl SelectOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            Ignored => false,
            Matched => true,
            RoundComplete => true,
            Mismatch => true,
        }
    }
}

/// Outcome of reporting an effect completion
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// The ticket no longer matches what the engine waits on.
    Stale,
    Advanced,
}

impl StepOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Advanced)
    }
}
