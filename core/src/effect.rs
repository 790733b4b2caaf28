use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

/// Perceptual action the host carries out on the engine's behalf.
///
/// Every effect ends with a completion signal; the engine does not advance until it receives it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Effect<S> {
    /// Nothing to show, just let `duration` pass.
    Pause(Duration),
    /// Highlight the tile for `symbol` and play its tone.
    PlaySymbol { symbol: S, highlight: Duration },
    /// Fade the shared background to `color` over `duration`, starting after `delay`.
    Background {
        color: Rgb,
        duration: Duration,
        delay: Duration,
    },
    /// Flash the background between `highlight` and `background` for `cycles` cycles of `cycle`
    /// each, firing the tone of every symbol in `chord` once.
    Failure {
        highlight: Rgb,
        background: Rgb,
        cycles: u8,
        cycle: Duration,
        chord: Vec<S>,
    },
}

impl<S> Effect<S> {
    /// How long the effect takes when played as requested.
    pub fn total_duration(&self) -> Duration {
        use Effect::*;
        match self {
            Pause(duration) => *duration,
            PlaySymbol { highlight, .. } => *highlight,
            Background {
                duration, delay, ..
            } => *duration + *delay,
            Failure { cycles, cycle, .. } => *cycle * u32::from(*cycles),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectRequest<S> {
    pub ticket: Ticket,
    pub effect: Effect<S>,
}
