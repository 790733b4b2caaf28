use core::fmt;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Count of fully completed rounds.
pub type Score = u32;

/// Plain 8-bit color triple, rendered by hosts as CSS `rgb(r, g, b)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Draws every channel uniformly from `0..255`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Rgb(
            rng.random_range(0..255),
            rng.random_range(0..255),
            rng.random_range(0..255),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

/// Identifies one requested effect; its completion must be reported back with the same ticket.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ticket(pub(crate) u64);

impl Ticket {
    pub const fn id(self) -> u64 {
        self.0
    }

    pub(crate) const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}
