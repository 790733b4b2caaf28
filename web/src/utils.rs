use bitflags::bitflags;
use core::time::Duration;
use serde::{Deserialize, Serialize};

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub(crate) struct MouseButtons: u16 {
        const LEFT    = 1;
        const RIGHT   = 1 << 1;
        const MIDDLE  = 1 << 2;
        const BACK    = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

impl MouseButtons {
    /// Primary button, or the contact of a touch/pen pointer.
    pub(crate) fn is_primary(buttons: u16) -> bool {
        Self::from_bits_truncate(buttons).contains(Self::LEFT)
    }
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes(core::array::from_fn(|_| (256. * random()) as u8))
}

/// Milliseconds for timers and CSS, saturating instead of wrapping.
pub(crate) fn millis(duration: Duration) -> u32 {
    duration.as_millis().try_into().unwrap_or(u32::MAX)
}
