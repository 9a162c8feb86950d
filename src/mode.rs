//! Operating modes and their fixed cycle.

use crate::colors::{self, Color};

/// Operating modes of the lamp, cycled by the mode button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Slow fades between random colors with long holds.
    Mood,
    /// Faster fades; a loud sound jumps to a new random color.
    SoundReactive,
    /// Color follows the estimated pitch of the ambient sound.
    SoundAnalysis,
}

impl Mode {
    /// All modes in cycle order.
    pub const ALL: [Mode; 3] = [Mode::Mood, Mode::SoundReactive, Mode::SoundAnalysis];

    /// Get the next mode in the cycle
    pub const fn next(self) -> Self {
        match self {
            Mode::Mood => Mode::SoundReactive,
            Mode::SoundReactive => Mode::SoundAnalysis,
            Mode::SoundAnalysis => Mode::Mood,
        }
    }

    /// Color blinked when entering this mode, at brightness `value`.
    pub const fn announce_color(self, value: u8) -> Color {
        match self {
            Mode::Mood => colors::blue(value),
            Mode::SoundReactive => colors::red(value),
            Mode::SoundAnalysis => colors::green(value),
        }
    }
}
