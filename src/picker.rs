//! Random target colors, biased toward pure single-channel hues.

use crate::colors::Color;
use crate::config::{ConfigError, LampConfig};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Picks random colors below a brightness ceiling.
///
/// A configured share of picks keeps a single channel and zeroes the other two,
/// so plain reds, greens and blues show up more often than chance would give.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    rng: SmallRng,
    color_max: u8,
    pure_percent: u8,
}

impl ColorPicker {
    /// Creates a picker seeded from `seed`.
    ///
    /// On the lamp the seed is the first microphone conversion, which differs
    /// between power-ups.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroColorMax`] for a zero ceiling and
    /// [`ConfigError::PureProbabilityOutOfRange`] for a percentage above 100.
    pub fn new(seed: u64, color_max: u8, pure_percent: u8) -> Result<Self, ConfigError> {
        if color_max == 0 {
            return Err(ConfigError::ZeroColorMax);
        }
        if pure_percent > 100 {
            return Err(ConfigError::PureProbabilityOutOfRange(pure_percent));
        }

        Ok(Self {
            rng: SmallRng::seed_from_u64(seed),
            color_max,
            pure_percent,
        })
    }

    /// Creates a picker using the ceiling and bias from `config`.
    ///
    /// # Errors
    /// Same as [`ColorPicker::new`].
    pub fn from_config(seed: u64, config: &LampConfig) -> Result<Self, ConfigError> {
        Self::new(seed, config.color_max, config.pure_color_percent)
    }

    /// Draws the next target color. Every channel stays below the ceiling.
    pub fn pick(&mut self) -> Color {
        let mut channels = [
            self.rng.random_range(0..self.color_max),
            self.rng.random_range(0..self.color_max),
            self.rng.random_range(0..self.color_max),
        ];

        if self.rng.random_range(0..100u8) < self.pure_percent {
            let keep = self.rng.random_range(0..3usize);
            for (idx, channel) in channels.iter_mut().enumerate() {
                if idx != keep {
                    *channel = 0;
                }
            }
        }

        Color::new(channels[0], channels[1], channels[2])
    }
}
