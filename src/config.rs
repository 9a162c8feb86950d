//! Build-time lamp parameters.
//!
//! Every tunable of the lamp is a named constant here. [`LampConfig`] bundles the
//! ones the mode loops read so a board can assemble a different set at build time
//! (and tests can shorten the long hold period) without touching the algorithms.

/// Brightness ceiling for every color channel (1-255).
pub const COLOR_MAX: u8 = 200;

/// Chance, in percent, that a random color is "pure" (one non-zero channel).
pub const PURE_COLOR_PROBABILITY: u8 = 35;

/// Delay between transition steps in mood mode, in milliseconds.
pub const MOOD_STEP_DELAY_MS: u32 = 30;

/// Delay between transition steps in sound-reactive mode, in milliseconds.
pub const REACTIVE_STEP_DELAY_MS: u32 = 15;

/// How long mood mode holds a reached color, in milliseconds.
pub const COLOR_HOLD_MS: u32 = 10_000;

/// Microphone level above which a sound counts as loud.
pub const LOUD_SOUND_THRESHOLD: u16 = 200;

/// Number of on/off blinks played when entering a mode.
pub const MODE_SWITCH_BLINKS: u8 = 5;

/// Number of microphone samples per frequency-analysis cycle.
pub const SAMPLE_BUFFER_SIZE: usize = 128;

/// Microphone level treated as silence by the zero-crossing estimator.
pub const SILENCE_LEVEL: u16 = 100;

/// Length of one ticker quantum, in microseconds.
pub const TICK_QUANTUM_US: u32 = 1_000;

/// ADC conversions per ticker quantum. Keeps the converter warm and `MicLevel` fresh.
pub const MIC_READS_PER_QUANTUM: u8 = 10;

/// Granularity of hold periods, in milliseconds.
pub const HOLD_TICK_MS: u32 = 10;

/// Fresh ADC conversions taken for one loudness or analysis sample.
pub const LOUDNESS_READS: u8 = 3;

/// Spacing between analysis samples, in microseconds.
pub const ANALYSIS_SAMPLE_INTERVAL_US: u32 = 50;

/// Pause after each analysis cycle, in milliseconds. Doubles as the cancellation check.
pub const ANALYSIS_CYCLE_DELAY_MS: u32 = 5;

/// Length of each on and off phase of a mode announcement blink, in milliseconds.
pub const ANNOUNCE_BLINK_MS: u32 = 90;

/// Length of the status indicator pulse on a loud-sound restart, in milliseconds.
pub const INDICATOR_PULSE_MS: u32 = 10;

/// Hue degrees per unit of normalized frequency (two trips around the wheel).
pub const HUE_SCALE: f32 = 718.0;

/// Parameters read by the mode loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LampConfig {
    /// Brightness ceiling for every channel.
    pub color_max: u8,
    /// Percentage of random picks that are pure colors.
    pub pure_color_percent: u8,
    pub mood_step_delay_ms: u32,
    pub reactive_step_delay_ms: u32,
    pub color_hold_ms: u32,
    pub loud_threshold: u16,
    pub mode_switch_blinks: u8,
    pub silence_level: u16,
}

impl LampConfig {
    /// The configuration built from the constants in this module.
    pub const DEFAULT: Self = Self {
        color_max: COLOR_MAX,
        pure_color_percent: PURE_COLOR_PROBABILITY,
        mood_step_delay_ms: MOOD_STEP_DELAY_MS,
        reactive_step_delay_ms: REACTIVE_STEP_DELAY_MS,
        color_hold_ms: COLOR_HOLD_MS,
        loud_threshold: LOUD_SOUND_THRESHOLD,
        mode_switch_blinks: MODE_SWITCH_BLINKS,
        silence_level: SILENCE_LEVEL,
    };

    /// Sets the brightness ceiling.
    pub const fn with_color_max(mut self, color_max: u8) -> Self {
        self.color_max = color_max;
        self
    }

    /// Sets the pure-color percentage.
    pub const fn with_pure_color_percent(mut self, percent: u8) -> Self {
        self.pure_color_percent = percent;
        self
    }

    /// Sets the mood-mode hold period.
    pub const fn with_color_hold_ms(mut self, millis: u32) -> Self {
        self.color_hold_ms = millis;
        self
    }

    /// Sets the loudness threshold.
    pub const fn with_loud_threshold(mut self, level: u16) -> Self {
        self.loud_threshold = level;
        self
    }

    /// Sets the silence level used by frequency analysis.
    pub const fn with_silence_level(mut self, level: u16) -> Self {
        self.silence_level = level;
        self
    }

    /// Number of [`HOLD_TICK_MS`] ticks making up the mood hold period.
    pub const fn hold_ticks(&self) -> u32 {
        self.color_hold_ms / HOLD_TICK_MS
    }

    /// Checks the parameters the algorithms cannot work with.
    ///
    /// # Errors
    /// * `ZeroColorMax` - `color_max` is zero, leaving no range to pick from
    /// * `PureProbabilityOutOfRange` - `pure_color_percent` is above 100
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.color_max == 0 {
            return Err(ConfigError::ZeroColorMax);
        }
        if self.pure_color_percent > 100 {
            return Err(ConfigError::PureProbabilityOutOfRange(self.pure_color_percent));
        }
        Ok(())
    }
}

impl Default for LampConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Brightness ceiling of zero.
    ZeroColorMax,

    /// Pure-color percentage above 100.
    PureProbabilityOutOfRange(u8),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroColorMax => {
                write!(f, "color ceiling must be at least 1")
            }
            ConfigError::PureProbabilityOutOfRange(percent) => {
                write!(f, "pure color probability {}% exceeds 100%", percent)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
