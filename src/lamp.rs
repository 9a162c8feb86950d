//! Mode state machine.
//!
//! Provides [`Lamp`], which owns the [`Device`] context and the random color
//! source, runs the active mode until the button cancels it, announces the next
//! mode and carries on. Each mode's loop lives in its own module.

use crate::colors::BLACK;
use crate::config::{ANNOUNCE_BLINK_MS, ConfigError, LampConfig};
use crate::device::Device;
use crate::hal::{Microphone, ModeButton, RgbLed, StatusIndicator};
use crate::mode::Mode;
use crate::picker::ColorPicker;
use embedded_hal::delay::DelayNs;

/// The lamp controller.
///
/// # Type Parameters
/// * `M` - Microphone ADC
/// * `B` - Mode button
/// * `L` - RGB PWM outputs
/// * `D` - Busy-wait time base
/// * `S` - Status indicator
pub struct Lamp<M, B, L, D, S> {
    pub(crate) device: Device<M, B, L, D, S>,
    pub(crate) picker: ColorPicker,
    pub(crate) config: LampConfig,
    mode: Mode,
}

impl<M, B, L, D, S> Lamp<M, B, L, D, S>
where
    M: Microphone,
    B: ModeButton,
    L: RgbLed,
    D: DelayNs,
    S: StatusIndicator,
{
    /// Validates `config`, seeds the color picker from a fresh microphone
    /// reading and starts in [`Mode::Mood`].
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found in `config`.
    pub fn new(mut device: Device<M, B, L, D, S>, config: LampConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        device.update_mic();
        let seed = device.mic_level();
        let picker = ColorPicker::from_config(seed as u64, &config)?;

        #[cfg(feature = "defmt")]
        defmt::info!("lamp ready, rng seed {}", seed);

        Ok(Self {
            device,
            picker,
            config,
            mode: Mode::Mood,
        })
    }

    /// The active mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn config(&self) -> &LampConfig {
        &self.config
    }

    #[inline]
    pub fn device(&self) -> &Device<M, B, L, D, S> {
        &self.device
    }

    /// Runs `mode`'s loop until the button cancels it.
    pub fn run_mode(&mut self, mode: Mode) {
        match mode {
            Mode::Mood => self.run_mood(),
            Mode::SoundReactive => self.run_sound_reactive(),
            Mode::SoundAnalysis => self.run_sound_analysis(),
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("{} cancelled", mode);
    }

    /// Runs the active mode until the button cancels it.
    pub fn run_current_mode(&mut self) {
        self.run_mode(self.mode);
    }

    /// Moves to the next mode in the cycle and announces it.
    pub fn advance_mode(&mut self) -> Mode {
        self.mode = self.mode.next();

        #[cfg(feature = "defmt")]
        defmt::info!("switching to {}", self.mode);

        self.announce(self.mode);
        self.mode
    }

    /// Blinks `mode`'s color so the user sees which mode is starting.
    ///
    /// Uses the plain time base: the press that triggered the switch is usually
    /// still held and must not cut the announcement short.
    pub fn announce(&mut self, mode: Mode) {
        let on = mode.announce_color(self.config.color_max);

        self.device.set_color(BLACK);
        for _ in 0..self.config.mode_switch_blinks {
            self.device.set_color(on);
            self.device.wait_ms(ANNOUNCE_BLINK_MS);
            self.device.set_color(BLACK);
            self.device.wait_ms(ANNOUNCE_BLINK_MS);
        }
    }

    /// Runs the mode cycle forever.
    pub fn run(mut self) -> ! {
        loop {
            self.run_current_mode();
            self.advance_mode();
        }
    }

    /// Consumes the lamp and hands back its device context.
    pub fn release(self) -> Device<M, B, L, D, S> {
        self.device
    }
}
