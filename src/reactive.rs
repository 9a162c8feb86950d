//! Sound-reactive mode: fade toward random colors, jumping to a new target
//! whenever the microphone hears something loud.

use crate::colors::{BLACK, Color};
use crate::config::{HOLD_TICK_MS, INDICATOR_PULSE_MS};
use crate::hal::{Microphone, ModeButton, RgbLed, StatusIndicator};
use crate::lamp::Lamp;
use crate::ticker::Ticker;
use crate::transition::ColorTransition;
use embedded_hal::delay::DelayNs;

/// Why a fade-and-hold round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Interruption {
    /// The button was pressed.
    Cancelled,
    /// A loudness sample crossed the threshold.
    LoudSound,
}

impl<M, B, L, D, S> Lamp<M, B, L, D, S>
where
    M: Microphone,
    B: ModeButton,
    L: RgbLed,
    D: DelayNs,
    S: StatusIndicator,
{
    pub(crate) fn run_sound_reactive(&mut self) {
        let mut color = BLACK;

        loop {
            let target = self.picker.pick();

            match self.chase_until_loud(&mut color, target) {
                Interruption::Cancelled => return,
                Interruption::LoudSound => {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("loud sound ({}), new color", self.device.mic_level());

                    self.device.pulse_indicator(INDICATOR_PULSE_MS);
                }
            }
        }
    }

    /// Fades `color` toward `target`, then holds it, until a loud sound or the button.
    ///
    /// `color` always tracks what the LED shows, so the next round starts from there.
    fn chase_until_loud(&mut self, color: &mut Color, target: Color) -> Interruption {
        for step in ColorTransition::new(*color, target) {
            *color = step;
            self.device.set_color(step);

            if self.device.tick_for(self.config.reactive_step_delay_ms).is_cancelled() {
                return Interruption::Cancelled;
            }
            if self.is_loud(step) {
                return Interruption::LoudSound;
            }
        }

        loop {
            if self.device.tick_for(HOLD_TICK_MS).is_cancelled() {
                return Interruption::Cancelled;
            }
            if self.is_loud(*color) {
                return Interruption::LoudSound;
            }
        }
    }

    fn is_loud(&mut self, display: Color) -> bool {
        self.device.sample_loudness(display) > self.config.loud_threshold
    }
}
