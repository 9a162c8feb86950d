//! Mood mode: fade to a random color, hold it, repeat.

use crate::colors::BLACK;
use crate::config::HOLD_TICK_MS;
use crate::hal::{Microphone, ModeButton, RgbLed, StatusIndicator};
use crate::lamp::Lamp;
use crate::ticker::Ticker;
use crate::transition::transition_to;
use embedded_hal::delay::DelayNs;

impl<M, B, L, D, S> Lamp<M, B, L, D, S>
where
    M: Microphone,
    B: ModeButton,
    L: RgbLed,
    D: DelayNs,
    S: StatusIndicator,
{
    pub(crate) fn run_mood(&mut self) {
        let mut color = BLACK;

        loop {
            let target = self.picker.pick();

            let fade = transition_to(
                &mut self.device,
                color,
                target,
                self.config.mood_step_delay_ms,
            );
            color = fade.color;
            if fade.outcome.is_cancelled() {
                return;
            }

            for _ in 0..self.config.hold_ticks() {
                if self.device.tick_for(HOLD_TICK_MS).is_cancelled() {
                    return;
                }
            }
        }
    }
}
