//! Device context owning the lamp's drivers and its two pieces of live state.
//!
//! [`Device`] holds the latest microphone level and button reading alongside the
//! drivers that produce them. Both values are only written through `&mut Device`:
//! the sampler writes `mic_level`, the button monitor writes `button_pressed`,
//! and both only run from inside a ticker quantum or an explicit sampling step.

use crate::analysis::SampleBuffer;
use crate::colors::{BLACK, Color};
use crate::config::{
    ANALYSIS_SAMPLE_INTERVAL_US, LOUDNESS_READS, MIC_READS_PER_QUANTUM, TICK_QUANTUM_US,
};
use crate::hal::{Channel, Microphone, ModeButton, NoIndicator, RgbLed, StatusIndicator};
use crate::ticker::{TickOutcome, Ticker};
use embedded_hal::delay::DelayNs;

/// The lamp's hardware plus its sampled state.
///
/// # Type Parameters
/// * `M` - Microphone ADC
/// * `B` - Mode button
/// * `L` - RGB PWM outputs
/// * `D` - Busy-wait time base
/// * `S` - Optional status indicator
pub struct Device<M, B, L, D, S = NoIndicator> {
    mic: M,
    button: B,
    led: L,
    delay: D,
    indicator: S,
    mic_level: u16,
    button_pressed: bool,
}

impl<M, B, L, D> Device<M, B, L, D, NoIndicator>
where
    M: Microphone,
    B: ModeButton,
    L: RgbLed,
    D: DelayNs,
{
    /// Creates a device context with all outputs off and no indicator.
    pub fn new(mic: M, button: B, mut led: L, delay: D) -> Self {
        led.set_color(BLACK);

        Self {
            mic,
            button,
            led,
            delay,
            indicator: NoIndicator,
            mic_level: 0,
            button_pressed: false,
        }
    }
}

impl<M, B, L, D, S> Device<M, B, L, D, S>
where
    M: Microphone,
    B: ModeButton,
    L: RgbLed,
    D: DelayNs,
    S: StatusIndicator,
{
    /// Attaches a status indicator, switched off.
    pub fn with_indicator<S2: StatusIndicator>(self, mut indicator: S2) -> Device<M, B, L, D, S2> {
        indicator.set(false);

        Device {
            mic: self.mic,
            button: self.button,
            led: self.led,
            delay: self.delay,
            indicator,
            mic_level: self.mic_level,
            button_pressed: self.button_pressed,
        }
    }

    /// Runs one conversion and stores it as the current microphone level.
    pub fn update_mic(&mut self) {
        self.mic_level = self.mic.read_level();
    }

    /// Latest completed microphone conversion.
    #[inline]
    pub fn mic_level(&self) -> u16 {
        self.mic_level
    }

    /// Refreshes the button state from the driver.
    pub fn poll_button(&mut self) {
        self.button_pressed = self.button.is_pressed();
    }

    /// Button state as of the most recent poll.
    #[inline]
    pub fn button_pressed(&self) -> bool {
        self.button_pressed
    }

    /// Takes a few back-to-back conversions and returns the last one.
    pub fn fresh_sample(&mut self) -> u16 {
        for _ in 0..LOUDNESS_READS {
            self.update_mic();
        }
        self.mic_level
    }

    /// Samples loudness with the PWM outputs silenced, then restores `display`.
    ///
    /// PWM switching couples into the microphone line, so the outputs are off
    /// for the duration of the conversions.
    pub fn sample_loudness(&mut self, display: Color) -> u16 {
        self.led.set_color(BLACK);
        let level = self.fresh_sample();
        self.led.set_color(display);
        level
    }

    /// Refills `buffer` with evenly spaced samples while holding `display` on the LED.
    pub fn fill_samples<const N: usize>(&mut self, buffer: &mut SampleBuffer<N>, display: Color) {
        buffer.refill(|| {
            let level = self.fresh_sample();
            self.led.set_color(display);
            self.delay.delay_us(ANALYSIS_SAMPLE_INTERVAL_US);
            level
        });
    }

    /// Plain, uncancellable wait on the time base.
    pub fn wait_ms(&mut self, millis: u32) {
        self.delay.delay_ms(millis);
    }

    /// Switches the status indicator on for `millis`, then off.
    ///
    /// Does nothing, and takes no time, without an attached indicator.
    pub fn pulse_indicator(&mut self, millis: u32) {
        if !self.indicator.is_attached() {
            return;
        }

        self.indicator.set(true);
        self.delay.delay_ms(millis);
        self.indicator.set(false);
    }

    /// Consumes the context and hands back its drivers.
    pub fn release(self) -> (M, B, L, D, S) {
        (self.mic, self.button, self.led, self.delay, self.indicator)
    }
}

impl<M, B, L, D, S> Ticker for Device<M, B, L, D, S>
where
    M: Microphone,
    B: ModeButton,
    L: RgbLed,
    D: DelayNs,
    S: StatusIndicator,
{
    fn tick_for(&mut self, millis: u32) -> TickOutcome {
        for _ in 0..millis.max(1) {
            for _ in 0..MIC_READS_PER_QUANTUM {
                self.update_mic();
            }

            self.poll_button();
            if self.button_pressed {
                return TickOutcome::Cancelled;
            }

            self.delay.delay_us(TICK_QUANTUM_US);
        }

        TickOutcome::Completed
    }
}

impl<M, B, L, D, S> RgbLed for Device<M, B, L, D, S>
where
    L: RgbLed,
{
    #[inline]
    fn set_channel(&mut self, channel: Channel, value: u8) {
        self.led.set_channel(channel, value);
    }

    #[inline]
    fn set_color(&mut self, color: Color) {
        self.led.set_color(color);
    }
}
