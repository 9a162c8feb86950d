//! Hardware abstraction traits.
//!
//! The lamp reaches its hardware only through these traits. Implement them for
//! your board (or use the embedded-hal adapters in [`crate::pwm`]). All of them
//! are infallible at this level: drivers handle their own errors internally.

use crate::colors::Color;

/// One of the three PWM color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Trait for abstracting the RGB LED PWM outputs.
pub trait RgbLed {
    /// Applies a duty cycle (0..=255 scale) to one channel.
    ///
    /// Must take effect before the next microphone read, since the lamp
    /// silences the outputs around loudness samples.
    fn set_channel(&mut self, channel: Channel, value: u8);

    /// Applies all three channels.
    fn set_color(&mut self, color: Color) {
        self.set_channel(Channel::Red, color.red);
        self.set_channel(Channel::Green, color.green);
        self.set_channel(Channel::Blue, color.blue);
    }
}

/// Trait for abstracting the microphone ADC.
pub trait Microphone {
    /// Runs one blocking conversion and returns the raw level.
    fn read_level(&mut self) -> u16;
}

/// Trait for abstracting the mode-change button.
pub trait ModeButton {
    /// Instantaneous, undebounced read. `true` while held down.
    fn is_pressed(&mut self) -> bool;
}

/// Optional debug side channel, typically a status LED.
pub trait StatusIndicator {
    /// Switches the indicator on or off.
    fn set(&mut self, on: bool);

    /// Whether a real indicator is wired up. Pulses are skipped when it is not.
    fn is_attached(&self) -> bool {
        true
    }
}

/// Stand-in for boards without a status indicator.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIndicator;

impl StatusIndicator for NoIndicator {
    #[inline]
    fn set(&mut self, _on: bool) {}

    #[inline]
    fn is_attached(&self) -> bool {
        false
    }
}
