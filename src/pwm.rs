//! Adapters from embedded-hal peripherals to the lamp's driver traits.

use crate::hal::{Channel, ModeButton, RgbLed, StatusIndicator};
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::pwm::SetDutyCycle;

/// RGB LED implementation for PWM-controlled LEDs
///
/// Maps the lamp's 0-255 channel values onto each PWM channel's duty range and
/// handles common anode inversion.
pub struct PwmRgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    red: R,
    green: G,
    blue: B,
    common_anode: bool,
}

impl<R, G, B> PwmRgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    /// Create a new RGB LED controller
    ///
    /// # Arguments
    /// * `red` - PWM channel for red LED
    /// * `green` - PWM channel for green LED
    /// * `blue` - PWM channel for blue LED
    /// * `common_anode` - true for common anode LED (inverted logic), false for common cathode
    pub fn new(red: R, green: G, blue: B, common_anode: bool) -> Self {
        Self {
            red,
            green,
            blue,
            common_anode,
        }
    }

    /// Hands back the PWM channels.
    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }

    fn level(&self, value: u8) -> u16 {
        if self.common_anode {
            (u8::MAX - value) as u16
        } else {
            value as u16
        }
    }
}

impl<R, G, B> RgbLed for PwmRgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn set_channel(&mut self, channel: Channel, value: u8) {
        let level = self.level(value);
        let max = u8::MAX as u16;

        // Channel errors are board-level; nothing useful to do with them here.
        match channel {
            Channel::Red => {
                let _ = self.red.set_duty_cycle_fraction(level, max);
            }
            Channel::Green => {
                let _ = self.green.set_duty_cycle_fraction(level, max);
            }
            Channel::Blue => {
                let _ = self.blue.set_duty_cycle_fraction(level, max);
            }
        }
    }
}

/// Button wired to pull its pin low when pressed.
///
/// A failed pin read counts as "not pressed".
pub struct ActiveLowButton<P: InputPin> {
    pin: P,
}

impl<P: InputPin> ActiveLowButton<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> ModeButton for ActiveLowButton<P> {
    #[inline]
    fn is_pressed(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }
}

/// Status LED that lights when its pin is driven low.
pub struct ActiveLowIndicator<P: OutputPin> {
    pin: P,
}

impl<P: OutputPin> ActiveLowIndicator<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> StatusIndicator for ActiveLowIndicator<P> {
    fn set(&mut self, on: bool) {
        let _ = if on {
            self.pin.set_low()
        } else {
            self.pin.set_high()
        };
    }
}
