#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Lamp`**: The mode state machine. Owns the device context and cycles through the modes
//! - **`Mode`**: `Mood`, `SoundReactive` or `SoundAnalysis`, in that fixed cycle
//! - **`Device`**: Device context holding the drivers, the latest mic level and the button state
//! - **`Ticker`**: The only way the lamp waits; reports `Cancelled` when the button is pressed
//! - **`ColorTransition`**: Per-channel, one-unit-per-step fade between two colors
//! - **`ColorPicker`**: Random target colors, biased toward pure red, green or blue
//! - **`SampleBuffer`** / **`estimate_frequency`**: Zero-crossing pitch estimate
//! - **`frequency_to_rgb`**: Maps a normalized frequency onto the hue wheel
//! - **`RgbLed`**, **`Microphone`**, **`ModeButton`**, **`StatusIndicator`**: Traits to implement for your board
//!
//! Colors are `Srgb<u8>` (aliased as `Color`): one PWM duty value per channel, capped by
//! `LampConfig::color_max`. Timing comes from any `embedded_hal::delay::DelayNs`.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod analysis;
pub mod colors;
pub mod config;
pub mod device;
pub mod hal;
pub mod lamp;
pub mod mode;
pub mod picker;
pub mod pwm;
pub mod ticker;
pub mod transition;

mod mood;
mod reactive;

pub use analysis::{SampleBuffer, count_crossings, estimate_frequency};
pub use colors::{BLACK, Color, frequency_to_rgb, hue_to_rgb};
pub use config::{ConfigError, LampConfig};
pub use device::Device;
pub use hal::{Channel, Microphone, ModeButton, NoIndicator, RgbLed, StatusIndicator};
pub use lamp::Lamp;
pub use mode::Mode;
pub use picker::ColorPicker;
pub use pwm::{ActiveLowButton, ActiveLowIndicator, PwmRgbLed};
pub use ticker::{TickOutcome, Ticker};
pub use transition::{ColorTransition, TransitionResult, transition_to};
