//! Color type and the frequency-to-hue mapping.
//!
//! Colors are `palette::Srgb<u8>`: one 8-bit duty value per channel, never above
//! the configured ceiling. The hue mapper goes through `palette`'s HSV to RGB
//! conversion so that neighbouring frequencies land on neighbouring colors.

use crate::config::HUE_SCALE;
use palette::{FromColor, Hsv, Srgb};

/// An RGB triple of 8-bit channel intensities.
pub type Color = Srgb<u8>;

/// All channels off.
pub const BLACK: Color = Srgb::new(0, 0, 0);

/// Pure red at `value` brightness.
#[inline]
pub const fn red(value: u8) -> Color {
    Srgb::new(value, 0, 0)
}

/// Pure green at `value` brightness.
#[inline]
pub const fn green(value: u8) -> Color {
    Srgb::new(0, value, 0)
}

/// Pure blue at `value` brightness.
#[inline]
pub const fn blue(value: u8) -> Color {
    Srgb::new(0, 0, value)
}

/// Returns true if at most one channel is non-zero.
pub fn is_pure(color: Color) -> bool {
    lit_channels(color) <= 1
}

/// Number of non-zero channels.
pub fn lit_channels(color: Color) -> usize {
    [color.red, color.green, color.blue]
        .iter()
        .filter(|&&c| c != 0)
        .count()
}

/// Converts a hue in degrees to a fully saturated color of brightness `value`.
///
/// Hues of 360 and above wrap around the wheel. Channels between zero and
/// `value` truncate toward zero.
pub fn hue_to_rgb(hue: u16, value: u8) -> Color {
    let rgb: Srgb = Srgb::from_color(Hsv::new((hue % 360) as f32, 1.0, 1.0));
    let scale = value as f32;

    Srgb::new(
        (rgb.red * scale) as u8,
        (rgb.green * scale) as u8,
        (rgb.blue * scale) as u8,
    )
}

/// Hue in degrees (0-359) for a normalized frequency.
pub fn frequency_to_hue(frequency: f32) -> u16 {
    let frequency = frequency.clamp(0.0, 1.0);
    (frequency * HUE_SCALE) as u16 % 360
}

/// Maps a normalized frequency in [0, 1] onto the hue wheel at brightness `value`.
#[inline]
pub fn frequency_to_rgb(frequency: f32, value: u8) -> Color {
    hue_to_rgb(frequency_to_hue(frequency), value)
}
