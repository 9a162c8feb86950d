//! Sound-analysis mode: zero-crossing frequency estimate mapped onto the hue wheel.
//!
//! This is a coarse proxy for the dominant frequency, not spectral analysis: each
//! sample is classified as above or below a fixed silence level and the number of
//! side changes is divided by the buffer length.

use crate::colors::{BLACK, frequency_to_rgb};
use crate::config::{ANALYSIS_CYCLE_DELAY_MS, SAMPLE_BUFFER_SIZE};
use crate::hal::{Microphone, ModeButton, RgbLed, StatusIndicator};
use crate::lamp::Lamp;
use crate::ticker::Ticker;
use embedded_hal::delay::DelayNs;
use heapless::Vec;

/// Fixed-capacity buffer of raw microphone samples, refilled in place.
#[derive(Debug, Clone, Default)]
pub struct SampleBuffer<const N: usize> {
    samples: Vec<u16, N>,
}

impl<const N: usize> SampleBuffer<N> {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Discards the previous contents and fills every slot from `next`, in order.
    pub fn refill(&mut self, mut next: impl FnMut() -> u16) {
        self.samples.clear();
        for _ in 0..N {
            let _ = self.samples.push(next());
        }
    }

    /// The samples collected by the last refill.
    #[inline]
    pub fn as_slice(&self) -> &[u16] {
        &self.samples
    }

    /// Number of samples held.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true before the first refill.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Normalized frequency estimate of the held samples.
    #[inline]
    pub fn estimate(&self, zero_level: u16) -> f32 {
        estimate_frequency(&self.samples, zero_level)
    }
}

/// Counts the side changes across `zero_level` between consecutive samples.
///
/// A sample equal to `zero_level` counts as above it.
pub fn count_crossings(samples: &[u16], zero_level: u16) -> usize {
    samples
        .windows(2)
        .filter(|pair| (pair[0] >= zero_level) != (pair[1] >= zero_level))
        .count()
}

/// Crossing count divided by the number of samples, in [0, 1).
///
/// Empty and constant buffers both yield zero.
pub fn estimate_frequency(samples: &[u16], zero_level: u16) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }

    count_crossings(samples, zero_level) as f32 / samples.len() as f32
}

impl<M, B, L, D, S> Lamp<M, B, L, D, S>
where
    M: Microphone,
    B: ModeButton,
    L: RgbLed,
    D: DelayNs,
    S: StatusIndicator,
{
    /// Sound-analysis loop. Returns when the button cancels a cycle.
    ///
    /// While a buffer fills, the LED keeps showing the previous cycle's color.
    pub(crate) fn run_sound_analysis(&mut self) {
        let mut buffer = SampleBuffer::<SAMPLE_BUFFER_SIZE>::new();
        let mut color = BLACK;

        loop {
            self.device.fill_samples(&mut buffer, color);

            let frequency = buffer.estimate(self.config.silence_level);
            color = frequency_to_rgb(frequency, self.config.color_max);
            self.device.set_color(color);

            if self.device.tick_for(ANALYSIS_CYCLE_DELAY_MS).is_cancelled() {
                return;
            }
        }
    }
}
