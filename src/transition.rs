//! Step-wise fades between two colors.
//!
//! Every step moves each channel one unit toward its target on its own, so
//! channels with a short distance settle first and the fade drifts through hues
//! instead of following a straight line in RGB space.

use crate::colors::Color;
use crate::hal::RgbLed;
use crate::ticker::{TickOutcome, Ticker};
use core::cmp::Ordering;

/// Moves one channel value a single unit toward `target`.
#[inline]
pub fn step_channel(current: u8, target: u8) -> u8 {
    match current.cmp(&target) {
        Ordering::Less => current + 1,
        Ordering::Greater => current - 1,
        Ordering::Equal => current,
    }
}

/// Applies [`step_channel`] to all three channels.
#[inline]
pub fn step_toward(current: Color, target: Color) -> Color {
    Color::new(
        step_channel(current.red, target.red),
        step_channel(current.green, target.green),
        step_channel(current.blue, target.blue),
    )
}

/// Number of steps a fade from `from` to `to` takes.
pub fn steps_between(from: Color, to: Color) -> u8 {
    from.red
        .abs_diff(to.red)
        .max(from.green.abs_diff(to.green))
        .max(from.blue.abs_diff(to.blue))
}

/// Iterator over the intermediate colors of a fade, ending with the target.
///
/// Yields nothing when the two colors are already equal.
#[derive(Debug, Clone, Copy)]
pub struct ColorTransition {
    current: Color,
    target: Color,
}

impl ColorTransition {
    pub fn new(from: Color, to: Color) -> Self {
        Self {
            current: from,
            target: to,
        }
    }

    /// The last color yielded, or the start color before the first step.
    #[inline]
    pub fn current(&self) -> Color {
        self.current
    }

    #[inline]
    pub fn target(&self) -> Color {
        self.target
    }
}

impl Iterator for ColorTransition {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        if self.current == self.target {
            return None;
        }

        self.current = step_toward(self.current, self.target);
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = steps_between(self.current, self.target) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ColorTransition {}

/// Where a fade ended and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    /// Color shown when the fade stopped.
    pub color: Color,
    /// `Cancelled` if the button cut the fade short.
    pub outcome: TickOutcome,
}

/// Fades the LED from `from` to `to`, ticking `step_delay_ms` after each step.
///
/// On cancellation the color reached so far is returned, so the caller can pick
/// up from there instead of snapping.
pub fn transition_to<T>(io: &mut T, from: Color, to: Color, step_delay_ms: u32) -> TransitionResult
where
    T: Ticker + RgbLed,
{
    let mut color = from;

    for step in ColorTransition::new(from, to) {
        color = step;
        io.set_color(color);

        if io.tick_for(step_delay_ms).is_cancelled() {
            return TransitionResult {
                color,
                outcome: TickOutcome::Cancelled,
            };
        }
    }

    TransitionResult {
        color,
        outcome: TickOutcome::Completed,
    }
}
