//! Cooperative time base with button cancellation.

/// How a [`Ticker::tick_for`] call ended.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// The full duration elapsed without a button press.
    Completed,
    /// The button was seen pressed; the rest of the duration was skipped.
    Cancelled,
}

impl TickOutcome {
    /// Returns true if the wait was cut short by the button.
    #[inline]
    pub fn is_cancelled(self) -> bool {
        self == TickOutcome::Cancelled
    }
}

/// The lamp's only suspension point.
///
/// Every wait in a mode loop goes through `tick_for`, and every caller unwinds
/// as soon as it returns [`TickOutcome::Cancelled`].
pub trait Ticker {
    /// Waits `millis` milliseconds in fixed quanta, polling the microphone and
    /// the button on each one.
    ///
    /// A zero duration still polls once.
    fn tick_for(&mut self, millis: u32) -> TickOutcome;
}
