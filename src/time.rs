//! Time abstraction traits for platform-agnostic timing.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Counters that wrap must return the wrapped distance here; every
    /// deadline comparison in this crate goes through this method.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// A fixed window measured from the instant it was armed.
#[derive(Debug, Clone, Copy)]
pub struct Deadline<I: TimeInstant> {
    start: I,
    window: I::Duration,
}

impl<I: TimeInstant> Deadline<I> {
    /// Arms a deadline `window` after the current time of `time_source`.
    #[inline]
    pub fn arm<T: TimeSource<I>>(time_source: &T, window: I::Duration) -> Self {
        Self {
            start: time_source.now(),
            window,
        }
    }

    /// Returns true once the full window has elapsed.
    #[inline]
    pub fn has_passed<T: TimeSource<I>>(&self, time_source: &T) -> bool {
        let elapsed = time_source.now().duration_since(self.start);
        elapsed.as_millis() >= self.window.as_millis()
    }
}

/// Millisecond duration for 32-bit tick counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillisDuration(pub u32);

impl TimeDuration for MillisDuration {
    const ZERO: Self = MillisDuration(0);

    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    fn from_millis(millis: u64) -> Self {
        // Windows longer than the counter period cannot be measured anyway.
        MillisDuration(millis.min(u32::MAX as u64) as u32)
    }
}

/// Instant read from a free-running 32-bit millisecond counter.
///
/// The counter wraps after ~49.7 days; elapsed time is computed with wrapping
/// arithmetic so deadlines armed just before the wrap still expire on time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillisInstant(pub u32);

impl TimeInstant for MillisInstant {
    type Duration = MillisDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        MillisDuration(self.0.wrapping_sub(earlier.0))
    }
}
