//! Shared test infrastructure for one-tact integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::{Cell, RefCell};

use one_tact::{
    ButtonPin, Gesture, InputMode, Level, PinId, TactButton, TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Simulated Clock
// ============================================================================

/// Clock that advances one millisecond every time it is read.
///
/// The button's wait loops read the clock on every iteration, so simulated
/// time moves forward exactly as fast as the code polls it.
pub struct SimClock {
    current_time: Cell<u64>,
}

impl SimClock {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(0),
        }
    }

    /// Current time without advancing the clock
    pub fn peek(&self) -> u64 {
        self.current_time.get()
    }

    pub fn set_time(&self, millis: u64) {
        self.current_time.set(millis);
    }
}

impl TimeSource<TestInstant> for SimClock {
    fn now(&self) -> TestInstant {
        let now = self.current_time.get();
        self.current_time.set(now + 1);
        TestInstant(now)
    }
}

// ============================================================================
// Scripted Pin
// ============================================================================

/// Pin whose level follows a list of `[start, end)` press intervals on a [`SimClock`].
pub struct ScriptedPin<'a> {
    id: PinId,
    clock: &'a SimClock,
    presses: heapless::Vec<(u64, u64), 8>,
    active: Level,
    configured: Option<InputMode>,
}

impl<'a> ScriptedPin<'a> {
    /// Active-high pin pressed during the given intervals
    pub fn new(clock: &'a SimClock, presses: &[(u64, u64)]) -> Self {
        Self {
            id: PinId(3),
            clock,
            presses: heapless::Vec::from_slice(presses).unwrap(),
            active: Level::High,
            configured: None,
        }
    }

    pub fn active_low(mut self) -> Self {
        self.active = Level::Low;
        self
    }

    pub fn configured(&self) -> Option<InputMode> {
        self.configured
    }

    fn pressed_at(&self, millis: u64) -> bool {
        self.presses
            .iter()
            .any(|&(start, end)| start <= millis && millis < end)
    }
}

impl ButtonPin for ScriptedPin<'_> {
    fn pin_id(&self) -> PinId {
        self.id
    }

    fn configure(&mut self, mode: InputMode) {
        self.configured = Some(mode);
    }

    fn read(&mut self) -> Level {
        let pressed = self.pressed_at(self.clock.peek());
        match (pressed, self.active) {
            (true, level) => level,
            (false, Level::High) => Level::Low,
            (false, Level::Low) => Level::High,
        }
    }
}

pub type SimButton<'a> = TactButton<'a, TestInstant, ScriptedPin<'a>, SimClock>;

// ============================================================================
// Callback Recording
// ============================================================================

thread_local! {
    static CALLS: RefCell<Vec<(PinId, Gesture)>> = const { RefCell::new(Vec::new()) };
}

/// Callback that records every invocation for the current test thread
pub fn record(pin: PinId, gesture: Gesture) {
    CALLS.with(|calls| calls.borrow_mut().push((pin, gesture)));
}

/// Returns and clears the invocations recorded on this thread
pub fn take_calls() -> Vec<(PinId, Gesture)> {
    CALLS.with(|calls| calls.borrow_mut().drain(..).collect())
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Polls `check_button` until it reports something other than `NotPressed`
/// or the clock passes `until`.
pub fn poll_for_gesture(button: &mut SimButton<'_>, clock: &SimClock, until: u64) -> Gesture {
    while clock.peek() < until {
        let gesture = button.check_button();
        if gesture != Gesture::NotPressed {
            return gesture;
        }
    }
    Gesture::NotPressed
}

/// Polls `check_button` until the clock passes `until`, collecting every report.
pub fn poll_all(button: &mut SimButton<'_>, clock: &SimClock, until: u64) -> Vec<Gesture> {
    let mut reports = Vec::new();
    while clock.peek() < until {
        reports.push(button.check_button());
    }
    reports
}
