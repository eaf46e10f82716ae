//! Debounced push button with gesture detection.
//!
//! Provides [`TactButton`], which samples a [`ButtonPin`] against a
//! [`TimeSource`] and classifies presses into single, double and triple,
//! short or long gestures. All detection is blocking: each call polls the pin
//! in tight loops until its windows have elapsed.

use crate::callbacks::{ButtonCallback, CallbackTable};
use crate::pin::ButtonPin;
use crate::time::{Deadline, TimeInstant, TimeSource};
use crate::types::{ButtonConfig, CallbackError, Gesture, InputMode, Level, PinId, PressCount};

/// A single push button polled from the application's main loop.
///
/// Call [`check_button`](Self::check_button) once per loop iteration. When no
/// press is in progress it returns [`Gesture::NotPressed`] almost at once.
/// Otherwise it blocks until the gesture is resolved, which takes up to
/// about `long_press + 2 * multi_press` plus debounce windows.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Pin implementation type
/// * `T` - Time source implementation type
pub struct TactButton<'t, I: TimeInstant, P: ButtonPin, T: TimeSource<I>> {
    pin: P,
    time_source: &'t T,
    config: ButtonConfig<I::Duration>,
    state: Gesture,
    callbacks: CallbackTable,
}

impl<'t, I: TimeInstant, P: ButtonPin, T: TimeSource<I>> TactButton<'t, I, P, T> {
    /// Creates an active-high button on a floating input with default timings.
    pub fn new(pin: P, time_source: &'t T) -> Self {
        Self::with_config(pin, time_source, ButtonConfig::new())
    }

    /// Creates a button pressed at `active` level on a floating input.
    pub fn with_active(pin: P, time_source: &'t T, active: Level) -> Self {
        Self::with_config(pin, time_source, ButtonConfig::new().with_active(active))
    }

    /// Creates a button pressed at `active` level with the given input mode.
    pub fn with_mode(pin: P, time_source: &'t T, active: Level, input_mode: InputMode) -> Self {
        let config = ButtonConfig::new()
            .with_active(active)
            .with_input_mode(input_mode);
        Self::with_config(pin, time_source, config)
    }

    /// Creates a button from a full configuration. Configures the pin.
    pub fn with_config(mut pin: P, time_source: &'t T, config: ButtonConfig<I::Duration>) -> Self {
        pin.configure(config.input_mode);
        debug!(
            "pin {:?}: button active {:?}, input {:?}",
            pin.pin_id(),
            config.active,
            config.input_mode
        );

        Self {
            pin,
            time_source,
            config,
            state: Gesture::None,
            callbacks: CallbackTable::new(),
        }
    }

    /// Registers `handler` for one of the six dispatchable gestures.
    ///
    /// # Errors
    /// * `NotDispatchable` - `gesture` is `None` or `NotPressed`; nothing is registered
    pub fn set_callback(
        &mut self,
        gesture: Gesture,
        handler: ButtonCallback,
    ) -> Result<(), CallbackError> {
        self.callbacks.set(gesture, handler)?;
        debug!("pin {:?}: callback set for {:?}", self.pin.pin_id(), gesture);
        Ok(())
    }

    /// Removes the handler for `gesture`, returning it if one was registered.
    ///
    /// # Errors
    /// * `NotDispatchable` - `gesture` is `None` or `NotPressed`
    pub fn clear_callback(
        &mut self,
        gesture: Gesture,
    ) -> Result<Option<ButtonCallback>, CallbackError> {
        self.callbacks.clear(gesture)
    }

    /// Polls the button and reports the resolved gesture, dispatching its callback.
    ///
    /// Wraps [`check_button_tact`](Self::check_button_tact) so that reports
    /// stay consistent across back-to-back calls:
    /// - While a long press is held, every call repeats the long gesture first
    ///   reported (a double long stays a double long) and re-dispatches it.
    /// - The first call after a long press is released returns
    ///   [`Gesture::NotPressed`] instead of a short gesture.
    pub fn check_button(&mut self) -> Gesture {
        let newstate = self.check_button_tact();

        if let Gesture::Long(held) = self.state {
            if newstate.is_long() {
                let repeated = Gesture::Long(held);
                trace!("pin {:?}: {:?} still held", self.pin.pin_id(), repeated);
                self.callbacks.dispatch(self.pin.pin_id(), repeated);
                return repeated;
            }

            trace!(
                "pin {:?}: long press released, dropping {:?}",
                self.pin.pin_id(),
                newstate
            );
            self.state = Gesture::NotPressed;
            return self.state;
        }

        self.state = newstate;
        if newstate != Gesture::None {
            self.callbacks.dispatch(self.pin.pin_id(), newstate);
        }
        newstate
    }

    /// Classifies the current interaction without any cross-call memory.
    ///
    /// Returns [`Gesture::NotPressed`] at once if the button is not down.
    /// Otherwise times each press against `long_press` and, after a short
    /// press, waits out `multi_press` for the next one. A single or double
    /// short press is therefore reported only after the full multi-press
    /// window has passed since the last release; a third short press is
    /// reported on release.
    pub fn check_button_tact(&mut self) -> Gesture {
        if !self.button_pressed() {
            return Gesture::NotPressed;
        }

        let mut count = PressCount::One;
        let gesture = loop {
            if self.held_past_long_press() {
                break Gesture::Long(count);
            }

            match count.next() {
                Some(next) if self.pressed_again() => count = next,
                _ => break Gesture::Short(count),
            }
        };

        debug!("pin {:?}: classified {:?}", self.pin.pin_id(), gesture);
        gesture
    }

    /// Returns true if the button stays at its active level for the full
    /// debounce window.
    ///
    /// Returns false on the first sample that is not active, so any press or
    /// bounce shorter than the window is never seen.
    pub fn button_pressed(&mut self) -> bool {
        let window = Deadline::arm(self.time_source, self.config.timings.debounce);
        while self.pin.is_active(self.config.active) {
            if window.has_passed(self.time_source) {
                return true;
            }
        }

        false
    }

    // A release that drops out of `button_pressed` inside the long window ends
    // the hold, even if the button goes straight back down.
    fn held_past_long_press(&mut self) -> bool {
        let deadline = Deadline::arm(self.time_source, self.config.timings.long_press);
        while self.button_pressed() {
            if deadline.has_passed(self.time_source) {
                return true;
            }
        }

        false
    }

    fn pressed_again(&mut self) -> bool {
        let window = Deadline::arm(self.time_source, self.config.timings.multi_press);
        while !window.has_passed(self.time_source) {
            if self.button_pressed() {
                return true;
            }
        }

        false
    }

    /// Returns the most recently reported gesture.
    pub fn state(&self) -> Gesture {
        self.state
    }

    /// Returns the identifier of the button's pin.
    pub fn pin_id(&self) -> PinId {
        self.pin.pin_id()
    }

    /// Returns the configuration fixed at construction.
    pub fn config(&self) -> &ButtonConfig<I::Duration> {
        &self.config
    }

    /// Returns the registered callbacks.
    pub fn callbacks(&self) -> &CallbackTable {
        &self.callbacks
    }

    /// Consumes the button and returns its pin.
    pub fn release(self) -> P {
        self.pin
    }
}
