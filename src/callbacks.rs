//! Gesture callback registration and dispatch.

use crate::types::{CallbackError, Gesture, PinId};
use heapless::LinearMap;

/// Handler invoked with the button's pin and the gesture that fired.
pub type ButtonCallback = fn(PinId, Gesture);

/// Maps each dispatchable gesture to an optional handler.
///
/// Only the six `Short(n)` / `Long(n)` gestures have slots. Lookup and
/// invocation never modify the table.
#[derive(Debug, Clone)]
pub struct CallbackTable {
    handlers: LinearMap<Gesture, ButtonCallback, 6>,
}

impl CallbackTable {
    /// Creates an empty table.
    pub const fn new() -> Self {
        Self {
            handlers: LinearMap::new(),
        }
    }

    /// Registers `handler` for `gesture`, replacing any previous handler.
    ///
    /// # Errors
    /// * `NotDispatchable` - `gesture` is `None` or `NotPressed`; the table is unchanged
    pub fn set(&mut self, gesture: Gesture, handler: ButtonCallback) -> Result<(), CallbackError> {
        if !gesture.is_dispatchable() {
            return Err(CallbackError::NotDispatchable(gesture));
        }

        self.handlers.insert(gesture, handler).ok();
        Ok(())
    }

    /// Removes the handler for `gesture`, returning it if one was registered.
    ///
    /// # Errors
    /// * `NotDispatchable` - `gesture` is `None` or `NotPressed`
    pub fn clear(&mut self, gesture: Gesture) -> Result<Option<ButtonCallback>, CallbackError> {
        if !gesture.is_dispatchable() {
            return Err(CallbackError::NotDispatchable(gesture));
        }

        Ok(self.handlers.remove(&gesture))
    }

    /// Returns the handler registered for `gesture`.
    pub fn get(&self, gesture: Gesture) -> Option<ButtonCallback> {
        self.handlers.get(&gesture).copied()
    }

    /// Invokes the handler for `gesture`, if any, and returns it.
    pub fn dispatch(&self, pin: PinId, gesture: Gesture) -> Option<ButtonCallback> {
        let handler = self.get(gesture)?;
        trace!("pin {:?}: dispatching {:?}", pin, gesture);
        handler(pin, gesture);
        Some(handler)
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for CallbackTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PressCount;
    extern crate std;
    use std::cell::RefCell;
    use std::vec::Vec;

    std::thread_local! {
        static CALLS: RefCell<Vec<(PinId, Gesture)>> = const { RefCell::new(Vec::new()) };
    }

    fn record(pin: PinId, gesture: Gesture) {
        CALLS.with(|calls| calls.borrow_mut().push((pin, gesture)));
    }

    fn other(_pin: PinId, _gesture: Gesture) {}

    fn calls() -> Vec<(PinId, Gesture)> {
        CALLS.with(|calls| calls.borrow().clone())
    }

    #[test]
    fn registering_every_dispatchable_gesture_fits() {
        let mut table = CallbackTable::new();
        for gesture in Gesture::DISPATCHABLE {
            table.set(gesture, record).unwrap();
        }
        assert_eq!(table.len(), 6);

        // Re-registering replaces instead of growing.
        table.set(Gesture::Long(PressCount::Two), other).unwrap();
        assert_eq!(table.len(), 6);
    }

    #[test]
    fn non_dispatchable_gestures_are_rejected() {
        let mut table = CallbackTable::new();
        assert_eq!(
            table.set(Gesture::NotPressed, record),
            Err(CallbackError::NotDispatchable(Gesture::NotPressed))
        );
        assert!(table.set(Gesture::None, record).is_err());
        assert!(table.clear(Gesture::None).is_err());
        assert!(table.is_empty());
    }

    #[test]
    fn dispatch_passes_pin_and_gesture() {
        let mut table = CallbackTable::new();
        table.set(Gesture::Short(PressCount::Three), record).unwrap();

        assert!(table.dispatch(PinId(7), Gesture::Short(PressCount::Two)).is_none());
        assert!(table.dispatch(PinId(7), Gesture::Short(PressCount::Three)).is_some());
        assert_eq!(calls(), [(PinId(7), Gesture::Short(PressCount::Three))]);
    }

    #[test]
    fn cleared_slot_no_longer_dispatches() {
        let mut table = CallbackTable::new();
        table.set(Gesture::Long(PressCount::One), record).unwrap();
        assert!(table.clear(Gesture::Long(PressCount::One)).unwrap().is_some());
        assert!(table.clear(Gesture::Long(PressCount::One)).unwrap().is_none());

        assert!(table.dispatch(PinId(1), Gesture::Long(PressCount::One)).is_none());
        assert!(calls().is_empty());
    }
}
