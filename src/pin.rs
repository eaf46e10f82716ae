//! Pin abstraction for the button input.

use crate::types::{InputMode, Level, PinId};
use embedded_hal::digital::InputPin;

/// Trait for abstracting the button's input pin.
///
/// Implement this for your GPIO to let a [`TactButton`](crate::TactButton)
/// sample it. Reads are assumed to always succeed.
pub trait ButtonPin {
    /// Logical identifier handed to callbacks.
    fn pin_id(&self) -> PinId;

    /// Configures the pin as a digital input with the given pull setting.
    fn configure(&mut self, mode: InputMode);

    /// Reads the current level of the pin.
    fn read(&mut self) -> Level;

    /// Returns true if the pin currently sits at the `active` level.
    fn is_active(&mut self, active: Level) -> bool {
        self.read() == active
    }
}

/// Adapter for any `embedded-hal` 1.0 [`InputPin`].
///
/// HAL pins encode their pull configuration in the type, so `configure` only
/// records the requested mode. A failed read never counts as a press:
/// [`ButtonPin::is_active`] returns false for either active level, and
/// [`ButtonPin::read`] falls back to [`Level::Low`].
pub struct HalButtonPin<P: InputPin> {
    id: PinId,
    pin: P,
    mode: Option<InputMode>,
}

impl<P: InputPin> HalButtonPin<P> {
    /// Wraps a HAL input pin under the given identifier.
    pub fn new(id: PinId, pin: P) -> Self {
        Self {
            id,
            pin,
            mode: None,
        }
    }

    /// Mode most recently requested through [`ButtonPin::configure`].
    pub fn requested_mode(&self) -> Option<InputMode> {
        self.mode
    }

    /// Returns the wrapped pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> ButtonPin for HalButtonPin<P> {
    fn pin_id(&self) -> PinId {
        self.id
    }

    fn configure(&mut self, mode: InputMode) {
        trace!("pin {:?}: input mode {:?} fixed by HAL type", self.id, mode);
        self.mode = Some(mode);
    }

    fn read(&mut self) -> Level {
        match self.pin.is_high() {
            Ok(true) => Level::High,
            Ok(false) => Level::Low,
            Err(_) => {
                warn!("pin {:?}: read failed, reporting low", self.id);
                Level::Low
            }
        }
    }

    fn is_active(&mut self, active: Level) -> bool {
        let sample = match active {
            Level::High => self.pin.is_high(),
            Level::Low => self.pin.is_low(),
        };
        sample.unwrap_or_else(|_| {
            warn!("pin {:?}: read failed, treating as released", self.id);
            false
        })
    }
}
