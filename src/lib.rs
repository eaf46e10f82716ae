#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`TactButton`**: Debounces one push button and classifies its gestures
//! - **`Gesture`**: `Short(n)` / `Long(n)` for one to three chained presses, plus `NotPressed` and `None`
//! - **`ButtonConfig`** / **`Timings`**: Active level, input mode and detection windows
//! - **`ButtonPin`**: Trait to implement for your GPIO (or use `HalButtonPin` with any `embedded-hal` input)
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`CallbackTable`**: Handlers invoked with `(PinId, Gesture)` when a gesture is reported
//!
//! Detection is blocking. `TactButton::check_button` is meant to be called once
//! per main loop iteration; while a press is being classified it keeps polling
//! the pin and the time source until the gesture is resolved.

#[macro_use]
mod fmt;

pub mod time;
pub mod types;
pub mod pin;
pub mod callbacks;
pub mod button;

pub use button::TactButton;
pub use callbacks::{ButtonCallback, CallbackTable};
pub use pin::{ButtonPin, HalButtonPin};
pub use time::{Deadline, MillisDuration, MillisInstant, TimeDuration, TimeInstant, TimeSource};
pub use types::{
    BUTTON_MASK, ButtonConfig, CallbackError, DEFAULT_DEBOUNCE_MS, DEFAULT_LONG_PRESS_MS,
    DEFAULT_MULTI_PRESS_MS, Gesture, InputMode, LONG_PRESS, LONG1, LONG2, LONG3, Level, NONE,
    NOT_PRESSED, PinId, PressCount, SHORT1, SHORT2, SHORT3, Timings,
};
