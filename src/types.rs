//! Core types: levels, gestures, timings and errors.

use crate::time::TimeDuration;

/// Default debounce window in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 30;

/// Default hold time before a press counts as long, in milliseconds.
pub const DEFAULT_LONG_PRESS_MS: u64 = 600;

/// Default window after a release in which a further press is chained, in milliseconds.
pub const DEFAULT_MULTI_PRESS_MS: u64 = 300;

/// Raw code: no press in progress.
pub const NOT_PRESSED: u8 = 0x00;
/// Raw code: one short press.
pub const SHORT1: u8 = 0x01;
/// Raw code: two short presses.
pub const SHORT2: u8 = 0x02;
/// Raw code: three short presses.
pub const SHORT3: u8 = 0x03;
/// Flag bit set on every long gesture.
pub const LONG_PRESS: u8 = 0x04;
/// Mask selecting the press-count field.
pub const BUTTON_MASK: u8 = 0x03;
/// Raw code: one long press.
pub const LONG1: u8 = LONG_PRESS | SHORT1;
/// Raw code: short press followed by a long press.
pub const LONG2: u8 = LONG_PRESS | SHORT2;
/// Raw code: two short presses followed by a long press.
pub const LONG3: u8 = LONG_PRESS | SHORT3;
/// Raw code: nothing reported yet.
pub const NONE: u8 = 0x08;

/// Digital level of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic low.
    Low,
    /// Logic high.
    High,
}

/// How the button input is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputMode {
    /// Plain input, pull resistor provided externally.
    #[default]
    Floating,
    /// Input with the internal pull-up engaged.
    PullUp,
}

/// Logical identifier of the pin a button is wired to.
///
/// Passed to every callback so one handler can serve several buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(pub u8);

impl From<u8> for PinId {
    fn from(id: u8) -> Self {
        PinId(id)
    }
}

impl From<PinId> for u8 {
    fn from(id: PinId) -> Self {
        id.0
    }
}

/// Number of chained presses in a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressCount {
    /// A single press.
    One,
    /// Two chained presses.
    Two,
    /// Three chained presses.
    Three,
}

impl PressCount {
    /// Value of the press-count field.
    #[inline]
    pub const fn bits(self) -> u8 {
        match self {
            PressCount::One => 1,
            PressCount::Two => 2,
            PressCount::Three => 3,
        }
    }

    /// The count one further press would give, if any.
    #[inline]
    pub const fn next(self) -> Option<Self> {
        match self {
            PressCount::One => Some(PressCount::Two),
            PressCount::Two => Some(PressCount::Three),
            PressCount::Three => None,
        }
    }

    /// Decodes the press-count field; zero is not a count.
    #[inline]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & BUTTON_MASK {
            1 => Some(PressCount::One),
            2 => Some(PressCount::Two),
            3 => Some(PressCount::Three),
            _ => None,
        }
    }
}

/// A classified button interaction.
///
/// `Short` and `Long` carry how many presses were chained; the last press
/// decides between short and long. These six are the dispatchable gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// Nothing has been reported since construction.
    None,
    /// The button is not pressed.
    NotPressed,
    /// Presses released before the long-press threshold.
    Short(PressCount),
    /// Last press held past the long-press threshold.
    Long(PressCount),
}

impl Gesture {
    /// The six gestures a callback can be registered for.
    pub const DISPATCHABLE: [Gesture; 6] = [
        Gesture::Short(PressCount::One),
        Gesture::Long(PressCount::One),
        Gesture::Short(PressCount::Two),
        Gesture::Long(PressCount::Two),
        Gesture::Short(PressCount::Three),
        Gesture::Long(PressCount::Three),
    ];

    /// Returns true for `Long(_)`.
    #[inline]
    pub const fn is_long(self) -> bool {
        matches!(self, Gesture::Long(_))
    }

    /// Returns true for the gestures that carry a press count.
    #[inline]
    pub const fn is_dispatchable(self) -> bool {
        matches!(self, Gesture::Short(_) | Gesture::Long(_))
    }

    /// Number of chained presses, if any.
    #[inline]
    pub const fn press_count(self) -> Option<PressCount> {
        match self {
            Gesture::Short(count) | Gesture::Long(count) => Some(count),
            Gesture::None | Gesture::NotPressed => None,
        }
    }

    /// Encodes the gesture as its raw byte code.
    pub const fn raw(self) -> u8 {
        match self {
            Gesture::None => NONE,
            Gesture::NotPressed => NOT_PRESSED,
            Gesture::Short(count) => count.bits(),
            Gesture::Long(count) => LONG_PRESS | count.bits(),
        }
    }

    /// Decodes a raw byte code. Unknown codes yield `None`.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            NONE => Some(Gesture::None),
            NOT_PRESSED => Some(Gesture::NotPressed),
            _ if raw & !(LONG_PRESS | BUTTON_MASK) != 0 => None,
            _ => match PressCount::from_bits(raw) {
                Some(count) if raw & LONG_PRESS != 0 => Some(Gesture::Long(count)),
                Some(count) => Some(Gesture::Short(count)),
                None => None,
            },
        }
    }
}

impl From<Gesture> for u8 {
    fn from(gesture: Gesture) -> Self {
        gesture.raw()
    }
}

impl core::fmt::Display for Gesture {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let presses = |count: PressCount| match count {
            PressCount::One => "single",
            PressCount::Two => "double",
            PressCount::Three => "triple",
        };
        match self {
            Gesture::None => write!(f, "none"),
            Gesture::NotPressed => write!(f, "not pressed"),
            Gesture::Short(count) => write!(f, "{} press short", presses(*count)),
            Gesture::Long(count) => write!(f, "{} press long", presses(*count)),
        }
    }
}

/// The three windows gesture detection is timed against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timings<D: TimeDuration> {
    /// Minimum continuous active time before a press is trusted.
    pub debounce: D,

    /// Hold time after which a press counts as long.
    pub long_press: D,

    /// Window after a release in which another press is chained.
    pub multi_press: D,
}

impl<D: TimeDuration> Timings<D> {
    /// Creates timings from millisecond values.
    pub fn from_millis(debounce: u64, long_press: u64, multi_press: u64) -> Self {
        Self {
            debounce: D::from_millis(debounce),
            long_press: D::from_millis(long_press),
            multi_press: D::from_millis(multi_press),
        }
    }
}

impl<D: TimeDuration> Default for Timings<D> {
    fn default() -> Self {
        Self::from_millis(
            DEFAULT_DEBOUNCE_MS,
            DEFAULT_LONG_PRESS_MS,
            DEFAULT_MULTI_PRESS_MS,
        )
    }
}

/// Static configuration of a button, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonConfig<D: TimeDuration> {
    /// Level that means "pressed".
    pub active: Level,

    /// Input configuration requested from the pin.
    pub input_mode: InputMode,

    /// Detection windows.
    pub timings: Timings<D>,
}

impl<D: TimeDuration> ButtonConfig<D> {
    /// Active-high, floating input, default timings.
    pub fn new() -> Self {
        Self {
            active: Level::High,
            input_mode: InputMode::Floating,
            timings: Timings::default(),
        }
    }

    /// Sets the active level.
    pub fn with_active(mut self, active: Level) -> Self {
        self.active = active;
        self
    }

    /// Sets the input mode.
    pub fn with_input_mode(mut self, input_mode: InputMode) -> Self {
        self.input_mode = input_mode;
        self
    }

    /// Sets the detection windows.
    pub fn with_timings(mut self, timings: Timings<D>) -> Self {
        self.timings = timings;
        self
    }
}

impl<D: TimeDuration> Default for ButtonConfig<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Callback registration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CallbackError {
    /// The gesture has no callback slot (`None` and `NotPressed`).
    NotDispatchable(Gesture),
}

impl core::fmt::Display for CallbackError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CallbackError::NotDispatchable(gesture) => {
                write!(f, "no callback slot for gesture '{}'", gesture)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CallbackError {}
