//! Logging macros forwarding to `defmt` or `log`, whichever feature is enabled.
//!
//! With neither feature enabled the macros only borrow their arguments, so log
//! sites compile away without unused-variable warnings.

#![allow(unused_macros)]

#[cfg(all(feature = "log", feature = "defmt"))]
compile_error!("features `log` and `defmt` are mutually exclusive");

#[cfg(feature = "defmt")]
macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            ::defmt::trace!($s $(, $x)*);
        }
    };
}

#[cfg(feature = "defmt")]
macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            ::defmt::debug!($s $(, $x)*);
        }
    };
}

#[cfg(feature = "defmt")]
macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            ::defmt::warn!($s $(, $x)*);
        }
    };
}

#[cfg(feature = "log")]
macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            ::log::trace!($s $(, $x)*);
        }
    };
}

#[cfg(feature = "log")]
macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            ::log::debug!($s $(, $x)*);
        }
    };
}

#[cfg(feature = "log")]
macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            ::log::warn!($s $(, $x)*);
        }
    };
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            let _ = ($( & $x ),*);
        }
    };
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            let _ = ($( & $x ),*);
        }
    };
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            let _ = ($( & $x ),*);
        }
    };
}
