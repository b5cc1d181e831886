//! Unified error type for the flashlight applet.
//!
//! We avoid `alloc` - all error variants carry no data.
//! Only setup can fail; everything after that is infallible.

use core::fmt;

/// Exit status of a normal run (Back pressed).
pub const EXIT_OK: i32 = 0;

/// Exit status when setup could not allocate its primitives.
pub const EXIT_SETUP_FAILED: i32 = 255;

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The state mutex could not be created (its static slot is taken).
    StateMutex,

    /// The input event queue could not be created.
    EventQueue,
}

impl Error {
    /// Process exit status reported for this error.
    pub fn exit_code(self) -> i32 {
        match self {
            Error::StateMutex | Error::EventQueue => EXIT_SETUP_FAILED,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::StateMutex => f.write_str("cannot create mutex"),
            Error::EventQueue => f.write_str("cannot create event queue"),
        }
    }
}

/// Map the outcome of a run to its exit status.
pub fn exit_status(result: Result<(), Error>) -> i32 {
    match result {
        Ok(()) => EXIT_OK,
        Err(e) => e.exit_code(),
    }
}
