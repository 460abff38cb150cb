use core::fmt;

use crate::{Digit, Result, generator::SpigotStatus};

/// A minimal interface for digit stream generators.
///
/// Implementors produce an infinite, forward-only sequence: every emitted
/// digit is handed out exactly once and there is no way to rewind.
pub trait DigitGenerator {
    /// The error type returned by [`DigitGenerator::try_next_digit`].
    type Err: fmt::Debug;

    /// Creates a new generator at its seed state.
    fn new() -> Self;

    /// Returns the next digit of the sequence.
    ///
    /// This is the infallible counterpart to
    /// [`DigitGenerator::try_next_digit`]. It runs as many internal
    /// iterations as needed and returns after exactly one emission.
    fn next_digit(&mut self) -> Digit
    where
        Self::Err: Into<core::convert::Infallible>,
    {
        match self.try_next_digit() {
            Ok(digit) => digit,
            Err(e) => {
                #[allow(unreachable_code)]
                // `into()` satisfies the trait bound at compile time.
                match e.into() {}
            }
        }
    }

    /// Returns the next digit of the sequence with fallible error handling.
    ///
    /// # Errors
    ///
    /// Implementations backed by exact arithmetic never fail; the error type
    /// exists so that fallible sources can share the interface.
    fn try_next_digit(&mut self) -> Result<Digit, Self::Err>;

    /// Runs exactly one internal iteration.
    ///
    /// This is the infallible counterpart to
    /// [`DigitGenerator::try_poll_digit`].
    fn poll_digit(&mut self) -> SpigotStatus
    where
        Self::Err: Into<core::convert::Infallible>,
    {
        match self.try_poll_digit() {
            Ok(status) => status,
            Err(e) => {
                #[allow(unreachable_code)]
                // `into()` satisfies the trait bound at compile time.
                match e.into() {}
            }
        }
    }

    /// Runs exactly one internal iteration with fallible error handling.
    ///
    /// # Errors
    ///
    /// See [`DigitGenerator::try_next_digit`].
    fn try_poll_digit(&mut self) -> Result<SpigotStatus, Self::Err>;
}
