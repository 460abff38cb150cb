use core::iter::FusedIterator;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Digit, Result,
    generator::{DigitGenerator, SpigotStatus, state::Accumulator},
};

/// A streaming generator for the decimal digits of pi.
///
/// Implements the Gibbons/Rabinowitz-style spigot: an accumulator tuple of
/// unbounded integers is refined term by term until the next digit is
/// certain, at which point the digit is emitted and the state rescaled. The
/// sequence is infinite, lazy and forward-only; callers decide when to stop.
///
/// All arithmetic is exact [`num_bigint::BigInt`] arithmetic. Memory use
/// grows with the number of digits produced.
///
/// ## Features
/// - ❌ Not restartable: create a fresh generator to start over
/// - ✅ Deterministic: independent generators yield identical sequences
/// - ✅ Usable as an [`Iterator`] (never returns `None`)
///
/// # Example
/// ```
/// use pi_spigot::PiSpigot;
///
/// let digits: String = PiSpigot::new().take(6).map(|d| d.to_char()).collect();
/// assert_eq!(digits, "314159");
/// ```
#[derive(Debug)]
pub struct PiSpigot {
    state: Accumulator,
    emitted: u64,
    refinements: u64,
}

impl PiSpigot {
    /// Creates a new generator at the seed state. The first digit it returns
    /// is `3`.
    pub fn new() -> Self {
        Self {
            state: Accumulator::seed(),
            emitted: 0,
            refinements: 0,
        }
    }

    /// Number of digits emitted so far.
    pub const fn digits_emitted(&self) -> u64 {
        self.emitted
    }

    /// Number of non-emitting refinement iterations run so far.
    pub const fn refinements(&self) -> u64 {
        self.refinements
    }

    /// Returns the next digit of pi.
    ///
    /// # Example
    /// ```
    /// use pi_spigot::PiSpigot;
    ///
    /// let mut spigot = PiSpigot::new();
    /// assert_eq!(spigot.next_digit().value(), 3);
    /// assert_eq!(spigot.next_digit().value(), 1);
    /// assert_eq!(spigot.next_digit().value(), 4);
    /// ```
    pub fn next_digit(&mut self) -> Digit {
        match self.try_next_digit() {
            Ok(digit) => digit,
            Err(e) =>
            {
                #[allow(unreachable_code)]
                match e {}
            }
        }
    }

    /// Returns the next digit of pi.
    ///
    /// # Errors
    ///
    /// This method is infallible for this generator. Use the
    /// [`Self::next_digit`] method instead.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self), fields(emitted = self.emitted)))]
    pub fn try_next_digit(&mut self) -> Result<Digit> {
        loop {
            if let SpigotStatus::Ready { digit } = self.try_poll_digit()? {
                break Ok(digit);
            }
        }
    }

    /// Runs one internal iteration, emitting a digit if one is confirmed.
    pub fn poll_digit(&mut self) -> SpigotStatus {
        match self.try_poll_digit() {
            Ok(status) => status,
            Err(e) =>
            {
                #[allow(unreachable_code)]
                match e {}
            }
        }
    }

    /// A fallible version of [`Self::poll_digit`] that returns a [`Result`].
    ///
    /// # Returns
    /// - `Ok(SpigotStatus::Ready { digit })`: the iteration emitted a digit
    /// - `Ok(SpigotStatus::Pending)`: the iteration only refined the state
    ///
    /// # Errors
    ///
    /// This method is infallible for this generator. Use the
    /// [`Self::poll_digit`] method instead.
    pub fn try_poll_digit(&mut self) -> Result<SpigotStatus> {
        if self.state.is_settled() {
            let digit = self.state.emit();
            self.emitted += 1;
            Ok(SpigotStatus::Ready { digit })
        } else {
            self.state.refine();
            self.refinements += 1;
            Ok(SpigotStatus::Pending)
        }
    }
}

impl Default for PiSpigot {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGenerator for PiSpigot {
    type Err = core::convert::Infallible;

    fn new() -> Self {
        Self::new()
    }

    fn next_digit(&mut self) -> Digit {
        self.next_digit()
    }

    fn try_next_digit(&mut self) -> Result<Digit, Self::Err> {
        self.try_next_digit()
    }

    fn poll_digit(&mut self) -> SpigotStatus {
        self.poll_digit()
    }

    fn try_poll_digit(&mut self) -> Result<SpigotStatus, Self::Err> {
        self.try_poll_digit()
    }
}

impl Iterator for PiSpigot {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_digit())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for PiSpigot {}
