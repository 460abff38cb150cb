use crate::Digit;

/// Outcome of a single internal iteration of the spigot.
///
/// This type models the result of `DigitGenerator::poll_digit()`:
///
/// - [`SpigotStatus::Ready`] means the iteration confirmed and emitted a
///   digit.
/// - [`SpigotStatus::Pending`] means the iteration only refined the
///   approximation. Polling again will eventually produce a digit.
///
/// # Example
///
/// ```
/// use pi_spigot::{PiSpigot, SpigotStatus};
///
/// let mut spigot = PiSpigot::new();
/// let first = loop {
///     match spigot.poll_digit() {
///         SpigotStatus::Ready { digit } => break digit,
///         SpigotStatus::Pending => continue,
///     }
/// };
/// assert_eq!(first.value(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpigotStatus {
    /// A digit was confirmed and emitted.
    Ready {
        /// The emitted digit.
        digit: Digit,
    },
    /// The approximation was refined; no digit is confirmed yet.
    Pending,
}

impl SpigotStatus {
    /// Returns the emitted digit, if any.
    pub const fn digit(self) -> Option<Digit> {
        match self {
            Self::Ready { digit } => Some(digit),
            Self::Pending => None,
        }
    }

    /// Whether the iteration emitted a digit.
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}
