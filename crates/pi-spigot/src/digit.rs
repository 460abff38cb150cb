use core::fmt;

use crate::Error;

/// A single decimal digit in `0..=9`.
///
/// The spigot emits digits through this type so that callers never have to
/// re-check the range of what they were handed.
///
/// # Example
/// ```
/// use pi_spigot::Digit;
///
/// let seven = Digit::new(7).unwrap();
/// assert_eq!(seven.value(), 7);
/// assert_eq!(seven.to_char(), '7');
/// assert!(Digit::new(10).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// The largest decimal digit.
    pub const MAX: Self = Self(9);

    /// The smallest decimal digit.
    pub const ZERO: Self = Self(0);

    /// Returns `Some(Digit)` if `value` is a decimal digit.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value of the digit.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The ASCII character for this digit.
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// The ASCII byte for this digit.
    pub const fn to_ascii(self) -> u8 {
        b'0' + self.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Write::write_char(f, self.to_char())
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl TryFrom<u8> for Digit {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(Error::DigitOutOfRange { value })
    }
}
