/// A result type that is infallible by default.
///
/// Digit generation never fails, so generator APIs use the default
/// [`core::convert::Infallible`] error. Formatting and writing an expansion
/// can fail and use [`Error`] explicitly.
pub type Result<T, E = core::convert::Infallible> = core::result::Result<T, E>;

/// All error variants that `pi-spigot` can emit.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An expansion was requested with zero digits.
    ///
    /// There is no first digit to place before the decimal point, so the
    /// request has no textual form.
    #[error("an expansion needs at least one digit")]
    EmptyExpansion,

    /// A value outside `0..=9` was offered as a decimal digit.
    #[error("{value} is not a decimal digit")]
    DigitOutOfRange { value: u8 },

    /// Writing the expansion to its sink failed.
    #[error("failed to write expansion: {0}")]
    Io(#[from] std::io::Error),
}
