use core::num::NonZeroUsize;
use std::io;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{DigitGenerator, Error, PiSpigot};

/// A fixed-length decimal rendering of a digit stream: the first digit, a
/// literal `.`, then the remaining digits.
///
/// The output has no trailing newline and no other formatting. A single
/// digit renders as `"3."`.
///
/// # Example
/// ```
/// use pi_spigot::{DecimalExpansion, PiSpigot};
///
/// let expansion = DecimalExpansion::new(6).unwrap();
/// assert_eq!(expansion.render(&mut PiSpigot::new()), "3.14159");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecimalExpansion {
    count: NonZeroUsize,
}

impl DecimalExpansion {
    /// Creates an expansion of `count` digits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyExpansion`] if `count` is zero.
    pub fn new(count: usize) -> Result<Self, Error> {
        NonZeroUsize::new(count)
            .map(|count| Self { count })
            .ok_or(Error::EmptyExpansion)
    }

    /// Number of digits pulled from the generator.
    pub const fn count(&self) -> usize {
        self.count.get()
    }

    /// Length in bytes of the rendered text: every digit plus the point.
    pub const fn rendered_len(&self) -> usize {
        self.count.get() + 1
    }

    /// Pulls [`Self::count`] digits from `generator` and renders them.
    pub fn render<G>(&self, generator: &mut G) -> String
    where
        G: DigitGenerator,
        G::Err: Into<core::convert::Infallible>,
    {
        let mut out = String::with_capacity(self.rendered_len());
        out.push(generator.next_digit().to_char());
        out.push('.');
        for _ in 1..self.count.get() {
            out.push(generator.next_digit().to_char());
        }
        out
    }

    /// Pulls [`Self::count`] digits from `generator` and streams the rendered
    /// text into `writer`, returning the number of bytes written.
    ///
    /// Each digit is written as it is produced, so unbuffered sinks should be
    /// wrapped in an [`io::BufWriter`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the writer fails.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(self, generator, writer), fields(count = self.count.get())))]
    pub fn write_to<G, W>(&self, generator: &mut G, mut writer: W) -> Result<usize, Error>
    where
        G: DigitGenerator,
        G::Err: Into<core::convert::Infallible>,
        W: io::Write,
    {
        let first = generator.next_digit();
        writer.write_all(&[first.to_ascii(), b'.'])?;
        for _ in 1..self.count.get() {
            writer.write_all(&[generator.next_digit().to_ascii()])?;
        }
        writer.flush()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(bytes = self.rendered_len(), "expansion written");
        Ok(self.rendered_len())
    }
}

/// Renders the first `count` digits of pi as `3.1415...`.
///
/// # Errors
///
/// Returns [`Error::EmptyExpansion`] if `count` is zero.
///
/// # Example
/// ```
/// // 24 digits plus the point
/// assert_eq!(pi_spigot::pi_digits(24).unwrap(), "3.14159265358979323846264");
/// ```
pub fn pi_digits(count: usize) -> Result<String, Error> {
    let expansion = DecimalExpansion::new(count)?;
    Ok(expansion.render(&mut PiSpigot::new()))
}
