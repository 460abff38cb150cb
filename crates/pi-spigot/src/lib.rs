//! # pi-spigot
//!
//! A streaming spigot generator for the decimal digits of pi.
//!
//! [`PiSpigot`] produces one digit per request, left to right, without ever
//! revisiting an earlier digit. Internally it refines a continued-fraction
//! approximation held in unbounded integers ([`num_bigint::BigInt`]); the
//! state grows with every digit, which is why bounded-width integers or
//! floating point are not an option.
//!
//! ```
//! use pi_spigot::PiSpigot;
//!
//! let mut spigot = PiSpigot::new();
//! let digits: Vec<u8> = (0..5).map(|_| spigot.next_digit().value()).collect();
//! assert_eq!(digits, [3, 1, 4, 1, 5]);
//! ```
//!
//! [`DecimalExpansion`] and [`pi_digits`] turn a digit stream into the
//! familiar `3.14159...` text.
//!
//! ## Features
//!
//! - `tracing`: emit spans and events via the `tracing` crate.

mod digit;
mod error;
mod expansion;
mod generator;

pub use crate::digit::*;
pub use crate::error::*;
pub use crate::expansion::*;
pub use crate::generator::*;
