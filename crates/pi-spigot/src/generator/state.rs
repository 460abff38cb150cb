use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use crate::Digit;

/// The accumulator tuple `(q, r, t, k, m, x)` threaded through the spigot.
///
/// Every component is an unbounded signed integer. `q`, `r` and `t` grow
/// without limit as digits are produced and `r` is routinely negative, so
/// fixed-width integers (or floats) silently produce wrong digits after a
/// handful of iterations. Division is always floor division.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Accumulator {
    pub(crate) q: BigInt,
    pub(crate) r: BigInt,
    pub(crate) t: BigInt,
    pub(crate) k: BigInt,
    pub(crate) m: BigInt,
    pub(crate) x: BigInt,
}

impl Accumulator {
    /// Seed state: `q=1, r=0, t=1, k=1, m=3, x=3`.
    pub(crate) fn seed() -> Self {
        Self {
            q: BigInt::one(),
            r: BigInt::zero(),
            t: BigInt::one(),
            k: BigInt::one(),
            m: BigInt::from(3u8),
            x: BigInt::from(3u8),
        }
    }

    /// Whether `m` is a confirmed digit, i.e. `4q + r - t < m*t`.
    pub(crate) fn is_settled(&self) -> bool {
        let bound = &self.q * 4u32 + &self.r - &self.t;
        bound < &self.m * &self.t
    }

    /// Takes the confirmed digit `m` and rescales the state by ten.
    ///
    /// Only valid when [`Self::is_settled`] holds. All right-hand sides read
    /// the state as it was before this call.
    pub(crate) fn emit(&mut self) -> Digit {
        let digit = self
            .m
            .to_u8()
            .and_then(Digit::new)
            .unwrap_or_else(|| unreachable!("settled spigot digit out of range: {}", self.m));

        let m = ((&self.q * 3u32 + &self.r) * 10u32).div_floor(&self.t) - &self.m * 10u32;
        self.r = (&self.r - &self.m * &self.t) * 10u32;
        self.q *= 10u32;
        self.m = m;

        digit
    }

    /// Folds the next continued-fraction term into the state without
    /// emitting.
    ///
    /// All right-hand sides read the state as it was before this call.
    pub(crate) fn refine(&mut self) {
        let tx = &self.t * &self.x;
        let m = (&self.q * (&self.k * 7u32 + 2u32) + &self.r * &self.x).div_floor(&tx);
        let r = (&self.q * 2u32 + &self.r) * &self.x;

        self.q *= &self.k;
        self.r = r;
        self.t = tx;
        self.k += 1u32;
        self.m = m;
        self.x += 2u32;
    }
}
