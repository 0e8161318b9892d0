use num_bigint::BigInt;
use num_traits::{One, ToPrimitive};

use crate::error::{Error, Result};
use crate::rational::Rational;

/// Denominators above this bound are trimmed before converting to `f64`, so that the
/// conversion never divides by an infinite denominator.
const MAX_FLOAT_DENOMINATOR_BITS: usize = 1023;

/// Bits of the explicit mantissa of an `f64`.
const MANTISSA_BITS: u32 = 52;

/// Exponent applied to subnormal mantissas (and, with the bias, to normal ones).
const EXPONENT_OFFSET: i64 = 1075;

/// Significant bits kept in the integer quotient when numerator or denominator overflow `f64`.
const QUOTIENT_BITS: i64 = 64;

/// Bound on the binary exponent put back on a scaled quotient, well past the range of `f64`.
const MAX_SCALE_EXPONENT: i64 = 2200;

macro_rules! rational_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rational {
                fn from(value: $t) -> Self {
                    Rational::from_integer(value)
                }
            }
        )*
    };
}

rational_from_integer!(i32, i64, u32, u64, usize, BigInt);

impl TryFrom<f64> for Rational {
    type Error = Error;

    /// Converts a float into the rational it exactly represents, that is `mantissa * 2^exponent`.
    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::InvalidInput(format!(
                "cannot convert {value} to a rational"
            )));
        }

        let bits = value.to_bits();
        let biased_exponent = ((bits >> MANTISSA_BITS) & 0x7ff) as i64;
        let fraction = bits & ((1 << MANTISSA_BITS) - 1);

        let (mantissa, exponent) = match biased_exponent {
            0 => (fraction, 1 - EXPONENT_OFFSET),
            _ => (fraction | (1 << MANTISSA_BITS), biased_exponent - EXPONENT_OFFSET),
        };

        let mut numer = BigInt::from(mantissa);
        if value.is_sign_negative() {
            numer = -numer;
        }

        match exponent >= 0 {
            true => Ok(Rational::from_integer(numer << exponent as usize)),
            false => Ok(Rational::reduced(
                numer,
                BigInt::one() << exponent.unsigned_abs() as usize,
            )),
        }
    }
}

impl Rational {
    /// Converts to the closest `f64`.
    ///
    /// Values whose denominator doesn't fit an `f64` are trimmed to a denominator of at most
    /// `2^1023` first. Numerators that alone overflow an `f64` don't matter as long as the
    /// quotient fits. Values too big in magnitude become infinite.
    pub fn to_f64(&self) -> f64 {
        let bound = BigInt::one() << MAX_FLOAT_DENOMINATOR_BITS;
        if self.denom > bound {
            return self.trim_to(&bound).ratio_to_f64();
        }
        self.ratio_to_f64()
    }

    fn ratio_to_f64(&self) -> f64 {
        if let (Some(numer), Some(denom)) = (self.numer.to_f64(), self.denom.to_f64()) {
            if numer.is_finite() && denom.is_finite() {
                return numer / denom;
            }
        }

        // numer / denom = quotient * 2^exponent, with a quotient of QUOTIENT_BITS bits
        let exponent = self.numer.bits() as i64 - self.denom.bits() as i64 - QUOTIENT_BITS;
        let quotient = match exponent >= 0 {
            true => &self.numer / (&self.denom << exponent as usize),
            false => (&self.numer << exponent.unsigned_abs() as usize) / &self.denom,
        };
        let quotient = quotient.to_f64().unwrap_or(f64::NAN);

        // applied in two halves, as 2^exponent alone may not be representable
        let exponent = exponent.clamp(-MAX_SCALE_EXPONENT, MAX_SCALE_EXPONENT) as i32;
        quotient * 2_f64.powi(exponent / 2) * 2_f64.powi(exponent - exponent / 2)
    }

    /// Returns the value as an integer, or [`Error::InvalidInput`] if the denominator isn't 1.
    pub fn to_integer(&self) -> Result<BigInt> {
        match self.is_integer() {
            true => Ok(self.numer.clone()),
            false => Err(Error::InvalidInput(format!(
                "cannot convert non-integer {self} to an integer"
            ))),
        }
    }
}
