//! Exact fractions over arbitrary-precision integers.

pub mod continued_fraction;
pub mod conversion;
pub mod parse;

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Shl, Shr, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::error::{Error, Result};

/// A rational number `numer / denom`.
///
/// The value is always kept in lowest terms with a positive denominator, so two rationals
/// are equal if and only if their representations are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

/// The result of raising a rational to a rational power.
#[derive(Clone, Debug, PartialEq)]
pub enum Power {
    /// The exponent was an integer, so the result is exact.
    Exact(Rational),

    /// The exponent had a non-unit denominator and the result was computed in floating point.
    Approximate(f64),
}

impl Rational {
    /// Creates the rational `numer / denom`, reduced to lowest terms.
    ///
    /// Returns [`Error::DivisionByZero`] if `denom` is zero.
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::reduced(numer.into(), denom))
    }

    /// Reduces the given pair by its gcd and moves the sign into the numerator.
    ///
    /// `denom` must be non-zero.
    pub(crate) fn reduced(mut numer: BigInt, mut denom: BigInt) -> Self {
        debug_assert!(!denom.is_zero());
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        let gcd = numer.gcd(&denom);
        if !gcd.is_one() {
            numer /= &gcd;
            denom /= &gcd;
        }
        Self { numer, denom }
    }

    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            numer: value.into(),
            denom: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    pub fn one() -> Self {
        Self::from_integer(1)
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    /// Returns true if the denominator is 1.
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Truthiness of the value: everything but zero is true.
    pub fn to_bool(&self) -> bool {
        !self.is_zero()
    }

    pub fn abs(&self) -> Self {
        Self {
            numer: self.numer.abs(),
            denom: self.denom.clone(),
        }
    }

    /// Returns `1 / self`, or [`Error::DivisionByZero`] if `self` is zero.
    pub fn inv(&self) -> Result<Self> {
        Self::new(self.denom.clone(), self.numer.clone())
    }

    /// Returns `self / other`, or [`Error::DivisionByZero`] if `other` is zero.
    pub fn checked_div(&self, other: &Rational) -> Result<Self> {
        Self::new(&self.numer * &other.denom, &self.denom * &other.numer)
    }

    /// Raises `self` to an integer power. Negative exponents invert the value, hence they fail
    /// with [`Error::DivisionByZero`] when `self` is zero.
    pub fn powi(&self, exp: i64) -> Result<Self> {
        let magnitude = u32::try_from(exp.unsigned_abs())
            .map_err(|_| Error::InvalidInput(format!("exponent {exp} is too large")))?;
        let numer = self.numer.pow(magnitude);
        let denom = self.denom.pow(magnitude);

        match exp < 0 {
            true => Self::new(denom, numer),
            // powers of coprime values are still coprime
            false => Ok(Self { numer, denom }),
        }
    }

    /// Raises `self` to a rational power.
    ///
    /// Integer exponents give an exact [`Power::Exact`]. Any other exponent has no exact
    /// rational result in general, so the value is computed on `f64` and returned as
    /// [`Power::Approximate`].
    pub fn pow(&self, exp: &Rational) -> Result<Power> {
        if !exp.is_integer() {
            return Ok(Power::Approximate(self.to_f64().powf(exp.to_f64())));
        }
        let exp = exp
            .numer
            .to_i64()
            .ok_or_else(|| Error::InvalidInput(format!("exponent {exp} is too large")))?;
        self.powi(exp).map(Power::Exact)
    }

    /// Returns `self * 2^amount`. The amount must be a non-negative integer.
    pub fn shift_left(&self, amount: &Rational) -> Result<Self> {
        Ok(self << Self::shift_amount(amount)?)
    }

    /// Returns `self / 2^amount`. The amount must be a non-negative integer.
    pub fn shift_right(&self, amount: &Rational) -> Result<Self> {
        Ok(self >> Self::shift_amount(amount)?)
    }

    fn shift_amount(amount: &Rational) -> Result<usize> {
        if !amount.is_integer() {
            return Err(Error::InvalidInput(format!(
                "cannot shift by non-integer {amount}"
            )));
        }
        amount.numer.to_usize().ok_or_else(|| {
            Error::InvalidInput(format!("cannot shift by {amount} positions"))
        })
    }

    /// Returns the best approximation of `self` with a denominator not bigger than `max_d`.
    ///
    /// When `self` lies exactly halfway between the approximation and its neighbour with the
    /// same denominator, the smaller of the two is returned.
    ///
    /// Fails with [`Error::InvalidInput`] if `max_d` is lower than 1.
    pub fn trim(&self, max_d: &BigInt) -> Result<Self> {
        if *max_d < BigInt::one() {
            return Err(Error::InvalidInput(format!(
                "maximum denominator must be positive, got {max_d}"
            )));
        }
        Ok(self.trim_to(max_d))
    }

    /// `max_d` must be at least 1.
    pub(crate) fn trim_to(&self, max_d: &BigInt) -> Self {
        let (magnitude, denom) =
            continued_fraction::trim_magnitude(&self.numer.abs(), &self.denom, max_d);
        let numer = match self.is_negative() {
            true => -magnitude,
            false => magnitude,
        };
        let trimmed = Self::reduced(numer.clone(), denom.clone());

        let neighbour: BigInt = match *self < trimmed {
            true => &numer - 1,
            false => &numer + 1,
        };
        let midpoint = Self::reduced(&neighbour + &numer, &denom * 2);
        if *self == midpoint {
            return Self::reduced(neighbour.min(numer), denom);
        }
        trimmed
    }

    /// Returns the first convergent of the continued fraction of `self` that is closer than
    /// `err` to it, or `self` itself if no convergent before the last one is.
    pub fn approximate(&self, err: &Rational) -> Self {
        let approximation =
            continued_fraction::approximate_magnitude(&self.numer.abs(), &self.denom, err);
        match self.is_negative() {
            true => -approximation,
            false => approximation,
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // denominators are positive, so cross-multiplying keeps the order
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a> Add<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn add(self, other: &'a Rational) -> Rational {
        Rational::reduced(
            &self.numer * &other.denom + &other.numer * &self.denom,
            &self.denom * &other.denom,
        )
    }
}

impl<'a> Sub<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn sub(self, other: &'a Rational) -> Rational {
        Rational::reduced(
            &self.numer * &other.denom - &other.numer * &self.denom,
            &self.denom * &other.denom,
        )
    }
}

impl<'a> Mul<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn mul(self, other: &'a Rational) -> Rational {
        Rational::reduced(&self.numer * &other.numer, &self.denom * &other.denom)
    }
}

/// Forwards the owned and mixed variants of a binary operator to the by-reference one.
macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Rational> for Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, other: Rational) -> Rational {
                (&self).$method(&other)
            }
        }

        impl<'a> $imp<&'a Rational> for Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, other: &'a Rational) -> Rational {
                (&self).$method(other)
            }
        }

        impl<'a> $imp<Rational> for &'a Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, other: Rational) -> Rational {
                self.$method(&other)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numer: -&self.numer,
            denom: self.denom.clone(),
        }
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl Shl<usize> for &Rational {
    type Output = Rational;

    fn shl(self, bits: usize) -> Rational {
        Rational::reduced(&self.numer << bits, self.denom.clone())
    }
}

impl Shl<usize> for Rational {
    type Output = Rational;

    fn shl(self, bits: usize) -> Rational {
        &self << bits
    }
}

impl Shr<usize> for &Rational {
    type Output = Rational;

    fn shr(self, bits: usize) -> Rational {
        Rational::reduced(self.numer.clone(), &self.denom << bits)
    }
}

impl Shr<usize> for Rational {
    type Output = Rational;

    fn shr(self, bits: usize) -> Rational {
        &self >> bits
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.is_integer() {
            true => write!(f, "{}", self.numer),
            false => write!(f, "{}/{}", self.numer, self.denom),
        }
    }
}

impl fmt::LowerHex for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}/{:#x}", self.numer, self.denom)
    }
}

impl fmt::Octal for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#o}/{:#o}", self.numer, self.denom)
    }
}
