//! Parsing of textual numbers and the tagged [`rational`] constructor.
//!
//! Supported literals, checked in this order:
//! - `numerator/denominator`, where both sides are literals themselves,
//! - `mantissa e exponent`, e.g. `1.25e-3`, with an integer exponent of at most
//!   [`MAX_EXPONENT`] in magnitude,
//! - `[-]digits.digits`,
//! - `[-]digits`.

use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};

use crate::error::{Error, Result};
use crate::rational::Rational;

/// The biggest decimal exponent, in magnitude, a literal may carry.
pub const MAX_EXPONENT: i64 = 100_000;

/// Parses a literal into an exact rational.
///
/// # Examples
/// ```
/// use exact_arith_coder::{parse, Rational};
///
/// assert_eq!(parse("3/4").unwrap(), Rational::new(3, 4).unwrap());
/// assert_eq!(parse("0.75").unwrap(), Rational::new(3, 4).unwrap());
/// assert_eq!(parse("3e-1").unwrap(), Rational::new(3, 10).unwrap());
/// ```
pub fn parse(literal: &str) -> Result<Rational> {
    parse_part(literal, literal)
}

/// Parses `text`, a piece of `literal`. The whole literal is only used to report errors.
fn parse_part(text: &str, literal: &str) -> Result<Rational> {
    let text = text.trim();

    if let Some((numer, denom)) = text.split_once('/') {
        return parse_part(numer, literal)?.checked_div(&parse_part(denom, literal)?);
    }

    if let Some((mantissa, exponent)) = text.split_once('e') {
        let mantissa = parse_part(mantissa, literal)?;
        let exponent = parse_integer(exponent, literal)?;
        let exponent = exponent
            .to_i64()
            .filter(|_| exponent.abs() <= BigInt::from(MAX_EXPONENT))
            .ok_or_else(|| parse_error(literal, "exponent out of range"))?;
        return Ok(mantissa * Rational::from_integer(10).powi(exponent)?);
    }

    if let Some((integral, fractional)) = text.split_once('.') {
        let (negative, integral) = split_sign(integral.trim());
        let integral = parse_digits(integral, literal)?;

        let fractional = fractional.trim();
        let scale = u32::try_from(fractional.len())
            .map_err(|_| parse_error(literal, "too many fractional digits"))?;
        let fractional = Rational::reduced(
            parse_digits(fractional, literal)?,
            BigInt::from(10).pow(scale),
        );

        let value = Rational::from_integer(integral) + fractional;
        return Ok(if negative { -value } else { value });
    }

    parse_integer(text, literal).map(Rational::from_integer)
}

fn parse_integer(text: &str, literal: &str) -> Result<BigInt> {
    let (negative, digits) = split_sign(text.trim());
    let magnitude = parse_digits(digits, literal)?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Splits an optional leading sign from `text`, returning true if it was a minus.
fn split_sign(text: &str) -> (bool, &str) {
    match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    }
}

fn parse_digits(digits: &str, literal: &str) -> Result<BigInt> {
    if digits.is_empty() {
        return Err(parse_error(literal, "expected digits"));
    }
    if let Some(unexpected) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(parse_error(
            literal,
            &format!("unexpected character {unexpected:?}"),
        ));
    }
    BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(|| parse_error(literal, "invalid digits"))
}

fn parse_error(literal: &str, reason: &str) -> Error {
    Error::Parse {
        literal: literal.to_owned(),
        reason: reason.to_owned(),
    }
}

impl FromStr for Rational {
    type Err = Error;

    fn from_str(literal: &str) -> Result<Self> {
        parse(literal)
    }
}

/// A value that can be turned into a [`Rational`] by [`rational`].
#[derive(Clone, Debug, PartialEq)]
pub enum RationalArg<'a> {
    Integer(BigInt),
    /// Converted exactly, see [`Rational::try_from`].
    Float(f64),
    /// Parsed with [`parse`].
    Literal(&'a str),
    Rational(Rational),
    /// Always rejected: complex numbers have no rational counterpart.
    Complex { re: f64, im: f64 },
}

impl RationalArg<'_> {
    fn into_rational(self) -> Result<Rational> {
        match self {
            RationalArg::Integer(value) => Ok(Rational::from_integer(value)),
            RationalArg::Float(value) => Rational::try_from(value),
            RationalArg::Literal(literal) => parse(literal),
            RationalArg::Rational(value) => Ok(value),
            RationalArg::Complex { .. } => Err(Error::IncompatibleType(
                "cannot convert a complex number to a rational",
            )),
        }
    }

    fn is_complex(&self) -> bool {
        matches!(self, RationalArg::Complex { .. })
    }
}

macro_rules! arg_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RationalArg<'_> {
                fn from(value: $t) -> Self {
                    RationalArg::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

arg_from_integer!(i32, i64, u32, u64, usize);

impl From<BigInt> for RationalArg<'_> {
    fn from(value: BigInt) -> Self {
        RationalArg::Integer(value)
    }
}

impl From<f64> for RationalArg<'_> {
    fn from(value: f64) -> Self {
        RationalArg::Float(value)
    }
}

impl<'a> From<&'a str> for RationalArg<'a> {
    fn from(literal: &'a str) -> Self {
        RationalArg::Literal(literal)
    }
}

impl From<Rational> for RationalArg<'_> {
    fn from(value: Rational) -> Self {
        RationalArg::Rational(value)
    }
}

/// Builds the rational `numer / denom` out of any pair of supported arguments.
///
/// Use `1` as `denom` to convert a single value.
///
/// # Errors
/// [`Error::IncompatibleType`] if any argument is complex, otherwise any error raised while
/// converting the arguments or [`Error::DivisionByZero`] if `denom` is zero.
///
/// # Examples
/// ```
/// use exact_arith_coder::{rational, Rational};
///
/// assert_eq!(rational("1.5", 3).unwrap(), Rational::new(1, 2).unwrap());
/// assert_eq!(rational(0.25, "1/2").unwrap(), Rational::new(1, 2).unwrap());
/// ```
pub fn rational<'a>(
    numer: impl Into<RationalArg<'a>>,
    denom: impl Into<RationalArg<'a>>,
) -> Result<Rational> {
    let (numer, denom) = (numer.into(), denom.into());
    if numer.is_complex() || denom.is_complex() {
        return Err(Error::IncompatibleType("cannot convert arguments"));
    }
    numer.into_rational()?.checked_div(&denom.into_rational()?)
}
