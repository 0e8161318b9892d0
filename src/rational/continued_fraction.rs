//! Best rational approximations through continued-fraction expansions.
//!
//! Both services expand `n / d` with the Euclidean algorithm and accumulate the convergents
//! `p_k / q_k`, where `p_k = a_k * p_{k-1} + p_{k-2}` (and the same for `q_k`) and `a_k` is
//! the k-th quotient of the expansion.

use std::mem;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{Error, Result};
use crate::rational::Rational;

/// The rolling state of a continued-fraction expansion: the remainders of the Euclidean
/// algorithm and the last two convergents.
struct Convergents {
    n: BigInt,
    d: BigInt,
    previous: (BigInt, BigInt),
    current: (BigInt, BigInt),
}

impl Convergents {
    fn new(n: &BigInt, d: &BigInt) -> Self {
        Self {
            n: n.clone(),
            d: d.clone(),
            previous: (BigInt::zero(), BigInt::one()),
            current: (BigInt::one(), BigInt::zero()),
        }
    }

    /// True once the remainder reached zero, i.e. the current convergent is the exact value.
    fn is_exhausted(&self) -> bool {
        self.d.is_zero()
    }

    fn next_quotient(&self) -> BigInt {
        &self.n / &self.d
    }

    /// The denominator the next convergent would have with the given quotient.
    fn next_denominator(&self, quotient: &BigInt) -> BigInt {
        &self.previous.1 + quotient * &self.current.1
    }

    fn advance(&mut self, quotient: &BigInt) {
        let remainder = &self.n - quotient * &self.d;
        self.n = mem::replace(&mut self.d, remainder);

        let next = (
            &self.previous.0 + quotient * &self.current.0,
            &self.previous.1 + quotient * &self.current.1,
        );
        self.previous = mem::replace(&mut self.current, next);
    }

    /// Moves to the next convergent and returns it.
    fn step(&mut self) -> Rational {
        let quotient = self.next_quotient();
        self.advance(&quotient);
        Rational::reduced(self.current.0.clone(), self.current.1.clone())
    }
}

/// Returns the best approximation `(n', d')` of `n / d` such that `0 < d' <= max_d`.
///
/// Negative inputs are handled on their magnitude and the sign is put back on `n'`.
///
/// # Errors
/// [`Error::DivisionByZero`] if `d` is zero, [`Error::InvalidInput`] if `max_d` is lower than 1.
pub fn trim(n: &BigInt, d: &BigInt, max_d: &BigInt) -> Result<(BigInt, BigInt)> {
    if d.is_zero() {
        return Err(Error::DivisionByZero);
    }
    if *max_d < BigInt::one() {
        return Err(Error::InvalidInput(format!(
            "maximum denominator must be positive, got {max_d}"
        )));
    }

    let (numer, denom) = trim_magnitude(&n.abs(), &d.abs(), max_d);
    match n.is_negative() != d.is_negative() {
        true => Ok((-numer, denom)),
        false => Ok((numer, denom)),
    }
}

/// Same as [`trim`] on non-negative `n`, positive `d` and `max_d`.
///
/// The expansion stops at the last convergent whose denominator fits `max_d`. The result is
/// either that convergent or the semiconvergent built from the two last convergents with the
/// biggest multiplier `max_d` allows, whichever is closer to `n / d`. On ties, the convergent
/// is kept.
pub(crate) fn trim_magnitude(n: &BigInt, d: &BigInt, max_d: &BigInt) -> (BigInt, BigInt) {
    if d <= max_d {
        let gcd = n.gcd(d);
        return (n / &gcd, d / &gcd);
    }

    let mut convergents = Convergents::new(n, d);
    while !convergents.is_exhausted() {
        let quotient = convergents.next_quotient();
        if convergents.next_denominator(&quotient) > *max_d {
            break;
        }
        convergents.advance(&quotient);
    }

    let Convergents {
        previous, current, ..
    } = convergents;

    // the first convergent always has denominator 1, so current.1 is positive here
    let multiplier = (max_d - &previous.1) / &current.1;
    let semiconvergent = (
        &previous.0 + &multiplier * &current.0,
        &previous.1 + &multiplier * &current.1,
    );

    let target = Rational::reduced(n.clone(), d.clone());
    let semiconvergent_error =
        (Rational::reduced(semiconvergent.0.clone(), semiconvergent.1.clone()) - &target).abs();
    let convergent_error =
        (Rational::reduced(current.0.clone(), current.1.clone()) - &target).abs();

    match semiconvergent_error < convergent_error {
        true => semiconvergent,
        false => current,
    }
}

/// Returns the first convergent of `n / d` whose distance from `n / d` is lower than `err`,
/// or `n / d` itself when the expansion ends before that.
///
/// # Errors
/// [`Error::DivisionByZero`] if `d` is zero.
pub fn approximate(n: &BigInt, d: &BigInt, err: &Rational) -> Result<Rational> {
    if d.is_zero() {
        return Err(Error::DivisionByZero);
    }

    let approximation = approximate_magnitude(&n.abs(), &d.abs(), err);
    match n.is_negative() != d.is_negative() {
        true => Ok(-approximation),
        false => Ok(approximation),
    }
}

/// Same as [`approximate`] on non-negative `n` and positive `d`.
pub(crate) fn approximate_magnitude(n: &BigInt, d: &BigInt, err: &Rational) -> Rational {
    let target = Rational::reduced(n.clone(), d.clone());
    let mut convergents = Convergents::new(n, d);

    let mut approximation = convergents.step();
    while !convergents.is_exhausted() && (&approximation - &target).abs() >= *err {
        approximation = convergents.step();
    }
    approximation
}
