use log::debug;

use crate::arith::ProbabilityTable;
use crate::error::{Error, Result};
use crate::rational::Rational;
use crate::{Symbol, TERMINATOR};

/// An order-0 arithmetic coder over exact rationals.
///
/// The coder narrows the interval `[min, max)` once per symbol and, when finished, tells how
/// many binary digits are needed to pick a number inside the final interval. No bitstream is
/// produced: the coder only estimates the size of the encoded sequence.
#[derive(Clone, Debug)]
pub struct ArithmeticEncoder<'a> {
    table: &'a ProbabilityTable,

    /// The lower bound of the current interval.
    min: Rational,

    /// The upper bound of the current interval.
    max: Rational,

    /// How many symbols have been encoded so far.
    encoded: usize,
}

impl<'a> ArithmeticEncoder<'a> {
    pub fn new(table: &'a ProbabilityTable) -> Self {
        Self {
            table,
            min: Rational::zero(),
            max: Rational::one(),
            encoded: 0,
        }
    }

    /// Narrows the current interval to the sub-interval assigned to `symbol`.
    ///
    /// Fails with [`UnknownSymbol`](crate::Error::UnknownSymbol) if the table doesn't contain
    /// `symbol`, in which case the state of the encoder is left untouched.
    pub fn encode(&mut self, symbol: Symbol) -> Result<()> {
        let interval = self.table.interval(symbol)?;

        let delta = &self.max - &self.min;
        self.max = &self.min + &(&interval.upper * &delta);
        self.min = &self.min + &(&interval.lower * &delta);
        self.encoded += 1;

        Ok(())
    }

    /// Encodes every symbol of `text`.
    ///
    /// All symbols are looked up before narrowing: if any of them is unknown the call fails
    /// with [`UnknownSymbol`](crate::Error::UnknownSymbol) and nothing is encoded.
    pub fn encode_all(&mut self, text: &str) -> Result<()> {
        if let Some(unknown) = text.chars().find(|symbol| !self.table.contains(*symbol)) {
            return Err(Error::UnknownSymbol(unknown));
        }
        text.chars().try_for_each(|symbol| self.encode(symbol))
    }

    /// The current interval.
    pub fn bounds(&self) -> (&Rational, &Rational) {
        (&self.min, &self.max)
    }

    pub fn encoded(&self) -> usize {
        self.encoded
    }

    /// Encodes the terminator and returns the minimum number of bits needed to identify the
    /// final interval.
    ///
    /// Half of the interval width is doubled until it reaches 1: the number of doublings is the
    /// number of binary digits needed to resolve a value inside the interval. An interval that
    /// is still `[0, 1)` needs no bits at all.
    pub fn finish(mut self) -> Result<usize> {
        self.encode(TERMINATOR)?;

        let width = &self.max - &self.min;
        if width >= Rational::one() {
            debug!("Encoded {} symbols with certainty, no bits needed", self.encoded);
            return Ok(0);
        }

        // doubling delta until it reaches 1 only shifts its numerator, no need to reduce
        let delta = &width >> 1;
        let (mut numer, denom) = (delta.numer().clone(), delta.denom());
        let mut bits = 0;
        while numer < *denom {
            bits += 1;
            numer <<= 1;
        }

        debug!(
            "Encoded {} symbols into an interval of width {:.3e}: {} bits",
            self.encoded,
            width.to_f64(),
            bits
        );
        Ok(bits)
    }
}

/// Returns the number of bits needed to arithmetic-code `text`, followed by the terminator,
/// with the probabilities in `table`.
///
/// Fails with [`UnknownSymbol`](crate::Error::UnknownSymbol) if a symbol of `text` isn't in
/// `table`.
pub fn encode(text: &str, table: &ProbabilityTable) -> Result<usize> {
    let mut encoder = ArithmeticEncoder::new(table);
    encoder.encode_all(text)?;
    encoder.finish()
}
