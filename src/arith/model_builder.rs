use std::collections::HashMap;

use log::{debug, info};
use num_bigint::BigInt;

use crate::arith::{ProbabilityTable, SymbolInterval, TableEntry};
use crate::error::{Error, Result};
use crate::rational::Rational;
use crate::{Symbol, TERMINATOR};

/// Collects the frequencies of the symbols of a training text and builds the related
/// [`ProbabilityTable`].
#[derive(Clone, Debug, Default)]
pub struct ProbabilityTableBuilder {
    /// The symbols pushed so far, in first-seen order, with their frequencies.
    freqs: Vec<(Symbol, u64)>,

    /// Maps each symbol to its position in `freqs`.
    positions: HashMap<Symbol, usize>,

    /// The sum of all frequencies.
    total_freq: u64,
}

impl ProbabilityTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new symbol into the builder.
    ///
    /// Note: it returns an error if the pushed symbol is the [`TERMINATOR`], since the
    /// terminator is implicitly counted once when building the table.
    pub fn push_symbol(&mut self, symbol: Symbol) -> Result<()> {
        if symbol == TERMINATOR {
            return Err(Error::InvalidInput(
                "the training text can't contain the terminator symbol".to_owned(),
            ));
        }

        match self.positions.get(&symbol) {
            Some(position) => self.freqs[*position].1 += 1,
            None => {
                self.positions.insert(symbol, self.freqs.len());
                self.freqs.push((symbol, 1));
            }
        }
        self.total_freq += 1;

        Ok(())
    }

    /// Pushes every symbol of `text`. Nothing is pushed if `text` contains the terminator.
    pub fn push_text(&mut self, text: &str) -> Result<()> {
        if text.contains(TERMINATOR) {
            return Err(Error::InvalidInput(
                "the training text can't contain the terminator symbol".to_owned(),
            ));
        }
        text.chars().try_for_each(|symbol| self.push_symbol(symbol))
    }

    /// The number of symbols pushed so far.
    pub fn total_freq(&self) -> u64 {
        self.total_freq
    }

    /// Builds the table: each symbol, in first-seen order and followed by the terminator, gets
    /// the interval `[cumulative / total, (cumulative + freq) / total)`.
    pub fn build(self) -> ProbabilityTable {
        let mut freqs = self.freqs;
        freqs.push((TERMINATOR, 1));
        let total_freq = self.total_freq + 1;

        let total = BigInt::from(total_freq);
        let mut entries = Vec::with_capacity(freqs.len());
        let mut last_covered_freq = 0_u64;
        let mut lower = Rational::zero();

        for (symbol, freq) in freqs {
            last_covered_freq += freq;
            let upper = Rational::reduced(BigInt::from(last_covered_freq), total.clone());

            entries.push(TableEntry {
                symbol,
                count: freq,
                interval: SymbolInterval {
                    lower,
                    upper: upper.clone(),
                },
            });
            lower = upper;
        }

        assert_eq!(
            last_covered_freq, total_freq,
            "the cumulative frequency must cover all the pushed symbols"
        );

        info!(
            "Built an order-0 model of {} symbols over {} occurrences",
            entries.len(),
            total_freq
        );
        debug!("{:<10} | {:<10} | {:<12} | Interval", "Symbol", "Count", "Of total(%)");
        for entry in entries.iter() {
            debug!(
                "{:<10} | {:<10} | {:<12.2} | [{}, {})",
                format!("{:?}", entry.symbol),
                entry.count,
                (entry.count as f64 / total_freq as f64) * 100.0,
                entry.interval.lower,
                entry.interval.upper,
            );
        }

        ProbabilityTable::new(entries, total_freq)
    }
}

/// Trains an order-0 [`ProbabilityTable`] on `text`.
///
/// Fails with [`Error::InvalidInput`] if `text` contains the [`TERMINATOR`].
pub fn train(text: &str) -> Result<ProbabilityTable> {
    let mut builder = ProbabilityTableBuilder::new();
    builder.push_text(text)?;
    Ok(builder.build())
}
