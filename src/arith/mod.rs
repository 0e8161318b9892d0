pub mod encoder;
pub mod model_builder;

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::rational::Rational;
use crate::Symbol;

/// The half-open cumulative probability interval `[lower, upper)` assigned to a symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolInterval {
    pub lower: Rational,
    pub upper: Rational,
}

impl SymbolInterval {
    /// The probability of the symbol, i.e. `upper - lower`.
    pub fn width(&self) -> Rational {
        &self.upper - &self.lower
    }
}

/// The entry of the table associated to a specific [`Symbol`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableEntry {
    pub symbol: Symbol,

    /// How many times the symbol occurred in the training text.
    pub count: u64,

    pub interval: SymbolInterval,
}

/// An order-0 probability model: every symbol, including the terminator, is assigned an
/// interval whose width is its frequency in the training text.
///
/// The intervals partition `[0, 1)` and are laid out in the order the symbols were first seen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProbabilityTable {
    /// The entries in first-seen order.
    entries: Vec<TableEntry>,

    /// Maps each symbol to the index of its entry.
    index: HashMap<Symbol, usize>,

    /// The sum of all counts.
    total: u64,
}

impl ProbabilityTable {
    pub(crate) fn new(entries: Vec<TableEntry>, total: u64) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.symbol, position))
            .collect();

        Self {
            entries,
            index,
            total,
        }
    }

    pub fn get(&self, symbol: Symbol) -> Option<&SymbolInterval> {
        self.index
            .get(&symbol)
            .map(|position| &self.entries[*position].interval)
    }

    /// Same as [`get`](Self::get), but fails with [`Error::UnknownSymbol`] if the table
    /// doesn't contain `symbol`.
    pub fn interval(&self, symbol: Symbol) -> Result<&SymbolInterval> {
        self.get(symbol).ok_or(Error::UnknownSymbol(symbol))
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.index.contains_key(&symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of symbols the table was trained on, terminator included.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = &TableEntry> {
        self.entries.iter()
    }

    /// The counts of the symbols, in table order.
    pub fn counts(&self) -> Vec<u64> {
        self.entries.iter().map(|entry| entry.count).collect()
    }

    /// Counts the occurrences of each table symbol in `text`, in table order. The terminator
    /// is counted once, as it ends every encoded sequence.
    ///
    /// Fails with [`Error::UnknownSymbol`] if `text` contains a symbol the table doesn't know.
    pub fn frequencies_of(&self, text: &str) -> Result<Vec<u64>> {
        let mut frequencies = vec![0_u64; self.entries.len()];

        for symbol in text.chars().chain(std::iter::once(crate::TERMINATOR)) {
            let position = self
                .index
                .get(&symbol)
                .ok_or(Error::UnknownSymbol(symbol))?;
            frequencies[*position] += 1;
        }
        Ok(frequencies)
    }
}

impl<'a> IntoIterator for &'a ProbabilityTable {
    type Item = &'a TableEntry;
    type IntoIter = std::slice::Iter<'a, TableEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
