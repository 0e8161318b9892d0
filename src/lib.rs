pub mod arith;
pub mod error;
pub mod rational;
pub mod utils;

pub use crate::arith::encoder::{encode, ArithmeticEncoder};
pub use crate::arith::model_builder::{train, ProbabilityTableBuilder};
pub use crate::arith::{ProbabilityTable, SymbolInterval};
pub use crate::error::{Error, Result};
pub use crate::rational::parse::{parse, rational, RationalArg};
pub use crate::rational::{Power, Rational};

/// The type of the symbols handled by the trainer and the encoder.
///
/// Texts are processed one `char` at a time, so a symbol is a single Unicode scalar value.
pub type Symbol = char;

/// The reserved symbol appended to every encoded sequence to mark its end.
///
/// # Note
/// Since it's implicitly counted once by the trainer, it must never occur in the training text.
pub const TERMINATOR: Symbol = '\0';
