//! Error types for rational arithmetic and arithmetic coding.

use thiserror::Error;

use crate::Symbol;

/// Error variants for the rational type, the literal parser, the trainer and the encoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A rational was built, inverted or divided with a zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// A precondition of the called operation does not hold.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The literal doesn't match any of the supported numeric grammars.
    #[error("cannot parse {literal:?} as a rational: {reason}")]
    Parse { literal: String, reason: String },

    /// The encoder was asked for a symbol the probability table doesn't cover.
    #[error("unknown symbol {0:?}")]
    UnknownSymbol(Symbol),

    /// The argument can't take part in rational arithmetic.
    #[error("incompatible type: {0}")]
    IncompatibleType(&'static str),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
