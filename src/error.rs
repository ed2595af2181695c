//! Errors raised while building or reading formulas.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A clause contains the literal `0`.
    #[error("clause {clause} contains the literal 0")]
    ZeroLiteral { clause: usize },

    /// Clauses must all hold one literal per variable.
    #[error("clause {clause} has {len} literals, expected {width}")]
    RaggedClause {
        clause: usize,
        len: usize,
        width: usize,
    },

    #[error("width {0} is too large to encode")]
    WidthTooLarge(usize),

    #[error("missing problem line")]
    MissingHeader,

    #[error("malformed problem line: {0:?}")]
    MalformedHeader(String),

    #[error("invalid literal: {0:?}")]
    InvalidLiteral(String),

    #[error("input ends inside a clause of {len} literals")]
    UnterminatedClause { len: usize },

    #[error("problem line declares {expected} clauses, found {actual}")]
    ClauseCountMismatch { expected: usize, actual: usize },

    #[error("variable {var} exceeds the declared count {var_count}")]
    VariableOutOfRange { var: usize, var_count: usize },

    #[error("no built-in example named {0:?}")]
    UnknownExample(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
