use crate::error::{Error, Result};

pub type Lit = i32;

pub type Clause = Vec<Lit>;

/// Widest clause accepted; a clause weight is `2^e` with `e < 2^MAX_WIDTH`.
pub const MAX_WIDTH: usize = 24;

/// Clauses in literal-position form: every clause holds exactly one literal
/// per variable, in a fixed position order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cnf {
    width: usize,
    clauses: Vec<Clause>,
}

impl Cnf {
    pub fn new(clauses: Vec<Clause>) -> Result<Self> {
        let width = clauses.first().map_or(0, Vec::len);
        if width > MAX_WIDTH {
            return Err(Error::WidthTooLarge(width));
        }

        for (i, clause) in clauses.iter().enumerate() {
            if clause.len() != width {
                return Err(Error::RaggedClause {
                    clause: i,
                    len: clause.len(),
                    width,
                });
            }
            if clause.contains(&0) {
                return Err(Error::ZeroLiteral { clause: i });
            }
        }

        Ok(Self { width, clauses })
    }

    /// Number of literals per clause (n).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of clauses (m).
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }
}
