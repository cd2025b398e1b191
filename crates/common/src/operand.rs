//! Operand expressions.
//!
//! An operand is a literal, a register, or a left-to-right chain of
//! literals and registers joined by `+` and `-`. The whole operand may be
//! wrapped in the indirect marker `#( … )`, which `LOAD` reads as "the
//! memory cell at this address".

use crate::register::Register;
use crate::Word;
use std::fmt;

/// A leaf of an operand expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    /// Signed integer literal.
    Literal(Word),
    /// Current value of a register.
    Register(Register),
}

/// Operator joining two terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

/// A left-to-right additive chain: `head (sign term)*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    pub head: Term,
    pub tail: Vec<(Sign, Term)>,
}

/// A parsed operand token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    pub expr: Expr,
    /// Written with the `#( … )` wrapper.
    pub indirect: bool,
}

impl Term {
    fn value(self, lookup: &impl Fn(Register) -> Word) -> Word {
        match self {
            Term::Literal(n) => n,
            Term::Register(r) => lookup(r),
        }
    }
}

impl Expr {
    /// A single-term expression.
    pub fn term(head: Term) -> Self {
        Self {
            head,
            tail: Vec::new(),
        }
    }

    /// Evaluate left to right. Overflow wraps.
    pub fn eval(&self, lookup: impl Fn(Register) -> Word) -> Word {
        self.tail
            .iter()
            .fold(self.head.value(&lookup), |acc, &(sign, term)| match sign {
                Sign::Plus => acc.wrapping_add(term.value(&lookup)),
                Sign::Minus => acc.wrapping_sub(term.value(&lookup)),
            })
    }

    /// The literal value, if the expression is a single literal.
    pub fn as_literal(&self) -> Option<Word> {
        match (self.head, self.tail.is_empty()) {
            (Term::Literal(n), true) => Some(n),
            _ => None,
        }
    }
}

impl Operand {
    /// A bare integer literal.
    pub fn literal(value: Word) -> Self {
        Self {
            expr: Expr::term(Term::Literal(value)),
            indirect: false,
        }
    }

    /// A bare register reference.
    pub fn register(reg: Register) -> Self {
        Self {
            expr: Expr::term(Term::Register(reg)),
            indirect: false,
        }
    }

    /// True when the operand is a lone literal or register with no wrapper.
    pub fn is_bare(&self) -> bool {
        !self.indirect && self.expr.tail.is_empty()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Literal(n) => write!(f, "{n}"),
            Term::Register(r) => write!(f, "{r}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head)?;
        for (sign, term) in &self.tail {
            let op = match sign {
                Sign::Plus => '+',
                Sign::Minus => '-',
            };
            write!(f, "{op}{term}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.indirect {
            write!(f, "#({})", self.expr)
        } else {
            write!(f, "{}", self.expr)
        }
    }
}
