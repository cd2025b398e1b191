//! Operand expression parser.
//!
//! Grammar, tried in order:
//!
//! ```text
//! operand  := literal | "#(" chain ")" | chain
//! chain    := term (("+" | "-") term)*
//! term     := literal | register
//! ```
//!
//! A token that parses as a signed literal is always a literal, so `-2` is
//! minus two rather than a chain with an empty head.

use crate::error::DecodeError;
use pl0_common::{Expr, Operand, Register, Sign, Term, Word};

/// Parse one operand token.
pub fn parse_operand(token: &str) -> Result<Operand, DecodeError> {
    let token = token.trim();
    if let Ok(n) = token.parse::<Word>() {
        return Ok(Operand::literal(n));
    }

    let (body, indirect) = match token.strip_prefix("#(").and_then(|t| t.strip_suffix(')')) {
        Some(inner) => (inner.trim(), true),
        None => (token, false),
    };

    let expr = parse_chain(body, token)?;
    Ok(Operand { expr, indirect })
}

/// Parse a register write target (`LOAD` destination, `POP` operand).
pub fn parse_register(token: &str) -> Result<Register, DecodeError> {
    Register::from_name(token.trim()).ok_or_else(|| DecodeError::UnknownRegister {
        token: token.to_string(),
    })
}

fn parse_chain(body: &str, token: &str) -> Result<Expr, DecodeError> {
    let mut pieces = Vec::new();
    let mut signs = Vec::new();
    let mut start = 0;

    for (i, c) in body.char_indices() {
        let sign = match c {
            '+' => Sign::Plus,
            '-' => Sign::Minus,
            _ => continue,
        };
        pieces.push(body[start..i].trim());
        signs.push(sign);
        start = i + 1;
    }
    pieces.push(body[start..].trim());

    // A single literal inside the wrapper, e.g. "#(-3)".
    if !signs.is_empty() {
        if let Ok(n) = body.parse::<Word>() {
            return Ok(Expr::term(Term::Literal(n)));
        }
    }

    if pieces.iter().any(|p| p.is_empty()) {
        return Err(DecodeError::MalformedExpression {
            token: token.to_string(),
        });
    }

    let head = parse_term(pieces[0])?;
    let tail = signs
        .into_iter()
        .zip(pieces[1..].iter())
        .map(|(sign, piece)| parse_term(piece).map(|term| (sign, term)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Expr { head, tail })
}

fn parse_term(piece: &str) -> Result<Term, DecodeError> {
    if let Ok(n) = piece.parse::<Word>() {
        return Ok(Term::Literal(n));
    }
    if let Some(reg) = Register::from_name(piece) {
        return Ok(Term::Register(reg));
    }
    if piece.bytes().all(|b| b.is_ascii_digit()) {
        Err(DecodeError::InvalidNumber {
            token: piece.to_string(),
        })
    } else {
        Err(DecodeError::UnknownRegister {
            token: piece.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(head: Term, tail: &[(Sign, Term)]) -> Expr {
        Expr {
            head,
            tail: tail.to_vec(),
        }
    }

    #[test]
    fn literal() {
        assert_eq!(parse_operand("800").unwrap(), Operand::literal(800));
        assert_eq!(parse_operand("-2").unwrap(), Operand::literal(-2));
        assert_eq!(parse_operand("+7").unwrap(), Operand::literal(7));
    }

    #[test]
    fn register_any_case() {
        assert_eq!(parse_operand("a").unwrap(), Operand::register(Register::A));
        assert_eq!(parse_operand("FP").unwrap(), Operand::register(Register::FP));
    }

    #[test]
    fn chain_keeps_operator_order() {
        let op = parse_operand("800+A-2").unwrap();
        assert!(!op.indirect);
        assert_eq!(
            op.expr,
            chain(
                Term::Literal(800),
                &[
                    (Sign::Plus, Term::Register(Register::A)),
                    (Sign::Minus, Term::Literal(2)),
                ]
            )
        );
    }

    #[test]
    fn indirect_wrapper() {
        let op = parse_operand("#(FP-1)").unwrap();
        assert!(op.indirect);
        assert_eq!(
            op.expr,
            chain(Term::Register(Register::FP), &[(Sign::Minus, Term::Literal(1))])
        );

        let op = parse_operand("#(800)").unwrap();
        assert!(op.indirect);
        assert_eq!(op.expr.as_literal(), Some(800));

        let op = parse_operand("#(A)").unwrap();
        assert!(op.indirect);
        assert_eq!(op.expr.head, Term::Register(Register::A));
    }

    #[test]
    fn negative_literal_inside_wrapper() {
        let op = parse_operand("#(-3)").unwrap();
        assert!(op.indirect);
        assert_eq!(op.expr.as_literal(), Some(-3));
    }

    #[test]
    fn dangling_operator_is_malformed() {
        for token in ["A+", "+A+", "A+-2", "A--B", "#()", "-A"] {
            assert!(
                matches!(
                    parse_operand(token),
                    Err(DecodeError::MalformedExpression { .. })
                ),
                "{token} should be malformed"
            );
        }
    }

    #[test]
    fn unknown_register() {
        assert_eq!(
            parse_operand("A+X"),
            Err(DecodeError::UnknownRegister {
                token: "X".to_string()
            })
        );
        assert_eq!(
            parse_operand("PC"),
            Err(DecodeError::UnknownRegister {
                token: "PC".to_string()
            })
        );
    }

    #[test]
    fn out_of_range_literal() {
        assert_eq!(
            parse_operand("99999999999"),
            Err(DecodeError::InvalidNumber {
                token: "99999999999".to_string()
            })
        );
    }

    #[test]
    fn write_target_must_be_register() {
        assert_eq!(parse_register("sp"), Ok(Register::SP));
        assert!(matches!(
            parse_register("800"),
            Err(DecodeError::UnknownRegister { .. })
        ));
    }

    #[test]
    fn display_roundtrips_through_parser() {
        for token in ["800+A-2", "#(FP-1)", "SP", "-5", "#(B)"] {
            let op = parse_operand(token).unwrap();
            assert_eq!(parse_operand(&op.to_string()).unwrap(), op);
        }
    }
}
