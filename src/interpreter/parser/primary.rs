use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions are the operands of the binary levels:
/// - numeric literals
/// - scalar names
/// - array subscripts, `name[expression]`
/// - parenthesized expressions
///
/// There is no unary minus, so a leading `-` is rejected here.
///
/// Grammar:
/// ```text
///     primary := number
///              | name
///              | name "[" expression "]"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Errors
/// - `UnexpectedToken` for any token that cannot start an operand.
/// - `UnexpectedEnd` if the stream is exhausted.
/// - `MalformedLiteral` if a number token does not parse.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some((Token::Number(literal), span)) => parse_number(literal, span.start),
        Some((Token::Word(name), span)) => {
            if let Some((Token::LBracket, _)) = tokens.peek() {
                tokens.next();
                let index = parse_expression(tokens)?;
                expect_closing(tokens, &Token::RBracket)?;
                Ok(Expr::ArrayIndex { name:     name.clone(),
                                      index:    Box::new(index),
                                      position: span.start, })
            } else {
                Ok(Expr::Scalar { name:     name.clone(),
                                  position: span.start, })
            }
        },
        Some((Token::LParen, _)) => {
            let inner = parse_expression(tokens)?;
            expect_closing(tokens, &Token::RParen)?;
            Ok(inner)
        },
        Some((tok, span)) => Err(EvalError::UnexpectedToken { token:    tok.to_string(),
                                                              position: span.start, }),
        None => Err(EvalError::UnexpectedEnd { position: 0 }),
    }
}

fn parse_number(literal: &str, position: usize) -> ParseResult<Expr> {
    literal.parse::<f64>()
           .ok()
           .filter(|value| value.is_finite())
           .map(|value| Expr::Number { value, position })
           .ok_or_else(|| EvalError::MalformedLiteral { literal: literal.to_string(),
                                                        position })
}

fn expect_closing<'a, I>(tokens: &mut Peekable<I>, closing: &Token) -> ParseResult<()>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some((tok, _)) if tok == closing => Ok(()),
        Some((tok, span)) => Err(EvalError::UnexpectedToken { token:    tok.to_string(),
                                                              position: span.start, }),
        None => Err(EvalError::UnexpectedEnd { position: 0 }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::parser::core::parse;

    #[test]
    fn decimal_literals() {
        assert_eq!(parse(".5").unwrap(),
                   Expr::Number { value:    0.5,
                                  position: 0, });
        assert_eq!(parse("12.25").unwrap(),
                   Expr::Number { value:    12.25,
                                  position: 0, });
    }

    #[test]
    fn overflowing_literal_is_malformed() {
        let huge = "9".repeat(400);
        assert_eq!(parse(&huge),
                   Err(EvalError::MalformedLiteral { literal:  huge.clone(),
                                                     position: 0, }));
    }

    #[test]
    fn word_followed_by_bracket_is_a_subscript() {
        let expr = parse("B[2]").unwrap();
        assert_eq!(expr,
                   Expr::ArrayIndex { name:     "B".into(),
                                      index:    Box::new(Expr::Number { value:    2.0,
                                                                        position: 2, }),
                                      position: 0, });
    }

    #[test]
    fn subscript_closed_by_paren_is_rejected() {
        assert_eq!(parse("A[1)").unwrap_err(),
                   EvalError::UnexpectedToken { token:    ")".into(),
                                                position: 3, });
    }
}
