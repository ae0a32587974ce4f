use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Spanned, Token},
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with byte spans.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let mut left = parse_multiplicative(tokens)?;
    while let Some((token, span)) = tokens.peek() {
        let Some(op) = token_to_binary_operator(token).filter(|op| !op.is_multiplicative())
        else {
            break;
        };
        let position = span.start;
        tokens.next();
        let right = parse_multiplicative(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              position };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative binary operators: `*` and `/`. Every
/// multiplication needs an explicit `*`; two operands side by side are not
/// multiplied.
///
/// The rule is: `multiplicative := primary (("*" | "/") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream with byte spans.
///
/// # Returns
/// A binary expression tree combining primary nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let mut left = parse_primary(tokens)?;
    while let Some((token, span)) = tokens.peek() {
        let Some(op) = token_to_binary_operator(token).filter(|op| op.is_multiplicative()) else {
            break;
        };
        let position = span.start;
        tokens.next();
        let right = parse_primary(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              position };
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not `+`, `-`, `*` or `/`.
///
/// # Example
/// ```
/// use arrayexpr::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Slash), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::parser::core::parse;

    fn ops(expr: &Expr) -> String {
        match expr {
            Expr::Binary { left, op, right, .. } => format!("({} {op} {})", ops(left), ops(right)),
            Expr::Number { value, .. } => value.to_string(),
            Expr::Scalar { name, .. } => name.clone(),
            Expr::ArrayIndex { name, index, .. } => format!("{name}[{}]", ops(index)),
        }
    }

    #[test]
    fn multiplication_binds_tighter() {
        assert_eq!(ops(&parse("2+3*4").unwrap()), "(2 + (3 * 4))");
        assert_eq!(ops(&parse("2*3+4").unwrap()), "((2 * 3) + 4)");
    }

    #[test]
    fn equal_precedence_is_left_associative() {
        assert_eq!(ops(&parse("8/2*2").unwrap()), "((8 / 2) * 2)");
        assert_eq!(ops(&parse("a-b+c-d").unwrap()), "(((a - b) + c) - d)");
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(ops(&parse("(2+3)*4").unwrap()), "((2 + 3) * 4)");
        assert_eq!(ops(&parse("a-(b+A[B[2]])*d+3").unwrap()),
                   "((a - ((b + A[B[2]]) * d)) + 3)");
    }

    #[test]
    fn operator_positions_are_recorded() {
        let Expr::Binary { position, .. } = parse("ab / c").unwrap() else {
            panic!("expected a binary node");
        };
        assert_eq!(position, 3);
    }
}
