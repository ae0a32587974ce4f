use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        lexer::{Spanned, tokenize},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, EvalError>;

/// Parses a complete expression.
///
/// The source is tokenized and parsed from the lowest precedence level.
/// Every token must be consumed; anything left over, such as the second
/// operand of `a b`, is an error.
///
/// # Errors
/// - [`EvalError::UnexpectedToken`] for a token the grammar does not allow
///   where it appears, including leftovers.
/// - [`EvalError::UnexpectedEnd`] if the expression stops where an operand
///   or closing bracket is required.
/// - [`EvalError::MalformedLiteral`] if a numeric literal does not parse.
///
/// # Example
/// ```
/// use arrayexpr::{ast::Expr, interpreter::parser::core::parse};
///
/// let expr = parse("A[i]").unwrap();
/// assert!(matches!(expr, Expr::ArrayIndex { ref name, .. } if name == "A"));
/// assert!(parse("2 3").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let expr = parse_expression(&mut iter).map_err(|e| anchor_end(e, source.len()))?;

    if let Some((token, span)) = iter.next() {
        return Err(EvalError::UnexpectedToken { token:    token.to_string(),
                                                position: span.start, });
    }

    Ok(expr)
}

/// Inner levels cannot see the source length, so they report
/// `UnexpectedEnd` at zero and the top level moves it to the end.
fn anchor_end(error: EvalError, len: usize) -> EvalError {
    match error {
        EvalError::UnexpectedEnd { .. } => EvalError::UnexpectedEnd { position: len },
        other => other,
    }
}

/// Parses an expression starting at the lowest precedence level.
///
/// Grammar: `expression := additive`
///
/// Used both for whole expressions and for the inside of parentheses and
/// array subscripts.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    parse_additive(tokens)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::ast::BinaryOperator;

    #[test]
    fn subscript_holds_a_full_expression() {
        let expr = parse("A[(i+1)*2]").unwrap();
        let Expr::ArrayIndex { name,
                               index,
                               position, } = expr
        else {
            panic!("expected array index, got {expr:?}");
        };
        assert_eq!(name, "A");
        assert_eq!(position, 0);
        assert!(matches!(*index, Expr::Binary { op: BinaryOperator::Mul, .. }));
    }

    #[test]
    fn parentheses_leave_no_node_behind() {
        assert_eq!(parse("((x))").unwrap(),
                   Expr::Scalar { name:     "x".into(),
                                  position: 2, });
    }

    #[rstest]
    #[case("-3", "-", 0)]
    #[case("a b", "b", 2)]
    #[case("()", ")", 1)]
    #[case("A[]", "]", 2)]
    #[case("a+*b", "*", 2)]
    #[case("(a)[2]", "[", 3)]
    #[case("a)", ")", 1)]
    fn unexpected_tokens(#[case] source: &str, #[case] token: &str, #[case] position: usize) {
        assert_eq!(parse(source),
                   Err(EvalError::UnexpectedToken { token: token.to_string(),
                                                    position }));
    }

    #[rstest]
    #[case("a+")]
    #[case("(a")]
    #[case("A[1")]
    #[case("")]
    fn unexpected_end_points_past_the_source(#[case] source: &str) {
        assert_eq!(parse(source),
                   Err(EvalError::UnexpectedEnd { position: source.len() }));
    }
}
