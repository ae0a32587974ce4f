use logos::Logos;

use crate::interpreter::{lexer::Token, symbols::SymbolTable};

/// Builds the symbol table skeleton for an expression.
///
/// Every distinct name is registered once with a zero value. A name is an
/// array if any of its occurrences is immediately followed by `[`; arrays are
/// registered first so a name used both ways can never end up as a scalar.
/// Numeric literals are never registered.
///
/// The expression should have passed
/// [`validate`](crate::interpreter::brackets::validate); extraction itself
/// does not check bracket structure. Characters that cannot start a token are
/// skipped here and reported later by evaluation.
///
/// # Example
/// ```
/// use arrayexpr::interpreter::extractor::extract;
///
/// let table = extract("a-(b+A[B[2]])*d+3");
/// assert_eq!(table.scalar_names(), vec!["a", "b", "d"]);
/// assert_eq!(table.array_names(), vec!["A", "B"]);
/// ```
#[must_use]
pub fn extract(expr: &str) -> SymbolTable {
    let bytes = expr.as_bytes();
    let words: Vec<(String, bool)> =
        Token::lexer(expr).spanned()
                          .filter_map(|(token, span)| match token {
                              Ok(Token::Word(name)) => {
                                  let subscripted = bytes.get(span.end) == Some(&b'[');
                                  Some((name, subscripted))
                              },
                              _ => None,
                          })
                          .collect();

    let mut table = SymbolTable::new();
    for (name, _) in words.iter().filter(|(_, subscripted)| *subscripted) {
        table.insert_array(name);
    }
    for (name, _) in &words {
        table.insert_scalar(name);
    }

    table
}
