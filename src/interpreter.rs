/// Bracket structure validation.
///
/// Checks that `(...)` and `[...]` are properly nested before anything else
/// looks at an expression, and records which closing bracket matches each
/// opening one.
///
/// # Responsibilities
/// - Rejects unmatched closers, unclosed openers and crossed pairs.
/// - Produces the `BracketMap` of matched positions.
pub mod brackets;
/// The evaluator module computes the value of an expression.
///
/// The evaluator walks the parsed tree against a populated symbol table,
/// applying operator precedence, evaluating subscripts recursively and
/// reporting runtime errors such as division by zero.
///
/// # Responsibilities
/// - Evaluates numbers, scalar names, array subscripts and binary operations.
/// - Converts subscript values to indices and checks bounds.
/// - Never modifies the symbol table.
pub mod evaluator;
/// Symbol extraction.
///
/// Finds the distinct scalar and array names an expression refers to and
/// registers them, zero-valued, in a fresh symbol table.
pub mod extractor;
/// The lexer module tokenizes expressions.
///
/// A single tokenizer serves both symbol extraction and parsing, so the two
/// stages always agree on what counts as a name and what counts as a numeric
/// literal.
pub mod lexer;
/// Symbol value loading.
///
/// Reads line-oriented scalar and array records and writes their values into
/// a symbol table.
pub mod loader;
/// The parser module builds the expression tree from tokens.
///
/// # Responsibilities
/// - Encodes precedence: `*` and `/` bind tighter than `+` and `-`.
/// - Treats `(...)` as grouping and `name[...]` as subscripting.
/// - Reports syntax errors with byte positions.
pub mod parser;
/// The symbol table.
///
/// Holds the scalar and array symbols of one expression, keyed by name.
pub mod symbols;
