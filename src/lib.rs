//! # arrayexpr
//!
//! arrayexpr validates and evaluates arithmetic expressions written over
//! scalar variables, one-dimensional array variables with integer subscripts,
//! and nested parenthesized or bracketed subexpressions.
//!
//! The pipeline is: bracket validation, symbol extraction, value loading and
//! finally recursive evaluation.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent an expression as a tree. The tree is built by the parser and
/// walked by the evaluator. Every node keeps the byte offset it was parsed
/// from, so runtime errors can point back into the source text.
pub mod ast;
/// Provides unified error types for every stage of the pipeline.
///
/// Structural (bracket) errors, evaluation errors and value-loading errors
/// each have their own enum; [`error::Error`] wraps all of them so that the
/// stages compose with `?`.
pub mod error;
/// The expression session.
///
/// An [`expression::Expression`] owns one expression together with its
/// derived bracket map and symbol table, and enforces the order in which the
/// pipeline stages run.
pub mod expression;
/// Bracket validation, lexing, symbol extraction, value loading, parsing and
/// evaluation.
///
/// # Responsibilities
/// - Rejects expressions whose brackets are not properly nested.
/// - Discovers the scalar and array names an expression refers to.
/// - Fills the symbol table from line-oriented value records.
/// - Evaluates expressions with operator precedence and recursive subscripts.
pub mod interpreter;
/// Numeric conversion helpers.
pub mod util;

use crate::{error::Error, expression::Expression};

/// Runs the whole pipeline on one expression and its value records.
///
/// The expression is validated, its symbols are extracted, the records in
/// `values` are loaded into the symbol table and the expression is evaluated.
///
/// # Errors
/// Returns the first error raised by any stage: a structural bracket error, a
/// malformed value record, or an evaluation error.
///
/// # Examples
/// ```
/// use arrayexpr::evaluate_with_values;
///
/// let values = "a 2\nb 3\nd 5\nA 6 (5,7)\nB 3 (2,5)\n";
/// let result = evaluate_with_values("a-(b+A[B[2]])*d+3", values).unwrap();
/// assert_eq!(result, -45.0);
///
/// // Brackets cross each other, so nothing is evaluated.
/// assert!(evaluate_with_values("(([)])", "").is_err());
/// ```
pub fn evaluate_with_values(expr: &str, values: &str) -> Result<f64, Error> {
    let mut expression = Expression::new(expr);
    expression.validate()?;
    expression.build_symbols()?;
    expression.load_values(values.as_bytes())?;
    expression.evaluate()
}
