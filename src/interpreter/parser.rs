/// Parser entry points.
///
/// Defines the parse result type and the top-level `parse` function that
/// tokenizes an expression and checks that every token was consumed.
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels, both
/// left-associative.
pub mod binary;

/// Primary expression parsing.
///
/// Handles numeric literals, scalar names, array subscripts and parenthesized
/// groups, the operands of the binary levels.
pub mod primary;
