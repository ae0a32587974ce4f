/// Core evaluation logic.
///
/// Contains the evaluation context, the public `evaluate` entry point and
/// the dispatch over expression nodes.
pub mod core;

/// Binary operator evaluation.
///
/// Applies `+ - * /` to two evaluated operands and reports division by zero.
pub mod binary;

/// Array subscript evaluation.
///
/// Resolves array names, converts subscript values to indices and checks
/// bounds.
pub mod array;
