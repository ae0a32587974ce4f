use crate::{
    ast::Expr,
    error::{EvalError, SymbolKind},
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::f64_to_index,
};

impl Context<'_> {
    /// Evaluates an array element, `name[index]`.
    ///
    /// The subscript is a full expression and is evaluated first, which is
    /// what lets chained subscripts like `A[B[C[0]]]` resolve innermost
    /// first. Its value is truncated toward zero and must fall in
    /// `[0, size)`.
    ///
    /// # Parameters
    /// - `name`: Name of the array symbol.
    /// - `index`: The subscript expression.
    /// - `position`: Byte offset of the array name.
    ///
    /// # Errors
    /// - `UnknownSymbol` if the name is not in the table.
    /// - `KindMismatch` if the name is a scalar.
    /// - `IndexOutOfRange` if the subscript is negative, too large or not
    ///   finite.
    pub fn eval_array_index(&self, name: &str, index: &Expr, position: usize) -> EvalResult<f64> {
        let subscript = self.eval(index)?;

        let Some(array) = self.symbols.array(name) else {
            return Err(match self.symbols.kind_of(name) {
                           Some(_) => EvalError::KindMismatch { name: name.to_string(),
                                                                expected: SymbolKind::Array,
                                                                position },
                           None => EvalError::UnknownSymbol { name: name.to_string(),
                                                              position },
                       });
        };

        f64_to_index(subscript).and_then(|i| array.get(i))
                               .ok_or_else(|| EvalError::IndexOutOfRange { name: name.to_string(),
                                                                           index: subscript,
                                                                           size: array.size(),
                                                                           position })
    }
}
