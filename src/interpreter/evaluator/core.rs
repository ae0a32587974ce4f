use crate::{
    ast::Expr,
    error::{EvalError, SymbolKind},
    interpreter::{parser::core::parse, symbols::SymbolTable},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the evaluation context.
///
/// The context only borrows the symbol table, so evaluation can never modify
/// symbol values and evaluating the same expression twice against the same
/// table gives the same result.
pub struct Context<'a> {
    /// The symbols the expression refers to, with their loaded values.
    pub symbols: &'a SymbolTable,
}

impl<'a> Context<'a> {
    /// Creates a context over a populated symbol table.
    #[must_use]
    pub const fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }

    /// Evaluates an expression tree.
    ///
    /// This is the recursive core of evaluation. Binary nodes evaluate their
    /// left operand before their right one, and array subscripts evaluate
    /// their index expression before the array is read, so nested subscripts
    /// resolve innermost first.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The numeric value of the expression.
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Scalar { name, position } => self.eval_scalar(name, *position),
            Expr::ArrayIndex { name,
                               index,
                               position, } => self.eval_array_index(name, index, *position),
            Expr::Binary { left,
                           op,
                           right,
                           position, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary_op(*op, left, right, *position)
            },
        }
    }

    /// Looks up a scalar's value.
    ///
    /// # Errors
    /// - `UnknownSymbol` if the name is not in the table.
    /// - `KindMismatch` if the name is an array.
    pub fn eval_scalar(&self, name: &str, position: usize) -> EvalResult<f64> {
        if let Some(symbol) = self.symbols.scalar(name) {
            return Ok(symbol.value);
        }
        match self.symbols.kind_of(name) {
            Some(_) => Err(EvalError::KindMismatch { name: name.to_string(),
                                                     expected: SymbolKind::Scalar,
                                                     position }),
            None => Err(EvalError::UnknownSymbol { name: name.to_string(),
                                                   position }),
        }
    }
}

/// Parses and evaluates an expression against a symbol table.
///
/// The expression should have passed bracket validation and the table
/// should hold the values loaded for its symbols. The table is only read.
///
/// # Errors
/// Returns any parse error from [`parse`], or a runtime error such as an
/// unknown symbol, an out-of-range subscript or a division by zero. No
/// partial result is returned.
///
/// # Example
/// ```
/// use arrayexpr::interpreter::{evaluator::core::evaluate, symbols::SymbolTable};
///
/// let table = SymbolTable::new();
/// assert_eq!(evaluate("2+3*4", &table).unwrap(), 14.0);
/// assert_eq!(evaluate("8/2*2", &table).unwrap(), 8.0);
/// assert!(evaluate("1/(2-2)", &table).is_err());
/// ```
pub fn evaluate(expr: &str, symbols: &SymbolTable) -> EvalResult<f64> {
    let tree = parse(expr)?;
    Context::new(symbols).eval(&tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn documented_table() -> SymbolTable {
        let mut table = SymbolTable::new();
        for (name, value) in [("a", 2.0), ("b", 3.0), ("d", 5.0)] {
            table.insert_scalar(name);
            table.set_scalar(name, value);
        }
        table.insert_array("A");
        table.set_array_values("A", 6, [(5, 7.0)]).unwrap();
        table.insert_array("B");
        table.set_array_values("B", 3, [(2, 5.0)]).unwrap();
        table
    }

    #[test]
    fn nested_subscripts_resolve_innermost_first() {
        let table = documented_table();
        assert_eq!(evaluate("a-(b+A[B[2]])*d+3", &table), Ok(-45.0));
    }

    #[test]
    fn evaluation_is_repeatable() {
        let table = documented_table();
        let first = evaluate("A[B[2]]/b*(a+d)", &table);
        let second = evaluate("A[B[2]]/b*(a+d)", &table);
        assert_eq!(first, second);
        assert_eq!(table, documented_table());
    }

    #[test]
    fn unknown_symbol_is_reported_with_position() {
        let table = documented_table();
        assert_eq!(evaluate("a+zz", &table),
                   Err(EvalError::UnknownSymbol { name:     "zz".into(),
                                                  position: 2, }));
    }

    #[test]
    fn array_used_as_scalar_is_a_kind_mismatch() {
        let table = documented_table();
        assert_eq!(evaluate("A+1", &table),
                   Err(EvalError::KindMismatch { name:     "A".into(),
                                                 expected: SymbolKind::Scalar,
                                                 position: 0, }));
    }

    #[test]
    fn whitespace_between_tokens_is_ignored() {
        let table = documented_table();
        assert_eq!(evaluate(" a * ( b + d ) ", &table), Ok(16.0));
    }
}
