use std::io::BufRead;

use crate::{
    error::Error,
    interpreter::{
        brackets::{BracketMap, validate},
        evaluator::core::evaluate,
        extractor::extract,
        loader::load_values,
        symbols::SymbolTable,
    },
};

/// One expression and the artifacts derived from it.
///
/// The stages must run in order: [`validate`](Self::validate),
/// [`build_symbols`](Self::build_symbols), [`load_values`](Self::load_values)
/// and [`evaluate`](Self::evaluate). Extraction refuses to run until
/// validation has succeeded, so a malformed expression never reaches the
/// later stages.
///
/// ## Usage
///
/// Each session owns its own symbol table. Independent expressions should
/// each get their own `Expression`; nothing is shared between sessions.
///
/// ```
/// use arrayexpr::expression::Expression;
///
/// let mut expression = Expression::new("x*A[1]");
/// expression.validate().unwrap();
/// expression.build_symbols().unwrap();
/// expression.load_values("x 3\nA 2 (1,4)".as_bytes()).unwrap();
/// assert_eq!(expression.evaluate().unwrap(), 12.0);
/// ```
#[derive(Debug, Clone)]
pub struct Expression {
    text:     String,
    brackets: Option<BracketMap>,
    symbols:  SymbolTable,
}

impl Expression {
    /// Creates a session for `text`. Nothing is validated yet.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text:     text.into(),
               brackets: None,
               symbols:  SymbolTable::new(), }
    }

    /// The expression text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Checks bracket nesting and remembers the bracket map.
    ///
    /// # Errors
    /// Returns [`Error::Structural`] if the brackets are not properly nested.
    pub fn validate(&mut self) -> Result<&BracketMap, Error> {
        self.brackets = None;
        let map = validate(&self.text)?;
        Ok(self.brackets.insert(map))
    }

    /// The bracket map, once validation has succeeded.
    #[must_use]
    pub const fn brackets(&self) -> Option<&BracketMap> {
        self.brackets.as_ref()
    }

    /// Rebuilds the symbol table from the expression, with every value zero.
    ///
    /// # Errors
    /// Returns [`Error::NotValidated`] if [`validate`](Self::validate) has
    /// not succeeded.
    pub fn build_symbols(&mut self) -> Result<&SymbolTable, Error> {
        if self.brackets.is_none() {
            return Err(Error::NotValidated);
        }
        self.symbols = extract(&self.text);
        Ok(&self.symbols)
    }

    /// The symbol table.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// The symbol table, for callers that fill values themselves.
    pub const fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    /// Loads value records into the symbol table.
    ///
    /// # Errors
    /// Returns [`Error::Load`] for the first record that cannot be read.
    pub fn load_values(&mut self, reader: impl BufRead) -> Result<(), Error> {
        load_values(reader, &mut self.symbols)?;
        Ok(())
    }

    /// Evaluates the expression against the current symbol table.
    ///
    /// # Errors
    /// Returns [`Error::NotValidated`] if validation has not succeeded, or
    /// [`Error::Eval`] if evaluation fails.
    pub fn evaluate(&self) -> Result<f64, Error> {
        if self.brackets.is_none() {
            return Err(Error::NotValidated);
        }
        Ok(evaluate(&self.text, &self.symbols)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EvalError, StructuralError};

    #[test]
    fn stages_require_validation() {
        let mut expression = Expression::new("a+b");
        assert!(matches!(expression.build_symbols(), Err(Error::NotValidated)));
        assert!(matches!(expression.evaluate(), Err(Error::NotValidated)));
    }

    #[test]
    fn failed_validation_blocks_extraction() {
        let mut expression = Expression::new("(a+[b)]");
        assert!(matches!(expression.validate(),
                         Err(Error::Structural(StructuralError::LooseNesting { .. }))));
        assert!(expression.brackets().is_none());
        assert!(matches!(expression.build_symbols(), Err(Error::NotValidated)));
    }

    #[test]
    fn values_can_be_set_directly() {
        let mut expression = Expression::new("x/y");
        expression.validate().unwrap();
        expression.build_symbols().unwrap();
        expression.symbols_mut().set_scalar("x", 9.0);
        expression.symbols_mut().set_scalar("y", 0.0);
        assert!(matches!(expression.evaluate(),
                         Err(Error::Eval(EvalError::DivisionByZero { position: 1 }))));
        expression.symbols_mut().set_scalar("y", 3.0);
        assert_eq!(expression.evaluate().unwrap(), 3.0);
    }

    #[test]
    fn unloaded_symbols_evaluate_as_zero() {
        let mut expression = Expression::new("(a+b)*2");
        expression.validate().unwrap();
        expression.build_symbols().unwrap();
        assert_eq!(expression.text(), "(a+b)*2");
        assert_eq!(expression.evaluate().unwrap(), 0.0);
    }
}
