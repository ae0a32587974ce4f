/// Evaluation errors.
///
/// Contains all error types that can be raised while parsing or evaluating a
/// validated expression: unknown symbols, subscripts out of range, division
/// by zero, malformed literals and syntax errors.
pub mod eval_error;
/// Value loading errors.
///
/// Defines the errors raised while reading symbol value records, each tagged
/// with the record's line number.
pub mod load_error;
/// Bracket structure errors.
///
/// Defines the ways an expression's bracket nesting can be rejected before
/// any extraction or evaluation happens.
pub mod structural_error;

pub use eval_error::{EvalError, SymbolKind};
pub use load_error::LoadError;
pub use structural_error::StructuralError;

#[derive(Debug)]
/// Any error the expression pipeline can produce.
pub enum Error {
    /// The expression's brackets are not properly nested.
    Structural(StructuralError),
    /// Evaluation failed.
    Eval(EvalError),
    /// A symbol value record could not be loaded.
    Load(LoadError),
    /// A stage was run before the expression passed bracket validation.
    NotValidated,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Structural(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
            Self::Load(e) => write!(f, "{e}"),
            Self::NotValidated => {
                write!(f, "Error: Expression must pass bracket validation first.")
            },
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Structural(e) => Some(e),
            Self::Eval(e) => Some(e),
            Self::Load(e) => Some(e),
            Self::NotValidated => None,
        }
    }
}

impl From<StructuralError> for Error {
    fn from(value: StructuralError) -> Self {
        Self::Structural(value)
    }
}

impl From<EvalError> for Error {
    fn from(value: EvalError) -> Self {
        Self::Eval(value)
    }
}

impl From<LoadError> for Error {
    fn from(value: LoadError) -> Self {
        Self::Load(value)
    }
}
