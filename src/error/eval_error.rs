use crate::ast::BinaryOperator;

/// The two kinds of symbol an expression can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// A single named number.
    Scalar,
    /// A named, integer-indexed sequence of numbers.
    Array,
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Array => write!(f, "array"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while parsing or evaluating a
/// validated expression.
///
/// All positions are byte offsets into the expression text.
pub enum EvalError {
    /// A name has no entry in the symbol table.
    UnknownSymbol {
        /// The name of the symbol.
        name:     String,
        /// Where the name was found.
        position: usize,
    },
    /// A scalar was subscripted, or an array was used without a subscript.
    KindMismatch {
        /// The name of the symbol.
        name:     String,
        /// The kind the expression used the name as.
        expected: SymbolKind,
        /// Where the name was found.
        position: usize,
    },
    /// An array subscript resolved outside `[0, size)`.
    IndexOutOfRange {
        /// The name of the array.
        name:     String,
        /// The subscript value before truncation.
        index:    f64,
        /// The array's declared size.
        size:     usize,
        /// Where the array name was found.
        position: usize,
    },
    /// The right operand of `/` evaluated to zero.
    DivisionByZero {
        /// Where the `/` operator was found.
        position: usize,
    },
    /// An operation produced a value outside the finite `f64` range.
    Overflow {
        /// The operator that overflowed.
        op:       BinaryOperator,
        /// Where the operator was found.
        position: usize,
    },
    /// A numeric literal could not be parsed.
    MalformedLiteral {
        /// The literal text.
        literal:  String,
        /// Where the literal was found.
        position: usize,
    },
    /// Found a token the grammar does not allow at this point.
    UnexpectedToken {
        /// The token text.
        token:    String,
        /// Where the token was found.
        position: usize,
    },
    /// The expression ended where an operand or bracket was expected.
    UnexpectedEnd {
        /// The length of the expression.
        position: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSymbol { name, position } => {
                write!(f, "Error at position {position}: Unknown symbol '{name}'.")
            },
            Self::KindMismatch { name,
                                 expected,
                                 position, } => write!(f,
                                                       "Error at position {position}: '{name}' is used as {expected} but is not one."),
            Self::IndexOutOfRange { name,
                                    index,
                                    size,
                                    position, } => write!(f,
                                                          "Error at position {position}: Index {index} is out of range for '{name}' of size {size}."),
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::Overflow { op, position } => {
                write!(f, "Error at position {position}: Result of '{op}' is out of range.")
            },
            Self::MalformedLiteral { literal, position } => {
                write!(f, "Error at position {position}: Malformed numeric literal '{literal}'.")
            },
            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at position {position}: Unexpected token: {token}.")
            },
            Self::UnexpectedEnd { position } => {
                write!(f, "Error at position {position}: Unexpected end of expression.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
