#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents every way bracket nesting can be rejected.
///
/// All positions are byte offsets into the expression text.
pub enum StructuralError {
    /// A closing bracket appeared before any opening bracket of its kind.
    UnmatchedClose {
        /// The closing bracket, `)` or `]`.
        bracket:  char,
        /// Where the bracket was found.
        position: usize,
    },
    /// The expression ended while a bracket was still open.
    UnclosedOpen {
        /// The opening bracket, `(` or `[`.
        bracket:  char,
        /// Position of the innermost bracket left open.
        position: usize,
    },
    /// Two bracket pairs of different kinds cross each other, as in `([)]`.
    LooseNesting {
        /// Position of the opening bracket of the offending pair.
        open:  usize,
        /// Position of the closing bracket of the offending pair.
        close: usize,
    },
}

impl std::fmt::Display for StructuralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedClose { bracket, position } => write!(f,
                                                                 "Error at position {position}: Closing '{bracket}' has no matching opening bracket."),
            Self::UnclosedOpen { bracket, position } => {
                write!(f, "Error at position {position}: Opening '{bracket}' is never closed.")
            },
            Self::LooseNesting { open, close } => write!(f,
                                                         "Error at position {open}: Bracket pair {open}..{close} crosses a bracket of another kind."),
        }
    }
}

impl std::error::Error for StructuralError {}
