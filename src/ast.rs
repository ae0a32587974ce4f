/// The binary arithmetic operators.
///
/// `Mul` and `Div` bind tighter than `Add` and `Sub`; operators of equal
/// precedence associate to the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Returns `true` for `*` and `/`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}

/// An abstract syntax tree node representing an expression.
///
/// Parenthesized groups do not get their own node: the parser returns the
/// inner expression directly, so grouping is encoded purely by tree shape.
/// Every variant records the byte offset it was parsed from.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal's value.
        value:    f64,
        /// Byte offset in the source text.
        position: usize,
    },
    /// Reference to a scalar symbol.
    Scalar {
        /// Name of the symbol.
        name:     String,
        /// Byte offset in the source text.
        position: usize,
    },
    /// An array element, `name[index]`.
    ArrayIndex {
        /// Name of the array symbol.
        name:     String,
        /// The subscript expression.
        index:    Box<Self>,
        /// Byte offset of the array name.
        position: usize,
    },
    /// A binary operation such as `a + b`.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
}

impl Expr {
    /// Returns the byte offset this node was parsed from.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. }
            | Self::Scalar { position, .. }
            | Self::ArrayIndex { position, .. }
            | Self::Binary { position, .. } => *position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_of_each_node() {
        let index = Expr::Number { value:    1.0,
                                   position: 4, };
        let array = Expr::ArrayIndex { name:     "A".into(),
                                       index:    Box::new(index),
                                       position: 2, };
        assert_eq!(array.position(), 2);

        let sum = Expr::Binary { left:     Box::new(Expr::Scalar { name:     "x".into(),
                                                                   position: 0, }),
                                 op:       BinaryOperator::Add,
                                 right:    Box::new(array),
                                 position: 1, };
        assert_eq!(sum.position(), 1);
    }
}
