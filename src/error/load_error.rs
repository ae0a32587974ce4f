#[derive(Debug)]
/// Represents all errors that can occur while loading symbol value records.
///
/// Line numbers are 1-based.
pub enum LoadError {
    /// The value source could not be read.
    Io {
        /// The underlying I/O failure.
        source: std::io::Error,
        /// The line being read when the failure happened.
        line:   usize,
    },
    /// A record named a symbol but supplied no value or size.
    MissingValue {
        /// The name of the symbol.
        name: String,
        /// The source line of the record.
        line: usize,
    },
    /// A scalar record carried more than one value.
    TrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line of the record.
        line:  usize,
    },
    /// A value was not a number.
    InvalidNumber {
        /// The offending text.
        token: String,
        /// The source line of the record.
        line:  usize,
    },
    /// An array size or index was not a non-negative integer.
    InvalidSize {
        /// The offending text.
        token: String,
        /// The source line of the record.
        line:  usize,
    },
    /// An `(index,value)` pair was malformed.
    InvalidPair {
        /// The offending text.
        token: String,
        /// The source line of the record.
        line:  usize,
    },
    /// A pair's index lies outside the declared array size.
    IndexOutOfRange {
        /// The name of the array.
        name:  String,
        /// The requested index.
        index: usize,
        /// The declared size.
        size:  usize,
        /// The source line of the record.
        line:  usize,
    },
    /// Storage for an array's declared size could not be allocated.
    ArrayTooLarge {
        /// The name of the array.
        name: String,
        /// The declared size.
        size: usize,
        /// The source line of the record.
        line: usize,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { source, line } => {
                write!(f, "Error on line {line}: Failed to read values: {source}.")
            },
            Self::MissingValue { name, line } => {
                write!(f, "Error on line {line}: No value given for '{name}'.")
            },
            Self::TrailingTokens { token, line } => {
                write!(f, "Error on line {line}: Extra tokens after scalar value: {token}")
            },
            Self::InvalidNumber { token, line } => {
                write!(f, "Error on line {line}: '{token}' is not a number.")
            },
            Self::InvalidSize { token, line } => {
                write!(f, "Error on line {line}: '{token}' is not a non-negative integer.")
            },
            Self::InvalidPair { token, line } => write!(f,
                                                        "Error on line {line}: Expected an '(index,value)' pair, found '{token}'."),
            Self::IndexOutOfRange { name,
                                    index,
                                    size,
                                    line, } => write!(f,
                                                      "Error on line {line}: Index {index} is out of range for '{name}' of size {size}."),
            Self::ArrayTooLarge { name, size, line } => {
                write!(f, "Error on line {line}: Cannot allocate {size} elements for '{name}'.")
            },
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
