use std::io::BufRead;

use crate::{
    error::{LoadError, SymbolKind},
    interpreter::symbols::SymbolTable,
    util::num::{parse_index, parse_value},
};

/// Loads symbol values from line-oriented records.
///
/// Each non-blank line is one record, split on whitespace:
///
/// ```text
///     <name> <value>                                  scalar
///     <name> <size> (<index>,<value>) (<index>,<value>) ...   array
/// ```
///
/// The record form is chosen by the kind the name already has in `symbols`.
/// An array record allocates the array to `size`; slots without a pair stay
/// zero. Storage is reserved fallibly, so a size the allocator cannot satisfy
/// is a [`LoadError::ArrayTooLarge`]. Records naming a symbol that is not in
/// the table are skipped.
///
/// # Errors
/// Returns a [`LoadError`] carrying the 1-based line number of the first
/// record that cannot be read or parsed. Records before it have already been
/// applied.
///
/// # Example
/// ```
/// use arrayexpr::interpreter::{extractor::extract, loader::load_values};
///
/// let mut table = extract("a+A[1]");
/// load_values("a 2\nA 3 (1,5) (2,6)\nunused 9\n".as_bytes(), &mut table).unwrap();
/// assert_eq!(table.scalar("a").unwrap().value, 2.0);
/// assert_eq!(table.array("A").unwrap().values(), &[0.0, 5.0, 6.0]);
/// ```
pub fn load_values(reader: impl BufRead, symbols: &mut SymbolTable) -> Result<(), LoadError> {
    for (i, line) in reader.lines().enumerate() {
        let line_number = i + 1;
        let record = line.map_err(|source| LoadError::Io { source,
                                                           line: line_number })?;
        load_record(&record, line_number, symbols)?;
    }
    Ok(())
}

/// Loads symbol values from a string of records.
///
/// See [`load_values`].
pub fn load_values_str(source: &str, symbols: &mut SymbolTable) -> Result<(), LoadError> {
    load_values(source.as_bytes(), symbols)
}

fn load_record(record: &str, line: usize, symbols: &mut SymbolTable) -> Result<(), LoadError> {
    let record = record.trim();
    let Some((name, rest)) = split_first_token(record) else {
        return Ok(());
    };

    match symbols.kind_of(name) {
        Some(SymbolKind::Scalar) => {
            let value = load_scalar(name, rest, line)?;
            let stored = symbols.set_scalar(name, value);
            debug_assert!(stored, "scalar record for '{name}' was not stored");
        },
        Some(SymbolKind::Array) => {
            let (size, pairs) = load_array(name, rest, line)?;
            let stored = symbols.set_array_values(name, size, pairs)
                                .map_err(|_| LoadError::ArrayTooLarge { name: name.to_string(),
                                                                        size,
                                                                        line })?;
            debug_assert!(stored, "array record for '{name}' was not fully stored");
        },
        None => {},
    }

    Ok(())
}

fn load_scalar(name: &str, rest: &str, line: usize) -> Result<f64, LoadError> {
    let Some((token, trailing)) = split_first_token(rest) else {
        return Err(LoadError::MissingValue { name: name.to_string(),
                                             line });
    };
    if let Some((extra, _)) = split_first_token(trailing) {
        return Err(LoadError::TrailingTokens { token: extra.to_string(),
                                               line });
    }
    parse_value(token).ok_or_else(|| LoadError::InvalidNumber { token: token.to_string(),
                                                                line })
}

fn load_array(name: &str, rest: &str, line: usize) -> Result<(usize, Vec<(usize, f64)>), LoadError> {
    let Some((size_token, mut rest)) = split_first_token(rest) else {
        return Err(LoadError::MissingValue { name: name.to_string(),
                                             line });
    };
    let size = parse_index(size_token).ok_or_else(|| LoadError::InvalidSize { token:
                                                                                  size_token.to_string(),
                                                                              line })?;

    let mut pairs = Vec::new();
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }
        let (pair, remaining) = split_pair(rest, line)?;
        let (index, value) = parse_pair(pair, line)?;
        if index >= size {
            return Err(LoadError::IndexOutOfRange { name: name.to_string(),
                                                    index,
                                                    size,
                                                    line });
        }
        pairs.push((index, value));
        rest = remaining;
    }

    Ok((size, pairs))
}

/// Splits `(index,value)` off the front of `rest`, returning the text between
/// the parentheses and what follows the closing one.
fn split_pair(rest: &str, line: usize) -> Result<(&str, &str), LoadError> {
    let invalid = || LoadError::InvalidPair { token: rest.split_whitespace()
                                                         .next()
                                                         .unwrap_or(rest)
                                                         .to_string(),
                                              line };

    let inner = rest.strip_prefix('(').ok_or_else(invalid)?;
    let close = inner.find(')').ok_or_else(invalid)?;
    Ok((&inner[..close], &inner[close + 1..]))
}

fn parse_pair(pair: &str, line: usize) -> Result<(usize, f64), LoadError> {
    let Some((index, value)) = pair.split_once(',') else {
        return Err(LoadError::InvalidPair { token: format!("({pair})"),
                                            line });
    };
    let index = parse_index(index).ok_or_else(|| LoadError::InvalidSize { token: index.trim()
                                                                                      .to_string(),
                                                                          line })?;
    let value = parse_value(value).ok_or_else(|| LoadError::InvalidNumber { token: value.trim()
                                                                                        .to_string(),
                                                                            line })?;
    Ok((index, value))
}

fn split_first_token(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }
    Some(text.split_once(char::is_whitespace).unwrap_or((text, "")))
}
