use crate::error::StructuralError;

/// The two bracket kinds an expression may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Paren,
    Square,
}

impl Kind {
    const fn of(byte: u8) -> Option<(Self, bool)> {
        match byte {
            b'(' => Some((Self::Paren, true)),
            b')' => Some((Self::Paren, false)),
            b'[' => Some((Self::Square, true)),
            b']' => Some((Self::Square, false)),
            _ => None,
        }
    }

    const fn open(self) -> char {
        match self {
            Self::Paren => '(',
            Self::Square => '[',
        }
    }

    const fn close(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Square => ']',
        }
    }
}

/// Pairs every opening bracket of an expression with its closing bracket.
///
/// Pairs are ordered by opening position, so outer and earlier brackets come
/// first. Positions are byte offsets into the expression text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BracketMap {
    pairs: Vec<(usize, usize)>,
}

impl BracketMap {
    /// All `(open, close)` pairs, ordered by opening position.
    #[must_use]
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Opening positions in left-to-right order.
    #[must_use]
    pub fn opening_positions(&self) -> Vec<usize> {
        self.pairs.iter().map(|&(open, _)| open).collect()
    }

    /// Closing positions, index-aligned with [`Self::opening_positions`].
    #[must_use]
    pub fn closing_positions(&self) -> Vec<usize> {
        self.pairs.iter().map(|&(_, close)| close).collect()
    }

    /// Returns the closing position matching the bracket opened at `open`.
    #[must_use]
    pub fn closing_for(&self, open: usize) -> Option<usize> {
        self.pairs
            .binary_search_by_key(&open, |&(o, _)| o)
            .ok()
            .map(|i| self.pairs[i].1)
    }

    /// Number of bracket pairs.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the expression contains no brackets.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Checks that `(...)` and `[...]` nesting is well formed and matches every
/// opening bracket with its closing bracket.
///
/// Validation runs in three steps:
/// 1. Running counters, one per kind. A counter going negative means a
///    closing bracket came before its opener; a counter left above zero means
///    an opener is never closed.
/// 2. Matching with one stack per kind, so each closer pairs with the nearest
///    unclaimed opener of its own kind.
/// 3. Loose nesting: a pair must not close while a bracket of the other kind
///    opened inside it is still open. Every accepted pair therefore encloses
///    only whole pairs, an even number of bracket characters.
///
/// # Errors
/// Returns a [`StructuralError`] describing the first violation. No partial
/// map is produced.
///
/// # Example
/// ```
/// use arrayexpr::interpreter::brackets::validate;
///
/// let map = validate("(a+(b-c))*(d+A[4])").unwrap();
/// assert_eq!(map.opening_positions(), vec![0, 3, 10, 14]);
/// assert_eq!(map.closing_positions(), vec![8, 7, 17, 16]);
///
/// assert!(validate("(([)])").is_err());
/// ```
pub fn validate(expr: &str) -> Result<BracketMap, StructuralError> {
    check_counts(expr)?;
    let pairs = match_pairs(expr)?;

    Ok(BracketMap { pairs })
}

fn check_counts(expr: &str) -> Result<(), StructuralError> {
    let mut parens = 0usize;
    let mut squares = 0usize;

    for (position, byte) in expr.bytes().enumerate() {
        let Some((kind, opening)) = Kind::of(byte) else {
            continue;
        };
        let counter = match kind {
            Kind::Paren => &mut parens,
            Kind::Square => &mut squares,
        };
        if opening {
            *counter += 1;
        } else if *counter == 0 {
            return Err(StructuralError::UnmatchedClose { bracket: kind.close(),
                                                         position });
        } else {
            *counter -= 1;
        }
    }

    if parens == 0 && squares == 0 {
        return Ok(());
    }

    // Report the innermost opener that is still open at the end.
    let mut open = Vec::new();
    for (position, byte) in expr.bytes().enumerate() {
        match Kind::of(byte) {
            Some((kind, true)) => open.push((kind, position)),
            Some((kind, false)) => {
                if let Some(i) = open.iter().rposition(|&(k, _)| k == kind) {
                    open.remove(i);
                }
            },
            None => {},
        }
    }
    let (kind, position) = open.pop().unwrap_or((Kind::Paren, expr.len()));

    Err(StructuralError::UnclosedOpen { bracket: kind.open(),
                                        position })
}

fn match_pairs(expr: &str) -> Result<Vec<(usize, usize)>, StructuralError> {
    let mut parens = Vec::new();
    let mut squares = Vec::new();
    let mut nesting: Vec<(Kind, usize)> = Vec::new();
    let mut pairs = Vec::new();

    for (position, byte) in expr.bytes().enumerate() {
        let Some((kind, opening)) = Kind::of(byte) else {
            continue;
        };
        let stack = match kind {
            Kind::Paren => &mut parens,
            Kind::Square => &mut squares,
        };
        if opening {
            stack.push(position);
            nesting.push((kind, position));
            continue;
        }

        let Some(open) = stack.pop() else {
            return Err(StructuralError::UnmatchedClose { bracket: kind.close(),
                                                         position });
        };
        match nesting.pop() {
            Some((top, _)) if top == kind => {},
            _ => {
                return Err(StructuralError::LooseNesting { open,
                                                           close: position });
            },
        }
        pairs.push((open, position));
    }

    pairs.sort_unstable();
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn documented_example_pairs() {
        let map = validate("(a+(b-c))*(d+A[4])").unwrap();
        assert_eq!(map.pairs(), &[(0, 8), (3, 7), (10, 17), (14, 16)]);
        assert_eq!(map.closing_for(10), Some(17));
        assert_eq!(map.closing_for(1), None);
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn no_brackets_gives_empty_map() {
        let map = validate("a+b*3").unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn empty_brackets_are_structurally_fine() {
        let map = validate("()[]").unwrap();
        assert_eq!(map.pairs(), &[(0, 1), (2, 3)]);
    }

    #[test]
    fn nested_subscripts_pair_innermost_first() {
        let map = validate("a-(b+A[B[2]])*d+3").unwrap();
        assert_eq!(map.pairs(), &[(2, 12), (6, 11), (8, 10)]);
    }

    #[rstest]
    #[case(")(", StructuralError::UnmatchedClose { bracket: ')', position: 0 })]
    #[case("a]", StructuralError::UnmatchedClose { bracket: ']', position: 1 })]
    #[case("[)", StructuralError::UnmatchedClose { bracket: ')', position: 1 })]
    #[case("(a", StructuralError::UnclosedOpen { bracket: '(', position: 0 })]
    #[case("([a]", StructuralError::UnclosedOpen { bracket: '(', position: 0 })]
    #[case("(([)])", StructuralError::LooseNesting { open: 1, close: 3 })]
    #[case("([)]", StructuralError::LooseNesting { open: 0, close: 2 })]
    #[case("(([[))]]", StructuralError::LooseNesting { open: 1, close: 4 })]
    fn rejects(#[case] expr: &str, #[case] expected: StructuralError) {
        assert_eq!(validate(expr), Err(expected));
    }

    #[rstest]
    #[case("(a[b]c)")]
    #[case("[(x)(y)]")]
    #[case("((A[B[1]]))[]")]
    fn accepted_pairs_enclose_an_even_count(#[case] expr: &str) {
        let map = validate(expr).unwrap();
        for &(open, close) in map.pairs() {
            let enclosed = expr[open + 1..close].bytes()
                                                .filter(|&b| Kind::of(b).is_some())
                                                .count();
            assert_eq!(enclosed % 2, 0, "pair {open}..{close} of '{expr}'");
        }
    }
}
