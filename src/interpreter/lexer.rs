use std::ops::Range;

use logos::Logos;

use crate::error::EvalError;

/// Represents a lexical token of an expression.
///
/// The same tokens drive symbol extraction and evaluation, so both stages
/// agree on where names and literals begin and end. Spaces and tabs are
/// delimiters and produce no token.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.5` or `.5`.
    ///
    /// On equal-length matches a literal wins over [`Token::Word`], so a name
    /// made only of digits is always a literal.
    #[regex(r"[0-9]*\.?[0-9]+", |lex| lex.slice().to_string(), priority = 3)]
    Number(String),
    /// Names of scalar or array symbols: any run of non-delimiter
    /// characters, such as `x`, `varx` or `2abc`.
    #[regex(r"[^ \t\r\n*+\-/()\[\]]+", |lex| lex.slice().to_string())]
    Word(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(s) | Self::Word(s) => write!(f, "{s}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
        }
    }
}

/// A token together with the byte range it covers in the source text.
pub type Spanned = (Token, Range<usize>);

/// Tokenizes an expression.
///
/// # Errors
/// Returns [`EvalError::UnexpectedToken`] for a character that cannot start
/// any token, such as a line break.
///
/// # Example
/// ```
/// use arrayexpr::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("A[2] + x").unwrap();
/// assert_eq!(tokens[0], (Token::Word("A".to_string()), 0..1));
/// assert_eq!(tokens[2], (Token::Number("2".to_string()), 2..3));
/// assert_eq!(tokens[5], (Token::Word("x".to_string()), 7..8));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, EvalError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span()));
        } else {
            return Err(EvalError::UnexpectedToken { token:    lexer.slice().to_string(),
                                                    position: lexer.span().start, });
        }
    }

    Ok(tokens)
}

/// Returns `true` if `text` is a complete numeric literal.
///
/// This is the same pattern the lexer uses for [`Token::Number`]: digits, an
/// optional decimal point, and at least one digit after it.
#[must_use]
pub fn is_numeric_literal(text: &str) -> bool {
    let mut lexer = Token::lexer(text);
    matches!(lexer.next(), Some(Ok(Token::Number(_)))) && lexer.next().is_none()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|(tok, _)| tok).collect()
    }

    #[test]
    fn delimiters_split_words() {
        assert_eq!(kinds("varx+vary*varz[(a)]"),
                   vec![Token::Word("varx".into()),
                        Token::Plus,
                        Token::Word("vary".into()),
                        Token::Star,
                        Token::Word("varz".into()),
                        Token::LBracket,
                        Token::LParen,
                        Token::Word("a".into()),
                        Token::RParen,
                        Token::RBracket]);
    }

    #[test]
    fn whitespace_is_skipped_but_spans_stay_exact() {
        let tokens = tokenize(" a \t- 10").unwrap();
        assert_eq!(tokens,
                   vec![(Token::Word("a".into()), 1..2),
                        (Token::Minus, 4..5),
                        (Token::Number("10".into()), 6..8)]);
    }

    #[rstest]
    #[case("3", true)]
    #[case("3.25", true)]
    #[case(".5", true)]
    #[case("007", true)]
    #[case("3.", false)]
    #[case("2abc", false)]
    #[case("1.2.3", false)]
    #[case("x1", false)]
    #[case("", false)]
    fn numeric_literal_pattern(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_numeric_literal(text), expected);
    }

    #[test]
    fn longest_match_prefers_words() {
        assert_eq!(kinds("2abc"), vec![Token::Word("2abc".into())]);
        assert_eq!(kinds("3."), vec![Token::Word("3.".into())]);
        assert_eq!(kinds("3.5"), vec![Token::Number("3.5".into())]);
    }

    #[test]
    fn line_break_is_rejected() {
        let err = tokenize("a\nb").unwrap_err();
        assert_eq!(err,
                   EvalError::UnexpectedToken { token:    "\n".into(),
                                                position: 1, });
    }
}
