use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `2.0` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens, such as `'1,2,3'` or `"abc"`. A doubled quote
    /// inside the literal stands for one quote character.
    #[regex(r"'([^']|'')*'", parse_string)]
    #[regex(r#""([^"]|"")*""#, parse_string)]
    Str(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `null`
    #[token("null")]
    Null,
    /// `and` or `&&`
    #[token("and")]
    #[token("&&")]
    And,
    /// `or` or `||`
    #[token("or")]
    #[token("||")]
    Or,
    /// `not` or `!`
    #[token("not")]
    #[token("!")]
    Not,
    /// Identifier tokens; property or function names such as `rate` or `SUM`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `.`
    #[token(".")]
    Dot,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,
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
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Null => write!(f, "null"),
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::Not => write!(f, "not"),
            Self::Dot => write!(f, "."),
            Self::Comma => write!(f, ","),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Question => write!(f, "?"),
            Self::Colon => write!(f, ":"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Caret => write!(f, "^"),
            Self::EqualEqual => write!(f, "=="),
            Self::BangEqual => write!(f, "!="),
            Self::LessEqual => write!(f, "<="),
            Self::GreaterEqual => write!(f, ">="),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Splits expression text into tokens paired with their byte offsets.
///
/// # Errors
/// - `LiteralTooLarge` for integer literals that do not fit in `i64`.
/// - `UnterminatedString` for a quote that is never closed.
/// - `InvalidToken` for any other unrecognized input.
///
/// # Example
/// ```
/// use propexpr::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("SUM(a, '1,2')").unwrap();
///
/// assert_eq!(tokens[0], (Token::Identifier("SUM".to_string()), 0));
/// assert_eq!(tokens[4], (Token::Str("1,2".to_string()), 7));
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                let text = lexer.slice();
                return Err(if text.bytes().all(|b| b.is_ascii_digit()) {
                               ParseError::LiteralTooLarge { text: text.to_string(),
                                                             position }
                           } else if text.starts_with(['\'', '"']) {
                               ParseError::UnterminatedString { position }
                           } else {
                               ParseError::InvalidToken { text: text.to_string(),
                                                          position }
                           });
            },
        }
    }

    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
/// Strips the surrounding quotes of a string literal and collapses doubled
/// quotes into single ones.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let quote = &slice[..1];
    slice[1..slice.len() - 1].replace(&quote.repeat(2), quote)
}
