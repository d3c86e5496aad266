use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are byte offsets into the expression text.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error at position {position}: Unexpected token '{token}', {cause}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// What the parser was looking for instead.
        cause:    String,
        /// Where the token starts.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error: Unexpected end of input, {cause}.")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        cause: String,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at position {position}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// Position of the unmatched `(`.
        position: usize,
    },
    /// The lexer could not recognize a piece of input.
    #[error("Error at position {position}: Unrecognized input '{text}'.")]
    InvalidToken {
        /// The unrecognized text.
        text:     String,
        /// Where the text starts.
        position: usize,
    },
    /// A string literal was opened but never closed.
    #[error("Error at position {position}: Unterminated string literal.")]
    UnterminatedString {
        /// Position of the opening quote.
        position: usize,
    },
    /// Found extra tokens after parsing should have completed.
    #[error("Error at position {position}: Extra tokens after expression. Check your input: {token}")]
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// The input contained nothing to parse.
    #[error("Error: Expression is empty.")]
    EmptyExpression,
    /// The expression nests deeper than the parser allows.
    #[error("Error at position {position}: Expression nests deeper than {limit} levels.")]
    NestingTooDeep {
        /// The nesting limit.
        limit:    usize,
        /// Where the level past the limit opens.
        position: usize,
    },
    /// A literal value was too large to be represented safely.
    #[error("Error at position {position}: Literal {text} is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        text:     String,
        /// Where the literal starts.
        position: usize,
    },
}
