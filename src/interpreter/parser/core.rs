use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{
            binary::parse_logical_or,
            utils::{descend, expect_token},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply sub-expressions may nest below the root.
///
/// Parentheses, prefix operators, call arguments, ternary branches, `^`
/// operands, member accesses and every operator in a chain each count as one
/// level.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parses a complete expression text.
///
/// The text is tokenized, parsed from the lowest precedence level, and then
/// checked for leftover tokens. Nothing is evaluated.
///
/// # Errors
/// - `EmptyExpression` if the text contains no tokens.
/// - `UnexpectedTrailingTokens` if input remains after a full expression.
/// - `NestingTooDeep` past [`MAX_NESTING_DEPTH`] levels.
/// - Any lexing or parsing error from the lower levels.
///
/// # Example
/// ```
/// use propexpr::{
///     ast::{BinaryOperator, Expr, LiteralValue},
///     interpreter::parser::core::parse_source,
/// };
///
/// let expr = parse_source("1 + x").unwrap();
///
/// assert_eq!(expr,
///            Expr::BinaryOp { left:     Box::new(Expr::Literal { value:    LiteralValue::Integer(1),
///                                                                position: 0, }),
///                             op:       BinaryOperator::Add,
///                             right:    Box::new(Expr::Identifier { name:     "x".to_string(),
///                                                                   position: 4, }),
///                             position: 2, });
/// ```
pub fn parse_source(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    match iter.next() {
        None => Ok(expr),
        Some((token, position)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                       position: *position, })
        },
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, the ternary conditional, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := ternary`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `depth`: Nesting level of the expression, `0` at the root.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_ternary(tokens, depth)
}

/// Parses an optional ternary conditional.
///
/// Syntax:
/// ```text
///     <condition> ? <then_expr> : <else_expr>
/// ```
/// Both branches are full expressions, so ternaries nest to the right:
/// `a ? b : c ? d : e` parses as `a ? b : (c ? d : e)`.
///
/// # Errors
/// - `UnexpectedToken` / `UnexpectedEndOfInput` if the `:` is missing.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_ternary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_logical_or(tokens, depth)?;

    let Some((Token::Question, position)) = tokens.peek() else {
        return Ok(condition);
    };
    tokens.next();
    let depth = descend(depth, *position)?;

    let then_branch = parse_expression(tokens, depth)?;
    expect_token(tokens, &Token::Colon, "expected ':' in conditional expression")?;
    let else_branch = parse_expression(tokens, depth)?;

    Ok(Expr::Ternary { condition:   Box::new(condition),
                       then_branch: Box::new(then_branch),
                       else_branch: Box::new(else_branch),
                       position:    *position, })
}
