use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{descend, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!` / `not`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`] and then applies any postfix member accesses via
/// [`parse_postfix`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "!" | "not") unary
///            | primary postfix*
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Nesting level of the expression.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression possibly followed by postfixes.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Minus, position)) => Some((UnaryOperator::Negate, *position)),
        Some((Token::Not, position)) => Some((UnaryOperator::Not, *position)),
        _ => None,
    };

    if let Some((op, position)) = op {
        tokens.next();
        let expr = parse_unary(tokens, descend(depth, position)?)?;
        Ok(Expr::UnaryOp { op,
                           expr: Box::new(expr),
                           position })
    } else {
        let primary = parse_primary(tokens, depth)?;
        parse_postfix(tokens, primary, depth)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric, string, boolean and `null` literals
/// - identifiers
/// - function calls
/// - parenthesized expressions
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier_or_function
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, position)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { cause: "expected an expression".to_string() });
    };
    let position = *position;

    match token {
        Token::Real(n) => Ok(literal((*n).into(), position)),
        Token::Integer(n) => Ok(literal((*n).into(), position)),
        Token::Bool(b) => Ok(literal((*b).into(), position)),
        Token::Str(s) => Ok(literal(s.as_str().into(), position)),
        Token::Null => Ok(literal(LiteralValue::Null, position)),
        Token::LParen => parse_grouping(tokens, position, depth),
        Token::Identifier(name) => parse_identifier_or_function(tokens, name, position, depth),
        tok => {
            Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                              cause: "expected an expression".to_string(),
                                              position })
        },
    }
}

/// Parses member accesses applied to an expression.
///
/// This function is called after parsing a primary expression and folds in
/// every trailing `.name` or `.name(args)`:
///
/// ```text
///        limits.max
///        limits.SUM(1, 2)
///        a.b.c
/// ```
///
/// Grammar:
/// ```text
///     postfix := primary
///              | postfix "." IDENT
///              | postfix "." IDENT "(" args ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator after a primary expression.
/// - `node`: The expression the accesses apply to.
/// - `depth`: Nesting level of `node`; each access adds one.
///
/// # Returns
/// An [`Expr::Property`] / [`Expr::MethodCall`] chain, or `node` unchanged.
///
/// # Errors
/// Returns a `ParseError` if a `.` is not followed by an identifier or if a
/// method argument list is malformed.
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, mut node: Expr, mut depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    while let Some((Token::Dot, _)) = tokens.peek() {
        tokens.next();
        let (name, position) = parse_identifier(tokens, "expected a property name after '.'")?;
        depth = descend(depth, position)?;

        node = if let Some((Token::LParen, _)) = tokens.peek() {
            tokens.next();
            let arguments = parse_comma_separated(tokens, |t| parse_expression(t, depth), &Token::RParen)?;
            Expr::MethodCall { target: Box::new(node),
                               name,
                               arguments,
                               position }
        } else {
            Expr::Property { target: Box::new(node),
                             name,
                             position }
        };
    }
    Ok(node)
}

const fn literal(value: LiteralValue, position: usize) -> Expr {
    Expr::Literal { value, position }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The opening parenthesis has already been consumed. The enclosed
/// expression is parsed and then a closing `)` is required. Failure to find
/// it yields `ParseError::ExpectedClosingParen` pointing at the opening one.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, open: usize, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens, descend(depth, open)?)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { position: open }),
    }
}

/// Parses an identifier or function call.
///
/// Supported forms:
///
/// - identifier
/// - identifier(arg1, arg2, ...)
///
/// The identifier token has already been consumed.
/// If the next token is `(`, a function-call expression is parsed.
/// Otherwise, it is parsed as a property reference on the root.
///
/// # Returns
/// - [`Expr::FunctionCall`] if followed by parentheses,
/// - [`Expr::Identifier`] otherwise.
///
/// # Errors
/// Returns a `ParseError` if function-call arguments fail to parse or the
/// closing `)` is missing.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>,
                                       name: &str,
                                       position: usize,
                                       depth: usize)
                                       -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let depth = descend(depth, position)?;
            let arguments = parse_comma_separated(tokens, |t| parse_expression(t, depth), &Token::RParen)?;
            Ok(Expr::FunctionCall { name: name.to_string(),
                                    arguments,
                                    position })
        },
        _ => Ok(Expr::Identifier { name: name.to_string(),
                                   position }),
    }
}
