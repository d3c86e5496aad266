use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary, utils::descend},
    },
};

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `or` / `||`.
/// This is the lowest-precedence binary operator.
///
/// Grammar: `logical_or := logical_and ("or" logical_and)*`
///
/// Each operator in the chain nests the tree one level deeper.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `depth`: Nesting level of the chain.
///
/// # Returns
/// A binary expression tree with `BinaryOperator::Or` nodes.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_logical_and(tokens, depth)?;

    while let Some((Token::Or, position)) = tokens.peek() {
        tokens.next();
        depth = descend(depth, *position)?;
        let right = parse_logical_and(tokens, depth)?;
        left = Expr::BinaryOp { left:     Box::new(left),
                                op:       BinaryOperator::Or,
                                right:    Box::new(right),
                                position: *position, };
    }

    Ok(left)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `and` / `&&`.
/// Precedence is higher than OR.
///
/// Grammar: `logical_and := comparison ("and" comparison)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_comparison(tokens, depth)?;

    while let Some((Token::And, position)) = tokens.peek() {
        tokens.next();
        depth = descend(depth, *position)?;
        let right = parse_comparison(tokens, depth)?;
        left = Expr::BinaryOp { left:     Box::new(left),
                                op:       BinaryOperator::And,
                                right:    Box::new(right),
                                position: *position, };
    }

    Ok(left)
}

/// Parses relational and equality operators.
///
/// This parser handles all comparison operators:
/// `<`, `>`, `<=`, `>=`, `==`, `!=`.
///
/// Chains are left-associative, so `a < b == true` compares the boolean
/// result of `a < b` with `true`.
///
/// Grammar: `comparison := additive (("==" | "!=" | "<" | "<=" | ">" | ">=")
/// additive)*`
///
/// # Parameters
/// - `tokens`: Token stream wrapped in a `Peekable`.
///
/// # Returns
/// A possibly nested `Expr::BinaryOp` tree.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_additive(tokens, depth)?;

    while let Some((token, position)) = tokens.peek() {
        let op = match token_to_binary_operator(token) {
            Some(op) if is_comparison_op(op) => op,
            _ => break,
        };
        tokens.next();

        depth = descend(depth, *position)?;
        let right = parse_additive(tokens, depth)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                position: *position };
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            depth = descend(depth, *position)?;
            let right = parse_multiplicative(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: *position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`.
///
/// The rule is: `multiplicative := exponent (("*" | "/" | "%") exponent)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_exponent(tokens, depth)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            tokens.next();
            depth = descend(depth, *position)?;
            let right = parse_exponent(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: *position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`.
/// Unary operators bind tighter, so `-2 ^ 2` is `(-2) ^ 2`.
///
/// The rule is: `exponent := unary ("^" exponent)?`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_unary(tokens, depth)?;

    let Some((Token::Caret, position)) = tokens.peek() else {
        return Ok(base);
    };
    tokens.next();

    let exponent = parse_exponent(tokens, descend(depth, *position)?)?;
    Ok(Expr::BinaryOp { left:     Box::new(base),
                        op:       BinaryOperator::Pow,
                        right:    Box::new(exponent),
                        position: *position, })
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`, `%`, `^`, comparison operators and logical
/// connectives). Returns `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use propexpr::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Not), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}

const fn is_comparison_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual
             | BinaryOperator::Equal
             | BinaryOperator::NotEqual)
}
