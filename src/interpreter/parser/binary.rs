use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ClassTable, ParseResult},
            unary::parse_unary,
        },
    },
};

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `or`. This is the lowest-precedence
/// level of the expression grammar.
///
/// Grammar: `or_expr := and_expr ("or" and_expr)*`
///
/// Note that `or` (like `and`) carries no short-circuit semantics in this
/// language: the evaluator always evaluates both operands.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `classes`: The classes declared so far.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::Or`.
pub fn parse_or<'a, I>(tokens: &mut Peekable<I>, classes: &ClassTable) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_and(tokens, classes)?;

    while let Some((Token::Or, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let right = parse_and(tokens, classes)?;

        left = Expr::BinaryOp { left: Box::new(left),
                                op: BinaryOperator::Or,
                                right: Box::new(right),
                                line };
    }

    Ok(left)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `and`. Precedence is above `or` and
/// below `not`.
///
/// Grammar: `and_expr := not_expr ("and" not_expr)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `classes`: The classes declared so far.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::And`.
pub fn parse_and<'a, I>(tokens: &mut Peekable<I>, classes: &ClassTable) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_not(tokens, classes)?;

    while let Some((Token::And, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let right = parse_not(tokens, classes)?;

        left = Expr::BinaryOp { left: Box::new(left),
                                op: BinaryOperator::And,
                                right: Box::new(right),
                                line };
    }

    Ok(left)
}

/// Parses logical NOT expressions.
///
/// `not` is right-associative, so `not not x` parses as `not (not x)`.
///
/// Grammar: `not_expr := "not" not_expr | cmp_expr`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `classes`: The classes declared so far.
///
/// # Returns
/// A `UnaryOp` node or the underlying comparison expression.
pub fn parse_not<'a, I>(tokens: &mut Peekable<I>, classes: &ClassTable) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Not, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let expr = parse_not(tokens, classes)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Not,
                           expr: Box::new(expr),
                           line })
    } else {
        parse_comparison(tokens, classes)
    }
}

/// Parses comparison expressions.
///
/// At most one comparison operator is allowed per expression, so chains
/// like `a < b < c` are a parse error at the second operator.
///
/// Grammar: `cmp_expr := add_expr [cmp_op add_expr]`
/// where `cmp_op` is one of `==`, `!=`, `<`, `>`, `<=`, `>=`.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `classes`: The classes declared so far.
///
/// # Returns
/// A `BinaryOp` comparison node, or the underlying additive expression.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, classes: &ClassTable) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_additive(tokens, classes)?;

    if let Some((token, line)) = tokens.peek()
       && let Some(op) = token_to_comparison(token)
    {
        let line = *line;
        tokens.next();

        let right = parse_additive(tokens, classes)?;

        return Ok(Expr::BinaryOp { left: Box::new(left),
                                   op,
                                   right: Box::new(right),
                                   line });
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators `+` and `-`.
///
/// Grammar: `add_expr := mul_expr (("+" | "-") mul_expr)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `classes`: The classes declared so far.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, classes: &ClassTable) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens, classes)?;

    loop {
        let op = match tokens.peek() {
            Some((Token::Plus, _)) => BinaryOperator::Add,
            Some((Token::Minus, _)) => BinaryOperator::Sub,
            _ => break,
        };
        let line = tokens.next().map_or(0, |(_, line)| *line);

        let right = parse_multiplicative(tokens, classes)?;

        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }

    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Handles left-associative binary operators `*` and `/`.
///
/// Grammar: `mul_expr := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `classes`: The classes declared so far.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   classes: &ClassTable)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens, classes)?;

    loop {
        let op = match tokens.peek() {
            Some((Token::Star, _)) => BinaryOperator::Mul,
            Some((Token::Slash, _)) => BinaryOperator::Div,
            _ => break,
        };
        let line = tokens.next().map_or(0, |(_, line)| *line);

        let right = parse_unary(tokens, classes)?;

        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }

    Ok(left)
}

/// Maps a token to its comparison operator, if it is one.
#[must_use]
pub const fn token_to_comparison(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Eq => Some(BinaryOperator::Equal),
        Token::NotEq => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessOrEq => Some(BinaryOperator::LessEqual),
        Token::GreaterOrEq => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}
