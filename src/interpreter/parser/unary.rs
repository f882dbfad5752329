use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ClassTable, ParseResult, parse_expression},
            utils::{parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation), which is
/// right-associative: `--x` parses as `-(-x)`. Logical `not` sits higher in
/// the precedence ladder and is handled by
/// [`parse_not`](crate::interpreter::parser::binary::parse_not).
///
/// If no operator is present, the function delegates to [`parse_primary`]
/// and then applies postfix `.field` / `.method(...)` chains via
/// [`parse_postfix`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary postfix*
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `classes`: The classes declared so far.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression possibly followed by
/// postfixes.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, classes: &ClassTable) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let expr = parse_unary(tokens, classes)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           line })
    } else {
        let primary = parse_primary(tokens, classes)?;
        parse_postfix(tokens, classes, primary)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric, string, boolean and `None` literals
/// - names (possibly extended to dotted paths and calls by the postfix
///   pass)
/// - instance construction `ClassName(...)`
/// - the stringification primitive `str(...)`
/// - parenthesized expressions
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER | STRING | TRUE | FALSE | NONE
///              | identifier_or_call
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary.
/// - `classes`: The classes declared so far.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>,
                                   classes: &ClassTable)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Number(n), line) => {
            let expr = Expr::Literal { value: LiteralValue::Number(*n),
                                       line:  *line, };
            tokens.next();
            Ok(expr)
        },
        (Token::Str(s), line) => {
            let expr = Expr::Literal { value: LiteralValue::Str(s.clone()),
                                       line:  *line, };
            tokens.next();
            Ok(expr)
        },
        (Token::True, line) => {
            let expr = Expr::Literal { value: LiteralValue::Bool(true),
                                       line:  *line, };
            tokens.next();
            Ok(expr)
        },
        (Token::False, line) => {
            let expr = Expr::Literal { value: LiteralValue::Bool(false),
                                       line:  *line, };
            tokens.next();
            Ok(expr)
        },
        (Token::None, line) => {
            let expr = Expr::Literal { value: LiteralValue::None,
                                       line:  *line, };
            tokens.next();
            Ok(expr)
        },
        (Token::LParen, _) => parse_grouping(tokens, classes),
        (Token::Id(_), _) => parse_identifier_expression(tokens, classes),
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                         line:  *line, }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form: `( expression )`. The inner expression is returned as-is,
/// with no wrapper node.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
/// - `classes`: The classes declared so far.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, classes: &ClassTable) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::LParen, line)) => *line,
        _ => unreachable!("caller peeked LParen"),
    };
    let expr = parse_expression(tokens, classes)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("expected ')', found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses an expression that starts with an identifier.
///
/// Supported forms:
///
/// - `name`: a variable reference,
/// - `str(expr)`: the stringification primitive,
/// - `ClassName(args...)`: construction of a new instance of a previously
///   declared class.
///
/// A call whose callee is neither `str` nor a declared class is rejected:
/// the language has no free functions, so nothing else is callable without
/// a receiver.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `classes`: The classes declared so far.
///
/// # Returns
/// - [`Expr::Stringify`] for `str(...)`,
/// - [`Expr::NewInstance`] for a declared class,
/// - [`Expr::Variable`] otherwise.
fn parse_identifier_expression<'a, I>(tokens: &mut Peekable<I>,
                                      classes: &ClassTable)
                                      -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Id(name), line)) => (name.clone(), *line),
        _ => unreachable!("caller peeked Id"),
    };

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let mut args = parse_comma_separated(tokens,
                                                 |tokens| parse_expression(tokens, classes),
                                                 &Token::RParen)?;

            if name == "str" {
                if args.len() != 1 {
                    return Err(ParseError::UnexpectedToken { token: format!("str() takes exactly one argument, found {}",
                                                                            args.len()),
                                                             line });
                }
                return Ok(Expr::Stringify { expr: Box::new(args.remove(0)),
                                            line });
            }

            match classes.get(&name) {
                Some(class) => Ok(Expr::NewInstance { class: class.clone(),
                                                      args,
                                                      line }),
                None => Err(ParseError::UnknownClass { name, line }),
            }
        },
        _ => Ok(Expr::Variable { path: vec![name],
                                 line }),
    }
}

/// Parses postfix `.` chains applied to an expression.
///
/// Two constructs are folded in, in a single left-to-right pass:
///
/// 1. **Method calls**: `expr.name(args...)` becomes a
///    [`Expr::MethodCall`] whose receiver is everything parsed so far, so
///    chains like `Stack().push(1).push(2)` nest naturally.
/// 2. **Field access**: `name.field` extends a plain [`Expr::Variable`]
///    path. Field access is only available on dotted names; reading a
///    field directly off a call result is not part of the grammar.
///
/// # Parameters
/// - `tokens`: Token iterator after a primary expression.
/// - `classes`: The classes declared so far.
/// - `node`: The expression to which postfix operators will be applied.
///
/// # Returns
/// An updated [`Expr`] with all postfix accesses folded in.
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>,
                        classes: &ClassTable,
                        mut node: Expr)
                        -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    while let Some((Token::Dot, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let name = parse_identifier(tokens)?;

        if let Some((Token::LParen, _)) = tokens.peek() {
            tokens.next();
            let args = parse_comma_separated(tokens,
                                             |tokens| parse_expression(tokens, classes),
                                             &Token::RParen)?;
            node = Expr::MethodCall { object: Box::new(node),
                                      method: name,
                                      args,
                                      line };
            continue;
        }

        match &mut node {
            Expr::Variable { path, .. } => path.push(name),
            _ => {
                return Err(ParseError::UnexpectedToken { token: format!("expected '(' after '.{name}' (fields can only be read off names)"),
                                                         line });
            },
        }
    }

    Ok(node)
}
