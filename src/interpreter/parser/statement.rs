use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Expr, LiteralValue, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ClassTable, ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, parse_identifier},
        },
        value::class::{Class, Method},
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a class definition,
/// - a `print` statement,
/// - an `if` statement with an optional `else`,
/// - a `return` statement,
/// - an assignment to a name or a dotted field,
/// - an expression used as a statement.
///
/// Simple statements consume the `Newline` that terminates their line;
/// block statements (`class`, `if`) end at the `Dedent` of their last
/// block. A `def` outside of a class body is rejected here, since the
/// language has no free functions.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `classes`: The classes declared so far; extended by class definitions.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              classes: &mut ClassTable)
                              -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Class, _)) => parse_class_definition(tokens, classes),
        Some((Token::Print, _)) => parse_print(tokens, classes),
        Some((Token::If, _)) => parse_if(tokens, classes),
        Some((Token::Return, _)) => parse_return(tokens, classes),
        Some((Token::Def, line)) => Err(ParseError::DefOutsideClass { line: *line }),
        Some(_) => parse_simple(tokens, classes),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a class definition.
///
/// Syntax:
/// ```text
///     class Name:
///         def method(self, ...): ...
///
///     class Name(Parent):
///         ...
/// ```
/// The body may contain only `def` statements, and every method's first
/// formal parameter must be `self` (it is stripped before the method is
/// stored). The parent, when present, is resolved against the classes
/// declared so far; inheriting from an unknown class is a parse error. The
/// finished class is registered in the class table so that later code can
/// construct instances and declare subclasses.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `class` keyword.
/// - `classes`: The classes declared so far.
///
/// # Returns
/// A [`Statement::ClassDefinition`] carrying the built class.
fn parse_class_definition<'a, I>(tokens: &mut Peekable<I>,
                                 classes: &mut ClassTable)
                                 -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::Class)?;
    let name = parse_identifier(tokens)?;

    let parent = if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let parent_name = parse_identifier(tokens)?;
        expect(tokens, &Token::RParen)?;
        match classes.get(&parent_name) {
            Some(parent) => Some(Rc::clone(parent)),
            None => {
                return Err(ParseError::UnknownParentClass { name: parent_name,
                                                            line });
            },
        }
    } else {
        None
    };

    expect(tokens, &Token::Colon)?;

    match tokens.next() {
        Some((Token::Newline, _)) => {},
        Some((_, line)) => return Err(ParseError::ExpectedIndentedBlock { line: *line }),
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    }
    match tokens.next() {
        Some((Token::Indent, _)) => {},
        Some((_, line)) => return Err(ParseError::ExpectedIndentedBlock { line: *line }),
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    }

    let mut methods = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::Dedent, _)) => {
                tokens.next();
                break;
            },
            Some((Token::Def, _)) => methods.push(parse_method(tokens, classes)?),
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken { token: format!("expected 'def' in class body, found {tok:?}"),
                                                         line:  *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }

    let class = Rc::new(Class::new(name.clone(), methods, parent));
    classes.insert(name, Rc::clone(&class));

    Ok(Statement::ClassDefinition { class, line })
}

/// Parses one method definition inside a class body.
///
/// Syntax: `def name(self, param, ...): block`
///
/// # Errors
/// Returns `MethodWithoutSelf` when the formal parameter list is empty or
/// does not start with `self`.
fn parse_method<'a, I>(tokens: &mut Peekable<I>, classes: &mut ClassTable) -> ParseResult<Method>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::Def)?;
    let name = parse_identifier(tokens)?;

    expect(tokens, &Token::LParen)?;
    let mut params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;
    if params.first().map(String::as_str) != Some("self") {
        return Err(ParseError::MethodWithoutSelf { method: name, line });
    }
    let formal_params = params.split_off(1);

    expect(tokens, &Token::Colon)?;
    let body = parse_block(tokens, classes)?;

    Ok(Method { name,
                formal_params,
                body })
}

/// Parses a `print` statement.
///
/// Syntax: `print expr (, expr)*`, or a bare `print`, which emits an
/// empty line. The arguments are printed space-separated and terminated by
/// a newline.
fn parse_print<'a, I>(tokens: &mut Peekable<I>, classes: &mut ClassTable) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::Print)?;

    let mut args = Vec::new();
    if !matches!(tokens.peek(), Some((Token::Newline, _))) {
        loop {
            args.push(parse_expression(tokens, classes)?);
            if let Some((Token::Comma, _)) = tokens.peek() {
                tokens.next();
            } else {
                break;
            }
        }
    }

    expect(tokens, &Token::Newline)?;

    Ok(Statement::Print { args, line })
}

/// Parses an `if` statement with an optional `else` block.
///
/// Syntax:
/// ```text
///     if condition:
///         ...
///     else:
///         ...
/// ```
fn parse_if<'a, I>(tokens: &mut Peekable<I>, classes: &mut ClassTable) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::If)?;

    let condition = parse_expression(tokens, classes)?;
    expect(tokens, &Token::Colon)?;
    let then_body = parse_block(tokens, classes)?;

    let else_body = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        expect(tokens, &Token::Colon)?;
        Some(parse_block(tokens, classes)?)
    } else {
        None
    };

    Ok(Statement::IfElse { condition,
                           then_body,
                           else_body,
                           line })
}

/// Parses a `return` statement.
///
/// Syntax: `return expr`, or a bare `return`, which returns `None`.
fn parse_return<'a, I>(tokens: &mut Peekable<I>, classes: &mut ClassTable) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::Return)?;

    let value = if matches!(tokens.peek(), Some((Token::Newline, _))) {
        Expr::Literal { value: LiteralValue::None,
                        line }
    } else {
        parse_expression(tokens, classes)?
    };

    expect(tokens, &Token::Newline)?;

    Ok(Statement::Return { value, line })
}

/// Parses an assignment or expression statement.
///
/// The line is parsed as an expression first; if an `=` follows, the
/// expression must be a plain or dotted name and becomes the assignment
/// target:
///
/// - `name = expr` binds `name` in the current closure,
/// - `a.b.field = expr` resolves `a.b` to an instance and stores into its
///   field table.
///
/// Anything else on the left of `=` is an `InvalidAssignmentTarget`.
fn parse_simple<'a, I>(tokens: &mut Peekable<I>, classes: &mut ClassTable) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens, classes)?;
    let line = expr.line_number();

    let statement = if let Some((Token::Assign, _)) = tokens.peek() {
        tokens.next();
        let value = parse_expression(tokens, classes)?;

        match expr {
            Expr::Variable { mut path, line } if path.len() == 1 => {
                Statement::Assignment { name: path.remove(0),
                                        value,
                                        line }
            },
            Expr::Variable { mut path, line } => {
                let field = path.pop().unwrap_or_default();
                Statement::FieldAssignment { object: path,
                                             field,
                                             value,
                                             line }
            },
            _ => return Err(ParseError::InvalidAssignmentTarget { line }),
        }
    } else {
        Statement::Expression { expr, line }
    };

    expect(tokens, &Token::Newline)?;

    Ok(statement)
}
