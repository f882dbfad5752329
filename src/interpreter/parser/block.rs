use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ClassTable, ParseResult},
            statement::parse_statement,
        },
    },
};

/// Parses an indented statement block.
///
/// A block follows the `:` of an `if`, `else` or `def` header and consists
/// of a newline, an indent, at least one statement, and the matching
/// dedent:
///
/// Grammar: `block := NEWLINE INDENT statement+ DEDENT`
///
/// The lexer only emits `Indent` for lines that carry content, so a block
/// reaching this function is never empty; a header with nothing indented
/// after it fails here with `ExpectedIndentedBlock`.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `:` of the block header.
/// - `classes`: The classes declared so far.
///
/// # Returns
/// The statements of the block, in source order.
///
/// # Errors
/// Returns a `ParseError` if the newline or indent is missing, or if any
/// inner statement fails to parse.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                          classes: &mut ClassTable)
                          -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::Newline, line)) => *line,
        Some((_, line)) => return Err(ParseError::ExpectedIndentedBlock { line: *line }),
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    match tokens.next() {
        Some((Token::Indent, _)) => {},
        Some((_, line)) => return Err(ParseError::ExpectedIndentedBlock { line: *line }),
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    }

    let mut statements = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::Dedent, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens, classes)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }

    Ok(statements)
}
