use std::{collections::HashMap, iter::Peekable, rc::Rc};

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_or, statement::parse_statement},
        value::class::Class,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The classes declared so far, visible to the rest of the parse.
///
/// Class names are the one kind of name the parser resolves: a `class`
/// statement registers the freshly built class here, a `(Parent)` clause
/// and a `Name(...)` constructor call look names up. All other names are left
/// for the evaluator.
#[derive(Default)]
pub struct ClassTable {
    classes: HashMap<String, Rc<Class>>,
}

impl ClassTable {
    /// Looks up a declared class by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Rc<Class>> {
        self.classes.get(name)
    }

    /// Registers a declared class, replacing any previous one of the same
    /// name (re-declaration rebinds, as assignment does).
    pub fn insert(&mut self, name: String, class: Rc<Class>) {
        self.classes.insert(name, class);
    }
}

/// Parses a complete program.
///
/// This is the entry point for parsing. It consumes statements until the
/// `Eof` token and returns them as the program's top-level statement
/// sequence.
///
/// Grammar: `program := statement* EOF`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The top-level statements, in source order.
///
/// # Errors
/// Propagates any `ParseError` from statement parsing; on error no partial
/// tree is returned.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut classes = ClassTable::default();
    let mut statements = Vec::new();

    while let Some((token, _)) = tokens.peek() {
        if *token == Token::Eof {
            break;
        }
        statements.push(parse_statement(tokens, &mut classes)?);
    }

    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical `or`, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := or_expr`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `classes`: The classes declared so far, for constructor calls.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               classes: &ClassTable)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_or(tokens, classes)
}
