//! # mython
//!
//! mython is a tree-walking interpreter for Mython, a small
//! dynamically-typed, indentation-structured object-oriented language.
//! It lexes, parses and evaluates programs with classes, single
//! inheritance, reference-shared mutable instances and the special method
//! hooks `__init__`, `__str__`, `__add__`, `__eq__` and `__lt__`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::interpreter::{
    evaluator::core::{Closure, Context},
    lexer::tokenize,
    parser::core::parse_program,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent
/// the syntactic structure of source code as a tree. The tree is built by
/// the parser and walked by the evaluator; class-construction nodes embed
/// the runtime class values the parser resolved.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines the three failure kinds the interpreter can
/// surface. Each carries a human-readable message with the source line;
/// all three abort execution at the top-level entry; the interpreted
/// program has no way to catch them.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexer, parser, runtime).
/// - Attaches line numbers and detailed messages for context.
/// - Integrates with the standard error-handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the value model
/// and error handling to provide a complete runtime for Mython programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Provides the entry point for interpreting programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a Mython program against an output stream.
///
/// The source is tokenized, parsed into the executable tree, and evaluated
/// against a fresh global closure and a context wrapping `output`. All
/// `print` output of the program goes to `output`; nothing is returned
/// beyond success or failure.
///
/// # Errors
/// Returns the first `LexerError`, `ParseError` or `RuntimeError`
/// encountered; execution stops at that point.
///
/// # Examples
/// ```
/// use mython::run;
///
/// let mut output = Vec::new();
/// run("x = 1 + 2 * 3\nprint x", &mut output).unwrap();
/// assert_eq!(output, b"7\n");
///
/// // An unknown name is a runtime error.
/// let mut output = Vec::new();
/// assert!(run("print y", &mut output).is_err());
/// ```
pub fn run(source: &str, output: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;

    let mut cursor = tokens.iter().peekable();
    let program = parse_program(&mut cursor)?;

    let mut globals = Closure::new();
    let mut context = Context::new(output);
    context.eval_program(&program, &mut globals)?;

    Ok(())
}
