/// Binary operator parsing.
///
/// Implements the precedence ladder from `or` down through `and`, `not`,
/// comparison, additive and multiplicative expressions.
pub mod binary;

/// Block parsing.
///
/// Parses the `NEWLINE INDENT ... DEDENT` statement sequences that form the
/// bodies of `if` statements, methods and classes.
pub mod block;

/// Core parsing logic.
///
/// Contains the program entry point, the expression entry point, the table
/// of declared classes, and shared result types.
pub mod core;

/// Statement parsing.
///
/// Recognizes class definitions, method definitions, `print`, `if`,
/// `return`, assignments and expression statements.
pub mod statement;

/// Primary and unary expression parsing.
///
/// Handles literals, grouping, prefix `-`, dotted names, method-call
/// chains, instance construction and the `str(...)` primitive.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides helpers for expecting a specific token, reading identifiers and
/// parsing comma-separated lists.
pub mod utils;
