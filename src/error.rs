/// Lexing errors.
///
/// Defines all error types that can occur while turning source text into
/// tokens: malformed indentation, unterminated strings, unknown escape
/// sequences, unreadable numbers, and stray characters.
pub mod lexer_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree
/// from the token stream: grammar violations, unknown parent classes,
/// methods without `self`, and invalid assignment targets.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unknown names, bad dotted access, missing methods, wrong
/// arity, type-mismatched operators, and division by zero.
pub mod runtime_error;

pub use lexer_error::LexerError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
