/// The evaluator module executes syntax-tree nodes and produces effects.
///
/// The evaluator walks the tree, resolves names against closures, performs
/// arithmetic and logical operations, dispatches methods along the
/// inheritance chain, and writes `print` output to the context's sink. It
/// is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates statements and expressions against a closure and a context.
/// - Implements method dispatch, instance construction and the special
///   hooks (`__init__`, `__str__`, `__add__`, `__eq__`, `__lt__`).
/// - Carries the non-local `return` signal to the method-call boundary.
/// - Reports runtime errors such as unknown names or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a finite token stream:
/// literals, identifiers, keywords and operators, plus the synthetic
/// `Newline`, `Indent` and `Dedent` tokens derived from the two-space
/// indentation discipline, closed by a single `Eof`. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the character stream into tokens with source lines.
/// - Measures indentation and emits the matching Indent/Dedent tokens.
/// - Reports lexical errors for malformed input.
pub mod lexer;
/// The parser module builds the executable tree from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs the statement tree that the evaluator walks. Class names are
/// resolved here (a class must be declared before it is inherited from or
/// instantiated) while all other names are left to runtime resolution.
///
/// # Responsibilities
/// - Converts tokens into structured statement and expression nodes.
/// - Validates the grammar, block structure and class-body rules.
/// - Builds class values and embeds them in the tree.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the unified polymorphic value: `None`, numbers,
/// strings, booleans, classes and class instances. It also holds the
/// class and instance types themselves. Instances are shared and mutable;
/// everything else behaves as an immutable value.
///
/// # Responsibilities
/// - Defines the `Value` enum and typed accessors.
/// - Implements classes, method lookup and the instance field table.
/// - Breaks the `self` reference cycle by resolving `self` on read.
pub mod value;
