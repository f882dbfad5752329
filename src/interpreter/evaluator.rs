/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions:
/// arithmetic, comparisons, and the eager logical operators.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context wrapping the output sink, the closure
/// type, the non-local-return flow type, and the statement and expression
/// dispatch.
pub mod core;

/// Method dispatch and instance construction.
///
/// Implements method lookup along the inheritance chain, the call closure
/// discipline, `__init__` invocation, and the names of the special method
/// hooks.
pub mod method;

/// Unary operator evaluation logic.
///
/// Implements logical `not` and arithmetic negation.
pub mod unary;

/// Utility functions for evaluation.
///
/// Provides truthiness and the value renderer shared by `print` and
/// `str(...)`.
pub mod utils;
