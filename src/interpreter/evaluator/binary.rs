/// Comparison evaluation.
///
/// Implements the `equal` and `less` primitives and derives the remaining
/// four comparison operators from them.
pub mod comparison;

/// Arithmetic evaluation and binary dispatch.
///
/// Routes each binary operator to its handler and implements `+`, `-`,
/// `*` and `/`, including the `__add__` hook.
pub mod core;

/// Logical operator evaluation.
///
/// Implements `and` and `or` over operand truthiness. Both operands are
/// always evaluated before these run; the language has no short-circuit.
pub mod logic;
