use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{core::Context, utils::is_true},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a logical operation between two values.
    ///
    /// The operands are interpreted through truthiness, not cast to
    /// booleans, so any pair of values is acceptable. Both operands were
    /// evaluated before this runs: `and` and `or` never short-circuit, and
    /// side effects on the right-hand side happen even when the left-hand
    /// side already determines the result.
    ///
    /// # Parameters
    /// - `op`: The logical operator (`and` or `or`).
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The boolean result.
    #[must_use]
    pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        match op {
            BinaryOperator::And => Value::Bool(is_true(left) && is_true(right)),
            BinaryOperator::Or => Value::Bool(is_true(left) || is_true(right)),
            _ => unreachable!("eval_logic only handles 'and' and 'or'"),
        }
    }
}
