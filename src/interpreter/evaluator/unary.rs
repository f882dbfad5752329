use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::is_true,
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a unary operator applied to a value.
    ///
    /// `not` negates the operand's truthiness and works on every value.
    /// Negation requires a number; overflow (negating the minimum integer)
    /// is reported rather than wrapped.
    ///
    /// # Parameters
    /// - `op`: The unary operator.
    /// - `value`: The evaluated operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the result.
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Not => Ok(Value::Bool(!is_true(value))),
            UnaryOperator::Negate => value.as_number(line)?
                                          .checked_neg()
                                          .map(Value::Number)
                                          .ok_or(RuntimeError::Overflow { line }),
        }
    }
}
