use std::rc::Rc;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            method::{EQ_METHOD, LT_METHOD},
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Only `==` and `<` are primitive. The rest derive from them the way
    /// the runtime defines them:
    ///
    /// - `!=` is `!(==)`,
    /// - `>`  is `!(<) && !(==)`,
    /// - `<=` is `!(>)`,
    /// - `>=` is `!(<)`.
    ///
    /// The derivations run both primitives where their definition needs
    /// both, so an error from either one propagates; `a > b` can fail on
    /// the equality check even after the ordering check succeeded.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    pub fn eval_comparison(&mut self,
                           op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let result = match op {
            BinaryOperator::Equal => self.equal(left, right, line)?,
            BinaryOperator::NotEqual => !self.equal(left, right, line)?,
            BinaryOperator::Less => self.less(left, right, line)?,
            BinaryOperator::GreaterEqual => !self.less(left, right, line)?,
            BinaryOperator::Greater => self.greater(left, right, line)?,
            BinaryOperator::LessEqual => !self.greater(left, right, line)?,
            _ => unreachable!("eval_comparison only handles comparison operators"),
        };

        Ok(Value::Bool(result))
    }

    /// The equality primitive.
    ///
    /// `None` equals only `None`; comparing `None` with anything else is
    /// an error, not `false`. Numbers, strings and booleans compare by
    /// value. An instance on the left delegates to its `__eq__` hook when
    /// one is defined with a single parameter, and the hook must return a
    /// boolean. Everything else cannot be compared.
    pub fn equal(&mut self, left: &Value, right: &Value, line: usize) -> EvalResult<bool> {
        match (left, right) {
            (Value::None, Value::None) => Ok(true),
            (Value::None, _) | (_, Value::None) => {
                Err(RuntimeError::CannotCompare { details: "None with a non-None value".to_string(),
                                                  line })
            },

            (Value::Number(a), Value::Number(b)) => Ok(a == b),
            (Value::Str(a), Value::Str(b)) => Ok(a == b),
            (Value::Bool(a), Value::Bool(b)) => Ok(a == b),

            (Value::Instance(instance), _)
                if instance.borrow().class().has_method(EQ_METHOD, 1) =>
            {
                let instance = Rc::clone(instance);
                self.call_method(&instance, EQ_METHOD, vec![right.clone()], line)?
                    .as_bool(line)
            },

            _ => Err(RuntimeError::CannotCompare { details: format!("{} with {} for equality",
                                                                    left.type_name(),
                                                                    right.type_name()),
                                                   line }),
        }
    }

    /// The ordering primitive.
    ///
    /// Both operands must be non-`None`. Numbers, strings and booleans
    /// order naturally (`False < True`). An instance on the left delegates
    /// to its `__lt__` hook when one is defined with a single parameter,
    /// and the hook must return a boolean. Everything else cannot be
    /// ordered.
    pub fn less(&mut self, left: &Value, right: &Value, line: usize) -> EvalResult<bool> {
        match (left, right) {
            (Value::None, _) | (_, Value::None) => {
                Err(RuntimeError::CannotCompare { details: "None for ordering".to_string(),
                                                  line })
            },

            (Value::Number(a), Value::Number(b)) => Ok(a < b),
            (Value::Str(a), Value::Str(b)) => Ok(a < b),
            (Value::Bool(a), Value::Bool(b)) => Ok(a < b),

            (Value::Instance(instance), _)
                if instance.borrow().class().has_method(LT_METHOD, 1) =>
            {
                let instance = Rc::clone(instance);
                self.call_method(&instance, LT_METHOD, vec![right.clone()], line)?
                    .as_bool(line)
            },

            _ => Err(RuntimeError::CannotCompare { details: format!("{} with {} for ordering",
                                                                    left.type_name(),
                                                                    right.type_name()),
                                                   line }),
        }
    }

    /// Strictly-greater, as the runtime defines it: not less and not equal.
    fn greater(&mut self, left: &Value, right: &Value, line: usize) -> EvalResult<bool> {
        Ok(!self.less(left, right, line)? && !self.equal(left, right, line)?)
    }
}
