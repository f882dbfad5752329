use std::rc::Rc;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            method::ADD_METHOD,
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// Both operands have already been evaluated by the caller (this is
    /// what makes `and`/`or` eager). The operation is routed to the
    /// arithmetic, comparison or logic handler depending on the operator.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    pub fn eval_binary(&mut self,
                       op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };

        match op {
            Add => self.eval_add(left, right, line),

            Sub | Mul | Div => Self::eval_numeric(op, left, right, line),

            Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => {
                self.eval_comparison(op, left, right, line)
            },

            And | Or => Ok(Self::eval_logic(op, left, right)),
        }
    }

    /// Evaluates `+`.
    ///
    /// Numbers add (checked), strings concatenate, and an instance on the
    /// left delegates to its `__add__` hook when one is defined with a
    /// single parameter. Every other combination is a type error.
    fn eval_add(&mut self, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => a.checked_add(*b)
                                                     .map(Value::Number)
                                                     .ok_or(RuntimeError::Overflow { line }),

            (Value::Str(a), Value::Str(b)) => {
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(a);
                joined.push_str(b);
                Ok(Value::Str(Rc::new(joined)))
            },

            (Value::Instance(instance), _)
                if instance.borrow().class().has_method(ADD_METHOD, 1) =>
            {
                let instance = Rc::clone(instance);
                self.call_method(&instance, ADD_METHOD, vec![right.clone()], line)
            },

            _ => Err(RuntimeError::TypeError { details: format!("cannot add {} and {}",
                                                                left.type_name(),
                                                                right.type_name()),
                                               line }),
        }
    }

    /// Evaluates `-`, `*` and `/`, which are defined on numbers only.
    ///
    /// All arithmetic is checked; division by zero is its own error, and
    /// division truncates toward zero.
    fn eval_numeric(op: BinaryOperator,
                    left: &Value,
                    right: &Value,
                    line: usize)
                    -> EvalResult<Value> {
        let (Value::Number(a), Value::Number(b)) = (left, right) else {
            return Err(RuntimeError::TypeError { details: format!("cannot apply '{op}' to {} and {}",
                                                                  left.type_name(),
                                                                  right.type_name()),
                                                 line });
        };

        let result = match op {
            BinaryOperator::Sub => a.checked_sub(*b),
            BinaryOperator::Mul => a.checked_mul(*b),
            BinaryOperator::Div => {
                if *b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                a.checked_div(*b)
            },
            _ => unreachable!("eval_numeric only handles '-', '*' and '/'"),
        };

        result.map(Value::Number)
              .ok_or(RuntimeError::Overflow { line })
    }
}
