use std::rc::Rc;

use crate::interpreter::{
    evaluator::{
        core::{Context, EvalResult},
        method::STR_METHOD,
    },
    value::core::Value,
};

/// Computes the truthiness of a value.
///
/// `None` is false; a number is true when nonzero; a string is true when
/// non-empty; a boolean is itself. Classes and class instances are always
/// false.
///
/// # Example
/// ```
/// use mython::interpreter::{evaluator::utils::is_true, value::core::Value};
///
/// assert!(is_true(&Value::Number(7)));
/// assert!(!is_true(&Value::Number(0)));
/// assert!(!is_true(&Value::None));
/// assert!(is_true(&Value::from("x")));
/// ```
#[must_use]
pub fn is_true(value: &Value) -> bool {
    match value {
        Value::None => false,
        Value::Number(n) => *n != 0,
        Value::Str(s) => !s.is_empty(),
        Value::Bool(b) => *b,
        Value::Class(_) | Value::Instance(_) => false,
    }
}

impl Context<'_> {
    /// Renders a value the way `print` displays it.
    ///
    /// `None` renders as `None`, booleans as `True`/`False`, numbers in
    /// decimal, strings raw (no quoting), and a class as `Class <name>`.
    /// A class instance renders through its `__str__` hook when one is
    /// defined with zero parameters (besides `self`), recursively
    /// rendering the hook's result; without the hook, the instance renders
    /// as its address.
    ///
    /// This renderer backs both the `print` statement and the `str(...)`
    /// primitive.
    ///
    /// # Parameters
    /// - `value`: The value to render.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The rendered text.
    ///
    /// # Errors
    /// Propagates any `RuntimeError` raised by a `__str__` body.
    pub fn render(&mut self, value: &Value, line: usize) -> EvalResult<String> {
        match value {
            Value::None => Ok("None".to_string()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(if *b { "True" } else { "False" }.to_string()),
            Value::Str(s) => Ok(s.as_ref().clone()),
            Value::Class(class) => Ok(format!("Class {}", class.name())),
            Value::Instance(instance) => {
                let class = Rc::clone(instance.borrow().class());
                if class.has_method(STR_METHOD, 0) {
                    let rendered = self.call_method(instance, STR_METHOD, Vec::new(), line)?;
                    self.render(&rendered, line)
                } else {
                    Ok(format!("{:p}", Rc::as_ptr(instance)))
                }
            },
        }
    }
}
