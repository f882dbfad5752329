use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{class::Class, instance::Instance},
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, method returns, and conditional evaluations. Cloning a value
/// is cheap: numbers and booleans are copied, strings share their buffer,
/// and classes and instances share the underlying object, so mutation of an
/// instance is visible through every clone of its value.
#[derive(Debug, Clone)]
pub enum Value {
    /// The singleton absence of a value, spelled `None` in source.
    None,
    /// A numeric value (64 bit signed integer).
    Number(i64),
    /// An immutable string value.
    Str(Rc<String>),
    /// A boolean value (`True` or `False`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and the
    /// logical operators `and`, `or` and `not`.
    Bool(bool),
    /// A class value. Classes are bound to their name when a `class`
    /// statement is evaluated and may be stored in closures like any other
    /// value.
    Class(Rc<Class>),
    /// A class instance: a shared, mutable bag of named fields.
    Instance(Rc<RefCell<Instance>>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(Rc::new(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::new(v.to_string()))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::Str(Rc::new(s.clone())),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::None => Self::None,
        }
    }
}

impl Value {
    /// Converts the value to an `i64`, or returns an error if not a number.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(i64)`: The numeric value.
    /// - `Err(RuntimeError::TypeError)`: If the value is not a number.
    pub fn as_number(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Number(n) => Ok(*n),
            other => Err(RuntimeError::TypeError { details: format!("expected a number, found {}",
                                                                    other.type_name()),
                                                   line }),
        }
    }

    /// Converts the value to `bool`, or returns an error if not a boolean.
    ///
    /// Used for the results of the `__eq__` and `__lt__` hooks, which must
    /// produce booleans. Truthiness of arbitrary values is a separate
    /// concept, provided by [`is_true`](crate::interpreter::evaluator::utils::is_true).
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(RuntimeError::ExpectedBoolean)`: If not a boolean.
    pub fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { line }),
        }
    }

    /// Converts the value to a shared instance handle, or returns an error.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(Rc<RefCell<Instance>>)`: The instance handle.
    /// - `Err(RuntimeError::NotAnInstance)`: If the value is anything else.
    pub fn as_instance(&self, line: usize) -> EvalResult<Rc<RefCell<Instance>>> {
        match self {
            Self::Instance(instance) => Ok(Rc::clone(instance)),
            other => Err(RuntimeError::NotAnInstance { details: other.type_name().to_string(),
                                                       line }),
        }
    }

    /// Returns `true` if the value is [`None`](Value::None).
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if the value is [`Instance`](Value::Instance).
    #[must_use]
    pub const fn is_instance(&self) -> bool {
        matches!(self, Self::Instance(..))
    }

    /// Returns a short human-readable name for the value's variant, used in
    /// error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Number(_) => "a number",
            Self::Str(_) => "a string",
            Self::Bool(_) => "a boolean",
            Self::Class(_) => "a class",
            Self::Instance(_) => "a class instance",
        }
    }
}
