use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Closure, Context, EvalResult, Flow},
        value::{class::Class, core::Value, instance::Instance},
    },
};

/// The constructor hook, called on a fresh instance when its arity matches
/// the construction arguments.
pub const INIT_METHOD: &str = "__init__";
/// The rendering hook used by `print` and `str(...)`.
pub const STR_METHOD: &str = "__str__";
/// The addition hook tried when the left operand of `+` is an instance.
pub const ADD_METHOD: &str = "__add__";
/// The equality hook tried when the left operand of `==` is an instance.
pub const EQ_METHOD: &str = "__eq__";
/// The ordering hook tried when the left operand of `<` is an instance.
pub const LT_METHOD: &str = "__lt__";

impl Context<'_> {
    /// Calls a method on an instance.
    ///
    /// The method is resolved by walking the inheritance chain from the
    /// instance's class upward and taking the first name match; its arity
    /// is then checked against the supplied arguments. A fresh call
    /// closure is built holding `self` and the positional parameters;
    /// nothing else is visible inside the body, in particular not the
    /// caller's scope.
    ///
    /// A `return` anywhere in the body surfaces here and becomes the call
    /// result; a body that runs to completion yields `None`.
    ///
    /// # Parameters
    /// - `instance`: The receiver.
    /// - `name`: The method name.
    /// - `args`: Evaluated arguments, in order (excluding `self`).
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The method's result.
    ///
    /// # Errors
    /// - `NoSuchMethod` when no class in the chain defines `name`.
    /// - `MethodArityMismatch` when the first method found by name takes a
    ///   different number of arguments (the search does not continue to
    ///   ancestors with a matching arity).
    pub fn call_method(&mut self,
                       instance: &Rc<RefCell<Instance>>,
                       name: &str,
                       args: Vec<Value>,
                       line: usize)
                       -> EvalResult<Value> {
        let class = Rc::clone(instance.borrow().class());
        let method = class.method(name)
                          .ok_or_else(|| RuntimeError::NoSuchMethod { name: name.to_string(),
                                                                      line })?;
        if method.formal_params.len() != args.len() {
            return Err(RuntimeError::MethodArityMismatch { name: name.to_string(),
                                                           expected: method.formal_params.len(),
                                                           found: args.len(),
                                                           line });
        }

        let mut call_closure = Closure::new();
        call_closure.insert("self".to_string(), Value::Instance(Rc::clone(instance)));
        for (param, arg) in method.formal_params.iter().zip(args) {
            call_closure.insert(param.clone(), arg);
        }

        match self.eval_block(&method.body, &mut call_closure)? {
            Flow::Return(value) => Ok(value),
            Flow::Value(_) => Ok(Value::None),
        }
    }

    /// Constructs a new instance of a class.
    ///
    /// A fresh, empty instance is created on every evaluation. When the
    /// class chain defines `__init__` with an arity matching the argument
    /// count, the arguments are evaluated and the constructor is called on
    /// the new instance (its result is discarded); otherwise construction
    /// silently skips initialization and the argument expressions are not
    /// evaluated at all.
    ///
    /// # Parameters
    /// - `class`: The class to instantiate.
    /// - `args`: Unevaluated constructor argument expressions.
    /// - `closure`: The scope the arguments are evaluated in.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// A shared reference to the new instance.
    pub fn instantiate(&mut self,
                       class: &Rc<Class>,
                       args: &[Expr],
                       closure: &Closure,
                       line: usize)
                       -> EvalResult<Value> {
        let instance = Instance::new(Rc::clone(class));

        if class.has_method(INIT_METHOD, args.len()) {
            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                values.push(self.eval(arg, closure)?);
            }
            self.call_method(&instance, INIT_METHOD, values, line)?;
        }

        Ok(Value::Instance(instance))
    }
}
