use std::{collections::HashMap, io::Write, rc::Rc};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::utils::is_true,
        value::{core::Value, instance::field_of},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A single scope: a mapping from names to values.
///
/// Two tiers exist at runtime: the global closure of the program's top
/// level, and one fresh closure per method invocation (holding `self` and
/// the parameters). Nested blocks such as `if` bodies share the enclosing
/// closure; there is no block scoping.
pub type Closure = HashMap<String, Value>;

/// The outcome of evaluating a statement or block.
///
/// `Return` is the non-local return signal: it is raised by a `return`
/// statement, propagates unchanged through enclosing blocks, and is
/// converted into the method's result exactly at the call boundary. It is
/// deliberately distinct from `RuntimeError` so that control flow is never
/// confused with failure.
#[derive(Debug)]
pub enum Flow {
    /// Evaluation ran to completion and produced this value.
    Value(Value),
    /// A `return` statement fired; the value travels to the enclosing
    /// method call.
    Return(Value),
}

/// Stores the runtime evaluation context.
///
/// The context carries the interpreter's ambient state: the output sink
/// that `print` writes to. It holds no per-call state; closures are passed
/// alongside it through every evaluation.
pub struct Context<'a> {
    output: &'a mut dyn Write,
}

impl<'a> Context<'a> {
    /// Creates a new evaluation context writing program output to `output`.
    pub fn new(output: &'a mut dyn Write) -> Self {
        Self { output }
    }

    /// Evaluates a sequence of top-level statements.
    ///
    /// Each statement is executed in order against the global closure. A
    /// `return` surfacing here has no method body to catch it and is
    /// reported as a runtime error.
    ///
    /// # Parameters
    /// - `statements`: The program's top-level statements.
    /// - `closure`: The global closure.
    ///
    /// # Errors
    /// Propagates any `RuntimeError` raised during evaluation.
    pub fn eval_program(&mut self,
                        statements: &[Statement],
                        closure: &mut Closure)
                        -> EvalResult<()> {
        for statement in statements {
            if let Flow::Return(_) = self.eval_statement(statement, closure)? {
                return Err(RuntimeError::ReturnOutsideMethod { line: statement.line_number(), });
            }
        }
        Ok(())
    }

    /// Evaluates a sequence of statements as a block.
    ///
    /// Statements run in order and share the given closure. The block's
    /// own result is `None`; a `return` inside the block stops it and
    /// propagates outward.
    ///
    /// # Parameters
    /// - `statements`: Statements inside the block.
    /// - `closure`: The enclosing closure, shared (no block scoping).
    ///
    /// # Returns
    /// `Flow::Value(Value::None)` on normal completion, or the propagating
    /// `Flow::Return`.
    pub fn eval_block(&mut self,
                      statements: &[Statement],
                      closure: &mut Closure)
                      -> EvalResult<Flow> {
        for statement in statements {
            if let Flow::Return(value) = self.eval_statement(statement, closure)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Value(Value::None))
    }

    /// Evaluates a single statement.
    ///
    /// Handles assignments, field assignments, `print`, `return`, class
    /// definitions, conditionals and plain expression statements.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    /// - `closure`: The current scope.
    ///
    /// # Returns
    /// The statement's flow: a value, or a propagating return.
    pub fn eval_statement(&mut self,
                          statement: &Statement,
                          closure: &mut Closure)
                          -> EvalResult<Flow> {
        match statement {
            Statement::Expression { expr, .. } => Ok(Flow::Value(self.eval(expr, closure)?)),

            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value, closure)?;
                closure.insert(name.clone(), value.clone());
                Ok(Flow::Value(value))
            },

            Statement::FieldAssignment { object,
                                         field,
                                         value,
                                         line, } => {
                let target = Self::eval_variable(object, closure, *line)?;
                let instance = target.as_instance(*line)?;
                let value = self.eval(value, closure)?;
                instance.borrow_mut().set_field(field.clone(), value.clone());
                Ok(Flow::Value(value))
            },

            Statement::Print { args, line } => {
                let mut rendered = Vec::with_capacity(args.len());
                for arg in args {
                    let value = self.eval(arg, closure)?;
                    rendered.push(self.render(&value, *line)?);
                }
                writeln!(self.output, "{}", rendered.join(" "))
                    .map_err(|_| RuntimeError::OutputFailed { line: *line })?;
                Ok(Flow::Value(Value::None))
            },

            Statement::Return { value, .. } => {
                let value = self.eval(value, closure)?;
                Ok(Flow::Return(value))
            },

            Statement::ClassDefinition { class, .. } => {
                let value = Value::Class(Rc::clone(class));
                closure.insert(class.name().to_string(), value.clone());
                Ok(Flow::Value(value))
            },

            Statement::IfElse { condition,
                                then_body,
                                else_body,
                                .. } => {
                let condition = self.eval(condition, closure)?;
                if is_true(&condition) {
                    self.eval_block(then_body, closure)
                } else if let Some(else_body) = else_body {
                    self.eval_block(else_body, closure)
                } else {
                    Ok(Flow::Value(Value::None))
                }
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches on the expression variant: literals, dotted
    /// names, unary and binary operations, method calls, instance
    /// construction and stringification.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `closure`: The current scope, read for name resolution.
    ///
    /// # Returns
    /// The computed [`Value`].
    pub fn eval(&mut self, expr: &Expr, closure: &Closure) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),

            Expr::Variable { path, line } => Self::eval_variable(path, closure, *line),

            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr, closure)?;
                Self::eval_unary(*op, &value, *line)
            },

            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left, closure)?;
                let right = self.eval(right, closure)?;
                self.eval_binary(*op, &left, &right, *line)
            },

            Expr::MethodCall { object,
                               method,
                               args,
                               line, } => {
                let receiver = self.eval(object, closure)?;
                let instance = receiver.as_instance(*line)?;
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.eval(arg, closure)?);
                }
                self.call_method(&instance, method, values, *line)
            },

            Expr::NewInstance { class, args, line } => {
                self.instantiate(class, args, closure, *line)
            },

            Expr::Stringify { expr, line } => {
                let value = self.eval(expr, closure)?;
                Ok(Value::from(self.render(&value, *line)?))
            },
        }
    }

    /// Resolves a plain or dotted name against a closure.
    ///
    /// The first segment is looked up in the closure. Every further
    /// segment requires the value so far to be a class instance and reads
    /// one of its fields; the name `self` resolves to the instance itself.
    ///
    /// # Parameters
    /// - `path`: The name segments, outermost first. Never empty.
    /// - `closure`: The scope to resolve the first segment in.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The resolved value.
    ///
    /// # Errors
    /// - `UnknownVariable` if the first segment is unbound.
    /// - `NotAnInstance` if a dotted step lands on a non-instance.
    /// - `UnknownField` if an instance lacks the requested field.
    pub fn eval_variable(path: &[String], closure: &Closure, line: usize) -> EvalResult<Value> {
        let (first, rest) = match path.split_first() {
            Some(parts) => parts,
            None => unreachable!("the parser never builds an empty path"),
        };

        let mut value =
            closure.get(first)
                   .cloned()
                   .ok_or_else(|| RuntimeError::UnknownVariable { name: first.clone(),
                                                                  line })?;

        for name in rest {
            let instance = value.as_instance(line)?;
            value = field_of(&instance, name).ok_or_else(|| {
                                                 RuntimeError::UnknownField { name: name.clone(),
                                                                             line }
                                             })?;
        }

        Ok(value)
    }
}
