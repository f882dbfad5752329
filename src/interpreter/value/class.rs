use std::rc::Rc;

use crate::ast::Statement;

/// A named method attached to a class.
///
/// The formal parameter list excludes `self`; the parser strips it. The
/// body is the method's statement sequence, evaluated against a fresh call
/// closure on every invocation.
#[derive(Debug, Clone)]
pub struct Method {
    /// The method name, e.g. `__init__` or `area`.
    pub name:          String,
    /// The formal parameter names, in order, excluding `self`.
    pub formal_params: Vec<String>,
    /// The statements forming the method body.
    pub body:          Vec<Statement>,
}

/// A class: a named type with an ordered method list and an optional parent.
///
/// Classes are immutable after construction. Single inheritance only; the
/// parser guarantees the parent chain is acyclic because a parent must
/// already have been declared.
#[derive(Debug)]
pub struct Class {
    name:    String,
    methods: Vec<Method>,
    parent:  Option<Rc<Class>>,
}

impl Class {
    /// Creates a new class from its parts.
    #[must_use]
    pub fn new(name: String, methods: Vec<Method>, parent: Option<Rc<Self>>) -> Self {
        Self { name,
               methods,
               parent }
    }

    /// Returns the class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a method by name along the inheritance chain.
    ///
    /// The walk goes from this class towards the root ancestor and stops at
    /// the first method whose name matches, so a subclass method shadows
    /// every ancestor method of the same name regardless of arity.
    ///
    /// # Parameters
    /// - `name`: The method name to search for.
    ///
    /// # Returns
    /// The first matching method, or `None` when no class in the chain
    /// defines it.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&Method> {
        match self.methods.iter().find(|method| method.name == name) {
            Some(method) => Some(method),
            None => self.parent.as_ref().and_then(|parent| parent.method(name)),
        }
    }

    /// Checks whether a method with the given name is callable with
    /// `argument_count` arguments.
    ///
    /// The arity is checked only against the first method found by name;
    /// an ancestor method with a matching arity is not considered once a
    /// nearer class defines the name.
    ///
    /// # Parameters
    /// - `name`: The method name.
    /// - `argument_count`: The number of call arguments (excluding `self`).
    #[must_use]
    pub fn has_method(&self, name: &str, argument_count: usize) -> bool {
        self.method(name)
            .is_some_and(|method| method.formal_params.len() == argument_count)
    }
}
