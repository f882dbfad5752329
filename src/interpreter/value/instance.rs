use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::{class::Class, core::Value};

/// A class instance: a mutable bag of named fields plus a back reference to
/// its class.
///
/// Instances live behind `Rc<RefCell<...>>`; every [`Value::Instance`] holding
/// the same allocation observes the same fields. The `self` name is not
/// stored in the field table (storing the handle inside its own fields
/// would create an `Rc` cycle that could never be collected) and is
/// instead resolved on read by [`field_of`].
#[derive(Debug)]
pub struct Instance {
    class:  Rc<Class>,
    fields: HashMap<String, Value>,
}

impl Instance {
    /// Creates a fresh instance of `class` with no fields set and returns
    /// its shared handle.
    #[must_use]
    pub fn new(class: Rc<Class>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self { class,
                                    fields: HashMap::new() }))
    }

    /// Returns the class this instance belongs to.
    #[must_use]
    pub fn class(&self) -> &Rc<Class> {
        &self.class
    }

    /// Stores `value` under `name` in the field table, replacing any
    /// previous value.
    pub fn set_field(&mut self, name: String, value: Value) {
        self.fields.insert(name, value);
    }
}

/// Reads a field from an instance through its shared handle.
///
/// The name `self` always resolves to the instance itself, which keeps the
/// observable invariant that every instance carries a `self` field pointing
/// at itself without materializing the reference cycle.
///
/// # Parameters
/// - `instance`: The shared handle to read through.
/// - `name`: The field name.
///
/// # Returns
/// The field value, or `None` when the instance has no such field.
#[must_use]
pub fn field_of(instance: &Rc<RefCell<Instance>>, name: &str) -> Option<Value> {
    if name == "self" {
        return Some(Value::Instance(Rc::clone(instance)));
    }
    instance.borrow().fields.get(name).cloned()
}
