#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use a name that is not bound in the current closure.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to read a field that an instance does not have.
    UnknownField {
        /// The name of the field.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A dotted access, field assignment or method call landed on a value
    /// that is not a class instance.
    NotAnInstance {
        /// Details about the value encountered.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Called a method that no class in the chain defines.
    NoSuchMethod {
        /// The name of the method.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The first method found by name takes a different number of arguments.
    MethodArityMismatch {
        /// The name of the method.
        name:     String,
        /// The number of formal parameters (excluding `self`).
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An operator was applied to values of unsupported types.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A comparison hook (`__eq__` or `__lt__`) returned a non-boolean.
    ExpectedBoolean {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Two values cannot be compared with each other.
    CannotCompare {
        /// Details about the operands.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `return` was evaluated outside of any method body.
    ReturnOutsideMethod {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing to the output stream failed.
    OutputFailed {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown name '{name}'.")
            },

            Self::UnknownField { name, line } => {
                write!(f, "Error on line {line}: No field with name '{name}'.")
            },

            Self::NotAnInstance { details, line } => write!(f,
                                                            "Error on line {line}: Expected a class instance, found {details}."),

            Self::NoSuchMethod { name, line } => {
                write!(f, "Error on line {line}: No method named '{name}'.")
            },

            Self::MethodArityMismatch { name,
                                        expected,
                                        found,
                                        line, } => write!(f,
                                                          "Error on line {line}: Method '{name}' takes {expected} argument(s), but {found} were given."),

            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },

            Self::ExpectedBoolean { line } => write!(f,
                                                     "Error on line {line}: Comparison hook did not return a boolean."),

            Self::CannotCompare { details, line } => {
                write!(f, "Error on line {line}: Cannot compare {details}.")
            },

            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),

            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),

            Self::ReturnOutsideMethod { line } => write!(f,
                                                         "Error on line {line}: 'return' outside of a method."),

            Self::OutputFailed { line } => write!(f,
                                                  "Error on line {line}: Failed to write to the output stream."),
        }
    }
}

impl std::error::Error for RuntimeError {}
