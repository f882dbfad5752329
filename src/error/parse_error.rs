#[derive(Debug)]
/// Represents all errors that can occur while building the syntax tree.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// Details about the token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A class inherits from a class that has not been declared.
    UnknownParentClass {
        /// The parent class name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call names something that is neither a declared class nor `str`.
    UnknownClass {
        /// The name used in call position.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A method's formal parameter list does not start with `self`.
    MethodWithoutSelf {
        /// The method name.
        method: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A `def` appeared outside of a class body.
    DefOutsideClass {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left-hand side of `=` is not a plain or dotted name.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `:` header was not followed by an indented block.
    ExpectedIndentedBlock {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::UnknownParentClass { name, line } => write!(f,
                                                              "Error on line {line}: Unknown parent class '{name}'."),

            Self::UnknownClass { name, line } => write!(f,
                                                        "Error on line {line}: '{name}' is not a declared class."),

            Self::MethodWithoutSelf { method, line } => write!(f,
                                                               "Error on line {line}: Method '{method}' must take 'self' as its first parameter."),

            Self::DefOutsideClass { line } => write!(f,
                                                     "Error on line {line}: 'def' is only allowed inside a class body."),

            Self::InvalidAssignmentTarget { line } => write!(f,
                                                             "Error on line {line}: Assignment target must be a name or a dotted field."),

            Self::ExpectedIndentedBlock { line } => {
                write!(f, "Error on line {line}: Expected an indented block.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
