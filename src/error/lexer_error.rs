#[derive(Debug)]
/// Represents all errors that can occur during tokenization.
pub enum LexerError {
    /// Found a character no token pattern recognizes.
    UnexpectedCharacter {
        /// The offending input slice.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found a `!` that is not part of `!=`.
    StrayExclamation {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal was not closed before the end of its line.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal contains an escape sequence that is not recognized.
    UnknownEscape {
        /// The character following the backslash.
        escape: char,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A numeric literal starts with a redundant `0` digit.
    LeadingZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric literal does not fit in the signed integer range.
    NumberOutOfRange {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A line starts with an odd number of spaces.
    OddIndent {
        /// The number of leading spaces found.
        spaces: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A line is indented more than one level deeper than the previous one.
    IndentJump {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, line } => {
                write!(f, "Error on line {line}: Unexpected character '{found}'.")
            },

            Self::StrayExclamation { line } => {
                write!(f, "Error on line {line}: Stray '!' is not followed by '='.")
            },

            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: String literal is not terminated.")
            },

            Self::UnknownEscape { escape, line } => write!(f,
                                                           "Error on line {line}: Unknown escape sequence '\\{escape}' in string literal."),

            Self::LeadingZero { line } => write!(f,
                                                 "Error on line {line}: Numeric literal has a leading zero."),

            Self::NumberOutOfRange { line } => write!(f,
                                                      "Error on line {line}: Numeric literal does not fit in an integer."),

            Self::OddIndent { spaces, line } => write!(f,
                                                       "Error on line {line}: Indentation of {spaces} spaces is not a multiple of two."),

            Self::IndentJump { line } => write!(f,
                                                "Error on line {line}: Indentation increases by more than one level."),
        }
    }
}

impl std::error::Error for LexerError {}
