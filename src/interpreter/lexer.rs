use logos::Logos;

use crate::error::LexerError;

/// A token paired with the source line it appeared on.
pub type Spanned = (Token, usize);

/// Represents a lexical token as consumed by the parser.
///
/// This is the vocabulary produced by [`tokenize`]: the raw tokens of the
/// character stream plus the synthetic `Newline`, `Indent`, `Dedent` and
/// `Eof` tokens derived from the indentation discipline. Every well-formed
/// stream ends with a single `Eof`, each `Indent` is matched by a later
/// `Dedent`, and each non-blank source line is terminated by one `Newline`.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal tokens, such as `42`.
    Number(i64),
    /// Identifier tokens: variable, field, class or method names.
    Id(String),
    /// String literal tokens, with escape sequences already decoded.
    Str(String),
    /// `class`
    Class,
    /// `return`
    Return,
    /// `if`
    If,
    /// `else`
    Else,
    /// `def`
    Def,
    /// `print`
    Print,
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,
    /// `None`
    None,
    /// `True`
    True,
    /// `False`
    False,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<=`
    LessOrEq,
    /// `>=`
    GreaterOrEq,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `:`
    Colon,
    /// `=`
    Assign,
    /// End of a logical line. Blank and comment-only lines emit none.
    Newline,
    /// The start of a block one level deeper than the previous line.
    Indent,
    /// The end of a block; one per level being closed.
    Dedent,
    /// End of input, always the final token.
    Eof,
}

/// Classifies failures of the raw token machine.
///
/// The raw layer has no line information of its own; [`tokenize`] pairs
/// these kinds with the current line and the offending slice to build the
/// public [`LexerError`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LexErrorKind {
    /// No pattern matched at the current position.
    #[default]
    UnexpectedCharacter,
    /// A numeric literal starts with a redundant `0`.
    LeadingZero,
    /// A numeric literal overflows the integer range.
    NumberOutOfRange,
    /// A string literal contains an unknown escape sequence.
    UnknownEscape(char),
}

/// Additional state carried by the raw lexer during tokenization.
///
/// Tracks the current line number for error reporting and for the
/// `(token, line)` pairs in the output.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// The raw, indentation-unaware token machine.
///
/// `Newline` carries the number of spaces that follow the line break, which
/// is the indentation of the next line. Mid-line spaces and `#` comments
/// are skipped; everything the language does not recognize (including a
/// lone `!`) surfaces as an error.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexErrorKind)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ ]+")]
#[logos(skip r"#[^\n]*")]
enum RawToken {
    #[regex(r"\n[ ]*", |lex| { lex.extras.line += 1; lex.slice().len() - 1 })]
    Newline(usize),

    #[regex(r"[0-9]+", lex_number)]
    Number(i64),

    #[regex(r"[_a-zA-Z][_a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Id(String),

    #[regex(r#""([^"\\\n]|\\.)*""#, lex_string)]
    #[regex(r"'([^'\\\n]|\\.)*'", lex_string)]
    Str(String),

    #[token("class")]
    Class,
    #[token("return")]
    Return,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("def")]
    Def,
    #[token("print")]
    Print,
    #[token("and")]
    And,
    #[token("or")]
    Or,
    #[token("not")]
    Not,
    #[token("None")]
    None,
    #[token("True")]
    True,
    #[token("False")]
    False,

    #[token("==")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LessOrEq,
    #[token(">=")]
    GreaterOrEq,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("=")]
    Assign,
}

/// Parses an integer literal from the current token slice.
///
/// A leading `0` is accepted only as the single digit `0`; `00` and `09`
/// are rejected. Values outside the signed 64-bit range are rejected.
fn lex_number(lex: &mut logos::Lexer<RawToken>) -> Result<i64, LexErrorKind> {
    let slice = lex.slice();
    if slice.len() > 1 && slice.starts_with('0') {
        return Err(LexErrorKind::LeadingZero);
    }
    slice.parse().map_err(|_| LexErrorKind::NumberOutOfRange)
}

/// Decodes a quoted string literal from the current token slice.
///
/// The slice includes both quotes. Recognized escapes are `\n`, `\t`,
/// `\r`, `\"`, `\'` and `\\`; any other backslash sequence is an error.
fn lex_string(lex: &mut logos::Lexer<RawToken>) -> Result<String, LexErrorKind> {
    let slice = lex.slice();
    let mut decoded = String::with_capacity(slice.len());
    let mut chars = slice[1..slice.len() - 1].chars();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            // The pattern only matches backslashes followed by a character,
            // so `chars.next()` cannot be exhausted here.
            match chars.next() {
                Some('n') => decoded.push('\n'),
                Some('t') => decoded.push('\t'),
                Some('r') => decoded.push('\r'),
                Some('"') => decoded.push('"'),
                Some('\'') => decoded.push('\''),
                Some('\\') => decoded.push('\\'),
                Some(other) => return Err(LexErrorKind::UnknownEscape(other)),
                Option::None => unreachable!(),
            }
        } else {
            decoded.push(ch);
        }
    }

    Ok(decoded)
}

/// Converts source text into the final token stream.
///
/// The raw logos stream is folded through the indentation pass:
/// indentation is measured in units of two spaces, a one-level increase
/// emits `Indent`, any decrease emits one `Dedent` per level closed, and a
/// jump of more than one level or an odd space count is an error. Blank
/// lines and comment-only lines emit nothing and leave the depth untouched.
/// Each content line is terminated by a `Newline` (synthesized at the end
/// of input if the text does not end with one); the stream is closed by
/// `Dedent`s back to depth zero and a single `Eof`.
///
/// # Parameters
/// - `source`: The program text.
///
/// # Returns
/// The tokens paired with their source lines, ending in `Eof`.
///
/// # Errors
/// Returns a [`LexerError`] for malformed input: bad indentation, an
/// unreadable number, an unterminated string, an unknown escape sequence,
/// a stray `!`, or any unrecognized character.
///
/// # Example
/// ```
/// use mython::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 1").unwrap();
/// assert_eq!(tokens.len(), 5); // x, =, 1, Newline, Eof
/// assert_eq!(tokens[0].0, Token::Id("x".to_string()));
/// assert_eq!(tokens[4].0, Token::Eof);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, LexerError> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut line_has_content = false;
    // Indentation of the upcoming content line; the first line's leading
    // spaces are invisible to the raw machine and seeded by hand.
    let mut pending_indent = Some(source.chars().take_while(|&c| c == ' ').count());

    while let Some(raw) = lexer.next() {
        let line = lexer.extras.line;
        match raw {
            Ok(RawToken::Newline(spaces)) => {
                if line_has_content {
                    tokens.push((Token::Newline, line - 1));
                    line_has_content = false;
                }
                pending_indent = Some(spaces);
            },
            Ok(raw) => {
                if let Some(spaces) = pending_indent.take() {
                    adjust_indent(&mut tokens, &mut depth, spaces, line)?;
                }
                tokens.push((convert(raw), line));
                line_has_content = true;
            },
            Err(kind) => return Err(raw_error(kind, lexer.slice(), line)),
        }
    }

    let line = lexer.extras.line;
    if line_has_content {
        tokens.push((Token::Newline, line));
    }
    while depth > 0 {
        depth -= 1;
        tokens.push((Token::Dedent, line));
    }
    tokens.push((Token::Eof, line));

    Ok(tokens)
}

/// Emits the `Indent`/`Dedent` tokens implied by a content line that starts
/// with `spaces` leading spaces, updating the current depth.
fn adjust_indent(tokens: &mut Vec<Spanned>,
                 depth: &mut usize,
                 spaces: usize,
                 line: usize)
                 -> Result<(), LexerError> {
    if spaces % 2 != 0 {
        return Err(LexerError::OddIndent { spaces, line });
    }

    let new_depth = spaces / 2;
    if new_depth > *depth + 1 {
        return Err(LexerError::IndentJump { line });
    }
    if new_depth == *depth + 1 {
        tokens.push((Token::Indent, line));
    } else {
        while *depth > new_depth {
            *depth -= 1;
            tokens.push((Token::Dedent, line));
        }
    }
    *depth = new_depth;

    Ok(())
}

/// Attaches line and slice context to a raw-layer failure.
fn raw_error(kind: LexErrorKind, slice: &str, line: usize) -> LexerError {
    match kind {
        LexErrorKind::LeadingZero => LexerError::LeadingZero { line },
        LexErrorKind::NumberOutOfRange => LexerError::NumberOutOfRange { line },
        LexErrorKind::UnknownEscape(escape) => LexerError::UnknownEscape { escape, line },
        LexErrorKind::UnexpectedCharacter => {
            if slice.starts_with('!') {
                LexerError::StrayExclamation { line }
            } else if slice.starts_with('"') || slice.starts_with('\'') {
                LexerError::UnterminatedString { line }
            } else {
                LexerError::UnexpectedCharacter { found: slice.to_string(),
                                                 line }
            }
        },
    }
}

/// Maps a raw token onto the parser-facing vocabulary.
fn convert(raw: RawToken) -> Token {
    match raw {
        RawToken::Number(n) => Token::Number(n),
        RawToken::Id(name) => Token::Id(name),
        RawToken::Str(s) => Token::Str(s),
        RawToken::Class => Token::Class,
        RawToken::Return => Token::Return,
        RawToken::If => Token::If,
        RawToken::Else => Token::Else,
        RawToken::Def => Token::Def,
        RawToken::Print => Token::Print,
        RawToken::And => Token::And,
        RawToken::Or => Token::Or,
        RawToken::Not => Token::Not,
        RawToken::None => Token::None,
        RawToken::True => Token::True,
        RawToken::False => Token::False,
        RawToken::Eq => Token::Eq,
        RawToken::NotEq => Token::NotEq,
        RawToken::LessOrEq => Token::LessOrEq,
        RawToken::GreaterOrEq => Token::GreaterOrEq,
        RawToken::Less => Token::Less,
        RawToken::Greater => Token::Greater,
        RawToken::Plus => Token::Plus,
        RawToken::Minus => Token::Minus,
        RawToken::Star => Token::Star,
        RawToken::Slash => Token::Slash,
        RawToken::LParen => Token::LParen,
        RawToken::RParen => Token::RParen,
        RawToken::Comma => Token::Comma,
        RawToken::Dot => Token::Dot,
        RawToken::Colon => Token::Colon,
        RawToken::Assign => Token::Assign,
        RawToken::Newline(_) => unreachable!("handled by the indentation pass"),
    }
}
