/// Constant transition tables: operators, keywords and limits.
pub mod tables;
/// Token kinds, payloads and the token type itself.
pub mod token;

use tables::{MAX_IDENTIFIER_LENGTH, Prefix};
pub use token::{Token, TokenKind, TokenValue};

use crate::{
    error::{LexError, LexWarning},
    interpreter::source::{Position, SourceReader},
};

/// Convenience alias for lexer results.
pub type LexResult<T> = Result<T, LexError>;

/// The states of the tokenizing automaton.
///
/// Each call to [`Lexer::next_token`] starts in `Whitespace` and runs until
/// either a character does not belong to the current token (it is pushed back)
/// or the token is closed explicitly (`End`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Whitespace,
    Identifier,
    Number,
    Float,
    String,
    Escape,
    Operator(TokenKind),
    LongOperator(TokenKind),
    FirstCharLongOp(Prefix),
    End,
}

/// A token together with the warning raised while reading it, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    /// The token that was read.
    pub token:   Token,
    /// A recoverable problem found while reading the token.
    pub warning: Option<LexWarning>,
}

/// The output of [`tokenize`]: every token up to and including
/// [`TokenKind::Eof`], and the warnings collected along the way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tokens {
    /// All tokens in source order, comments included.
    pub tokens:   Vec<Token>,
    /// Warnings in the order they were raised.
    pub warnings: Vec<LexWarning>,
}

/// Scratch data for the token currently being read.
#[derive(Debug, Default)]
struct Scratch {
    start:          Position,
    text:           String,
    length:         usize,
    magnitude:      u64,
    decimal_places: i32,
    overflowed:     bool,
}

/// A table-driven tokenizer over a [`SourceReader`].
///
/// # Example
/// ```
/// use arrowlang::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("(x) ->> f");
/// let mut kinds = Vec::new();
/// loop {
///     let lexeme = lexer.next_token().unwrap();
///     kinds.push(lexeme.token.kind);
///     if lexeme.token.kind == TokenKind::Eof {
///         break;
///     }
/// }
/// assert_eq!(kinds,
///            [TokenKind::LParen,
///             TokenKind::Identifier,
///             TokenKind::RParen,
///             TokenKind::BindFront,
///             TokenKind::Identifier,
///             TokenKind::Eof]);
/// ```
#[derive(Debug)]
pub struct Lexer {
    reader:  SourceReader,
    scratch: Scratch,
}

impl Lexer {
    /// Creates a lexer at the start of `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { reader:  SourceReader::new(source),
               scratch: Scratch::default(), }
    }

    /// Reads the next token.
    ///
    /// Whitespace is skipped. A `//` comment consumes the rest of its line and
    /// is returned as a single [`TokenKind::Comment`] token. Once the input is
    /// exhausted every call returns [`TokenKind::Eof`].
    ///
    /// # Errors
    /// - [`LexError::UnexpectedToken`] for a character no token can start
    ///   with, or a lone `=`, `&`, `|` or `:`.
    /// - [`LexError::UnterminatedString`] when a string literal reaches a
    ///   newline or the end of input.
    pub fn next_token(&mut self) -> LexResult<Lexeme> {
        self.scratch = Scratch::default();
        if self.reader.is_at_end() {
            return self.finish_at_end_of_input(State::Whitespace);
        }

        let mut state = State::Whitespace;

        while state != State::End {
            if state == State::Whitespace {
                self.scratch.start = self.reader.position();
            }

            let Some(c) = self.reader.next_char() else {
                return self.finish_at_end_of_input(state);
            };

            match self.step(state, c)? {
                Some(next) => state = next,
                None => {
                    self.reader.unget();
                    return Ok(self.finish(state));
                },
            }
        }

        Ok(self.finish(State::String))
    }

    /// Feeds one character to the automaton.
    ///
    /// Returns the next state when `c` belongs to the current token, or `None`
    /// when the token ended before `c`.
    fn step(&mut self, state: State, c: char) -> LexResult<Option<State>> {
        let next = match state {
            State::Whitespace if c.is_whitespace() => State::Whitespace,
            State::Whitespace => self.begin(c)?,
            State::Identifier if c.is_ascii_alphanumeric() || c == '_' => {
                self.push_identifier_char(c);
                State::Identifier
            },
            State::Number if c.is_ascii_digit() => {
                self.push_digit(c, false);
                State::Number
            },
            State::Number if c == '.' => State::Float,
            State::Float if c.is_ascii_digit() => {
                self.push_digit(c, true);
                State::Float
            },
            State::String => match c {
                '"' => State::End,
                '\\' => State::Escape,
                '\n' => {
                    return Err(LexError::UnterminatedString { position: self.scratch.start });
                },
                _ => {
                    self.scratch.text.push(c);
                    State::String
                },
            },
            State::Escape => {
                let escaped = match c {
                    'n' => '\n',
                    't' => '\t',
                    '\n' => {
                        return Err(LexError::UnterminatedString { position: self.scratch
                                                                                .start });
                    },
                    other => other,
                };
                self.scratch.text.push(escaped);
                State::String
            },
            State::Operator(kind) | State::LongOperator(kind) => {
                match tables::extend_operator(kind, c) {
                    Some(longer) => State::LongOperator(longer),
                    None => return Ok(None),
                }
            },
            State::FirstCharLongOp(prefix) => match tables::complete_prefix(prefix, c) {
                Some(kind) => State::LongOperator(kind),
                None => {
                    return Err(LexError::UnexpectedToken { found:    prefix.as_char(),
                                                           position: self.scratch.start, });
                },
            },
            State::Identifier | State::Number | State::Float | State::End => return Ok(None),
        };

        Ok(Some(next))
    }

    /// Picks the state for the first character of a token.
    fn begin(&mut self, c: char) -> LexResult<State> {
        if c.is_ascii_alphabetic() {
            self.push_identifier_char(c);
            return Ok(State::Identifier);
        }

        if c.is_ascii_digit() {
            self.push_digit(c, false);
            return Ok(State::Number);
        }

        if c == '"' {
            return Ok(State::String);
        }

        if let Some(kind) = tables::single_char_operator(c) {
            return Ok(State::Operator(kind));
        }

        if let Some(prefix) = tables::long_operator_start(c) {
            return Ok(State::FirstCharLongOp(prefix));
        }

        Err(LexError::UnexpectedToken { found:    c,
                                        position: self.scratch.start, })
    }

    fn push_identifier_char(&mut self, c: char) {
        self.scratch.length += 1;

        if self.scratch.length <= MAX_IDENTIFIER_LENGTH {
            self.scratch.text.push(c);
        }
    }

    /// Appends a digit to the magnitude, clamping instead of overflowing.
    fn push_digit(&mut self, c: char, fractional: bool) {
        let digit = u64::from(c.to_digit(10).unwrap_or_default());
        let limit = i64::MAX.unsigned_abs();

        if self.scratch.overflowed {
            return;
        }

        match self.scratch.magnitude.checked_mul(10).and_then(|m| m.checked_add(digit)) {
            Some(next) if next <= limit => {
                self.scratch.magnitude = next;
                if fractional {
                    self.scratch.decimal_places += 1;
                }
            },
            _ => {
                if !fractional {
                    self.scratch.magnitude = limit;
                }
                self.scratch.overflowed = true;
            },
        }
    }

    fn finish_at_end_of_input(&mut self, state: State) -> LexResult<Lexeme> {
        match state {
            State::Whitespace => Ok(Lexeme { token:   Token::bare(TokenKind::Eof,
                                                                   self.reader.position()),
                                             warning: None, }),
            State::String | State::Escape => {
                Err(LexError::UnterminatedString { position: self.scratch.start })
            },
            State::FirstCharLongOp(prefix) => {
                Err(LexError::UnexpectedToken { found:    prefix.as_char(),
                                                position: self.scratch.start, })
            },
            _ => Ok(self.finish(state)),
        }
    }

    /// Builds the token for the state the automaton stopped in.
    fn finish(&mut self, state: State) -> Lexeme {
        let start = self.scratch.start;
        let text = std::mem::take(&mut self.scratch.text);

        match state {
            State::Identifier => {
                let warning = (self.scratch.length > MAX_IDENTIFIER_LENGTH).then(|| {
                                  LexWarning::LengthExceeded { kept:     text.clone(),
                                                               position: start, }
                              });
                let token = match tables::keyword(&text) {
                    Some(TokenKind::Bool) => {
                        Token::new(TokenKind::Bool, TokenValue::Bool(text == "true"), start)
                    },
                    Some(kind) => Token::bare(kind, start),
                    None => Token::new(TokenKind::Identifier, TokenValue::String(text), start),
                };
                Self::lexeme(token, warning)
            },
            State::Number => {
                let value = i64::try_from(self.scratch.magnitude).unwrap_or(i64::MAX);
                let token = Token::new(TokenKind::Int, TokenValue::Int(value), start);
                Self::lexeme(token, self.overflow_warning())
            },
            State::Float => {
                #[allow(clippy::cast_precision_loss)]
                let magnitude = self.scratch.magnitude as f64;
                let value = magnitude / 10f64.powi(self.scratch.decimal_places);
                let token = Token::new(TokenKind::Flt, TokenValue::Float(value), start);
                Self::lexeme(token, self.overflow_warning())
            },
            State::LongOperator(TokenKind::Comment) => {
                self.skip_line();
                Self::lexeme(Token::bare(TokenKind::Comment, start), None)
            },
            State::Operator(kind) | State::LongOperator(kind) => {
                Self::lexeme(Token::bare(kind, start), None)
            },
            _ => Self::lexeme(Token::new(TokenKind::String, TokenValue::String(text), start),
                              None),
        }
    }

    fn overflow_warning(&self) -> Option<LexWarning> {
        self.scratch
            .overflowed
            .then_some(LexWarning::Overflow { position: self.scratch.start })
    }

    fn lexeme(token: Token, warning: Option<LexWarning>) -> Lexeme {
        if let Some(warning) = &warning {
            tracing::warn!(position = %warning.position(), "{warning}");
        }
        Lexeme { token, warning }
    }

    /// Discards everything up to, but not including, the next newline.
    fn skip_line(&mut self) {
        while let Some(c) = self.reader.peek_char()
              && c != '\n'
        {
            self.reader.next_char();
        }
    }
}

/// Tokenizes an entire source text.
///
/// # Errors
/// Returns the first fatal [`LexError`]; warnings are collected in
/// [`Tokens::warnings`] instead.
///
/// # Example
/// ```
/// use arrowlang::interpreter::lexer::{TokenKind, TokenValue, tokenize};
///
/// let tokens = tokenize("test // x\nother").unwrap().tokens;
/// assert_eq!(tokens[0].value, TokenValue::String("test".into()));
/// assert_eq!(tokens[1].kind, TokenKind::Comment);
/// assert_eq!(tokens[2].value, TokenValue::String("other".into()));
/// assert_eq!(tokens[3].kind, TokenKind::Eof);
/// ```
pub fn tokenize(source: &str) -> LexResult<Tokens> {
    let mut lexer = Lexer::new(source);
    let mut output = Tokens::default();

    loop {
        let Lexeme { token, warning } = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;

        output.tokens.push(token);
        output.warnings.extend(warning);

        if done {
            return Ok(output);
        }
    }
}
