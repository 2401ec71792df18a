use std::fmt;

/// A location in the source text.
///
/// Both coordinates are 1-based. The column counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// The line number, starting at 1.
    pub line:   usize,
    /// The column number, starting at 1.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A character cursor over source text that keeps track of positions.
///
/// The reader hands out one character at a time. The most recently read
/// character can be pushed back once with [`SourceReader::unget`], which also
/// restores the position it was read at.
///
/// # Example
/// ```
/// use arrowlang::interpreter::source::{Position, SourceReader};
///
/// let mut reader = SourceReader::new("a\nb");
/// assert_eq!(reader.next_char(), Some('a'));
/// assert_eq!(reader.next_char(), Some('\n'));
/// assert_eq!(reader.position(), Position::new(2, 1));
/// reader.unget();
/// assert_eq!(reader.position(), Position::new(1, 2));
/// assert_eq!(reader.peek_char(), Some('\n'));
/// assert!(!reader.is_at_end());
/// reader.next_char();
/// reader.next_char();
/// assert!(reader.is_at_end());
/// assert_eq!(reader.next_char(), None);
/// ```
#[derive(Debug, Clone)]
pub struct SourceReader {
    chars:    Vec<char>,
    index:    usize,
    position: Position,
    previous: Option<Position>,
}

impl SourceReader {
    /// Creates a reader positioned at the first character of `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { chars:    source.chars().collect(),
               index:    0,
               position: Position::default(),
               previous: None, }
    }

    /// The position of the next character to be read.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the next character without consuming it.
    #[must_use]
    pub fn peek_char(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    /// Returns `true` once every character has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.index >= self.chars.len()
    }

    /// Consumes and returns the next character, advancing the position.
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;

        self.previous = Some(self.position);
        self.index += 1;

        if c == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }

        Some(c)
    }

    /// Pushes back the character returned by the last call to
    /// [`SourceReader::next_char`].
    ///
    /// Only one character of push-back is kept; calling this twice in a row
    /// has no further effect.
    pub fn unget(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.index -= 1;
            self.position = previous;
        }
    }
}
