//! Constant lookup tables driving the lexer's state transitions.

use super::token::TokenKind;

/// The longest identifier the lexer keeps. Longer names are truncated.
pub const MAX_IDENTIFIER_LENGTH: usize = 32;

/// A character that can only appear as the first half of a two-character
/// operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    /// `=`, starts `=>` and `==`.
    Equals,
    /// `&`, starts `&&`.
    Ampersand,
    /// `|`, starts `||`.
    Pipe,
    /// `:`, starts `::`.
    Colon,
}

impl Prefix {
    /// The character this prefix was read from.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Equals => '=',
            Self::Ampersand => '&',
            Self::Pipe => '|',
            Self::Colon => ':',
        }
    }
}

/// Characters that form a complete token on their own.
const SINGLE_CHAR_OPERATORS: &[(char, TokenKind)] = &[('-', TokenKind::Minus),
                                                      ('+', TokenKind::Plus),
                                                      ('*', TokenKind::Mult),
                                                      ('/', TokenKind::Div),
                                                      ('@', TokenKind::Decorate),
                                                      ('!', TokenKind::Not),
                                                      ('>', TokenKind::Gt),
                                                      ('<', TokenKind::Lt),
                                                      ('(', TokenKind::LParen),
                                                      (')', TokenKind::RParen),
                                                      ('{', TokenKind::LBlock),
                                                      ('}', TokenKind::RBlock),
                                                      ('[', TokenKind::LFuncType),
                                                      (']', TokenKind::RFuncType),
                                                      (';', TokenKind::Semicolon),
                                                      (',', TokenKind::Comma),
                                                      ('_', TokenKind::Wildcard)];

const LONG_OPERATOR_STARTS: &[(char, Prefix)] = &[('=', Prefix::Equals),
                                                  ('&', Prefix::Ampersand),
                                                  ('|', Prefix::Pipe),
                                                  (':', Prefix::Colon)];

const PREFIX_COMPLETIONS: &[(Prefix, char, TokenKind)] =
    &[(Prefix::Equals, '>', TokenKind::Assign),
      (Prefix::Equals, '=', TokenKind::Eq),
      (Prefix::Ampersand, '&', TokenKind::And),
      (Prefix::Pipe, '|', TokenKind::Or),
      (Prefix::Colon, ':', TokenKind::FuncSign)];

/// `(current kind, next char) -> longer kind`. `->>` takes two steps.
const LONG_OPERATORS: &[(TokenKind, char, TokenKind)] =
    &[(TokenKind::Minus, '>', TokenKind::Call),
      (TokenKind::Call, '>', TokenKind::BindFront),
      (TokenKind::Not, '=', TokenKind::Neq),
      (TokenKind::Gt, '=', TokenKind::Gte),
      (TokenKind::Lt, '=', TokenKind::Lte),
      (TokenKind::Div, '/', TokenKind::Comment)];

const KEYWORDS: &[(&str, TokenKind)] = &[("int", TokenKind::IntType),
                                         ("flt", TokenKind::FltType),
                                         ("string", TokenKind::StringType),
                                         ("bool", TokenKind::BoolType),
                                         ("void", TokenKind::VoidType),
                                         ("mut", TokenKind::Mut),
                                         ("ret", TokenKind::Ret),
                                         ("while", TokenKind::While),
                                         ("for", TokenKind::For),
                                         ("if", TokenKind::If),
                                         ("elif", TokenKind::Elif),
                                         ("else", TokenKind::Else),
                                         ("true", TokenKind::Bool),
                                         ("false", TokenKind::Bool)];

/// Looks up a character that is a complete operator by itself.
#[must_use]
pub fn single_char_operator(c: char) -> Option<TokenKind> {
    SINGLE_CHAR_OPERATORS.iter()
                         .find(|(candidate, _)| *candidate == c)
                         .map(|(_, kind)| *kind)
}

/// Looks up a character that may only start a two-character operator.
#[must_use]
pub fn long_operator_start(c: char) -> Option<Prefix> {
    LONG_OPERATOR_STARTS.iter()
                        .find(|(candidate, _)| *candidate == c)
                        .map(|(_, prefix)| *prefix)
}

/// Resolves the second character following a [`Prefix`].
#[must_use]
pub fn complete_prefix(prefix: Prefix, c: char) -> Option<TokenKind> {
    PREFIX_COMPLETIONS.iter()
                      .find(|(p, candidate, _)| *p == prefix && *candidate == c)
                      .map(|(_, _, kind)| *kind)
}

/// Extends an already recognised operator by one more character.
#[must_use]
pub fn extend_operator(kind: TokenKind, c: char) -> Option<TokenKind> {
    LONG_OPERATORS.iter()
                  .find(|(current, candidate, _)| *current == kind && *candidate == c)
                  .map(|(_, _, longer)| *longer)
}

/// Looks up a reserved word.
#[must_use]
pub fn keyword(word: &str) -> Option<TokenKind> {
    KEYWORDS.iter()
            .find(|(candidate, _)| *candidate == word)
            .map(|(_, kind)| *kind)
}
