use std::fmt;

use crate::interpreter::source::Position;

/// Every kind of token the lexer produces.
///
/// Keywords and operators carry no payload; literal and identifier tokens store
/// theirs in the accompanying [`TokenValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `int`
    IntType,
    /// `flt`
    FltType,
    /// `string`
    StringType,
    /// `bool`
    BoolType,
    /// `void`
    VoidType,
    /// `mut`
    Mut,
    /// `ret`
    Ret,
    /// `while`
    While,
    /// `for`
    For,
    /// `if`
    If,
    /// `elif`
    Elif,
    /// `else`
    Else,
    /// `->>`
    BindFront,
    /// `->`
    Call,
    /// `=>`
    Assign,
    /// `@`
    Decorate,
    /// `::`
    FuncSign,
    /// `!`
    Not,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mult,
    /// `/`
    Div,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `<=`
    Lte,
    /// `>=`
    Gte,
    /// `==`
    Eq,
    /// `!=`
    Neq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBlock,
    /// `}`
    RBlock,
    /// `[`
    LFuncType,
    /// `]`
    RFuncType,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `_`
    Wildcard,
    /// A line comment introduced by `//`.
    Comment,
    /// A name such as `main` or `counter`.
    Identifier,
    /// An integer literal.
    Int,
    /// A floating point literal.
    Flt,
    /// A string literal.
    String,
    /// `true` or `false`.
    Bool,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns `true` for the kinds that start a type annotation.
    #[must_use]
    pub const fn starts_type(self) -> bool {
        matches!(self,
                 Self::IntType
                 | Self::FltType
                 | Self::StringType
                 | Self::BoolType
                 | Self::VoidType
                 | Self::Mut
                 | Self::LFuncType)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::IntType => "int",
            Self::FltType => "flt",
            Self::StringType => "string",
            Self::BoolType => "bool",
            Self::VoidType => "void",
            Self::Mut => "mut",
            Self::Ret => "ret",
            Self::While => "while",
            Self::For => "for",
            Self::If => "if",
            Self::Elif => "elif",
            Self::Else => "else",
            Self::BindFront => "->>",
            Self::Call => "->",
            Self::Assign => "=>",
            Self::Decorate => "@",
            Self::FuncSign => "::",
            Self::Not => "!",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mult => "*",
            Self::Div => "/",
            Self::And => "&&",
            Self::Or => "||",
            Self::Lte => "<=",
            Self::Gte => ">=",
            Self::Eq => "==",
            Self::Neq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBlock => "{",
            Self::RBlock => "}",
            Self::LFuncType => "[",
            Self::RFuncType => "]",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Wildcard => "_",
            Self::Comment => "comment",
            Self::Identifier => "identifier",
            Self::Int => "integer literal",
            Self::Flt => "float literal",
            Self::String => "string literal",
            Self::Bool => "boolean literal",
            Self::Eof => "end of input",
        };
        write!(f, "{text}")
    }
}

/// The payload a token carries.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// Operators, keywords, comments and end of input.
    None,
    /// Identifier names and string literal contents.
    String(String),
    /// Integer literals.
    Int(i64),
    /// Float literals.
    Float(f64),
    /// `true` / `false`.
    Bool(bool),
}

/// A single lexical unit together with the position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind:     TokenKind,
    /// Payload for literals and identifiers.
    pub value:    TokenValue,
    /// Where the token starts.
    pub position: Position,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub const fn new(kind: TokenKind, value: TokenValue, position: Position) -> Self {
        Self { kind, value, position }
    }

    /// Creates a token without a payload.
    #[must_use]
    pub const fn bare(kind: TokenKind, position: Position) -> Self {
        Self::new(kind, TokenValue::None, position)
    }

    /// The identifier name, if this token is an identifier.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match (&self.kind, &self.value) {
            (TokenKind::Identifier, TokenValue::String(name)) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            TokenValue::None => write!(f, "'{}'", self.kind),
            TokenValue::String(s) if self.kind == TokenKind::String => write!(f, "\"{s}\""),
            TokenValue::String(s) => write!(f, "'{s}'"),
            TokenValue::Int(n) => write!(f, "{n}"),
            TokenValue::Float(x) => write!(f, "{x}"),
            TokenValue::Bool(b) => write!(f, "{b}"),
        }
    }
}
