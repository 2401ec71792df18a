use std::fmt;

use crate::interpreter::lexer::TokenKind;

/// The primitive types a variable can be declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    /// 64-bit signed integer, keyword `int`.
    Int,
    /// 64-bit float, keyword `flt`.
    Flt,
    /// Keyword `string`.
    String,
    /// Keyword `bool`.
    Bool,
    /// No value, keyword `void`. Only valid as a return type.
    Void,
}

impl BaseType {
    /// Maps a type keyword to its base type.
    ///
    /// # Example
    /// ```
    /// use arrowlang::interpreter::{lexer::TokenKind, types::BaseType};
    ///
    /// assert_eq!(BaseType::from_keyword(TokenKind::FltType), Some(BaseType::Flt));
    /// assert_eq!(BaseType::from_keyword(TokenKind::Mut), None);
    /// ```
    #[must_use]
    pub const fn from_keyword(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::IntType => Some(Self::Int),
            TokenKind::FltType => Some(Self::Flt),
            TokenKind::StringType => Some(Self::String),
            TokenKind::BoolType => Some(Self::Bool),
            TokenKind::VoidType => Some(Self::Void),
            _ => None,
        }
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "int",
            Self::Flt => "flt",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Void => "void",
        };
        write!(f, "{name}")
    }
}

/// A primitive type with a mutability flag. Equality compares both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarType {
    /// The primitive type.
    pub base:    BaseType,
    /// Whether the variable may be reassigned.
    pub mutable: bool,
}

/// The type of a callable: a return type and ordered parameter types.
///
/// Equality is structural and sensitive to parameter order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FuncType {
    /// What the callable returns; `void` when nothing.
    pub ret:    Box<Type>,
    /// Parameter types in declaration order.
    pub params: Vec<Type>,
}

impl FuncType {
    /// Creates a function type.
    #[must_use]
    pub fn new(ret: Type, params: Vec<Type>) -> Self {
        Self { ret: Box::new(ret),
               params }
    }

    /// The type left after binding the first `n` parameters.
    ///
    /// # Example
    /// ```
    /// use arrowlang::interpreter::types::{BaseType, FuncType, Type};
    ///
    /// let add = FuncType::new(Type::int(), vec![Type::int(), Type::int()]);
    /// assert_eq!(add.without_leading(1),
    ///            FuncType::new(Type::int(), vec![Type::int()]));
    /// ```
    #[must_use]
    pub fn without_leading(&self, n: usize) -> Self {
        Self { ret:    self.ret.clone(),
               params: self.params.iter().skip(n).cloned().collect(), }
    }
}

/// Either a variable type or a function type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// `[mut] int | flt | string | bool | void`
    Var(VarType),
    /// `[ret :: params]`
    Func(FuncType),
}

impl Type {
    /// An immutable variable type.
    #[must_use]
    pub const fn var(base: BaseType) -> Self {
        Self::Var(VarType { base,
                            mutable: false })
    }

    /// A mutable variable type.
    #[must_use]
    pub const fn mutable(base: BaseType) -> Self {
        Self::Var(VarType { base,
                            mutable: true })
    }

    /// `int`
    #[must_use]
    pub const fn int() -> Self {
        Self::var(BaseType::Int)
    }

    /// `void`
    #[must_use]
    pub const fn void() -> Self {
        Self::var(BaseType::Void)
    }

    /// Returns `true` for `void`.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Var(VarType { base: BaseType::Void, .. }))
    }

    /// Returns `true` for variable types declared `mut`. Function types are
    /// never mutable.
    #[must_use]
    pub const fn is_mutable(&self) -> bool {
        matches!(self, Self::Var(VarType { mutable: true, .. }))
    }

    /// Compares two types ignoring the top-level mutability flag.
    ///
    /// This is what decides whether a variable can be passed by reference to a
    /// parameter.
    ///
    /// # Example
    /// ```
    /// use arrowlang::interpreter::types::{BaseType, Type};
    ///
    /// assert!(Type::mutable(BaseType::Int).same_shape(&Type::int()));
    /// assert!(!Type::var(BaseType::Flt).same_shape(&Type::int()));
    /// ```
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Var(left), Self::Var(right)) => left.base == right.base,
            (Self::Func(left), Self::Func(right)) => left == right,
            _ => false,
        }
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mutable {
            write!(f, "mut ")?;
        }
        write!(f, "{}", self.base)
    }
}

impl fmt::Display for FuncType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}::", self.ret)?;

        for (index, param) in self.params.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{param}")?;
        }

        write!(f, "]")
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var(var) => write!(f, "{var}"),
            Self::Func(func) => write!(f, "{func}"),
        }
    }
}
