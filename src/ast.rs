use std::rc::Rc;

use crate::interpreter::{
    source::Position,
    types::{FuncType, Type},
};

/// A constant written directly in source code.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// An integer literal such as `42`.
    Int(i64),
    /// A float literal such as `2.5`.
    Float(f64),
    /// A string literal such as `"hi"`.
    String(String),
    /// `true` or `false`.
    Bool(bool),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// An expression node.
///
/// Every variant records the position of the token it starts with, which is
/// what runtime errors point at.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal constant.
    Literal {
        /// The constant value.
        value:    LiteralValue,
        /// Where the literal appears.
        position: Position,
    },
    /// A name: a variable, a parameter or a function.
    Identifier {
        /// The name.
        name:     String,
        /// Where the name appears.
        position: Position,
    },
    /// `!operand` or `-operand`.
    Unary {
        /// The operator.
        op:       UnaryOperator,
        /// The operand.
        operand:  Box<Self>,
        /// Where the operator appears.
        position: Position,
    },
    /// A binary operation, including decoration (`f @ g`).
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Where the left operand starts.
        position: Position,
    },
    /// `(args) -> callee`
    Call {
        /// The expression producing the callable.
        callee:   Box<Self>,
        /// Arguments in order.
        args:     Vec<Self>,
        /// Where the argument list starts.
        position: Position,
    },
    /// `(args) ->> callee`, producing a callable with `args` bound.
    BindFront {
        /// The expression producing the callable.
        callee:   Box<Self>,
        /// Arguments to bind, in order.
        args:     Vec<Self>,
        /// Where the argument list starts.
        position: Position,
    },
}

impl Expr {
    /// Returns the source position of this expression.
    ///
    /// # Example
    /// ```
    /// use arrowlang::{ast::Expr, interpreter::source::Position};
    ///
    /// let expr = Expr::Identifier { name:     "a".into(),
    ///                               position: Position::new(3, 7), };
    /// assert_eq!(expr.position(), Position::new(3, 7));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Literal { position, .. }
            | Self::Identifier { position, .. }
            | Self::Unary { position, .. }
            | Self::Binary { position, .. }
            | Self::Call { position, .. }
            | Self::BindFront { position, .. } => *position,
        }
    }
}

/// `value => [type] name;`
///
/// With a type this declares a new variable, without one it reassigns an
/// existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// The value being stored.
    pub value:    Expr,
    /// The declared type, present only for declarations.
    pub declared: Option<Type>,
    /// The variable name.
    pub name:     String,
    /// Where the statement starts.
    pub position: Position,
}

/// Which keyword introduced a conditional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionalKind {
    /// `if`
    If,
    /// `elif`
    Elif,
}

/// How a `for` loop obtains its iterator variable.
#[derive(Debug, Clone, PartialEq)]
pub enum ForIterator {
    /// `0 => mut int i;`: the assignment's target is the iterator.
    Assign(Assignment),
    /// `i;`: an already declared variable.
    Existing {
        /// The variable name.
        name:     String,
        /// Where the name appears.
        position: Position,
    },
}

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A declaration or reassignment.
    Assign(Assignment),
    /// An expression evaluated for its side effects, usually a call.
    Call {
        /// The expression.
        expr:     Expr,
        /// Where the statement starts.
        position: Position,
    },
    /// `ret expr;`
    Return {
        /// The returned expression.
        value:    Expr,
        /// Where `ret` appears.
        position: Position,
    },
    /// `if (cond) { } [elif ...] [else { }]`
    Conditional {
        /// `if` or `elif`.
        kind:        ConditionalKind,
        /// The condition, coerced to `bool`.
        condition:   Expr,
        /// Runs when the condition holds.
        body:        Block,
        /// The following `elif` conditional or `else` statement.
        else_branch: Option<Box<Self>>,
        /// Where the keyword appears.
        position:    Position,
    },
    /// The trailing `else { }` of a conditional chain.
    Else {
        /// Runs when no condition in the chain held.
        body:     Block,
        /// Where `else` appears.
        position: Position,
    },
    /// `while (cond) { }`
    While {
        /// Re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Block,
        /// Where `while` appears.
        position:  Position,
    },
    /// `for (iterator; cond) { } -> on_iter;`
    For {
        /// The iterator declaration or name.
        iterator:  ForIterator,
        /// Re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Block,
        /// Called with the iterator after every iteration.
        on_iter:   Expr,
        /// Where `for` appears.
        position:  Position,
    },
}

impl Statement {
    /// Returns the source position of this statement.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Assign(Assignment { position, .. })
            | Self::Call { position, .. }
            | Self::Return { position, .. }
            | Self::Conditional { position, .. }
            | Self::Else { position, .. }
            | Self::While { position, .. }
            | Self::For { position, .. } => *position,
        }
    }
}

/// `{ statements }`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// Statements in order.
    pub statements: Vec<Statement>,
}

/// A named, typed slot: a function parameter or a declared variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSignature {
    /// The name.
    pub name: String,
    /// The declared type.
    pub ty:   Type,
}

/// `ret_type name :: params`
#[derive(Debug, Clone, PartialEq)]
pub struct FuncSignature {
    /// The declared return type.
    pub ret:      Type,
    /// The function name.
    pub name:     String,
    /// Parameters in order.
    pub params:   Vec<VariableSignature>,
    /// Where the definition starts.
    pub position: Position,
}

/// A function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// Name, return type and parameters.
    pub signature: FuncSignature,
    /// The body.
    pub body:      Block,
}

impl Function {
    /// The structural type of this function.
    #[must_use]
    pub fn func_type(&self) -> FuncType {
        FuncType::new(self.signature.ret.clone(),
                      self.signature.params.iter().map(|param| param.ty.clone()).collect())
    }
}

/// A parsed program: its functions in declaration order.
///
/// Functions are reference counted so the interpreter's function table and
/// first-class function values can share them with the program.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Every function defined in the source.
    pub functions: Vec<Rc<Function>>,
}

/// Binary operators, including decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `@`
    Decorate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "&&",
            Self::Or => "||",
            Self::Decorate => "@",
        };
        write!(f, "{operator}")
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-`
    Negate,
    /// `!`
    Not,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}
