/// Builtin functions.
///
/// Defines the standard builtin set (`stdout`, `increment`) with the
/// signatures they are checked against.
pub mod builtin;

/// The call protocol.
///
/// Argument evaluation (by reference or by value), argument binding against
/// parameter types, frame management, bind-front and decoration.
pub mod core;
