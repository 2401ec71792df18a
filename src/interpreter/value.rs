/// Callable values.
///
/// Defines user-defined functions, closures produced by bind-front and
/// decoration, and native builtins, together with their type signatures.
pub mod callable;
/// Weak-type coercion.
///
/// Implements the fixed pairwise table that converts a value into a declared
/// type for declarations, reassignments, argument binding, returns and
/// conditions, plus the default values of each type.
pub mod cast;
/// The runtime value type.
///
/// Declares the tagged `Value` union with one variant per runtime kind and the
/// helpers the evaluator uses to inspect it.
pub mod core;
/// Variables and argument bindings.
///
/// Variables are shared, reference-counted cells so that reference arguments,
/// closure captures and loop iterators all observe the same storage.
pub mod variable;
