//! Standard library surface for the Vesper scripting language.
//!
//! The evaluator owns the actual implementations; this crate only names
//! them. Front-end passes use it to know which identifiers are always in
//! scope and which `extern` declarations the host runtime can satisfy.

mod natives;

pub use natives::{ForeignRegistry, NativeRegistry};

/// Globals that resolve without any enclosing declaration.
pub const GLOBAL_NAMES: &[&str] = &[
    "clock", "len", "push", "pop", "str", "num", "input", "sqrt", "abs", "min", "max", "type_of",
];

/// Foreign functions the standard runtime provides for `extern fn` declarations.
pub const NATIVE_FUNCTIONS: &[&str] = &[
    "read_file", "write_file", "random", "sleep", "exit", "env",
];

/// Foreign variables the standard runtime provides for `extern let` declarations.
pub const NATIVE_VARIABLES: &[&str] = &["ARGS", "PI", "E", "VERSION"];
