#![doc = include_str!("../README.md")]

pub mod config;
pub mod context;
pub mod depth;
pub mod diagnostics;
pub mod error;
pub mod resolver;
pub mod scope;
pub mod variable;

pub use config::{ConfigError, LintConfig, ResolverConfig};
pub use depth::{DepthRecorder, DepthTable};
pub use diagnostics::{DiagnosticSink, Diagnostics, Emitted};
pub use error::{ResolutionError, ResolveFault, ResolverWarning};
pub use resolver::{resolve_program, Resolution, Resolver};
pub use vesper_stdlib::{ForeignRegistry, NativeRegistry};
