//! The resolution walk.
//!
//! A single depth-first pass over the statement list. It keeps a stack of
//! scope frames plus the innermost enclosing function/class/struct kinds,
//! reports diagnostics to a [`DiagnosticSink`] and the depth of every
//! resolved reference to a [`DepthRecorder`].

mod declare;
mod expr;
mod stmt;

use vesper_stdlib::ForeignRegistry;
use vesper_syntax::Stmt;

use crate::config::ResolverConfig;
use crate::context::Context;
use crate::depth::{DepthRecorder, DepthTable};
use crate::diagnostics::{DiagnosticSink, Diagnostics};
use crate::error::ResolveFault;
use crate::scope::ScopeStack;

/// State for one resolution run.
///
/// A resolver is consumed by [`Resolver::resolve`]; resolving another
/// program (or the same one again) takes a fresh instance.
pub struct Resolver<'a> {
    scopes: ScopeStack,
    context: Context,
    config: &'a ResolverConfig,
    registry: &'a dyn ForeignRegistry,
    sink: &'a mut dyn DiagnosticSink,
    depths: &'a mut dyn DepthRecorder,
}

impl<'a> Resolver<'a> {
    /// Creates a new `Resolver`.
    ///
    /// # Arguments
    ///
    /// * `config`: Globals, discard prefix, initializer name and lint switches.
    /// * `registry`: Answers whether `extern` declarations are backed by the runtime.
    /// * `sink`: Receives errors and warnings in the order they are found.
    /// * `depths`: Receives `(node, depth)` for every resolved reference.
    pub fn new(
        config: &'a ResolverConfig,
        registry: &'a dyn ForeignRegistry,
        sink: &'a mut dyn DiagnosticSink,
        depths: &'a mut dyn DepthRecorder,
    ) -> Self {
        Self {
            scopes: ScopeStack::new(),
            context: Context::default(),
            config,
            registry,
            sink,
            depths,
        }
    }

    /// Resolves a whole program.
    ///
    /// Opens the top-level scope, walks every statement and closes the scope
    /// again. User-facing problems go to the sink and never stop the walk;
    /// only a [`ResolveFault`] (a malformed tree) ends it early.
    pub fn resolve(mut self, program: &[Stmt]) -> Result<(), ResolveFault> {
        log::debug!("resolving {} top-level statements", program.len());
        self.begin_scope();
        if let Err(fault) = self.resolve_stmts(program) {
            log::debug!("resolution aborted: {}", fault);
            return Err(fault);
        }
        self.end_scope();
        debug_assert!(self.scopes.is_empty(), "unbalanced scopes after resolution");
        log::debug!("resolution finished");
        Ok(())
    }
}

/// Output of [`resolve_program`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub depths: DepthTable,
    pub diagnostics: Diagnostics,
}

impl Resolution {
    /// Whether typing, optimisation and evaluation may run. Warnings never block.
    pub fn can_proceed(&self) -> bool {
        !self.diagnostics.has_errors()
    }
}

/// Resolves `program` with the default collecting sink and depth table.
pub fn resolve_program(
    program: &[Stmt],
    config: &ResolverConfig,
    registry: &dyn ForeignRegistry,
) -> Result<Resolution, ResolveFault> {
    let mut resolution = Resolution::default();
    Resolver::new(
        config,
        registry,
        &mut resolution.diagnostics,
        &mut resolution.depths,
    )
    .resolve(program)?;
    Ok(resolution)
}
