//! Scope bookkeeping and the declare/define/lookup primitives.

use miette::SourceSpan;
use vesper_syntax::{Ident, NodeId};

use super::Resolver;
use crate::error::{ResolutionError, ResolverWarning};
use crate::variable::Variable;

impl Resolver<'_> {
    pub(super) fn begin_scope(&mut self) {
        self.scopes.push();
        log::trace!("push scope (depth {})", self.scopes.depth());
    }

    /// Pops the innermost scope and reports locals that were never read.
    pub(super) fn end_scope(&mut self) {
        let Some(scope) = self.scopes.pop() else {
            return;
        };
        log::trace!("pop scope (depth {}, {} bindings)", self.scopes.depth() + 1, scope.len());
        let config = self.config;
        if !config.lints.unused {
            return;
        }
        for (name, var) in scope.unused(&config.unused_prefix) {
            self.sink.warn(ResolverWarning::UnusedLocalVariable {
                name: name.to_string(),
                span: var.span,
            });
        }
    }

    /// Adds `name` to the innermost scope in the `Declared` state.
    ///
    /// A name already present in the innermost scope is an error and the
    /// first declaration is kept. A name present in an enclosing scope is a
    /// shadowing warning, and the declaration still goes ahead.
    pub(super) fn declare(&mut self, name: &Ident, mutable: bool, member: bool) {
        let Some(innermost) = self.scopes.innermost() else {
            return;
        };
        if let Some(existing) = innermost.get(&name.name) {
            let previous_span = existing.span;
            self.sink.report(ResolutionError::DuplicateDeclaration {
                name: name.name.clone(),
                span: name.span,
                previous_span,
            });
            return;
        }

        if let Some(original) = self.scopes.find_enclosing(&name.name) {
            let original_span = original.span;
            if self.config.lints.shadowing {
                self.sink.warn(ResolverWarning::ShadowedVariable {
                    name: name.name.clone(),
                    original_span,
                    shadow_span: name.span,
                });
            }
        }

        if let Some(scope) = self.scopes.peek() {
            scope.insert(name.name.clone(), Variable::declared(name.span, mutable, member));
        }
    }

    /// Promotes `name` in the innermost scope to `Defined`.
    pub(super) fn define(&mut self, name: &Ident) {
        let Some(scope) = self.scopes.peek() else {
            return;
        };
        match scope.get_mut(&name.name) {
            Some(var) => var.define(),
            None => {
                let mut var = Variable::declared(name.span, false, false);
                var.define();
                scope.insert(name.name.clone(), var);
            }
        }
    }

    /// Injects a synthetic binding (`this`, `super`) into the innermost scope.
    pub(super) fn bind_pseudo(&mut self, name: &str, span: SourceSpan) {
        if let Some(scope) = self.scopes.peek() {
            scope.insert(name, Variable::pseudo(span));
        }
    }

    /// Binds a reference to the innermost scope declaring `name` and records
    /// its depth. `is_read` promotes the binding to `Read`; writes don't.
    pub(super) fn resolve_local(&mut self, node: NodeId, name: &str, span: SourceSpan, is_read: bool) {
        match self.scopes.find_mut(name) {
            Some((depth, var)) => {
                if is_read {
                    var.mark_read();
                }
                log::trace!("{} `{}` resolved at depth {}", node, name, depth);
                self.depths.record(node, depth);
            }
            None if self.config.is_global(name) => {
                log::trace!("{} `{}` resolved as a global", node, name);
            }
            None => self.sink.report(ResolutionError::NotDeclared {
                name: name.to_string(),
                span,
            }),
        }
    }

    /// Side-effect free lookup, for checks that must run before `resolve_local`.
    pub(super) fn find_in_scopes(&self, name: &str) -> Option<&Variable> {
        self.scopes.find(name).map(|(_, var)| var)
    }
}
