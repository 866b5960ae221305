use miette::SourceSpan;
use vesper_syntax::ast::{ClassDecl, FunctionDecl, StructDecl, VarDecl};
use vesper_syntax::{Expr, Stmt, StmtKind};

use super::Resolver;
use crate::context::{ClassKind, FunctionKind, StructKind};
use crate::error::{ResolutionError, ResolveFault, ResolverWarning};

impl Resolver<'_> {
    /// Resolves a statement list in order, flagging the first statement
    /// after each `return`/`break`/`continue` as unreachable.
    pub(super) fn resolve_stmts(&mut self, stmts: &[Stmt]) -> Result<(), ResolveFault> {
        let mut terminated_by: Option<SourceSpan> = None;
        for stmt in stmts {
            if let Some(span) = terminated_by.take() {
                if self.config.lints.unreachable {
                    self.sink.warn(ResolverWarning::UnreachableCode { span });
                }
            }
            self.resolve_stmt(stmt)?;
            if stmt.is_terminal() {
                terminated_by = Some(stmt.span);
            }
        }
        Ok(())
    }

    fn resolve_stmt(&mut self, stmt: &Stmt) -> Result<(), ResolveFault> {
        match &stmt.kind {
            StmtKind::Block(stmts) => {
                self.begin_scope();
                self.resolve_stmts(stmts)?;
                self.end_scope();
            }
            StmtKind::Break | StmtKind::Continue => {}
            StmtKind::Var(decl) => self.resolve_var_decl(decl)?,
            StmtKind::For { var, from, to, body } => {
                self.resolve_expr(from)?;
                self.resolve_expr(to)?;
                self.begin_scope();
                if let Some(var) = var {
                    self.declare(var, false, false);
                    self.define(var);
                }
                self.resolve_loop_body(body, stmt.span)?;
                self.end_scope();
            }
            StmtKind::ForIn { var, iterable, body } => {
                self.resolve_expr(iterable)?;
                self.begin_scope();
                self.declare(var, false, false);
                self.define(var);
                self.resolve_loop_body(body, stmt.span)?;
                self.end_scope();
            }
            StmtKind::While { condition, body } => {
                if let Some(condition) = condition {
                    self.resolve_expr(condition)?;
                }
                self.begin_scope();
                self.resolve_stmts(body)?;
                self.end_scope();
            }
            StmtKind::Function(decl) => {
                if let Some(name) = &decl.name {
                    if decl.foreign && !self.registry.is_registered_function(&name.name) {
                        self.sink.report(ResolutionError::UnregisteredForeignFunction {
                            name: name.name.clone(),
                            span: name.span,
                        });
                    }
                    // Defined before the body so the function can call itself.
                    let member = self.context.in_struct();
                    self.declare(name, false, member);
                    self.define(name);
                }
                self.resolve_function(decl, FunctionKind::Function)?;
            }
            StmtKind::Expression(expr) | StmtKind::Print(expr) => self.resolve_expr(expr)?,
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.resolve_expr(condition)?;
                self.resolve_stmt(then_branch)?;
                if let Some(else_branch) = else_branch {
                    self.resolve_stmt(else_branch)?;
                }
            }
            StmtKind::Return { value } => self.resolve_return(value.as_ref(), stmt.span)?,
            StmtKind::Struct(decl) => self.resolve_struct(decl)?,
            StmtKind::Class(decl) => self.resolve_class(decl)?,
        }
        Ok(())
    }

    fn resolve_var_decl(&mut self, decl: &VarDecl) -> Result<(), ResolveFault> {
        let name = &decl.name;
        if decl.foreign && !self.registry.is_registered_variable(&name.name) {
            self.sink.report(ResolutionError::UnregisteredForeignVariable {
                name: name.name.clone(),
                span: name.span,
            });
        }

        let member = self.context.in_struct();
        self.declare(name, decl.mutable, member);
        let mut uninitialized = false;
        match &decl.initializer {
            Some(initializer) => {
                // Still `Declared` while the initializer is resolved, so
                // `let x = x;` is caught.
                self.resolve_expr(initializer)?;
            }
            None if !decl.mutable && !member && !decl.foreign => {
                self.sink.report(ResolutionError::UninitializedImmutable {
                    name: name.name.clone(),
                    span: name.span,
                });
                uninitialized = true;
            }
            None => {}
        }
        self.define(name);
        if uninitialized {
            // Already reported; no unused warning on top.
            if let Some(var) = self.scopes.peek().and_then(|scope| scope.get_mut(&name.name)) {
                var.mark_read();
            }
        }
        Ok(())
    }

    fn resolve_loop_body(&mut self, body: &[Stmt], loop_span: SourceSpan) -> Result<(), ResolveFault> {
        if body.is_empty() {
            self.sink.report(ResolutionError::EmptyLoopBody { span: loop_span });
        }
        self.resolve_stmts(body)
    }

    fn resolve_return(&mut self, value: Option<&Expr>, span: SourceSpan) -> Result<(), ResolveFault> {
        if !self.context.in_function() {
            self.sink.report(ResolutionError::TopLevelReturn { span });
        }
        if let Some(value) = value {
            if self.context.function == FunctionKind::Initializer {
                self.sink.report(ResolutionError::InitializerReturnValue { span: value.span });
            } else {
                self.resolve_expr(value)?;
            }
        }
        Ok(())
    }

    /// Parameters and body in a fresh scope, with `kind` as the enclosing
    /// function kind. Struct context does not reach into function bodies.
    pub(super) fn resolve_function(&mut self, decl: &FunctionDecl, kind: FunctionKind) -> Result<(), ResolveFault> {
        let enclosing_function = self.context.enter_function(kind);
        let enclosing_struct = self.context.enter_struct(StructKind::None);
        self.begin_scope();
        for param in &decl.params {
            self.declare(&param.name, param.is_mutable(), false);
            // A foreign function has no body to fill its parameter slots.
            if !decl.foreign {
                self.define(&param.name);
            }
        }
        self.resolve_stmts(&decl.body)?;
        self.end_scope();
        self.context.structure = enclosing_struct;
        self.context.function = enclosing_function;
        Ok(())
    }

    fn resolve_struct(&mut self, decl: &StructDecl) -> Result<(), ResolveFault> {
        let member = self.context.in_struct();
        self.declare(&decl.name, false, member);
        self.define(&decl.name);

        let enclosing = self.context.enter_struct(StructKind::Struct);
        self.begin_scope();
        self.resolve_stmts(&decl.members)?;
        self.end_scope();
        self.context.structure = enclosing;
        Ok(())
    }

    fn resolve_class(&mut self, decl: &ClassDecl) -> Result<(), ResolveFault> {
        let superclass = decl.superclass.as_ref();
        if let Some(parent) = superclass.and_then(Expr::as_variable) {
            if parent.name == decl.name.name {
                self.sink.report(ResolutionError::SelfInheritance {
                    name: parent.name.clone(),
                    span: parent.span,
                });
            }
        }

        let member = self.context.in_struct();
        self.declare(&decl.name, false, member);
        self.define(&decl.name);

        let kind = if superclass.is_some() {
            ClassKind::Subclass
        } else {
            ClassKind::Class
        };
        let enclosing = self.context.enter_class(kind);

        if let Some(parent) = superclass {
            self.resolve_expr(parent)?;
            self.begin_scope();
            self.bind_pseudo("super", parent.span);
        }

        self.begin_scope();
        self.bind_pseudo("this", decl.name.span);
        for method in &decl.methods {
            let is_initializer = method
                .name
                .as_ref()
                .is_some_and(|name| name.name == self.config.initializer_name);
            let kind = if is_initializer {
                FunctionKind::Initializer
            } else {
                FunctionKind::Method
            };
            self.resolve_function(method, kind)?;
        }
        self.end_scope();

        if superclass.is_some() {
            self.end_scope();
        }
        self.context.class = enclosing;
        Ok(())
    }
}
