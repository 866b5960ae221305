use miette::SourceSpan;
use vesper_syntax::{Expr, ExprKind, Ident};

use super::Resolver;
use crate::context::{ClassKind, FunctionKind};
use crate::error::{ResolutionError, ResolveFault};

impl Resolver<'_> {
    pub(super) fn resolve_expr(&mut self, expr: &Expr) -> Result<(), ResolveFault> {
        match &expr.kind {
            ExprKind::Array(elements) => {
                for element in elements {
                    self.resolve_expr(element)?;
                }
            }
            ExprKind::Assign { name, value } => {
                if let Some(var) = self.find_in_scopes(&name.name) {
                    if !var.mutable {
                        let declared_span = var.span;
                        self.sink.report(ResolutionError::ReassignImmutable {
                            name: name.name.clone(),
                            span: name.span,
                            declared_span,
                        });
                    }
                }
                self.resolve_expr(value)?;
                self.resolve_local(expr.id, &name.name, name.span, false);
            }
            ExprKind::Variable(name) => self.resolve_variable(expr, name),
            ExprKind::Binary { left, right, .. } | ExprKind::Logical { left, right, .. } => {
                self.resolve_expr(left)?;
                self.resolve_expr(right)?;
            }
            ExprKind::Call { callee, args } => {
                self.resolve_expr(callee)?;
                for arg in args {
                    self.resolve_expr(arg)?;
                }
            }
            // Field names are not lexical bindings.
            ExprKind::Get { object, .. } => self.resolve_expr(object)?,
            ExprKind::Index { object, index } => {
                self.resolve_expr(object)?;
                self.resolve_expr(index)?;
            }
            ExprKind::MutArg(name) => self.resolve_local(expr.id, &name.name, name.span, true),
            ExprKind::Set { object, value, .. } => {
                self.resolve_expr(value)?;
                self.resolve_expr(object)?;
                self.check_set_target(object, expr.span)?;
            }
            ExprKind::Super { .. } => match self.context.class {
                ClassKind::None => {
                    self.sink.report(ResolutionError::SuperOutsideClass { span: expr.span });
                }
                ClassKind::Class => {
                    self.sink.report(ResolutionError::SuperWithoutSuperclass { span: expr.span });
                }
                ClassKind::Subclass => self.resolve_local(expr.id, "super", expr.span, true),
            },
            ExprKind::This => {
                if self.context.in_class() {
                    self.resolve_local(expr.id, "this", expr.span, true);
                } else {
                    self.sink.report(ResolutionError::ThisOutsideClass { span: expr.span });
                }
            }
            ExprKind::Grouping(inner) | ExprKind::Unary { operand: inner, .. } => {
                self.resolve_expr(inner)?;
            }
            ExprKind::StructInit { name, fields } => {
                for field in fields {
                    self.resolve_expr(&field.value)?;
                }
                self.resolve_local(expr.id, &name.name, name.span, true);
            }
            ExprKind::Literal(_) => {}
            ExprKind::Lambda(decl) => self.resolve_function(decl, FunctionKind::Function)?,
        }
        Ok(())
    }

    fn resolve_variable(&mut self, expr: &Expr, name: &Ident) {
        let in_own_initializer = self
            .scopes
            .innermost()
            .and_then(|scope| scope.get(&name.name))
            .is_some_and(|var| var.is_declared_only());
        if in_own_initializer {
            self.sink.report(ResolutionError::SelfReference {
                name: name.name.clone(),
                span: name.span,
            });
            return;
        }

        if self.config.is_discarded(&name.name) {
            self.sink.report(ResolutionError::ReadOfDiscarded {
                name: name.name.clone(),
                prefix: self.config.unused_prefix.clone(),
                span: name.span,
            });
            return;
        }

        self.resolve_local(expr.id, &name.name, name.span, true);
    }

    /// Mutating a field goes through the binding the object names, so that
    /// binding must be mutable. Chains (`a.b.c = v`, `a[i].c = v`) are not
    /// followed; `this` may always be mutated through.
    fn check_set_target(&mut self, object: &Expr, set_span: SourceSpan) -> Result<(), ResolveFault> {
        match &object.kind {
            ExprKind::Variable(name) => {
                if let Some(var) = self.find_in_scopes(&name.name) {
                    if !var.mutable {
                        let declared_span = var.span;
                        self.sink.report(ResolutionError::MutateThroughImmutable {
                            name: name.name.clone(),
                            span: set_span,
                            declared_span,
                        });
                    }
                }
                Ok(())
            }
            ExprKind::Get { .. } | ExprKind::Index { .. } | ExprKind::This => Ok(()),
            _ => Err(ResolveFault::UnexpectedSetTarget {
                shape: object.shape(),
                span: object.span,
            }),
        }
    }
}
