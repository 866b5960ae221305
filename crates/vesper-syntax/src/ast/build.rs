//! Programmatic construction of syntax trees.
//!
//! The builder hands out a fresh [`NodeId`] and a distinct one-byte span for
//! every node it creates, so trees built here behave exactly like parsed ones
//! as far as identity-keyed side tables are concerned. All methods take
//! `&self` so calls nest freely.

use std::cell::Cell;

use miette::SourceSpan;

use super::common::{Ident, Literal, NodeId};
use super::expr::{BinaryOp, Expr, ExprKind, FieldInit, LogicalOp, UnaryOp};
use super::stmt::{ClassDecl, FunctionDecl, Param, Stmt, StmtKind, StructDecl, VarDecl};
use super::types::{Type, TypeKind};

#[derive(Debug, Default)]
pub struct AstBuilder {
    next_id: Cell<u32>,
    next_offset: Cell<usize>,
}

impl AstBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_id(&self) -> NodeId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        NodeId(id)
    }

    pub fn span(&self) -> SourceSpan {
        let offset = self.next_offset.get();
        self.next_offset.set(offset + 1);
        SourceSpan::from((offset, 1))
    }

    /// Number of nodes handed out so far.
    pub fn node_count(&self) -> usize {
        self.next_id.get() as usize
    }

    pub fn ident(&self, name: &str) -> Ident {
        Ident::new(name, self.span())
    }

    fn expr(&self, kind: ExprKind) -> Expr {
        Expr::new(self.node_id(), kind, self.span())
    }

    fn stmt(&self, kind: StmtKind) -> Stmt {
        Stmt::new(self.node_id(), kind, self.span())
    }

    // ---- types ----

    pub fn ty(&self, name: &str) -> Type {
        Type::new(TypeKind::Named(self.ident(name)), self.span())
    }

    pub fn any_ty(&self) -> Type {
        Type::new(TypeKind::Any, self.span())
    }

    // ---- expressions ----

    pub fn num(&self, value: f64) -> Expr {
        self.expr(ExprKind::Literal(Literal::Number(value)))
    }

    pub fn string(&self, value: &str) -> Expr {
        self.expr(ExprKind::Literal(Literal::String(value.to_string())))
    }

    pub fn boolean(&self, value: bool) -> Expr {
        self.expr(ExprKind::Literal(Literal::Bool(value)))
    }

    pub fn nil(&self) -> Expr {
        self.expr(ExprKind::Literal(Literal::Nil))
    }

    pub fn var(&self, name: &str) -> Expr {
        self.expr(ExprKind::Variable(self.ident(name)))
    }

    pub fn assign(&self, name: &str, value: Expr) -> Expr {
        self.expr(ExprKind::Assign {
            name: self.ident(name),
            value: Box::new(value),
        })
    }

    pub fn array(&self, elements: Vec<Expr>) -> Expr {
        self.expr(ExprKind::Array(elements))
    }

    pub fn binary(&self, left: Expr, op: BinaryOp, right: Expr) -> Expr {
        self.expr(ExprKind::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    pub fn logical(&self, left: Expr, op: LogicalOp, right: Expr) -> Expr {
        self.expr(ExprKind::Logical {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    pub fn unary(&self, op: UnaryOp, operand: Expr) -> Expr {
        self.expr(ExprKind::Unary {
            op,
            operand: Box::new(operand),
        })
    }

    pub fn grouping(&self, inner: Expr) -> Expr {
        self.expr(ExprKind::Grouping(Box::new(inner)))
    }

    pub fn call(&self, callee: Expr, args: Vec<Expr>) -> Expr {
        self.expr(ExprKind::Call {
            callee: Box::new(callee),
            args,
        })
    }

    pub fn get(&self, object: Expr, name: &str) -> Expr {
        self.expr(ExprKind::Get {
            object: Box::new(object),
            name: self.ident(name),
        })
    }

    pub fn set(&self, object: Expr, name: &str, value: Expr) -> Expr {
        self.expr(ExprKind::Set {
            object: Box::new(object),
            name: self.ident(name),
            value: Box::new(value),
        })
    }

    pub fn index(&self, object: Expr, index: Expr) -> Expr {
        self.expr(ExprKind::Index {
            object: Box::new(object),
            index: Box::new(index),
        })
    }

    pub fn mut_arg(&self, name: &str) -> Expr {
        self.expr(ExprKind::MutArg(self.ident(name)))
    }

    pub fn this(&self) -> Expr {
        self.expr(ExprKind::This)
    }

    pub fn super_(&self, method: &str) -> Expr {
        self.expr(ExprKind::Super {
            method: self.ident(method),
        })
    }

    pub fn struct_init(&self, name: &str, fields: Vec<(&str, Expr)>) -> Expr {
        let fields = fields
            .into_iter()
            .map(|(field, value)| FieldInit {
                name: self.ident(field),
                value,
            })
            .collect();
        self.expr(ExprKind::StructInit {
            name: self.ident(name),
            fields,
        })
    }

    pub fn lambda(&self, params: Vec<Param>, body: Vec<Stmt>) -> Expr {
        let decl = self.function_decl(None, params, body);
        self.expr(ExprKind::Lambda(Box::new(decl)))
    }

    // ---- declarations ----

    pub fn param(&self, name: &str) -> Param {
        Param {
            name: self.ident(name),
            ty: self.any_ty(),
        }
    }

    pub fn param_mut(&self, name: &str) -> Param {
        Param {
            name: self.ident(name),
            ty: self.any_ty().mutable(),
        }
    }

    pub fn function_decl(&self, name: Option<&str>, params: Vec<Param>, body: Vec<Stmt>) -> FunctionDecl {
        FunctionDecl {
            name: name.map(|name| self.ident(name)),
            params,
            return_type: None,
            body,
            foreign: false,
            span: self.span(),
        }
    }

    /// A class method; `init` is the initializer.
    pub fn method(&self, name: &str, params: Vec<Param>, body: Vec<Stmt>) -> FunctionDecl {
        self.function_decl(Some(name), params, body)
    }

    pub fn var_decl(&self, decl: VarDecl) -> Stmt {
        self.stmt(StmtKind::Var(decl))
    }

    fn binding(&self, name: &str, mutable: bool, initializer: Option<Expr>) -> Stmt {
        self.var_decl(VarDecl {
            name: self.ident(name),
            mutable,
            ty: None,
            initializer,
            foreign: false,
        })
    }

    pub fn let_(&self, name: &str, initializer: Expr) -> Stmt {
        self.binding(name, false, Some(initializer))
    }

    /// `let name;` with no initializer.
    pub fn let_uninit(&self, name: &str) -> Stmt {
        self.binding(name, false, None)
    }

    pub fn let_mut(&self, name: &str, initializer: Option<Expr>) -> Stmt {
        self.binding(name, true, initializer)
    }

    pub fn extern_let(&self, name: &str) -> Stmt {
        self.var_decl(VarDecl {
            name: self.ident(name),
            mutable: false,
            ty: None,
            initializer: None,
            foreign: true,
        })
    }

    /// Struct field declaration: `name;`
    pub fn field(&self, name: &str) -> Stmt {
        self.binding(name, false, None)
    }

    pub fn field_mut(&self, name: &str) -> Stmt {
        self.binding(name, true, None)
    }

    pub fn fun(&self, name: &str, params: Vec<Param>, body: Vec<Stmt>) -> Stmt {
        let decl = self.function_decl(Some(name), params, body);
        self.stmt(StmtKind::Function(decl))
    }

    pub fn extern_fun(&self, name: &str, params: Vec<Param>) -> Stmt {
        let mut decl = self.function_decl(Some(name), params, Vec::new());
        decl.foreign = true;
        self.stmt(StmtKind::Function(decl))
    }

    pub fn class(&self, name: &str, superclass: Option<&str>, methods: Vec<FunctionDecl>) -> Stmt {
        self.stmt(StmtKind::Class(ClassDecl {
            name: self.ident(name),
            superclass: superclass.map(|name| self.var(name)),
            methods,
        }))
    }

    pub fn struct_(&self, name: &str, members: Vec<Stmt>) -> Stmt {
        self.stmt(StmtKind::Struct(StructDecl {
            name: self.ident(name),
            members,
        }))
    }

    // ---- statements ----

    pub fn expr_stmt(&self, expr: Expr) -> Stmt {
        self.stmt(StmtKind::Expression(expr))
    }

    pub fn print(&self, expr: Expr) -> Stmt {
        self.stmt(StmtKind::Print(expr))
    }

    pub fn block(&self, stmts: Vec<Stmt>) -> Stmt {
        self.stmt(StmtKind::Block(stmts))
    }

    pub fn if_(&self, condition: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Stmt {
        self.stmt(StmtKind::If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        })
    }

    pub fn while_(&self, condition: Option<Expr>, body: Vec<Stmt>) -> Stmt {
        self.stmt(StmtKind::While { condition, body })
    }

    pub fn for_range(&self, var: Option<&str>, from: Expr, to: Expr, body: Vec<Stmt>) -> Stmt {
        self.stmt(StmtKind::For {
            var: var.map(|name| self.ident(name)),
            from,
            to,
            body,
        })
    }

    pub fn for_in(&self, var: &str, iterable: Expr, body: Vec<Stmt>) -> Stmt {
        self.stmt(StmtKind::ForIn {
            var: self.ident(var),
            iterable,
            body,
        })
    }

    pub fn ret(&self, value: Option<Expr>) -> Stmt {
        self.stmt(StmtKind::Return { value })
    }

    pub fn break_(&self) -> Stmt {
        self.stmt(StmtKind::Break)
    }

    pub fn continue_(&self) -> Stmt {
        self.stmt(StmtKind::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_calls_get_distinct_ids() {
        let b = AstBuilder::new();
        let expr = b.binary(b.var("x"), BinaryOp::Add, b.var("x"));
        let ExprKind::Binary { left, right, .. } = &expr.kind else {
            panic!("expected binary expression");
        };
        assert_ne!(left.id, right.id);
        assert_ne!(left.id, expr.id);
        assert_ne!(left.span, right.span);
        assert_eq!(b.node_count(), 3);
    }

    #[test]
    fn extern_function_is_foreign_with_empty_body() {
        let b = AstBuilder::new();
        let stmt = b.extern_fun("clock", vec![]);
        match stmt.kind {
            StmtKind::Function(decl) => {
                assert!(decl.foreign);
                assert!(decl.body.is_empty());
                assert_eq!(decl.name.map(|n| n.name), Some("clock".to_string()));
            }
            other => panic!("expected function, got {other:?}"),
        }
    }

    #[test]
    fn mutable_param_carries_flag_on_type() {
        let b = AstBuilder::new();
        assert!(b.param_mut("xs").is_mutable());
        assert!(!b.param("xs").is_mutable());
    }
}
