use super::common::{Ident, NodeId};
use super::expr::Expr;
use super::types::Type;
use miette::SourceSpan;

#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub id: NodeId,
    pub kind: StmtKind,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    Block(Vec<Stmt>),
    Break,
    Continue,
    /// `let` / `let mut` / `extern let`
    Var(VarDecl),
    /// Bounded range loop: `for i in from..to { ... }`. The loop variable is optional.
    For {
        var: Option<Ident>,
        from: Expr,
        to: Expr,
        body: Vec<Stmt>,
    },
    /// `for x in collection { ... }`
    ForIn {
        var: Ident,
        iterable: Expr,
        body: Vec<Stmt>,
    },
    /// `while cond { ... }`, or `loop { ... }` when the condition is absent.
    While {
        condition: Option<Expr>,
        body: Vec<Stmt>,
    },
    Function(FunctionDecl),
    Expression(Expr),
    Print(Expr),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    Return {
        value: Option<Expr>,
    },
    Struct(StructDecl),
    Class(ClassDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: Ident,
    pub mutable: bool,
    pub ty: Option<Type>,
    pub initializer: Option<Expr>,
    /// Bound to a value supplied by the host runtime.
    pub foreign: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// `None` for anonymous functions.
    pub name: Option<Ident>,
    pub params: Vec<Param>,
    pub return_type: Option<Type>,
    pub body: Vec<Stmt>,
    /// Implemented by the host runtime; the body is empty.
    pub foreign: bool,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: Ident,
    pub ty: Type,
}

impl Param {
    pub fn is_mutable(&self) -> bool {
        self.ty.mutable
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub name: Ident,
    /// Field declarations (and any other member statements), in source order.
    pub members: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: Ident,
    /// Always a `Variable` expression when present.
    pub superclass: Option<Expr>,
    pub methods: Vec<FunctionDecl>,
}

impl Stmt {
    pub fn new(id: NodeId, kind: StmtKind, span: SourceSpan) -> Self {
        Self { id, kind, span }
    }

    /// Whether control never falls through to the next statement in the same list.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.kind,
            StmtKind::Return { .. } | StmtKind::Break | StmtKind::Continue
        )
    }
}
