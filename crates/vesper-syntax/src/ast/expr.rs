use super::common::{Ident, Literal, NodeId};
use super::stmt::FunctionDecl;
use miette::SourceSpan;

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub id: NodeId,
    pub kind: ExprKind,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// `[a, b, c]`
    Array(Vec<Expr>),
    /// `name = value`
    Assign {
        name: Ident,
        value: Box<Expr>,
    },
    Variable(Ident),
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    Logical {
        left: Box<Expr>,
        op: LogicalOp,
        right: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    /// `object.name`
    Get {
        object: Box<Expr>,
        name: Ident,
    },
    /// `object[index]`
    Index {
        object: Box<Expr>,
        index: Box<Expr>,
    },
    /// `mut name` in argument position: passes the binding by mutable reference.
    MutArg(Ident),
    /// `object.name = value`
    Set {
        object: Box<Expr>,
        name: Ident,
        value: Box<Expr>,
    },
    /// `super.method`
    Super {
        method: Ident,
    },
    This,
    Grouping(Box<Expr>),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    /// `Point { x: 1, y: 2 }`
    StructInit {
        name: Ident,
        fields: Vec<FieldInit>,
    },
    Literal(Literal),
    /// Anonymous function. The declaration never carries a name.
    Lambda(Box<FunctionDecl>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldInit {
    pub name: Ident,
    pub value: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl Expr {
    pub fn new(id: NodeId, kind: ExprKind, span: SourceSpan) -> Self {
        Self { id, kind, span }
    }

    /// The identifier if this is a bare variable reference.
    pub fn as_variable(&self) -> Option<&Ident> {
        match &self.kind {
            ExprKind::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Short name of the node shape, used in internal diagnostics.
    pub fn shape(&self) -> &'static str {
        match &self.kind {
            ExprKind::Array(_) => "array literal",
            ExprKind::Assign { .. } => "assignment",
            ExprKind::Variable(_) => "variable",
            ExprKind::Binary { .. } => "binary expression",
            ExprKind::Logical { .. } => "logical expression",
            ExprKind::Call { .. } => "call",
            ExprKind::Get { .. } => "member access",
            ExprKind::Index { .. } => "index expression",
            ExprKind::MutArg(_) => "mutable argument",
            ExprKind::Set { .. } => "member assignment",
            ExprKind::Super { .. } => "super",
            ExprKind::This => "this",
            ExprKind::Grouping(_) => "grouping",
            ExprKind::Unary { .. } => "unary expression",
            ExprKind::StructInit { .. } => "struct literal",
            ExprKind::Literal(_) => "literal",
            ExprKind::Lambda(_) => "anonymous function",
        }
    }
}
