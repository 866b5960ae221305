pub mod build;
pub mod common;
pub mod expr;
pub mod stmt;
pub mod types;

pub use common::{Ident, Literal, NodeId};
pub use expr::{BinaryOp, Expr, ExprKind, FieldInit, LogicalOp, UnaryOp};
pub use stmt::{ClassDecl, FunctionDecl, Param, Stmt, StmtKind, StructDecl, VarDecl};
pub use types::{Type, TypeKind};
