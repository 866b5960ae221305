//! Syntax tree for the Vesper scripting language.
//!
//! Lexing and parsing live outside this crate; what is defined here is the
//! tree shape every later pass (resolution, typing, evaluation) walks. Every
//! statement and expression carries a [`NodeId`](ast::NodeId) that stays
//! stable for the lifetime of the tree, which is what side tables such as the
//! resolver's depth table are keyed by.

pub mod ast;

pub use ast::build::AstBuilder;
pub use ast::{Expr, ExprKind, Ident, Literal, NodeId, Stmt, StmtKind};
