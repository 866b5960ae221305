use super::common::Ident;
use miette::SourceSpan;

/// A declared type annotation, e.g. `mut [num]`.
///
/// The resolver only looks at `mutable`; the rest is carried for the type
/// checker that runs afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Type {
    pub kind: TypeKind,
    pub mutable: bool,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    Named(Ident),
    Array(Box<Type>),
    Function(Vec<Type>, Box<Type>),
    Any,
}

impl Type {
    pub fn new(kind: TypeKind, span: SourceSpan) -> Self {
        Self { kind, mutable: false, span }
    }

    pub fn mutable(mut self) -> Self {
        self.mutable = true;
        self
    }
}
