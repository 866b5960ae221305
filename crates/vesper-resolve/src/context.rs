//! Innermost enclosing function, class and struct kinds.
//!
//! Each slot holds exactly one value at any point of the walk. Entering a
//! construct swaps the new kind in and hands back the previous one, which the
//! caller keeps in a local and restores on the way out.

use std::mem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FunctionKind {
    #[default]
    None,
    Function,
    Method,
    Initializer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClassKind {
    #[default]
    None,
    Class,
    Subclass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StructKind {
    #[default]
    None,
    Struct,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context {
    pub function: FunctionKind,
    pub class: ClassKind,
    pub structure: StructKind,
}

impl Context {
    pub fn enter_function(&mut self, kind: FunctionKind) -> FunctionKind {
        mem::replace(&mut self.function, kind)
    }

    pub fn enter_class(&mut self, kind: ClassKind) -> ClassKind {
        mem::replace(&mut self.class, kind)
    }

    pub fn enter_struct(&mut self, kind: StructKind) -> StructKind {
        mem::replace(&mut self.structure, kind)
    }

    pub fn in_function(&self) -> bool {
        self.function != FunctionKind::None
    }

    pub fn in_class(&self) -> bool {
        self.class != ClassKind::None
    }

    pub fn in_struct(&self) -> bool {
        self.structure != StructKind::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_returns_previous_kind_for_restore() {
        let mut cx = Context::default();
        let outer = cx.enter_function(FunctionKind::Method);
        assert_eq!(outer, FunctionKind::None);
        let method = cx.enter_function(FunctionKind::Function);
        assert_eq!(method, FunctionKind::Method);
        cx.function = method;
        assert_eq!(cx.function, FunctionKind::Method);
        cx.function = outer;
        assert!(!cx.in_function());
    }

    #[test]
    fn slots_are_independent() {
        let mut cx = Context::default();
        cx.enter_class(ClassKind::Subclass);
        cx.enter_struct(StructKind::Struct);
        assert!(cx.in_class());
        assert!(cx.in_struct());
        assert!(!cx.in_function());
    }
}
