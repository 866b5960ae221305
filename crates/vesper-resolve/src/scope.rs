use std::hash::BuildHasherDefault;

use fxhash::FxHasher;
use indexmap::IndexMap;

use crate::variable::{VarState, Variable};

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// One lexical block's bindings, in declaration order.
#[derive(Debug, Default)]
pub struct Scope {
    vars: FxIndexMap<String, Variable>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.vars.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.vars.get_mut(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, var: Variable) {
        self.vars.insert(name.into(), var);
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Variable)> {
        self.vars.iter().map(|(name, var)| (name.as_str(), var))
    }

    /// Locals that were defined but never read, skipping struct members and
    /// names carrying the discard prefix.
    pub fn unused<'a>(&'a self, discard_prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a Variable)> + 'a {
        self.iter().filter(move |(name, var)| {
            var.state == VarState::Defined
                && !var.member
                && !(!discard_prefix.is_empty() && name.starts_with(discard_prefix))
        })
    }
}

/// Stack of scope frames, innermost last.
#[derive(Debug, Default)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Default::default()
    }

    /// Push a new, empty scope (e.g. entering a block).
    pub fn push(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Pop the innermost scope (e.g. leaving a block).
    pub fn pop(&mut self) -> Option<Scope> {
        self.scopes.pop()
    }

    /// The innermost scope.
    pub fn peek(&mut self) -> Option<&mut Scope> {
        self.scopes.last_mut()
    }

    pub fn innermost(&self) -> Option<&Scope> {
        self.scopes.last()
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Look `name` up innermost-first. Returns the number of hops from the
    /// innermost scope to the one holding the binding.
    pub fn find(&self, name: &str) -> Option<(usize, &Variable)> {
        self.scopes
            .iter()
            .rev()
            .enumerate()
            .find_map(|(hops, scope)| scope.get(name).map(|var| (hops, var)))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<(usize, &mut Variable)> {
        self.scopes
            .iter_mut()
            .rev()
            .enumerate()
            .find_map(|(hops, scope)| scope.get_mut(name).map(|var| (hops, var)))
    }

    /// Look `name` up in every scope except the innermost one.
    pub fn find_enclosing(&self, name: &str) -> Option<&Variable> {
        let outer = self.scopes.len().saturating_sub(1);
        self.scopes[..outer].iter().rev().find_map(|scope| scope.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::SourceSpan;

    fn var(state: VarState) -> Variable {
        let mut var = Variable::declared(SourceSpan::from((0, 1)), false, false);
        var.advance(state);
        var
    }

    #[test]
    fn find_counts_hops_from_innermost() {
        let mut stack = ScopeStack::new();
        stack.push();
        stack.peek().unwrap().insert("outer", var(VarState::Defined));
        stack.push();
        stack.push();
        stack.peek().unwrap().insert("inner", var(VarState::Defined));

        assert_eq!(stack.depth(), 3);
        assert_eq!(stack.find("inner").map(|(hops, _)| hops), Some(0));
        assert_eq!(stack.find("outer").map(|(hops, _)| hops), Some(2));
        assert!(stack.find("missing").is_none());
    }

    #[test]
    fn innermost_binding_wins() {
        let mut stack = ScopeStack::new();
        stack.push();
        stack.peek().unwrap().insert("x", var(VarState::Read));
        stack.push();
        stack.peek().unwrap().insert("x", var(VarState::Declared));

        let (hops, found) = stack.find("x").unwrap();
        assert_eq!(hops, 0);
        assert!(found.is_declared_only());
        assert!(stack.find_enclosing("x").unwrap().is_read());
    }

    #[test]
    fn find_enclosing_skips_innermost() {
        let mut stack = ScopeStack::new();
        stack.push();
        stack.peek().unwrap().insert("x", var(VarState::Defined));
        assert!(stack.find_enclosing("x").is_none());
        stack.push();
        assert!(stack.find_enclosing("x").is_some());
    }

    #[test]
    fn unused_skips_read_members_and_discarded() {
        let mut scope = Scope::new();
        scope.insert("a", var(VarState::Defined));
        scope.insert("b", var(VarState::Read));
        scope.insert("_c", var(VarState::Defined));
        scope.insert("d", var(VarState::Declared));
        let mut member = var(VarState::Defined);
        member.member = true;
        scope.insert("e", member);
        scope.insert("f", var(VarState::Defined));

        let unused: Vec<_> = scope.unused("_").map(|(name, _)| name).collect();
        assert_eq!(unused, vec!["a", "f"]);
    }

    #[test]
    fn pop_on_empty_stack_is_none() {
        let mut stack = ScopeStack::new();
        assert!(stack.pop().is_none());
        assert!(stack.peek().is_none());
    }
}
