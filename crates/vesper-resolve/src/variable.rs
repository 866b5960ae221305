use miette::SourceSpan;

/// Lifecycle of a binding. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VarState {
    /// Slot exists but the initializer has not been evaluated yet.
    Declared,
    /// Holds a value; may be read.
    Defined,
    /// Has been read at least once.
    Read,
}

/// One declared identifier, owned by the scope frame that declared it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub span: SourceSpan,
    pub state: VarState,
    pub mutable: bool,
    /// Struct field rather than block-scoped local.
    pub member: bool,
}

impl Variable {
    pub fn declared(span: SourceSpan, mutable: bool, member: bool) -> Self {
        Self {
            span,
            state: VarState::Declared,
            mutable,
            member,
        }
    }

    /// Synthetic bindings such as `this` and `super`: immutable and already read.
    pub fn pseudo(span: SourceSpan) -> Self {
        Self {
            span,
            state: VarState::Read,
            mutable: false,
            member: false,
        }
    }

    pub fn advance(&mut self, to: VarState) {
        if to > self.state {
            self.state = to;
        }
    }

    pub fn define(&mut self) {
        self.advance(VarState::Defined);
    }

    pub fn mark_read(&mut self) {
        self.advance(VarState::Read);
    }

    pub fn is_declared_only(&self) -> bool {
        self.state == VarState::Declared
    }

    pub fn is_read(&self) -> bool {
        self.state == VarState::Read
    }
}
