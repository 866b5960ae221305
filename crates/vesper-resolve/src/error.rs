use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Hard errors found during resolution.
///
/// None of these stop the walk; the resolver keeps going so one run surfaces
/// as much as possible. Any of them being present means later phases must
/// not run.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// The same name declared twice in one scope.
    #[error("Duplicate declaration: `{name}` is already declared in this scope")]
    #[diagnostic(code(vesper_resolve::duplicate_declaration))]
    DuplicateDeclaration {
        /// The name being redeclared.
        name: String,
        /// The second declaration.
        #[label("declared again here")]
        span: SourceSpan,
        /// The declaration that is kept.
        #[label("first declared here")]
        previous_span: SourceSpan,
    },

    /// A reference that no enclosing scope or global declares.
    #[error("Name not found: `{name}` is not declared in this scope")]
    #[diagnostic(
        code(vesper_resolve::not_declared),
        help("declare it with `let` before using it")
    )]
    NotDeclared {
        /// The unresolved name.
        name: String,
        /// The reference.
        #[label("referenced here")]
        span: SourceSpan,
    },

    /// `let x = x;`
    #[error("Cannot read `{name}` within its own initializer")]
    #[diagnostic(code(vesper_resolve::self_reference))]
    SelfReference {
        /// The binding being initialized.
        name: String,
        #[label("read before it is defined")]
        span: SourceSpan,
    },

    /// Reading a binding whose name marks it as intentionally unused.
    #[error("Cannot read `{name}`: names starting with `{prefix}` are discarded")]
    #[diagnostic(
        code(vesper_resolve::read_of_discarded),
        help("rename the binding if it is meant to be used")
    )]
    ReadOfDiscarded {
        /// The discarded name.
        name: String,
        /// The configured discard prefix.
        prefix: String,
        #[label("read here")]
        span: SourceSpan,
    },

    /// Plain assignment to a binding declared without `mut`.
    #[error("Cannot reassign non-mutable binding `{name}`")]
    #[diagnostic(
        code(vesper_resolve::reassign_immutable),
        help("declare it with `let mut` to allow reassignment")
    )]
    ReassignImmutable {
        /// The binding being assigned.
        name: String,
        /// The assignment target.
        #[label("assigned here")]
        span: SourceSpan,
        /// Where the binding was declared.
        #[label("declared here")]
        declared_span: SourceSpan,
    },

    /// `p.x = v` where `p` was declared without `mut`.
    #[error("Cannot mutate a field through non-mutable binding `{name}`")]
    #[diagnostic(code(vesper_resolve::mutate_through_immutable))]
    MutateThroughImmutable {
        /// The binding the field is reached through.
        name: String,
        /// The whole member assignment.
        #[label("field assigned here")]
        span: SourceSpan,
        /// Where the binding was declared.
        #[label("declared here")]
        declared_span: SourceSpan,
    },

    /// `let x;` outside a struct body. Foreign and `mut` bindings are exempt.
    #[error("Non-mutable binding `{name}` must be initialized")]
    #[diagnostic(code(vesper_resolve::uninitialized_immutable))]
    UninitializedImmutable {
        /// The binding declared without a value.
        name: String,
        #[label("declared without a value")]
        span: SourceSpan,
    },

    /// `return` outside any function body.
    #[error("Cannot return from top-level code")]
    #[diagnostic(code(vesper_resolve::top_level_return))]
    TopLevelReturn {
        #[label("return outside of a function")]
        span: SourceSpan,
    },

    /// `return value;` inside a class's initializer method.
    #[error("Cannot return a value from an initializer")]
    #[diagnostic(code(vesper_resolve::initializer_return_value))]
    InitializerReturnValue {
        /// The returned expression.
        #[label("value returned here")]
        span: SourceSpan,
    },

    /// `this` outside any class body.
    #[error("Cannot use `this` outside of a class")]
    #[diagnostic(code(vesper_resolve::this_outside_class))]
    ThisOutsideClass {
        #[label("used here")]
        span: SourceSpan,
    },

    /// `super` outside any class body.
    #[error("Cannot use `super` outside of a class")]
    #[diagnostic(code(vesper_resolve::super_outside_class))]
    SuperOutsideClass {
        #[label("used here")]
        span: SourceSpan,
    },

    /// `super` inside a class that declares no superclass.
    #[error("Cannot use `super` in a class with no superclass")]
    #[diagnostic(code(vesper_resolve::super_without_superclass))]
    SuperWithoutSuperclass {
        #[label("used here")]
        span: SourceSpan,
    },

    /// `class A < A`.
    #[error("A class cannot inherit from itself: `{name}`")]
    #[diagnostic(code(vesper_resolve::self_inheritance))]
    SelfInheritance {
        /// The class name.
        name: String,
        /// The superclass reference.
        #[label("inherits from itself here")]
        span: SourceSpan,
    },

    /// A `for`, `for in` or `while` with no statements in its body.
    #[error("Loop body cannot be empty")]
    #[diagnostic(code(vesper_resolve::empty_loop_body))]
    EmptyLoopBody {
        #[label("this loop has no statements")]
        span: SourceSpan,
    },

    /// An `extern fun` the foreign registry does not know.
    #[error("Foreign function `{name}` is not registered with the runtime")]
    #[diagnostic(code(vesper_resolve::unregistered_foreign_function))]
    UnregisteredForeignFunction {
        /// The function name.
        name: String,
        #[label("declared `extern` here")]
        span: SourceSpan,
    },

    /// An `extern let` the foreign registry does not know.
    #[error("Foreign variable `{name}` is not registered with the runtime")]
    #[diagnostic(code(vesper_resolve::unregistered_foreign_variable))]
    UnregisteredForeignVariable {
        /// The variable name.
        name: String,
        #[label("declared `extern` here")]
        span: SourceSpan,
    },
}

/// Advisory diagnostics. They never block later phases.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum ResolverWarning {
    /// A local defined but never read before its scope closed.
    #[error("Unused variable: `{name}` is defined but never used")]
    #[diagnostic(
        code(vesper_resolve::unused_variable),
        severity(Warning),
        help("prefix it with `_` if this is intentional")
    )]
    UnusedLocalVariable {
        /// The unused local.
        name: String,
        /// Its declaration.
        #[label("unused variable")]
        span: SourceSpan,
    },

    /// A local declared with the same name as a binding in an enclosing scope.
    #[error("Shadowed variable: `{name}` shadows a previous declaration")]
    #[diagnostic(code(vesper_resolve::shadowed_variable), severity(Warning))]
    ShadowedVariable {
        /// The shadowed name.
        name: String,
        /// The nearest enclosing declaration.
        #[label("original declaration")]
        original_span: SourceSpan,
        /// The new, inner declaration.
        #[label("shadowing declaration")]
        shadow_span: SourceSpan,
    },

    /// Statements following a `return`, `break` or `continue` in the same list.
    /// The span points at the terminating statement.
    #[error("Unreachable code")]
    #[diagnostic(code(vesper_resolve::unreachable_code), severity(Warning))]
    UnreachableCode {
        #[label("any code following this statement is unreachable")]
        span: SourceSpan,
    },
}

impl ResolutionError {
    /// Primary location of the error.
    pub fn span(&self) -> SourceSpan {
        match self {
            Self::DuplicateDeclaration { span, .. }
            | Self::NotDeclared { span, .. }
            | Self::SelfReference { span, .. }
            | Self::ReadOfDiscarded { span, .. }
            | Self::ReassignImmutable { span, .. }
            | Self::MutateThroughImmutable { span, .. }
            | Self::UninitializedImmutable { span, .. }
            | Self::TopLevelReturn { span }
            | Self::InitializerReturnValue { span }
            | Self::ThisOutsideClass { span }
            | Self::SuperOutsideClass { span }
            | Self::SuperWithoutSuperclass { span }
            | Self::SelfInheritance { span, .. }
            | Self::EmptyLoopBody { span }
            | Self::UnregisteredForeignFunction { span, .. }
            | Self::UnregisteredForeignVariable { span, .. } => *span,
        }
    }
}

impl ResolverWarning {
    /// Primary location of the warning. For shadowing this is the inner declaration.
    pub fn span(&self) -> SourceSpan {
        match self {
            Self::UnusedLocalVariable { span, .. } | Self::UnreachableCode { span } => *span,
            Self::ShadowedVariable { shadow_span, .. } => *shadow_span,
        }
    }
}

/// Internal-consistency faults: the tree has a shape the grammar cannot
/// produce. These abort the walk.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum ResolveFault {
    /// A member assignment whose object is neither a variable, a member
    /// access, an index nor `this`.
    #[error("Internal resolver error: member assignment on a {shape}")]
    #[diagnostic(
        code(vesper_resolve::unexpected_set_target),
        help("this is a bug in the parser, not in the program being compiled")
    )]
    UnexpectedSetTarget {
        /// Short name of the object expression's kind.
        shape: &'static str,
        #[label("unexpected assignment target")]
        span: SourceSpan,
    },
}
