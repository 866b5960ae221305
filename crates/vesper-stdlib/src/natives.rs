use fxhash::FxHashSet;

use crate::{NATIVE_FUNCTIONS, NATIVE_VARIABLES};

/// Membership test for bindings whose value comes from the host runtime.
pub trait ForeignRegistry {
    fn is_registered_function(&self, name: &str) -> bool;
    fn is_registered_variable(&self, name: &str) -> bool;
}

/// Set-backed registry of foreign functions and variables.
#[derive(Debug, Clone, Default)]
pub struct NativeRegistry {
    functions: FxHashSet<String>,
    variables: FxHashSet<String>,
}

impl NativeRegistry {
    /// An empty registry: every `extern` declaration is rejected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with what the standard runtime ships.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for name in NATIVE_FUNCTIONS {
            registry.register_function(*name);
        }
        for name in NATIVE_VARIABLES {
            registry.register_variable(*name);
        }
        registry
    }

    pub fn register_function(&mut self, name: impl Into<String>) {
        let name = name.into();
        log::trace!("registering foreign function `{}`", name);
        self.functions.insert(name);
    }

    pub fn register_variable(&mut self, name: impl Into<String>) {
        let name = name.into();
        log::trace!("registering foreign variable `{}`", name);
        self.variables.insert(name);
    }

    pub fn with_function(mut self, name: impl Into<String>) -> Self {
        self.register_function(name);
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>) -> Self {
        self.register_variable(name);
        self
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }
}

impl ForeignRegistry for NativeRegistry {
    fn is_registered_function(&self, name: &str) -> bool {
        self.functions.contains(name)
    }

    fn is_registered_variable(&self, name: &str) -> bool {
        self.variables.contains(name)
    }
}
