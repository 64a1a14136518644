// Per-run checking state.
// A session is created fresh for every run; inference and block checking are methods on it.

use apispec_env::{FunctionEnv, TypeEnv, TypingPolicy};

use crate::diagnostics::{Diagnostics, TypeError};

pub struct CheckSession<'p, P: TypingPolicy> {
    pub(crate) policy: &'p P,
    /// Standard and initialized variables; declared globals sit in the parent scope.
    pub(crate) variables: TypeEnv,
    pub(crate) functions: FunctionEnv,
    pub(crate) diagnostics: Diagnostics,
}

/// What a finished session leaves behind.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub variables: TypeEnv,
    pub functions: FunctionEnv,
    pub diagnostics: Diagnostics,
}

impl<'p, P: TypingPolicy> CheckSession<'p, P> {
    pub fn new(policy: &'p P) -> Self {
        Self {
            policy,
            variables: TypeEnv::new(),
            functions: FunctionEnv::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn report(&mut self, error: TypeError) {
        self.diagnostics.report(error);
    }

    pub fn variables(&self) -> &TypeEnv {
        &self.variables
    }

    /// Declared globals, or `None` before the environments are built.
    pub fn globals(&self) -> Option<&TypeEnv> {
        self.variables.parent()
    }

    pub fn functions(&self) -> &FunctionEnv {
        &self.functions
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn finish(self) -> SessionState {
        SessionState {
            variables: self.variables,
            functions: self.functions,
            diagnostics: self.diagnostics,
        }
    }
}
