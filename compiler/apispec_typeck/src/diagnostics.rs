// Diagnostics recorded while checking a spec.
// Rendered messages are part of the checker's output contract; extra fields are detail only.

use apispec_type::ApiType;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("Undefined variable: {name}")]
    UndefinedVariable { name: String },
    #[error("Undefined function: {name}")]
    UndefinedFunction { name: String },
    #[error("Arity mismatch for function: {function}")]
    ArityMismatch {
        function: String,
        expected: usize,
        found: usize,
    },
    /// `index` is 1-based.
    #[error("Type mismatch in argument {index} for function {function}")]
    ArgumentTypeMismatch {
        function: String,
        index: usize,
        expected: ApiType,
        found: ApiType,
    },
    #[error("map_access requires exactly 2 arguments")]
    MapAccessArity { found: usize },
    #[error("First argument to map_access must be a map")]
    MapAccessNotMap { found: ApiType },
    #[error("Second argument to map_access must be a string")]
    MapAccessKeyNotString { found: ApiType },
    #[error("equals requires exactly 2 arguments")]
    EqualsArity { found: usize },
    #[error("Type mismatch in equality comparison")]
    EqualityMismatch { left: ApiType, right: ApiType },
    #[error("Call result type unknown in postcondition")]
    UnknownCallResult { function: String },
    #[error("Unknown expression type")]
    UnknownExpression { kind: &'static str },
}

/// Ordered, append-only list of diagnostics for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<TypeError>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, error: TypeError) {
        log::debug!("type error: {error}");
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[TypeError] {
        &self.errors
    }

    /// Rendered messages in detection order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn into_errors(self) -> Vec<TypeError> {
        self.errors
    }
}
