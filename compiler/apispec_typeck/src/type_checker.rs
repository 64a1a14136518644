// Type checker for API specs.
// Every run starts from a fresh session; results of the last run are kept for inspection.

use apispec_ast::ast::Spec;
use apispec_env::{FunctionEnv, SimplifiedPolicy, TypeEnv, TypingPolicy};

use crate::diagnostics::TypeError;
use crate::session::{CheckSession, SessionState};

#[derive(Debug, Default)]
pub struct TypeChecker<P: TypingPolicy = SimplifiedPolicy> {
    policy: P,
    last_run: SessionState,
}

impl TypeChecker<SimplifiedPolicy> {
    pub fn new() -> Self {
        Self::with_policy(SimplifiedPolicy)
    }
}

impl<P: TypingPolicy> TypeChecker<P> {
    pub fn with_policy(policy: P) -> Self {
        Self {
            policy,
            last_run: SessionState::default(),
        }
    }

    /// Type-checks a whole spec and returns `true` iff no diagnostics were recorded.
    ///
    /// Environments are built once from the globals, initializers and function
    /// declarations, then every API block is checked in order. A failing block never
    /// stops the blocks after it. Diagnostics from any previous run are discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use apispec_ast::ast::*;
    /// use apispec_typeck::type_checker::TypeChecker;
    ///
    /// let spec = Spec::new(
    ///     vec![],
    ///     vec![Init::new("token", Expr::var("session"))],
    ///     vec![],
    ///     vec![],
    /// );
    /// let mut checker = TypeChecker::new();
    /// assert!(!checker.check_spec(&spec));
    /// assert_eq!(checker.error_messages(), vec!["Undefined variable: session"]);
    /// ```
    pub fn check_spec(&mut self, spec: &Spec) -> bool {
        log::debug!(
            "type check started: {} globals, {} initializers, {} functions, {} blocks",
            spec.globals.len(),
            spec.init.len(),
            spec.functions.len(),
            spec.blocks.len()
        );

        let mut session = CheckSession::new(&self.policy);
        session.collect_globals(&spec.globals, &spec.init);
        session.collect_functions(&spec.functions);
        log::debug!(
            "environments built: {} globals, {} variables, {} functions",
            session.globals().map_or(0, TypeEnv::len),
            session.variables().len(),
            session.functions().len()
        );

        for api in &spec.blocks {
            session.check_block(api);
        }

        self.last_run = session.finish();
        let ok = self.last_run.diagnostics.is_empty();
        log::debug!(
            "type check finished: {} error(s)",
            self.last_run.diagnostics.len()
        );
        ok
    }

    /// Diagnostics of the last run, in detection order.
    pub fn errors(&self) -> &[TypeError] {
        self.last_run.diagnostics.errors()
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.last_run.diagnostics.messages()
    }

    /// Moves the last run's diagnostics out, leaving the checker empty.
    pub fn take_errors(&mut self) -> Vec<TypeError> {
        std::mem::take(&mut self.last_run.diagnostics).into_errors()
    }

    /// Variable environment of the last run; declared globals are its parent scope.
    pub fn variables(&self) -> &TypeEnv {
        &self.last_run.variables
    }

    pub fn globals(&self) -> Option<&TypeEnv> {
        self.last_run.variables.parent()
    }

    pub fn functions(&self) -> &FunctionEnv {
        &self.last_run.functions
    }
}

/// Checks `spec` with the default policy, returning all diagnostics on failure.
pub fn type_check_spec(spec: &Spec) -> Result<(), Vec<TypeError>> {
    let mut checker = TypeChecker::new();
    if checker.check_spec(spec) {
        Ok(())
    } else {
        Err(checker.take_errors())
    }
}
