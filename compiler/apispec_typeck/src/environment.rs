// Environment construction: globals, standard variables, initializers, function signatures.

use apispec_ast::ast::{Decl, FuncDecl, Init};
use apispec_env::{FunctionSig, TypeEnv, TypingPolicy};

use crate::session::CheckSession;

impl<P: TypingPolicy> CheckSession<'_, P> {
    /// Builds the globals scope and the variable scope on top of it.
    ///
    /// Standard variables are seeded first, then initializers run in order and
    /// overwrite any binding of the same name. Initializer problems are reported
    /// but never stop the build; the best-effort type is stored.
    pub fn collect_globals(&mut self, decls: &[Decl], inits: &[Init]) {
        let mut globals = TypeEnv::new();
        for decl in decls {
            globals.insert(decl.name.clone(), self.policy.global_type(&decl.type_expr));
        }

        self.variables = TypeEnv::with_parent(globals);
        for (name, typ) in self.policy.standard_variables() {
            self.variables.insert(*name, *typ);
        }

        for init in inits {
            let typ = self.infer(&init.expr);
            log::trace!("init {} : {typ}", init.var_name);
            self.variables.insert(init.var_name.clone(), typ);
        }
    }

    pub fn collect_functions(&mut self, funcs: &[FuncDecl]) {
        for func in funcs {
            let params = func
                .params
                .iter()
                .map(|param| self.policy.param_type(param))
                .collect();
            let ret = self.policy.return_type(func);
            self.functions
                .insert(func.name.clone(), FunctionSig::new(params, ret));
        }
    }
}
