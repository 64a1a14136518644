// Expression type inference.
//
// Inference never refuses to produce a type: every problem is reported and a
// placeholder is returned so enclosing checks still have something to compare.

use apispec_ast::ast::{Expr, FuncCall};
use apispec_env::TypingPolicy;
use apispec_type::ApiType;

use crate::diagnostics::TypeError;
use crate::session::CheckSession;

const MAP_ACCESS: &str = "map_access";
const EQUALS: &str = "equals";

impl<P: TypingPolicy> CheckSession<'_, P> {
    /// Infers the type of `expr`, recording any problems in the session diagnostics.
    ///
    /// `map_access` and `equals` are dispatched before user functions are looked up.
    pub fn infer(&mut self, expr: &Expr) -> ApiType {
        match expr {
            Expr::Var(name) => self.infer_var(name),
            Expr::FuncCall(call) => match call.name.as_str() {
                MAP_ACCESS => self.infer_map_access(call),
                EQUALS => self.infer_equals(call),
                _ => self.infer_call(call),
            },
            Expr::String(_) => ApiType::String,
            Expr::Num(_) => ApiType::Int,
            Expr::Set(_) | Expr::Map(_) | Expr::Tuple(_) => {
                self.report(TypeError::UnknownExpression { kind: expr.kind() });
                ApiType::Unknown
            }
        }
    }

    fn infer_var(&mut self, name: &str) -> ApiType {
        match self.variables.get(name) {
            Some(typ) => typ,
            None => {
                self.report(TypeError::UndefinedVariable {
                    name: name.to_string(),
                });
                ApiType::Unknown
            }
        }
    }

    /// Resolves a call to a declared function, without built-in dispatch.
    ///
    /// An arity mismatch is reported but the declared return type is still produced.
    /// Arguments are compared position by position up to the shorter of the two lists.
    pub fn infer_call(&mut self, call: &FuncCall) -> ApiType {
        let Some(sig) = self.functions.get(&call.name).cloned() else {
            self.report(TypeError::UndefinedFunction {
                name: call.name.clone(),
            });
            return ApiType::Unknown;
        };

        if call.args.len() != sig.arity() {
            self.report(TypeError::ArityMismatch {
                function: call.name.clone(),
                expected: sig.arity(),
                found: call.args.len(),
            });
        }

        for (i, (arg, expected)) in call.args.iter().zip(&sig.params).enumerate() {
            let found = self.infer(arg);
            if found != *expected {
                self.report(TypeError::ArgumentTypeMismatch {
                    function: call.name.clone(),
                    index: i + 1,
                    expected: *expected,
                    found,
                });
            }
        }

        sig.ret
    }

    fn infer_map_access(&mut self, call: &FuncCall) -> ApiType {
        let [base, key] = call.args.as_slice() else {
            self.report(TypeError::MapAccessArity {
                found: call.args.len(),
            });
            return ApiType::Unknown;
        };

        let base_ty = self.infer(base);
        let key_ty = self.infer(key);
        if base_ty != ApiType::Map {
            self.report(TypeError::MapAccessNotMap { found: base_ty });
        }
        if key_ty != ApiType::String {
            self.report(TypeError::MapAccessKeyNotString { found: key_ty });
        }
        ApiType::String
    }

    fn infer_equals(&mut self, call: &FuncCall) -> ApiType {
        let [lhs, rhs] = call.args.as_slice() else {
            self.report(TypeError::EqualsArity {
                found: call.args.len(),
            });
            return ApiType::Unknown;
        };

        let left = self.infer(lhs);
        let right = self.infer(rhs);
        if left != right {
            self.report(TypeError::EqualityMismatch { left, right });
        }
        ApiType::Bool
    }
}
