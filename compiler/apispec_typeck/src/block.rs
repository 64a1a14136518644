// API block checking: precondition, call, postcondition.

use apispec_ast::ast::{Api, ApiCall, Expr, Response};
use apispec_env::TypingPolicy;
use apispec_type::ApiType;

use crate::diagnostics::TypeError;
use crate::session::CheckSession;

impl<P: TypingPolicy> CheckSession<'_, P> {
    pub fn check_block(&mut self, api: &Api) {
        log::trace!("checking block for call {}", api.call.call.name);
        self.check_precondition(api.pre.as_ref());
        let call_ty = self.check_call(&api.call);
        self.check_postcondition(&api.response, call_ty, &api.call);
    }

    // Conditions are inferred for their internal errors only; their type is not constrained.
    fn check_precondition(&mut self, pre: Option<&Expr>) {
        if let Some(pre) = pre {
            self.infer(pre);
        }
    }

    fn check_call(&mut self, call: &ApiCall) -> ApiType {
        self.infer_call(&call.call)
    }

    fn check_postcondition(&mut self, post: &Response, call_ty: ApiType, call: &ApiCall) {
        if call_ty.is_unknown() {
            self.report(TypeError::UnknownCallResult {
                function: call.call.name.clone(),
            });
        }
        if let Some(expr) = &post.expr {
            self.infer(expr);
        }
    }
}
