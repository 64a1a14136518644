//! Static type checker for API specifications.
//!
//! A run builds the variable, global and function environments from a [`Spec`],
//! then checks each API block's precondition, call and postcondition, collecting
//! every problem as a [`TypeError`] instead of stopping at the first one.
//!
//! [`Spec`]: apispec_ast::ast::Spec

pub mod block;
pub mod diagnostics;
pub mod environment;
pub mod infer;
pub mod session;
pub mod type_checker;

pub use diagnostics::{Diagnostics, TypeError};
pub use session::CheckSession;
pub use type_checker::{type_check_spec, TypeChecker};
