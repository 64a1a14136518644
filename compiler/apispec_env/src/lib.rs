// Type environments and typing policies for the API spec checker
pub mod env;
pub mod policy;

pub use env::{FunctionEnv, FunctionSig, TypeEnv};
pub use policy::{AnnotatedPolicy, SimplifiedPolicy, TypingPolicy, STANDARD_VARIABLES};
