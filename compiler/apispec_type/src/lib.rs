// Type system for the API spec checker
pub mod types;

pub use types::*;
