// Type tags for the API spec language.
// The checker works on first-order tags only: two types are equal iff their tags are equal.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApiType {
    Int,
    String,
    Bool,
    Map,
    Void,
    /// The type could not be determined. Used as the fallback after a reported problem.
    #[default]
    Unknown,
}

impl ApiType {
    /// Lowercase name used when rendering types in diagnostics and reports.
    ///
    /// # Examples
    ///
    /// ```
    /// use apispec_type::ApiType;
    /// assert_eq!(ApiType::Map.name(), "map");
    /// assert_eq!(ApiType::Unknown.name(), "unknown");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            ApiType::Int => "int",
            ApiType::String => "string",
            ApiType::Bool => "bool",
            ApiType::Map => "map",
            ApiType::Void => "void",
            ApiType::Unknown => "unknown",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ApiType::Unknown)
    }
}

impl fmt::Display for ApiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
