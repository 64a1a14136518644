// Type environments for the API spec checker.
// Variables shadow globals through the parent link; functions live in their own table.

use apispec_type::ApiType;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default)]
pub struct TypeEnv {
    parent: Option<Box<TypeEnv>>,
    symbols: HashMap<String, ApiType>,
}

impl TypeEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent(parent: TypeEnv) -> Self {
        TypeEnv {
            parent: Some(Box::new(parent)),
            symbols: HashMap::new(),
        }
    }

    /// Binds `name` in this scope, replacing any earlier binding in the same scope.
    pub fn insert(&mut self, name: impl Into<String>, typ: ApiType) {
        self.symbols.insert(name.into(), typ);
    }

    pub fn get(&self, name: &str) -> Option<ApiType> {
        match self.symbols.get(name) {
            Some(typ) => Some(*typ),
            None => self.parent.as_ref().and_then(|p| p.get(name)),
        }
    }

    pub fn parent(&self) -> Option<&TypeEnv> {
        self.parent.as_deref()
    }

    /// Number of bindings in this scope, not counting parents.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Collect all symbols (name, ApiType) visible in this environment (including parents).
    /// If a symbol is shadowed in a child env, the child's binding wins.
    /// The result is sorted by name so reports are stable.
    pub fn collect_symbol_types(&self) -> Vec<(String, ApiType)> {
        let mut out: Vec<(String, ApiType)> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        let mut cur: Option<&TypeEnv> = Some(self);
        while let Some(env) = cur {
            for (k, v) in env.symbols.iter() {
                if seen.insert(k.as_str()) {
                    out.push((k.clone(), *v));
                }
            }
            cur = env.parent.as_deref();
        }
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }
}

/// Parameter and return types of a declared function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSig {
    pub params: Vec<ApiType>,
    pub ret: ApiType,
}

impl FunctionSig {
    pub fn new(params: Vec<ApiType>, ret: ApiType) -> Self {
        Self { params, ret }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Function name to signature table, filled once per run.
#[derive(Debug, Clone, Default)]
pub struct FunctionEnv {
    functions: HashMap<String, FunctionSig>,
}

impl FunctionEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a signature; a later declaration with the same name replaces the earlier one.
    pub fn insert(&mut self, name: impl Into<String>, sig: FunctionSig) {
        self.functions.insert(name.into(), sig);
    }

    pub fn get(&self, name: &str) -> Option<&FunctionSig> {
        self.functions.get(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// All signatures sorted by function name.
    pub fn collect_signatures(&self) -> Vec<(&str, &FunctionSig)> {
        let mut out: Vec<(&str, &FunctionSig)> = self
            .functions
            .iter()
            .map(|(name, sig)| (name.as_str(), sig))
            .collect();
        out.sort_by(|a, b| a.0.cmp(b.0));
        out
    }
}
