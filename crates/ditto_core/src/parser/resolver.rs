//! Resolution of simple type names to their declaring package.

/// Capability to resolve a simple type name to a dotted package name.
///
/// The pipeline only needs the import-list heuristic below, but the seam
/// exists so a stricter implementation (a real symbol table) can be swapped
/// in without touching the extractor.
pub trait TypeResolver {
    fn resolve(&self, simple_name: &str) -> Option<String>;
}

/// Import-list resolver.
///
/// The first import whose text contains the simple name wins, and the
/// package is everything before the import's last dot. Deliberately naive:
/// an unrelated import containing the name as a substring shadows the real
/// one. Kept as-is; the ambiguity is pinned by tests.
#[derive(Debug, Clone)]
pub struct ImportTypeResolver {
    imports: Vec<String>,
}

impl ImportTypeResolver {
    pub fn new(imports: Vec<String>) -> Self {
        Self { imports }
    }
}

impl TypeResolver for ImportTypeResolver {
    fn resolve(&self, simple_name: &str) -> Option<String> {
        self.imports
            .iter()
            .find(|import| import.contains(simple_name))
            .and_then(|import| import.rfind('.').map(|idx| import[..idx].to_string()))
    }
}
