use crate::ast;

/// The kind of a top-level definition found in an executable document.
///
/// Used to name the offending definition when something other than an
/// operation is handed to the merger.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DefinitionKind {
    /// `fragment Name on Type { ... }`
    FragmentDefinition,

    /// `query`, `mutation`, `subscription`, or anonymous `{ ... }`
    OperationDefinition,
}
impl DefinitionKind {
    pub fn of(def: &ast::Definition) -> Self {
        match def {
            ast::Definition::Fragment(_) => Self::FragmentDefinition,
            ast::Definition::Operation(_) => Self::OperationDefinition,
        }
    }
}
impl std::fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::FragmentDefinition => "FragmentDefinition",
            Self::OperationDefinition => "OperationDefinition",
        })
    }
}
