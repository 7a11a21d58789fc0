use crate::ast;

/// The kind of an operation, without any of the operation's contents.
///
/// The anonymous shorthand form (`{ ... }`) is always a
/// [`OperationKind::Query`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    pub fn of(op_def: &ast::OperationDefinition) -> Self {
        match op_def {
            ast::OperationDefinition::SelectionSet(_)
            | ast::OperationDefinition::Query(_) => Self::Query,
            ast::OperationDefinition::Mutation(_) => Self::Mutation,
            ast::OperationDefinition::Subscription(_) => Self::Subscription,
        }
    }

    /// The keyword used to declare this kind of operation in GraphQL source.
    pub fn as_keyword(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_keyword())
    }
}
