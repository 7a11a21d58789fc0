use crate::ast;
use crate::DefinitionKind;
use crate::OperationKind;
use thiserror::Error;

/// Everything that can abort a merge.
///
/// Every variant is a total failure of the call that produced it: no partially
/// merged output is ever returned alongside an error.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MergeError {
    #[error("Expected at least one definition.")]
    EmptyInput,

    #[error(
        "Cannot merge field `{field}`: one selection of it selects subfields \
        and the other does not."
    )]
    FieldSelectionShapeMismatch {
        field: String,
    },

    /// A selection matched by key turned out to be of a different kind than
    /// the selection it was matched against. This is a bug in the merger, not
    /// a problem with the input.
    #[error(
        "Internal invariant violated: selection `{key}` matched an existing \
        selection of kind `{found}`."
    )]
    InvariantViolation {
        found: &'static str,
        key: String,
    },

    #[error("Expected '{expected}'. Got '{actual}'.")]
    OperationKindMismatch {
        actual: OperationKind,
        expected: OperationKind,
    },

    #[error("Expected '{}'. Got '{kind}'.", DefinitionKind::OperationDefinition)]
    UnexpectedDefinitionKind {
        kind: DefinitionKind,
    },

    #[error(
        "Variable definition types do not match. Expected `{}` for variable \
        '{variable_name}'. Got `{}`.",
        ast::type_to_string(.expected_type),
        ast::type_to_string(.actual_type),
    )]
    VariableTypeConflict {
        actual_type: ast::Type,
        expected_type: ast::Type,
        variable_name: String,
    },
}
