use crate::ast;
use crate::merge_selection_sets;
use crate::DefinitionKind;
use crate::MergeError;
use crate::OperationKind;

type Result<T> = std::result::Result<T, MergeError>;

/// Fold a list of operation definitions, left to right, into one operation.
///
/// All definitions must be operations of the same [`OperationKind`]. The
/// first definition seeds the result; each later definition has its
/// top-level selection set merged in with
/// [`merge_selections`](crate::merge_selections).
///
/// Variables are handled conservatively: the result only picks up variable
/// definitions from a later operation while it has none of its own. Once it
/// holds variables, variables declared by subsequent operations are not
/// added. Definitions written in the anonymous shorthand form (`{ ... }`)
/// declare no variables but still have their selections merged.
///
/// A single definition is returned as a copy of itself once it has been
/// checked to be an operation.
pub fn merge_operations(definitions: &[ast::Definition]) -> Result<ast::Definition> {
    let Some((first_def, remaining_defs)) = definitions.split_first() else {
        return Err(MergeError::EmptyInput);
    };

    let first_op_def = expect_operation(first_def)?;
    if remaining_defs.is_empty() {
        return Ok(first_def.clone());
    }

    let mut merged = first_op_def.clone();
    let merged_kind = OperationKind::of(&merged);

    for def in remaining_defs {
        let op_def = expect_operation(def)?;

        let op_kind = OperationKind::of(op_def);
        if op_kind != merged_kind {
            return Err(MergeError::OperationKindMismatch {
                actual: op_kind,
                expected: merged_kind,
            });
        }

        let var_defs = variable_definitions(op_def);
        if variable_definitions(&merged).is_empty() && !var_defs.is_empty() {
            let collected = collect_variable_definitions(var_defs)?;
            set_variable_definitions(&mut merged, collected);
        }

        let merged_selection_set = selection_set_mut(&mut merged);
        let new_selection_set = merge_selection_sets(
            merged_selection_set,
            selection_set(op_def),
        )?;
        *merged_selection_set = new_selection_set;
    }

    Ok(ast::Definition::Operation(merged))
}

/// Merge every operation across a list of documents into a single document
/// holding one operation.
///
/// Definitions are taken in document order, then in their order within each
/// document. See [`merge_operations`] for the merge rules.
pub fn merge_documents(documents: &[ast::Document]) -> Result<ast::Document> {
    let definitions: Vec<ast::Definition> =
        documents.iter()
            .flat_map(|doc| doc.definitions.iter().cloned())
            .collect();

    Ok(ast::Document {
        definitions: vec![merge_operations(&definitions)?],
    })
}

fn expect_operation(def: &ast::Definition) -> Result<&ast::OperationDefinition> {
    match def {
        ast::Definition::Operation(op_def) => Ok(op_def),
        ast::Definition::Fragment(_) => Err(MergeError::UnexpectedDefinitionKind {
            kind: DefinitionKind::of(def),
        }),
    }
}

/// Collect an operation's variable definitions in order, rejecting any
/// variable that is declared twice with two different types.
fn collect_variable_definitions(
    var_defs: &[ast::VariableDefinition],
) -> Result<Vec<ast::VariableDefinition>> {
    let mut collected: Vec<ast::VariableDefinition> = Vec::with_capacity(var_defs.len());
    for var_def in var_defs {
        if let Some(existing) = collected.iter().find(|v| v.name == var_def.name)
            && existing.var_type != var_def.var_type {
            return Err(MergeError::VariableTypeConflict {
                actual_type: var_def.var_type.clone(),
                expected_type: existing.var_type.clone(),
                variable_name: var_def.name.to_owned(),
            });
        }
        collected.push(var_def.clone());
    }
    Ok(collected)
}

/// The variables an operation declares. The shorthand form declares none.
fn variable_definitions(op_def: &ast::OperationDefinition) -> &[ast::VariableDefinition] {
    match op_def {
        ast::OperationDefinition::SelectionSet(_) => &[],
        ast::OperationDefinition::Query(query) => query.variable_definitions.as_slice(),
        ast::OperationDefinition::Mutation(mutation) => mutation.variable_definitions.as_slice(),
        ast::OperationDefinition::Subscription(subscription) =>
            subscription.variable_definitions.as_slice(),
    }
}

/// Replace an operation's variable definitions. A shorthand operation is
/// rewritten as an anonymous `query` so that it can hold them.
fn set_variable_definitions(
    op_def: &mut ast::OperationDefinition,
    var_defs: Vec<ast::VariableDefinition>,
) {
    match op_def {
        ast::OperationDefinition::SelectionSet(selection_set) => {
            let query = ast::Query {
                position: selection_set.span.0,
                name: None,
                variable_definitions: var_defs,
                directives: vec![],
                selection_set: selection_set.clone(),
            };
            *op_def = ast::OperationDefinition::Query(query);
        },
        ast::OperationDefinition::Query(query) =>
            query.variable_definitions = var_defs,
        ast::OperationDefinition::Mutation(mutation) =>
            mutation.variable_definitions = var_defs,
        ast::OperationDefinition::Subscription(subscription) =>
            subscription.variable_definitions = var_defs,
    }
}

fn selection_set(op_def: &ast::OperationDefinition) -> &ast::SelectionSet {
    match op_def {
        ast::OperationDefinition::SelectionSet(selection_set) => selection_set,
        ast::OperationDefinition::Query(query) => &query.selection_set,
        ast::OperationDefinition::Mutation(mutation) => &mutation.selection_set,
        ast::OperationDefinition::Subscription(subscription) => &subscription.selection_set,
    }
}

fn selection_set_mut(op_def: &mut ast::OperationDefinition) -> &mut ast::SelectionSet {
    match op_def {
        ast::OperationDefinition::SelectionSet(selection_set) => selection_set,
        ast::OperationDefinition::Query(query) => &mut query.selection_set,
        ast::OperationDefinition::Mutation(mutation) => &mut mutation.selection_set,
        ast::OperationDefinition::Subscription(subscription) => &mut subscription.selection_set,
    }
}
