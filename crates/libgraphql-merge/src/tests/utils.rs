//! Helpers shared by the merge tests.

use crate::ast;

/// Parse each source and concatenate all of their definitions, in order.
///
/// # Panics
/// Panics if any source fails to parse.
pub(super) fn parse_definitions(sources: &[&str]) -> Vec<ast::Definition> {
    sources.iter()
        .flat_map(|src| {
            ast::parse(src)
                .unwrap_or_else(|e| panic!("Failed to parse:\n{src}\n\n{e}"))
                .definitions
        })
        .collect()
}

/// Parse a source holding a single operation and return its top-level
/// selections.
pub(super) fn parse_selections(source: &str) -> Vec<ast::Selection> {
    match parse_definitions(&[source]).into_iter().next() {
        Some(ast::Definition::Operation(op_def)) =>
            top_level_selection_set(&op_def).items.clone(),
        other => panic!("Expected an operation, got: {other:?}"),
    }
}

pub(super) fn top_level_selection_set(
    op_def: &ast::OperationDefinition,
) -> &ast::SelectionSet {
    match op_def {
        ast::OperationDefinition::SelectionSet(selection_set) => selection_set,
        ast::OperationDefinition::Query(query) => &query.selection_set,
        ast::OperationDefinition::Mutation(mutation) => &mutation.selection_set,
        ast::OperationDefinition::Subscription(subscription) => &subscription.selection_set,
    }
}

pub(super) fn variable_definitions(
    def: &ast::Definition,
) -> &Vec<ast::VariableDefinition> {
    match def {
        ast::Definition::Operation(ast::OperationDefinition::Query(query)) =>
            &query.variable_definitions,
        ast::Definition::Operation(ast::OperationDefinition::Mutation(mutation)) =>
            &mutation.variable_definitions,
        ast::Definition::Operation(ast::OperationDefinition::Subscription(subscription)) =>
            &subscription.variable_definitions,
        other => panic!("Expected a non-shorthand operation, got: {other:?}"),
    }
}

/// Print a definition the way `graphql_parser` formats a document holding
/// only that definition.
pub(super) fn print_definition(def: &ast::Definition) -> String {
    ast::Document {
        definitions: vec![def.clone()],
    }.to_string()
}

/// Print a list of selections as an anonymous shorthand operation.
pub(super) fn print_selections(selections: &[ast::Selection]) -> String {
    print_definition(&ast::Definition::Operation(
        ast::OperationDefinition::SelectionSet(ast::SelectionSet {
            span: (synthetic_pos(), synthetic_pos()),
            items: selections.to_vec(),
        }),
    ))
}

/// Normalize GraphQL source by parsing and re-printing it.
pub(super) fn normalize(source: &str) -> String {
    let defs = parse_definitions(&[source]);
    assert_eq!(defs.len(), 1, "Expected exactly one definition in:\n{source}");
    print_definition(&defs[0])
}

/// Build a field selection with no alias, arguments, or directives.
pub(super) fn field(name: &str, items: Vec<ast::Selection>) -> ast::Selection {
    let pos = synthetic_pos();
    ast::Selection::Field(ast::Field {
        position: pos,
        alias: None,
        name: name.to_string(),
        arguments: vec![],
        directives: vec![],
        selection_set: ast::SelectionSet {
            span: (pos, pos),
            items,
        },
    })
}

/// Position used for nodes built by hand rather than parsed.
pub(super) fn synthetic_pos() -> ast::AstPos {
    ast::AstPos { line: 1, column: 1 }
}
