//! Owned aliases for the `graphql_parser` executable-document AST.
//!
//! Every merge input and output is expressed in terms of these types. They are
//! fully owned (`'static`, `String`-backed), so cloning a node yields a tree
//! that shares nothing with its source.

pub type Definition = graphql_parser::query::Definition<'static, String>;
pub type Document = graphql_parser::query::Document<'static, String>;
pub type Field = graphql_parser::query::Field<'static, String>;
pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
pub type Query = graphql_parser::query::Query<'static, String>;
pub type Selection = graphql_parser::query::Selection<'static, String>;
pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
pub type Type = graphql_parser::query::Type<'static, String>;
pub type TypeCondition = graphql_parser::query::TypeCondition<'static, String>;
pub type VariableDefinition = graphql_parser::query::VariableDefinition<'static, String>;

pub type AstPos = graphql_parser::Pos;
pub type ParseError = graphql_parser::query::ParseError;

/// Parse an executable document into an owned AST.
pub fn parse(query_src: &str) -> Result<Document, ParseError> {
    Ok(graphql_parser::query::parse_query::<String>(query_src)?.into_static())
}

/// Render a [`Type`] the way it is written in GraphQL source (e.g. `[ID!]!`).
pub fn type_to_string(ty: &Type) -> String {
    match ty {
        Type::NamedType(name) => name.to_owned(),
        Type::ListType(inner) => format!("[{}]", type_to_string(inner)),
        Type::NonNullType(inner) => format!("{}!", type_to_string(inner)),
    }
}
