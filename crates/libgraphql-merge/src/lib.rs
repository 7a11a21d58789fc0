//! Merge several GraphQL operations written against the same schema into one
//! equivalent operation, so that consumers requesting overlapping data can be
//! served by a single request.
//!
//! Inputs and outputs are [`graphql_parser`] executable-document ASTs (see
//! [`ast`]). Parsing and printing are left to that crate; this crate only
//! computes the merged tree.
//!
//! ```
//! use libgraphql_merge::ast;
//! use libgraphql_merge::merge_documents;
//!
//! let doc_a = ast::parse("query Me { me { id } }").unwrap();
//! let doc_b = ast::parse("query Me { me { id login } }").unwrap();
//! let merged = merge_documents(&[doc_a, doc_b]).unwrap();
//!
//! let expected = ast::parse("query Me { me { id login } }").unwrap();
//! assert_eq!(merged.to_string(), expected.to_string());
//! ```

pub mod ast;
mod definition_kind;
mod merge_error;
mod operation_kind;
mod operation_merger;
mod selection_key;
mod selection_merger;

pub use definition_kind::DefinitionKind;
pub use merge_error::MergeError;
pub use operation_kind::OperationKind;
pub use operation_merger::merge_documents;
pub use operation_merger::merge_operations;
pub use selection_key::SelectionKey;
pub use selection_merger::merge_selection_sets;
pub use selection_merger::merge_selections;

#[cfg(test)]
mod tests;
