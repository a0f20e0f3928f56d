//! A fluent, tree-based builder for GraphQL query documents.
//!
//! A document is built by chaining mutators on a root [`QueryNode`], then
//! rendered to indented GraphQL text with [`QueryNode::build()`]. The builder
//! deduplicates scalar fields, merges selections and fragments that address
//! the same target, and serializes deterministically regardless of the order
//! selections were added in.
//!
//! This crate only constructs and serializes request text. It does not parse
//! GraphQL, validate against a schema, or execute anything.

mod argument;
pub mod operation;
mod value;

pub use argument::Argument;
pub use operation::OperationKind;
pub use operation::QueryBuildError;
pub use operation::QueryNode;
pub use value::Value;

#[cfg(test)]
mod tests;
