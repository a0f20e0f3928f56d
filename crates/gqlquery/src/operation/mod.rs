mod operation_kind;
mod query_node;
mod serializer;

pub use operation_kind::OperationKind;
pub use query_node::QueryNode;
pub use serializer::QueryBuildError;
