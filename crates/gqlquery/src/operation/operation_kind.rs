/// The operation type a document root leads with. A root without an
/// `OperationKind` serializes in GraphQL's shorthand form (no keyword).
#[derive(Clone, Debug, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}

impl OperationKind {
    /// The lowercase keyword this operation type serializes with.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}
