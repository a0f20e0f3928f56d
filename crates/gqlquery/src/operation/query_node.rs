use crate::Argument;
use crate::Value;
use crate::operation::OperationKind;
use crate::operation::QueryBuildError;
use crate::operation::serializer;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::btree_map::Entry;

type Result<T> = std::result::Result<T, QueryBuildError>;

/// Distinguishes plain selections from type-conditional inline fragments.
#[derive(Clone, Debug, PartialEq)]
pub(super) enum NodeKind {
    /// An `... on <Type>` block. The node's `name` holds the condition type,
    /// and any alias is ignored at serialization time.
    InlineFragment,

    /// An ordinary field or nested-object selection.
    Selection,
}

/// One node of a query document tree: a selection with a name (plus optional
/// alias), insertion-ordered arguments, a deduplicated set of scalar fields,
/// nested selections keyed by name, and type-conditional fragments keyed by
/// condition type.
///
/// Every mutator consumes and returns the node, so a document is built by
/// chaining calls on a root and finished with [`QueryNode::build()`]:
///
/// ```
/// use gqlquery::QueryNode;
///
/// let text = QueryNode::query()
///     .select_field("id")
///     .select_node(QueryNode::named("device").select_field("name"))
///     .build()
///     .unwrap();
///
/// assert_eq!(text, "query {\n  id\n  device {\n    name\n  }\n}");
/// ```
///
/// Selections that address the same target merge instead of duplicating:
/// selecting `device { name }` and later `device { uuid }` produces a single
/// `device` block with both fields. The same rule applies to fragments that
/// share a condition type. Fields always serialize alphabetically, so output
/// is byte-identical for any insertion order of the same logical selections.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryNode {
    pub(super) alias: Option<String>,
    pub(super) arguments: Vec<Argument>,
    pub(super) fields: BTreeSet<String>,
    pub(super) fragments: BTreeMap<String, QueryNode>,
    pub(super) kind: NodeKind,
    pub(super) name: String,
    pub(super) operation_kind: Option<OperationKind>,
    pub(super) sub_nodes: BTreeMap<String, QueryNode>,
}

impl QueryNode {
    /// Append an [`Argument`] after any previously added `Argument`s.
    ///
    /// Keys are never deduplicated: adding the same key twice emits it
    /// twice, in call order.
    pub fn add_argument(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.arguments.push(Argument::new(key, value));
        self
    }

    /// Append a list of [`Argument`]s after any previously added
    /// `Argument`s.
    pub fn add_arguments(
        mut self,
        arguments: impl IntoIterator<Item = Argument>,
    ) -> Self {
        self.arguments.extend(arguments);
        self
    }

    pub fn alias(&self) -> &Option<String> {
        &self.alias
    }

    pub fn arguments(&self) -> &Vec<Argument> {
        &self.arguments
    }

    /// Render this node and everything beneath it into GraphQL document
    /// text.
    ///
    /// The signature reserves room for future validation errors; no current
    /// code path fails.
    pub fn build(&self) -> Result<String> {
        Ok(serializer::render_document(self))
    }

    /// Declare an operation variable: appends an [`Argument`] keyed
    /// `$name` whose value is the raw (unquoted) `var_type` token. Only
    /// meaningful on an operation root.
    pub fn declare_variable(
        self,
        name: impl AsRef<str>,
        var_type: impl Into<String>,
    ) -> Self {
        let key = format!("${}", name.as_ref());
        self.add_argument(key, Value::Raw(var_type.into()))
    }

    /// Like [`QueryNode::declare_variable()`], with a default value rendered
    /// after the type: `$name: Type = default`.
    pub fn declare_variable_with_default(
        self,
        name: impl AsRef<str>,
        var_type: impl AsRef<str>,
        default: impl Into<Value>,
    ) -> Self {
        let key = format!("${}", name.as_ref());
        let token = format!("{} = {}", var_type.as_ref(), default.into());
        self.add_argument(key, Value::Raw(token))
    }

    pub fn fields(&self) -> &BTreeSet<String> {
        &self.fields
    }

    pub fn fragments(&self) -> &BTreeMap<String, QueryNode> {
        &self.fragments
    }

    /// Whether this node selects anything at all. Empty nodes are dropped
    /// when offered to [`QueryNode::select_node()`] and render as a bare
    /// head with no brace block.
    pub fn is_valid(&self) -> bool {
        !self.fields.is_empty()
            || !self.sub_nodes.is_empty()
            || !self.fragments.is_empty()
    }

    /// Recursively fold `other` into this node: fields union, arguments
    /// append in call order, sub-nodes and fragments merge key-wise. An
    /// already-set alias wins over the incoming one.
    pub(super) fn merge(&mut self, other: QueryNode) {
        if self.alias.is_none() {
            self.alias = other.alias;
        }
        self.arguments.extend(other.arguments);
        self.fields.extend(other.fields);
        for (_, sub_node) in other.sub_nodes {
            merge_into(&mut self.sub_nodes, sub_node);
        }
        for (_, fragment) in other.fragments {
            merge_into(&mut self.fragments, fragment);
        }
    }

    /// A root node for a `mutation` operation.
    pub fn mutation() -> Self {
        Self::new().set_operation_kind(OperationKind::Mutation)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// A selection node with its name already set.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new().set_name(name)
    }

    /// An unnamed shorthand node. As a document root it serializes with no
    /// operation keyword.
    pub fn new() -> Self {
        Self {
            alias: None,
            arguments: vec![],
            fields: BTreeSet::new(),
            fragments: BTreeMap::new(),
            kind: NodeKind::Selection,
            name: String::new(),
            operation_kind: None,
            sub_nodes: BTreeMap::new(),
        }
    }

    /// A type-conditional fragment node: serializes as
    /// `... on <type_condition> { ... }` and merges with other fragments
    /// sharing the same condition type. The condition keyspace is separate
    /// from sub-node names, so a fragment and a selection may share a
    /// textual name without colliding.
    pub fn on(type_condition: impl Into<String>) -> Self {
        let mut node = Self::new();
        node.kind = NodeKind::InlineFragment;
        node.name = type_condition.into();
        node
    }

    pub fn operation_kind(&self) -> &Option<OperationKind> {
        &self.operation_kind
    }

    /// A root node for a `query` operation.
    pub fn query() -> Self {
        Self::new().set_operation_kind(OperationKind::Query)
    }

    /// Select a scalar field. Re-selecting an already-selected field is a
    /// no-op.
    pub fn select_field(mut self, name: impl Into<String>) -> Self {
        self.fields.insert(name.into());
        self
    }

    /// Select every name in `names` as a scalar field, deduplicating against
    /// fields already selected.
    pub fn select_fields<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        for name in names {
            self.fields.insert(name.into());
        }
        self
    }

    /// Select a nested node.
    ///
    /// Invalid (empty) nodes are discarded silently so composition never
    /// emits an empty brace block. A node whose name matches an existing
    /// sub-node merges into it instead of inserting a sibling; fragment
    /// nodes route to the fragment set, keyed by condition type. Merge
    /// matching is strictly on the base name -- an alias plays no part in
    /// it.
    pub fn select_node(mut self, node: QueryNode) -> Self {
        if !node.is_valid() {
            return self;
        }
        match node.kind {
            NodeKind::InlineFragment => merge_into(&mut self.fragments, node),
            NodeKind::Selection => merge_into(&mut self.sub_nodes, node),
        }
        self
    }

    /// Apply [`QueryNode::select_node()`] to each element, in order.
    pub fn select_nodes(
        mut self,
        nodes: impl IntoIterator<Item = QueryNode>,
    ) -> Self {
        for node in nodes {
            self = self.select_node(node);
        }
        self
    }

    /// Select a separator-delimited path of nested objects in one call:
    /// `select_path("device.brand.name", ".")` selects the `name` field of
    /// `brand` inside `device`, creating or reusing each intermediate
    /// sub-node along the way. A single-component path is equivalent to
    /// [`QueryNode::select_field()`]; an empty path is a no-op.
    pub fn select_path(mut self, path: impl AsRef<str>, separator: &str) -> Self {
        let path = path.as_ref();
        if path.is_empty() {
            return self;
        }

        let components: Vec<&str> = path.split(separator).collect();
        let (leaf_field, branch) = match components.split_last() {
            Some(split) => split,
            None => return self,
        };
        if branch.is_empty() {
            return self.select_field(*leaf_field);
        }

        let mut cursor = &mut self;
        for component in branch {
            cursor = cursor
                .sub_nodes
                .entry((*component).to_string())
                .or_insert_with(|| QueryNode::named(*component));
        }
        cursor.fields.insert((*leaf_field).to_string());
        self
    }

    /// Set the alias this node's name renders behind (`alias: name`). The
    /// alias is carried independently of the name and plays no part in
    /// merge matching.
    pub fn set_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Set the name this node selects. For fragment nodes the name is the
    /// condition type.
    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the operation keyword this node leads with when serialized as a
    /// document root. Nested selections are always rendered shorthand, so
    /// this is only meaningful on the root.
    pub fn set_operation_kind(mut self, kind: OperationKind) -> Self {
        self.operation_kind = Some(kind);
        self
    }

    pub fn sub_nodes(&self) -> &BTreeMap<String, QueryNode> {
        &self.sub_nodes
    }

    /// A root node for a `subscription` operation.
    pub fn subscription() -> Self {
        Self::new().set_operation_kind(OperationKind::Subscription)
    }
}

impl std::default::Default for QueryNode {
    fn default() -> Self {
        Self::new()
    }
}

/// Insert `node` into `map` under its own name, merging into any existing
/// entry with the same key.
fn merge_into(map: &mut BTreeMap<String, QueryNode>, node: QueryNode) {
    match map.entry(node.name.clone()) {
        Entry::Occupied(mut entry) => entry.get_mut().merge(node),
        Entry::Vacant(entry) => {
            entry.insert(node);
        },
    }
}
