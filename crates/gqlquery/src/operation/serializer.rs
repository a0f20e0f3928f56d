use crate::operation::QueryNode;
use crate::operation::query_node::NodeKind;
use thiserror::Error;

/// Number of spaces each nesting level indents by.
const INDENT_WIDTH: usize = 2;

/// Error space reserved for [`QueryNode::build()`].
///
/// No serialization path produces an error today; the type exists so the
/// `build()` signature can grow validation without breaking callers.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum QueryBuildError {}

/// Render `root` and everything beneath it as indented GraphQL document
/// text. The output carries no trailing newline.
pub(super) fn render_document(root: &QueryNode) -> String {
    let mut out = String::new();
    render_node(root, &mut out, 0);
    out
}

/// Render one node at `depth` spaces of indentation: head, argument list,
/// then a brace block iff the node selects anything.
///
/// Block contents always come out in the same order -- scalar fields
/// alphabetically, then sub-nodes in ascending name order, then fragments in
/// ascending condition-type order -- so the rendered text is independent of
/// the order selections were added in.
fn render_node(node: &QueryNode, out: &mut String, depth: usize) {
    push_indent(out, depth);
    let head_start = out.len();

    match &node.kind {
        NodeKind::InlineFragment => {
            out.push_str("... on ");
            out.push_str(node.name.as_str());
        },

        NodeKind::Selection => match &node.operation_kind {
            Some(kind) => {
                out.push_str(kind.keyword());
                if !node.name.is_empty() {
                    out.push(' ');
                    out.push_str(node.name.as_str());
                }
            },

            None => {
                if let Some(alias) = &node.alias {
                    out.push_str(alias);
                    out.push_str(": ");
                }
                out.push_str(node.name.as_str());
            },
        },
    }

    if !node.arguments.is_empty() {
        out.push('(');
        for (idx, argument) in node.arguments.iter().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            out.push_str(&argument.to_string());
        }
        out.push(')');
    }

    if !node.is_valid() {
        return;
    }

    // An unnamed shorthand root has an empty head; avoid a leading space
    // before its opening brace.
    if out.len() > head_start {
        out.push(' ');
    }
    out.push('{');

    let inner_depth = depth + INDENT_WIDTH;
    for field in &node.fields {
        out.push('\n');
        push_indent(out, inner_depth);
        out.push_str(field);
    }
    for sub_node in node.sub_nodes.values() {
        out.push('\n');
        render_node(sub_node, out, inner_depth);
    }
    for fragment in node.fragments.values() {
        out.push('\n');
        render_node(fragment, out, inner_depth);
    }
    out.push('\n');
    push_indent(out, depth);
    out.push('}');
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push(' ');
    }
}
