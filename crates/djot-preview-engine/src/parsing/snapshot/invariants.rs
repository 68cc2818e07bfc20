use crate::{
    parsing::{blocks::MAX_CONTAINER_DEPTH, inline::MAX_INLINE_DEPTH},
    tree::{Node, NodeKind},
};

/// Validates the structural invariants of a parsed tree.
///
/// Asserts that:
/// - The root is a `Document`
/// - Block containers hold blocks; inline holders hold inlines
/// - Lists hold only items, tables only rows, rows only cells
/// - Leaf kinds have no children
/// - Nesting stays within the container and inline depth caps
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Node) {
    assert!(
        matches!(doc.kind, NodeKind::Document),
        "root is not a Document: {:?}",
        doc.kind
    );
    check_node(doc, 0);
}

fn check_node(node: &Node, depth: usize) {
    assert!(
        depth <= MAX_CONTAINER_DEPTH * 2 + MAX_INLINE_DEPTH + 4,
        "tree too deep at {:?}",
        node.kind
    );
    if node.kind.is_leaf() {
        assert!(
            node.children.is_empty(),
            "leaf {:?} has children",
            node.kind
        );
    }
    for child in &node.children {
        let ok = match &node.kind {
            NodeKind::BulletList { .. } | NodeKind::OrderedList { .. } => {
                child.kind == NodeKind::ListItem
            }
            NodeKind::Table { .. } => child.kind == NodeKind::TableRow,
            NodeKind::TableRow => matches!(child.kind, NodeKind::TableCell { .. }),
            k if k.holds_inlines() => child.kind.is_inline(),
            _ => child.kind.is_block() && !is_table_part(&child.kind),
        };
        assert!(ok, "{:?} cannot contain {:?}", node.kind, child.kind);
        check_node(child, depth + 1);
    }
}

fn is_table_part(kind: &NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::TableRow | NodeKind::TableCell { .. } | NodeKind::ListItem
    )
}
