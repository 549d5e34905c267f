use crate::types::RbNodeLike;

/// Structural dump of the tree, one node per line.
///
/// ```text
/// R----20(BLACK)
///    L----10(RED)
///    R----30(RED)
/// ```
///
/// Left children are drawn with `L----` and indent their subtree by `"|  "`;
/// the root and right children use `R----` and indent by `"   "`.
pub fn print_tree<N: RbNodeLike>(arena: &[N], root: Option<u32>) -> String {
    let mut out = String::new();
    let mut stack: Vec<(u32, String, bool)> = Vec::new();
    if let Some(root) = root {
        stack.push((root, String::new(), true));
    }

    while let Some((i, indent, last)) = stack.pop() {
        let n = &arena[i as usize];
        out.push_str(&indent);
        let child_indent = if last {
            out.push_str("R----");
            format!("{indent}   ")
        } else {
            out.push_str("L----");
            format!("{indent}|  ")
        };
        out.push_str(&format!("{}({})\n", n.key(), n.color()));

        // Right is pushed first so the left subtree is emitted first.
        if let Some(r) = n.r() {
            stack.push((r, child_indent.clone(), true));
        }
        if let Some(l) = n.l() {
            stack.push((l, child_indent, false));
        }
    }

    out
}
