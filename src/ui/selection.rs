//! 原生选区 ↔ 语义位置
//!
//! 每次编辑都会清空并重建所有行节点，宿主的光标随之失效。
//! 因此在重新渲染前用 `capture` 把选区换算成 (行, 列)，渲染后再用 `restore` 放回去。
//!
//! 渲染树的形状：容器的每个子节点是一行；行内是文本节点和高亮用的 `<span>`，
//! 空行只含一个 `<br>`。

use crate::kernel::services::ports::{HostSelection, HostTree, NodeKind};
use crate::models::{chars_in_utf16_prefix, utf16_len, SemanticPosition};

use super::tree::{
    child_of, first_leaf, is_element, is_inclusive_ancestor, leaves, preceding_siblings,
    text_content,
};

/// 读取宿主选区并换算成语义位置；没有选区或选区不在容器内时返回 `None`
pub fn capture<T: HostTree>(tree: &T, container: T::Node) -> Option<SemanticPosition> {
    let HostSelection {
        node: anchor,
        offset,
    } = tree.selection()?;

    if anchor == container {
        // 落在两行之间：按子节点下标取行，列为 0
        let last = tree.children(container).len().saturating_sub(1);
        return Some(SemanticPosition::new(offset.min(last), 0, 0));
    }

    let line_node = child_of(tree, container, anchor)?;
    let line = if holds_at_most_one_char(tree, container) {
        // 只有一个字符时无法从祖先关系区分"之前"和"之中"
        0
    } else {
        preceding_siblings(tree, line_node).len()
    };

    let (prev_units, prev_chars) = preceding_text_len(tree, line_node, anchor);
    let (units, chars) = offset_within_node(tree, line_node, anchor, offset);
    Some(SemanticPosition::new(
        line,
        prev_chars + chars,
        prev_units + units,
    ))
}

/// 把选区折叠到 `position` 对应的位置。
///
/// 宿主的 `collapse` 以 UTF-16 码元计，所以这里只使用 `utf16_column`。
pub fn restore<T: HostTree>(tree: &mut T, container: T::Node, position: Option<SemanticPosition>) {
    let Some(position) = position else {
        return;
    };
    let Some(&line_node) = tree.children(container).get(position.line()) else {
        return;
    };

    let mut column = position.utf16_column();
    let children = tree.children(line_node).to_vec();
    if children.is_empty() {
        if let Some(NodeKind::Text(data)) = tree.kind(line_node) {
            let len = utf16_len(data);
            if column <= len {
                tree.collapse(line_node, column);
            }
        }
        return;
    }

    for child in children {
        let len = utf16_len(&text_content(tree, child));
        if column <= len {
            let leaf = first_leaf(tree, child);
            tree.collapse(leaf, column);
            return;
        }
        column -= len;
    }
}

/// 容器内没有元素且文本不超过一个码元（相当于 innerHTML 长度 ≤ 1）
fn holds_at_most_one_char<T: HostTree>(tree: &T, container: T::Node) -> bool {
    let mut units = 0;
    for &child in tree.children(container) {
        match tree.kind(child) {
            Some(NodeKind::Text(data)) => units += utf16_len(data),
            _ => return false,
        }
    }
    units <= 1
}

fn is_break_only<T: HostTree>(tree: &T, line_node: T::Node) -> bool {
    matches!(tree.children(line_node).first(), Some(&first) if is_element(tree, first, "BR"))
}

/// 行内、锚点所在子节点之前的所有兄弟的文本长度 (码元, 码点)
fn preceding_text_len<T: HostTree>(tree: &T, line_node: T::Node, anchor: T::Node) -> (usize, usize) {
    if anchor == line_node || is_break_only(tree, line_node) {
        return (0, 0);
    }
    let Some(item) = child_of(tree, line_node, anchor) else {
        return (0, 0);
    };
    let text: String = preceding_siblings(tree, item)
        .iter()
        .map(|&sibling| text_content(tree, sibling))
        .collect();
    (utf16_len(&text), text.chars().count())
}

/// 锚点在其所在行子节点的逻辑文本中的偏移 (码元, 码点)；越界时为 (0, 0)
fn offset_within_node<T: HostTree>(
    tree: &T,
    line_node: T::Node,
    anchor: T::Node,
    offset: usize,
) -> (usize, usize) {
    let scope = if anchor == line_node {
        line_node
    } else {
        child_of(tree, line_node, anchor).unwrap_or(anchor)
    };
    let Some(units) = logical_offset(tree, scope, anchor, offset) else {
        return (0, 0);
    };
    match chars_in_utf16_prefix(&text_content(tree, scope), units) {
        Some(chars) => (units, chars),
        None => (0, 0),
    }
}

/// 把 DOM 语义的 (锚点, 偏移) 换算为 `scope` 逻辑文本中的码元偏移
fn logical_offset<T: HostTree>(
    tree: &T,
    scope: T::Node,
    anchor: T::Node,
    offset: usize,
) -> Option<usize> {
    let local = match tree.kind(anchor)? {
        NodeKind::Text(data) => {
            if offset > utf16_len(data) {
                return None;
            }
            offset
        }
        NodeKind::Element(_) => tree
            .children(anchor)
            .iter()
            .take(offset)
            .map(|&child| utf16_len(&text_content(tree, child)))
            .sum(),
    };

    let mut before = 0;
    for leaf in leaves(tree, scope) {
        if is_inclusive_ancestor(tree, anchor, leaf) {
            break;
        }
        if let Some(NodeKind::Text(data)) = tree.kind(leaf) {
            before += utf16_len(data);
        }
    }
    Some(before + local)
}

#[cfg(test)]
#[path = "../../tests/unit/ui/selection.rs"]
mod tests;
