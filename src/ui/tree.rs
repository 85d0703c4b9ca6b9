//! 宿主树上的通用遍历工具

use crate::kernel::services::ports::{HostTree, NodeKind};

pub fn is_text<T: HostTree>(tree: &T, node: T::Node) -> bool {
    matches!(tree.kind(node), Some(NodeKind::Text(_)))
}

pub fn is_element<T: HostTree>(tree: &T, node: T::Node, tag: &str) -> bool {
    matches!(tree.kind(node), Some(NodeKind::Element(name)) if name.eq_ignore_ascii_case(tag))
}

/// 按文档顺序收集叶子节点（没有子节点的节点，含 `<br>` 这类空元素）
pub fn leaves<T: HostTree>(tree: &T, node: T::Node) -> Vec<T::Node> {
    let mut out = Vec::new();
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        let children = tree.children(current);
        if children.is_empty() {
            out.push(current);
        } else {
            stack.extend(children.iter().rev().copied());
        }
    }
    out
}

pub fn first_leaf<T: HostTree>(tree: &T, node: T::Node) -> T::Node {
    let mut current = node;
    while let Some(&child) = tree.children(current).first() {
        current = child;
    }
    current
}

/// 节点的逻辑文本：所有文本叶子按顺序拼接，格式化元素是透明的
pub fn text_content<T: HostTree>(tree: &T, node: T::Node) -> String {
    let mut content = String::new();
    for leaf in leaves(tree, node) {
        if let Some(NodeKind::Text(data)) = tree.kind(leaf) {
            content.push_str(data);
        }
    }
    content
}

pub fn is_inclusive_ancestor<T: HostTree>(tree: &T, ancestor: T::Node, node: T::Node) -> bool {
    let mut current = Some(node);
    while let Some(id) = current {
        if id == ancestor {
            return true;
        }
        current = tree.parent(id);
    }
    false
}

/// 从 `node` 向上，找到父节点为 `container` 的那一层祖先（可以是 `node` 自身）
pub fn child_of<T: HostTree>(tree: &T, container: T::Node, node: T::Node) -> Option<T::Node> {
    let mut current = node;
    loop {
        let parent = tree.parent(current)?;
        if parent == container {
            return Some(current);
        }
        current = parent;
    }
}

/// 在父节点的子节点中排在 `node` 之前的兄弟
pub fn preceding_siblings<T: HostTree>(tree: &T, node: T::Node) -> &[T::Node] {
    let Some(parent) = tree.parent(node) else {
        return &[];
    };
    let siblings = tree.children(parent);
    let index = siblings.iter().position(|&c| c == node).unwrap_or(0);
    &siblings[..index]
}

#[cfg(test)]
#[path = "../../tests/unit/ui/tree.rs"]
mod tests;
