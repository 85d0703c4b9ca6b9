//! 内存中的宿主树
//!
//! 以 slotmap 为节点池实现 `HostTree`，行为向浏览器的 contenteditable 靠拢：
//! - 删除含选区的节点后，选区折叠到被清空的父节点的 0 位置
//! - `type_text` 在选区处插入文本，如同原生输入

use slotmap::{new_key_type, SlotMap};

use crate::kernel::services::ports::{HostSelection, HostTree, NodeKind};
use crate::models::{utf16_len, utf16_offset_to_byte};

new_key_type! { pub struct NodeId; }

#[derive(Debug, Clone)]
enum NodeData {
    Element {
        tag: String,
        classes: Vec<String>,
        attributes: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn element(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            data: NodeData::Element {
                tag: tag.to_ascii_uppercase(),
                classes: Vec::new(),
                attributes: Vec::new(),
            },
            parent,
            children: Vec::new(),
        }
    }

    fn text(text: &str, parent: Option<NodeId>) -> Self {
        Self {
            data: NodeData::Text(text.to_string()),
            parent,
            children: Vec::new(),
        }
    }
}

pub struct Document {
    arena: SlotMap<NodeId, Node>,
    body: NodeId,
    selection: Option<HostSelection<NodeId>>,
}

impl Document {
    pub fn new() -> Self {
        let mut arena = SlotMap::with_key();
        let body = arena.insert(Node::element("body", None));
        Self {
            arena,
            body,
            selection: None,
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.arena.contains_key(node)
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        match &self.arena.get(node)?.data {
            NodeData::Element { tag, .. } => Some(tag),
            NodeData::Text(_) => None,
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.arena.get(node)?.data {
            NodeData::Element { attributes, .. } => attributes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            NodeData::Text(_) => None,
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        match self.arena.get(node).map(|n| &n.data) {
            Some(NodeData::Element { classes, .. }) => classes.iter().any(|c| c == class),
            _ => false,
        }
    }

    /// 按 class 查找唯一元素
    pub fn find_by_class(&self, class: &str) -> Option<NodeId> {
        let mut found = self
            .arena
            .keys()
            .filter(|&id| self.has_class(id, class));
        let first = found.next()?;
        match found.next() {
            Some(_) => None,
            None => Some(first),
        }
    }

    pub fn set_selection(&mut self, node: NodeId, offset: usize) {
        if self.arena.contains_key(node) {
            self.selection = Some(HostSelection { node, offset });
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// 在折叠的选区处输入文本，返回是否发生了修改
    pub fn type_text(&mut self, text: &str) -> bool {
        let Some(HostSelection { node, offset }) = self.selection else {
            return false;
        };
        let Some(anchor) = self.arena.get(node) else {
            return false;
        };
        let is_break = matches!(&anchor.data, NodeData::Element { tag, .. } if tag == "BR");
        let parent = anchor.parent;

        if let NodeData::Text(data) = &mut self.arena[node].data {
            let byte = utf16_offset_to_byte(data, offset);
            data.insert_str(byte, text);
            self.selection = Some(HostSelection {
                node,
                offset: offset + utf16_len(text),
            });
            return true;
        }

        let (target, index) = if is_break {
            // 在空行的占位 <br> 上输入：用文本替换它
            let Some(parent) = parent else {
                return false;
            };
            let index = self.child_index(parent, node).unwrap_or(0);
            self.remove_subtree(node);
            (parent, index)
        } else {
            let placeholder = self.arena[node]
                .children
                .iter()
                .copied()
                .find(|&c| self.tag(c) == Some("BR"));
            if let Some(br) = placeholder {
                self.remove_subtree(br);
            }
            (node, offset)
        };

        let text_node = self.insert_text_at(target, index, text);
        self.selection = Some(HostSelection {
            node: text_node,
            offset: utf16_len(text),
        });
        true
    }

    /// 删除选区前的一个字符（仅处理文本节点内的删除）
    pub fn delete_backward(&mut self) -> bool {
        let Some(HostSelection { node, offset }) = self.selection else {
            return false;
        };
        if offset == 0 {
            return false;
        }
        let Some(Node {
            data: NodeData::Text(data),
            ..
        }) = self.arena.get_mut(node)
        else {
            return false;
        };
        let end = utf16_offset_to_byte(data, offset);
        let Some(ch) = data[..end].chars().next_back() else {
            return false;
        };
        let start = end - ch.len_utf8();
        data.replace_range(start..end, "");
        self.selection = Some(HostSelection {
            node,
            offset: offset - ch.len_utf16(),
        });
        true
    }

    fn child_index(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.arena
            .get(parent)?
            .children
            .iter()
            .position(|&c| c == child)
    }

    fn insert_text_at(&mut self, parent: NodeId, index: usize, text: &str) -> NodeId {
        let id = self.arena.insert(Node::text(text, Some(parent)));
        let children = &mut self.arena[parent].children;
        let index = index.min(children.len());
        children.insert(index, id);
        id
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.arena.get(id).and_then(|n| n.parent);
        }
        false
    }

    fn remove_subtree(&mut self, node: NodeId) {
        let Some(parent) = self.arena.get(node).and_then(|n| n.parent) else {
            return;
        };
        if let Some(sel) = self.selection {
            if self.is_inclusive_ancestor(node, sel.node) {
                self.selection = Some(HostSelection {
                    node: parent,
                    offset: 0,
                });
            }
        }
        self.arena[parent].children.retain(|&c| c != node);

        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            if let Some(removed) = self.arena.remove(id) {
                stack.extend(removed.children);
            }
        }
    }

    fn append(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = self.arena.insert(node);
        if let Some(p) = self.arena.get_mut(parent) {
            p.children.push(id);
        }
        id
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl HostTree for Document {
    type Node = NodeId;

    fn kind(&self, node: NodeId) -> Option<NodeKind<'_>> {
        Some(match &self.arena.get(node)?.data {
            NodeData::Element { tag, .. } => NodeKind::Element(tag),
            NodeData::Text(text) => NodeKind::Text(text),
        })
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.arena.get(node)?.parent
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        self.arena
            .get(node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        self.append(parent, Node::element(tag, Some(parent)))
    }

    fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.append(parent, Node::text(text, Some(parent)))
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(Node {
            data: NodeData::Element { attributes, .. },
            ..
        }) = self.arena.get_mut(node)
        {
            match attributes.iter_mut().find(|(n, _)| n == name) {
                Some(attr) => attr.1 = value.to_string(),
                None => attributes.push((name.to_string(), value.to_string())),
            }
        }
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(Node {
            data: NodeData::Element { classes, .. },
            ..
        }) = self.arena.get_mut(node)
        {
            if !classes.iter().any(|c| c == class) {
                classes.push(class.to_string());
            }
        }
    }

    fn clear_children(&mut self, node: NodeId) {
        let children = self
            .arena
            .get(node)
            .map(|n| n.children.clone())
            .unwrap_or_default();
        for child in children {
            self.remove_subtree(child);
        }
    }

    fn selection(&self) -> Option<HostSelection<NodeId>> {
        self.selection.filter(|sel| self.arena.contains_key(sel.node))
    }

    fn collapse(&mut self, node: NodeId, offset: usize) {
        self.set_selection(node, offset);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/dom.rs"]
mod tests;
