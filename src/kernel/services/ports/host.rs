//! 宿主 UI 树契约
//!
//! 编辑器不依赖具体的 DOM 实现，只通过这里的原语读写渲染树和原生选区。
//! 选区偏移遵循 DOM 语义：锚点为文本节点时是 UTF-16 码元偏移，
//! 锚点为元素时是子节点下标。

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'a> {
    /// 元素节点，标签名为大写（`DIV`、`SPAN`、`BR`）
    Element(&'a str),
    Text(&'a str),
}

/// 折叠的原生选区（光标）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostSelection<N> {
    pub node: N,
    pub offset: usize,
}

pub trait HostTree {
    type Node: Copy + Eq + fmt::Debug;

    /// 节点已被移除时返回 `None`
    fn kind(&self, node: Self::Node) -> Option<NodeKind<'_>>;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    fn children(&self, node: Self::Node) -> &[Self::Node];

    fn append_element(&mut self, parent: Self::Node, tag: &str) -> Self::Node;

    fn append_text(&mut self, parent: Self::Node, text: &str) -> Self::Node;

    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);

    fn add_class(&mut self, node: Self::Node, class: &str);

    fn clear_children(&mut self, node: Self::Node);

    /// 当前选区；宿主报告没有活动的 range 时返回 `None`
    fn selection(&self) -> Option<HostSelection<Self::Node>>;

    /// 把选区折叠到 `node` 的 `offset` 处
    fn collapse(&mut self, node: Self::Node, offset: usize);
}
