//! 宿主 UI 树之上的编辑器基础设施
//!
//! - dom: 内存中的宿主树实现
//! - tree: 通用遍历
//! - selection: 原生选区与语义位置的互换
//! - render: 源码与行节点的互换
//! - keys: 按键和弦
//! - protect: 回调崩溃保护

pub mod dom;
pub mod keys;
pub mod protect;
pub mod render;
pub mod selection;
pub mod tree;

pub use dom::{Document, NodeId};
pub use keys::{KeyCommand, Keys};
pub use protect::protect;
pub use render::{extract_source, render_source};
pub use selection::{capture, restore};
