//! 视图层模块
//!
//! - CodeView: 课程代码面板（源码编辑区 + 输出面板）

pub mod code;

pub use code::{CodeView, OutputView, SourceView};
