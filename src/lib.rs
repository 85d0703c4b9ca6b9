//! lesson-editor - 课程页面内嵌代码编辑器的文本缓冲引擎
//!
//! 模块结构：
//! - models: 数据模型（SemanticPosition, History）
//! - kernel: 无界面的编辑器核心（状态、动作、副作用、服务端口与适配器）
//! - ui: 宿主 UI 树之上的基础设施（选区换算、行渲染、按键、崩溃保护）
//! - views: 视图层（CodeView）

pub mod kernel;
pub mod models;
pub mod ui;
pub mod views;
