use crate::models::SemanticPosition;

/// 编辑器的输入动作。
///
/// 除 `SetContent`/`Undo`/`Redo`/`Run` 外，动作都携带视图刚从渲染树中取出的文本和光标。
#[derive(Debug, Clone)]
pub enum EditorAction {
    /// 载入新内容，不触发编译
    SetContent {
        text: String,
    },
    /// 宿主已经原生地修改了渲染树
    SourceChanged {
        text: String,
        position: Option<SemanticPosition>,
    },
    Paste {
        text: String,
        position: Option<SemanticPosition>,
        inserted: String,
    },
    InsertTab {
        text: String,
        position: Option<SemanticPosition>,
    },
    Undo,
    Redo,
    Run,
}
