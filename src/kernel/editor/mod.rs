//! 编辑器领域：无界面的状态、动作与纯文本变换

mod action;
mod edit;
mod reducer;
mod state;
mod syntax;

pub use action::EditorAction;
pub use edit::{insert_at_cursor, insert_tab, normalize_pasted, Edit};
pub use state::{same_source, EditorState, SourceState};
pub use syntax::{highlight_line, HighlightSpan};
